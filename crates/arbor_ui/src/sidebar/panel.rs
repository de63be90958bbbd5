//! Structural layouts for the sidebar panel.
//!
//! One of three layouts renders, decided by [`SidebarLayoutKind::classify`]:
//! a non-collapsible fixed panel, a compact-mode off-canvas overlay bound to
//! the `open_mobile` flag, or the persistent panel whose width follows the
//! open/closed mode. Which layout applies is state-machine territory; how it
//! looks is not.

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{Icon, IconName};

use arbor_ui_core::ArborTheme;
use arbor_ui_core::sidebar::{
    Collapsible, SIDEBAR_WIDTH, SIDEBAR_WIDTH_ICON, SIDEBAR_WIDTH_MOBILE, SidebarLayout,
    SidebarLayoutKind, SidebarMode, SidebarSide, SidebarVariant,
};

use super::provider::{SidebarHandle, SidebarSnapshot};

/// Render the sidebar frame around the supplied header/content/footer
/// children. The caller places the result inside a full-size container; the
/// overlay layout positions itself absolutely against that container.
pub fn render_sidebar_frame(
    handle: &SidebarHandle,
    snapshot: SidebarSnapshot,
    children: Vec<AnyElement>,
    theme: &ArborTheme,
) -> AnyElement {
    match SidebarLayoutKind::classify(snapshot.compact, snapshot.layout.collapsible) {
        SidebarLayoutKind::FixedPanel => fixed_panel(snapshot.layout, children, theme),
        SidebarLayoutKind::Overlay => {
            overlay(handle, snapshot.layout, snapshot.open_mobile, children, theme)
        }
        SidebarLayoutKind::Panel => panel(snapshot.layout, snapshot.mode, children, theme),
    }
}

/// `Collapsible::Fixed`: the full panel, independent of coordination state.
fn fixed_panel(layout: SidebarLayout, children: Vec<AnyElement>, theme: &ArborTheme) -> AnyElement {
    chrome(
        div().id("sidebar").h_full().w(px(SIDEBAR_WIDTH)),
        layout,
        theme,
    )
    .children(children)
    .into_any_element()
}

/// Compact mode: a dismissible overlay. Closed, only the floating trigger
/// renders; open, a backdrop plus the panel. Every dismiss gesture routes
/// through `set_open_mobile(false)`.
fn overlay(
    handle: &SidebarHandle,
    layout: SidebarLayout,
    open_mobile: bool,
    children: Vec<AnyElement>,
    theme: &ArborTheme,
) -> AnyElement {
    if !open_mobile {
        let open_handle = handle.clone();
        return div()
            .id("sidebar-mobile-trigger")
            .absolute()
            .top(theme.space_4)
            .left(theme.space_4)
            .flex()
            .items_center()
            .justify_center()
            .w(px(32.0))
            .h(px(32.0))
            .rounded(theme.radius_md)
            .bg(theme.bg_surface)
            .border_1()
            .border_color(theme.border)
            .cursor_pointer()
            .hover(|s| s.bg(theme.bg_tertiary))
            .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
                open_handle.set_open_mobile(true, cx);
            })
            .child(Icon::new(IconName::Menu).size_4().text_color(theme.text_secondary))
            .into_any_element();
    }

    let dismiss_handle = handle.clone();
    let backdrop = div()
        .id("sidebar-overlay-backdrop")
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .bg(theme.bg_overlay)
        .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
            dismiss_handle.set_open_mobile(false, cx);
        });

    let panel = div()
        .id("sidebar-overlay-panel")
        .absolute()
        .top_0()
        .h_full()
        .w(px(SIDEBAR_WIDTH_MOBILE))
        .map(|el| match layout.side {
            SidebarSide::Left => el.left_0().border_r_1(),
            SidebarSide::Right => el.right_0().border_l_1(),
        })
        .border_color(theme.border)
        .flex()
        .flex_col()
        .bg(theme.bg_secondary)
        .occlude()
        .children(children);

    div()
        .id("sidebar-overlay")
        .absolute()
        .top_0()
        .left_0()
        .size_full()
        .child(backdrop)
        .child(panel)
        .into_any_element()
}

/// Non-compact mode: the persistent panel. `OffCanvas` collapses it away
/// entirely; `Icon` narrows it to the icon rail.
fn panel(
    layout: SidebarLayout,
    mode: SidebarMode,
    children: Vec<AnyElement>,
    theme: &ArborTheme,
) -> AnyElement {
    let collapsed = mode == SidebarMode::Collapsed;

    if collapsed && layout.collapsible == Collapsible::OffCanvas {
        // Width collapses to nothing; the panel stays out of the layout.
        return div().id("sidebar").into_any_element();
    }

    let width = if collapsed { SIDEBAR_WIDTH_ICON } else { SIDEBAR_WIDTH };
    chrome(div().id("sidebar").h_full().w(px(width)), layout, theme)
        .children(children)
        .into_any_element()
}

/// Shared panel chrome: flex column, background, and the variant treatment
/// (plain edge border vs. floating/inset card).
fn chrome(el: Stateful<Div>, layout: SidebarLayout, theme: &ArborTheme) -> Stateful<Div> {
    el.flex()
        .flex_col()
        .bg(theme.bg_secondary)
        .map(|el| match layout.variant {
            SidebarVariant::Plain => el
                .map(|el| match layout.side {
                    SidebarSide::Left => el.border_r_1(),
                    SidebarSide::Right => el.border_l_1(),
                })
                .border_color(theme.border),
            SidebarVariant::Floating | SidebarVariant::Inset => el
                .m(theme.space_2)
                .rounded(theme.radius_md)
                .border_1()
                .border_color(theme.border),
        })
}
