//! The sidebar menu primitive set.
//!
//! Stateless builders in the component-function style: each returns a `Div`
//! the caller composes and, where interactive, attaches its own listeners
//! to. Pure layout primitives (header, group, separator, ...) take no
//! coordination handle; anything reflecting interactive sidebar state takes
//! either the handle or the values read through it.

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{Icon, IconName};

use arbor_ui_core::ArborTheme;
use arbor_ui_core::sidebar::SidebarVariant;

use super::provider::SidebarHandle;

// -- Structure ---------------------------------------------------------------

/// Top section of the panel: logo / title / trigger row.
pub fn sidebar_header(theme: &ArborTheme) -> Div {
    div()
        .flex()
        .items_center()
        .gap(theme.space_2)
        .h(px(52.0))
        .px(theme.space_3)
        .flex_shrink_0()
}

/// Bottom section of the panel.
pub fn sidebar_footer(theme: &ArborTheme) -> Div {
    div()
        .flex()
        .items_center()
        .gap(theme.space_2)
        .h(px(44.0))
        .px(theme.space_3)
        .flex_shrink_0()
        .border_t_1()
        .border_color(theme.border)
}

/// Scrollable middle section holding the groups.
pub fn sidebar_content(theme: &ArborTheme) -> Div {
    div()
        .flex()
        .flex_col()
        .flex_1()
        .gap(theme.space_2)
        .overflow_hidden()
        .px(theme.space_2)
        .py(theme.space_2)
}

/// A titled cluster of menu entries.
pub fn sidebar_group(theme: &ArborTheme) -> Div {
    div().relative().flex().flex_col().gap(theme.space_1)
}

/// Group heading. Hidden on the icon rail; `suffix` lands right-aligned
/// (badge, action).
pub fn sidebar_group_label(
    text: &str,
    suffix: Option<AnyElement>,
    iconized: bool,
    theme: &ArborTheme,
) -> Div {
    if iconized {
        return div();
    }
    div()
        .flex()
        .items_center()
        .justify_between()
        .gap(theme.space_2)
        .h(px(28.0))
        .px(theme.space_2)
        .text_size(theme.font_size_xs)
        .text_color(theme.text_muted)
        .child(text.to_uppercase())
        .when_some(suffix, |el, suffix| el.child(suffix))
}

pub fn sidebar_group_content(theme: &ArborTheme) -> Div {
    div().flex().flex_col().gap(theme.space_1)
}

/// Small icon button attached to a group heading. Caller wires the click.
pub fn sidebar_group_action(
    id: impl Into<ElementId>,
    icon: IconName,
    theme: &ArborTheme,
) -> Stateful<Div> {
    div()
        .id(id)
        .flex()
        .items_center()
        .justify_center()
        .w(px(22.0))
        .h(px(22.0))
        .rounded(theme.radius_sm)
        .cursor_pointer()
        .hover(|s| s.bg(theme.bg_tertiary))
        .child(Icon::new(icon).size_3p5().text_color(theme.text_muted))
}

/// Horizontal rule between groups. Hidden on the icon rail.
pub fn sidebar_separator(iconized: bool, theme: &ArborTheme) -> Div {
    if iconized {
        return div();
    }
    div()
        .h(px(1.0))
        .mx(theme.space_2)
        .my(theme.space_1)
        .bg(theme.border)
}

/// Main-content container beside the panel. The inset variant floats the
/// content on a card of its own.
pub fn sidebar_inset(variant: SidebarVariant, theme: &ArborTheme) -> Div {
    div()
        .flex()
        .flex_col()
        .flex_1()
        .overflow_hidden()
        .bg(theme.bg_primary)
        .when(variant == SidebarVariant::Inset, |el| {
            el.m(theme.space_2)
                .rounded(theme.radius_md)
                .border_1()
                .border_color(theme.border)
                .bg(theme.bg_surface)
        })
}

// -- Menu --------------------------------------------------------------------

pub fn sidebar_menu(theme: &ArborTheme) -> Div {
    div().flex().flex_col().gap(theme.space_1)
}

pub fn sidebar_menu_item(_theme: &ArborTheme) -> Div {
    div().relative().flex().items_center().w_full()
}

/// The workhorse row: icon + label, active highlight, hover state. On the
/// icon rail the label is dropped and the `tooltip` hint becomes the compact
/// caption under the icon. Caller attaches the click listener.
pub fn sidebar_menu_button(
    id: impl Into<ElementId>,
    icon: IconName,
    label: &str,
    tooltip: Option<&str>,
    active: bool,
    iconized: bool,
    theme: &ArborTheme,
) -> Stateful<Div> {
    let text_color = if active { theme.accent } else { theme.text_secondary };
    let base = div()
        .id(id)
        .w_full()
        .rounded(theme.radius_sm)
        .cursor_pointer()
        .when(active, |el| el.bg(theme.bg_tertiary))
        .hover(|s| s.bg(theme.bg_tertiary));

    if iconized {
        base.flex()
            .flex_col()
            .items_center()
            .justify_center()
            .py(theme.space_1)
            .gap(px(2.0))
            .child(Icon::new(icon).size_4().text_color(text_color))
            .when_some(tooltip, |el, hint| {
                el.child(
                    div()
                        .text_size(theme.font_size_xs)
                        .text_color(theme.text_muted)
                        .overflow_hidden()
                        .child(hint.to_string()),
                )
            })
    } else {
        base.flex()
            .items_center()
            .gap(theme.space_2)
            .h(px(32.0))
            .px(theme.space_2)
            .child(Icon::new(icon).size_4().text_color(text_color))
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .text_size(theme.font_size_sm)
                    .text_color(text_color)
                    .child(label.to_string()),
            )
    }
}

/// Right-aligned counter/tag on a menu row. Hidden on the icon rail.
pub fn sidebar_menu_badge(text: impl Into<SharedString>, iconized: bool, theme: &ArborTheme) -> Div {
    if iconized {
        return div();
    }
    div()
        .flex()
        .items_center()
        .px(theme.space_1)
        .rounded(theme.radius_sm)
        .bg(theme.bg_tertiary)
        .text_size(theme.font_size_xs)
        .text_color(theme.text_muted)
        .child(text.into())
}

/// Hover-revealed secondary action on a menu row. Caller wires the click.
pub fn sidebar_menu_action(
    id: impl Into<ElementId>,
    icon: IconName,
    theme: &ArborTheme,
) -> Stateful<Div> {
    div()
        .id(id)
        .absolute()
        .right(theme.space_1)
        .flex()
        .items_center()
        .justify_center()
        .w(px(22.0))
        .h(px(22.0))
        .rounded(theme.radius_sm)
        .cursor_pointer()
        .hover(|s| s.bg(theme.bg_tertiary))
        .child(Icon::new(icon).size_3p5().text_color(theme.text_muted))
}

/// Placeholder row while menu data loads.
pub fn sidebar_menu_skeleton(iconized: bool, theme: &ArborTheme) -> Div {
    let block = |w: Length| {
        div()
            .h(px(12.0))
            .w(w)
            .rounded(theme.radius_sm)
            .bg(theme.bg_tertiary)
    };
    div()
        .flex()
        .items_center()
        .gap(theme.space_2)
        .h(px(32.0))
        .px(theme.space_2)
        .child(block(px(16.0).into()))
        .when(!iconized, |el| el.child(block(relative(1.0).into())))
}

// -- Sub-menu ----------------------------------------------------------------

/// Header row of a collapsible sub-menu. The chevron reflects the sub-menu's
/// own open flag, which is independent of the sidebar's collapse state.
/// Caller attaches the toggle listener.
pub fn sidebar_menu_sub_button(
    id: impl Into<ElementId>,
    icon: IconName,
    label: &str,
    open: bool,
    iconized: bool,
    theme: &ArborTheme,
) -> Stateful<Div> {
    let chevron = if open { IconName::ChevronDown } else { IconName::ChevronRight };
    let base = div()
        .id(id)
        .w_full()
        .rounded(theme.radius_sm)
        .cursor_pointer()
        .hover(|s| s.bg(theme.bg_tertiary));

    if iconized {
        base.flex()
            .items_center()
            .justify_center()
            .py(theme.space_1)
            .child(Icon::new(icon).size_4().text_color(theme.text_secondary))
    } else {
        base.flex()
            .items_center()
            .gap(theme.space_2)
            .h(px(32.0))
            .px(theme.space_2)
            .child(Icon::new(icon).size_4().text_color(theme.text_secondary))
            .child(
                div()
                    .flex_1()
                    .overflow_hidden()
                    .text_size(theme.font_size_sm)
                    .text_color(theme.text_secondary)
                    .child(label.to_string()),
            )
            .child(Icon::new(chevron).size_3p5().text_color(theme.text_muted))
    }
}

/// Indented container for sub-menu children. Hidden on the icon rail, where
/// there is no room for nesting.
pub fn sidebar_menu_sub_content(iconized: bool, theme: &ArborTheme) -> Div {
    if iconized {
        return div();
    }
    div()
        .flex()
        .flex_col()
        .gap(theme.space_1)
        .py(theme.space_1)
        .pl(theme.space_6)
}

pub fn sidebar_menu_sub_item(_theme: &ArborTheme) -> Div {
    div().relative().flex().items_center().w_full()
}

// -- Controls ----------------------------------------------------------------

/// The in-panel toggle button. Goes through the handle exclusively.
pub fn sidebar_trigger(handle: &SidebarHandle, theme: &ArborTheme) -> Stateful<Div> {
    let handle = handle.clone();
    div()
        .id("sidebar-trigger")
        .flex()
        .items_center()
        .justify_center()
        .w(px(28.0))
        .h(px(28.0))
        .rounded(theme.radius_sm)
        .cursor_pointer()
        .hover(|s| s.bg(theme.bg_tertiary))
        .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
            handle.toggle(cx);
        })
        .child(Icon::new(IconName::PanelLeft).size_4().text_color(theme.text_secondary))
}

/// The slim grab strip along the panel edge; clicking it toggles the
/// sidebar.
pub fn sidebar_rail(handle: &SidebarHandle, theme: &ArborTheme) -> Stateful<Div> {
    let handle = handle.clone();
    div()
        .id("sidebar-rail")
        .w(px(6.0))
        .h_full()
        .flex_shrink_0()
        .cursor_pointer()
        .hover(|s| s.bg(theme.border))
        .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
            handle.toggle(cx);
        })
}
