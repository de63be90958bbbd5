use gpui::*;
use gpui_component::{Icon, IconName};

use arbor_ui_core::ArborTheme;

/// Visual severity of a toast notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Warning,
    Error,
}

impl ToastKind {
    fn icon(self) -> IconName {
        match self {
            Self::Info => IconName::Info,
            Self::Success => IconName::CircleCheck,
            Self::Warning => IconName::TriangleAlert,
            Self::Error => IconName::CircleX,
        }
    }

    fn color(self, theme: &ArborTheme) -> Hsla {
        match self {
            Self::Info => theme.accent,
            Self::Success => theme.accent_green,
            Self::Warning => theme.accent_yellow,
            Self::Error => theme.accent_red,
        }
    }

    fn bg(self, theme: &ArborTheme) -> Hsla {
        let mut color = self.color(theme);
        color.a = 0.12;
        color
    }
}

/// Render a toast bar: icon + title + optional detail line, with a slot for
/// trailing actions (dismiss button, link) supplied by the caller.
pub fn render_toast(
    kind: ToastKind,
    title: &str,
    detail: Option<&str>,
    trailing: Vec<AnyElement>,
    theme: &ArborTheme,
) -> Div {
    let accent = kind.color(theme);

    let mut text = div()
        .flex()
        .flex_col()
        .child(
            div()
                .text_size(theme.font_size_sm)
                .text_color(theme.text_primary)
                .child(title.to_string()),
        );
    if let Some(detail) = detail {
        text = text.child(
            div()
                .text_size(theme.font_size_xs)
                .text_color(theme.text_muted)
                .child(detail.to_string()),
        );
    }

    div()
        .flex()
        .items_center()
        .justify_between()
        .gap(theme.space_3)
        .w_full()
        .px(theme.space_4)
        .py(theme.space_2)
        .bg(kind.bg(theme))
        .border_l_4()
        .border_color(accent)
        .rounded(theme.radius_md)
        .child(
            div()
                .flex()
                .items_center()
                .gap(theme.space_2)
                .child(Icon::new(kind.icon()).size_4().text_color(accent))
                .child(text),
        )
        .child(div().flex().items_center().gap(theme.space_2).children(trailing))
}

// Note: GPUI component tests require a running application context; visual
// components are exercised through `cargo check` and the running app.
