use std::collections::HashMap;

use gpui::prelude::FluentBuilder;
use gpui::*;
use gpui_component::{Icon, IconName};
use tracing::{debug, info};

use arbor_core::agents::{AgentDirectory, AgentEntry};
use arbor_core::version::UpdateNotice;
use arbor_ui_core::ArborTheme;
use arbor_ui_core::actions::ToggleSidebar;
use arbor_ui_core::nav::{AgentView, ResourceLink};
use arbor_ui_core::sidebar::{
    Collapsible, SidebarLayout, SidebarMode, SidebarSide, SidebarVariant, SubMenuState,
};

use crate::components::{ToastKind, render_toast};
use crate::globals::{AppConfig, AppVersionCheck};
use crate::sidebar::{
    self, OpenChanged, SidebarOptions, SidebarProvider, SidebarSnapshot,
};

/// Root shell: hosts the sidebar provider, the navigation menu, the content
/// area, and the update toast.
pub struct ArborWorkspace {
    theme: ArborTheme,
    sidebar: Entity<SidebarProvider>,
    /// Currently selected (agent, view), if any.
    active: Option<(String, AgentView)>,
    /// Per-agent sub-menu flags. Each is its own small state machine,
    /// independent of the sidebar's collapse state.
    sub_menus: HashMap<String, SubMenuState>,
    /// `None` until the roster load completes; skeletons render meanwhile.
    agents: Option<Vec<AgentEntry>>,
    update_notice: Option<UpdateNotice>,
    update_toast_dismissed: bool,
    version: String,
    /// Focus handle for the workspace root div, so dispatched actions reach
    /// the root `.on_action()` handlers even when nothing else is focused.
    focus_handle: FocusHandle,
}

impl ArborWorkspace {
    pub fn new(cx: &mut Context<Self>) -> Self {
        let default_open = if cx.has_global::<AppConfig>() {
            cx.global::<AppConfig>().0.sidebar_default_open
        } else {
            true
        };

        let sidebar = cx.new(|_| {
            SidebarProvider::new(SidebarOptions {
                default_open: Some(default_open),
                open: None,
                layout: SidebarLayout {
                    side: SidebarSide::Left,
                    variant: SidebarVariant::Inset,
                    collapsible: Collapsible::Icon,
                },
            })
        });

        // Re-render whenever the coordination state changes.
        cx.observe(&sidebar, |_this, _provider, cx| {
            cx.notify();
        })
        .detach();

        cx.subscribe(&sidebar, |_this, _provider, event: &OpenChanged, _cx| {
            debug!("Sidebar open changed: {}", event.0);
        })
        .detach();

        // Load the roster off the construction path; skeletons show until it
        // lands.
        cx.spawn(async move |this, cx| {
            let roster = AgentDirectory::load();
            let _ = this.update(cx, |workspace, cx| {
                workspace.agents = Some(roster.agents);
                cx.notify();
            });
        })
        .detach();

        if cx.has_global::<AppVersionCheck>() {
            cx.observe_global::<AppVersionCheck>(|this, cx| {
                this.update_notice = cx.global::<AppVersionCheck>().0.available_update();
                cx.notify();
            })
            .detach();
        }

        Self {
            theme: ArborTheme::dark(),
            sidebar,
            active: None,
            sub_menus: HashMap::new(),
            agents: None,
            update_notice: None,
            update_toast_dismissed: false,
            version: String::new(),
            focus_handle: cx.focus_handle(),
        }
    }

    pub fn set_version(&mut self, version: String) {
        self.version = version;
    }

    /// Responsive-mode sync: runs at the top of every render pass, so the
    /// compact signal follows every breakpoint crossing.
    fn sync_responsive_mode(&mut self, window: &Window, cx: &mut Context<Self>) {
        let width = window.viewport_size().width;
        self.sidebar.update(cx, |provider, cx| {
            provider.sync_viewport_width(width, cx);
        });
    }

    fn handle_toggle_sidebar(
        &mut self,
        _: &ToggleSidebar,
        _window: &mut Window,
        cx: &mut Context<Self>,
    ) {
        self.sidebar.update(cx, |provider, cx| {
            provider.toggle_sidebar(cx);
        });
    }

    fn visible_update_notice(&self) -> Option<UpdateNotice> {
        if self.update_toast_dismissed {
            return None;
        }
        self.update_notice.clone()
    }

    // -- Sidebar -------------------------------------------------------------

    fn render_sidebar(&self, snapshot: SidebarSnapshot, cx: &mut Context<Self>) -> AnyElement {
        let handle = SidebarProvider::handle(&self.sidebar);
        let theme = &self.theme;

        // Collapsed to the icon rail: labels and nesting disappear.
        let iconized = !snapshot.compact
            && snapshot.layout.collapsible == Collapsible::Icon
            && snapshot.mode == SidebarMode::Collapsed;

        let header = sidebar::sidebar_header(theme)
            .child(
                div()
                    .flex()
                    .flex_shrink_0()
                    .items_center()
                    .justify_center()
                    .w(px(24.0))
                    .h(px(24.0))
                    .rounded(theme.radius_sm)
                    .bg(theme.accent_muted)
                    .text_size(theme.font_size_sm)
                    .text_color(theme.text_primary)
                    .child("A"),
            )
            .when(!iconized, |el| {
                el.child(
                    div()
                        .flex_1()
                        .text_size(theme.font_size_base)
                        .child("Arbor"),
                )
                .child(sidebar::sidebar_trigger(&handle, theme))
            });

        // -- Agents group ----------------------------------------------------
        let mut agents_menu = sidebar::sidebar_menu(theme);
        match &self.agents {
            None => {
                for _ in 0..3 {
                    agents_menu = agents_menu.child(sidebar::sidebar_menu_skeleton(iconized, theme));
                }
            }
            Some(agents) => {
                for agent in agents {
                    agents_menu = self.render_agent_entry(agents_menu, agent, iconized, cx);
                }
            }
        }

        let agent_count = self.agents.as_ref().map(|a| a.len()).unwrap_or(0);
        let group_suffix = div()
            .flex()
            .items_center()
            .gap(theme.space_1)
            .when(agent_count > 0, |el| {
                el.child(sidebar::sidebar_menu_badge(
                    agent_count.to_string(),
                    iconized,
                    theme,
                ))
            })
            .child(
                sidebar::sidebar_group_action("agents-refresh", IconName::Redo2, theme)
                    .on_mouse_down(
                        MouseButton::Left,
                        cx.listener(|this, _event, _window, cx| {
                            info!("Reloading agent roster");
                            this.agents = Some(AgentDirectory::load().agents);
                            cx.notify();
                        }),
                    ),
            )
            .into_any_element();

        let agents_group = sidebar::sidebar_group(theme)
            .child(sidebar::sidebar_group_label(
                "Agents",
                Some(group_suffix),
                iconized,
                theme,
            ))
            .child(sidebar::sidebar_group_content(theme).child(agents_menu));

        // -- Resources group -------------------------------------------------
        let mut resources_menu = sidebar::sidebar_menu(theme);
        for link in ResourceLink::ALL {
            resources_menu = resources_menu.child(
                sidebar::sidebar_menu_item(theme).child(
                    sidebar::sidebar_menu_button(
                        ElementId::Name(link.label().into()),
                        link.icon(),
                        link.label(),
                        Some("Docs"),
                        false,
                        iconized,
                        theme,
                    )
                    .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
                        cx.open_url(link.url());
                    }),
                ),
            );
        }

        let resources_group = sidebar::sidebar_group(theme)
            .child(sidebar::sidebar_group_label("Resources", None, iconized, theme))
            .child(sidebar::sidebar_group_content(theme).child(resources_menu));

        let content = sidebar::sidebar_content(theme)
            .child(agents_group)
            .child(sidebar::sidebar_separator(iconized, theme))
            .child(resources_group);

        let footer = sidebar::sidebar_footer(theme).when(!iconized, |el| {
            el.child(
                div()
                    .text_size(theme.font_size_xs)
                    .text_color(theme.text_muted)
                    .child(if self.version.is_empty() {
                        "dev build".to_string()
                    } else {
                        format!("v{}", self.version)
                    }),
            )
        });

        let children = vec![
            header.into_any_element(),
            content.into_any_element(),
            footer.into_any_element(),
        ];

        let frame = sidebar::render_sidebar_frame(&handle, snapshot, children, theme);

        // The grab rail only applies to the persistent panel.
        if snapshot.compact || snapshot.layout.collapsible == Collapsible::Fixed {
            frame
        } else {
            div()
                .flex()
                .h_full()
                .child(frame)
                .child(sidebar::sidebar_rail(&handle, theme))
                .into_any_element()
        }
    }

    fn render_agent_entry(
        &self,
        menu: Div,
        agent: &AgentEntry,
        iconized: bool,
        cx: &mut Context<Self>,
    ) -> Div {
        let theme = &self.theme;
        let sub_open = self
            .sub_menus
            .get(&agent.id)
            .copied()
            .unwrap_or_default()
            .open();

        let toggle_id = agent.id.clone();
        let sub_button = sidebar::sidebar_menu_sub_button(
            ElementId::Name(format!("agent-{}", agent.id).into()),
            IconName::Bot,
            &agent.name,
            sub_open,
            iconized,
            theme,
        )
        .on_mouse_down(
            MouseButton::Left,
            cx.listener(move |this, _event, _window, cx| {
                if iconized {
                    // No room for nesting on the icon rail; go straight to
                    // the agent's chat.
                    this.active = Some((toggle_id.clone(), AgentView::Chat));
                } else {
                    this.sub_menus.entry(toggle_id.clone()).or_default().toggle();
                }
                cx.notify();
            }),
        );

        let settings_id = agent.id.clone();
        let mut item = sidebar::sidebar_menu_item(theme).child(sub_button);
        if !iconized {
            item = item.child(
                sidebar::sidebar_menu_action(
                    ElementId::Name(format!("agent-{}-quick-settings", agent.id).into()),
                    IconName::Settings,
                    theme,
                )
                .on_mouse_down(
                    MouseButton::Left,
                    cx.listener(move |this, _event, _window, cx| {
                        this.active = Some((settings_id.clone(), AgentView::Settings));
                        cx.notify();
                    }),
                ),
            );
        }

        let mut menu = menu.child(item);

        if sub_open && !iconized {
            let mut sub_content = sidebar::sidebar_menu_sub_content(iconized, theme);
            for view in AgentView::ALL {
                let active = self
                    .active
                    .as_ref()
                    .is_some_and(|(id, v)| id == &agent.id && *v == view);
                let select_id = agent.id.clone();
                sub_content = sub_content.child(
                    sidebar::sidebar_menu_sub_item(theme).child(
                        sidebar::sidebar_menu_button(
                            ElementId::Name(
                                format!("agent-{}-{}", agent.id, view.label()).into(),
                            ),
                            view.icon(),
                            view.label(),
                            Some(view.label()),
                            active,
                            iconized,
                            theme,
                        )
                        .on_mouse_down(
                            MouseButton::Left,
                            cx.listener(move |this, _event, _window, cx| {
                                info!("Nav: {} / {}", select_id, view.label());
                                this.active = Some((select_id.clone(), view));
                                // Selecting inside the compact overlay is a
                                // dismiss gesture.
                                this.sidebar.update(cx, |provider, cx| {
                                    if provider.compact() {
                                        provider.set_open_mobile(false, cx);
                                    }
                                });
                                cx.notify();
                            }),
                        ),
                    ),
                );
            }
            menu = menu.child(sub_content);
        }

        menu
    }

    // -- Content -------------------------------------------------------------

    fn render_content(&self, snapshot: SidebarSnapshot) -> AnyElement {
        let theme = &self.theme;
        let handle = SidebarProvider::handle(&self.sidebar);

        let top_bar = div()
            .flex()
            .items_center()
            .gap(theme.space_2)
            .h(px(44.0))
            .px(theme.space_3)
            .border_b_1()
            .border_color(theme.border)
            .child(sidebar::sidebar_trigger(&handle, theme))
            .child(
                div()
                    .text_size(theme.font_size_sm)
                    .text_color(theme.text_secondary)
                    .child(self.breadcrumb()),
            );

        let body = match &self.active {
            None => self.render_welcome(),
            Some((agent_id, view)) => self.render_agent_view(agent_id, *view),
        };

        sidebar::sidebar_inset(snapshot.layout.variant, theme)
            .child(top_bar)
            .child(body)
            .into_any_element()
    }

    fn breadcrumb(&self) -> String {
        match &self.active {
            None => "Home".to_string(),
            Some((agent_id, view)) => {
                format!("{} / {}", self.agent_name(agent_id), view.label())
            }
        }
    }

    fn agent_name(&self, agent_id: &str) -> String {
        self.agents
            .as_ref()
            .and_then(|agents| agents.iter().find(|a| a.id == agent_id))
            .map(|a| a.name.clone())
            .unwrap_or_else(|| agent_id.to_string())
    }

    fn render_welcome(&self) -> AnyElement {
        let theme = &self.theme;

        #[cfg(target_os = "macos")]
        let shortcut_hint = "Toggle the sidebar with \u{2318}B.";
        #[cfg(not(target_os = "macos"))]
        let shortcut_hint = "Toggle the sidebar with Ctrl+B.";

        div()
            .flex()
            .flex_col()
            .flex_1()
            .items_center()
            .justify_center()
            .gap(theme.space_2)
            .child(
                div()
                    .text_size(theme.font_size_xl)
                    .text_color(theme.text_primary)
                    .child("Arbor"),
            )
            .child(
                div()
                    .text_size(theme.font_size_sm)
                    .text_color(theme.text_muted)
                    .child("Select an agent to get started."),
            )
            .child(
                div()
                    .text_size(theme.font_size_xs)
                    .text_color(theme.text_muted)
                    .child(shortcut_hint),
            )
            .into_any_element()
    }

    fn render_agent_view(&self, agent_id: &str, view: AgentView) -> AnyElement {
        let theme = &self.theme;
        let name = self.agent_name(agent_id);

        let description = match view {
            AgentView::Chat => format!("Start a conversation with {name}."),
            AgentView::Memories => format!("Everything {name} has remembered so far."),
            AgentView::Settings => format!("Configure {name}'s behavior and model."),
        };

        div()
            .flex()
            .flex_col()
            .flex_1()
            .gap(theme.space_2)
            .p(theme.space_6)
            .child(
                div()
                    .text_size(theme.font_size_lg)
                    .text_color(theme.text_primary)
                    .child(format!("{name} \u{2014} {}", view.label())),
            )
            .child(
                div()
                    .text_size(theme.font_size_sm)
                    .text_color(theme.text_muted)
                    .child(description),
            )
            .into_any_element()
    }

    // -- Update toast --------------------------------------------------------

    fn render_update_toast(&self, cx: &mut Context<Self>) -> Option<AnyElement> {
        let notice = self.visible_update_notice()?;
        let theme = &self.theme;

        let release_url = notice.release_url.clone();
        let view_release = div()
            .id("update-toast-open")
            .cursor_pointer()
            .text_size(theme.font_size_sm)
            .text_color(theme.accent)
            .hover(|s| s.text_color(theme.accent_green))
            .on_mouse_down(MouseButton::Left, move |_event, _window, cx| {
                cx.open_url(&release_url);
            })
            .child("View release")
            .into_any_element();

        let dismiss = div()
            .id("update-toast-dismiss")
            .flex()
            .items_center()
            .justify_center()
            .w(px(22.0))
            .h(px(22.0))
            .rounded(theme.radius_sm)
            .cursor_pointer()
            .hover(|s| s.bg(theme.bg_tertiary))
            .on_mouse_down(
                MouseButton::Left,
                cx.listener(|this, _event, _window, cx| {
                    this.update_toast_dismissed = true;
                    cx.notify();
                }),
            )
            .child(Icon::new(IconName::Close).size_3p5().text_color(theme.text_muted))
            .into_any_element();

        let bar = render_toast(
            ToastKind::Info,
            &format!("New version v{} is available.", notice.version),
            Some("Visit GitHub for more information."),
            vec![view_release, dismiss],
            theme,
        );

        Some(
            div()
                .absolute()
                .bottom(theme.space_4)
                .right(theme.space_4)
                .w(px(380.0))
                .occlude()
                .child(bar)
                .into_any_element(),
        )
    }
}

impl Render for ArborWorkspace {
    fn render(&mut self, window: &mut Window, cx: &mut Context<Self>) -> impl IntoElement {
        self.sync_responsive_mode(window, cx);

        let snapshot = self.sidebar.read(cx).snapshot();
        let sidebar_el = self.render_sidebar(snapshot, cx);
        let content_el = self.render_content(snapshot);
        let toast_el = self.render_update_toast(cx);

        let theme = &self.theme;

        let body = match snapshot.layout.side {
            SidebarSide::Left => div()
                .flex()
                .flex_1()
                .overflow_hidden()
                .child(sidebar_el)
                .child(content_el),
            SidebarSide::Right => div()
                .flex()
                .flex_1()
                .overflow_hidden()
                .child(content_el)
                .child(sidebar_el),
        };

        div()
            .id("workspace-root")
            .track_focus(&self.focus_handle)
            .relative()
            .size_full()
            .flex()
            .flex_col()
            .bg(theme.bg_primary)
            .text_color(theme.text_primary)
            .font_family(theme.font_ui.clone())
            .on_action(cx.listener(Self::handle_toggle_sidebar))
            .child(body)
            .when_some(toast_el, |el, toast| el.child(toast))
    }
}
