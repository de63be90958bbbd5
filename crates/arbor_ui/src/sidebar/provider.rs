//! The sidebar provider: the entity that owns the coordination state.
//!
//! Descendant primitives never touch the state directly. They hold a
//! [`SidebarHandle`] -- an explicit, non-optional constructor dependency --
//! and request mutation through it. The provider is the only writer: it
//! funnels every change through the pure [`SidebarCoordinator`], mirrors
//! open/closed changes to the durable store, and emits [`OpenChanged`] for
//! controlled consumers.

use gpui::*;
use tracing::debug;

use arbor_core::SidebarStateStore;
use arbor_ui_core::sidebar::{
    COMPACT_BREAKPOINT, SidebarCoordinator, SidebarLayout, SidebarMode, SidebarToggle,
};

/// Consumer-supplied configuration, fixed for the provider's lifetime.
#[derive(Debug, Clone, Copy, Default)]
pub struct SidebarOptions {
    /// Open/closed default applied when no controlled value and no valid
    /// persisted flag exist. `None` means open.
    pub default_open: Option<bool>,
    /// Controlled override: when set, the consumer owns the open/closed
    /// value and must feed it back via [`SidebarProvider::sync_open`] in
    /// response to [`OpenChanged`].
    pub open: Option<bool>,
    pub layout: SidebarLayout,
}

/// Emitted whenever an open/closed change resolves. Uncontrolled providers
/// have already applied the value; controlled consumers apply it themselves
/// and sync it back.
#[derive(Debug, Clone, Copy)]
pub struct OpenChanged(pub bool);

/// Immutable view of the coordination state for render code.
#[derive(Debug, Clone, Copy)]
pub struct SidebarSnapshot {
    pub mode: SidebarMode,
    pub open_mobile: bool,
    pub compact: bool,
    pub layout: SidebarLayout,
}

pub struct SidebarProvider {
    coordinator: SidebarCoordinator,
    layout: SidebarLayout,
}

impl EventEmitter<OpenChanged> for SidebarProvider {}

/// Pick the initial open/closed authority: controlled prop > valid
/// persisted flag > `default_open` (open when unspecified).
pub fn seed_coordinator(
    open: Option<bool>,
    persisted: Option<bool>,
    default_open: Option<bool>,
) -> SidebarCoordinator {
    match open {
        Some(open) => SidebarCoordinator::controlled(open),
        None => SidebarCoordinator::uncontrolled(persisted.unwrap_or(default_open.unwrap_or(true))),
    }
}

impl SidebarProvider {
    pub fn new(options: SidebarOptions) -> Self {
        let coordinator =
            seed_coordinator(options.open, SidebarStateStore::load(), options.default_open);
        Self {
            coordinator,
            layout: options.layout,
        }
    }

    /// The explicit handle descendants are constructed with.
    pub fn handle(entity: &Entity<Self>) -> SidebarHandle {
        SidebarHandle {
            provider: entity.downgrade(),
        }
    }

    pub fn layout(&self) -> SidebarLayout {
        self.layout
    }

    pub fn mode(&self) -> SidebarMode {
        self.coordinator.mode()
    }

    pub fn open(&self) -> bool {
        self.coordinator.open()
    }

    pub fn open_mobile(&self) -> bool {
        self.coordinator.open_mobile()
    }

    pub fn compact(&self) -> bool {
        self.coordinator.compact()
    }

    pub fn snapshot(&self) -> SidebarSnapshot {
        SidebarSnapshot {
            mode: self.coordinator.mode(),
            open_mobile: self.coordinator.open_mobile(),
            compact: self.coordinator.compact(),
            layout: self.layout,
        }
    }

    /// Resolve a new open/closed value, mirror it to the durable store, and
    /// report it to controlled consumers.
    pub fn set_open(&mut self, next: bool, cx: &mut Context<Self>) {
        let resolved = self.coordinator.set_open(next);
        self.after_open_change(resolved, cx);
    }

    /// Functional-update form of [`Self::set_open`], resolved against the
    /// current visible value.
    pub fn set_open_with(&mut self, f: impl FnOnce(bool) -> bool, cx: &mut Context<Self>) {
        let resolved = self.coordinator.set_open_with(f);
        self.after_open_change(resolved, cx);
    }

    /// Set the compact-mode overlay flag. Ephemeral: no persistence, no
    /// `OpenChanged`.
    pub fn set_open_mobile(&mut self, next: bool, cx: &mut Context<Self>) {
        self.coordinator.set_open_mobile(next);
        cx.notify();
    }

    /// Functional-update form of [`Self::set_open_mobile`].
    pub fn set_open_mobile_with(&mut self, f: impl FnOnce(bool) -> bool, cx: &mut Context<Self>) {
        self.coordinator.set_open_mobile_with(f);
        cx.notify();
    }

    /// Invert whichever flag drives the visible state right now.
    pub fn toggle_sidebar(&mut self, cx: &mut Context<Self>) {
        match self.coordinator.toggle_sidebar() {
            SidebarToggle::Open(resolved) => self.after_open_change(resolved, cx),
            SidebarToggle::Mobile(open) => {
                debug!("Sidebar overlay {}", if open { "opened" } else { "dismissed" });
                cx.notify();
            }
        }
    }

    /// Controlled consumers feed the authoritative prop back in here.
    pub fn sync_open(&mut self, open: bool, cx: &mut Context<Self>) {
        if self.coordinator.is_controlled() && self.coordinator.open() != open {
            self.coordinator.sync_open(open);
            cx.notify();
        }
    }

    /// Responsive-mode sync, called by the shell at render time. GPUI
    /// re-renders on resize, so this observes every breakpoint crossing.
    pub fn sync_viewport_width(&mut self, width: Pixels, cx: &mut Context<Self>) {
        let compact = width < px(COMPACT_BREAKPOINT);
        if compact != self.coordinator.compact() {
            debug!("Viewport crossed breakpoint, compact = {compact}");
            self.coordinator.set_compact(compact);
            cx.notify();
        }
    }

    fn after_open_change(&mut self, resolved: bool, cx: &mut Context<Self>) {
        SidebarStateStore::save(resolved);
        cx.emit(OpenChanged(resolved));
        cx.notify();
    }
}

/// Non-owning reference to a [`SidebarProvider`], passed explicitly to every
/// primitive that reflects or mutates shared sidebar state.
///
/// Resolving the handle after the provider has been dropped is a programmer
/// error and panics immediately -- it is never silently defaulted.
#[derive(Clone)]
pub struct SidebarHandle {
    provider: WeakEntity<SidebarProvider>,
}

impl SidebarHandle {
    fn resolve(&self) -> Entity<SidebarProvider> {
        self.provider
            .upgrade()
            .expect("SidebarHandle used outside a live SidebarProvider")
    }

    pub fn read<'a>(&self, cx: &'a App) -> &'a SidebarProvider {
        self.resolve().read(cx)
    }

    pub fn snapshot(&self, cx: &App) -> SidebarSnapshot {
        self.read(cx).snapshot()
    }

    pub fn update<R>(
        &self,
        cx: &mut App,
        f: impl FnOnce(&mut SidebarProvider, &mut Context<SidebarProvider>) -> R,
    ) -> R {
        self.resolve().update(cx, f)
    }

    pub fn toggle(&self, cx: &mut App) {
        self.update(cx, |provider, cx| provider.toggle_sidebar(cx));
    }

    pub fn set_open_mobile(&self, open: bool, cx: &mut App) {
        self.update(cx, |provider, cx| provider.set_open_mobile(open, cx));
    }
}
