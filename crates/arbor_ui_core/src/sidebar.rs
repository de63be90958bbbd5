//! Coordination state for the collapsible sidebar.
//!
//! This module is the single source of truth for open/closed/mobile-open
//! state. It is deliberately free of GPUI types: the provider entity in
//! `arbor_ui` wraps a [`SidebarCoordinator`] and forwards every mutation
//! through it, so all state-machine contracts are testable without a
//! windowing context.

/// Width of the expanded sidebar panel, in pixels. Published for descendant
/// styling together with [`SIDEBAR_WIDTH_ICON`].
pub const SIDEBAR_WIDTH: f32 = 256.0;

/// Width of the compact-mode overlay panel, in pixels.
pub const SIDEBAR_WIDTH_MOBILE: f32 = 288.0;

/// Width of the icon rail when collapsed with `Collapsible::Icon`.
pub const SIDEBAR_WIDTH_ICON: f32 = 48.0;

/// Viewport widths below this are compact mode.
pub const COMPACT_BREAKPOINT: f32 = 768.0;

/// Open/closed state of the persistent (non-compact) panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarMode {
    Expanded,
    Collapsed,
}

/// Which edge of the window the sidebar is attached to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarSide {
    #[default]
    Left,
    Right,
}

/// Visual treatment of the panel chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SidebarVariant {
    #[default]
    Plain,
    Floating,
    Inset,
}

/// How the panel collapses in non-compact mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Collapsible {
    /// Collapsing hides the panel entirely (width collapses to zero).
    #[default]
    OffCanvas,
    /// Collapsing narrows the panel to an icon rail.
    Icon,
    /// The panel never collapses.
    Fixed,
}

/// Consumer-supplied layout configuration, immutable per provider instance
/// and orthogonal to the coordination state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SidebarLayout {
    pub side: SidebarSide,
    pub variant: SidebarVariant,
    pub collapsible: Collapsible,
}

/// The three structural layouts the renderer can produce.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarLayoutKind {
    /// Full panel, ignores coordination state entirely.
    FixedPanel,
    /// Compact-mode dismissible overlay, bound to `open_mobile`.
    Overlay,
    /// Persistent panel whose width follows `mode` + `collapsible`.
    Panel,
}

impl SidebarLayoutKind {
    /// Decide which structural layout applies. `Collapsible::Fixed` is a
    /// terminal, state-independent branch; compact mode always overlays
    /// otherwise.
    pub fn classify(compact: bool, collapsible: Collapsible) -> Self {
        if collapsible == Collapsible::Fixed {
            Self::FixedPanel
        } else if compact {
            Self::Overlay
        } else {
            Self::Panel
        }
    }
}

/// Where the authoritative open/closed value lives. Selected once at
/// construction, never re-decided per call.
#[derive(Debug, Clone, Copy)]
enum OpenAuthority {
    /// The coordinator owns the value.
    Internal(bool),
    /// The owning application owns the value; the stored bool is the last
    /// value it synchronized in.
    Controlled(bool),
}

/// Result of [`SidebarCoordinator::toggle_sidebar`]: which flag the toggle
/// targeted and the value it resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarToggle {
    /// The persistent panel open/closed flag changed (or, in controlled
    /// mode, was requested to change). This is the flag that persists.
    Open(bool),
    /// The compact-mode overlay flag changed. Never persisted.
    Mobile(bool),
}

/// The sidebar coordination state machine.
///
/// Invariant: `open_mobile` is meaningful only while `compact` is true, and
/// the mode flag only while it is false -- exactly one of the two "open"
/// representations drives the visible state at a time. All transitions are
/// synchronous; a mutation completes before any subsequent read.
#[derive(Debug, Clone)]
pub struct SidebarCoordinator {
    authority: OpenAuthority,
    open_mobile: bool,
    compact: bool,
}

impl SidebarCoordinator {
    /// Coordinator that owns its open/closed value, starting from
    /// `default_open`.
    pub fn uncontrolled(default_open: bool) -> Self {
        Self {
            authority: OpenAuthority::Internal(default_open),
            open_mobile: false,
            compact: false,
        }
    }

    /// Coordinator whose open/closed value is owned by the consumer. The
    /// visible state reflects only values passed through [`Self::sync_open`]
    /// (seeded with `open`); `set_open` merely reports what the consumer
    /// should apply.
    pub fn controlled(open: bool) -> Self {
        Self {
            authority: OpenAuthority::Controlled(open),
            open_mobile: false,
            compact: false,
        }
    }

    pub fn is_controlled(&self) -> bool {
        matches!(self.authority, OpenAuthority::Controlled(_))
    }

    /// The visible open/closed value.
    pub fn open(&self) -> bool {
        match self.authority {
            OpenAuthority::Internal(open) | OpenAuthority::Controlled(open) => open,
        }
    }

    pub fn mode(&self) -> SidebarMode {
        if self.open() {
            SidebarMode::Expanded
        } else {
            SidebarMode::Collapsed
        }
    }

    pub fn open_mobile(&self) -> bool {
        self.open_mobile
    }

    pub fn compact(&self) -> bool {
        self.compact
    }

    /// Update the responsive-mode signal. Leaving compact mode drops the
    /// ephemeral overlay flag, which is meaningless outside it.
    pub fn set_compact(&mut self, compact: bool) {
        if self.compact && !compact {
            self.open_mobile = false;
        }
        self.compact = compact;
    }

    /// Synchronize the controlled prop into the machine. No-op for
    /// uncontrolled coordinators.
    pub fn sync_open(&mut self, open: bool) {
        if let OpenAuthority::Controlled(current) = &mut self.authority {
            *current = open;
        }
    }

    /// Resolve a new open/closed value. Returns the resolved value so the
    /// provider can mirror it to the persistence adapter and, in controlled
    /// mode, report it to the consumer (whose next `sync_open` is what
    /// actually changes the visible state).
    pub fn set_open(&mut self, next: bool) -> bool {
        match &mut self.authority {
            OpenAuthority::Internal(open) => *open = next,
            OpenAuthority::Controlled(_) => {}
        }
        next
    }

    /// Functional-update form of [`Self::set_open`], resolved against the
    /// current visible value.
    pub fn set_open_with(&mut self, f: impl FnOnce(bool) -> bool) -> bool {
        let next = f(self.open());
        self.set_open(next)
    }

    /// Set the compact-mode overlay flag. Ephemeral: never persisted and
    /// never routed through the controlled callback.
    pub fn set_open_mobile(&mut self, next: bool) -> bool {
        self.open_mobile = next;
        next
    }

    /// Functional-update form of [`Self::set_open_mobile`].
    pub fn set_open_mobile_with(&mut self, f: impl FnOnce(bool) -> bool) -> bool {
        let next = f(self.open_mobile);
        self.set_open_mobile(next)
    }

    /// Invert whichever flag drives the visible state right now: the overlay
    /// flag in compact mode, the open/closed mode otherwise. The dispatch
    /// target is chosen solely by the compact signal at call time.
    pub fn toggle_sidebar(&mut self) -> SidebarToggle {
        if self.compact {
            SidebarToggle::Mobile(self.set_open_mobile_with(|open| !open))
        } else {
            SidebarToggle::Open(self.set_open_with(|open| !open))
        }
    }
}

/// Local open/closed flag for a sub-menu. Intentionally independent of the
/// sidebar's own collapse state: a sub-menu's expansion is unrelated to the
/// panel's, so this is its own two-state machine -- toggled on click, never
/// persisted.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SubMenuState {
    open: bool,
}

impl SubMenuState {
    pub fn open(&self) -> bool {
        self.open
    }

    pub fn toggle(&mut self) {
        self.open = !self.open;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toggle_alternates_mode_in_desktop_mode() {
        let mut c = SidebarCoordinator::uncontrolled(true);
        assert_eq!(c.mode(), SidebarMode::Expanded);

        let mut expected_open = true;
        for _ in 0..6 {
            expected_open = !expected_open;
            assert_eq!(c.toggle_sidebar(), SidebarToggle::Open(expected_open));
            assert_eq!(c.open(), expected_open);
        }
    }

    #[test]
    fn toggle_starts_from_default_open() {
        let mut c = SidebarCoordinator::uncontrolled(false);
        assert_eq!(c.mode(), SidebarMode::Collapsed);
        c.toggle_sidebar();
        assert_eq!(c.mode(), SidebarMode::Expanded);
    }

    #[test]
    fn toggle_in_compact_mode_only_touches_mobile_flag() {
        let mut c = SidebarCoordinator::uncontrolled(true);
        c.set_compact(true);

        for _ in 0..5 {
            c.toggle_sidebar();
            // Mode is untouched regardless of how often the overlay toggles.
            assert_eq!(c.mode(), SidebarMode::Expanded);
        }
        assert!(c.open_mobile());

        assert_eq!(c.toggle_sidebar(), SidebarToggle::Mobile(false));
        assert!(!c.open_mobile());
    }

    #[test]
    fn dispatch_target_follows_compact_signal_at_call_time() {
        let mut c = SidebarCoordinator::uncontrolled(false);

        assert_eq!(c.toggle_sidebar(), SidebarToggle::Open(true));
        c.set_compact(true);
        assert_eq!(c.toggle_sidebar(), SidebarToggle::Mobile(true));
        c.set_compact(false);
        assert_eq!(c.toggle_sidebar(), SidebarToggle::Open(false));
    }

    #[test]
    fn leaving_compact_mode_clears_overlay_flag() {
        let mut c = SidebarCoordinator::uncontrolled(true);
        c.set_compact(true);
        c.set_open_mobile(true);

        c.set_compact(false);
        assert!(!c.open_mobile());
    }

    #[test]
    fn set_open_with_resolves_against_current_value() {
        let mut c = SidebarCoordinator::uncontrolled(true);
        assert!(!c.set_open_with(|open| !open));
        assert!(!c.open());
        assert!(c.set_open_with(|open| !open));
        assert!(c.open());
    }

    #[test]
    fn controlled_state_never_diverges_from_synced_prop() {
        let mut c = SidebarCoordinator::controlled(false);
        assert!(c.is_controlled());

        // Every set_open reports the resolved value without touching the
        // visible state; only the prop sync moves it.
        assert!(c.set_open(true));
        assert!(!c.open());
        assert_eq!(c.toggle_sidebar(), SidebarToggle::Open(true));
        assert!(!c.open());

        c.sync_open(true);
        assert!(c.open());
        assert_eq!(c.toggle_sidebar(), SidebarToggle::Open(false));
        assert!(c.open());
    }

    #[test]
    fn sync_open_is_a_noop_for_uncontrolled() {
        let mut c = SidebarCoordinator::uncontrolled(false);
        c.sync_open(true);
        assert!(!c.open());
    }

    #[test]
    fn controlled_mobile_flag_stays_internal() {
        let mut c = SidebarCoordinator::controlled(true);
        c.set_compact(true);
        assert_eq!(c.toggle_sidebar(), SidebarToggle::Mobile(true));
        assert!(c.open_mobile());
        assert!(c.open());
    }

    #[test]
    fn default_closed_then_toggle_then_compact_scenario() {
        let mut c = SidebarCoordinator::uncontrolled(false);
        assert_eq!(c.mode(), SidebarMode::Collapsed);

        assert_eq!(c.toggle_sidebar(), SidebarToggle::Open(true));
        assert_eq!(c.mode(), SidebarMode::Expanded);

        c.set_compact(true);
        assert_eq!(c.toggle_sidebar(), SidebarToggle::Mobile(true));
        assert_eq!(c.mode(), SidebarMode::Expanded);
    }

    #[test]
    fn fixed_layout_is_state_independent() {
        for compact in [false, true] {
            assert_eq!(
                SidebarLayoutKind::classify(compact, Collapsible::Fixed),
                SidebarLayoutKind::FixedPanel
            );
        }
    }

    #[test]
    fn classify_routes_compact_to_overlay() {
        assert_eq!(
            SidebarLayoutKind::classify(true, Collapsible::OffCanvas),
            SidebarLayoutKind::Overlay
        );
        assert_eq!(
            SidebarLayoutKind::classify(true, Collapsible::Icon),
            SidebarLayoutKind::Overlay
        );
        assert_eq!(
            SidebarLayoutKind::classify(false, Collapsible::OffCanvas),
            SidebarLayoutKind::Panel
        );
        assert_eq!(
            SidebarLayoutKind::classify(false, Collapsible::Icon),
            SidebarLayoutKind::Panel
        );
    }

    #[test]
    fn sub_menu_toggles_independently() {
        let mut sub = SubMenuState::default();
        assert!(!sub.open());
        sub.toggle();
        assert!(sub.open());
        sub.toggle();
        assert!(!sub.open());
    }
}
