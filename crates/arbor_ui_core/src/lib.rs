pub mod actions;
pub mod nav;
pub mod sidebar;
pub mod theme;

pub use nav::{AgentView, ResourceLink};
pub use sidebar::{
    COMPACT_BREAKPOINT, Collapsible, SIDEBAR_WIDTH, SIDEBAR_WIDTH_ICON, SIDEBAR_WIDTH_MOBILE,
    SidebarCoordinator, SidebarLayout, SidebarLayoutKind, SidebarMode, SidebarSide, SidebarToggle,
    SidebarVariant, SubMenuState,
};
pub use theme::ArborTheme;
