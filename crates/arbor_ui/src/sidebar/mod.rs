pub mod menu;
pub mod panel;
pub mod provider;

pub use menu::*;
pub use panel::render_sidebar_frame;
pub use provider::{
    OpenChanged, SidebarHandle, SidebarOptions, SidebarProvider, SidebarSnapshot, seed_coordinator,
};
