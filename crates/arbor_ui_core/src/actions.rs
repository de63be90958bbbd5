use gpui::*;

// ---------------------------------------------------------------------------
// Zero-sized actions
// ---------------------------------------------------------------------------

actions!(
    arbor_workspace,
    [
        // App-level
        Quit,
        // Sidebar: bound to the platform primary modifier + `b`; handled on
        // the workspace root element so the handler lives and dies with the
        // mounted provider.
        ToggleSidebar,
    ]
);
