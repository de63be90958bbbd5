use gpui_component::IconName;

/// Views available under each agent in the sidebar. These are the children
/// of an agent's sub-menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AgentView {
    Chat,
    Memories,
    Settings,
}

impl AgentView {
    pub const ALL: [AgentView; 3] = [AgentView::Chat, AgentView::Memories, AgentView::Settings];

    pub fn label(self) -> &'static str {
        match self {
            Self::Chat => "Chat",
            Self::Memories => "Memories",
            Self::Settings => "Settings",
        }
    }

    /// SVG icon via gpui-component IconName.
    pub fn icon(self) -> IconName {
        match self {
            Self::Chat => IconName::Bot,
            Self::Memories => IconName::BookOpen,
            Self::Settings => IconName::Settings,
        }
    }
}

/// Static resource links shown in the sidebar footer group.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResourceLink {
    Documentation,
    ReportIssue,
}

impl ResourceLink {
    pub const ALL: [ResourceLink; 2] = [ResourceLink::Documentation, ResourceLink::ReportIssue];

    pub fn label(self) -> &'static str {
        match self {
            Self::Documentation => "Documentation",
            Self::ReportIssue => "Report an issue",
        }
    }

    pub fn icon(self) -> IconName {
        match self {
            Self::Documentation => IconName::BookOpen,
            Self::ReportIssue => IconName::Info,
        }
    }

    pub fn url(self) -> &'static str {
        match self {
            Self::Documentation => "https://docs.arbor.sh",
            Self::ReportIssue => "https://github.com/arbor-ai/arbor/issues",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn agent_view_labels_are_stable() {
        assert_eq!(AgentView::Chat.label(), "Chat");
        assert_eq!(AgentView::Memories.label(), "Memories");
        assert_eq!(AgentView::Settings.label(), "Settings");
        assert_eq!(AgentView::ALL.len(), 3);
    }

    #[test]
    fn resource_links_have_urls() {
        for link in ResourceLink::ALL {
            assert!(link.url().starts_with("https://"));
            assert!(!link.label().is_empty());
        }
    }
}
