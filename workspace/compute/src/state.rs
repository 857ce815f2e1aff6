//! View state of the dashboard.
//!
//! The state only changes through the named transitions below, which keeps the
//! interaction logic testable without a rendering environment.

use std::fmt;

use crate::filter::CategorySelection;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Tab {
    #[default]
    Overview,
    InteractiveMap,
    AdvancedAnalysis,
    TemporalPatterns,
}

impl Tab {
    pub const ALL: [Tab; 4] = [
        Tab::Overview,
        Tab::InteractiveMap,
        Tab::AdvancedAnalysis,
        Tab::TemporalPatterns,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Overview => "Overview",
            Tab::InteractiveMap => "Interactive Map",
            Tab::AdvancedAnalysis => "Advanced Analysis",
            Tab::TemporalPatterns => "Temporal Patterns",
        }
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A user interaction, as a value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ViewAction {
    SelectTab(Tab),
    SelectCategory(CategorySelection),
    HoverMarker(String),
    ClearHover,
    ExpandImage(String),
    CloseImage,
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct DashboardState {
    pub tab: Tab,
    pub category: CategorySelection,
    /// Title of the hotspot under the pointer
    pub hovered: Option<String>,
    /// Path of the gallery image shown full size
    pub expanded_image: Option<String>,
}

impl DashboardState {
    /// Switching tabs leaves the previous tab's transient UI behind.
    pub fn select_tab(&mut self, tab: Tab) {
        self.tab = tab;
        self.hovered = None;
        self.expanded_image = None;
    }

    /// The hovered marker may not survive the new filter, so hover is cleared.
    pub fn select_category(&mut self, category: CategorySelection) {
        self.category = category;
        self.hovered = None;
    }

    pub fn hover_marker(&mut self, title: impl Into<String>) {
        self.hovered = Some(title.into());
    }

    pub fn clear_hover(&mut self) {
        self.hovered = None;
    }

    pub fn expand_image(&mut self, path: impl Into<String>) {
        self.expanded_image = Some(path.into());
    }

    pub fn close_image(&mut self) {
        self.expanded_image = None;
    }

    pub fn is_hovered(&self, title: &str) -> bool {
        self.hovered.as_deref() == Some(title)
    }

    pub fn apply(&mut self, action: ViewAction) {
        match action {
            ViewAction::SelectTab(tab) => self.select_tab(tab),
            ViewAction::SelectCategory(category) => self.select_category(category),
            ViewAction::HoverMarker(title) => self.hover_marker(title),
            ViewAction::ClearHover => self.clear_hover(),
            ViewAction::ExpandImage(path) => self.expand_image(path),
            ViewAction::CloseImage => self.close_image(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = DashboardState::default();
        assert_eq!(state.tab, Tab::Overview);
        assert_eq!(state.category, CategorySelection::All);
        assert_eq!(state.hovered, None);
        assert_eq!(state.expanded_image, None);
    }

    #[test]
    fn test_hover_cycle() {
        let mut state = DashboardState::default();
        state.apply(ViewAction::SelectTab(Tab::InteractiveMap));
        state.apply(ViewAction::HoverMarker("Bay of Bengal".to_string()));
        assert!(state.is_hovered("Bay of Bengal"));
        assert!(!state.is_hovered("Kamchatka Arc"));

        state.apply(ViewAction::ClearHover);
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn test_category_change_clears_hover() {
        let mut state = DashboardState::default();
        state.hover_marker("Kamchatka Arc");
        state.select_category(CategorySelection::parse("Storm"));
        assert_eq!(state.category, CategorySelection::Only("Storm".to_string()));
        assert_eq!(state.hovered, None);
    }

    #[test]
    fn test_tab_change_resets_transient_ui() {
        let mut state = DashboardState::default();
        state.apply(ViewAction::SelectTab(Tab::AdvancedAnalysis));
        state.apply(ViewAction::ExpandImage("/analysis/dbscan_clusters.png".to_string()));
        assert_eq!(
            state.expanded_image.as_deref(),
            Some("/analysis/dbscan_clusters.png")
        );

        state.apply(ViewAction::SelectCategory(CategorySelection::parse("Ice")));
        state.apply(ViewAction::SelectTab(Tab::TemporalPatterns));
        assert_eq!(state.tab, Tab::TemporalPatterns);
        assert_eq!(state.expanded_image, None);
        // The category choice survives tab switches.
        assert_eq!(state.category.token(), "Ice");
    }

    #[test]
    fn test_close_image() {
        let mut state = DashboardState::default();
        state.expand_image("/a.png");
        state.apply(ViewAction::CloseImage);
        assert_eq!(state.expanded_image, None);
    }

    #[test]
    fn test_tab_labels() {
        let labels: Vec<&str> = Tab::ALL.iter().map(Tab::label).collect();
        assert_eq!(
            labels,
            vec!["Overview", "Interactive Map", "Advanced Analysis", "Temporal Patterns"]
        );
    }
}
