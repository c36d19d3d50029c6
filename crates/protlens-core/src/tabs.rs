//! Tab state: at most one tab is active at a time.
//!
//! Activation always deactivates everything first, then activates the tab
//! whose id matches. An unknown id leaves no tab active.

use crate::config::{RESULTS_TAB_ID, VIEWER_TAB_ID};

/// A tab and its content panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Viewer,
    Results,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Viewer, Tab::Results];

    /// Identifier shared by the tab button (`data-tab`) and its panel (`id`).
    pub fn id(&self) -> &'static str {
        match self {
            Tab::Viewer => VIEWER_TAB_ID,
            Tab::Results => RESULTS_TAB_ID,
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Tab::Viewer => "3D Viewer",
            Tab::Results => "Analysis",
        }
    }

    pub fn from_id(id: &str) -> Option<Tab> {
        Tab::ALL.into_iter().find(|tab| tab.id() == id)
    }
}

/// Which tab is active, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TabSet {
    active: Option<Tab>,
}

impl TabSet {
    /// Starts with `initial` active.
    pub fn new(initial: Tab) -> Self {
        Self {
            active: Some(initial),
        }
    }

    /// Deactivates every tab, then activates the one named `id`.
    pub fn activate(&mut self, id: &str) {
        self.active = Tab::from_id(id);
    }

    pub fn select(&mut self, tab: Tab) {
        self.activate(tab.id());
    }

    pub fn active(&self) -> Option<Tab> {
        self.active
    }

    pub fn is_active(&self, tab: Tab) -> bool {
        self.active == Some(tab)
    }
}

impl Default for TabSet {
    fn default() -> Self {
        Self::new(Tab::Viewer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ids_round_trip() {
        for tab in Tab::ALL {
            assert_eq!(Tab::from_id(tab.id()), Some(tab));
        }
        assert_eq!(Tab::from_id("settings-tab"), None);
    }

    #[test]
    fn test_exactly_one_active() {
        let mut tabs = TabSet::default();
        tabs.activate("results-tab");
        assert_eq!(tabs.active(), Some(Tab::Results));
        assert!(!tabs.is_active(Tab::Viewer));
    }

    #[test]
    fn test_activate_is_idempotent() {
        let mut tabs = TabSet::default();
        tabs.select(Tab::Results);
        let once = tabs;
        tabs.select(Tab::Results);
        assert_eq!(tabs, once);
        assert_eq!(Tab::ALL.iter().filter(|t| tabs.is_active(**t)).count(), 1);
    }

    #[test]
    fn test_unknown_id_clears_everything() {
        let mut tabs = TabSet::new(Tab::Results);
        tabs.activate("missing");
        assert_eq!(tabs.active(), None);
        assert!(Tab::ALL.iter().all(|t| !tabs.is_active(*t)));
    }
}
