//! View-state controller: which tab is showing

use serde::Serialize;
use shared::{DEFAULT_TABS, HOME_TAB};

use crate::render::{nav_id, view_id, RenderTarget};

/// Work a tab needs done each time it is shown
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum RefreshHook {
    /// Show chat suggestions if the conversation has not started
    ChatSuggestions,
    /// Re-project the current weather snapshot
    WeatherDisplay,
    /// Regenerate prediction values
    Predictions,
}

impl RefreshHook {
    pub fn for_tab(tab: &str) -> Option<Self> {
        match tab {
            "chat" => Some(RefreshHook::ChatSuggestions),
            "weather" => Some(RefreshHook::WeatherDisplay),
            "predictions" => Some(RefreshHook::Predictions),
            _ => None,
        }
    }
}

/// Result of a successful tab activation
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Activation {
    pub tab: String,
    pub refresh: Option<RefreshHook>,
}

/// Tracks the active tab among a registered, ordered set
#[derive(Debug, Clone)]
pub struct ViewStateController {
    tabs: Vec<String>,
    active: String,
}

impl Default for ViewStateController {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewStateController {
    /// Controller over the default tabs, starting on `home`
    pub fn new() -> Self {
        Self {
            tabs: DEFAULT_TABS.iter().map(|t| t.to_string()).collect(),
            active: HOME_TAB.to_string(),
        }
    }

    /// Add a tab at the end of the navigation order
    pub fn register(&mut self, tab: &str) -> bool {
        if self.is_registered(tab) {
            return false;
        }
        self.tabs.push(tab.to_string());
        true
    }

    pub fn is_registered(&self, tab: &str) -> bool {
        self.tabs.iter().any(|t| t == tab)
    }

    pub fn tabs(&self) -> &[String] {
        &self.tabs
    }

    pub fn active(&self) -> &str {
        &self.active
    }

    /// Make `tab` the active view. Unknown tabs are ignored.
    /// Re-activating the current tab is allowed and yields its hook again.
    pub fn activate(&mut self, tab: &str) -> Option<Activation> {
        if !self.is_registered(tab) {
            tracing::debug!("Ignoring activation of unknown tab '{}'", tab);
            return None;
        }

        self.active = tab.to_string();
        tracing::debug!("Activated tab {}", tab);
        Some(Activation {
            tab: self.active.clone(),
            refresh: RefreshHook::for_tab(tab),
        })
    }

    /// Move one tab right; stays put on the last tab
    pub fn next(&mut self) -> Option<Activation> {
        let index = self.active_index()?;
        let tab = self.tabs.get(index + 1)?.clone();
        self.activate(&tab)
    }

    /// Move one tab left; stays put on the first tab
    pub fn previous(&mut self) -> Option<Activation> {
        let index = self.active_index()?.checked_sub(1)?;
        let tab = self.tabs[index].clone();
        self.activate(&tab)
    }

    fn active_index(&self) -> Option<usize> {
        self.tabs.iter().position(|t| *t == self.active)
    }

    /// Show the active view and highlight its nav link; hide the rest
    pub fn project(&self, target: &mut dyn RenderTarget) {
        for tab in &self.tabs {
            let is_active = *tab == self.active;
            target.set_active(&view_id(tab), is_active);
            target.set_active(&nav_id(tab), is_active);
        }
    }
}
