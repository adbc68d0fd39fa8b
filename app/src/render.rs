//! Render target abstraction
//!
//! Components never touch a display directly. They compute plain data and the
//! projection code writes it through [`RenderTarget`]. Writes addressed to an
//! element the target does not have are ignored.

use std::collections::{BTreeMap, HashMap};

use serde::Serialize;
use shared::{Notification, DEFAULT_TABS};

/// Element class holding the four weather metric values
pub const METRIC_VALUE_CLASS: &str = "metric-value";

/// Element class holding the four prediction values
pub const PREDICTION_VALUE_CLASS: &str = "prediction-value";

/// Element class of temperature read-outs outside the metric grid
pub const TEMPERATURE_CLASS: &str = "temperature";

pub const CONFIDENCE_FILL_ID: &str = "confidence-fill";
pub const CONFIDENCE_TEXT_ID: &str = "confidence-text";
pub const CHAT_SUGGESTIONS_ID: &str = "chat-suggestions";
pub const CHAT_MESSAGES_ID: &str = "chat-messages";
pub const TYPING_INDICATOR_ID: &str = "typing-indicator";
pub const LANGUAGE_BUTTON_ID: &str = "current-lang";
pub const CURRENT_TIME_ID: &str = "current-time";

/// Id of the view region for a tab
pub fn view_id(tab: &str) -> String {
    format!("{}-tab", tab)
}

/// Id of the navigation link for a tab
pub fn nav_id(tab: &str) -> String {
    format!("nav-{}", tab)
}

/// An element that carries a dotted translation key
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslatableElement {
    pub id: String,
    pub key: String,
    /// Text inputs receive translations as placeholder
    pub is_input: bool,
}

/// A chat message ready for display
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct RenderedMessage {
    pub id: i64,
    pub text: String,
    pub is_bot: bool,
    pub time_label: String,
}

/// Display surface written by the projection layer
pub trait RenderTarget {
    fn translatable_elements(&self) -> Vec<TranslatableElement>;

    fn set_text(&mut self, id: &str, text: &str);

    fn set_placeholder(&mut self, id: &str, text: &str);

    /// Toggle the `active` class
    fn set_active(&mut self, id: &str, active: bool);

    fn set_visible(&mut self, id: &str, visible: bool);

    /// Width of a meter element in percent
    fn set_width_percent(&mut self, id: &str, percent: u8);

    /// Number of elements with a class
    fn slot_count(&self, class: &str) -> usize;

    fn slot_text(&self, class: &str, index: usize) -> Option<String>;

    fn set_slot_text(&mut self, class: &str, index: usize, text: &str);

    fn render_messages(&mut self, container: &str, messages: &[RenderedMessage]);

    fn set_document_language(&mut self, code: &str);

    fn set_document_title(&mut self, title: &str);

    /// Show a transient notification
    fn notify(&mut self, notification: Notification);
}

/// Fill the first `values.len()` slots of a class in order.
/// Nothing is written unless the target has at least that many slots.
pub fn fill_slots(target: &mut dyn RenderTarget, class: &str, values: &[String]) -> bool {
    if target.slot_count(class) < values.len() {
        tracing::debug!("Skipping {} projection: not enough slots", class);
        return false;
    }
    for (index, value) in values.iter().enumerate() {
        target.set_slot_text(class, index, value);
    }
    true
}

/// State of one element in [`MemoryRenderTarget`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementState {
    pub translation_key: Option<String>,
    pub is_input: bool,
    pub text: String,
    pub placeholder: String,
    pub active: bool,
    pub visible: bool,
    pub width_percent: Option<u8>,
}

/// In-memory render target used by tests and the terminal driver
#[derive(Debug, Default)]
pub struct MemoryRenderTarget {
    elements: BTreeMap<String, ElementState>,
    slots: HashMap<String, Vec<String>>,
    messages: HashMap<String, Vec<RenderedMessage>>,
    pub document_language: Option<String>,
    pub document_title: Option<String>,
    pub notifications: Vec<Notification>,
}

impl MemoryRenderTarget {
    /// A target with no elements at all
    pub fn new() -> Self {
        Self::default()
    }

    /// A target laid out like the assistant page
    pub fn with_page() -> Self {
        let mut target = Self::new();
        for tab in DEFAULT_TABS {
            target.add_element(&view_id(tab));
            target.add_translatable(&nav_id(tab), &format!("nav.{}", tab), false);
        }
        target.add_translatable("app-title", "app.title", false);
        target.add_translatable("home-welcome", "home.welcome", false);
        target.add_translatable("home-subtitle", "home.subtitle", false);
        target.add_translatable("crop-title", "crop.title", false);
        target.add_translatable("crop-add", "crop.addCrop", false);
        target.add_translatable("weather-title", "weather.title", false);
        target.add_translatable("predictions-title", "predictions.title", false);
        target.add_translatable("chat-title", "chat.title", false);
        target.add_translatable("chat-input", "chat.placeholder", true);
        target.add_translatable("legacy-label", "legacy.missing", false);
        target.add_element(CHAT_SUGGESTIONS_ID);
        target.add_element(TYPING_INDICATOR_ID);
        target.add_element(LANGUAGE_BUTTON_ID);
        target.add_element(CURRENT_TIME_ID);
        target.add_element(CONFIDENCE_FILL_ID);
        target.add_element(CONFIDENCE_TEXT_ID);
        target.add_slots(METRIC_VALUE_CLASS, 4);
        target.add_slots(PREDICTION_VALUE_CLASS, 4);
        target.slots.insert(
            TEMPERATURE_CLASS.to_string(),
            vec!["--°C".to_string(), "Feels like --".to_string()],
        );
        target.messages.insert(CHAT_MESSAGES_ID.to_string(), Vec::new());
        target
    }

    pub fn add_element(&mut self, id: &str) {
        self.elements.entry(id.to_string()).or_default();
    }

    pub fn add_translatable(&mut self, id: &str, key: &str, is_input: bool) {
        let element = self.elements.entry(id.to_string()).or_default();
        element.translation_key = Some(key.to_string());
        element.is_input = is_input;
        element.text = key.to_string();
    }

    pub fn add_slots(&mut self, class: &str, count: usize) {
        self.slots
            .insert(class.to_string(), vec![String::new(); count]);
    }

    pub fn element(&self, id: &str) -> Option<&ElementState> {
        self.elements.get(id)
    }

    pub fn text(&self, id: &str) -> Option<&str> {
        self.elements.get(id).map(|e| e.text.as_str())
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.elements.get(id).map(|e| e.active).unwrap_or(false)
    }

    pub fn is_visible(&self, id: &str) -> bool {
        self.elements.get(id).map(|e| e.visible).unwrap_or(false)
    }

    /// Ids of every element carrying the `active` class
    pub fn active_ids(&self) -> Vec<&str> {
        self.elements
            .iter()
            .filter(|(_, e)| e.active)
            .map(|(id, _)| id.as_str())
            .collect()
    }

    pub fn slots(&self, class: &str) -> &[String] {
        self.slots.get(class).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn messages(&self, container: &str) -> &[RenderedMessage] {
        self.messages.get(container).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn last_notification(&self) -> Option<&Notification> {
        self.notifications.last()
    }
}

impl RenderTarget for MemoryRenderTarget {
    fn translatable_elements(&self) -> Vec<TranslatableElement> {
        self.elements
            .iter()
            .filter_map(|(id, e)| {
                e.translation_key.as_ref().map(|key| TranslatableElement {
                    id: id.clone(),
                    key: key.clone(),
                    is_input: e.is_input,
                })
            })
            .collect()
    }

    fn set_text(&mut self, id: &str, text: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.text = text.to_string();
        }
    }

    fn set_placeholder(&mut self, id: &str, text: &str) {
        if let Some(element) = self.elements.get_mut(id) {
            element.placeholder = text.to_string();
        }
    }

    fn set_active(&mut self, id: &str, active: bool) {
        if let Some(element) = self.elements.get_mut(id) {
            element.active = active;
        }
    }

    fn set_visible(&mut self, id: &str, visible: bool) {
        if let Some(element) = self.elements.get_mut(id) {
            element.visible = visible;
        }
    }

    fn set_width_percent(&mut self, id: &str, percent: u8) {
        if let Some(element) = self.elements.get_mut(id) {
            element.width_percent = Some(percent);
        }
    }

    fn slot_count(&self, class: &str) -> usize {
        self.slots.get(class).map(Vec::len).unwrap_or(0)
    }

    fn slot_text(&self, class: &str, index: usize) -> Option<String> {
        self.slots.get(class).and_then(|s| s.get(index)).cloned()
    }

    fn set_slot_text(&mut self, class: &str, index: usize, text: &str) {
        if let Some(slot) = self.slots.get_mut(class).and_then(|s| s.get_mut(index)) {
            *slot = text.to_string();
        }
    }

    fn render_messages(&mut self, container: &str, messages: &[RenderedMessage]) {
        if let Some(list) = self.messages.get_mut(container) {
            *list = messages.to_vec();
        }
    }

    fn set_document_language(&mut self, code: &str) {
        self.document_language = Some(code.to_string());
    }

    fn set_document_title(&mut self, title: &str) {
        self.document_title = Some(title.to_string());
    }

    fn notify(&mut self, notification: Notification) {
        self.notifications.push(notification);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_writes_to_missing_elements_are_ignored() {
        let mut target = MemoryRenderTarget::new();
        target.set_text("nowhere", "hello");
        target.set_active("nowhere", true);
        target.set_slot_text(METRIC_VALUE_CLASS, 0, "28°C");
        assert!(target.element("nowhere").is_none());
        assert!(target.slots(METRIC_VALUE_CLASS).is_empty());
    }

    #[test]
    fn test_fill_slots_requires_enough_slots() {
        let mut target = MemoryRenderTarget::new();
        target.add_slots(METRIC_VALUE_CLASS, 3);
        let values: Vec<String> = ["a", "b", "c", "d"].iter().map(|s| s.to_string()).collect();
        assert!(!fill_slots(&mut target, METRIC_VALUE_CLASS, &values));
        assert_eq!(target.slots(METRIC_VALUE_CLASS), ["", "", ""]);

        target.add_slots(METRIC_VALUE_CLASS, 5);
        assert!(fill_slots(&mut target, METRIC_VALUE_CLASS, &values));
        assert_eq!(target.slots(METRIC_VALUE_CLASS), ["a", "b", "c", "d", ""]);
    }

    #[test]
    fn test_page_layout_has_tab_views() {
        let target = MemoryRenderTarget::with_page();
        for tab in DEFAULT_TABS {
            assert!(target.element(&view_id(tab)).is_some());
            assert!(target.element(&nav_id(tab)).is_some());
        }
        assert!(target
            .translatable_elements()
            .iter()
            .any(|e| e.id == "chat-input" && e.is_input));
    }
}
