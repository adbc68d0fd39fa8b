//! Application state: every component behind one owner
//!
//! Each operation first updates component state and then projects the result
//! onto the supplied render target.

use std::sync::Arc;

use chrono::Local;
use shared::translations;
use shared::{format_current_time, resolve_location, CropInput, CropRecord, Notification, WeatherSnapshot};

use crate::config::Config;
use crate::error::{AppError, AppResult};
use crate::external::WeatherReport;
use crate::render::{RenderTarget, CURRENT_TIME_ID};
use crate::services::{
    Activation, ChatResponder, CropRecordStore, PendingReply, RefreshHook, ReplyDelay,
    TranslationStore, ViewStateController, WeatherPresenter,
};
use crate::storage::{self, SharedStore};

/// Application state shared by the driver loop
pub struct AppState {
    pub config: Arc<Config>,
    pub translations: TranslationStore,
    pub views: ViewStateController,
    pub crops: CropRecordStore,
    pub weather: WeatherPresenter,
    pub chat: ChatResponder,
    /// Crop form contents, cleared after each successful submit
    pub crop_form: CropInput,
}

impl AppState {
    /// Open the configured storage and build the state from it
    pub fn from_config(config: Config) -> AppResult<Self> {
        let storage = storage::open(&config.storage)?;
        Ok(Self::new(config, storage))
    }

    /// Build the state, restoring the saved language and crop records
    pub fn new(config: Config, storage: SharedStore) -> Self {
        let mut translations =
            TranslationStore::new(Arc::clone(&storage), config.ui.default_language);
        let language = translations.load_preference();

        let mut crops = CropRecordStore::new(storage);
        crops.load();

        let weather = WeatherPresenter::new(&config.ui.default_location);
        let chat = ChatResponder::new(language, ReplyDelay::from(&config.chat));

        Self {
            config: Arc::new(config),
            translations,
            views: ViewStateController::new(),
            crops,
            weather,
            chat,
            crop_form: CropInput::default(),
        }
    }

    /// First paint: translated document with the home tab showing
    pub fn init(&mut self, target: &mut dyn RenderTarget) {
        self.translations.translate_document(target);
        self.refresh_clock(target);
        self.views.project(target);
        self.weather.project(target);
        self.chat.project(target, self.translations.language());
        tracing::info!(
            "Session started in {} with {} saved crops",
            self.translations.language(),
            self.crops.len()
        );
    }

    /// Show a tab and run its refresh hook. Unknown tabs change nothing.
    pub fn show_tab(&mut self, tab: &str, target: &mut dyn RenderTarget) -> Option<Activation> {
        let activation = self.views.activate(tab)?;
        self.after_activation(&activation, target);
        Some(activation)
    }

    pub fn next_tab(&mut self, target: &mut dyn RenderTarget) -> Option<Activation> {
        let activation = self.views.next()?;
        self.after_activation(&activation, target);
        Some(activation)
    }

    pub fn previous_tab(&mut self, target: &mut dyn RenderTarget) -> Option<Activation> {
        let activation = self.views.previous()?;
        self.after_activation(&activation, target);
        Some(activation)
    }

    fn after_activation(&mut self, activation: &Activation, target: &mut dyn RenderTarget) {
        self.views.project(target);
        match activation.refresh {
            Some(RefreshHook::ChatSuggestions) => {
                self.chat.refresh_suggestions();
                self.chat.project(target, self.translations.language());
            }
            Some(RefreshHook::WeatherDisplay) => {
                self.weather.project(target);
            }
            Some(RefreshHook::Predictions) => {
                self.weather.project_predictions(target, !self.crops.is_empty());
            }
            None => {}
        }
    }

    /// Switch to the language with `code` and re-translate the document.
    /// Unknown codes are ignored.
    pub fn set_language(&mut self, code: &str, target: &mut dyn RenderTarget) -> AppResult<bool> {
        if !self.translations.set_language(code)? {
            return Ok(false);
        }
        self.translations.translate_document(target);
        self.refresh_clock(target);
        self.chat.project(target, self.translations.language());
        Ok(true)
    }

    /// Flip the language and announce the change
    pub fn toggle_language(&mut self, target: &mut dyn RenderTarget) -> AppResult<()> {
        let notification = self.translations.toggle()?;
        self.translations.translate_document(target);
        self.refresh_clock(target);
        self.chat.project(target, self.translations.language());
        target.notify(notification);
        Ok(())
    }

    /// Write the local date and time into the header clock
    pub fn refresh_clock(&self, target: &mut dyn RenderTarget) {
        let label = format_current_time(&Local::now(), self.translations.language());
        target.set_text(CURRENT_TIME_ID, &label);
    }

    /// Set one crop form field by name
    pub fn set_form_field(&mut self, name: &str, value: &str) -> bool {
        self.crop_form.set_field(name, value)
    }

    /// Submit the crop form. Failures are reported through a notification
    /// and leave the form as it was.
    pub fn submit_crop(&mut self, target: &mut dyn RenderTarget) -> AppResult<CropRecord> {
        let language = self.translations.language();
        match self.crops.submit(self.crop_form.clone()) {
            Ok(record) => {
                self.crop_form = CropInput::default();
                target.notify(Notification::success(
                    self.translations.translate("crop.cropAdded"),
                ));
                if self.views.active() == "predictions" {
                    self.weather.project_predictions(target, true);
                }
                Ok(record)
            }
            Err(AppError::Validation(e)) => {
                tracing::debug!("Crop form rejected, missing {:?}", e.missing);
                target.notify(Notification::error(format!(
                    "{}: {}",
                    translations::translate(language, "common.error"),
                    e
                )));
                Err(AppError::Validation(e))
            }
            Err(e) => {
                target.notify(Notification::error(e.message(language)));
                Err(e)
            }
        }
    }

    /// Remove every saved crop
    pub fn clear_crops(&mut self) -> AppResult<()> {
        self.crops.clear()
    }

    /// Load weather for another location and redraw it
    pub fn change_location(
        &mut self,
        location: &str,
        target: &mut dyn RenderTarget,
    ) -> &WeatherSnapshot {
        let location = resolve_location(location);
        self.weather.load_snapshot(location);
        self.weather.project(target);
        target.notify(Notification::success(format!(
            "Weather updated for {}",
            location
        )));
        self.weather.snapshot()
    }

    /// Show live conditions from an OpenWeatherMap report
    pub fn apply_weather_report(&mut self, report: WeatherReport, target: &mut dyn RenderTarget) {
        let snapshot = report.into_snapshot(self.weather.snapshot().clone());
        self.weather.replace_snapshot(snapshot);
        self.weather.project(target);
    }

    /// Choose the crop shown on the predictions tab
    pub fn select_prediction_crop(&mut self, crop_type: &str, target: &mut dyn RenderTarget) {
        self.weather.select_crop(crop_type);
        self.weather.project_predictions(target, !self.crops.is_empty());
    }

    /// Send a chat message in the active language
    pub fn send_chat(&self, text: &str, target: &mut dyn RenderTarget) -> Option<PendingReply> {
        let language = self.translations.language();
        let pending = self.chat.send(text, language)?;
        self.chat.project(target, language);
        Some(pending)
    }

    pub fn send_suggestion(
        &self,
        suggestion: &str,
        target: &mut dyn RenderTarget,
    ) -> Option<PendingReply> {
        let language = self.translations.language();
        let pending = self.chat.send_suggestion(suggestion, language)?;
        self.chat.project(target, language);
        Some(pending)
    }

    /// Suggestion chips for the active language
    pub fn chat_suggestions(&self) -> Vec<&'static str> {
        self.translations.translate_list("chat.suggestions")
    }

    /// Redraw the chat log, e.g. once a reply has arrived
    pub fn refresh_chat(&self, target: &mut dyn RenderTarget) {
        self.chat.project(target, self.translations.language());
    }
}
