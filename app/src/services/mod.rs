//! Stateful components of the Farm Assistant

pub mod chat;
pub mod crop;
pub mod translation;
pub mod view_state;
pub mod weather;

pub use chat::{ChatResponder, PendingReply, ReplyDelay};
pub use crop::CropRecordStore;
pub use translation::TranslationStore;
pub use view_state::{Activation, RefreshHook, ViewStateController};
pub use weather::WeatherPresenter;
