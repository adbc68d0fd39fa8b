//! Chat message models

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};

use crate::types::Language;

/// Id of the welcome message that opens every conversation
pub const WELCOME_MESSAGE_ID: i64 = 1;

/// A message in the assistant conversation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct ChatMessage {
    pub id: i64,
    pub text: String,
    pub is_bot: bool,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(id: i64, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            is_bot: false,
            timestamp,
        }
    }

    pub fn bot(id: i64, text: impl Into<String>, timestamp: DateTime<Utc>) -> Self {
        Self {
            id,
            text: text.into(),
            is_bot: true,
            timestamp,
        }
    }
}

/// Relative time label shown under a message
pub fn format_message_time(timestamp: DateTime<Utc>, now: DateTime<Utc>, language: Language) -> String {
    let minutes = (now - timestamp).num_minutes();

    if minutes < 1 {
        match language {
            Language::English => "Just now".to_string(),
            Language::Hindi => "अभी".to_string(),
        }
    } else if minutes < 60 {
        match language {
            Language::English => format!("{}m ago", minutes),
            Language::Hindi => format!("{} मिनट पहले", minutes),
        }
    } else {
        timestamp.with_timezone(&Local).format("%H:%M").to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Duration;

    #[test]
    fn test_format_recent_message() {
        let now = Utc::now();
        assert_eq!(format_message_time(now, now, Language::English), "Just now");
        assert_eq!(format_message_time(now, now, Language::Hindi), "अभी");
        let earlier = now - Duration::seconds(59);
        assert_eq!(format_message_time(earlier, now, Language::English), "Just now");
    }

    #[test]
    fn test_format_minutes_ago() {
        let now = Utc::now();
        let earlier = now - Duration::minutes(5);
        assert_eq!(format_message_time(earlier, now, Language::English), "5m ago");
        assert_eq!(format_message_time(earlier, now, Language::Hindi), "5 मिनट पहले");
    }

    #[test]
    fn test_format_older_message_as_clock_time() {
        let now = Utc::now();
        let earlier = now - Duration::hours(3);
        let label = format_message_time(earlier, now, Language::English);
        assert_eq!(label.len(), 5);
        assert_eq!(&label[2..3], ":");
    }
}
