//! Chat responder: scripted assistant with a simulated thinking delay
//!
//! A send appends the user message at once and schedules the bot reply on the
//! Tokio runtime. While a reply is pending further sends are rejected.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use std::time::Duration;

use chrono::{DateTime, Utc};
use rand::Rng;
use shared::translations;
use shared::{
    classify, format_message_time, ChatMessage, Language, ResponseTopic, WELCOME_MESSAGE_ID,
};
use tokio::task::JoinHandle;

use crate::config::ChatConfig;
use crate::render::{
    RenderTarget, RenderedMessage, CHAT_MESSAGES_ID, CHAT_SUGGESTIONS_ID, TYPING_INDICATOR_ID,
};

/// Delay before the bot answers: `base` plus a random share of `jitter`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReplyDelay {
    pub base: Duration,
    pub jitter: Duration,
}

impl ReplyDelay {
    pub fn fixed(delay: Duration) -> Self {
        Self {
            base: delay,
            jitter: Duration::ZERO,
        }
    }

    pub fn sample(&self) -> Duration {
        let jitter_ms = self.jitter.as_millis() as u64;
        if jitter_ms == 0 {
            return self.base;
        }
        let extra = rand::thread_rng().gen_range(0..jitter_ms);
        self.base + Duration::from_millis(extra)
    }
}

impl From<&ChatConfig> for ReplyDelay {
    fn from(config: &ChatConfig) -> Self {
        Self {
            base: config.base_delay(),
            jitter: config.jitter(),
        }
    }
}

#[derive(Debug)]
struct ChatLog {
    messages: Vec<ChatMessage>,
    is_typing: bool,
    suggestions_visible: bool,
    /// Id of the user message whose reply is outstanding
    pending: Option<i64>,
}

impl ChatLog {
    fn next_id(&self, now: DateTime<Utc>) -> i64 {
        let millis = now.timestamp_millis();
        match self.messages.last() {
            Some(last) if last.id >= millis => last.id + 1,
            _ => millis,
        }
    }
}

fn lock(log: &Mutex<ChatLog>) -> MutexGuard<'_, ChatLog> {
    log.lock().unwrap_or_else(PoisonError::into_inner)
}

/// Append-only conversation with the scripted assistant
#[derive(Clone)]
pub struct ChatResponder {
    log: Arc<Mutex<ChatLog>>,
    delay: ReplyDelay,
}

impl ChatResponder {
    /// New conversation opened by the welcome message in `language`
    pub fn new(language: Language, delay: ReplyDelay) -> Self {
        let welcome = ChatMessage::bot(
            WELCOME_MESSAGE_ID,
            translations::translate(language, "chat.welcome"),
            Utc::now(),
        );
        Self {
            log: Arc::new(Mutex::new(ChatLog {
                messages: vec![welcome],
                is_typing: false,
                suggestions_visible: true,
                pending: None,
            })),
            delay,
        }
    }

    pub fn messages(&self) -> Vec<ChatMessage> {
        lock(&self.log).messages.clone()
    }

    pub fn len(&self) -> usize {
        lock(&self.log).messages.len()
    }

    pub fn is_empty(&self) -> bool {
        lock(&self.log).messages.is_empty()
    }

    pub fn is_typing(&self) -> bool {
        lock(&self.log).is_typing
    }

    pub fn suggestions_visible(&self) -> bool {
        lock(&self.log).suggestions_visible
    }

    /// Suggestion chips reappear only while the welcome message is alone
    pub fn refresh_suggestions(&self) -> bool {
        let mut log = lock(&self.log);
        if log.messages.len() <= 1 {
            log.suggestions_visible = true;
        }
        log.suggestions_visible
    }

    /// Topic a message would be answered with
    pub fn classify(&self, text: &str) -> ResponseTopic {
        classify(text)
    }

    /// Send a user message. Blank text, or a send while the bot is still
    /// typing, is ignored and returns `None`.
    ///
    /// Must be called from within a Tokio runtime.
    pub fn send(&self, text: &str, language: Language) -> Option<PendingReply> {
        let text = text.trim();
        if text.is_empty() {
            return None;
        }

        let user_id = {
            let mut log = lock(&self.log);
            if log.is_typing {
                tracing::debug!("Ignoring send while assistant is typing");
                return None;
            }
            let now = Utc::now();
            let id = log.next_id(now);
            log.messages.push(ChatMessage::user(id, text, now));
            log.suggestions_visible = false;
            log.is_typing = true;
            log.pending = Some(id);
            id
        };

        let topic = classify(text);
        let reply = topic.response(language);
        let delay = self.delay.sample();
        tracing::debug!("Replying to message {} with {:?} after {:?}", user_id, topic, delay);

        let log = Arc::clone(&self.log);
        let handle = tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            let mut log = lock(&log);
            // a cancelled reply may still wake up here before the abort lands
            if log.pending != Some(user_id) {
                return None;
            }
            let now = Utc::now();
            let message = ChatMessage::bot(log.next_id(now), reply, now);
            log.messages.push(message.clone());
            log.is_typing = false;
            log.pending = None;
            Some(message)
        });

        Some(PendingReply {
            user_message_id: user_id,
            handle,
            log: Arc::clone(&self.log),
        })
    }

    /// Send the text of a suggestion chip
    pub fn send_suggestion(&self, suggestion: &str, language: Language) -> Option<PendingReply> {
        self.send(suggestion, language)
    }

    /// Render messages, typing indicator and suggestion chips
    pub fn project(&self, target: &mut dyn RenderTarget, language: Language) {
        let now = Utc::now();
        let log = lock(&self.log);
        let rendered: Vec<RenderedMessage> = log
            .messages
            .iter()
            .map(|m| RenderedMessage {
                id: m.id,
                text: m.text.clone(),
                is_bot: m.is_bot,
                time_label: format_message_time(m.timestamp, now, language),
            })
            .collect();

        target.render_messages(CHAT_MESSAGES_ID, &rendered);
        target.set_visible(TYPING_INDICATOR_ID, log.is_typing);
        if log.is_typing {
            target.set_text(
                TYPING_INDICATOR_ID,
                &translations::translate(language, "chat.thinking"),
            );
        }
        target.set_visible(CHAT_SUGGESTIONS_ID, log.suggestions_visible);
    }
}

/// Handle to a bot reply that has not been delivered yet
#[derive(Debug)]
pub struct PendingReply {
    user_message_id: i64,
    handle: JoinHandle<Option<ChatMessage>>,
    log: Arc<Mutex<ChatLog>>,
}

impl PendingReply {
    /// Id of the user message being answered
    pub fn user_message_id(&self) -> i64 {
        self.user_message_id
    }

    pub fn is_finished(&self) -> bool {
        self.handle.is_finished()
    }

    /// Wait for the reply. `None` if the reply was cancelled.
    pub async fn wait(self) -> Option<ChatMessage> {
        self.handle.await.ok().flatten()
    }

    /// Drop the reply and let the user send again
    pub fn cancel(self) {
        self.handle.abort();
        let mut log = lock(&self.log);
        if log.pending == Some(self.user_message_id) {
            log.is_typing = false;
            log.pending = None;
            tracing::debug!("Cancelled reply to message {}", self.user_message_id);
        }
    }
}
