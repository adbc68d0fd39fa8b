//! Chat responder and prediction tests
//!
//! Tests for:
//! - Property 4: Keyword Classification Order
//! - Property 6: Prediction Table
//! - Property 7: Send Lifecycle

use std::time::Duration;

use farm_assistant::render::{MemoryRenderTarget, CHAT_MESSAGES_ID, TYPING_INDICATOR_ID};
use farm_assistant::services::{ChatResponder, ReplyDelay};
use proptest::prelude::*;
use shared::{classify, predict, Language, ResponseTopic, KEYWORD_RULES};

fn responder() -> ChatResponder {
    ChatResponder::new(
        Language::English,
        ReplyDelay {
            base: Duration::from_millis(1500),
            jitter: Duration::from_millis(1000),
        },
    )
}

// ============================================================================
// Property-Based Tests
// ============================================================================

proptest! {
    /// Property 4: Keyword Classification Order
    /// Two keywords in one message resolve to the earlier rule group
    #[test]
    fn test_earlier_group_wins(
        first in 0..KEYWORD_RULES.len(),
        second in 0..KEYWORD_RULES.len(),
        filler in "[0-9 ]{0,8}"
    ) {
        let (topic_a, words_a) = KEYWORD_RULES[first];
        let (topic_b, words_b) = KEYWORD_RULES[second];
        let text = format!("{}{}{}", words_b[0], filler, words_a[0]);

        let expected = if first <= second { topic_a } else { topic_b };
        prop_assert_eq!(classify(&text), expected);
        prop_assert_eq!(classify(&text), classify(&text));
    }

    /// Property 4: classification ignores letter case
    #[test]
    fn test_case_insensitive(group in 0..KEYWORD_RULES.len()) {
        let (topic, words) = KEYWORD_RULES[group];
        prop_assert_eq!(classify(&words[0].to_uppercase()), topic);
    }

    /// Property 6: unknown crops fall back to wheat
    #[test]
    fn test_unknown_crop_predicts_wheat(crop in "[a-z]{1,10}") {
        prop_assume!(!["wheat", "rice", "corn"].contains(&crop.as_str()));
        prop_assert_eq!(predict(&crop), predict("wheat"));
    }
}

// ============================================================================
// Unit Tests
// ============================================================================

/// Property 4: fixed order along the rule list
#[test]
fn test_rule_order() {
    let order: Vec<ResponseTopic> = KEYWORD_RULES.iter().map(|(topic, _)| *topic).collect();
    assert_eq!(
        order,
        vec![
            ResponseTopic::Yield,
            ResponseTopic::Wheat,
            ResponseTopic::Fertilizer,
            ResponseTopic::PestControl,
            ResponseTopic::Weather,
            ResponseTopic::Soil,
            ResponseTopic::Irrigation,
            ResponseTopic::Market,
            ResponseTopic::Organic,
            ResponseTopic::Greeting,
            ResponseTopic::Thanks,
        ]
    );
    assert_eq!(classify("tell me a story"), ResponseTopic::General);
}

/// Property 6: Prediction Table
#[test]
fn test_predict_rice() {
    let prediction = predict("rice");
    assert_eq!(prediction.yield_estimate, "38 quintals/acre");
    assert_eq!(prediction.harvest_date, "25 October 2024");
    assert_eq!(prediction.health_score, 78);
    assert_eq!(prediction.market_price, "₹1,800/quintal");
    assert_eq!(prediction.confidence, 88);
}

/// Property 7: blank sends are no-ops
#[tokio::test]
async fn test_blank_send_is_noop() {
    let chat = responder();
    assert!(chat.send("", Language::English).is_none());
    assert!(chat.send("  ", Language::English).is_none());
    assert_eq!(chat.len(), 1);
    assert!(!chat.is_typing());
}

/// Property 7: Send Lifecycle
/// The user message lands at once, the reply within the delay window
#[tokio::test(start_paused = true)]
async fn test_send_lifecycle() {
    let chat = responder();
    let start = tokio::time::Instant::now();

    let pending = chat.send("Hello", Language::English).unwrap();
    let messages = chat.messages();
    assert_eq!(messages.len(), 2);
    assert_eq!(messages[1].text, "Hello");
    assert!(!messages[1].is_bot);
    assert!(chat.is_typing());

    tokio::time::sleep(Duration::from_millis(1499)).await;
    assert!(chat.is_typing());
    assert_eq!(chat.len(), 2);

    let reply = pending.wait().await.unwrap();
    let elapsed = start.elapsed();
    assert!(elapsed >= Duration::from_millis(1500));
    assert!(elapsed < Duration::from_millis(2500));

    assert!(reply.is_bot);
    assert_eq!(reply.text, ResponseTopic::Greeting.response(Language::English));
    assert!(!chat.is_typing());
    assert_eq!(chat.len(), 3);
    let ids: Vec<i64> = chat.messages().iter().map(|m| m.id).collect();
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
}

/// Property 7: the reply uses the language active at send time
#[tokio::test(start_paused = true)]
async fn test_reply_language_follows_sender() {
    let chat = responder();
    let reply = chat
        .send("weather forecast", Language::Hindi)
        .unwrap()
        .wait()
        .await
        .unwrap();
    assert_eq!(reply.text, ResponseTopic::Weather.response(Language::Hindi));
}

/// Property 7: typing indicator and messages are projected
#[tokio::test(start_paused = true)]
async fn test_projection_while_typing() {
    let chat = responder();
    let mut page = MemoryRenderTarget::with_page();

    let pending = chat.send("irrigation", Language::English).unwrap();
    chat.project(&mut page, Language::English);
    assert!(page.is_visible(TYPING_INDICATOR_ID));
    assert_eq!(page.text(TYPING_INDICATOR_ID), Some("Assistant is thinking..."));
    assert_eq!(page.messages(CHAT_MESSAGES_ID).len(), 2);
    assert_eq!(page.messages(CHAT_MESSAGES_ID)[1].time_label, "Just now");

    pending.wait().await.unwrap();
    chat.project(&mut page, Language::English);
    assert!(!page.is_visible(TYPING_INDICATOR_ID));
    assert_eq!(page.messages(CHAT_MESSAGES_ID).len(), 3);
}
