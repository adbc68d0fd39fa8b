//! Farm Assistant - terminal driver
//!
//! Runs the assistant against an in-memory page and prints what a farmer would
//! see: notifications, chat replies and the active tab.

use farm_assistant::command::{parse_command, Command, HELP_TEXT};
use farm_assistant::render::{
    MemoryRenderTarget, CURRENT_TIME_ID, METRIC_VALUE_CLASS, PREDICTION_VALUE_CLASS,
};
use farm_assistant::{AppState, Config};
use shared::NotificationKind;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "farm_assistant=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::load()?;

    tracing::info!("Starting Farm Assistant");
    tracing::info!("Environment: {}", config.environment);

    let mut state = AppState::from_config(config)?;
    let mut page = MemoryRenderTarget::with_page();
    state.init(&mut page);

    println!("{}", state.translations.translate("app.title"));
    println!("{}", page.text(CURRENT_TIME_ID).unwrap_or_default());
    println!("{}", HELP_TEXT);

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let keep_going = handle_line(&mut state, &mut page, &line).await;
        print_notifications(&mut page);
        if !keep_going {
            break;
        }
    }

    tracing::info!("Farm Assistant stopped");
    Ok(())
}

/// Run one input line; returns `false` when the user asked to quit
async fn handle_line(state: &mut AppState, page: &mut MemoryRenderTarget, line: &str) -> bool {
    match parse_command(line) {
        Command::Tab(tab) => match state.show_tab(&tab, page) {
            Some(activation) => show_active(state, page, &activation.tab),
            None => println!("Unknown tab: {}", tab),
        },
        Command::Next => {
            if let Some(activation) = state.next_tab(page) {
                show_active(state, page, &activation.tab);
            }
        }
        Command::Previous => {
            if let Some(activation) = state.previous_tab(page) {
                show_active(state, page, &activation.tab);
            }
        }
        Command::Language(None) => {
            if let Err(e) = state.toggle_language(page) {
                tracing::error!("Language change failed: {}", e);
            }
        }
        Command::Language(Some(code)) => match state.set_language(&code, page) {
            Ok(true) => println!("{}", state.translations.translate("app.title")),
            Ok(false) => println!("Unknown language: {}", code),
            Err(e) => tracing::error!("Language change failed: {}", e),
        },
        Command::Location(location) => {
            state.change_location(&location, page);
            println!("{}", page.slots(METRIC_VALUE_CLASS).join(" | "));
        }
        Command::Predict(crop) => {
            state.select_prediction_crop(&crop, page);
            if state.crops.is_empty() {
                println!("{}", state.translations.translate("predictions.noPredictions"));
            } else {
                println!("{}", page.slots(PREDICTION_VALUE_CLASS).join(" | "));
            }
        }
        Command::Crop(fields) => {
            for (name, value) in &fields {
                if !state.set_form_field(name, value) {
                    println!("Unknown field: {}", name);
                }
            }
            // failures already surface as notifications
            let _ = state.submit_crop(page);
        }
        Command::Crops => {
            for record in state.crops.records() {
                println!(
                    "#{} {} planted {} on {} acres",
                    record.id, record.crop_type, record.planting_date, record.field_size
                );
            }
        }
        Command::Clear => {
            if let Err(e) = state.clear_crops() {
                tracing::error!("Could not clear crops: {}", e);
            }
        }
        Command::Time => {
            state.refresh_clock(page);
            println!("{}", page.text(CURRENT_TIME_ID).unwrap_or_default());
        }
        Command::Help => println!("{}", HELP_TEXT),
        Command::Quit => return false,
        Command::Chat(text) => {
            if let Some(pending) = state.send_chat(&text, page) {
                println!("{}", state.translations.translate("chat.thinking"));
                if let Some(reply) = pending.wait().await {
                    println!("> {}", reply.text);
                }
                state.refresh_chat(page);
            }
        }
        Command::Unknown(text) => println!("Unknown command: {}", text),
    }
    true
}

fn show_active(state: &AppState, page: &MemoryRenderTarget, tab: &str) {
    println!("[{}]", state.translations.translate(&format!("nav.{}", tab)));
    if tab == "chat" && state.chat.suggestions_visible() {
        for suggestion in state.chat_suggestions() {
            println!("  - {}", suggestion);
        }
    }
    if tab == "weather" {
        println!("{}", page.slots(METRIC_VALUE_CLASS).join(" | "));
    }
}

fn print_notifications(page: &mut MemoryRenderTarget) {
    for notification in std::mem::take(&mut page.notifications) {
        let marker = match notification.kind {
            NotificationKind::Success => "✓",
            NotificationKind::Error => "✗",
        };
        println!("{} {}", marker, notification.message);
    }
}
