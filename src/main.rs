//! # Wedding Planning Bot Main Entry Point
//!
//! Initializes logging, loads configuration, wires up the suggestion
//! list store and message counter, starts the countdown scheduler, and
//! runs the Telegram bot dispatcher.

use anyhow::Result;
use std::sync::Arc;
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use wedding_bot::bot::handlers::{dialogs::DialogueState, BotHandler};
use wedding_bot::config::Config;
use wedding_bot::services::countdown::CountdownService;
use wedding_bot::services::quotes::QuoteFetcher;
use wedding_bot::store::counter::MessageCounter;
use wedding_bot::store::lists::ListStore;

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "wedding_bot=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;

    info!("Starting Wedding Planning Bot v{}", env!("CARGO_PKG_VERSION"));
    info!(
        "Configuration loaded - List dir: {}, Announcement chat: {}",
        config.list_dir.display(),
        config.announcement_chat_id
    );

    let store = ListStore::new(&config.list_dir);
    let counter = Arc::new(MessageCounter::new());
    let quotes = QuoteFetcher::new();

    // Initialize bot
    info!("Initializing Telegram bot...");
    let bot = Bot::new(&config.telegram_bot_token);
    let handler = BotHandler::new(store, counter, quotes);
    info!("Telegram bot initialized successfully");

    // Initialize and start the countdown scheduler
    info!("Initializing countdown service...");
    let mut countdown_service =
        match CountdownService::new(bot.clone(), ChatId(config.announcement_chat_id)).await {
            Ok(service) => {
                info!("Countdown service initialized successfully");
                service
            }
            Err(e) => {
                tracing::error!("Failed to create countdown service: {}", e);
                return Err(anyhow::anyhow!("Failed to create countdown service: {}", e));
            }
        };

    if let Err(e) = countdown_service.start().await {
        tracing::error!("Failed to start countdown service: {}", e);
    } else {
        info!("Countdown service started successfully");
    }

    // Run the bot until shutdown
    let storage = InMemStorage::<DialogueState>::new();
    Dispatcher::builder(bot, handler.schema())
        .dependencies(dptree::deps![storage])
        .enable_ctrlc_handler()
        .build()
        .dispatch()
        .await;

    // Stop the countdown scheduler on shutdown
    if let Err(e) = countdown_service.stop().await {
        tracing::warn!("Error stopping countdown service: {}", e);
    }

    info!("Application stopped");
    Ok(())
}
