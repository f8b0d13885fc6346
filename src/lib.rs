//! # Wedding Planning Bot
//!
//! A Telegram bot for coordinating a wedding: fixed commands, two short
//! guided dialogs for collecting song and activity suggestions, a quote
//! every 20 chat messages, and automatic countdown posts as the big day
//! approaches.
//!
//! ## Features
//! - Song and activity suggestion lists kept as append-only text files
//! - Countdown to the wedding date on demand and on a daily schedule
//! - Motivational quotes from the ZenQuotes API with graceful fallbacks
//! - FAQ about the wedding and the bot itself

/// Bot command handlers, dialogs, and message processing
pub mod bot;
/// Configuration management and environment variables
pub mod config;
/// Background services: quote fetching and scheduled countdown posts
pub mod services;
/// Suggestion list files and the chat message counter
pub mod store;
/// Utility functions for datetime, markdown, and logging
pub mod utils;
