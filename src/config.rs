use anyhow::{anyhow, Result};
use std::env;
use std::path::PathBuf;

/// Chat that receives the automatic countdown posts unless
/// `ANNOUNCEMENT_CHAT_ID` overrides it.
const DEFAULT_ANNOUNCEMENT_CHAT_ID: i64 = -4530637343;

#[derive(Debug, Clone)]
pub struct Config {
    pub telegram_bot_token: String,
    pub announcement_chat_id: i64,
    pub list_dir: PathBuf,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let token = env::var("TELEGRAM_BOT_TOKEN")
            .map_err(|_| anyhow!("TELEGRAM_BOT_TOKEN must be set"))?;

        if token.trim().is_empty() {
            return Err(anyhow!("TELEGRAM_BOT_TOKEN must be set"));
        }

        let announcement_chat_id = match env::var("ANNOUNCEMENT_CHAT_ID") {
            Ok(raw) if !raw.trim().is_empty() => raw
                .trim()
                .parse()
                .map_err(|_| anyhow!("Invalid ANNOUNCEMENT_CHAT_ID"))?,
            _ => DEFAULT_ANNOUNCEMENT_CHAT_ID,
        };

        let list_dir = env::var("LIST_DIR")
            .unwrap_or_else(|_| ".".to_string());
        let list_dir = if list_dir.trim().is_empty() {
            PathBuf::from(".")
        } else {
            PathBuf::from(list_dir)
        };

        Ok(Config {
            telegram_bot_token: token,
            announcement_chat_id,
            list_dir,
        })
    }
}
