use crate::bot::HandlerResult;
use crate::utils::datetime::countdown_message;
use chrono::Utc;
use teloxide::prelude::*;

pub async fn handle_countdown(bot: &Bot, msg: &Message) -> HandlerResult {
    bot.send_message(msg.chat.id, countdown_message(Utc::now()))
        .await?;
    Ok(())
}
