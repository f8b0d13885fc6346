use crate::bot::HandlerResult;
use crate::services::quotes::QuoteFetcher;
use teloxide::prelude::*;

pub async fn handle_quote(bot: &Bot, msg: &Message, quotes: &QuoteFetcher) -> HandlerResult {
    let quote = quotes.fetch().await;
    bot.send_message(msg.chat.id, quote).await?;
    Ok(())
}
