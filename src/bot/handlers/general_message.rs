use crate::bot::HandlerResult;
use crate::services::quotes::QuoteFetcher;
use crate::store::counter::MessageCounter;
use teloxide::prelude::*;

/// Counts ordinary chat messages and posts a motivational quote to the
/// chat that hit the threshold. The counter is shared across all chats.
pub async fn handle_chat_message(
    bot: &Bot,
    msg: &Message,
    counter: &MessageCounter,
    quotes: &QuoteFetcher,
) -> HandlerResult {
    let Some(text) = msg.text() else {
        return Ok(());
    };
    if text.starts_with('/') {
        return Ok(());
    }

    if counter.record_message() {
        let quote = quotes.fetch().await;
        bot.send_message(
            msg.chat.id,
            format!("Here's a motivational quote for you:\n\n{quote}"),
        )
        .await?;
    }

    Ok(())
}
