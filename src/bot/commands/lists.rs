use crate::bot::HandlerResult;
use crate::store::lists::ListStore;
use teloxide::prelude::*;

pub async fn handle_display_lists(bot: &Bot, msg: &Message, store: &ListStore) -> HandlerResult {
    let songs = store.songs.read_or_notice().await?;
    let activities = store.activities.read_or_notice().await?;

    bot.send_message(msg.chat.id, combined_lists(&songs, &activities))
        .await?;
    Ok(())
}

/// Both lists in one message, separated by a fixed delimiter.
pub fn combined_lists(songs: &str, activities: &str) -> String {
    format!("Song List:\n{songs}\n\n-----\n\nActivity List:\n{activities}")
}
