use crate::bot::HandlerResult;
use crate::store::lists::{song_entry, ListStore};
use teloxide::dispatching::dialogue::InMemStorage;
use teloxide::prelude::*;

/// Per-chat dialog state. A chat is `Idle` until an entry command puts it
/// into one of the collecting states; finishing (or restarting) a dialog
/// returns it to `Idle`. State lives in process memory only and is lost
/// on restart.
#[derive(Clone, Debug, Default)]
pub enum DialogueState {
    #[default]
    Idle,
    ReceiveSongTitle,
    ReceiveSongArtist {
        title: String,
    },
    ReceiveActivity,
}

pub type WeddingDialogue = Dialogue<DialogueState, InMemStorage<DialogueState>>;

fn first_name(msg: &Message) -> String {
    msg.from()
        .map(|user| user.first_name.clone())
        .unwrap_or_else(|| "Friend".to_string())
}

/// Text payload of a dialog reply. Commands are never consumed as dialog
/// input; the dialog stays in its current state.
fn dialog_text(msg: &Message) -> Option<&str> {
    msg.text().filter(|text| !text.starts_with('/'))
}

pub async fn start_song(bot: &Bot, dialogue: &WeddingDialogue, msg: &Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        format!("{}, please enter the song title:", first_name(msg)),
    )
    .await?;
    dialogue.update(DialogueState::ReceiveSongTitle).await?;
    Ok(())
}

pub async fn receive_song_title(
    bot: &Bot,
    dialogue: &WeddingDialogue,
    msg: &Message,
) -> HandlerResult {
    let Some(title) = dialog_text(msg) else {
        return Ok(());
    };
    bot.send_message(msg.chat.id, "Now, enter the artist's name:")
        .await?;
    dialogue
        .update(DialogueState::ReceiveSongArtist {
            title: title.to_string(),
        })
        .await?;
    Ok(())
}

pub async fn receive_song_artist(
    bot: &Bot,
    dialogue: &WeddingDialogue,
    store: &ListStore,
    msg: &Message,
    title: String,
) -> HandlerResult {
    let Some(artist) = dialog_text(msg) else {
        return Ok(());
    };

    store.songs.append_line(&song_entry(&title, artist)).await?;

    bot.send_message(msg.chat.id, "Song added! Here is the updated playlist:")
        .await?;
    let playlist = store.songs.read_all().await?;
    bot.send_message(msg.chat.id, playlist).await?;

    dialogue.exit().await?;
    Ok(())
}

pub async fn start_activity(bot: &Bot, dialogue: &WeddingDialogue, msg: &Message) -> HandlerResult {
    bot.send_message(
        msg.chat.id,
        format!(
            "{}, please suggest an activity for the wedding:",
            first_name(msg)
        ),
    )
    .await?;
    dialogue.update(DialogueState::ReceiveActivity).await?;
    Ok(())
}

pub async fn receive_activity(
    bot: &Bot,
    dialogue: &WeddingDialogue,
    store: &ListStore,
    msg: &Message,
) -> HandlerResult {
    let Some(activity) = dialog_text(msg) else {
        return Ok(());
    };

    store.activities.append_line(activity).await?;

    bot.send_message(
        msg.chat.id,
        "Activity added! Here is the updated activity list:",
    )
    .await?;
    let activity_list = store.activities.read_all().await?;
    bot.send_message(msg.chat.id, activity_list).await?;

    dialogue.exit().await?;
    Ok(())
}
