pub mod dialogs;
pub mod general_message;
pub mod message;

use crate::bot::commands::Command;
use crate::bot::HandlerResult;
use crate::services::quotes::QuoteFetcher;
use crate::store::counter::MessageCounter;
use crate::store::lists::ListStore;
use dialogs::{DialogueState, WeddingDialogue};
use std::sync::Arc;
use teloxide::{
    dispatching::{dialogue::InMemStorage, UpdateHandler},
    prelude::*,
};

/// Holds the shared state cloned into every branch of the dispatch tree.
pub struct BotHandler {
    store: ListStore,
    counter: Arc<MessageCounter>,
    quotes: QuoteFetcher,
}

impl BotHandler {
    pub fn new(store: ListStore, counter: Arc<MessageCounter>, quotes: QuoteFetcher) -> Self {
        Self {
            store,
            counter,
            quotes,
        }
    }

    /// Builds the update dispatch tree. Commands win over everything;
    /// messages inside an active dialog feed that dialog; any remaining
    /// text message feeds the quote counter.
    pub fn schema(&self) -> UpdateHandler<anyhow::Error> {
        use teloxide::dispatching::UpdateFilterExt;

        let store = self.store.clone();
        let quotes = self.quotes.clone();
        let command_branch = Update::filter_message()
            .filter_command::<Command>()
            .endpoint(
                move |bot: Bot, dialogue: WeddingDialogue, msg: Message, cmd: Command| {
                    let store = store.clone();
                    let quotes = quotes.clone();
                    async move {
                        message::command_handler(bot, dialogue, msg, cmd, store, quotes).await
                    }
                },
            );

        let store_song = self.store.clone();
        let store_activity = self.store.clone();
        let dialog_branch = Update::filter_message()
            .branch(dptree::case![DialogueState::ReceiveSongTitle].endpoint(
                |bot: Bot, dialogue: WeddingDialogue, msg: Message| async move {
                    let result = dialogs::receive_song_title(&bot, &dialogue, &msg).await;
                    run_reported(&bot, &msg, result).await
                },
            ))
            .branch(
                dptree::case![DialogueState::ReceiveSongArtist { title }].endpoint(
                    move |bot: Bot, dialogue: WeddingDialogue, msg: Message, title: String| {
                        let store = store_song.clone();
                        async move {
                            let result =
                                dialogs::receive_song_artist(&bot, &dialogue, &store, &msg, title)
                                    .await;
                            run_reported(&bot, &msg, result).await
                        }
                    },
                ),
            )
            .branch(dptree::case![DialogueState::ReceiveActivity].endpoint(
                move |bot: Bot, dialogue: WeddingDialogue, msg: Message| {
                    let store = store_activity.clone();
                    async move {
                        let result =
                            dialogs::receive_activity(&bot, &dialogue, &store, &msg).await;
                        run_reported(&bot, &msg, result).await
                    }
                },
            ));

        let counter = self.counter.clone();
        let quotes = self.quotes.clone();
        let chatter_branch =
            Update::filter_message().endpoint(move |bot: Bot, msg: Message| {
                let counter = counter.clone();
                let quotes = quotes.clone();
                async move {
                    let result =
                        general_message::handle_chat_message(&bot, &msg, &counter, &quotes).await;
                    run_reported(&bot, &msg, result).await
                }
            });

        teloxide::dispatching::dialogue::enter::<
            Update,
            InMemStorage<DialogueState>,
            DialogueState,
            _,
        >()
        .branch(command_branch)
        .branch(dialog_branch)
        .branch(chatter_branch)
    }
}

/// Converts a handler failure into a log line plus a best-effort notice
/// to the originating chat, keeping the dispatcher alive.
async fn run_reported(bot: &Bot, msg: &Message, result: HandlerResult) -> HandlerResult {
    if let Err(err) = result {
        tracing::error!("Exception while handling an update: {err:#}");
        notify_chat_of_error(bot, msg.chat.id).await;
    }
    Ok(())
}

/// Best-effort "An error occurred!" notice; a failed send is only logged.
pub async fn notify_chat_of_error(bot: &Bot, chat_id: ChatId) {
    if let Err(send_err) = bot.send_message(chat_id, "An error occurred!").await {
        tracing::warn!(
            "Failed to deliver error notice to chat {}: {}",
            chat_id,
            send_err
        );
    }
}
