use super::{dialogs, notify_chat_of_error};
use crate::bot::commands::{countdown, faq, lists, quote, Command};
use crate::bot::handlers::dialogs::WeddingDialogue;
use crate::bot::HandlerResult;
use crate::services::quotes::QuoteFetcher;
use crate::store::lists::ListStore;
use crate::utils::logging::{log_command_error, log_command_start};
use teloxide::prelude::*;

pub async fn command_handler(
    bot: Bot,
    dialogue: WeddingDialogue,
    msg: Message,
    cmd: Command,
    store: ListStore,
    quotes: QuoteFetcher,
) -> HandlerResult {
    let chat_id = msg.chat.id;
    let (user_name, user_id) = msg
        .from()
        .map(|user| (user.first_name.clone(), i64::try_from(user.id.0).unwrap_or_default()))
        .unwrap_or_else(|| ("unknown".to_string(), 0));

    log_command_start(cmd.as_slash(), &user_name, user_id, chat_id.0);

    let result = match &cmd {
        Command::Start => bot
            .send_message(chat_id, "Hello! Welcome to the Wedding Planning Bot.")
            .await
            .map(drop)
            .map_err(Into::into),
        Command::Countdown => countdown::handle_countdown(&bot, &msg).await,
        Command::Faq => faq::handle_faq(&bot, &msg).await,
        Command::Quote => quote::handle_quote(&bot, &msg, &quotes).await,
        Command::Displaylists => lists::handle_display_lists(&bot, &msg, &store).await,
        Command::Song => dialogs::start_song(&bot, &dialogue, &msg).await,
        Command::Suggestactivity => dialogs::start_activity(&bot, &dialogue, &msg).await,
    };

    if let Err(err) = result {
        log_command_error(
            cmd.as_slash(),
            &user_name,
            user_id,
            chat_id.0,
            &format!("{err:#}"),
        );
        notify_chat_of_error(&bot, chat_id).await;
    }

    Ok(())
}
