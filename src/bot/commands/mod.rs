pub mod countdown;
pub mod faq;
pub mod lists;
pub mod quote;

use teloxide::utils::command::BotCommands;

#[derive(BotCommands, Clone, Debug)]
#[command(rename_rule = "lowercase", description = "Wedding Planning Bot commands:")]
pub enum Command {
    #[command(description = "Greet the chat")]
    Start,
    #[command(description = "Show the countdown to the wedding")]
    Countdown,
    #[command(description = "Answers to frequently asked questions")]
    Faq,
    #[command(description = "Send a motivational quote")]
    Quote,
    #[command(description = "Show the song and activity lists")]
    Displaylists,
    #[command(description = "Suggest a song for the wedding playlist")]
    Song,
    #[command(description = "Suggest an activity for the wedding")]
    Suggestactivity,
}

impl Command {
    /// Slash form of the command, for log lines.
    pub fn as_slash(&self) -> &'static str {
        match self {
            Command::Start => "/start",
            Command::Countdown => "/countdown",
            Command::Faq => "/faq",
            Command::Quote => "/quote",
            Command::Displaylists => "/displaylists",
            Command::Song => "/song",
            Command::Suggestactivity => "/suggestactivity",
        }
    }
}
