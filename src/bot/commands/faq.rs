use crate::bot::HandlerResult;
use crate::utils::markdown::escape_markdown;
use teloxide::prelude::*;
use teloxide::types::ParseMode;

const ABOUT_WEDDING: &[(&str, &str)] = &[
    (
        "What is the date and time of the wedding?",
        "December 12th, 2026 at 2 pm.",
    ),
    (
        "Where is the wedding ceremony being held?",
        "The Club at Bella Collina.",
    ),
    (
        "Where will the reception take place?",
        "Same place, The Club at Bella Collina.",
    ),
    (
        "What is the dress code for the wedding?",
        "Semi-Formal/Cocktail Attire.",
    ),
    ("Are children invited to the wedding?", "If needed."),
    (
        "Is there parking available at the venue?",
        "Yes. Carpool drivers will also be available.",
    ),
    (
        "Can I bring a plus-one to the wedding?",
        "Request a plus-one by the RSVP date.",
    ),
    (
        "Will there be any special dietary options at the reception?",
        "Please request.",
    ),
    (
        "Can we take photos or videos during the ceremony?",
        "Yes, and please submit them to the group chat!",
    ),
    (
        "Is there a rehearsal dinner?",
        "Not an official one, but there will be a dinner with family and close friends.",
    ),
];

const ABOUT_BOT: &[(&str, &str)] = &[
    (
        "How do I suggest a song for the wedding playlist?",
        "Type /song in the chat and follow the prompts to suggest a song title and artist. \
         The bot will add it to the playlist.",
    ),
    (
        "How do I suggest an activity for the wedding?",
        "Type /suggestactivity in the chat, and the bot will prompt you to suggest a fun \
         activity. Once submitted, the bot will show the updated list of activities.",
    ),
    (
        "How do I check how many days are left until the wedding?",
        "Type /countdown to see the current countdown to the big day.",
    ),
    (
        "Does the bot do anything automatically?",
        "The bot automatically posts countdown updates every month. As the wedding day \
         approaches, it will post weekly. In the final week, it posts daily reminders. \
         It also sends a motivational quote every 20 messages in the chat. Type /quote \
         to see a quote on demand.",
    ),
    (
        "What do I do if the bot isn't responding correctly?",
        "If the bot seems unresponsive, try typing the command again or asking an admin \
         for help.",
    ),
];

const FAQ_FOOTER: &str =
    "Don't see your question? Just ask in the chat and an admin member will answer shortly.";

pub async fn handle_faq(bot: &Bot, msg: &Message) -> HandlerResult {
    bot.send_message(msg.chat.id, faq_message())
        .parse_mode(ParseMode::MarkdownV2)
        .await?;
    Ok(())
}

/// The full FAQ block, escaped for MarkdownV2: italic section headings,
/// bold questions, plain answers.
pub fn faq_message() -> String {
    let mut out = String::new();
    push_section(&mut out, "About the Wedding", ABOUT_WEDDING);
    push_section(&mut out, "About the Bot", ABOUT_BOT);
    out.push_str(&escape_markdown("---"));
    out.push_str("\n\n");
    out.push_str(&escape_markdown(FAQ_FOOTER));
    out
}

fn push_section(out: &mut String, heading: &str, entries: &[(&str, &str)]) {
    out.push_str(&format!("_{}_\n\n", escape_markdown(heading)));
    for (question, answer) in entries {
        out.push_str(&format!(
            "*{}*\n\\- {}\n\n",
            escape_markdown(question),
            escape_markdown(answer)
        ));
    }
}
