use teloxide::utils::command::BotCommands;
use wedding_bot::bot::commands::Command;

#[cfg(test)]
mod command_parsing_tests {
    use super::*;

    #[test]
    fn test_start_command_parsing() {
        let result = Command::parse("/start", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Start));
    }

    #[test]
    fn test_countdown_command_parsing() {
        let result = Command::parse("/countdown", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Countdown));
    }

    #[test]
    fn test_faq_command_parsing() {
        let result = Command::parse("/faq", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Faq));
    }

    #[test]
    fn test_quote_command_parsing() {
        let result = Command::parse("/quote", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Quote));
    }

    #[test]
    fn test_displaylists_command_parsing() {
        let result = Command::parse("/displaylists", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Displaylists));
    }

    #[test]
    fn test_song_command_parsing() {
        let result = Command::parse("/song", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Song));
    }

    #[test]
    fn test_suggestactivity_command_parsing() {
        let result = Command::parse("/suggestactivity", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Suggestactivity));
    }

    #[test]
    fn test_unknown_command() {
        let result = Command::parse("/unknown_command", "testbot");
        assert!(result.is_err());
    }

    #[test]
    fn test_plain_text_is_not_a_command() {
        let result = Command::parse("just chatting about the wedding", "testbot");
        assert!(result.is_err());
    }

    #[test]
    fn test_command_with_bot_username() {
        let result = Command::parse("/song@testbot", "testbot");
        assert!(result.is_ok());
        assert!(matches!(result.unwrap(), Command::Song));
    }

    #[test]
    fn test_command_with_different_bot_username() {
        // Should fail because it's not for our bot
        let result = Command::parse("/song@otherbot", "testbot");
        assert!(result.is_err());
    }

    #[test]
    fn test_commands_description() {
        let descriptions = Command::descriptions().to_string();
        assert!(descriptions.contains("start"));
        assert!(descriptions.contains("countdown"));
        assert!(descriptions.contains("faq"));
        assert!(descriptions.contains("quote"));
        assert!(descriptions.contains("displaylists"));
        assert!(descriptions.contains("song"));
        assert!(descriptions.contains("suggestactivity"));
    }

    #[test]
    fn test_slash_names_match_parser() {
        let commands = [
            Command::Start,
            Command::Countdown,
            Command::Faq,
            Command::Quote,
            Command::Displaylists,
            Command::Song,
            Command::Suggestactivity,
        ];

        for cmd in commands {
            let reparsed = Command::parse(cmd.as_slash(), "testbot");
            assert!(reparsed.is_ok(), "Failed to reparse: {}", cmd.as_slash());
        }
    }
}
