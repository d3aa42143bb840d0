//! Chat command recognition

/// Reserved prefix that turns a chat send into image generation
pub const IMAGE_COMMAND: &str = "/gambar";

/// What a chat input asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatCommand {
    /// `/gambar <prompt>`; the prompt may be empty
    GenerateImage { prompt: String },
    /// Anything else goes to the tutor
    Ask,
}

impl ChatCommand {
    /// Classify user input.
    ///
    /// The trimmed input must start with `/gambar` followed by whitespace or
    /// nothing at all; `/gambarku` is an ordinary message.
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        match trimmed.strip_prefix(IMAGE_COMMAND) {
            Some(rest) if rest.is_empty() || rest.starts_with(char::is_whitespace) => {
                ChatCommand::GenerateImage {
                    prompt: rest.trim().to_string(),
                }
            }
            _ => ChatCommand::Ask,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_command_with_prompt() {
        assert_eq!(
            ChatCommand::parse("  /gambar   kucing astronot di bulan "),
            ChatCommand::GenerateImage {
                prompt: "kucing astronot di bulan".to_string()
            }
        );
    }

    #[test]
    fn test_command_with_only_whitespace() {
        assert_eq!(
            ChatCommand::parse("/gambar    "),
            ChatCommand::GenerateImage {
                prompt: String::new()
            }
        );
        assert_eq!(
            ChatCommand::parse("/gambar"),
            ChatCommand::GenerateImage {
                prompt: String::new()
            }
        );
    }

    #[test]
    fn test_plain_text_and_lookalikes_are_questions() {
        assert_eq!(ChatCommand::parse("apa itu fikih?"), ChatCommand::Ask);
        assert_eq!(ChatCommand::parse("/gambarku bagus"), ChatCommand::Ask);
        assert_eq!(ChatCommand::parse("tolong /gambar kucing"), ChatCommand::Ask);
    }
}
