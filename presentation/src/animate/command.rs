//! Animation REPL input parsing

use belajar_domain::AspectRatio;
use std::path::PathBuf;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AnimateCommand {
    SelectKey,
    ChooseImage(PathBuf),
    ChooseImageUsage,
    Ratio(AspectRatio),
    Generate,
    Retry,
    StartOver,
    Help,
    Back,
    Unknown(String),
}

impl AnimateCommand {
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        let (head, rest) = match trimmed.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, rest.trim()),
            None => (trimmed, ""),
        };
        if let Ok(ratio) = trimmed.parse::<AspectRatio>() {
            return AnimateCommand::Ratio(ratio);
        }
        match head.to_lowercase().as_str() {
            "kunci" => AnimateCommand::SelectKey,
            "pilih" if rest.is_empty() => AnimateCommand::ChooseImageUsage,
            "pilih" => AnimateCommand::ChooseImage(PathBuf::from(rest)),
            "buat" => AnimateCommand::Generate,
            "coba" => AnimateCommand::Retry,
            "ulang" => AnimateCommand::StartOver,
            "?" | "bantuan" | "help" => AnimateCommand::Help,
            "k" | "kembali" | "q" | "keluar" => AnimateCommand::Back,
            _ => AnimateCommand::Unknown(trimmed.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_ratio() {
        assert_eq!(
            AnimateCommand::parse("16:9"),
            AnimateCommand::Ratio(AspectRatio::Landscape)
        );
        assert_eq!(
            AnimateCommand::parse(" 9:16 "),
            AnimateCommand::Ratio(AspectRatio::Portrait)
        );
    }

    #[test]
    fn test_choose_image() {
        assert_eq!(
            AnimateCommand::parse("pilih ./foto/kucing.png"),
            AnimateCommand::ChooseImage(PathBuf::from("./foto/kucing.png"))
        );
        assert_eq!(AnimateCommand::parse("pilih"), AnimateCommand::ChooseImageUsage);
    }

    #[test]
    fn test_actions() {
        assert_eq!(AnimateCommand::parse("kunci"), AnimateCommand::SelectKey);
        assert_eq!(AnimateCommand::parse("buat"), AnimateCommand::Generate);
        assert_eq!(AnimateCommand::parse("coba"), AnimateCommand::Retry);
        assert_eq!(AnimateCommand::parse("ulang"), AnimateCommand::StartOver);
        assert_eq!(AnimateCommand::parse("kembali"), AnimateCommand::Back);
        assert_eq!(
            AnimateCommand::parse("4:3"),
            AnimateCommand::Unknown("4:3".to_string())
        );
    }
}
