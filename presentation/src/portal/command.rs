//! Portal input parsing

/// What a line typed on a portal screen asks for
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PortalCommand {
    /// Choose the n-th listed item (1-based)
    Select(usize),
    Back,
    Home,
    Ask,
    Animate,
    Help,
    Quit,
    Unknown(String),
}

impl PortalCommand {
    pub fn parse(input: &str) -> Self {
        let input = input.trim();
        if let Ok(n) = input.parse::<usize>() {
            return PortalCommand::Select(n);
        }
        match input.to_lowercase().as_str() {
            "k" | "kembali" | "back" => PortalCommand::Back,
            "h" | "home" => PortalCommand::Home,
            "t" | "tanya" => PortalCommand::Ask,
            "a" | "animasi" => PortalCommand::Animate,
            "?" | "bantuan" | "help" => PortalCommand::Help,
            "q" | "keluar" | "quit" | "exit" => PortalCommand::Quit,
            _ => PortalCommand::Unknown(input.to_string()),
        }
    }
}
