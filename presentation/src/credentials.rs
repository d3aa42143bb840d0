//! Terminal API key prompt

use crate::input::{Input, LineReader};
use async_trait::async_trait;
use belajar_application::{CredentialError, CredentialHost};
use belajar_infrastructure::ApiKeyStore;
use colored::Colorize;
use tracing::info;

/// Credential host backed by a line prompt.
///
/// The key goes straight into the shared [`ApiKeyStore`], so the Gemini
/// adapter uses it from the next request on. The prompt keeps no history.
pub struct TerminalKeySelector {
    keys: ApiKeyStore,
}

impl TerminalKeySelector {
    pub fn new(keys: ApiKeyStore) -> Self {
        Self { keys }
    }
}

#[async_trait]
impl CredentialHost for TerminalKeySelector {
    async fn has_selected_key(&self) -> bool {
        self.keys.is_set()
    }

    async fn open_select_key(&self) -> Result<(), CredentialError> {
        println!(
            "{}",
            "Masukkan kunci API Gemini (https://aistudio.google.com/apikey).".dimmed()
        );
        let input = tokio::task::spawn_blocking(|| LineReader::ephemeral().read("kunci API"))
            .await
            .map_err(|e| CredentialError::Unavailable(e.to_string()))?
            .map_err(|e| CredentialError::Unavailable(e.to_string()))?;

        self.apply(input);
        Ok(())
    }
}

impl TerminalKeySelector {
    /// Store a submitted key. Blank lines and cancelled prompts keep the
    /// current key.
    fn apply(&self, input: Input) {
        match input {
            Input::Line(key) if !key.trim().is_empty() => {
                info!("API key updated from the terminal prompt");
                self.keys.set(key);
            }
            _ => {}
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_blank_entry_keeps_current_key() {
        let keys = ApiKeyStore::new(Some("AIza-lama".to_string()));
        let selector = TerminalKeySelector::new(keys.clone());

        selector.apply(Input::Line(String::new()));
        selector.apply(Input::Interrupted);
        selector.apply(Input::Eof);
        assert!(selector.has_selected_key().await);
        assert_eq!(keys.get().as_deref(), Some("AIza-lama"));

        selector.apply(Input::Line("AIza-baru".to_string()));
        assert_eq!(keys.get().as_deref(), Some("AIza-baru"));
    }
}
