//! Credential selection port
//!
//! The host environment decides how an API key is chosen; the animation flow
//! only asks whether one is selected and asks the host to prompt for one.

use async_trait::async_trait;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CredentialError {
    #[error("Credential selection is not available: {0}")]
    Unavailable(String),
}

#[async_trait]
pub trait CredentialHost: Send + Sync {
    /// Whether a credential has already been selected
    async fn has_selected_key(&self) -> bool;

    /// Ask the user to select a credential.
    ///
    /// Returning `Ok` does not mean a usable key was chosen.
    async fn open_select_key(&self) -> Result<(), CredentialError>;
}
