//! Session token state read at the start of every bootstrap attempt.

use crate::secret::SecretString;

/// OAuth access token for the mail provider.
pub type AccessToken = SecretString;

/// Identity snapshot taken once per bootstrap attempt.
///
/// Both fields are read from the auth and OAuth collaborators after
/// `AuthPort::init` succeeds and are never written back by the orchestrator.
#[derive(Debug, Default)]
pub struct SessionTokenState {
    pub email_address: Option<String>,
    pub access_token: Option<AccessToken>,
}

impl SessionTokenState {
    pub fn new(email_address: Option<String>, access_token: Option<AccessToken>) -> Self {
        // An empty string is treated the same as a missing value.
        Self {
            email_address: email_address.filter(|email| !email.trim().is_empty()),
            access_token: access_token.filter(|token| !token.is_empty()),
        }
    }

    pub fn has_email_address(&self) -> bool {
        self.email_address.is_some()
    }

    pub fn has_access_token(&self) -> bool {
        self.access_token.is_some()
    }
}
