use crate::session::AccessToken;

/// Read access to the mail provider's OAuth token.
pub trait OAuthStatePort: Send + Sync {
    fn access_token(&self) -> Option<AccessToken>;
}
