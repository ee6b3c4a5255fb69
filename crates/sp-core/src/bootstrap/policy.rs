//! Pure navigation policy for the bootstrap branch points.

use crate::route::Route;
use crate::session::SessionTokenState;

/// What the identity snapshot allows the attempt to do next.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IdentityGate {
    /// Neither an email address nor an access token is known.
    AddAccount,
    /// Only an access token is known; the provider login resolves the account.
    ProviderLogin,
    /// An email address is known; continue straight to the account store.
    Resume,
}

impl IdentityGate {
    pub fn evaluate(state: &SessionTokenState) -> Self {
        match (state.has_email_address(), state.has_access_token()) {
            (false, false) => IdentityGate::AddAccount,
            (false, true) => IdentityGate::ProviderLogin,
            (true, _) => IdentityGate::Resume,
        }
    }

    /// Terminal route for gates that end the attempt immediately.
    pub fn terminal_route(&self) -> Option<Route> {
        match self {
            IdentityGate::AddAccount => Some(Route::AddAccount),
            IdentityGate::ProviderLogin | IdentityGate::Resume => None,
        }
    }
}

/// Route for the key-provisioning branch once the key server answered.
pub fn route_for_key_sync(synced: bool) -> Route {
    if synced {
        Route::LoginPrivateKeyDownload
    } else {
        Route::LoginInitial
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::secret::SecretString;

    fn state(email: Option<&str>, token: Option<&str>) -> SessionTokenState {
        SessionTokenState::new(email.map(str::to_string), token.map(SecretString::new))
    }

    #[test]
    fn gate_covers_every_identity_combination() {
        assert_eq!(
            IdentityGate::evaluate(&state(None, None)),
            IdentityGate::AddAccount
        );
        assert_eq!(
            IdentityGate::evaluate(&state(None, Some("token"))),
            IdentityGate::ProviderLogin
        );
        assert_eq!(
            IdentityGate::evaluate(&state(Some("fred@foo.com"), None)),
            IdentityGate::Resume
        );
        assert_eq!(
            IdentityGate::evaluate(&state(Some("fred@foo.com"), Some("token"))),
            IdentityGate::Resume
        );
    }

    #[test]
    fn only_add_account_gate_is_terminal() {
        assert_eq!(
            IdentityGate::AddAccount.terminal_route(),
            Some(Route::AddAccount)
        );
        assert_eq!(IdentityGate::ProviderLogin.terminal_route(), None);
        assert_eq!(IdentityGate::Resume.terminal_route(), None);
    }

    #[test]
    fn key_sync_selects_download_or_initial() {
        assert_eq!(route_for_key_sync(true), Route::LoginPrivateKeyDownload);
        assert_eq!(route_for_key_sync(false), Route::LoginInitial);
    }
}
