//! Navigation routes produced by the bootstrap flow.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// One of the five screens a bootstrap attempt can land on.
///
/// The path literals are the contract with the view layer and must not change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Route {
    /// No identity at all: start account onboarding.
    AddAccount,
    /// Local keys exist but could not be unlocked.
    LoginExisting,
    /// Fully unlocked returning user.
    Account,
    /// No local keys, but a backup exists on the key server.
    LoginPrivateKeyDownload,
    /// No local keys and nothing to download: generate a new key.
    LoginInitial,
}

impl Route {
    pub const ALL: [Route; 5] = [
        Route::AddAccount,
        Route::LoginExisting,
        Route::Account,
        Route::LoginPrivateKeyDownload,
        Route::LoginInitial,
    ];

    pub fn as_path(&self) -> &'static str {
        match self {
            Route::AddAccount => "/add-account",
            Route::LoginExisting => "/login-existing",
            Route::Account => "/account",
            Route::LoginPrivateKeyDownload => "/login-privatekey-download",
            Route::LoginInitial => "/login-initial",
        }
    }
}

impl fmt::Display for Route {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_path())
    }
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("unknown route: {0}")]
pub struct UnknownRoute(pub String);

impl FromStr for Route {
    type Err = UnknownRoute;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Route::ALL
            .into_iter()
            .find(|route| route.as_path() == s)
            .ok_or_else(|| UnknownRoute(s.to_string()))
    }
}

impl TryFrom<String> for Route {
    type Error = UnknownRoute;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Route> for String {
    fn from(route: Route) -> Self {
        route.as_path().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn paths_match_view_contract() {
        let paths: Vec<&str> = Route::ALL.iter().map(Route::as_path).collect();
        assert_eq!(
            paths,
            [
                "/add-account",
                "/login-existing",
                "/account",
                "/login-privatekey-download",
                "/login-initial",
            ]
        );
    }

    #[test]
    fn parse_rejects_unknown_path() {
        assert_eq!("/account".parse::<Route>(), Ok(Route::Account));
        assert_eq!(
            "/inbox".parse::<Route>(),
            Err(UnknownRoute("/inbox".to_string()))
        );
    }

    #[test]
    fn serializes_as_path_string() {
        let json = serde_json::to_string(&Route::LoginPrivateKeyDownload).unwrap();
        assert_eq!(json, "\"/login-privatekey-download\"");

        let parsed: Route = serde_json::from_str("\"/login-initial\"").unwrap();
        assert_eq!(parsed, Route::LoginInitial);
    }
}
