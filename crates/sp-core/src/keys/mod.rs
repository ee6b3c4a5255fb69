//! Local key material held by the account store for a returning user.

use sha2::{Digest, Sha256};

use crate::secret::SecretString;

/// Armored OpenPGP key pair for one account.
///
/// Only the presence of a key pair matters to the bootstrap decision;
/// its content is handed to the mail provider for unlocking.
#[derive(Debug)]
pub struct KeyPair {
    pub key_id: Option<String>,
    pub public_key: String,
    pub private_key: SecretString,
}

impl KeyPair {
    pub fn new(public_key: impl Into<String>, private_key: SecretString) -> Self {
        Self {
            key_id: None,
            public_key: public_key.into(),
            private_key,
        }
    }

    pub fn with_key_id(mut self, key_id: impl Into<String>) -> Self {
        self.key_id = Some(key_id.into());
        self
    }

    /// Hex SHA-256 of the armored public key, safe to log.
    pub fn fingerprint(&self) -> String {
        let digest = Sha256::digest(self.public_key.as_bytes());
        hex::encode(&digest[..16])
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fingerprint_is_stable_and_ignores_private_key() {
        let a = KeyPair::new("public", SecretString::new("private-a"));
        let b = KeyPair::new("public", SecretString::new("private-b"));

        assert_eq!(a.fingerprint(), b.fingerprint());
        assert_eq!(a.fingerprint().len(), 32);
    }

    #[test]
    fn debug_output_redacts_private_key() {
        let pair = KeyPair::new("public", SecretString::new("super-secret")).with_key_id("ABCD");

        let rendered = format!("{pair:?}");
        assert!(!rendered.contains("super-secret"));
        assert!(rendered.contains("ABCD"));
    }
}
