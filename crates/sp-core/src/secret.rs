use std::fmt;
use std::ops::Deref;
use zeroize::Zeroize;

/// A sensitive string (access token, armored private key) that must never be
/// logged or serialized.
///
/// - not `Clone`; copies are explicit via [`SecretString::duplicate`]
/// - `Debug` / `Display` print `[REDACTED]`
/// - memory is zeroed on drop
pub struct SecretString {
    inner: String,
}

impl SecretString {
    pub fn new(value: impl Into<String>) -> Self {
        Self {
            inner: value.into(),
        }
    }

    /// Borrow the inner secret.
    pub fn expose(&self) -> &str {
        &self.inner
    }

    /// Explicit copy for handing the secret to another owner.
    pub fn duplicate(&self) -> Self {
        Self::new(self.inner.clone())
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }
}

impl fmt::Debug for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl fmt::Display for SecretString {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("[REDACTED]")
    }
}

impl Deref for SecretString {
    type Target = str;

    fn deref(&self) -> &Self::Target {
        self.expose()
    }
}

impl PartialEq for SecretString {
    fn eq(&self, other: &Self) -> bool {
        self.inner == other.inner
    }
}

impl Eq for SecretString {}

impl Drop for SecretString {
    fn drop(&mut self) {
        self.inner.zeroize();
    }
}
