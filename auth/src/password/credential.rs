use std::fmt;

/// Stored password hash in PHC string format.
///
/// Encodes algorithm, version, cost parameters, salt and digest. This is the only
/// form of a password that is ever persisted.
#[derive(Clone, PartialEq, Eq)]
pub struct HashedCredential(String);

impl HashedCredential {
    /// Wrap a hash loaded from storage.
    ///
    /// No validation happens here: a malformed value simply never verifies.
    pub fn new(phc: impl Into<String>) -> Self {
        Self(phc.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

// Digest bytes stay out of logs even though they are not the plaintext.
impl fmt::Debug for HashedCredential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HashedCredential").field(&"[REDACTED]").finish()
    }
}
