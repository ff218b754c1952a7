use std::sync::OnceLock;

use argon2::password_hash::rand_core::OsRng;
use argon2::password_hash::PasswordHash;
use argon2::password_hash::PasswordHasher as Argon2PasswordHasher;
use argon2::password_hash::PasswordVerifier;
use argon2::password_hash::SaltString;
use argon2::Algorithm;
use argon2::Argon2;
use argon2::Params;
use argon2::Version;

use super::credential::HashedCredential;
use super::errors::PasswordError;

const DECOY_SECRET: &str = "decoy-secret-for-unknown-accounts";

/// Password hashing implementation.
///
/// Argon2id with a fresh random salt per hash. The work factor is the Argon2
/// iteration count; memory and parallelism stay at the library defaults.
pub struct PasswordHasher {
    argon2: Argon2<'static>,
    decoy: OnceLock<Option<HashedCredential>>,
}

impl PasswordHasher {
    /// Create a new password hasher with the library's default cost.
    ///
    /// # Returns
    /// PasswordHasher instance configured with secure defaults
    pub fn new() -> Self {
        Self {
            argon2: Argon2::default(),
            decoy: OnceLock::new(),
        }
    }

    /// Create a password hasher with an explicit work factor.
    ///
    /// # Arguments
    /// * `cost` - Argon2 iteration count (at least 1)
    ///
    /// # Errors
    /// * `InvalidCost` - The primitive rejects the cost parameter
    pub fn with_cost(cost: u32) -> Result<Self, PasswordError> {
        let params = Params::new(
            Params::DEFAULT_M_COST,
            cost,
            Params::DEFAULT_P_COST,
            None,
        )
        .map_err(|e| PasswordError::InvalidCost {
            cost,
            reason: e.to_string(),
        })?;

        Ok(Self {
            argon2: Argon2::new(Algorithm::Argon2id, Version::V0x13, params),
            decoy: OnceLock::new(),
        })
    }

    /// Hash a plaintext password securely.
    ///
    /// Empty passwords are accepted; rejecting them is caller policy.
    ///
    /// # Arguments
    /// * `password` - Plaintext password to hash
    ///
    /// # Returns
    /// PHC string format hash (includes algorithm, parameters, salt, and hash)
    ///
    /// # Errors
    /// * `HashingFailed` - Password hashing operation failed
    pub fn hash(&self, password: &str) -> Result<HashedCredential, PasswordError> {
        let salt = SaltString::generate(&mut OsRng);

        self.argon2
            .hash_password(password.as_bytes(), &salt)
            .map(|hash| HashedCredential::new(hash.to_string()))
            .map_err(|e| PasswordError::HashingFailed(e.to_string()))
    }

    /// Verify a password against a stored hash.
    ///
    /// Parameters are read from the stored hash, so hashes produced under an
    /// older cost keep verifying. The digest comparison is the primitive's own
    /// constant-time check.
    ///
    /// # Returns
    /// True if password matches; false on mismatch or when the hash cannot be parsed
    pub fn verify(&self, password: &str, hash: &HashedCredential) -> bool {
        match PasswordHash::new(hash.as_str()) {
            Ok(parsed_hash) => self
                .argon2
                .verify_password(password.as_bytes(), &parsed_hash)
                .is_ok(),
            Err(_) => false,
        }
    }

    /// Run a full verification against a fixed decoy hash and discard the result.
    ///
    /// Used when no stored hash exists so the caller spends the same work as a
    /// real mismatch.
    pub fn verify_decoy(&self, password: &str) {
        let decoy = self
            .decoy
            .get_or_init(|| self.hash(DECOY_SECRET).ok());

        if let Some(decoy) = decoy {
            let _ = self.verify(password, decoy);
        }
    }
}

impl Default for PasswordHasher {
    fn default() -> Self {
        Self::new()
    }
}
