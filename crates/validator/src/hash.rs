//! One-way hash capability for hashed field comparison
//!
//! Password forms typically compare a stored, already-hashed password with
//! the plaintext confirmation the user typed. The hash function belongs to
//! the host's authentication layer; rules only call it. Any
//! `Fn(&str) -> String + Send + Sync` works, and [`SaltedSha256`] covers the
//! common salted-digest scheme.

use std::sync::Arc;

/// A one-way transformation applied to a comparison value.
pub trait OneWayHash: Send + Sync {
    /// Hashes `input`. Must be deterministic.
    fn hash(&self, input: &str) -> String;
}

impl<F> OneWayHash for F
where
    F: Fn(&str) -> String + Send + Sync,
{
    fn hash(&self, input: &str) -> String {
        self(input)
    }
}

/// Shared, thread-safe handle to a hash function.
pub type SharedHash = Arc<dyn OneWayHash>;

// ============================================================================
// SALTED SHA-256
// ============================================================================

/// Lowercase hex SHA-256 of `salt || input`.
///
/// # Examples
///
/// ```rust
/// use kotoba_validator::hash::{OneWayHash, SaltedSha256};
///
/// let hash = SaltedSha256::new("");
/// assert_eq!(
///     hash.hash("abc"),
///     "ba7816bf8f01cfea414140de5dae2223b00361a396177a9cb410ff61f20015ad",
/// );
/// ```
#[cfg(feature = "sha2")]
#[derive(Clone)]
pub struct SaltedSha256 {
    salt: String,
}

#[cfg(feature = "sha2")]
impl SaltedSha256 {
    /// Creates a hash with the given salt prefix.
    pub fn new(salt: impl Into<String>) -> Self {
        Self { salt: salt.into() }
    }
}

#[cfg(feature = "sha2")]
impl OneWayHash for SaltedSha256 {
    fn hash(&self, input: &str) -> String {
        use sha2::{Digest, Sha256};

        let mut hasher = Sha256::new();
        hasher.update(self.salt.as_bytes());
        hasher.update(input.as_bytes());
        hex::encode(hasher.finalize())
    }
}

#[cfg(feature = "sha2")]
impl std::fmt::Debug for SaltedSha256 {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SaltedSha256")
            .field("salt", &"<redacted>")
            .finish()
    }
}
