//! Salted SHA-256 password digests for stored credentials.
//!
//! This is the legacy scheme the credential store was written against: one
//! application-wide salt appended to the plain password, a single SHA-256
//! round, and a lowercase-hex rendering compared with plain string equality.
//!
//! DO NOT USE for new credential storage. There is no per-password salt, no
//! work factor, and no constant-time comparison. Every digest already in
//! storage depends on this exact scheme, so changing the salt, the
//! concatenation order, or the encoding invalidates all existing
//! credentials; migrating to a real password-hashing scheme is a storage
//! format change, not an in-place fix.

use core::str::FromStr;

use serde::{Deserialize, Serialize};
use sha2::{Digest, Sha256};

use crate::error::AuthError;

/// Application-wide salt appended to every password before digesting.
///
/// Fixed for the lifetime of a deployment; every stored digest embeds it.
const PASSWORD_SALT: &str = "L7#qz!42";

/// Length of a rendered digest: 32 bytes, two hex digits per byte.
pub const DIGEST_LEN: usize = 64;

// ─────────────────────────────────────────────────────────────────────────────
// Digest operations
// ─────────────────────────────────────────────────────────────────────────────

/// Digest a plain-text password for storage.
///
/// Computes SHA-256 over the UTF-8 bytes of the password followed by
/// [`PASSWORD_SALT`] and renders the result as [`DIGEST_LEN`] lowercase hex
/// characters. Deterministic: the same password always yields the same
/// digest within a deployment. The password itself is never retained.
pub fn hash_password(plain: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(plain.as_bytes());
    hasher.update(PASSWORD_SALT.as_bytes());
    hex::encode(hasher.finalize())
}

/// Check a plain-text password against a previously stored digest.
///
/// Recomputes [`hash_password`] and compares with string equality. A
/// mismatch is a normal `false`, not an error; a malformed stored digest can
/// never equal a freshly computed one and also yields `false`.
pub fn verify_password(plain: &str, stored: &str) -> bool {
    let matches = hash_password(plain) == stored;
    if !matches {
        tracing::trace!("password digest mismatch");
    }
    matches
}

// ─────────────────────────────────────────────────────────────────────────────
// Stored digest
// ─────────────────────────────────────────────────────────────────────────────

/// A stored password digest: [`DIGEST_LEN`] lowercase hex characters.
///
/// Thin wrapper over the rendered digest text for the persistence seam.
/// Construct with [`PasswordDigest::from_plain`] when hashing a new
/// credential, or parse with [`FromStr`] when reading one back from storage.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PasswordDigest(String);

impl PasswordDigest {
    /// Digest a plain-text password. See [`hash_password`].
    pub fn from_plain(plain: &str) -> Self {
        Self(hash_password(plain))
    }

    /// Check a plain-text password against this digest. See
    /// [`verify_password`].
    pub fn matches(&self, plain: &str) -> bool {
        verify_password(plain, &self.0)
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl core::fmt::Display for PasswordDigest {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl FromStr for PasswordDigest {
    type Err = AuthError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.len() != DIGEST_LEN {
            return Err(AuthError::invalid_digest(format!(
                "expected {DIGEST_LEN} characters, got {}",
                s.len()
            )));
        }
        if !s.bytes().all(|b| matches!(b, b'0'..=b'9' | b'a'..=b'f')) {
            return Err(AuthError::invalid_digest(
                "expected lowercase hexadecimal characters",
            ));
        }
        Ok(Self(s.to_owned()))
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────────────────────────────────────
