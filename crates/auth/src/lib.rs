//! `ledgerkit-auth` — password digest utilities for stored credentials.
//!
//! This crate is intentionally decoupled from HTTP and storage.

pub mod digest;
pub mod error;

pub use digest::{DIGEST_LEN, PasswordDigest, hash_password, verify_password};
pub use error::{AuthError, AuthResult};
