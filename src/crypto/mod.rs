//! Cryptographic primitives for password hashing.
//!
//! Provides salt generation, key derivation, and the encoded record layout.

pub mod kdf;
pub mod record;
pub mod salt;

pub use kdf::{Params, digest_hex};
pub use record::Record;
pub use salt::generate_salt;

/// Length of the raw digest (64 bytes / 512 bits).
pub const DIGEST_LEN: usize = 64;
/// Length of the hex-encoded digest (128 characters).
pub const DIGEST_HEX_LEN: usize = 2 * DIGEST_LEN;
/// Default length of the salt (32 bytes).
pub const SALT_LEN: usize = 32;
/// Default number of PBKDF2 iterations.
pub const ITERATIONS: u32 = 5000;
/// Default maximum password length in bytes.
pub const MAX_PASSWORD_LEN: usize = 4096;
