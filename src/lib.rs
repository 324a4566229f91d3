//! Self-contained salted password hashing.
//!
//! A password is stretched with PBKDF2-HMAC-SHA512 and stored together with
//! its salt in a single opaque record, so no separate salt column is needed.
//! [`Passlock::check`] verifies a password against such a record in constant
//! time with respect to the stored digest.

mod crypto;
mod error;

pub use crate::crypto::{
    DIGEST_HEX_LEN, DIGEST_LEN, ITERATIONS, MAX_PASSWORD_LEN, Params, Record, SALT_LEN,
};
pub use crate::error::Error;

use subtle::ConstantTimeEq;
use zeroize::Zeroizing;

use crate::crypto::{digest_hex, generate_salt};

/// Password hasher configured with a set of [`Params`].
///
/// All methods take `&self` and share no mutable state, so a single value
/// can be used from any number of threads.
#[derive(Debug, Clone, Copy, Default)]
pub struct Passlock {
    params: Params,
}

impl Passlock {
    pub fn new(params: Params) -> Result<Self, Error> {
        params.validate()?;
        Ok(Self { params })
    }

    pub fn params(&self) -> &Params {
        &self.params
    }

    /// Returns a new salt of the configured length filled with random bytes.
    pub fn generate_salt(&self) -> Result<Vec<u8>, Error> {
        generate_salt(self.params.salt_len())
    }

    /// Returns a salt-encrypted version of `password`.
    ///
    /// The result is self contained: the hex digest and the raw salt live in
    /// one record, so there is no need to store them separately. Oversized
    /// passwords are rejected before any hashing runs.
    ///
    /// Changing the iteration count invalidates every record produced with
    /// the old count; the record itself carries no parameters.
    pub fn encrypt(&self, password: &[u8], salt: &[u8]) -> Result<Vec<u8>, Error> {
        if password.len() > self.params.max_password_len() {
            return Err(Error::PasswordTooLong(password.len()));
        }

        let digest = digest_hex(password, salt, self.params.iterations());

        Ok(Record::encode(&digest, salt))
    }

    /// Returns `true` if `password` matches the digest+salt stored in
    /// `encoded`.
    ///
    /// Malformed records and oversized passwords yield `false`, never an
    /// error; a caller cannot tell them apart from a plain mismatch. The
    /// digest comparison runs in constant time.
    pub fn check(&self, password: &[u8], encoded: &[u8]) -> bool {
        if password.len() > self.params.max_password_len() {
            return false;
        }

        let record = match Record::split(encoded) {
            Ok(record) => record,
            Err(_) => return false,
        };

        let digest = Zeroizing::new(digest_hex(
            password,
            record.salt(),
            self.params.iterations(),
        ));

        bool::from(digest.as_bytes().ct_eq(record.digest_hex()))
    }
}
