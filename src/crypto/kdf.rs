use pbkdf2::pbkdf2_hmac;
use sha2::Sha512;
use zeroize::Zeroize;

use super::{DIGEST_LEN, ITERATIONS, MAX_PASSWORD_LEN, SALT_LEN};
use crate::error::Error;

#[derive(Debug, Clone, Copy)]
pub struct Params {
    iterations: u32,
    max_password_len: usize,
    salt_len: usize,
}

impl Default for Params {
    fn default() -> Self {
        Self {
            // default number of PBKDF2 rounds
            iterations: ITERATIONS,
            // default password length cap
            max_password_len: MAX_PASSWORD_LEN,
            // default salt length
            salt_len: SALT_LEN,
        }
    }
}

impl Params {
    pub fn new(iterations: u32, max_password_len: usize, salt_len: usize) -> Result<Self, Error> {
        let params = Self {
            iterations,
            max_password_len,
            salt_len,
        };
        params.validate()?;
        Ok(params)
    }

    pub fn iterations(&self) -> u32 {
        self.iterations
    }

    pub fn max_password_len(&self) -> usize {
        self.max_password_len
    }

    pub fn salt_len(&self) -> usize {
        self.salt_len
    }

    pub fn validate(&self) -> Result<(), Error> {
        if self.iterations < 1 {
            return Err(Error::InvalidParams("iteration count must be >= 1"));
        }
        if self.salt_len < 1 {
            return Err(Error::InvalidParams("salt length must be >= 1"));
        }
        if self.max_password_len < 1 {
            return Err(Error::InvalidParams("max password length must be >= 1"));
        }
        Ok(())
    }
}

/// Derive the PBKDF2-HMAC-SHA512 digest of (password, salt) and render it
/// as 128 lowercase hex characters.
///
/// The iteration count is not recoverable from the output; it has to come
/// from the caller's configuration on every verification.
pub fn digest_hex(password: &[u8], salt: &[u8], iterations: u32) -> String {
    let mut dig = [0u8; DIGEST_LEN];
    pbkdf2_hmac::<Sha512>(password, salt, iterations, &mut dig);

    let encoded = hex::encode(dig);
    dig.zeroize();
    encoded
}
