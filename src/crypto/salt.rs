use getrandom::fill;

use crate::error::Error;

/// Fill buffer with cryptographically secure random bytes
fn secure_random(buf: &mut [u8]) -> Result<(), Error> {
    fill(buf).map_err(|_| Error::RandomSource)
}

/// Generate a new salt of `len` random bytes.
///
/// An unavailable entropy source is fatal for the call; there is no
/// fallback source and no retry.
pub fn generate_salt(len: usize) -> Result<Vec<u8>, Error> {
    let mut salt = vec![0u8; len];
    secure_random(&mut salt)?;
    Ok(salt)
}
