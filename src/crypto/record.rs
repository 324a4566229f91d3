use super::DIGEST_HEX_LEN;
use crate::error::Error;

/// Borrowed view of an encoded record.
///
/// The layout is `<128 hex characters><raw salt bytes>` with no delimiter,
/// no version tag, and no embedded parameters. The fixed digest width is
/// what makes the split unambiguous.
#[derive(Debug)]
pub struct Record<'a> {
    digest_hex: &'a [u8],
    salt: &'a [u8],
}

impl<'a> Record<'a> {
    /// Split an encoded record at the fixed digest width.
    pub fn split(data: &'a [u8]) -> Result<Self, Error> {
        if data.len() < DIGEST_HEX_LEN {
            return Err(Error::MalformedRecord(data.len()));
        }

        let (digest_hex, salt) = data.split_at(DIGEST_HEX_LEN);

        Ok(Self { digest_hex, salt })
    }

    pub fn digest_hex(&self) -> &'a [u8] {
        self.digest_hex
    }

    pub fn salt(&self) -> &'a [u8] {
        self.salt
    }

    /// Assemble an encoded record from a hex digest and raw salt bytes.
    pub fn encode(digest_hex: &str, salt: &[u8]) -> Vec<u8> {
        let mut buf = Vec::with_capacity(digest_hex.len() + salt.len());

        buf.extend_from_slice(digest_hex.as_bytes());
        buf.extend_from_slice(salt);

        buf
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn record_roundtrip() {
        let digest: String = "ab".repeat(64);
        let encoded = Record::encode(&digest, b"pepper");

        assert_eq!(encoded.len(), DIGEST_HEX_LEN + 6);

        let record = Record::split(&encoded).unwrap();
        assert_eq!(record.digest_hex(), digest.as_bytes());
        assert_eq!(record.salt(), b"pepper");
    }

    #[test]
    fn record_with_empty_salt_splits() {
        let digest: String = "00".repeat(64);
        let encoded = Record::encode(&digest, b"");

        let record = Record::split(&encoded).unwrap();
        assert_eq!(record.digest_hex().len(), DIGEST_HEX_LEN);
        assert!(record.salt().is_empty());
    }

    #[test]
    fn record_too_short_fails() {
        let data = vec![b'0'; DIGEST_HEX_LEN - 1];

        assert!(matches!(
            Record::split(&data),
            Err(Error::MalformedRecord(len)) if len == DIGEST_HEX_LEN - 1
        ));
    }

    #[test]
    fn empty_record_fails() {
        assert!(Record::split(b"").is_err());
    }
}
