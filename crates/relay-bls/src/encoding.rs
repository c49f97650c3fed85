use crate::{BLSError, BlsResult};

/// Copies `bytes` into an array of exactly `N` bytes. `kind` names the target type in the
/// returned [`BLSError::InvalidLength`].
pub fn to_fixed<const N: usize>(kind: &'static str, bytes: &[u8]) -> BlsResult<[u8; N]> {
    bytes.try_into().map_err(|_| BLSError::InvalidLength {
        kind,
        expected: N,
        actual: bytes.len(),
    })
}

/// Decodes a hex string, with or without a `0x` prefix.
pub fn decode_hex(s: &str) -> BlsResult<Vec<u8>> {
    let s = s.strip_prefix("0x").unwrap_or(s);
    Ok(hex::decode(s)?)
}

/// Decodes a hex string into an array of exactly `N` bytes.
pub fn decode_hex_fixed<const N: usize>(kind: &'static str, s: &str) -> BlsResult<[u8; N]> {
    to_fixed(kind, &decode_hex(s)?)
}

/// Encodes bytes as `0x`-prefixed lowercase hex.
pub fn encode_hex(bytes: &[u8]) -> String {
    format!("0x{}", hex::encode(bytes))
}

/// Constant-length check for the all-zero encoding.
pub fn is_zero(bytes: &[u8]) -> bool {
    bytes.iter().fold(0u8, |acc, b| acc | b) == 0
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fixed_length_is_enforced() {
        assert_eq!(to_fixed::<4>("version", &[1, 2, 3, 4]).unwrap(), [1, 2, 3, 4]);
        assert_eq!(
            to_fixed::<4>("version", &[1, 2, 3]).unwrap_err(),
            BLSError::InvalidLength {
                kind: "version",
                expected: 4,
                actual: 3
            }
        );
        assert!(to_fixed::<4>("version", &[0; 5]).is_err());
        assert!(to_fixed::<4>("version", &[]).is_err());
    }

    #[test]
    fn hex_prefix_is_optional() {
        assert_eq!(decode_hex("0x0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex("0a0b").unwrap(), vec![0x0a, 0x0b]);
        assert_eq!(decode_hex("0x").unwrap(), Vec::<u8>::new());
        assert!(matches!(decode_hex("0xzz"), Err(BLSError::InvalidHex(_))));
        assert_eq!(
            decode_hex("0x123").unwrap_err(),
            BLSError::InvalidHex(hex::FromHexError::OddLength)
        );
        assert_eq!(
            decode_hex_fixed::<2>("version", "0xzz00").unwrap_err(),
            BLSError::InvalidHex(hex::FromHexError::InvalidHexCharacter { c: 'z', index: 0 })
        );
    }

    #[test]
    fn hex_round_trip() {
        let bytes = [0xde, 0xad, 0xbe, 0xef];
        let encoded = encode_hex(&bytes);
        assert_eq!(encoded, "0xdeadbeef");
        assert_eq!(decode_hex_fixed::<4>("root", &encoded).unwrap(), bytes);
        assert!(matches!(
            decode_hex_fixed::<5>("root", &encoded),
            Err(BLSError::InvalidLength { expected: 5, actual: 4, .. })
        ));
    }

    #[test]
    fn zero_detection() {
        assert!(is_zero(&[0u8; 32]));
        assert!(is_zero(&[]));
        let mut bytes = [0u8; 32];
        bytes[31] = 1;
        assert!(!is_zero(&bytes));
    }
}
