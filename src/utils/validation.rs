//! Recipient-address validation and metadata field sanitization
//!
//! Recipients arrive as user-typed strings; they are checked against the
//! base58 alphabet and length bounds before anything touches the network.
//! Message and subject strings are clipped to the Token Metadata program's
//! field limits so the encoded instruction is always within layout bounds.

use crate::{constants, error::ClientError};
use solana_sdk::pubkey::Pubkey;
use std::str::FromStr;

/// Returns true when `address` is 32-44 characters drawn from the base58
/// alphabet (which excludes `0`, `O`, `I`, and `l`).
pub fn is_valid_address(address: &str) -> bool {
    (32..=44).contains(&address.len()) && address.chars().all(is_base58_char)
}

fn is_base58_char(c: char) -> bool {
    matches!(c, '1'..='9' | 'A'..='H' | 'J'..='N' | 'P'..='Z' | 'a'..='k' | 'm'..='z')
}

/// Parses a recipient address, rejecting anything that is not a well-formed
/// base58 Solana public key
///
/// # Errors
///
/// Returns `ClientError::InvalidRecipient` when the string fails the alphabet
/// check or does not decode to 32 bytes.
pub fn parse_recipient(address: &str) -> Result<Pubkey, ClientError> {
    if !is_valid_address(address) {
        return Err(ClientError::InvalidRecipient(address.to_string()));
    }
    Pubkey::from_str(address).map_err(|_| ClientError::InvalidRecipient(address.to_string()))
}

/// Clips a message to the 32-byte token-name limit
pub fn sanitize_name(message: &str) -> String {
    truncate_bytes(message, constants::MAX_NAME_LENGTH)
}

/// Uppercases a subject and clips it to the 10-byte token-symbol limit
pub fn sanitize_symbol(subject: &str) -> String {
    truncate_bytes(&subject.to_uppercase(), constants::MAX_SYMBOL_LENGTH)
}

/// Clips a metadata URI to the 200-byte limit
pub fn sanitize_uri(uri: &str) -> String {
    truncate_bytes(uri, constants::MAX_URI_LENGTH)
}

// Truncates on a char boundary so multi-byte text never splits mid-codepoint.
fn truncate_bytes(s: &str, max: usize) -> String {
    if s.len() <= max {
        return s.to_string();
    }
    let mut end = max;
    while !s.is_char_boundary(end) {
        end -= 1;
    }
    s[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accepts_real_pubkeys() {
        for _ in 0..16 {
            let address = Pubkey::new_unique().to_string();
            assert!(is_valid_address(&address), "rejected {}", address);
            assert!(parse_recipient(&address).is_ok());
        }
        assert!(is_valid_address(
            "HauFsUDmrCgZaExDdUfdp2FC9udFTu7KVWTMPq73pump"
        ));
    }

    #[test]
    fn rejects_excluded_base58_characters() {
        for c in ['0', 'O', 'I', 'l'] {
            let address = format!("{}{}", c, "1".repeat(40));
            assert!(!is_valid_address(&address), "accepted {}", c);
        }
        assert!(!is_valid_address("Hau FsUDmrCgZaExDdUfdp2FC9udFTu7KVWTM"));
    }

    #[test]
    fn rejects_wrong_lengths() {
        assert!(!is_valid_address(""));
        assert!(!is_valid_address(&"1".repeat(31)));
        assert!(!is_valid_address(&"1".repeat(45)));
        // in-range length but not a 32-byte key
        assert!(parse_recipient(&"1".repeat(32)).is_err());
    }

    #[test]
    fn clips_name_to_32_bytes() {
        assert_eq!(sanitize_name("gm"), "gm");
        let long = "x".repeat(100);
        assert_eq!(sanitize_name(&long).len(), 32);
        // multi-byte truncation stays on a char boundary
        let emoji = "é".repeat(30);
        let clipped = sanitize_name(&emoji);
        assert!(clipped.len() <= 32);
        assert_eq!(clipped, "é".repeat(16));
    }

    #[test]
    fn uppercases_and_clips_symbol() {
        assert_eq!(sanitize_symbol("gm"), "GM");
        assert_eq!(sanitize_symbol("hellothere!!"), "HELLOTHERE");
    }
}
