//! Memo-program payload for message transactions
//!
//! The token name only carries the first 32 bytes of a message, so the full
//! text rides along in a Memo instruction as compact JSON with single-letter
//! keys, together with a timestamp and shortened sender/recipient addresses.

use crate::constants;
use serde::{Deserialize, Serialize};
use solana_sdk::{instruction::Instruction, pubkey::Pubkey};

/// JSON payload written to the Memo program
///
/// # Fields
///
/// * `m` - Full message text, not truncated
/// * `t` - Unix timestamp in milliseconds
/// * `s` - Shortened sender address
/// * `r` - Shortened recipient address
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct MessageMemo {
    pub m: String,
    pub t: u64,
    pub s: String,
    pub r: String,
}

impl MessageMemo {
    /// Builds a memo payload for a message from `sender` to `recipient`
    pub fn new(message: &str, timestamp_ms: u64, sender: &Pubkey, recipient: &Pubkey) -> Self {
        Self {
            m: message.to_string(),
            t: timestamp_ms,
            s: shorten(sender),
            r: shorten(recipient),
        }
    }
}

fn shorten(address: &Pubkey) -> String {
    let full = address.to_string();
    format!("{}...", &full[..10])
}

/// Creates a Memo-program instruction carrying the serialized payload
///
/// The memo requires no signers; the payload is raw UTF-8 JSON.
pub fn memo(payload: &MessageMemo) -> Instruction {
    let data = serde_json::to_string(payload).unwrap();
    Instruction::new_with_bytes(constants::accounts::MEMO_PROGRAM, data.as_bytes(), vec![])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memo_carries_full_message_and_short_addresses() {
        let sender = Pubkey::new_unique();
        let recipient = Pubkey::new_unique();
        let message = "a message well past the thirty-two byte name limit of the metadata account";
        let payload = MessageMemo::new(message, 1_700_000_000_000, &sender, &recipient);

        let ix = memo(&payload);
        assert_eq!(ix.program_id, constants::accounts::MEMO_PROGRAM);
        assert!(ix.accounts.is_empty());

        let decoded: MessageMemo = serde_json::from_slice(&ix.data).unwrap();
        assert_eq!(decoded.m, message);
        assert_eq!(decoded.t, 1_700_000_000_000);
        assert_eq!(decoded.s, format!("{}...", &sender.to_string()[..10]));
        assert_eq!(decoded.s.len(), 13);
        assert_eq!(decoded.r, format!("{}...", &recipient.to_string()[..10]));
    }
}
