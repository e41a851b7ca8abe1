//! Constants for the $SMS token messenger.
//!
//! This module collects the on-chain program ids, the $SMS mint, the fixed
//! messaging fee, and the Metaplex field limits used when encoding message
//! tokens.

/// Number of decimals on the $SMS mint and on every message token mint.
pub const TOKEN_DECIMALS: u8 = 9;

/// Whole $SMS tokens burned per message.
pub const MESSAGE_FEE: u64 = 10_000;

/// Message fee in base units (`MESSAGE_FEE * 10^TOKEN_DECIMALS`).
pub const MESSAGE_FEE_BASE: u64 = 10_000_000_000_000;

/// Base units of the message token minted to the recipient (one quintillion).
pub const MESSAGE_TOKEN_SUPPLY: u64 = 1_000_000_000_000_000_000;

/// Maximum byte length of a token name accepted by the Token Metadata program.
pub const MAX_NAME_LENGTH: usize = 32;

/// Maximum byte length of a token symbol accepted by the Token Metadata program.
pub const MAX_SYMBOL_LENGTH: usize = 10;

/// Maximum byte length of a metadata URI accepted by the Token Metadata program.
pub const MAX_URI_LENGTH: usize = 200;

/// Fallback logo for message tokens when an upload fails, as an `ipfs://` URI.
pub const DEFAULT_LOGO_URI: &str =
    "ipfs://bafkreia34wgsqy7ur5a2f2nt3fhz7l3nmw4nrlh47fpp4tele27jzansoe";

/// Fallback logo as an HTTPS gateway URL.
pub const DEFAULT_LOGO_GATEWAY_URI: &str =
    "https://ipfs.io/ipfs/bafkreia34wgsqy7ur5a2f2nt3fhz7l3nmw4nrlh47fpp4tele27jzansoe";

/// `external_url` embedded in pinned metadata documents.
pub const EXTERNAL_URL: &str = "https://smstoken.com";

/// Program and mint addresses referenced by message transactions.
pub mod accounts {
    use solana_sdk::{pubkey, pubkey::Pubkey};

    /// The $SMS token mint.
    pub const SMS_MINT: Pubkey = pubkey!("HauFsUDmrCgZaExDdUfdp2FC9udFTu7KVWTMPq73pump");

    /// Metaplex Token Metadata program.
    pub const MPL_TOKEN_METADATA: Pubkey = pubkey!("metaqbxxUerdq28cj1RbAWkYQm3ybzjb6a8bt518x1s");

    /// SPL Memo program.
    pub const MEMO_PROGRAM: Pubkey = pubkey!("MemoSq4gqABAXKb96qnH8TysNcWxMyWCqXgDLGmfcHr");

    /// SPL Token program.
    pub const TOKEN_PROGRAM: Pubkey = pubkey!("TokenkegQfeZyiNwAJbNbGKPFXCWuBvf9Ss623VQ5DA");

    /// SPL Associated Token Account program.
    pub const ASSOCIATED_TOKEN_PROGRAM: Pubkey =
        pubkey!("ATokenGPvbdGVxr1b2hvZbsiqW5xWH25efTNsLJA8knL");

    /// System program.
    pub const SYSTEM_PROGRAM: Pubkey = pubkey!("11111111111111111111111111111111");

    /// Rent sysvar.
    pub const RENT: Pubkey = pubkey!("SysvarRent111111111111111111111111111111111");
}

/// PDA seeds.
pub mod seeds {
    /// Seed prefix for Metaplex metadata accounts.
    pub const METADATA_SEED: &[u8] = b"metadata";
}
