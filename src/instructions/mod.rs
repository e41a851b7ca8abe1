//! Instructions built by the $SMS messenger
//!
//! This module contains the instruction payloads the SDK encodes itself. The
//! SPL Token and Associated Token Account instructions in a message
//! transaction come from their own crates; what lives here is the Metaplex
//! Token Metadata instruction and the Memo payload.
//!
//! # Instructions
//!
//! - `CreateMetadataAccountV3`: Attaches name/symbol/URI metadata to the message token mint.
//! - `MessageMemo`: Memo-program payload carrying the full message text.

mod memo;
mod metadata;

pub use memo::*;
pub use metadata::*;
