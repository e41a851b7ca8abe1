//! Metaplex Token Metadata instruction encoding
//!
//! The message token's name, symbol, and URI are attached through the Token
//! Metadata program's `CreateMetadataAccountV3` instruction. The argument
//! types below mirror the program's published schema and are borsh-serialized
//! behind the instruction's single-byte discriminator, so the wire layout is
//! produced by one routine instead of hand-counted byte offsets.

use crate::{constants, SmsMessenger};
use borsh::{BorshDeserialize, BorshSerialize};
use solana_sdk::{
    instruction::{AccountMeta, Instruction},
    pubkey::Pubkey,
};

/// A creator share recorded in token metadata
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Creator {
    pub address: Pubkey,
    pub verified: bool,
    /// Royalty share as a percentage, 0-100
    pub share: u8,
}

/// Reference to a verified collection NFT
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Collection {
    pub verified: bool,
    pub key: Pubkey,
}

/// How a "use" of the token is consumed
#[derive(BorshSerialize, BorshDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum UseMethod {
    Burn,
    Multiple,
    Single,
}

/// Usage tracking attached to token metadata
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct Uses {
    pub use_method: UseMethod,
    pub remaining: u64,
    pub total: u64,
}

/// Collection-size bookkeeping for collection parent NFTs
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub enum CollectionDetails {
    V1 { size: u64 },
    V2 { padding: [u8; 8] },
}

/// The `DataV2` body of a metadata account
///
/// # Fields
///
/// * `name` - Token name, at most 32 bytes (the message text)
/// * `symbol` - Token symbol, at most 10 bytes (the message subject)
/// * `uri` - Metadata URI, at most 200 bytes
/// * `seller_fee_basis_points` - Royalty in basis points, always 0 for message tokens
/// * `creators` / `collection` / `uses` - Optional extensions, unused by message tokens
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct DataV2 {
    pub name: String,
    pub symbol: String,
    pub uri: String,
    pub seller_fee_basis_points: u16,
    pub creators: Option<Vec<Creator>>,
    pub collection: Option<Collection>,
    pub uses: Option<Uses>,
}

/// Instruction data for `CreateMetadataAccountV3`
#[derive(BorshSerialize, BorshDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct CreateMetadataAccountV3 {
    pub data: DataV2,
    pub is_mutable: bool,
    pub collection_details: Option<CollectionDetails>,
}

impl CreateMetadataAccountV3 {
    /// Instruction discriminator used to identify this instruction
    pub const DISCRIMINATOR: u8 = 33;

    /// Metadata for a message token: the message as name, the subject as
    /// symbol, no royalties, no creators, mutable.
    pub fn for_message(name: String, symbol: String, uri: String) -> Self {
        Self {
            data: DataV2 {
                name,
                symbol,
                uri,
                seller_fee_basis_points: 0,
                creators: None,
                collection: None,
                uses: None,
            },
            is_mutable: true,
            collection_details: None,
        }
    }

    /// Serializes the instruction data with the appropriate discriminator
    ///
    /// # Returns
    ///
    /// Byte vector containing the serialized instruction data
    pub fn data(&self) -> Vec<u8> {
        let mut data = Vec::with_capacity(256);
        data.push(Self::DISCRIMINATOR);
        self.serialize(&mut data).unwrap();
        data
    }
}

/// Creates a `CreateMetadataAccountV3` instruction for a message token mint
///
/// The payer's wallet acts as mint authority and update authority, matching
/// how the mint itself is initialized.
///
/// # Arguments
///
/// * `payer` - Wallet paying for and signing the transaction
/// * `mint` - Mint of the newly created message token
/// * `args` - Serialized metadata arguments
///
/// # Account Requirements
///
/// The instruction requires the following accounts in this order:
/// 1. Metadata PDA (writable)
/// 2. Mint account (readonly)
/// 3. Mint authority (signer)
/// 4. Payer account (signer, writable)
/// 5. Update authority (signer)
/// 6. System program (readonly)
/// 7. Rent sysvar (readonly)
pub fn create_metadata(payer: &Pubkey, mint: &Pubkey, args: CreateMetadataAccountV3) -> Instruction {
    Instruction::new_with_bytes(
        constants::accounts::MPL_TOKEN_METADATA,
        &args.data(),
        vec![
            AccountMeta::new(SmsMessenger::metadata_pda(mint), false),
            AccountMeta::new_readonly(*mint, false),
            AccountMeta::new_readonly(*payer, true),
            AccountMeta::new(*payer, true),
            AccountMeta::new_readonly(*payer, true),
            AccountMeta::new_readonly(constants::accounts::SYSTEM_PROGRAM, false),
            AccountMeta::new_readonly(constants::accounts::RENT, false),
        ],
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn expected_bytes(args: &CreateMetadataAccountV3) -> Vec<u8> {
        let mut expected = vec![CreateMetadataAccountV3::DISCRIMINATOR];
        for field in [&args.data.name, &args.data.symbol, &args.data.uri] {
            expected.extend_from_slice(&(field.len() as u32).to_le_bytes());
            expected.extend_from_slice(field.as_bytes());
        }
        expected.extend_from_slice(&args.data.seller_fee_basis_points.to_le_bytes());
        match &args.data.creators {
            None => expected.push(0),
            Some(creators) => {
                expected.push(1);
                expected.extend_from_slice(&(creators.len() as u32).to_le_bytes());
                for creator in creators {
                    expected.extend_from_slice(creator.address.as_ref());
                    expected.push(creator.verified as u8);
                    expected.push(creator.share);
                }
            }
        }
        expected.push(0); // collection: None
        expected.push(0); // uses: None
        expected.push(args.is_mutable as u8);
        expected.push(0); // collection_details: None
        expected
    }

    #[test]
    fn encodes_typical_message_metadata() {
        let args = CreateMetadataAccountV3::for_message(
            "gm, see you at the summit".to_string(),
            "GM".to_string(),
            "ipfs://bafkreia34wgsqy7ur5a2f2nt3fhz7l3nmw4nrlh47fpp4tele27jzansoe".to_string(),
        );
        assert_eq!(args.data(), expected_bytes(&args));
    }

    #[test]
    fn encodes_empty_strings() {
        let args =
            CreateMetadataAccountV3::for_message(String::new(), String::new(), String::new());
        let bytes = args.data();
        assert_eq!(bytes, expected_bytes(&args));
        // discriminator + three empty strings + fee + three options + bool + option
        assert_eq!(bytes.len(), 1 + 3 * 4 + 2 + 3 + 1 + 1);
    }

    #[test]
    fn encodes_max_length_fields() {
        let args = CreateMetadataAccountV3::for_message(
            "n".repeat(constants::MAX_NAME_LENGTH),
            "s".repeat(constants::MAX_SYMBOL_LENGTH),
            "u".repeat(constants::MAX_URI_LENGTH),
        );
        assert_eq!(args.data(), expected_bytes(&args));
    }

    #[test]
    fn encodes_creators_when_present() {
        let mut args = CreateMetadataAccountV3::for_message(
            "hello".to_string(),
            "HI".to_string(),
            "ipfs://x".to_string(),
        );
        args.data.creators = Some(vec![Creator {
            address: Pubkey::new_unique(),
            verified: true,
            share: 100,
        }]);
        assert_eq!(args.data(), expected_bytes(&args));
    }

    // Cross-check against the program's published schema via the generated
    // client in mpl-token-metadata.
    #[test]
    fn matches_mpl_token_metadata_encoding() {
        let args = CreateMetadataAccountV3::for_message(
            "wen lambo".to_string(),
            "WEN".to_string(),
            "https://ipfs.io/ipfs/QmXKrJoZXFVxYfjXH1KgRPU8yhyhvtLyAJd1XbJq9qxHud".to_string(),
        );

        let payer = Pubkey::new_unique();
        let mint = Pubkey::new_unique();
        let reference = mpl_token_metadata::instructions::CreateMetadataAccountV3Builder::new()
            .metadata(SmsMessenger::metadata_pda(&mint))
            .mint(mint)
            .mint_authority(payer)
            .payer(payer)
            .update_authority(payer, true)
            .data(mpl_token_metadata::types::DataV2 {
                name: args.data.name.clone(),
                symbol: args.data.symbol.clone(),
                uri: args.data.uri.clone(),
                seller_fee_basis_points: 0,
                creators: None,
                collection: None,
                uses: None,
            })
            .is_mutable(true)
            .instruction();

        let ours = create_metadata(&payer, &mint, args);
        assert_eq!(ours.data, reference.data);
        assert_eq!(ours.program_id, constants::accounts::MPL_TOKEN_METADATA);
    }

    #[test]
    fn metadata_pda_matches_mpl_derivation() {
        let mint = Pubkey::new_unique();
        let (expected, _bump) = mpl_token_metadata::accounts::Metadata::find_pda(&mint);
        assert_eq!(SmsMessenger::metadata_pda(&mint), expected);
    }
}
