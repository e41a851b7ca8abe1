use std::sync::Arc;

use solana_client::{nonblocking::rpc_client::RpcClient, rpc_client::SerializableTransaction};
#[cfg(not(feature = "versioned-tx"))]
use solana_sdk::transaction::Transaction;
use solana_sdk::{instruction::Instruction, signature::Keypair, signer::Signer};
#[cfg(feature = "versioned-tx")]
use solana_sdk::{
    message::{v0, AddressLookupTableAccount, VersionedMessage},
    transaction::VersionedTransaction,
};

use crate::error;

/// Constructs a signed transaction from a set of instructions and signers
///
/// Fetches a recent blockhash from the network and signs the transaction with
/// the payer plus any additional signers. A message transaction always passes
/// the ephemeral mint keypair as an additional signer, since the mint account
/// is created inside the same transaction.
///
/// # Arguments
///
/// * `rpc` - An Arc-wrapped RpcClient used to fetch the recent blockhash
/// * `payer` - The primary account that will pay for the transaction fees
/// * `instructions` - Slice of Solana instructions to include in the transaction
/// * `additional_signers` - Optional slice of additional keypair signers that should sign the
///   transaction, in addition to the payer
/// * `address_lookup_table_accounts` - Optional slice of Address Lookup Table accounts,
///   enabling versioned transactions with address table lookups
///   (only available with "versioned-tx" feature)
///
/// # Errors
///
/// Returns an error if:
/// - Failed to retrieve the recent blockhash from the network
/// - Transaction message compilation fails (for versioned transactions)
/// - Transaction signing fails
///
/// # Feature flags
///
/// When compiled with the "versioned-tx" feature, this function returns a VersionedTransaction
/// that supports Address Lookup Tables. Otherwise, it returns a standard Transaction.
pub async fn get_transaction(
    rpc: Arc<RpcClient>,
    payer: Arc<Keypair>,
    instructions: &[Instruction],
    additional_signers: Option<&[&Keypair]>,
    #[cfg(feature = "versioned-tx")] address_lookup_table_accounts: Option<
        &[AddressLookupTableAccount],
    >,
) -> Result<impl SerializableTransaction, error::ClientError> {
    // Get recent blockhash for transaction validity window
    let recent_blockhash = rpc
        .get_latest_blockhash()
        .await
        .map_err(error::ClientError::SolanaClientError)?;

    // Create a combined signers array with payer and additional signers
    let mut all_signers =
        Vec::with_capacity(1 + additional_signers.map_or(0, |signers| signers.len()));
    all_signers.push(&*payer);

    if let Some(signers) = additional_signers {
        all_signers.extend(signers);
    }

    // Create and sign legacy transaction with all signers
    #[cfg(not(feature = "versioned-tx"))]
    let transaction = Transaction::new_signed_with_payer(
        instructions,
        Some(&payer.pubkey()),
        &all_signers,
        recent_blockhash,
    );

    // Create and sign versioned transaction with all signers
    #[cfg(feature = "versioned-tx")]
    let transaction = {
        let message = match v0::Message::try_compile(
            &payer.pubkey(),
            instructions,
            address_lookup_table_accounts.unwrap_or(&[]),
            recent_blockhash,
        ) {
            Ok(msg) => VersionedMessage::V0(msg),
            Err(e) => {
                return Err(error::ClientError::OtherError(format!(
                    "Failed to compile transaction message: {}",
                    e
                )))
            }
        };

        match VersionedTransaction::try_new(message, &all_signers) {
            Ok(tx) => tx,
            Err(e) => {
                return Err(error::ClientError::OtherError(format!(
                    "Failed to sign transaction: {}",
                    e
                )))
            }
        }
    };

    Ok(transaction)
}
