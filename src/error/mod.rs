//! Error types for the $SMS messenger SDK.
//!
//! This module defines the `ClientError` enum, which covers the failure modes of
//! sending a token message: input validation, balance checks, metadata uploads,
//! Solana RPC failures, and transactions that confirm with an on-chain error.
//!
//! # Error Types
//!
//! - `InvalidRecipient`: The recipient address is not a valid base58 Solana address.
//! - `InsufficientBalance`: The payer holds fewer $SMS tokens than the message fee.
//! - `BorshError`: An error occurred while serializing or deserializing data using Borsh.
//! - `SolanaClientError`: An error occurred while interacting with the Solana RPC client.
//! - `SimulationRejected`: A wallet or security provider rejected the transaction simulation.
//! - `TransactionFailed`: The transaction confirmed but carried an on-chain error.
//! - `UploadMetadataError`: An error occurred while uploading metadata to IPFS.
//! - `OtherError`: An error occurred that is not covered by the other error types.

#[derive(Debug)]
pub enum ClientError {
    /// Recipient address failed base58 validation
    InvalidRecipient(String),
    /// Payer's $SMS balance is below the message fee, both in base units
    InsufficientBalance { required: u64, balance: u64 },
    /// Error serializing data using Borsh
    BorshError(std::io::Error),
    /// Error from Solana RPC client
    SolanaClientError(solana_client::client_error::ClientError),
    /// Wallet security simulation rejected the transaction
    SimulationRejected(String),
    /// Transaction confirmed but returned an on-chain error
    TransactionFailed(String),
    /// Error uploading metadata
    UploadMetadataError(Box<dyn std::error::Error>),
    /// Other error
    OtherError(String),
}

impl std::fmt::Display for ClientError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::InvalidRecipient(addr) => write!(f, "Invalid Solana wallet address: {}", addr),
            Self::InsufficientBalance { required, balance } => write!(
                f,
                "Insufficient tokens: sending a message burns {} base units of $SMS, balance is {}",
                required, balance
            ),
            Self::BorshError(err) => write!(f, "Borsh serialization error: {}", err),
            Self::SolanaClientError(err) => write!(f, "Solana client error: {}", err),
            Self::SimulationRejected(msg) => write!(
                f,
                "Transaction was flagged by the wallet's security simulation: {}",
                msg
            ),
            Self::TransactionFailed(msg) => write!(f, "Transaction failed: {}", msg),
            Self::UploadMetadataError(err) => write!(f, "Metadata upload error: {}", err),
            Self::OtherError(msg) => write!(f, "Other error: {}", msg),
        }
    }
}

impl std::error::Error for ClientError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::BorshError(err) => Some(err),
            Self::SolanaClientError(err) => Some(err),
            Self::UploadMetadataError(err) => Some(err.as_ref()),
            _ => None,
        }
    }
}

impl From<solana_client::client_error::ClientError> for ClientError {
    fn from(err: solana_client::client_error::ClientError) -> Self {
        Self::SolanaClientError(err)
    }
}

/// Returns true when an RPC error means the queried token account simply does
/// not exist yet. The RPC surfaces this as a plain message string, so this is
/// a substring check.
pub(crate) fn is_missing_account(err: &solana_client::client_error::ClientError) -> bool {
    let msg = err.to_string();
    msg.contains("could not find account") || msg.contains("AccountNotFound")
}

/// Maps a broadcast failure to a `ClientError`: a transaction that reached the
/// chain but erred becomes `TransactionFailed` with the on-chain error
/// serialized into the message, and wallet security-provider simulation
/// rejections are detected by their vendor string.
pub(crate) fn classify_send_error(err: solana_client::client_error::ClientError) -> ClientError {
    if let Some(tx_err) = err.get_transaction_error() {
        return ClientError::TransactionFailed(format!("{:?}", tx_err));
    }
    let msg = err.to_string();
    if msg.to_lowercase().contains("blowfish") || msg.contains("simulation rejected") {
        ClientError::SimulationRejected(msg)
    } else {
        ClientError::SolanaClientError(err)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use solana_client::client_error::{ClientError as RpcError, ClientErrorKind};

    fn rpc_error(msg: &str) -> RpcError {
        RpcError {
            request: None,
            kind: ClientErrorKind::Custom(msg.to_string()),
        }
    }

    #[test]
    fn missing_account_detected_from_rpc_message() {
        assert!(is_missing_account(&rpc_error(
            "Invalid param: could not find account"
        )));
        assert!(is_missing_account(&rpc_error("AccountNotFound")));
        assert!(!is_missing_account(&rpc_error("blockhash not found")));
    }

    #[test]
    fn onchain_error_becomes_transaction_failed() {
        use solana_sdk::transaction::TransactionError;

        let err = RpcError {
            request: None,
            kind: ClientErrorKind::TransactionError(TransactionError::InsufficientFundsForFee),
        };
        let classified = classify_send_error(err);
        assert!(matches!(classified, ClientError::TransactionFailed(_)));
        assert!(classified.to_string().contains("InsufficientFundsForFee"));
    }

    #[test]
    fn simulation_rejection_gets_friendly_variant() {
        let err = classify_send_error(rpc_error("Blowfish flagged this transaction"));
        assert!(matches!(err, ClientError::SimulationRejected(_)));

        let err = classify_send_error(rpc_error("connection refused"));
        assert!(matches!(err, ClientError::SolanaClientError(_)));
    }
}
