#![doc = include_str!("../RUSTDOC.md")]

pub mod common;
pub mod constants;
pub mod error;
pub mod instructions;
pub mod utils;

use common::types::{Cluster, PinataConfig, PriorityFee};
use solana_client::nonblocking::rpc_client::RpcClient;
use solana_sdk::{
    compute_budget::ComputeBudgetInstruction,
    instruction::Instruction,
    program_pack::Pack,
    pubkey::Pubkey,
    signature::{Keypair, Signature},
    signer::Signer,
    system_instruction,
};
use spl_associated_token_account::{
    get_associated_token_address, instruction::create_associated_token_account,
};
use std::sync::Arc;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, info};
use utils::transaction::get_transaction;

/// A message to send: the subject becomes the message token's symbol, the
/// message text becomes its name (clipped to 32 bytes on-chain, carried in
/// full by the memo), and an optional image file is pinned to IPFS.
#[derive(Debug, Clone)]
pub struct SendMessage {
    pub subject: String,
    pub message: String,
    /// Path to an image file pinned alongside the metadata; the fixed $SMS
    /// logo is used when absent
    pub image: Option<String>,
}

/// Outcome of a sent message: the confirmed transaction signature and the
/// mint of the freshly created message token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MessageReceipt {
    pub signature: Signature,
    pub mint: Pubkey,
}

/// Main client for sending $SMS token messages
///
/// Sending a message burns a fixed fee of $SMS from the sender's wallet and,
/// in the same transaction, creates a brand-new SPL token whose name and
/// symbol encode the message and subject, mints its entire supply to the
/// recipient, attaches Metaplex metadata pointing at a document pinned to
/// IPFS, and records the full message text in a memo.
///
/// # Examples
///
/// ```no_run
/// use sms_messenger::{SmsMessenger, common::types::{Cluster, PinataConfig, PriorityFee}};
/// use solana_sdk::{commitment_config::CommitmentConfig, signature::Keypair};
/// use std::sync::Arc;
///
/// let payer = Arc::new(Keypair::new());
/// let commitment = CommitmentConfig::confirmed();
/// let cluster = Cluster::mainnet(commitment, PriorityFee::default());
/// let pinata = PinataConfig::from_env().expect("PINATA_JWT not set");
/// let client = SmsMessenger::new(payer, cluster, pinata);
/// ```
pub struct SmsMessenger {
    /// Keypair used to sign transactions and pay the message fee
    pub payer: Arc<Keypair>,
    /// RPC client for Solana network requests
    pub rpc: Arc<RpcClient>,
    /// Cluster configuration
    pub cluster: Cluster,
    /// Pinning-service configuration for IPFS uploads
    pub pinata: PinataConfig,
}

impl SmsMessenger {
    /// Creates a new messenger client instance
    ///
    /// # Arguments
    ///
    /// * `payer` - Keypair used to sign and pay for transactions
    /// * `cluster` - Solana cluster configuration including RPC endpoints and
    ///   transaction parameters
    /// * `pinata` - Pinning-service configuration for metadata uploads
    pub fn new(payer: Arc<Keypair>, cluster: Cluster, pinata: PinataConfig) -> Self {
        // Create Solana RPC Client with HTTP endpoint
        let rpc = Arc::new(RpcClient::new_with_commitment(
            cluster.rpc.http.clone(),
            cluster.commitment,
        ));

        Self {
            payer,
            rpc,
            cluster,
            pinata,
        }
    }

    /// Fetches an owner's $SMS balance in base units
    ///
    /// Derives the owner's associated token account for the $SMS mint and
    /// queries its balance. A wallet whose associated token account has not
    /// been created yet has a balance of zero, not an error.
    ///
    /// # Errors
    ///
    /// Returns an error for RPC failures other than a missing account.
    pub async fn token_balance(&self, owner: &Pubkey) -> Result<u64, error::ClientError> {
        let ata = get_associated_token_address(owner, &constants::accounts::SMS_MINT);
        match self.rpc.get_token_account_balance(&ata).await {
            Ok(balance) => balance.amount.parse::<u64>().map_err(|err| {
                error::ClientError::OtherError(format!(
                    "Unparseable token balance for {}: {}",
                    ata, err
                ))
            }),
            Err(err) if error::is_missing_account(&err) => {
                debug!(%ata, "associated token account not created yet, balance is 0");
                Ok(0)
            }
            Err(err) => Err(err.into()),
        }
    }

    /// Sends a token message to a recipient address
    ///
    /// This method runs the whole pipeline:
    /// 1. Validates the recipient address and sanitizes the message fields
    /// 2. Checks the payer holds at least the message fee in $SMS
    /// 3. Pins the message image and metadata document to IPFS
    /// 4. Builds the burn / mint-creation / metadata / memo instruction list
    /// 5. Signs with the payer and the ephemeral mint keypair, broadcasts,
    ///    and waits for confirmation
    ///
    /// # Arguments
    ///
    /// * `recipient` - Base58 address of the wallet receiving the message token
    /// * `params` - Subject, message text, and optional image path
    /// * `priority_fee` - Optional priority fee configuration for compute units.
    ///   If None, uses the default from the cluster configuration
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - The recipient address is malformed
    /// - The payer's $SMS balance is below the message fee
    /// - Transaction creation fails
    /// - Transaction execution on Solana fails
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # use sms_messenger::{SendMessage, SmsMessenger, common::types::{Cluster, PinataConfig, PriorityFee}};
    /// # use solana_sdk::{commitment_config::CommitmentConfig, signature::Keypair};
    /// # use std::sync::Arc;
    /// #
    /// # async fn example() -> Result<(), Box<dyn std::error::Error>> {
    /// # let payer = Arc::new(Keypair::new());
    /// # let cluster = Cluster::mainnet(CommitmentConfig::confirmed(), PriorityFee::default());
    /// # let client = SmsMessenger::new(payer, cluster, PinataConfig::from_env()?);
    /// let receipt = client
    ///     .send_message(
    ///         "5eykt4UsFv8P8NJdTREpY1vzqKqZKvdpKuc147dw2N9d",
    ///         SendMessage {
    ///             subject: "gm".to_string(),
    ///             message: "see you at the summit".to_string(),
    ///             image: None,
    ///         },
    ///         None,
    ///     )
    ///     .await?;
    /// println!("Message sent! Signature: {}", receipt.signature);
    /// println!("Message token mint: {}", receipt.mint);
    /// # Ok(())
    /// # }
    /// ```
    pub async fn send_message(
        &self,
        recipient: &str,
        params: SendMessage,
        priority_fee: Option<PriorityFee>,
    ) -> Result<MessageReceipt, error::ClientError> {
        let recipient = utils::validation::parse_recipient(recipient)?;

        // Fail before building anything if the fee cannot be burned
        let balance = self.token_balance(&self.payer.pubkey()).await?;
        if balance < constants::MESSAGE_FEE_BASE {
            return Err(error::ClientError::InsufficientBalance {
                required: constants::MESSAGE_FEE_BASE,
                balance,
            });
        }

        let name = utils::validation::sanitize_name(&params.message);
        let symbol = utils::validation::sanitize_symbol(&params.subject);
        let timestamp_ms = SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis() as u64;

        // Pin image and metadata first; upload falls back to the default
        // logo internally rather than failing the message
        let ipfs = utils::upload_message_metadata(
            &self.pinata,
            utils::MessageUpload {
                name: name.clone(),
                symbol: symbol.clone(),
                message: params.message.clone(),
                sender: self.payer.pubkey().to_string(),
                recipient: recipient.to_string(),
                timestamp_ms,
                image: params.image,
            },
        )
        .await;
        let uri = utils::validation::sanitize_uri(&ipfs.metadata_uri);

        // Brand-new single-purpose mint for this message
        let mint = Keypair::new();
        debug!(mint = %mint.pubkey(), %recipient, "building message transaction");

        // Add priority fee if provided or default to cluster priority fee
        let priority_fee = priority_fee.unwrap_or(self.cluster.priority_fee);
        let mut instructions = Self::priority_fee_instructions(&priority_fee);

        let message_ixs = self
            .message_instructions(
                &mint.pubkey(),
                &recipient,
                &name,
                &symbol,
                &uri,
                &params.message,
                timestamp_ms,
            )
            .await?;
        instructions.extend(message_ixs);

        // Create and sign transaction with the payer and the mint keypair
        let transaction = get_transaction(
            self.rpc.clone(),
            self.payer.clone(),
            &instructions,
            Some(&[&mint]),
            #[cfg(feature = "versioned-tx")]
            None,
        )
        .await?;

        // Send and confirm transaction
        let signature = self
            .rpc
            .send_and_confirm_transaction(&transaction)
            .await
            .map_err(error::classify_send_error)?;

        info!(%signature, mint = %mint.pubkey(), "message sent");
        Ok(MessageReceipt {
            signature,
            mint: mint.pubkey(),
        })
    }

    /// Generates the instruction list for a message transaction
    ///
    /// Produces, in order: the $SMS burn, creation and initialization of the
    /// message token mint, the recipient's associated token account, the
    /// mint-to of the full message-token supply, the Metaplex metadata
    /// instruction, and the memo carrying the full message text. Compute
    /// budget instructions are not included; prepend them with
    /// [`SmsMessenger::priority_fee_instructions`].
    ///
    /// The mint account's rent-exempt balance is fetched over RPC.
    ///
    /// # Arguments
    ///
    /// * `mint` - Public key of the ephemeral mint keypair for this message
    /// * `recipient` - Wallet receiving the message token
    /// * `name` / `symbol` / `uri` - Sanitized metadata fields
    /// * `message` - Full message text for the memo
    /// * `timestamp_ms` - Unix timestamp recorded in the memo
    ///
    /// # Errors
    ///
    /// Returns an error if the rent query fails or an SPL instruction cannot
    /// be constructed.
    #[allow(clippy::too_many_arguments)]
    pub async fn message_instructions(
        &self,
        mint: &Pubkey,
        recipient: &Pubkey,
        name: &str,
        symbol: &str,
        uri: &str,
        message: &str,
        timestamp_ms: u64,
    ) -> Result<Vec<Instruction>, error::ClientError> {
        let payer = self.payer.pubkey();
        let sender_ata = get_associated_token_address(&payer, &constants::accounts::SMS_MINT);

        let mut instructions = Vec::with_capacity(7);

        // Burn the message fee from the sender's $SMS account
        instructions.push(
            spl_token::instruction::burn(
                &constants::accounts::TOKEN_PROGRAM,
                &sender_ata,
                &constants::accounts::SMS_MINT,
                &payer,
                &[],
                constants::MESSAGE_FEE_BASE,
            )
            .map_err(|err| {
                error::ClientError::OtherError(format!(
                    "Failed to create burn instruction: {}",
                    err
                ))
            })?,
        );

        // Create the mint account, rent-exempt
        let mint_rent = self
            .rpc
            .get_minimum_balance_for_rent_exemption(spl_token::state::Mint::LEN)
            .await
            .map_err(error::ClientError::SolanaClientError)?;
        instructions.push(system_instruction::create_account(
            &payer,
            mint,
            mint_rent,
            spl_token::state::Mint::LEN as u64,
            &constants::accounts::TOKEN_PROGRAM,
        ));

        // Initialize it with the payer as mint and freeze authority
        instructions.push(
            spl_token::instruction::initialize_mint(
                &constants::accounts::TOKEN_PROGRAM,
                mint,
                &payer,
                Some(&payer),
                constants::TOKEN_DECIMALS,
            )
            .map_err(|err| {
                error::ClientError::OtherError(format!(
                    "Failed to create initialize-mint instruction: {}",
                    err
                ))
            })?,
        );

        // The mint is brand new, so the recipient's ATA never exists yet
        instructions.push(create_associated_token_account(
            &payer,
            recipient,
            mint,
            &constants::accounts::TOKEN_PROGRAM,
        ));

        // Mint the full message-token supply to the recipient
        let recipient_ata = get_associated_token_address(recipient, mint);
        instructions.push(
            spl_token::instruction::mint_to(
                &constants::accounts::TOKEN_PROGRAM,
                mint,
                &recipient_ata,
                &payer,
                &[],
                constants::MESSAGE_TOKEN_SUPPLY,
            )
            .map_err(|err| {
                error::ClientError::OtherError(format!(
                    "Failed to create mint-to instruction: {}",
                    err
                ))
            })?,
        );

        // Metadata: message as name, subject as symbol
        instructions.push(instructions::create_metadata(
            &payer,
            mint,
            instructions::CreateMetadataAccountV3::for_message(
                name.to_string(),
                symbol.to_string(),
                uri.to_string(),
            ),
        ));

        // Memo with the full message text
        instructions.push(instructions::memo(&instructions::MessageMemo::new(
            message,
            timestamp_ms,
            &payer,
            recipient,
        )));

        Ok(instructions)
    }

    /// Creates compute budget instructions for priority fees
    ///
    /// Generates Solana compute budget instructions based on the provided
    /// priority fee configuration. These set the maximum compute units a
    /// transaction can consume and the price per compute unit.
    ///
    /// # Arguments
    ///
    /// * `priority_fee` - Priority fee configuration containing optional unit limit and unit price
    ///
    /// # Returns
    ///
    /// Returns a vector of instructions to set compute budget parameters,
    /// which can be empty if no priority fee parameters are provided
    pub fn priority_fee_instructions(priority_fee: &PriorityFee) -> Vec<Instruction> {
        let mut instructions = Vec::new();

        if let Some(limit) = priority_fee.unit_limit {
            let limit_ix = ComputeBudgetInstruction::set_compute_unit_limit(limit);
            instructions.push(limit_ix);
        }

        if let Some(price) = priority_fee.unit_price {
            let price_ix = ComputeBudgetInstruction::set_compute_unit_price(price);
            instructions.push(price_ix);
        }

        instructions
    }

    /// Gets the Metaplex metadata account address for a mint
    ///
    /// Derives the metadata PDA following the Token Metadata standard:
    /// `["metadata", program_id, mint]` under the Token Metadata program.
    ///
    /// # Examples
    ///
    /// ```
    /// # use sms_messenger::SmsMessenger;
    /// # use solana_sdk::pubkey::Pubkey;
    /// #
    /// let mint = Pubkey::new_unique();
    /// let metadata = SmsMessenger::metadata_pda(&mint);
    /// println!("Token metadata account: {}", metadata);
    /// ```
    pub fn metadata_pda(mint: &Pubkey) -> Pubkey {
        let seeds: &[&[u8]; 3] = &[
            constants::seeds::METADATA_SEED,
            constants::accounts::MPL_TOKEN_METADATA.as_ref(),
            mint.as_ref(),
        ];
        let program_id: &Pubkey = &constants::accounts::MPL_TOKEN_METADATA;
        Pubkey::find_program_address(seeds, program_id).0
    }
}
