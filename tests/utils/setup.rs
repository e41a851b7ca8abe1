use std::{
    fs,
    sync::{Arc, OnceLock},
};

use sms_messenger::{
    common::types::{Cluster, PinataConfig, PriorityFee},
    SmsMessenger,
};
use solana_sdk::{
    commitment_config::CommitmentConfig,
    signature::{read_keypair_file, Keypair},
};

// Load the default keypair with error handling
fn load_default_keypair() -> Result<Keypair, String> {
    // Get home directory in a cross-platform way
    let home_path = dirs::home_dir().ok_or("Could not determine home directory")?;
    let default_keypair_path = home_path.join(".config/solana/id.json");

    // Check if the keypair file exists
    if !default_keypair_path.exists() {
        // Generate a new keypair
        let keypair = Keypair::new();

        // Create directory if it doesn't exist
        if let Some(parent) = default_keypair_path.parent() {
            fs::create_dir_all(parent)
                .map_err(|e| format!("Failed to create directory {}: {}", parent.display(), e))?;
        }

        // Write the keypair to file as the JSON byte array the CLI expects
        let keypair_json = serde_json::to_string(&keypair.to_bytes().to_vec())
            .map_err(|e| format!("Failed to serialize keypair: {}", e))?;
        fs::write(&default_keypair_path, keypair_json).map_err(|e| {
            format!(
                "Failed to write keypair to {}: {}",
                default_keypair_path.display(),
                e
            )
        })?;

        return Ok(keypair);
    }

    // Read existing keypair
    read_keypair_file(&default_keypair_path).map_err(|e| {
        format!(
            "Failed to read keypair from {}: {}",
            default_keypair_path.display(),
            e
        )
    })
}

static CLIENT: OnceLock<SmsMessenger> = OnceLock::new();

/// Shared client for integration tests. Connects to mainnet when
/// `SMS_MAINNET_TESTS` is set (for the expensive send test), otherwise to a
/// local validator.
pub struct TestContext {
    pub client: &'static SmsMessenger,
}

impl Default for TestContext {
    fn default() -> Self {
        let client = CLIENT.get_or_init(|| {
            let payer =
                Arc::new(load_default_keypair().expect("Failed to load default keypair"));
            let cluster = if mainnet_enabled() {
                Cluster::mainnet(CommitmentConfig::confirmed(), PriorityFee::default())
            } else {
                Cluster::localnet(CommitmentConfig::confirmed(), PriorityFee::default())
            };
            let pinata = PinataConfig::from_env()
                .unwrap_or_else(|_| PinataConfig::new("test-jwt".to_string()));
            SmsMessenger::new(payer, cluster, pinata)
        });
        Self { client }
    }
}

/// True when a local validator is available for network-dependent tests.
pub fn localnet_enabled() -> bool {
    std::env::var("SMS_LOCALNET_TESTS").is_ok() && !mainnet_enabled()
}

/// True when the expensive mainnet send test is opted into.
pub fn mainnet_enabled() -> bool {
    std::env::var("SMS_MAINNET_TESTS").is_ok()
}
