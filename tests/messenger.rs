pub mod utils;

use serial_test::serial;
use sms_messenger::{error::ClientError, SendMessage};
use solana_sdk::{signature::Keypair, signer::Signer};
use utils::{localnet_enabled, mainnet_enabled, TestContext};

fn params(message: &str) -> SendMessage {
    SendMessage {
        subject: "gm".to_string(),
        message: message.to_string(),
        image: None,
    }
}

#[tokio::test]
#[serial]
async fn test_01_rejects_invalid_recipient() {
    let ctx = TestContext::default();

    // Validation runs before any network access, so this works offline.
    for bad in [
        "0x52908400098527886E0F7030069857D2E4169EE7",
        "not an address",
        "IIIIIIIIIIIIIIIIIIIIIIIIIIIIIIII",
        "",
    ] {
        let result = ctx.client.send_message(bad, params("hello"), None).await;
        assert!(
            matches!(result, Err(ClientError::InvalidRecipient(_))),
            "address {:?} was not rejected",
            bad
        );
    }
}

#[tokio::test]
#[serial]
async fn test_02_fresh_wallet_has_zero_balance() {
    if !localnet_enabled() {
        return;
    }

    let ctx = TestContext::default();
    let fresh = Keypair::new();
    let balance = ctx
        .client
        .token_balance(&fresh.pubkey())
        .await
        .expect("Failed to get token balance");
    assert_eq!(balance, 0, "wallet without an ATA should report 0");
}

#[tokio::test]
#[serial]
async fn test_03_send_fails_without_fee_balance() {
    if !localnet_enabled() {
        return;
    }

    let ctx = TestContext::default();
    let recipient = Keypair::new().pubkey().to_string();
    let result = ctx.client.send_message(&recipient, params("hello"), None).await;

    assert!(
        matches!(
            result,
            Err(ClientError::InsufficientBalance { balance: 0, .. })
        ),
        "send without $SMS should fail the balance check"
    );
}

#[cfg(not(skip_expensive_tests))]
#[tokio::test]
#[serial]
async fn test_04_send_message() {
    // Burns real $SMS from the default keypair; strictly opt-in.
    if !mainnet_enabled() {
        return;
    }

    let ctx = TestContext::default();

    let temp_dir = tempfile::TempDir::new().expect("Failed to create temporary directory");
    let file_path = temp_dir.path().join("test_image.png");
    std::fs::write(&file_path, b"fake image data").expect("Failed to write temporary file");

    let recipient = ctx.client.payer.pubkey().to_string();
    let receipt = ctx
        .client
        .send_message(
            &recipient,
            SendMessage {
                subject: "test".to_string(),
                message: "integration test message".to_string(),
                image: Some(file_path.to_str().unwrap().to_string()),
            },
            None,
        )
        .await
        .expect("Failed to send message");
    println!("Signature: {}", receipt.signature);
    println!("Message token mint: {}", receipt.mint);
}
