//! IPFS pinning and metadata assembly for message tokens
//!
//! Every message token points at a Metaplex-style JSON document pinned to
//! IPFS through the Pinata REST API. This module uploads an optional message
//! image (`pinFileToIPFS`), assembles the metadata document, and pins it
//! (`pinJSONToIPFS`). Uploads never fail a message: any pinning error falls
//! back to the fixed $SMS logo references.

pub mod transaction;
pub mod validation;

use crate::{common::types::PinataConfig, constants};
use isahc::{prelude::*, Request};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::{SystemTime, UNIX_EPOCH};
use tracing::{debug, warn};

/// Inputs for pinning a message's metadata
///
/// # Fields
///
/// * `name` - Sanitized message text used as the token name
/// * `symbol` - Sanitized subject used as the token symbol
/// * `message` - Full, unsanitized message text
/// * `sender` / `recipient` - Base58 wallet addresses
/// * `timestamp_ms` - Unix timestamp in milliseconds
/// * `image` - Optional path to an image file to pin alongside the metadata
#[derive(Debug, Clone)]
pub struct MessageUpload {
    pub name: String,
    pub symbol: String,
    pub message: String,
    pub sender: String,
    pub recipient: String,
    pub timestamp_ms: u64,
    pub image: Option<String>,
}

/// URLs of pinned message metadata
#[derive(Debug, Clone)]
pub struct MessageMetadataResponse {
    /// `ipfs://` URI of the metadata document, used in the on-chain metadata account
    pub metadata_uri: String,
    /// HTTPS gateway URL of the same document
    pub gateway_uri: String,
    /// `ipfs://` URI of the message image (or the default logo)
    pub image_uri: String,
}

/// One attribute entry in the pinned metadata document
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Attribute {
    pub trait_type: String,
    pub value: String,
}

/// File reference inside the metadata `properties` block
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct FileSpec {
    pub uri: String,
    #[serde(rename = "type")]
    pub mime_type: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Properties {
    pub files: Vec<FileSpec>,
    pub category: String,
    pub creators: Vec<String>,
}

/// Metaplex-style metadata document pinned to IPFS for each message token
#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct MessageMetadata {
    pub name: String,
    pub symbol: String,
    pub description: String,
    pub image: String,
    pub external_url: String,
    pub attributes: Vec<Attribute>,
    pub properties: Properties,
}

impl MessageMetadata {
    /// Assembles the metadata document for a message
    ///
    /// The message rides along as an attribute, clipped to 50 characters the
    /// way explorers expect attribute values to stay short; the full text is
    /// carried by the transaction's memo instruction.
    pub fn new(upload: &MessageUpload, image_uri: &str) -> Self {
        let clipped = if upload.message.len() > 50 {
            let mut end = 47;
            while !upload.message.is_char_boundary(end) {
                end -= 1;
            }
            format!("{}...", &upload.message[..end])
        } else {
            upload.message.clone()
        };

        Self {
            name: upload.name.clone(),
            symbol: upload.symbol.clone(),
            description: format!(
                "Message from {}...{} sent at {}",
                &upload.sender[..4],
                &upload.sender[upload.sender.len() - 4..],
                upload.timestamp_ms
            ),
            image: image_uri.to_string(),
            external_url: constants::EXTERNAL_URL.to_string(),
            attributes: vec![
                Attribute {
                    trait_type: "Token Type".to_string(),
                    value: "Message".to_string(),
                },
                Attribute {
                    trait_type: "Sender".to_string(),
                    value: upload.sender.clone(),
                },
                Attribute {
                    trait_type: "Recipient".to_string(),
                    value: upload.recipient.clone(),
                },
                Attribute {
                    trait_type: "Timestamp".to_string(),
                    value: upload.timestamp_ms.to_string(),
                },
                Attribute {
                    trait_type: "Message".to_string(),
                    value: clipped,
                },
            ],
            properties: Properties {
                files: vec![FileSpec {
                    uri: image_uri.to_string(),
                    mime_type: "image/png".to_string(),
                }],
                category: "image".to_string(),
                creators: Vec::new(),
            },
        }
    }
}

/// Response body of Pinata's pinning endpoints
#[derive(Deserialize, Debug)]
struct PinResponse {
    #[serde(rename = "IpfsHash")]
    ipfs_hash: String,
}

/// URLs of a single pinned object
#[derive(Debug, Clone)]
pub struct PinnedContent {
    pub ipfs_uri: String,
    pub gateway_uri: String,
}

impl PinnedContent {
    fn from_hash(config: &PinataConfig, hash: &str) -> Self {
        Self {
            ipfs_uri: format!("ipfs://{}", hash),
            gateway_uri: format!("{}/{}", config.gateway_url, hash),
        }
    }
}

/// Pins a file to IPFS via `pinFileToIPFS`
///
/// The request is a multipart form with the file plus `pinataMetadata` and
/// `pinataOptions` (CID v1) fields.
///
/// # Errors
///
/// Returns an error if the file cannot be read, the request fails, or the
/// API responds with a non-success status.
pub async fn pin_file_to_ipfs(
    config: &PinataConfig,
    path: &Path,
) -> Result<PinnedContent, Box<dyn std::error::Error>> {
    let file_name = path
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| "file".to_string());
    let contents = std::fs::read(path)?;

    let boundary = format!(
        "----sms-messenger-{:016x}",
        SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_nanos() as u64
    );

    let pinata_metadata = serde_json::json!({
        "name": format!("SMS-Message-{}", SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .unwrap_or_default()
            .as_millis()),
        "keyvalues": { "type": "message-image" }
    });
    let pinata_options = serde_json::json!({ "cidVersion": 1 });

    let mut body: Vec<u8> = Vec::with_capacity(contents.len() + 1024);
    body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
    body.extend_from_slice(
        format!(
            "Content-Disposition: form-data; name=\"file\"; filename=\"{}\"\r\n",
            file_name
        )
        .as_bytes(),
    );
    body.extend_from_slice(b"Content-Type: application/octet-stream\r\n\r\n");
    body.extend_from_slice(&contents);
    body.extend_from_slice(b"\r\n");
    for (name, value) in [
        ("pinataMetadata", &pinata_metadata),
        ("pinataOptions", &pinata_options),
    ] {
        body.extend_from_slice(format!("--{}\r\n", boundary).as_bytes());
        body.extend_from_slice(
            format!("Content-Disposition: form-data; name=\"{}\"\r\n\r\n", name).as_bytes(),
        );
        body.extend_from_slice(value.to_string().as_bytes());
        body.extend_from_slice(b"\r\n");
    }
    body.extend_from_slice(format!("--{}--\r\n", boundary).as_bytes());

    let mut response = Request::post(format!("{}/pinning/pinFileToIPFS", config.api_url))
        .header("Authorization", format!("Bearer {}", config.jwt))
        .header(
            "Content-Type",
            format!("multipart/form-data; boundary={}", boundary),
        )
        .body(body)?
        .send_async()
        .await?;

    if !response.status().is_success() {
        return Err(format!("pinFileToIPFS returned status {}", response.status()).into());
    }

    let pin: PinResponse = serde_json::from_str(&response.text().await?)?;
    debug!(hash = %pin.ipfs_hash, "image pinned to IPFS");
    Ok(PinnedContent::from_hash(config, &pin.ipfs_hash))
}

/// Pins a JSON document to IPFS via `pinJSONToIPFS`
///
/// # Errors
///
/// Returns an error if serialization or the request fails, or the API
/// responds with a non-success status.
pub async fn pin_json_to_ipfs<T: Serialize>(
    config: &PinataConfig,
    document: &T,
) -> Result<PinnedContent, Box<dyn std::error::Error>> {
    let body = serde_json::to_string(document)?;

    let mut response = Request::post(format!("{}/pinning/pinJSONToIPFS", config.api_url))
        .header("Authorization", format!("Bearer {}", config.jwt))
        .header("Content-Type", "application/json")
        .body(body)?
        .send_async()
        .await?;

    if !response.status().is_success() {
        return Err(format!("pinJSONToIPFS returned status {}", response.status()).into());
    }

    let pin: PinResponse = serde_json::from_str(&response.text().await?)?;
    debug!(hash = %pin.ipfs_hash, "metadata pinned to IPFS");
    Ok(PinnedContent::from_hash(config, &pin.ipfs_hash))
}

/// Uploads a message's image and metadata document to IPFS
///
/// Pins the image first (when one is supplied), then the metadata document
/// referencing it. Failures fall back to the fixed $SMS logo so a message is
/// never blocked on the pinning service.
pub async fn upload_message_metadata(
    config: &PinataConfig,
    upload: MessageUpload,
) -> MessageMetadataResponse {
    let image_uri = match &upload.image {
        Some(path) => match pin_file_to_ipfs(config, Path::new(path)).await {
            Ok(pinned) => pinned.ipfs_uri,
            Err(err) => {
                warn!(%err, "image upload failed, using default logo");
                constants::DEFAULT_LOGO_URI.to_string()
            }
        },
        None => constants::DEFAULT_LOGO_URI.to_string(),
    };

    let metadata = MessageMetadata::new(&upload, &image_uri);
    match pin_json_to_ipfs(config, &metadata).await {
        Ok(pinned) => MessageMetadataResponse {
            metadata_uri: pinned.ipfs_uri,
            gateway_uri: pinned.gateway_uri,
            image_uri,
        },
        Err(err) => {
            warn!(%err, "metadata upload failed, using default logo reference");
            MessageMetadataResponse {
                metadata_uri: constants::DEFAULT_LOGO_GATEWAY_URI.to_string(),
                gateway_uri: constants::DEFAULT_LOGO_GATEWAY_URI.to_string(),
                image_uri,
            }
        }
    }
}
