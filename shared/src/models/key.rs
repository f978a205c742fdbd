//! Cryptographic key model

use serde::{Deserialize, Serialize};

/// A monitored cryptographic key as reported by the inventory endpoint.
///
/// This struct is also the request body for `/predict_vulnerability` —
/// the scoring model consumes the key configuration verbatim.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CryptoKey {
    /// Unique key identifier
    pub key_id: String,
    /// Creation timestamp (RFC 3339 string, passed through untouched)
    pub creation_date: String,
    /// Algorithm name, e.g. "AES_256", "RSA_4096", "3DES"
    pub algorithm: String,
    /// Whether the key material is held in a hardware security module
    pub is_hsm_backed: bool,
    /// Whether automatic rotation is enabled
    pub rotation_enabled: bool,
    /// IAM-style permission policy document (JSON string)
    pub permission_policy: String,
}
