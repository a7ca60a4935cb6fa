//! Tron full-node HTTP client
//!
//! Read-only access to the two node endpoints the marketplace needs:
//! - `POST /wallet/triggerconstantcontract` for TRC-721 `ownerOf(uint256)`
//! - `POST /wallet/gettransactioninfobyid` for transaction receipts
//!
//! Addresses are exchanged in base58check form (`visible: true`).

use std::time::Duration;

use serde::Deserialize;
use thiserror::Error;
use tracing::debug;

use crate::crypto::to_base58check;

/// Caller address used for constant calls (the all-zero account)
const CONSTANT_CALL_CALLER: &str = "T9yD14Nj9j7xAB4dbGeiX9h8unkKHxuWwb";

/// Tron mainnet account address prefix byte
const ADDRESS_PREFIX: u8 = 0x41;

/// Public Nile testnet node
pub const DEFAULT_TRON_API_URL: &str = "https://nile.trongrid.io";

#[derive(Debug, Error)]
pub enum TronError {
    #[error("Tron node request failed: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Tron node returned HTTP {0}")]
    Status(u16),

    #[error("Tron node rejected the call: {0}")]
    Rejected(String),

    #[error("Contract call reverted")]
    Reverted,

    #[error("Token has no owner")]
    NoOwner,

    #[error("Malformed Tron node response: {0}")]
    MalformedResponse(String),
}

/// Connection settings for [`TronClient`]
#[derive(Debug, Clone)]
pub struct TronConfig {
    pub base_url: String,
    /// Sent as `TRON-PRO-API-KEY` when present (TronGrid)
    pub api_key: Option<String>,
    pub timeout: Duration,
}

impl Default for TronConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_TRON_API_URL.to_string(),
            api_key: None,
            timeout: Duration::from_secs(10),
        }
    }
}

/// Receipt data returned by `gettransactioninfobyid`
#[derive(Debug, Clone, Deserialize)]
pub struct TransactionInfo {
    pub id: String,
    #[serde(rename = "blockNumber", default)]
    pub block_number: Option<u64>,
    /// Present (as `"FAILED"`) only when execution failed
    #[serde(default)]
    pub result: Option<String>,
    #[serde(default)]
    pub receipt: Option<Receipt>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Receipt {
    /// Contract execution outcome; absent for plain TRX transfers
    #[serde(default)]
    pub result: Option<String>,
}

impl TransactionInfo {
    /// Included in a block and not failed
    pub fn is_successful(&self) -> bool {
        let failed = self.result.as_deref() == Some("FAILED");
        let receipt_ok = self
            .receipt
            .as_ref()
            .and_then(|r| r.result.as_deref())
            .is_none_or(|r| r == "SUCCESS");
        self.block_number.is_some() && !failed && receipt_ok
    }
}

pub struct TronClient {
    base_url: String,
    api_key: Option<String>,
    client: reqwest::Client,
}

impl TronClient {
    pub fn new(config: TronConfig) -> Result<Self, TronError> {
        let client = reqwest::Client::builder().timeout(config.timeout).build()?;
        Ok(Self {
            base_url: config.base_url.trim_end_matches('/').to_string(),
            api_key: config.api_key,
            client,
        })
    }

    async fn post<T: for<'de> Deserialize<'de>>(
        &self,
        path: &str,
        body: &serde_json::Value,
    ) -> Result<T, TronError> {
        let mut request = self
            .client
            .post(format!("{}{}", self.base_url, path))
            .json(body);
        if let Some(key) = &self.api_key {
            request = request.header("TRON-PRO-API-KEY", key);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(TronError::Status(status.as_u16()));
        }
        Ok(response.json::<T>().await?)
    }

    /// TRC-721 `ownerOf(token_id)` on `contract` (base58 address)
    ///
    /// Returns the owner's base58check address.
    pub async fn owner_of(&self, contract: &str, token_id: u128) -> Result<String, TronError> {
        let body = serde_json::json!({
            "owner_address": CONSTANT_CALL_CALLER,
            "contract_address": contract,
            "function_selector": "ownerOf(uint256)",
            "parameter": encode_uint256(token_id),
            "visible": true,
        });

        let response: ConstantCallResponse =
            self.post("/wallet/triggerconstantcontract", &body).await?;
        debug!(contract, token_id = %token_id, "ownerOf constant call returned");

        let word = response.into_first_word()?;
        decode_address_word(&word)
    }

    /// Receipt for `tx_id`; `None` when the node does not know the transaction
    pub async fn transaction_info(&self, tx_id: &str) -> Result<Option<TransactionInfo>, TronError> {
        let body = serde_json::json!({ "value": tx_id });
        let value: serde_json::Value = self.post("/wallet/gettransactioninfobyid", &body).await?;

        // Unknown transactions come back as `{}`
        if value.as_object().is_none_or(|o| o.is_empty()) {
            return Ok(None);
        }
        serde_json::from_value(value)
            .map(Some)
            .map_err(|e| TronError::MalformedResponse(e.to_string()))
    }
}

#[derive(Debug, Deserialize)]
struct ConstantCallResponse {
    #[serde(default)]
    result: Option<CallResult>,
    #[serde(default)]
    constant_result: Vec<String>,
    #[serde(default)]
    transaction: Option<CallTransaction>,
}

#[derive(Debug, Deserialize)]
struct CallResult {
    #[serde(default)]
    result: bool,
    #[serde(default)]
    message: Option<String>,
}

#[derive(Debug, Deserialize)]
struct CallTransaction {
    #[serde(default)]
    ret: Vec<CallRet>,
}

#[derive(Debug, Deserialize)]
struct CallRet {
    #[serde(default)]
    ret: Option<String>,
}

impl ConstantCallResponse {
    fn into_first_word(self) -> Result<String, TronError> {
        match &self.result {
            Some(r) if r.result => {}
            Some(r) => {
                let message = r
                    .message
                    .as_deref()
                    .map(decode_node_message)
                    .unwrap_or_else(|| "unknown error".to_string());
                return Err(TronError::Rejected(message));
            }
            None => return Err(TronError::MalformedResponse("missing result".to_string())),
        }

        let reverted = self
            .transaction
            .iter()
            .flat_map(|t| t.ret.iter())
            .any(|r| r.ret.as_deref() == Some("REVERT"));
        if reverted {
            return Err(TronError::Reverted);
        }

        self.constant_result
            .into_iter()
            .next()
            .ok_or_else(|| TronError::MalformedResponse("empty constant_result".to_string()))
    }
}

/// ABI-encode a uint256 argument as 64 hex characters
fn encode_uint256(value: u128) -> String {
    format!("{:064x}", value)
}

/// Decode an ABI `address` word into a Tron base58check address
fn decode_address_word(word: &str) -> Result<String, TronError> {
    let bytes = hex::decode(word).map_err(|e| TronError::MalformedResponse(e.to_string()))?;
    if bytes.len() != 32 {
        return Err(TronError::MalformedResponse(format!(
            "expected 32-byte word, got {}",
            bytes.len()
        )));
    }

    let account = &bytes[12..];
    if account.iter().all(|&b| b == 0) {
        return Err(TronError::NoOwner);
    }

    let mut payload = Vec::with_capacity(21);
    payload.push(ADDRESS_PREFIX);
    payload.extend_from_slice(account);
    Ok(to_base58check(&payload))
}

/// Node error messages are hex-encoded UTF-8
fn decode_node_message(message: &str) -> String {
    hex::decode(message)
        .ok()
        .and_then(|b| String::from_utf8(b).ok())
        .unwrap_or_else(|| message.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_uint256() {
        assert_eq!(encode_uint256(1), format!("{}1", "0".repeat(63)));
        assert_eq!(encode_uint256(255).len(), 64);
        assert!(encode_uint256(255).ends_with("ff"));
    }

    #[test]
    fn test_decode_address_word() {
        let word = format!("{}{}", "0".repeat(24), "ff".repeat(20));
        let address = decode_address_word(&word).unwrap();
        assert!(address.starts_with('T'));
        assert_eq!(address.len(), 34);

        let zero = "0".repeat(64);
        assert!(matches!(decode_address_word(&zero), Err(TronError::NoOwner)));
        assert!(matches!(
            decode_address_word("abcd"),
            Err(TronError::MalformedResponse(_))
        ));
    }

    #[test]
    fn test_constant_call_reverted() {
        let json = serde_json::json!({
            "result": { "result": true },
            "constant_result": ["08c379a0"],
            "transaction": { "ret": [{ "ret": "REVERT" }] }
        });
        let response: ConstantCallResponse = serde_json::from_value(json).unwrap();
        assert!(matches!(response.into_first_word(), Err(TronError::Reverted)));
    }

    #[test]
    fn test_constant_call_rejected_message_is_decoded() {
        let json = serde_json::json!({
            "result": { "code": "CONTRACT_VALIDATE_ERROR", "message": hex::encode("No contract") }
        });
        let response: ConstantCallResponse = serde_json::from_value(json).unwrap();
        match response.into_first_word() {
            Err(TronError::Rejected(msg)) => assert_eq!(msg, "No contract"),
            other => panic!("unexpected: {:?}", other),
        }
    }

    #[test]
    fn test_constant_call_success() {
        let word = format!("{}{}", "0".repeat(24), "11".repeat(20));
        let json = serde_json::json!({
            "result": { "result": true },
            "constant_result": [word.clone()],
            "transaction": { "ret": [{}] }
        });
        let response: ConstantCallResponse = serde_json::from_value(json).unwrap();
        assert_eq!(response.into_first_word().unwrap(), word);
    }

    #[test]
    fn test_transaction_info_success_rules() {
        let ok: TransactionInfo = serde_json::from_value(serde_json::json!({
            "id": "abc", "blockNumber": 10, "receipt": { "result": "SUCCESS" }
        }))
        .unwrap();
        assert!(ok.is_successful());

        let transfer: TransactionInfo = serde_json::from_value(serde_json::json!({
            "id": "abc", "blockNumber": 10, "receipt": { "net_usage": 268 }
        }))
        .unwrap();
        assert!(transfer.is_successful());

        let failed: TransactionInfo = serde_json::from_value(serde_json::json!({
            "id": "abc", "blockNumber": 10, "result": "FAILED",
            "receipt": { "result": "REVERT" }
        }))
        .unwrap();
        assert!(!failed.is_successful());

        let pending: TransactionInfo =
            serde_json::from_value(serde_json::json!({ "id": "abc" })).unwrap();
        assert!(!pending.is_successful());
    }
}
