//! Transaction verifiers

use std::str::FromStr;
use std::sync::Arc;

use platform::tron::TronClient;

use crate::domain::repository::TransactionVerifier;

/// Accepts every non-empty transaction reference
#[derive(Debug, Clone, Copy, Default)]
pub struct AutomatedVerifier;

impl TransactionVerifier for AutomatedVerifier {
    async fn verify(&self, transaction_id: &str) -> bool {
        tracing::info!(transaction_id = %transaction_id, "Transaction accepted by automated verifier");
        true
    }
}

/// Looks the transaction up on a Tron node and requires a successful receipt
#[derive(Clone)]
pub struct TronVerifier {
    client: Arc<TronClient>,
}

impl TronVerifier {
    pub fn new(client: Arc<TronClient>) -> Self {
        Self { client }
    }
}

impl TransactionVerifier for TronVerifier {
    async fn verify(&self, transaction_id: &str) -> bool {
        match self.client.transaction_info(transaction_id).await {
            Ok(Some(info)) => {
                let ok = info.is_successful();
                tracing::info!(
                    transaction_id = %transaction_id,
                    block = ?info.block_number,
                    successful = ok,
                    "Tron transaction looked up"
                );
                ok
            }
            Ok(None) => {
                tracing::info!(transaction_id = %transaction_id, "Tron node does not know the transaction");
                false
            }
            Err(e) => {
                tracing::warn!(transaction_id = %transaction_id, error = %e, "Tron verification failed");
                false
            }
        }
    }
}

/// Verifier selection read from configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum VerificationMode {
    #[default]
    Automated,
    Tron,
}

impl FromStr for VerificationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "automated" => Ok(VerificationMode::Automated),
            "tron" => Ok(VerificationMode::Tron),
            other => Err(format!("unknown verification mode '{other}'")),
        }
    }
}

/// The verifier the server runs with
#[derive(Clone)]
pub enum ConfiguredVerifier {
    Automated(AutomatedVerifier),
    Tron(TronVerifier),
}

impl ConfiguredVerifier {
    pub fn from_mode(mode: VerificationMode, client: Arc<TronClient>) -> Self {
        match mode {
            VerificationMode::Automated => ConfiguredVerifier::Automated(AutomatedVerifier),
            VerificationMode::Tron => ConfiguredVerifier::Tron(TronVerifier::new(client)),
        }
    }
}

impl TransactionVerifier for ConfiguredVerifier {
    async fn verify(&self, transaction_id: &str) -> bool {
        match self {
            ConfiguredVerifier::Automated(v) => v.verify(transaction_id).await,
            ConfiguredVerifier::Tron(v) => v.verify(transaction_id).await,
        }
    }
}
