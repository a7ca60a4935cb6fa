//! Purchase Use Case
//!
//! Pays a pending order: validate, verify the transaction, then commit the
//! order completion, audit record, and ownership update together.

use std::sync::Arc;

use chrono::Utc;
use kernel::id::{OrderId, UserId, VerifiedPurchaseId};

use crate::application::config::CommerceConfig;
use crate::domain::entities::{OrderStatus, Verification, VerifiedPurchase};
use crate::domain::repository::{OrderRepository, PurchaseRepository, TransactionVerifier};
use crate::error::{CommerceError, CommerceResult};

pub struct PurchaseInput {
    pub user_id: UserId,
    pub order_id: OrderId,
    pub transaction_id: String,
}

pub struct PurchaseUseCase<R, V>
where
    R: OrderRepository + PurchaseRepository,
    V: TransactionVerifier,
{
    repo: Arc<R>,
    verifier: Arc<V>,
    config: Arc<CommerceConfig>,
}

impl<R, V> PurchaseUseCase<R, V>
where
    R: OrderRepository + PurchaseRepository,
    V: TransactionVerifier,
{
    pub fn new(repo: Arc<R>, verifier: Arc<V>, config: Arc<CommerceConfig>) -> Self {
        Self {
            repo,
            verifier,
            config,
        }
    }

    pub async fn execute(&self, input: PurchaseInput) -> CommerceResult<VerifiedPurchase> {
        let PurchaseInput {
            user_id,
            order_id,
            transaction_id,
        } = input;

        let transaction_id = transaction_id.trim().to_string();
        if transaction_id.is_empty() {
            return Err(CommerceError::EmptyTransactionId);
        }

        if self.repo.find_customer(user_id).await?.is_none() {
            return Err(CommerceError::UserNotFound(user_id));
        }

        // Another user's order is reported as missing
        let order = self
            .repo
            .find_order(order_id)
            .await?
            .filter(|o| o.user_id == user_id)
            .ok_or(CommerceError::OrderNotFound(order_id))?;

        if order.status == OrderStatus::Completed {
            return Err(CommerceError::OrderAlreadyCompleted(order_id));
        }

        if self.repo.transaction_verified(&transaction_id).await? {
            return Err(CommerceError::TransactionAlreadyVerified(transaction_id));
        }

        if !self.verifier.verify(&transaction_id).await {
            return Err(CommerceError::TransactionNotVerified(transaction_id));
        }

        let now = Utc::now();
        let verification = Verification {
            id: VerifiedPurchaseId::new(),
            transaction_id,
            purchase_time: now,
            status: self.config.verification_status.clone(),
            method: self.config.verification_method.clone(),
            verified_by: self.config.recorded_verifier.clone(),
            verified_time: now,
        };

        let mut purchase = self
            .repo
            .complete_purchase(user_id, order_id, &verification)
            .await?;

        tracing::info!(
            verified_purchase_id = %purchase.verification.id,
            order_id = %order_id,
            user_id = %user_id,
            transaction_id = %purchase.verification.transaction_id,
            "Purchase verified"
        );

        // The client sees the reporting identity, the audit row keeps the recorder
        purchase.verification.verified_by = self.config.reported_verifier.clone();
        purchase.verification.verified_time = Utc::now();

        Ok(purchase)
    }
}
