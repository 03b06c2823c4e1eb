//! Transaction service

use super::filter::Filter;
use super::types::{Bulk, Hybrid, OperationSummary, PayloadTransaction, Scheduled, Transaction};
use crate::api::{to_body, with_query, ClientReaderWriter};
use crate::error::Result;
use crate::types::Envelope;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
struct TransactionsData<T> {
    transactions: Vec<T>,
    #[serde(default)]
    server_knowledge: u64,
}

#[derive(Deserialize)]
struct TransactionData {
    transaction: Transaction,
}

#[derive(Deserialize)]
struct BulkData {
    bulk: Bulk,
}

#[derive(Deserialize)]
struct ScheduledListData {
    scheduled_transactions: Vec<Scheduled>,
}

#[derive(Deserialize)]
struct ScheduledData {
    scheduled_transaction: Scheduled,
}

#[derive(Serialize)]
struct TransactionPayload<'a> {
    transaction: &'a PayloadTransaction,
}

#[derive(Serialize)]
struct TransactionsPayload<'a> {
    transactions: &'a [PayloadTransaction],
}

/// Wraps the transaction and scheduled transaction endpoints
pub struct Service<C> {
    client: Arc<C>,
}

impl<C: ClientReaderWriter> Service<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Fetch the transactions of a budget
    ///
    /// Returns the transactions and the server knowledge to pass as
    /// `last_knowledge_of_server` on the next delta request.
    pub async fn get_transactions(
        &self,
        budget_id: &str,
        filter: Option<&Filter>,
    ) -> Result<(Vec<Transaction>, u64)> {
        let path = with_query(format!("/budgets/{budget_id}/transactions"), filter);
        let envelope: Envelope<TransactionsData<Transaction>> = self.client.get(&path).await?;
        Ok((envelope.data.transactions, envelope.data.server_knowledge))
    }

    pub async fn get_transaction(
        &self,
        budget_id: &str,
        transaction_id: &str,
    ) -> Result<Transaction> {
        let path = format!("/budgets/{budget_id}/transactions/{transaction_id}");
        let envelope: Envelope<TransactionData> = self.client.get(&path).await?;
        Ok(envelope.data.transaction)
    }

    /// Create a single transaction
    pub async fn create_transaction(
        &self,
        budget_id: &str,
        payload: PayloadTransaction,
    ) -> Result<OperationSummary> {
        self.create_transactions(budget_id, std::slice::from_ref(&payload))
            .await
    }

    /// Create one or more transactions
    pub async fn create_transactions(
        &self,
        budget_id: &str,
        payloads: &[PayloadTransaction],
    ) -> Result<OperationSummary> {
        let body = to_body(&TransactionsPayload {
            transactions: payloads,
        })?;
        let path = format!("/budgets/{budget_id}/transactions");
        let envelope: Envelope<OperationSummary> = self.client.post(&path, body).await?;
        Ok(envelope.data)
    }

    /// Create several transactions through the bulk endpoint
    #[deprecated(note = "use `create_transactions` instead")]
    pub async fn bulk_create_transactions(
        &self,
        budget_id: &str,
        payloads: &[PayloadTransaction],
    ) -> Result<Bulk> {
        let body = to_body(&TransactionsPayload {
            transactions: payloads,
        })?;
        let path = format!("/budgets/{budget_id}/transactions/bulk");
        let envelope: Envelope<BulkData> = self.client.post(&path, body).await?;
        Ok(envelope.data.bulk)
    }

    /// Replace a transaction
    pub async fn update_transaction(
        &self,
        budget_id: &str,
        transaction_id: &str,
        payload: PayloadTransaction,
    ) -> Result<Transaction> {
        let body = to_body(&TransactionPayload {
            transaction: &payload,
        })?;
        let path = format!("/budgets/{budget_id}/transactions/{transaction_id}");
        let envelope: Envelope<TransactionData> = self.client.put(&path, body).await?;
        Ok(envelope.data.transaction)
    }

    /// Update several transactions, identified by `id` or `import_id`
    pub async fn update_transactions(
        &self,
        budget_id: &str,
        payloads: &[PayloadTransaction],
    ) -> Result<OperationSummary> {
        let body = to_body(&TransactionsPayload {
            transactions: payloads,
        })?;
        let path = format!("/budgets/{budget_id}/transactions");
        let envelope: Envelope<OperationSummary> = self.client.patch(&path, body).await?;
        Ok(envelope.data)
    }

    pub async fn get_transactions_by_account(
        &self,
        budget_id: &str,
        account_id: &str,
        filter: Option<&Filter>,
    ) -> Result<Vec<Transaction>> {
        let path = with_query(
            format!("/budgets/{budget_id}/accounts/{account_id}/transactions"),
            filter,
        );
        let envelope: Envelope<TransactionsData<Transaction>> = self.client.get(&path).await?;
        Ok(envelope.data.transactions)
    }

    pub async fn get_transactions_by_category(
        &self,
        budget_id: &str,
        category_id: &str,
        filter: Option<&Filter>,
    ) -> Result<Vec<Hybrid>> {
        let path = with_query(
            format!("/budgets/{budget_id}/categories/{category_id}/transactions"),
            filter,
        );
        let envelope: Envelope<TransactionsData<Hybrid>> = self.client.get(&path).await?;
        Ok(envelope.data.transactions)
    }

    pub async fn get_transactions_by_payee(
        &self,
        budget_id: &str,
        payee_id: &str,
        filter: Option<&Filter>,
    ) -> Result<Vec<Hybrid>> {
        let path = with_query(
            format!("/budgets/{budget_id}/payees/{payee_id}/transactions"),
            filter,
        );
        let envelope: Envelope<TransactionsData<Hybrid>> = self.client.get(&path).await?;
        Ok(envelope.data.transactions)
    }

    pub async fn get_scheduled_transactions(&self, budget_id: &str) -> Result<Vec<Scheduled>> {
        let path = format!("/budgets/{budget_id}/scheduled_transactions");
        let envelope: Envelope<ScheduledListData> = self.client.get(&path).await?;
        Ok(envelope.data.scheduled_transactions)
    }

    pub async fn get_scheduled_transaction(
        &self,
        budget_id: &str,
        scheduled_transaction_id: &str,
    ) -> Result<Scheduled> {
        let path = format!("/budgets/{budget_id}/scheduled_transactions/{scheduled_transaction_id}");
        let envelope: Envelope<ScheduledData> = self.client.get(&path).await?;
        Ok(envelope.data.scheduled_transaction)
    }
}

impl<C> Clone for Service<C> {
    fn clone(&self) -> Self {
        Self {
            client: Arc::clone(&self.client),
        }
    }
}

impl<C> std::fmt::Debug for Service<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("transaction::Service").finish_non_exhaustive()
    }
}
