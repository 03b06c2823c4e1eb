//! Account service

use super::types::{Account, SearchResultSnapshot};
use crate::api::{with_query, ClientReaderWriter, Filter};
use crate::error::Result;
use crate::types::Envelope;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
struct AccountData {
    account: Account,
}

/// Wraps the account endpoints
pub struct Service<C> {
    client: Arc<C>,
}

impl<C: ClientReaderWriter> Service<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Fetch the accounts of a budget, optionally only those changed since
    /// the filter's server knowledge
    pub async fn get_accounts(
        &self,
        budget_id: &str,
        filter: Option<&Filter>,
    ) -> Result<SearchResultSnapshot> {
        let path = with_query(format!("/budgets/{budget_id}/accounts"), filter);
        let envelope: Envelope<SearchResultSnapshot> = self.client.get(&path).await?;
        Ok(envelope.data)
    }

    /// Fetch a single account
    pub async fn get_account(&self, budget_id: &str, account_id: &str) -> Result<Account> {
        let path = format!("/budgets/{budget_id}/accounts/{account_id}");
        let envelope: Envelope<AccountData> = self.client.get(&path).await?;
        Ok(envelope.data.account)
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
        f.debug_struct("account::Service").finish_non_exhaustive()
    }
}
