//! Budget service

use super::types::{Settings, Snapshot, Summary};
use crate::api::{with_query, ClientReaderWriter, Filter};
use crate::error::Result;
use crate::types::Envelope;
use serde::Deserialize;
use std::sync::Arc;

/// Budget id the API resolves to the last used budget
pub const LAST_USED_BUDGET: &str = "last-used";

#[derive(Deserialize)]
struct BudgetsData {
    budgets: Vec<Summary>,
}

#[derive(Deserialize)]
struct SettingsData {
    settings: Settings,
}

/// Wraps the budget endpoints
pub struct Service<C> {
    client: Arc<C>,
}

impl<C: ClientReaderWriter> Service<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Fetch the summaries of every budget the user can access
    pub async fn get_budgets(&self) -> Result<Vec<Summary>> {
        let envelope: Envelope<BudgetsData> = self.client.get("/budgets").await?;
        Ok(envelope.data.budgets)
    }

    /// Fetch a single budget with all related entities
    pub async fn get_budget(&self, budget_id: &str, filter: Option<&Filter>) -> Result<Snapshot> {
        let path = with_query(format!("/budgets/{budget_id}"), filter);
        let envelope: Envelope<Snapshot> = self.client.get(&path).await?;
        Ok(envelope.data)
    }

    /// Fetch the last used budget with all related entities
    pub async fn get_last_used_budget(&self, filter: Option<&Filter>) -> Result<Snapshot> {
        self.get_budget(LAST_USED_BUDGET, filter).await
    }

    pub async fn get_budget_settings(&self, budget_id: &str) -> Result<Settings> {
        let path = format!("/budgets/{budget_id}/settings");
        let envelope: Envelope<SettingsData> = self.client.get(&path).await?;
        Ok(envelope.data.settings)
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
        f.debug_struct("budget::Service").finish_non_exhaustive()
    }
}
