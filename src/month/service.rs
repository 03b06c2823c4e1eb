//! Month service

use super::types::{Month, SearchResultSnapshot};
use crate::api::{with_query, ClientReaderWriter, Date, Filter, MonthRef};
use crate::error::Result;
use crate::types::Envelope;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
struct MonthData {
    month: Month,
}

/// Wraps the month endpoints
pub struct Service<C> {
    client: Arc<C>,
}

impl<C: ClientReaderWriter> Service<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Fetch the month summaries of a budget
    pub async fn get_months(
        &self,
        budget_id: &str,
        filter: Option<&Filter>,
    ) -> Result<SearchResultSnapshot> {
        let path = with_query(format!("/budgets/{budget_id}/months"), filter);
        let envelope: Envelope<SearchResultSnapshot> = self.client.get(&path).await?;
        Ok(envelope.data)
    }

    /// Fetch the month containing `month` with its categories
    pub async fn get_month(&self, budget_id: &str, month: Date) -> Result<Month> {
        self.get_month_ref(budget_id, MonthRef::Date(month)).await
    }

    /// Fetch the current month with its categories
    pub async fn get_current_month(&self, budget_id: &str) -> Result<Month> {
        self.get_month_ref(budget_id, MonthRef::Current).await
    }

    async fn get_month_ref(&self, budget_id: &str, month: MonthRef) -> Result<Month> {
        let path = format!("/budgets/{budget_id}/months/{}", month.as_path_segment());
        let envelope: Envelope<MonthData> = self.client.get(&path).await?;
        Ok(envelope.data.month)
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
        f.debug_struct("month::Service").finish_non_exhaustive()
    }
}
