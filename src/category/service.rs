//! Category service

use super::types::{Category, PayloadMonthCategory, SearchResultSnapshot};
use crate::api::{to_body, with_query, ClientReaderWriter, Date, Filter, MonthRef};
use crate::error::Result;
use crate::types::Envelope;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

#[derive(Deserialize)]
struct CategoryData {
    category: Category,
}

#[derive(Serialize)]
struct MonthCategoryPayload<'a> {
    month_category: &'a PayloadMonthCategory,
}

/// Wraps the category endpoints
pub struct Service<C> {
    client: Arc<C>,
}

impl<C: ClientReaderWriter> Service<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    /// Fetch the category groups of a budget with their categories
    pub async fn get_categories(
        &self,
        budget_id: &str,
        filter: Option<&Filter>,
    ) -> Result<SearchResultSnapshot> {
        let path = with_query(format!("/budgets/{budget_id}/categories"), filter);
        let envelope: Envelope<SearchResultSnapshot> = self.client.get(&path).await?;
        Ok(envelope.data)
    }

    /// Fetch a single category with the amounts of the current month
    pub async fn get_category(&self, budget_id: &str, category_id: &str) -> Result<Category> {
        let path = format!("/budgets/{budget_id}/categories/{category_id}");
        let envelope: Envelope<CategoryData> = self.client.get(&path).await?;
        Ok(envelope.data.category)
    }

    /// Fetch a category with the amounts of the month containing `month`
    pub async fn get_category_for_month(
        &self,
        budget_id: &str,
        category_id: &str,
        month: Date,
    ) -> Result<Category> {
        self.get_month_category(budget_id, category_id, MonthRef::Date(month))
            .await
    }

    /// Fetch a category with the amounts of the current month
    pub async fn get_category_for_current_month(
        &self,
        budget_id: &str,
        category_id: &str,
    ) -> Result<Category> {
        self.get_month_category(budget_id, category_id, MonthRef::Current)
            .await
    }

    /// Update the amount assigned to a category in the month containing `month`
    pub async fn update_category_for_month(
        &self,
        budget_id: &str,
        category_id: &str,
        month: Date,
        payload: PayloadMonthCategory,
    ) -> Result<Category> {
        self.update_month_category(budget_id, category_id, MonthRef::Date(month), &payload)
            .await
    }

    /// Update the amount assigned to a category in the current month
    pub async fn update_category_for_current_month(
        &self,
        budget_id: &str,
        category_id: &str,
        payload: PayloadMonthCategory,
    ) -> Result<Category> {
        self.update_month_category(budget_id, category_id, MonthRef::Current, &payload)
            .await
    }

    async fn get_month_category(
        &self,
        budget_id: &str,
        category_id: &str,
        month: MonthRef,
    ) -> Result<Category> {
        let path = month_category_path(budget_id, category_id, month);
        let envelope: Envelope<CategoryData> = self.client.get(&path).await?;
        Ok(envelope.data.category)
    }

    async fn update_month_category(
        &self,
        budget_id: &str,
        category_id: &str,
        month: MonthRef,
        payload: &PayloadMonthCategory,
    ) -> Result<Category> {
        let body = to_body(&MonthCategoryPayload {
            month_category: payload,
        })?;
        let path = month_category_path(budget_id, category_id, month);
        let envelope: Envelope<CategoryData> = self.client.put(&path, body).await?;
        Ok(envelope.data.category)
    }
}

fn month_category_path(budget_id: &str, category_id: &str, month: MonthRef) -> String {
    format!(
        "/budgets/{budget_id}/months/{}/categories/{category_id}",
        month.as_path_segment()
    )
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
        f.debug_struct("category::Service").finish_non_exhaustive()
    }
}
