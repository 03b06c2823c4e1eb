//! Payee service

use super::types::{Location, Payee, SearchResultSnapshot};
use crate::api::{with_query, ClientReaderWriter, Filter};
use crate::error::Result;
use crate::types::Envelope;
use serde::Deserialize;
use std::sync::Arc;

#[derive(Deserialize)]
struct PayeeData {
    payee: Payee,
}

#[derive(Deserialize)]
struct LocationData {
    payee_location: Location,
}

#[derive(Deserialize)]
struct LocationsData {
    payee_locations: Vec<Location>,
}

/// Wraps the payee and payee location endpoints
pub struct Service<C> {
    client: Arc<C>,
}

impl<C: ClientReaderWriter> Service<C> {
    pub fn new(client: Arc<C>) -> Self {
        Self { client }
    }

    pub async fn get_payees(
        &self,
        budget_id: &str,
        filter: Option<&Filter>,
    ) -> Result<SearchResultSnapshot> {
        let path = with_query(format!("/budgets/{budget_id}/payees"), filter);
        let envelope: Envelope<SearchResultSnapshot> = self.client.get(&path).await?;
        Ok(envelope.data)
    }

    pub async fn get_payee(&self, budget_id: &str, payee_id: &str) -> Result<Payee> {
        let path = format!("/budgets/{budget_id}/payees/{payee_id}");
        let envelope: Envelope<PayeeData> = self.client.get(&path).await?;
        Ok(envelope.data.payee)
    }

    /// Fetch every payee location of a budget
    pub async fn get_payee_locations(&self, budget_id: &str) -> Result<Vec<Location>> {
        let path = format!("/budgets/{budget_id}/payee_locations");
        let envelope: Envelope<LocationsData> = self.client.get(&path).await?;
        Ok(envelope.data.payee_locations)
    }

    pub async fn get_payee_location(&self, budget_id: &str, location_id: &str) -> Result<Location> {
        let path = format!("/budgets/{budget_id}/payee_locations/{location_id}");
        let envelope: Envelope<LocationData> = self.client.get(&path).await?;
        Ok(envelope.data.payee_location)
    }

    /// Fetch the locations recorded for one payee
    pub async fn get_payee_locations_by_payee(
        &self,
        budget_id: &str,
        payee_id: &str,
    ) -> Result<Vec<Location>> {
        let path = format!("/budgets/{budget_id}/payees/{payee_id}/payee_locations");
        let envelope: Envelope<LocationsData> = self.client.get(&path).await?;
        Ok(envelope.data.payee_locations)
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
        f.debug_struct("payee::Service").finish_non_exhaustive()
    }
}
