//! Payee endpoints
//!
//! `/budgets/{budget_id}/payees` and `/budgets/{budget_id}/payee_locations`

mod service;
mod types;

pub use service::Service;
pub use types::{Location, Payee, SearchResultSnapshot};
