//! Month endpoints
//!
//! `/budgets/{budget_id}/months` and `/budgets/{budget_id}/months/{month}`

mod service;
mod types;

pub use service::Service;
pub use types::{Month, SearchResultSnapshot, Summary};
