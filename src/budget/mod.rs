//! Budget endpoints
//!
//! `/budgets`, `/budgets/{budget_id}` and `/budgets/{budget_id}/settings`

mod service;
mod types;

pub use service::{Service, LAST_USED_BUDGET};
pub use types::{Budget, CurrencyFormat, DateFormat, Settings, Snapshot, Summary};
