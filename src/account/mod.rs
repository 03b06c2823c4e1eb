//! Account endpoints
//!
//! `/budgets/{budget_id}/accounts`

mod service;
mod types;

pub use service::Service;
pub use types::{Account, SearchResultSnapshot, Type};

#[cfg(test)]
mod tests;
