//! Category endpoints
//!
//! `/budgets/{budget_id}/categories` and the month-scoped
//! `/budgets/{budget_id}/months/{month}/categories/{category_id}`

mod service;
mod types;

pub use service::Service;
pub use types::{
    Category, Goal, Group, GroupWithCategories, PayloadMonthCategory, SearchResultSnapshot,
};
