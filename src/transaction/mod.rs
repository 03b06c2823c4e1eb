//! Transaction endpoints
//!
//! `/budgets/{budget_id}/transactions`, the account/category/payee scoped
//! transaction lists and `/budgets/{budget_id}/scheduled_transactions`

mod filter;
mod service;
mod types;

pub use filter::{Filter, Status};
pub use service::Service;
pub use types::{
    Bulk, ClearingStatus, FlagColor, Frequency, Hybrid, HybridType, OperationSummary,
    PayloadTransaction, Scheduled, ScheduledSubtransaction, ScheduledSummary, Subtransaction,
    Summary, Transaction,
};
