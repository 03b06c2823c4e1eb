#![allow(clippy::cast_possible_truncation)]
#![allow(clippy::must_use_candidate)]

//! # budget-api
//!
//! A typed, async client for the YNAB budgeting REST API.
//!
//! ## Features
//!
//! - **Typed Resources**: accounts, budgets, categories, payees, months,
//!   transactions and the user, each behind its own service
//! - **Incremental Sync**: `last_knowledge_of_server` filters and the
//!   returned server knowledge cursors
//! - **Typed Errors**: every 4xx/5xx becomes an [`api::ApiError`]
//! - **Rate Limit Tracking**: the last `X-Rate-Limit` header is exposed via
//!   [`Client::rate_limit`]
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use budget_api::{api::Filter, transaction, Client, Result};
//!
//! # async fn run() -> Result<()> {
//! let client = Client::new("<access_token>")?;
//!
//! let budgets = client.budget().get_budgets().await?;
//! let budget_id = &budgets[0].id;
//!
//! // Full read, then only what changed since
//! let accounts = client.account().get_accounts(budget_id, None).await?;
//! let filter = Filter::since_knowledge(accounts.server_knowledge);
//! let changed = client.account().get_accounts(budget_id, Some(&filter)).await?;
//!
//! let filter = transaction::Filter::new().status(transaction::Status::Unapproved);
//! let (unapproved, _) = client
//!     .transaction()
//!     .get_transactions(budget_id, Some(&filter))
//!     .await?;
//!
//! println!("{} changed, {} unapproved", changed.accounts.len(), unapproved.len());
//! println!("{:?}", client.rate_limit());
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! ```text
//! ┌──────────────────────────────────────────────────────────────┐
//! │                           Client                             │
//! │  user() budget() account() category() payee() month() ...    │
//! └──────────────────────────────────────────────────────────────┘
//!                                │ get / post / put / patch
//! ┌──────────────────────────────┴───────────────────────────────┐
//! │                         HttpClient                           │
//! │  Bearer auth │ {"error"} decoding │ X-Rate-Limit │ {"data"}  │
//! └──────────────────────────────────────────────────────────────┘
//!                                │
//! ┌──────────────────────────────┴───────────────────────────────┐
//! │              HttpTransport (reqwest by default)              │
//! └──────────────────────────────────────────────────────────────┘
//! ```

#![warn(clippy::all)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::missing_errors_doc)]

// ============================================================================
// Module declarations
// ============================================================================

/// Error types for the client
pub mod error;

/// Common types
pub mod types;

/// Shared API structures: errors, rate limits, dates and filters
pub mod api;

/// Transport core
pub mod http;

/// Client facade
pub mod client;

pub mod account;
pub mod budget;
pub mod category;
pub mod month;
pub mod payee;
pub mod transaction;
pub mod user;

#[cfg(test)]
pub(crate) mod test_support;

// ============================================================================
// Re-exports
// ============================================================================

pub use client::{Client, ClientBuilder};
pub use error::{Error, Result};

/// Crate version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
