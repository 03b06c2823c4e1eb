//! Transaction data types
//!
//! Amounts are in milliunits.

use crate::api::Date;
use serde::{Deserialize, Serialize};

/// Clearing state of a transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ClearingStatus {
    Cleared,
    Uncleared,
    Reconciled,
    /// Any value this client does not know yet
    #[serde(other)]
    Other,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FlagColor {
    Red,
    Orange,
    Yellow,
    Green,
    Blue,
    Purple,
    /// Any value this client does not know yet
    #[serde(other)]
    Other,
}

/// Recurrence of a scheduled transaction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Frequency {
    Never,
    Daily,
    Weekly,
    EveryOtherWeek,
    TwiceAMonth,
    Every4Weeks,
    Monthly,
    EveryOtherMonth,
    Every3Months,
    Every4Months,
    TwiceAYear,
    Yearly,
    EveryOtherYear,
    /// Any value this client does not know yet
    #[serde(other)]
    Other,
}

/// Whether a [`Hybrid`] is a whole transaction or a split part of one
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum HybridType {
    Transaction,
    Subtransaction,
    /// Any value this client does not know yet
    #[serde(other)]
    Other,
}

/// A transaction with its resolved names and splits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    pub date: Date,
    pub amount: i64,
    pub memo: Option<String>,
    pub cleared: ClearingStatus,
    pub approved: bool,
    pub flag_color: Option<FlagColor>,
    pub account_id: String,
    pub payee_id: Option<String>,
    pub category_id: Option<String>,
    pub transfer_account_id: Option<String>,
    pub transfer_transaction_id: Option<String>,
    pub matched_transaction_id: Option<String>,
    pub import_id: Option<String>,
    pub deleted: bool,
    pub account_name: String,
    pub payee_name: Option<String>,
    pub category_name: Option<String>,
    #[serde(default)]
    pub subtransactions: Vec<Subtransaction>,
}

/// A transaction as embedded in a budget, without resolved names
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub id: String,
    pub date: Date,
    pub amount: i64,
    pub memo: Option<String>,
    pub cleared: ClearingStatus,
    pub approved: bool,
    pub flag_color: Option<FlagColor>,
    pub account_id: String,
    pub payee_id: Option<String>,
    pub category_id: Option<String>,
    pub transfer_account_id: Option<String>,
    pub transfer_transaction_id: Option<String>,
    pub matched_transaction_id: Option<String>,
    pub import_id: Option<String>,
    pub deleted: bool,
}

/// One split of a transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Subtransaction {
    pub id: String,
    pub transaction_id: String,
    pub amount: i64,
    pub memo: Option<String>,
    pub payee_id: Option<String>,
    pub category_id: Option<String>,
    pub transfer_account_id: Option<String>,
    pub deleted: bool,
}

/// Transaction or subtransaction returned by the category and payee lists
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Hybrid {
    pub id: String,
    pub date: Date,
    pub amount: i64,
    pub memo: Option<String>,
    pub cleared: ClearingStatus,
    pub approved: bool,
    pub flag_color: Option<FlagColor>,
    pub account_id: String,
    pub payee_id: Option<String>,
    pub category_id: Option<String>,
    pub transfer_account_id: Option<String>,
    pub transfer_transaction_id: Option<String>,
    pub matched_transaction_id: Option<String>,
    pub import_id: Option<String>,
    pub deleted: bool,
    #[serde(rename = "type")]
    pub hybrid_type: HybridType,
    /// Set only for subtransactions
    pub parent_transaction_id: Option<String>,
    pub account_name: String,
    pub payee_name: Option<String>,
    pub category_name: Option<String>,
}

/// A scheduled transaction with its resolved names and splits
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scheduled {
    pub id: String,
    pub date_first: Date,
    pub date_next: Date,
    pub frequency: Frequency,
    pub amount: i64,
    pub memo: Option<String>,
    pub flag_color: Option<FlagColor>,
    pub account_id: String,
    pub payee_id: Option<String>,
    pub category_id: Option<String>,
    pub transfer_account_id: Option<String>,
    pub deleted: bool,
    pub account_name: String,
    pub payee_name: Option<String>,
    pub category_name: Option<String>,
    #[serde(default)]
    pub subtransactions: Vec<ScheduledSubtransaction>,
}

/// A scheduled transaction as embedded in a budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSummary {
    pub id: String,
    pub date_first: Date,
    pub date_next: Date,
    pub frequency: Frequency,
    pub amount: i64,
    pub memo: Option<String>,
    pub flag_color: Option<FlagColor>,
    pub account_id: String,
    pub payee_id: Option<String>,
    pub category_id: Option<String>,
    pub transfer_account_id: Option<String>,
    pub deleted: bool,
}

/// One split of a scheduled transaction
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ScheduledSubtransaction {
    pub id: String,
    pub scheduled_transaction_id: String,
    pub amount: i64,
    pub memo: Option<String>,
    pub payee_id: Option<String>,
    pub category_id: Option<String>,
    pub transfer_account_id: Option<String>,
    pub deleted: bool,
}

/// Payload for creating or updating a transaction
///
/// `id` is required when updating several transactions at once unless
/// `import_id` identifies them. Unset optional fields are not sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadTransaction {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub account_id: String,
    pub date: Date,
    pub amount: i64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub cleared: Option<ClearingStatus>,
    pub approved: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payee_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub flag_color: Option<FlagColor>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub import_id: Option<String>,
}

/// Outcome of creating or updating transactions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OperationSummary {
    #[serde(default)]
    pub transaction_ids: Vec<String>,
    /// Set when a single transaction was sent
    pub transaction: Option<Transaction>,
    /// Set when several transactions were sent
    #[serde(default)]
    pub transactions: Vec<Transaction>,
    /// Import ids skipped because they already exist
    #[serde(default)]
    pub duplicate_import_ids: Vec<String>,
    pub server_knowledge: u64,
}

/// Outcome of the bulk create endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Bulk {
    pub transaction_ids: Vec<String>,
    #[serde(default)]
    pub duplicate_import_ids: Vec<String>,
}
