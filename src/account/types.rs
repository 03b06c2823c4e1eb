//! Account data types

use serde::{Deserialize, Serialize};

/// Kind of account
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Type {
    Checking,
    Savings,
    Cash,
    CreditCard,
    LineOfCredit,
    OtherAsset,
    OtherLiability,
    PayPal,
    MerchantAccount,
    InvestmentAccount,
    Mortgage,
    /// Any type this client does not know yet
    #[serde(other)]
    Other,
}

/// A budget account
///
/// Amounts are in milliunits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Account {
    pub id: String,
    pub name: String,
    #[serde(rename = "type")]
    pub account_type: Type,
    pub on_budget: bool,
    pub closed: bool,
    pub note: Option<String>,
    pub balance: i64,
    pub cleared_balance: i64,
    pub uncleared_balance: i64,
    pub transfer_payee_id: Option<String>,
    pub deleted: bool,
}

/// Result of listing accounts
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultSnapshot {
    pub accounts: Vec<Account>,
    pub server_knowledge: u64,
}
