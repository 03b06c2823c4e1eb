//! Budget data types

use crate::account::Account;
use crate::api::Date;
use crate::category::{Category, Group};
use crate::month::Month;
use crate::payee::{Location, Payee};
use crate::transaction::{
    ScheduledSubtransaction, ScheduledSummary, Subtransaction, Summary as TransactionSummary,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Date format setting of a budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DateFormat {
    pub format: String,
}

/// Currency format setting of a budget
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CurrencyFormat {
    pub iso_code: String,
    pub example_format: String,
    pub decimal_digits: u32,
    pub decimal_separator: String,
    pub symbol_first: bool,
    pub group_separator: String,
    pub currency_symbol: String,
    pub display_symbol: bool,
}

/// Budget as returned by the budget list
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub id: String,
    pub name: String,
    pub last_modified_on: Option<DateTime<Utc>>,
    pub first_month: Option<Date>,
    pub last_month: Option<Date>,
    pub date_format: Option<DateFormat>,
    pub currency_format: Option<CurrencyFormat>,
}

/// A budget with all of its related entities
///
/// On delta requests the collections only hold entities changed since the
/// given server knowledge.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Budget {
    pub id: String,
    pub name: String,
    pub last_modified_on: Option<DateTime<Utc>>,
    pub first_month: Option<Date>,
    pub last_month: Option<Date>,
    pub date_format: Option<DateFormat>,
    pub currency_format: Option<CurrencyFormat>,

    #[serde(default)]
    pub accounts: Vec<Account>,
    #[serde(default)]
    pub payees: Vec<Payee>,
    #[serde(default)]
    pub payee_locations: Vec<Location>,
    #[serde(default)]
    pub category_groups: Vec<Group>,
    #[serde(default)]
    pub categories: Vec<Category>,
    #[serde(default)]
    pub months: Vec<Month>,
    #[serde(default)]
    pub transactions: Vec<TransactionSummary>,
    #[serde(default)]
    pub subtransactions: Vec<Subtransaction>,
    #[serde(default)]
    pub scheduled_transactions: Vec<ScheduledSummary>,
    #[serde(default)]
    pub scheduled_subtransactions: Vec<ScheduledSubtransaction>,
}

/// A budget together with the server knowledge it was read at
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Snapshot {
    pub budget: Budget,
    pub server_knowledge: u64,
}

/// Budget-wide settings
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    pub date_format: Option<DateFormat>,
    pub currency_format: Option<CurrencyFormat>,
}
