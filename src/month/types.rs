//! Month data types

use crate::api::Date;
use crate::category::Category;
use serde::{Deserialize, Serialize};

/// A budget month without its categories
///
/// Amounts are in milliunits.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Summary {
    pub month: Date,
    pub note: Option<String>,
    #[serde(default)]
    pub income: i64,
    #[serde(default)]
    pub budgeted: i64,
    #[serde(default)]
    pub activity: i64,
    pub to_be_budgeted: i64,
    pub age_of_money: Option<i64>,
    #[serde(default)]
    pub deleted: bool,
}

/// A budget month with the amounts of every category
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Month {
    #[serde(flatten)]
    pub summary: Summary,
    #[serde(default)]
    pub categories: Vec<Category>,
}

/// Result of listing months
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultSnapshot {
    pub months: Vec<Summary>,
    pub server_knowledge: u64,
}
