//! Category data types

use crate::api::Date;
use serde::{Deserialize, Serialize};

/// Kind of goal set on a category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Goal {
    /// Target category balance
    #[serde(rename = "TB")]
    TargetBalance,
    /// Target category balance by date
    #[serde(rename = "TBD")]
    TargetBalanceByDate,
    /// Monthly funding
    #[serde(rename = "MF")]
    MonthlyFunding,
    /// Plan your spending
    #[serde(rename = "NEED")]
    Need,
    /// Any value this client does not know yet
    #[serde(other)]
    Other,
}

/// A budget category
///
/// Amounts are in milliunits. Month-scoped reads return the amounts for
/// that month.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub category_group_id: String,
    pub name: String,
    pub hidden: bool,
    pub original_category_group_id: Option<String>,
    pub note: Option<String>,
    pub budgeted: i64,
    pub activity: i64,
    pub balance: i64,
    pub goal_type: Option<Goal>,
    pub goal_creation_month: Option<Date>,
    pub goal_target: Option<i64>,
    pub goal_target_month: Option<Date>,
    pub goal_percentage_complete: Option<u16>,
    pub deleted: bool,
}

/// A category group without its categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Group {
    pub id: String,
    pub name: String,
    pub hidden: bool,
    pub deleted: bool,
}

/// A category group with its categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GroupWithCategories {
    pub id: String,
    pub name: String,
    pub hidden: bool,
    pub deleted: bool,
    pub categories: Vec<Category>,
}

/// Result of listing categories
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultSnapshot {
    #[serde(rename = "category_groups")]
    pub group_with_categories: Vec<GroupWithCategories>,
    pub server_knowledge: u64,
}

/// Payload for updating a category within a month
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PayloadMonthCategory {
    /// Amount assigned for the month, in milliunits
    pub budgeted: i64,
}
