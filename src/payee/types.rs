//! Payee data types

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Payee {
    pub id: String,
    pub name: String,
    /// Set when the payee is a transfer to another account
    pub transfer_account_id: Option<String>,
    pub deleted: bool,
}

/// Geographic location recorded for a payee
///
/// Coordinates are kept as the decimal strings the API sends.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Location {
    pub id: String,
    pub payee_id: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub deleted: bool,
}

/// Result of listing payees
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResultSnapshot {
    pub payees: Vec<Payee>,
    pub server_knowledge: u64,
}
