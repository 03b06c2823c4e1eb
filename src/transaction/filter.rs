//! Transaction list filter

use crate::api::{encode_query, Date, ToQuery};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Transaction status a list can be restricted to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Uncategorized,
    Unapproved,
}

impl Status {
    pub fn as_str(self) -> &'static str {
        match self {
            Status::Uncategorized => "uncategorized",
            Status::Unapproved => "unapproved",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Optional filters for transaction lists
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filter {
    /// Only transactions on or after this date
    pub since: Option<Date>,
    /// Only transactions with this status
    pub status: Option<Status>,
    /// Only transactions changed since this server knowledge
    pub last_knowledge_of_server: Option<u64>,
}

impl Filter {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn since(mut self, date: Date) -> Self {
        self.since = Some(date);
        self
    }

    #[must_use]
    pub fn status(mut self, status: Status) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn last_knowledge_of_server(mut self, server_knowledge: u64) -> Self {
        self.last_knowledge_of_server = Some(server_knowledge);
        self
    }
}

impl ToQuery for Filter {
    fn to_query(&self) -> String {
        encode_query(
            self.since,
            self.status.map(Status::as_str),
            self.last_knowledge_of_server,
        )
    }
}
