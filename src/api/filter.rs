//! Query string encoding for list filters
//!
//! Keys are always emitted in the order `since_date`, `type`,
//! `last_knowledge_of_server`, and only when present.

use super::Date;

/// Conversion of a filter into an HTTP query string (without the leading `?`)
pub trait ToQuery {
    fn to_query(&self) -> String;
}

/// Incremental-sync filter shared by most list endpoints
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Filter {
    /// Only entities changed since this server knowledge are returned
    pub last_knowledge_of_server: Option<u64>,
}

impl Filter {
    /// Filter for changes after the given server knowledge
    pub fn since_knowledge(server_knowledge: u64) -> Self {
        Self {
            last_knowledge_of_server: Some(server_knowledge),
        }
    }
}

impl ToQuery for Filter {
    fn to_query(&self) -> String {
        encode_query(None, None, self.last_knowledge_of_server)
    }
}

/// Encode the known filter keys in their fixed order
///
/// A zero `since` date is treated as absent.
pub(crate) fn encode_query(
    since: Option<Date>,
    kind: Option<&str>,
    last_knowledge_of_server: Option<u64>,
) -> String {
    let mut pairs = Vec::with_capacity(3);
    if let Some(since) = since.filter(|d| !d.is_zero()) {
        pairs.push(format!("since_date={since}"));
    }
    if let Some(kind) = kind {
        pairs.push(format!("type={kind}"));
    }
    if let Some(knowledge) = last_knowledge_of_server {
        pairs.push(format!("last_knowledge_of_server={knowledge}"));
    }
    pairs.join("&")
}

/// Append the filter's query to `path` when it encodes to something
pub(crate) fn with_query<F: ToQuery + ?Sized>(path: String, filter: Option<&F>) -> String {
    match filter.map(ToQuery::to_query) {
        Some(query) if !query.is_empty() => format!("{path}?{query}"),
        _ => path,
    }
}
