use serde::{Deserialize, Serialize};

/// Offset-paginated response envelope used by every `skip`/`limit` endpoint.
///
/// Invariants held by the backend: `items.len() <= limit` and
/// `total >= items.len()`. The envelope is constructed fresh per response and
/// never cached or mutated client-side.
#[derive(Serialize, Deserialize, Debug)]
pub struct Page<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub skip: i64,
    pub limit: i64,
}

/// Page-numbered response envelope used by the public category search.
#[derive(Serialize, Deserialize)]
pub struct SearchPage<T> {
    pub items: Vec<T>,
    pub total: i64,
    pub page: i64,
    pub size: i64,
}
