use serde::Deserialize;

/// Per-quarter transaction totals broken down by payment type.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AggregatedTransactionRow {
    pub year: i32,
    pub quarter: u8,
    pub transaction_type: String,
    pub transaction_amount: f64,
}

/// Per-quarter registered-user counts broken down by device brand.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct AggregatedUserRow {
    pub year: i32,
    pub quarter: u8,
    pub brand: String,
    #[serde(rename = "registeredUsers")]
    pub registered_users: u64,
}

/// Cumulative transaction totals per entity (state/district), possibly
/// spread over several rows per entity.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopTransactionRow {
    pub entity_name: String,
    pub count: u64,
    pub amount: f64,
}

/// Registered-user totals per entity. Loaded for completeness; no section
/// consumes it yet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TopUserRow {
    pub entity_name: String,
    #[serde(rename = "registeredUsers")]
    pub registered_users: u64,
}

/// Per-region per-quarter user counts for map hover detail. Loaded for
/// completeness; no section consumes it yet.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapUserHoverRow {
    pub year: i32,
    pub quarter: u8,
    pub state_name: String,
    #[serde(rename = "registeredUsers")]
    pub registered_users: u64,
}

/// Per-region per-quarter transaction totals for the map overview.
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct MapTransactionHoverRow {
    pub year: i32,
    pub quarter: u8,
    pub state_name: String,
    pub amount: f64,
    pub count: u64,
}
