pub mod loader;
pub mod rows;

pub use loader::load_rows;
pub use rows::{
    AggregatedTransactionRow, AggregatedUserRow, MapTransactionHoverRow, MapUserHoverRow,
    TopTransactionRow, TopUserRow,
};

/// File names expected under the data directory, one per dataset.
pub const AGGREGATED_TRANSACTION_FILE: &str = "aggregated_transaction.csv";
pub const AGGREGATED_USER_FILE: &str = "aggregated_user.csv";
pub const TOP_TRANSACTION_FILE: &str = "top_transaction.csv";
pub const TOP_USER_FILE: &str = "top_user.csv";
pub const MAP_USER_HOVER_FILE: &str = "map_user_hover.csv";
pub const MAP_TRANSACTION_HOVER_FILE: &str = "map_transaction_hover.csv";
