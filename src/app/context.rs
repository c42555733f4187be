use std::path::Path;

use crate::datasets::{
    self, load_rows, AggregatedTransactionRow, AggregatedUserRow, MapTransactionHoverRow,
    MapUserHoverRow, TopTransactionRow, TopUserRow,
};
use crate::ui::Section;

/// Read-only application context: all six tables loaded once at startup and
/// the warnings accumulated while loading them. Screens borrow it, nothing
/// mutates it afterwards.
pub struct AppContext {
    aggregated_transactions: Vec<AggregatedTransactionRow>,
    aggregated_users: Vec<AggregatedUserRow>,
    top_transactions: Vec<TopTransactionRow>,
    top_users: Vec<TopUserRow>,
    map_user_hover: Vec<MapUserHoverRow>,
    map_transaction_hover: Vec<MapTransactionHoverRow>,
    warnings: Vec<String>,
}

impl AppContext {
    /// Load every dataset from the data directory. Missing or malformed
    /// files leave their table empty and add a warning; loading never fails
    /// the process.
    pub fn load(data_dir: &Path) -> Self {
        let mut warnings = Vec::new();

        let aggregated_transactions = load_rows(
            &data_dir.join(datasets::AGGREGATED_TRANSACTION_FILE),
            &mut warnings,
        );
        let aggregated_users = load_rows(
            &data_dir.join(datasets::AGGREGATED_USER_FILE),
            &mut warnings,
        );
        let top_transactions =
            load_rows(&data_dir.join(datasets::TOP_TRANSACTION_FILE), &mut warnings);
        let top_users = load_rows(&data_dir.join(datasets::TOP_USER_FILE), &mut warnings);
        let map_user_hover =
            load_rows(&data_dir.join(datasets::MAP_USER_HOVER_FILE), &mut warnings);
        let map_transaction_hover = load_rows(
            &data_dir.join(datasets::MAP_TRANSACTION_HOVER_FILE),
            &mut warnings,
        );

        Self {
            aggregated_transactions,
            aggregated_users,
            top_transactions,
            top_users,
            map_user_hover,
            map_transaction_hover,
            warnings,
        }
    }

    pub fn aggregated_transactions(&self) -> &[AggregatedTransactionRow] {
        &self.aggregated_transactions
    }

    pub fn aggregated_users(&self) -> &[AggregatedUserRow] {
        &self.aggregated_users
    }

    pub fn top_transactions(&self) -> &[TopTransactionRow] {
        &self.top_transactions
    }

    /// Reserved input, not consumed by any section yet.
    pub fn top_users(&self) -> &[TopUserRow] {
        &self.top_users
    }

    /// Reserved input, not consumed by any section yet.
    pub fn map_user_hover(&self) -> &[MapUserHoverRow] {
        &self.map_user_hover
    }

    pub fn map_transaction_hover(&self) -> &[MapTransactionHoverRow] {
        &self.map_transaction_hover
    }

    pub fn warnings(&self) -> &[String] {
        &self.warnings
    }

    /// Whether the table backing a section has any rows. Sections whose
    /// table is empty fall through to the "no data" notice.
    pub fn section_has_data(&self, section: Section) -> bool {
        match section {
            Section::AggregatedTransactions => !self.aggregated_transactions.is_empty(),
            Section::TopTransactions => !self.top_transactions.is_empty(),
            Section::MapOverview => !self.map_transaction_hover.is_empty(),
            Section::UserInsights => !self.aggregated_users.is_empty(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use std::path::PathBuf;

    fn scratch_dir(name: &str) -> PathBuf {
        let dir = std::env::temp_dir().join(format!(
            "txn_insights_ctx_{}_{}",
            std::process::id(),
            name
        ));
        fs::create_dir_all(&dir).unwrap();
        dir
    }

    #[test]
    fn empty_data_dir_warns_once_per_dataset() {
        let dir = scratch_dir("empty");
        let ctx = AppContext::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        assert_eq!(ctx.warnings().len(), 6);
        for section in Section::ALL {
            assert!(!ctx.section_has_data(section));
        }
    }

    #[test]
    fn sections_track_their_own_backing_table() {
        let dir = scratch_dir("partial");
        fs::write(
            dir.join(datasets::TOP_TRANSACTION_FILE),
            "entity_name,count,amount\nKarnataka,10,500.0\n",
        )
        .unwrap();

        let ctx = AppContext::load(&dir);
        fs::remove_dir_all(&dir).unwrap();

        assert!(ctx.section_has_data(Section::TopTransactions));
        assert!(!ctx.section_has_data(Section::AggregatedTransactions));
        assert!(!ctx.section_has_data(Section::MapOverview));
        assert!(!ctx.section_has_data(Section::UserInsights));
        assert_eq!(ctx.warnings().len(), 5);
    }
}
