/// The four mutually exclusive display sections. A closed set: dispatch is
/// by variant, and anything outside it cannot be selected at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
    AggregatedTransactions,
    TopTransactions,
    MapOverview,
    UserInsights,
}

impl Section {
    pub const ALL: [Section; 4] = [
        Section::AggregatedTransactions,
        Section::TopTransactions,
        Section::MapOverview,
        Section::UserInsights,
    ];

    /// Human readable label used by headers and logs.
    pub fn title(self) -> &'static str {
        match self {
            Section::AggregatedTransactions => "Aggregated Transactions",
            Section::TopTransactions => "Top Transactions",
            Section::MapOverview => "Map Overview",
            Section::UserInsights => "User Insights",
        }
    }

    /// One-line description shown next to the menu entry.
    pub fn description(self) -> &'static str {
        match self {
            Section::AggregatedTransactions => "Quarterly amounts by transaction type",
            Section::TopTransactions => "Top 10 entities by total amount",
            Section::MapOverview => "Per-state totals for a year and quarter",
            Section::UserInsights => "Registered user growth by brand",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_section_is_listed_once() {
        assert_eq!(Section::ALL.len(), 4);
        for (i, a) in Section::ALL.iter().enumerate() {
            for b in &Section::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
