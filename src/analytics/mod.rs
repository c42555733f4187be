//! Filter and aggregation stage.
//!
//! Every function here is pure: it borrows the loaded tables, never mutates
//! them, and returns the same output for the same selection. Re-running a
//! section with an unchanged selection therefore reproduces the previous
//! render exactly.

use crate::datasets::{
    AggregatedTransactionRow, AggregatedUserRow, MapTransactionHoverRow, TopTransactionRow,
};

/// Bound on table/chart size for the ranked views.
pub const TOP_N: usize = 10;

/// Grouped transaction totals for one entity.
#[derive(Debug, Clone, PartialEq)]
pub struct EntityTotals {
    pub entity_name: String,
    pub count: u64,
    pub amount: f64,
}

/// Projected map row for one region in the selected period.
#[derive(Debug, Clone, PartialEq)]
pub struct RegionTotals {
    pub state_name: String,
    pub amount: f64,
    pub count: u64,
}

fn distinct_sorted<T: Ord + Copy>(values: impl Iterator<Item = T>) -> Vec<T> {
    let mut out: Vec<T> = values.collect();
    out.sort_unstable();
    out.dedup();
    out
}

/// Distinct years present in the aggregated transaction table, ascending.
pub fn transaction_years(rows: &[AggregatedTransactionRow]) -> Vec<i32> {
    distinct_sorted(rows.iter().map(|row| row.year))
}

/// Distinct years present in the aggregated user table, ascending.
pub fn user_years(rows: &[AggregatedUserRow]) -> Vec<i32> {
    distinct_sorted(rows.iter().map(|row| row.year))
}

/// Distinct years present in the map hover table, ascending.
pub fn map_years(rows: &[MapTransactionHoverRow]) -> Vec<i32> {
    distinct_sorted(rows.iter().map(|row| row.year))
}

/// Distinct quarters present in the map hover table, ascending. The quarter
/// picker is independent of the chosen year, so this scans the whole table.
pub fn map_quarters(rows: &[MapTransactionHoverRow]) -> Vec<u8> {
    distinct_sorted(rows.iter().map(|row| row.quarter))
}

/// All aggregated transaction rows for one year, in table order. Chart-ready:
/// the table is already summarized per (quarter, type).
pub fn transactions_for_year(
    rows: &[AggregatedTransactionRow],
    year: i32,
) -> Vec<&AggregatedTransactionRow> {
    rows.iter().filter(|row| row.year == year).collect()
}

/// All aggregated user rows for one year, in table order.
pub fn users_for_year(rows: &[AggregatedUserRow], year: i32) -> Vec<&AggregatedUserRow> {
    rows.iter().filter(|row| row.year == year).collect()
}

/// Transaction types in order of first appearance within the given rows.
pub fn transaction_types(rows: &[&AggregatedTransactionRow]) -> Vec<String> {
    let mut types: Vec<String> = Vec::new();
    for row in rows {
        if !types.iter().any(|t| *t == row.transaction_type) {
            types.push(row.transaction_type.clone());
        }
    }
    types
}

/// Device brands in order of first appearance within the given rows.
pub fn brands(rows: &[&AggregatedUserRow]) -> Vec<String> {
    let mut out: Vec<String> = Vec::new();
    for row in rows {
        if !out.iter().any(|b| *b == row.brand) {
            out.push(row.brand.clone());
        }
    }
    out
}

/// Group the top-transaction table by entity, summing count and amount per
/// group, ranked descending by summed amount and truncated to [`TOP_N`].
/// Groups keep first-appearance order, and the sort is stable, so ties stay
/// in input order.
pub fn top_entities(rows: &[TopTransactionRow]) -> Vec<EntityTotals> {
    let mut totals: Vec<EntityTotals> = Vec::new();

    for row in rows {
        match totals
            .iter_mut()
            .find(|entry| entry.entity_name == row.entity_name)
        {
            Some(entry) => {
                entry.count += row.count;
                entry.amount += row.amount;
            }
            None => totals.push(EntityTotals {
                entity_name: row.entity_name.clone(),
                count: row.count,
                amount: row.amount,
            }),
        }
    }

    totals.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal));
    totals.truncate(TOP_N);
    totals
}

/// Regions for one (year, quarter) pair, projected to {state, amount, count},
/// ranked descending by amount and truncated to [`TOP_N`].
pub fn top_regions(
    rows: &[MapTransactionHoverRow],
    year: i32,
    quarter: u8,
) -> Vec<RegionTotals> {
    let mut regions: Vec<RegionTotals> = rows
        .iter()
        .filter(|row| row.year == year && row.quarter == quarter)
        .map(|row| RegionTotals {
            state_name: row.state_name.clone(),
            amount: row.amount,
            count: row.count,
        })
        .collect();

    regions.sort_by(|a, b| b.amount.partial_cmp(&a.amount).unwrap_or(std::cmp::Ordering::Equal));
    regions.truncate(TOP_N);
    regions
}

#[cfg(test)]
mod tests {
    use super::*;

    fn txn(year: i32, quarter: u8, kind: &str, amount: f64) -> AggregatedTransactionRow {
        AggregatedTransactionRow {
            year,
            quarter,
            transaction_type: kind.to_string(),
            transaction_amount: amount,
        }
    }

    fn top(entity: &str, count: u64, amount: f64) -> TopTransactionRow {
        TopTransactionRow {
            entity_name: entity.to_string(),
            count,
            amount,
        }
    }

    fn hover(year: i32, quarter: u8, state: &str, amount: f64, count: u64) -> MapTransactionHoverRow {
        MapTransactionHoverRow {
            year,
            quarter,
            state_name: state.to_string(),
            amount,
            count,
        }
    }

    #[test]
    fn year_filter_is_an_exact_subset() {
        let rows = vec![
            txn(2022, 4, "Recharge & bill payments", 40.0),
            txn(2023, 1, "Peer-to-peer payments", 100.0),
            txn(2023, 1, "Merchant payments", 55.0),
            txn(2024, 1, "Peer-to-peer payments", 130.0),
            txn(2023, 2, "Peer-to-peer payments", 110.0),
        ];

        let filtered = transactions_for_year(&rows, 2023);

        assert_eq!(filtered.len(), 3);
        assert!(filtered.iter().all(|row| row.year == 2023));
        assert_eq!(filtered[0], &rows[1]);
        assert_eq!(filtered[1], &rows[2]);
        assert_eq!(filtered[2], &rows[4]);
    }

    #[test]
    fn years_are_distinct_and_ascending() {
        let rows = vec![
            txn(2024, 1, "Recharge", 1.0),
            txn(2022, 1, "Recharge", 1.0),
            txn(2024, 2, "Recharge", 1.0),
            txn(2023, 1, "Recharge", 1.0),
        ];

        assert_eq!(transaction_years(&rows), vec![2022, 2023, 2024]);
        assert!(transaction_years(&[]).is_empty());
    }

    #[test]
    fn entity_grouping_sums_and_ranks_by_amount() {
        let rows = vec![
            top("A", 2, 60.0),
            top("B", 1, 300.0),
            top("A", 3, 40.0),
            top("C", 1, 300.0),
        ];

        let ranked = top_entities(&rows);

        assert_eq!(ranked.len(), 3);
        // B and C tie on 300; the stable sort keeps B (seen first) ahead.
        assert_eq!(ranked[0].entity_name, "B");
        assert_eq!(ranked[1].entity_name, "C");
        assert_eq!(ranked[2].entity_name, "A");
        assert_eq!(ranked[2].count, 5);
        assert_eq!(ranked[2].amount, 100.0);
    }

    #[test]
    fn entity_ranking_is_capped_at_ten_groups() {
        let rows: Vec<TopTransactionRow> = (0..15)
            .map(|i| top(&format!("entity-{i}"), 1, i as f64))
            .collect();

        let ranked = top_entities(&rows);

        assert_eq!(ranked.len(), TOP_N);
        assert_eq!(ranked[0].entity_name, "entity-14");
    }

    #[test]
    fn region_view_matches_the_selected_period() {
        let rows = vec![
            hover(2023, 2, "Karnataka", 900.0, 40),
            hover(2023, 1, "Karnataka", 700.0, 30),
            hover(2023, 2, "Maharashtra", 1200.0, 70),
            hover(2022, 2, "Maharashtra", 600.0, 25),
            hover(2023, 2, "Telangana", 450.0, 20),
        ];

        let regions = top_regions(&rows, 2023, 2);

        assert_eq!(regions.len(), 3);
        assert!(regions.windows(2).all(|w| w[0].amount >= w[1].amount));
        assert_eq!(regions[0].state_name, "Maharashtra");
        assert_eq!(regions[2].state_name, "Telangana");
    }

    #[test]
    fn region_view_is_capped_at_ten_rows() {
        let rows: Vec<MapTransactionHoverRow> = (0..14)
            .map(|i| hover(2023, 2, &format!("state-{i}"), i as f64, 1))
            .collect();

        let regions = top_regions(&rows, 2023, 2);

        assert_eq!(regions.len(), TOP_N);
        assert!(regions.windows(2).all(|w| w[0].amount >= w[1].amount));
    }

    #[test]
    fn map_pickers_are_independent_of_each_other() {
        let rows = vec![
            hover(2022, 4, "Karnataka", 1.0, 1),
            hover(2023, 1, "Karnataka", 2.0, 1),
        ];

        // Quarter 4 only exists under 2022, but stays offered alongside 2023.
        assert_eq!(map_years(&rows), vec![2022, 2023]);
        assert_eq!(map_quarters(&rows), vec![1, 4]);
        assert!(top_regions(&rows, 2023, 4).is_empty());
    }

    #[test]
    fn repeated_selections_reproduce_identical_output() {
        let rows = vec![
            top("A", 2, 60.0),
            top("B", 1, 300.0),
            top("C", 1, 300.0),
        ];

        assert_eq!(top_entities(&rows), top_entities(&rows));
    }

    #[test]
    fn series_keys_keep_first_appearance_order() {
        let rows = vec![
            txn(2023, 1, "Merchant payments", 1.0),
            txn(2023, 1, "Peer-to-peer payments", 2.0),
            txn(2023, 2, "Merchant payments", 3.0),
        ];
        let filtered = transactions_for_year(&rows, 2023);

        assert_eq!(
            transaction_types(&filtered),
            vec!["Merchant payments", "Peer-to-peer payments"]
        );
    }
}
