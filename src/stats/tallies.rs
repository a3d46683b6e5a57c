//! Tally counter summary.

use std::collections::BTreeMap;

use crate::types::{MealRecord, TallyStats, TallyTotal};

use super::percent;

/// Compute the tally bundle.
///
/// Each counter is summed across all of the user's records; zero totals are
/// dropped. Percentages are taken against the meal total (raw `meal_index`
/// summation, same denominator as the totals screen). Output order is
/// sorted counter name, which is stable across runs.
pub fn tally_totals(records: &[MealRecord]) -> TallyStats {
    let total_meals: u32 = records.iter().map(|r| r.meal_index).sum();

    let mut sums: BTreeMap<String, u32> = BTreeMap::new();
    for record in records {
        for (name, count) in record.tally_entries() {
            *sums.entry(name.to_string()).or_default() += count;
        }
    }

    let totals: Vec<TallyTotal> = sums
        .into_iter()
        .filter(|(_, total)| *total > 0)
        .map(|(name, total)| TallyTotal {
            percent: percent(total, total_meals),
            name,
            total,
        })
        .collect();

    TallyStats {
        totals,
        total_meals,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::tests_support::{meal, meal_with_tally};

    #[test]
    fn test_empty_subset() {
        let stats = tally_totals(&[]);
        assert!(stats.totals.is_empty());
        assert_eq!(stats.total_meals, 0);
    }

    #[test]
    fn test_counters_summed_and_prefix_stripped() {
        let records = vec![
            meal_with_tally("ana", "desayuno", "2026-03-02", 8, 1, "contador_cafe", 2),
            meal_with_tally("ana", "comida", "2026-03-02", 14, 1, "contador_cafe", 1),
            meal_with_tally("ana", "cena", "2026-03-02", 21, 1, "contador_yogur", 1),
        ];
        let stats = tally_totals(&records);
        assert_eq!(stats.total_meals, 3);
        let entries: Vec<(&str, u32, u32)> = stats
            .totals
            .iter()
            .map(|t| (t.name.as_str(), t.total, t.percent))
            .collect();
        assert_eq!(entries, vec![("cafe", 3, 100), ("yogur", 1, 33)]);
    }

    #[test]
    fn test_zero_counters_dropped() {
        let records = vec![meal_with_tally(
            "ana", "sopa", "2026-03-02", 13, 1, "contador_cafe", 0,
        )];
        let stats = tally_totals(&records);
        assert!(stats.totals.is_empty());
    }

    #[test]
    fn test_records_without_counters() {
        let records = vec![meal("ana", "sopa", "2026-03-02", 13, 1)];
        let stats = tally_totals(&records);
        assert!(stats.totals.is_empty());
        assert_eq!(stats.total_meals, 1);
    }
}
