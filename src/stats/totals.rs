//! Year totals: meal count, distinct days, per-day average.

use std::collections::BTreeSet;

use crate::types::{MealRecord, TotalsStats};

use super::round1;

/// Compute the totals bundle.
///
/// `total_meals` sums raw `meal_index` values (see the module-level note on
/// the counting asymmetry); `total_days` counts distinct calendar dates over
/// all records, primary or not.
pub fn totals(records: &[MealRecord]) -> TotalsStats {
    let total_meals: u32 = records.iter().map(|r| r.meal_index).sum();
    let days: BTreeSet<_> = records.iter().map(|r| r.date).collect();
    let total_days = days.len() as u32;
    let avg_per_day = if total_days == 0 {
        0.0
    } else {
        round1(f64::from(total_meals) / f64::from(total_days))
    };
    TotalsStats {
        total_meals,
        total_days,
        avg_per_day,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::tests_support::meal;

    #[test]
    fn test_empty_subset_is_all_zero() {
        let stats = totals(&[]);
        assert_eq!(stats.total_meals, 0);
        assert_eq!(stats.total_days, 0);
        assert_eq!(stats.avg_per_day, 0.0);
    }

    #[test]
    fn test_meal_index_summation() {
        // Three occasions on one day, one with a secondary item: counts
        // 1 + 2 + 1 + 1 = 5 meals over 1 day.
        let records = vec![
            meal("ana", "sopa", "2026-03-02", 13, 1),
            meal("ana", "pan", "2026-03-02", 13, 2),
            meal("ana", "cafe", "2026-03-02", 8, 1),
            meal("ana", "cena", "2026-03-02", 21, 1),
        ];
        let stats = totals(&records);
        assert_eq!(stats.total_meals, 5);
        assert_eq!(stats.total_days, 1);
        assert_eq!(stats.avg_per_day, 5.0);
    }

    #[test]
    fn test_average_one_decimal() {
        let records = vec![
            meal("ana", "sopa", "2026-03-02", 13, 1),
            meal("ana", "cafe", "2026-03-03", 8, 1),
            meal("ana", "cena", "2026-03-04", 21, 2),
        ];
        // 4 meals over 3 days = 1.333... -> 1.3
        let stats = totals(&records);
        assert_eq!(stats.total_days, 3);
        assert_eq!(stats.avg_per_day, 1.3);
    }
}
