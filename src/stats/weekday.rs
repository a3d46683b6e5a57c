//! Day-of-week distribution of primary meals.

use crate::types::{MealRecord, Weekday, WeekdayStats};

use super::round1;

/// Compute the favorite-day bundle.
///
/// Only primary records count (one per meal occasion). The favorite is
/// selected with a strict `>` running maximum in `Weekday::ALL` order, so
/// the earliest weekday keeps the lead on equal counts.
pub fn weekday_distribution(records: &[MealRecord]) -> WeekdayStats {
    let mut counts = [0u32; 7];
    for record in records.iter().filter(|r| r.is_primary()) {
        counts[record.weekday.index()] += 1;
    }

    let mut favorite = None;
    let mut favorite_count = 0u32;
    for day in Weekday::ALL {
        if counts[day.index()] > favorite_count {
            favorite_count = counts[day.index()];
            favorite = Some(day);
        }
    }

    let total: u32 = counts.iter().sum();
    let weekly_average = if total == 0 {
        0.0
    } else {
        round1(f64::from(total) / 7.0)
    };
    let lead_over_average = round1(f64::from(favorite_count) - weekly_average);

    WeekdayStats {
        counts,
        favorite,
        favorite_count,
        weekly_average,
        lead_over_average,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::tests_support::meal;

    #[test]
    fn test_empty_subset_has_no_favorite() {
        let stats = weekday_distribution(&[]);
        assert_eq!(stats.counts, [0; 7]);
        assert!(stats.favorite.is_none());
        assert_eq!(stats.weekly_average, 0.0);
    }

    #[test]
    fn test_only_primary_records_count() {
        // 2026-03-02 is a Monday; three occasions plus one secondary item.
        let records = vec![
            meal("ana", "desayuno", "2026-03-02", 8, 1),
            meal("ana", "pan", "2026-03-02", 13, 2),
            meal("ana", "comida", "2026-03-02", 14, 1),
            meal("ana", "cena", "2026-03-02", 21, 1),
        ];
        let stats = weekday_distribution(&records);
        assert_eq!(stats.favorite, Some(Weekday::Monday));
        assert_eq!(stats.favorite_count, 3);
        assert_eq!(stats.counts.iter().sum::<u32>(), 3);
    }

    #[test]
    fn test_tie_goes_to_earlier_weekday() {
        // 2026-03-03 Tuesday, 2026-03-05 Thursday: one primary meal each.
        let records = vec![
            meal("ana", "a", "2026-03-05", 13, 1),
            meal("ana", "b", "2026-03-03", 13, 1),
        ];
        let stats = weekday_distribution(&records);
        assert_eq!(stats.favorite, Some(Weekday::Tuesday));
    }

    #[test]
    fn test_weekly_average_one_decimal() {
        // 10 primary meals over the week -> 10/7 = 1.428... -> 1.4
        let dates = [
            "2026-03-02", "2026-03-03", "2026-03-04", "2026-03-05", "2026-03-06",
            "2026-03-07", "2026-03-08", "2026-03-09", "2026-03-10", "2026-03-11",
        ];
        let records: Vec<_> = dates
            .iter()
            .map(|d| meal("ana", "comida", d, 14, 1))
            .collect();
        let stats = weekday_distribution(&records);
        assert_eq!(stats.weekly_average, 1.4);
        assert_eq!(stats.lead_over_average, 0.6);
    }
}
