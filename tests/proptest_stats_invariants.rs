//! Property-based invariant tests for the statistics engine.
//!
//! These verify structural invariants that must hold for **any** record
//! subset:
//!
//! 1. Every computation is total: no panics, zero-valued bundles on empty
//!    input.
//! 2. Determinism: same subset → identical bundle.
//! 3. Count conservation: distributional counts sum to the number of
//!    primary records; totals sum every `meal_index`.
//! 4. Favorites agree with their count arrays; percentages stay in range.

use std::collections::BTreeMap;

use chrono::{Datelike, Duration, NaiveDate, NaiveTime};
use proptest::prelude::*;

use meal_wrapped::{stats, MealRecord, Month, Weekday};

// ── Helpers ─────────────────────────────────────────────────────────────

const DISHES: [&str; 6] = [
    "cafe con leche",
    "pizza",
    "lentejas",
    "tostada",
    "ensalada",
    "hamburguesa",
];

fn record(day_offset: u32, hour: u32, meal_index: u32, dish_idx: usize) -> MealRecord {
    let date = NaiveDate::from_ymd_opt(2026, 1, 1).unwrap() + Duration::days(i64::from(day_offset));
    let time = NaiveTime::from_hms_opt(hour, 30, 0).unwrap();
    MealRecord {
        user: "ana".to_string(),
        dish: DISHES[dish_idx % DISHES.len()].to_string(),
        date,
        date_time: date.and_time(time),
        time,
        weekday: Weekday::from(date.weekday()),
        month: Month::from_number(date.month()).unwrap(),
        meal_index,
        tallies: BTreeMap::new(),
    }
}

/// Up to forty records spread over one year, with occasional secondary
/// items (`meal_index > 1`).
fn records() -> impl Strategy<Value = Vec<MealRecord>> {
    prop::collection::vec((0u32..365, 0u32..24, 1u32..4, 0usize..6), 0..40)
        .prop_map(|raw| {
            raw.into_iter()
                .map(|(day, hour, idx, dish)| record(day, hour, idx, dish))
                .collect()
        })
}

fn primary_count(records: &[MealRecord]) -> u32 {
    records.iter().filter(|r| r.is_primary()).count() as u32
}

// ── Properties ──────────────────────────────────────────────────────────

proptest! {
    #[test]
    fn prop_statistics_are_deterministic(records in records()) {
        prop_assert_eq!(stats::totals(&records), stats::totals(&records));
        prop_assert_eq!(stats::first_last(&records), stats::first_last(&records));
        prop_assert_eq!(
            stats::weekday_distribution(&records),
            stats::weekday_distribution(&records)
        );
        prop_assert_eq!(stats::top_dishes(&records), stats::top_dishes(&records));
        prop_assert_eq!(stats::tally_totals(&records), stats::tally_totals(&records));
        prop_assert_eq!(stats::time_of_day(&records), stats::time_of_day(&records));
        prop_assert_eq!(stats::monthly(&records), stats::monthly(&records));
    }

    #[test]
    fn prop_distributions_conserve_primary_counts(records in records()) {
        let primaries = primary_count(&records);

        let weekday = stats::weekday_distribution(&records);
        prop_assert_eq!(weekday.counts.iter().sum::<u32>(), primaries);

        let buckets = stats::time_of_day(&records);
        prop_assert_eq!(buckets.counts.iter().sum::<u32>(), primaries);
        prop_assert_eq!(buckets.total, primaries);

        let months = stats::monthly(&records);
        prop_assert_eq!(months.counts.iter().sum::<u32>(), primaries);
        prop_assert_eq!(months.total, primaries);
    }

    #[test]
    fn prop_totals_sum_every_meal_index(records in records()) {
        let totals = stats::totals(&records);
        prop_assert_eq!(
            totals.total_meals,
            records.iter().map(|r| r.meal_index).sum::<u32>()
        );
        prop_assert!(totals.total_days as usize <= records.len());
        if records.is_empty() {
            prop_assert_eq!(totals.avg_per_day, 0.0);
        } else {
            prop_assert!(totals.avg_per_day >= 1.0);
        }
    }

    #[test]
    fn prop_favorites_agree_with_their_counts(records in records()) {
        let weekday = stats::weekday_distribution(&records);
        match weekday.favorite {
            Some(day) => {
                prop_assert_eq!(weekday.favorite_count, weekday.counts[day.index()]);
                prop_assert_eq!(
                    weekday.favorite_count,
                    *weekday.counts.iter().max().unwrap()
                );
            }
            None => prop_assert_eq!(primary_count(&records), 0),
        }

        let buckets = stats::time_of_day(&records);
        if let Some(bucket) = buckets.favorite {
            prop_assert_eq!(buckets.favorite_count, buckets.counts[bucket.index()]);
            prop_assert!(buckets.percent <= 100);
        }

        let months = stats::monthly(&records);
        if let Some(month) = months.favorite {
            prop_assert_eq!(months.favorite_count, months.counts[month.index()]);
        }
    }

    #[test]
    fn prop_ranking_is_bounded_and_descending(records in records()) {
        let top = stats::top_dishes(&records);
        prop_assert!(top.ranking.len() <= 5);
        prop_assert_eq!(top.total_records, records.len() as u32);
        for pair in top.ranking.windows(2) {
            prop_assert!(pair[0].count >= pair[1].count);
        }
        for entry in &top.ranking {
            prop_assert!(entry.percent <= 100);
            prop_assert!(entry.count >= 1);
        }
    }
}

// ── Edge cases ──────────────────────────────────────────────────────────

#[test]
fn test_empty_subset_degrades_to_zeros() {
    let records: Vec<MealRecord> = Vec::new();

    let totals = stats::totals(&records);
    assert_eq!(totals.total_meals, 0);
    assert_eq!(totals.total_days, 0);
    assert_eq!(totals.avg_per_day, 0.0);

    let first_last = stats::first_last(&records);
    assert_eq!(first_last.first, None);
    assert_eq!(first_last.last, None);
    assert!(!first_last.same_dish);

    let weekday = stats::weekday_distribution(&records);
    assert_eq!(weekday.favorite, None);
    assert_eq!(weekday.weekly_average, 0.0);

    assert!(stats::top_dishes(&records).ranking.is_empty());
    assert!(stats::tally_totals(&records).totals.is_empty());
    assert_eq!(stats::time_of_day(&records).favorite, None);
    assert_eq!(stats::monthly(&records).favorite, None);
}
