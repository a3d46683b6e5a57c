//! Time-of-day bucket distribution of primary meals.

use crate::types::{MealRecord, TimeBucket, TimeOfDayStats};

use super::percent;

/// Compute the preferred-time bundle.
///
/// Primary records are bucketed by the hour of their timestamp; the
/// favorite bucket is the strict `>` maximum in `TimeBucket::ALL` order
/// (earlier bucket wins ties).
pub fn time_of_day(records: &[MealRecord]) -> TimeOfDayStats {
    let mut counts = [0u32; 4];
    for record in records.iter().filter(|r| r.is_primary()) {
        counts[record.bucket().index()] += 1;
    }

    let mut favorite = None;
    let mut favorite_count = 0u32;
    for bucket in TimeBucket::ALL {
        if counts[bucket.index()] > favorite_count {
            favorite_count = counts[bucket.index()];
            favorite = Some(bucket);
        }
    }

    let total: u32 = counts.iter().sum();
    TimeOfDayStats {
        counts,
        favorite,
        favorite_count,
        percent: percent(favorite_count, total),
        total,
    }
}
