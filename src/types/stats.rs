//! Per-screen statistic bundles.
//!
//! Every bundle is a plain immutable value computed by the statistics
//! engine: no side effects, no rendering, no timing. Builders in
//! [`crate::screens`] turn these into reveal sequences.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use super::record::{Month, TimeBucket, Weekday};

/// Meal totals for the whole year (Totals screen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TotalsStats {
    /// Sum of `meal_index` over all records. This deliberately counts a
    /// three-item occasion as 1+2+3, matching the dataset's own convention
    /// for "total meals"; distributional statistics count occasions instead.
    pub total_meals: u32,
    /// Number of distinct calendar dates with at least one record.
    pub total_days: u32,
    /// `total_meals / total_days`, one decimal; 0.0 when no days.
    pub avg_per_day: f64,
}

/// A single meal pinned in time (first or last of the year).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MealMoment {
    /// Dish label.
    pub dish: String,
    /// Full timestamp of the record.
    pub date_time: NaiveDateTime,
    /// Hour of day (0..24), for time-based commentary.
    pub hour: u32,
}

/// Earliest and latest primary meals of the year (FirstLast screen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FirstLastStats {
    /// Earliest primary record, if any primary record exists.
    pub first: Option<MealMoment>,
    /// Latest primary record, omitted when it would be the same record
    /// as `first`.
    pub last: Option<MealMoment>,
    /// Whether first and last share the exact same dish string.
    pub same_dish: bool,
}

/// Day-of-week distribution of primary meals (FavoriteDay screen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WeekdayStats {
    /// Primary-meal count per weekday, indexed by `Weekday::ALL` order.
    pub counts: [u32; 7],
    /// Weekday with the highest count; `None` when all counts are zero.
    /// Ties resolve to the earlier weekday.
    pub favorite: Option<Weekday>,
    /// Count on the favorite day (0 when no favorite).
    pub favorite_count: u32,
    /// Total primary meals divided by 7, one decimal.
    pub weekly_average: f64,
    /// `favorite_count - weekly_average`.
    pub lead_over_average: f64,
}

/// One entry of the dish ranking.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DishCount {
    /// Dish label.
    pub dish: String,
    /// Number of records with this dish (all records, not just primary).
    pub count: u32,
    /// `round(count / total_records * 100)`.
    pub percent: u32,
}

/// Top-5 dish ranking (TopDishes screen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TopDishesStats {
    /// Up to five dishes by descending count; equal counts keep first-seen
    /// dataset order.
    pub ranking: Vec<DishCount>,
    /// Total record count the percentages are taken against.
    pub total_records: u32,
    /// How many records the #1 dish leads the #2 by (0 with fewer than two
    /// entries).
    pub lead_over_runner_up: u32,
}

/// Summed tally counter for one tagged category.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyTotal {
    /// Category name with the wire prefix stripped (e.g. `cafe`).
    pub name: String,
    /// Sum of the counter across all of the user's records.
    pub total: u32,
    /// `round(total / total_meals * 100)`.
    pub percent: u32,
}

/// Tally counter summary (Tallies screen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TallyStats {
    /// Non-zero counter totals in sorted name order.
    pub totals: Vec<TallyTotal>,
    /// Meal total (meal_index sum) the percentages are taken against.
    pub total_meals: u32,
}

/// Time-of-day distribution of primary meals (TimeOfDay screen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TimeOfDayStats {
    /// Primary-meal count per bucket, indexed by `TimeBucket::ALL` order.
    pub counts: [u32; 4],
    /// Bucket with the highest count; ties resolve to the earlier bucket.
    pub favorite: Option<TimeBucket>,
    /// Count in the favorite bucket.
    pub favorite_count: u32,
    /// `round(favorite_count / total * 100)`.
    pub percent: u32,
    /// Total primary meals across all buckets.
    pub total: u32,
}

/// Monthly distribution of primary meals (ActiveMonth screen).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MonthlyStats {
    /// Primary-meal count per month, indexed by `Month::ALL` order.
    pub counts: [u32; 12],
    /// Month with the highest count; ties resolve to the earlier month.
    pub favorite: Option<Month>,
    /// Count in the favorite month.
    pub favorite_count: u32,
    /// Total primary meals divided by 12, one decimal.
    pub monthly_average: f64,
    /// `favorite_count - monthly_average`.
    pub lead_over_average: f64,
    /// Total primary meals across the year.
    pub total: u32,
}

/// Union of all per-screen bundles, as produced by a screen's `compute`
/// entry. Screens without statistics (selection, welcome, farewell) use
/// `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScreenStats {
    /// No statistics for this screen.
    None,
    /// Totals screen bundle.
    Totals(TotalsStats),
    /// FirstLast screen bundle.
    FirstLast(FirstLastStats),
    /// FavoriteDay screen bundle.
    Weekday(WeekdayStats),
    /// TopDishes screen bundle.
    TopDishes(TopDishesStats),
    /// Tallies screen bundle.
    Tallies(TallyStats),
    /// TimeOfDay screen bundle.
    TimeOfDay(TimeOfDayStats),
    /// ActiveMonth screen bundle.
    Monthly(MonthlyStats),
}
