//! Statistics engine: pure, total functions from a record subset to one
//! bundle per screen.
//!
//! ## Contract
//!
//! - No side effects, no rendering, no timing. Calling a function twice on
//!   the same subset yields identical output.
//! - Never errors: an empty subset degrades to zeros and `None` favorites.
//! - Distributional statistics (weekday, time bucket, month) count only
//!   primary records (`meal_index == 1`); the meal total sums raw
//!   `meal_index` values instead. The asymmetry is the dataset's own
//!   convention and is kept as-is.
//! - "Favorite" selections use a strict `>` running maximum over a fixed
//!   candidate order, so the first-seen candidate keeps the lead on ties.

pub mod dishes;
pub mod first_last;
pub mod monthly;
pub mod tallies;
pub mod time_of_day;
pub mod totals;
pub mod weekday;

pub use dishes::top_dishes;
pub use first_last::first_last;
pub use monthly::monthly;
pub use tallies::tally_totals;
pub use time_of_day::time_of_day;
pub use totals::totals;
pub use weekday::weekday_distribution;

/// Round to one decimal place (averages are displayed with one decimal).
pub fn round1(value: f64) -> f64 {
    (value * 10.0).round() / 10.0
}

/// Whole-number percentage of `part` in `whole`; 0 when `whole` is 0.
pub fn percent(part: u32, whole: u32) -> u32 {
    if whole == 0 {
        0
    } else {
        ((part as f64 / whole as f64) * 100.0).round() as u32
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_round1() {
        assert_eq!(round1(7.0 / 3.0), 2.3);
        assert_eq!(round1(2.36), 2.4);
        assert_eq!(round1(5.0 / 2.0), 2.5);
        assert_eq!(round1(0.0), 0.0);
    }

    #[test]
    fn test_percent_zero_denominator() {
        assert_eq!(percent(5, 0), 0);
        assert_eq!(percent(0, 0), 0);
    }

    #[test]
    fn test_percent_rounds() {
        assert_eq!(percent(1, 3), 33);
        assert_eq!(percent(2, 3), 67);
        assert_eq!(percent(4, 10), 40);
        assert_eq!(percent(10, 10), 100);
    }
}
