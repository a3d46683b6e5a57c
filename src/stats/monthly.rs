//! Monthly distribution of primary meals.

use crate::types::{MealRecord, Month, MonthlyStats};

use super::round1;

/// Compute the most-active-month bundle.
///
/// Primary records only; favorite by strict `>` maximum in calendar order
/// (earlier month wins ties). The average divides by all twelve months,
/// whether or not the user logged in each of them.
pub fn monthly(records: &[MealRecord]) -> MonthlyStats {
    let mut counts = [0u32; 12];
    for record in records.iter().filter(|r| r.is_primary()) {
        counts[record.month.index()] += 1;
    }

    let mut favorite = None;
    let mut favorite_count = 0u32;
    for month in Month::ALL {
        if counts[month.index()] > favorite_count {
            favorite_count = counts[month.index()];
            favorite = Some(month);
        }
    }

    let total: u32 = counts.iter().sum();
    let monthly_average = if total == 0 {
        0.0
    } else {
        round1(f64::from(total) / 12.0)
    };
    let lead_over_average = round1(f64::from(favorite_count) - monthly_average);

    MonthlyStats {
        counts,
        favorite,
        favorite_count,
        monthly_average,
        lead_over_average,
        total,
    }
}
