//! First and last primary meals of the year.

use crate::types::{FirstLastStats, MealMoment, MealRecord};

/// Compute the first/last bundle.
///
/// Records are ordered by `date_time` ascending; the earliest and latest
/// primary records win. When no primary record exists both moments are
/// omitted; when first and last are the same record, `last` is omitted so
/// the screen does not repeat itself.
///
/// Dish equality is exact string comparison, no normalization.
pub fn first_last(records: &[MealRecord]) -> FirstLastStats {
    let mut primaries: Vec<&MealRecord> = records.iter().filter(|r| r.is_primary()).collect();
    primaries.sort_by_key(|r| r.date_time);

    let first = primaries.first().map(|r| moment(r));
    let last = if primaries.len() > 1 {
        primaries.last().map(|r| moment(r))
    } else {
        None
    };
    let same_dish = match (&first, &last) {
        (Some(a), Some(b)) => a.dish == b.dish,
        _ => false,
    };
    FirstLastStats {
        first,
        last,
        same_dish,
    }
}

fn moment(record: &MealRecord) -> MealMoment {
    MealMoment {
        dish: record.dish.clone(),
        date_time: record.date_time,
        hour: record.hour(),
    }
}
