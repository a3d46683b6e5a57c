//! Top-5 dish ranking.

use std::collections::HashMap;

use crate::types::{DishCount, MealRecord, TopDishesStats};

use super::percent;

/// Number of entries the ranking is truncated to.
pub const TOP_N: usize = 5;

/// Compute the top-dishes bundle.
///
/// Every record counts here, primary or not: the ranking is over logged
/// items, not occasions. Counts accumulate in first-seen dataset order and
/// the descending sort is stable, so dishes with equal counts keep that
/// order. Percentages are taken against the total record count.
pub fn top_dishes(records: &[MealRecord]) -> TopDishesStats {
    let mut order: Vec<(String, u32)> = Vec::new();
    let mut positions: HashMap<&str, usize> = HashMap::new();
    for record in records {
        match positions.get(record.dish.as_str()) {
            Some(&at) => order[at].1 += 1,
            None => {
                positions.insert(record.dish.as_str(), order.len());
                order.push((record.dish.clone(), 1));
            }
        }
    }

    // Stable sort: equal counts keep first-seen order.
    order.sort_by(|a, b| b.1.cmp(&a.1));
    order.truncate(TOP_N);

    let total_records = records.len() as u32;
    let ranking: Vec<DishCount> = order
        .into_iter()
        .map(|(dish, count)| DishCount {
            percent: percent(count, total_records),
            dish,
            count,
        })
        .collect();

    let lead_over_runner_up = match (ranking.first(), ranking.get(1)) {
        (Some(first), Some(second)) => first.count - second.count,
        _ => 0,
    };

    TopDishesStats {
        ranking,
        total_records,
        lead_over_runner_up,
    }
}
