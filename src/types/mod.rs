//! Core types for the wrapped engine.

pub mod record;
pub mod screen;
pub mod stats;

pub use record::{MealRecord, Month, TimeBucket, Weekday, TALLY_PREFIX};
pub use screen::ScreenId;
pub use stats::{
    DishCount, FirstLastStats, MealMoment, MonthlyStats, ScreenStats, TallyStats, TallyTotal,
    TimeOfDayStats, TopDishesStats, TotalsStats, WeekdayStats,
};
