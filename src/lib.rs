//! # meal-wrapped
//!
//! Screen sequencing and incremental-reveal engine for a "year in review"
//! meal slideshow.
//!
//! Given a flat log of meal records, the engine drives a personalized
//! sequence of animated statistical reveals:
//!
//! ```text
//! Advance trigger → ScreenController → StatisticsEngine → RevealScheduler → RenderSink
//!                         ↓                   ↓
//!                    RecordStore        statistic bundle
//! ```
//!
//! ## Core contract
//!
//! 1. A linear state machine over named screens ([`ScreenId`]), advanced by
//!    an external trigger and wrapping back to selection after the last
//!    screen.
//! 2. Pure, total statistics per screen ([`stats`]): same subset in, same
//!    bundle out; empty subsets degrade to zeros, never errors.
//! 3. A cancelable, timer-driven reveal queue ([`RevealScheduler`]): one
//!    independent single-shot timer per reveal, canceled synchronously on
//!    every transition before shared presentation state is touched.
//!
//! Rendering and progress display stay behind the [`RenderSink`] and
//! [`ProgressIndicator`] traits; data acquisition is the host's job — the
//! engine takes an already-parsed `Vec<MealRecord>`.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod controller;
pub mod progress;
pub mod reveal;
pub mod screens;
pub mod stats;
pub mod store;
pub mod types;

// Re-exports
pub use controller::{ScreenController, ScreenDefinition};
pub use progress::{position_for, NoOpIndicator, ProgressIndicator, POSITIONS};
pub use reveal::{
    ChartSpec, MemorySink, RenderSink, RevealContent, RevealId, RevealItem, RevealScheduler,
    RevealSequence, SinkEntry, SETTLE,
};
pub use screens::ScreenContext;
pub use stats::{percent, round1};
pub use store::{RecordStore, StoreError};
pub use types::{
    DishCount, FirstLastStats, MealMoment, MealRecord, Month, MonthlyStats, ScreenId, ScreenStats,
    TallyStats, TallyTotal, TimeBucket, TimeOfDayStats, TopDishesStats, TotalsStats, Weekday,
    WeekdayStats,
};

/// Schema version for the record wire format and statistic bundles.
/// Increment on breaking changes to either.
pub const WRAPPED_SCHEMA_VERSION: &str = "1.0.0";
