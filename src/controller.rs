//! Screen controller: the linear state machine driving the slideshow.
//!
//! Dispatch is an explicit table (`ScreenId` → [`ScreenDefinition`]); the
//! wrap past the farewell screen is a transition rule, not a fallthrough.
//! Every transition follows the same protocol, in order: cancel pending
//! reveals, clear presented content, reset scroll, update the progress
//! indicator, compute the target screen's statistic bundle, build its
//! reveal sequence, play.

use std::collections::BTreeMap;
use std::sync::Arc;

use tracing::{debug, info, warn};

use crate::progress::{position_for, ProgressIndicator};
use crate::reveal::{RenderSink, RevealItem, RevealScheduler};
use crate::screens::{self, ScreenContext};
use crate::stats;
use crate::store::{RecordStore, StoreError};
use crate::types::{MealRecord, ScreenId, ScreenStats};

/// One entry of the screen dispatch table: how to compute the screen's
/// statistics and how to phrase them as reveals.
pub struct ScreenDefinition {
    /// Statistic computation over the selected user's records.
    pub compute: fn(&[MealRecord]) -> ScreenStats,
    /// Reveal sequence builder.
    pub build: fn(&ScreenStats, &ScreenContext) -> Vec<RevealItem>,
}

fn no_stats(_records: &[MealRecord]) -> ScreenStats {
    ScreenStats::None
}

fn compute_totals(records: &[MealRecord]) -> ScreenStats {
    ScreenStats::Totals(stats::totals(records))
}

fn compute_first_last(records: &[MealRecord]) -> ScreenStats {
    ScreenStats::FirstLast(stats::first_last(records))
}

fn compute_weekday(records: &[MealRecord]) -> ScreenStats {
    ScreenStats::Weekday(stats::weekday_distribution(records))
}

fn compute_top_dishes(records: &[MealRecord]) -> ScreenStats {
    ScreenStats::TopDishes(stats::top_dishes(records))
}

fn compute_tallies(records: &[MealRecord]) -> ScreenStats {
    ScreenStats::Tallies(stats::tally_totals(records))
}

fn compute_time_of_day(records: &[MealRecord]) -> ScreenStats {
    ScreenStats::TimeOfDay(stats::time_of_day(records))
}

fn compute_monthly(records: &[MealRecord]) -> ScreenStats {
    ScreenStats::Monthly(stats::monthly(records))
}

fn definitions() -> BTreeMap<ScreenId, ScreenDefinition> {
    let mut table = BTreeMap::new();
    table.insert(
        ScreenId::Selection,
        ScreenDefinition {
            compute: no_stats,
            build: screens::build_selection,
        },
    );
    table.insert(
        ScreenId::Welcome,
        ScreenDefinition {
            compute: no_stats,
            build: screens::build_welcome,
        },
    );
    table.insert(
        ScreenId::Totals,
        ScreenDefinition {
            compute: compute_totals,
            build: screens::build_totals,
        },
    );
    table.insert(
        ScreenId::FirstLast,
        ScreenDefinition {
            compute: compute_first_last,
            build: screens::build_first_last,
        },
    );
    table.insert(
        ScreenId::FavoriteDay,
        ScreenDefinition {
            compute: compute_weekday,
            build: screens::build_favorite_day,
        },
    );
    table.insert(
        ScreenId::TopDishes,
        ScreenDefinition {
            compute: compute_top_dishes,
            build: screens::build_top_dishes,
        },
    );
    table.insert(
        ScreenId::Tallies,
        ScreenDefinition {
            compute: compute_tallies,
            build: screens::build_tallies,
        },
    );
    table.insert(
        ScreenId::TimeOfDay,
        ScreenDefinition {
            compute: compute_time_of_day,
            build: screens::build_time_of_day,
        },
    );
    table.insert(
        ScreenId::ActiveMonth,
        ScreenDefinition {
            compute: compute_monthly,
            build: screens::build_active_month,
        },
    );
    table.insert(
        ScreenId::Farewell,
        ScreenDefinition {
            compute: no_stats,
            build: screens::build_farewell,
        },
    );
    table
}

/// Owns the session: record store, current-screen cursor, reveal scheduler,
/// and the external sink/indicator collaborators.
pub struct ScreenController {
    store: RecordStore,
    scheduler: RevealScheduler,
    sink: Arc<dyn RenderSink>,
    progress: Arc<dyn ProgressIndicator>,
    table: BTreeMap<ScreenId, ScreenDefinition>,
    current: ScreenId,
}

impl ScreenController {
    /// Controller over a loaded store and the host's collaborators.
    pub fn new(
        store: RecordStore,
        sink: Arc<dyn RenderSink>,
        progress: Arc<dyn ProgressIndicator>,
    ) -> Self {
        Self {
            scheduler: RevealScheduler::new(Arc::clone(&sink)),
            store,
            sink,
            progress,
            table: definitions(),
            current: ScreenId::Selection,
        }
    }

    /// Enter the selection screen. Fails when no dataset has been loaded;
    /// the host surfaces that as its "could not start" state.
    pub fn start(&mut self) -> Result<(), StoreError> {
        if self.store.is_empty() {
            return Err(StoreError::DataFormat {
                index: None,
                reason: "no dataset loaded".to_string(),
            });
        }
        self.present(ScreenId::Selection);
        Ok(())
    }

    /// Explicit user-pick action from the selection screen. Carries the
    /// chosen identity into the session and moves to the welcome screen.
    ///
    /// An unknown identity re-renders the selection screen and propagates
    /// the error; picks outside the selection screen are ignored.
    pub fn pick_user(&mut self, id: &str) -> Result<(), StoreError> {
        if self.current != ScreenId::Selection {
            debug!(user = id, screen = %self.current, "pick ignored off the selection screen");
            return Ok(());
        }
        match self.store.select_user(id) {
            Ok(()) => {
                self.present(ScreenId::Welcome);
                Ok(())
            }
            Err(err) => {
                warn!(user = id, %err, "user selection failed");
                self.present(ScreenId::Selection);
                Err(err)
            }
        }
    }

    /// Generic advance trigger (a tap outside interactive controls).
    ///
    /// Ignored on the selection screen until a user is picked. Advancing
    /// past the farewell screen clears the selection and wraps back to
    /// selection with a freshly derived user list.
    pub fn advance(&mut self) {
        let next = self.current.next();
        if next.needs_user() && self.store.selected_user().is_none() {
            debug!("advance ignored: no user selected");
            return;
        }
        if next == ScreenId::Selection {
            info!(user = ?self.store.selected_user(), "slideshow finished, back to selection");
            self.store.clear_selection();
        }
        self.present(next);
    }

    /// Current state of the screen cursor.
    pub fn current_screen(&self) -> ScreenId {
        self.current
    }

    /// Read access to the session's record store.
    pub fn store(&self) -> &RecordStore {
        &self.store
    }

    fn present(&mut self, screen: ScreenId) {
        // Cancellation must come first: a late-firing reveal from the
        // previous screen must not land on the new one.
        self.scheduler.cancel_all();
        self.sink.clear();
        self.sink.reset_scroll();
        self.progress.set_active(position_for(screen));

        let definition = self
            .table
            .get(&screen)
            .unwrap_or_else(|| unreachable!("dispatch table covers every screen"));
        let bundle = (definition.compute)(self.store.user_records());
        let ctx = ScreenContext {
            user: self.store.selected_user().map(str::to_string),
            users: if screen == ScreenId::Selection {
                self.store.distinct_users().map(str::to_string).collect()
            } else {
                Vec::new()
            },
        };
        let items = (definition.build)(&bundle, &ctx);
        debug!(screen = %screen, reveals = items.len(), "presenting screen");
        for item in items {
            self.scheduler.enqueue(item);
        }
        self.scheduler.play();
        self.current = screen;
    }
}
