//! Screen identifiers and the linear transition rule.

use std::fmt;

use serde::{Deserialize, Serialize};

/// One stage of the narrative sequence.
///
/// The sequence is linear: `Selection` → `Welcome` → ... → `Farewell`,
/// and advancing past `Farewell` wraps back to `Selection`. That wrap is an
/// explicit transition rule here, not a fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ScreenId {
    /// User selection (screen 0).
    Selection,
    /// Personal greeting (screen 1).
    Welcome,
    /// Total meals and per-day average (screen 2).
    Totals,
    /// First and last meal of the year (screen 3).
    FirstLast,
    /// Favorite day of the week (screen 4).
    FavoriteDay,
    /// Top-5 dish ranking (screen 5).
    TopDishes,
    /// Tally counter summary (screen 6).
    Tallies,
    /// Preferred time of day (screen 7).
    TimeOfDay,
    /// Most active month (screen 8).
    ActiveMonth,
    /// Closing screen with restart action (screen 9).
    Farewell,
}

impl ScreenId {
    /// All screens in narrative order.
    pub const ALL: [ScreenId; 10] = [
        ScreenId::Selection,
        ScreenId::Welcome,
        ScreenId::Totals,
        ScreenId::FirstLast,
        ScreenId::FavoriteDay,
        ScreenId::TopDishes,
        ScreenId::Tallies,
        ScreenId::TimeOfDay,
        ScreenId::ActiveMonth,
        ScreenId::Farewell,
    ];

    /// Numeric cursor value (0 = selection, 1..9 = content screens).
    pub fn index(&self) -> u8 {
        ScreenId::ALL.iter().position(|s| s == self).unwrap_or(0) as u8
    }

    /// Screen for a cursor value, if in range.
    pub fn from_index(index: u8) -> Option<Self> {
        ScreenId::ALL.get(index as usize).copied()
    }

    /// The screen an advance trigger moves to. `Farewell` wraps to
    /// `Selection`.
    pub fn next(&self) -> ScreenId {
        match ScreenId::from_index(self.index() + 1) {
            Some(screen) => screen,
            None => ScreenId::Selection,
        }
    }

    /// Whether this screen presents content for a selected user.
    pub fn needs_user(&self) -> bool {
        !matches!(self, ScreenId::Selection)
    }
}

impl fmt::Display for ScreenId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ScreenId::Selection => "selection",
            ScreenId::Welcome => "welcome",
            ScreenId::Totals => "totals",
            ScreenId::FirstLast => "first_last",
            ScreenId::FavoriteDay => "favorite_day",
            ScreenId::TopDishes => "top_dishes",
            ScreenId::Tallies => "tallies",
            ScreenId::TimeOfDay => "time_of_day",
            ScreenId::ActiveMonth => "active_month",
            ScreenId::Farewell => "farewell",
        };
        f.write_str(name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_order_and_wrap() {
        let mut screen = ScreenId::Selection;
        for expected in ScreenId::ALL.iter().skip(1) {
            screen = screen.next();
            assert_eq!(screen, *expected);
        }
        assert_eq!(ScreenId::Farewell.next(), ScreenId::Selection);
    }

    #[test]
    fn test_index_round_trip() {
        for screen in ScreenId::ALL {
            assert_eq!(ScreenId::from_index(screen.index()), Some(screen));
        }
        assert_eq!(ScreenId::from_index(10), None);
    }
}
