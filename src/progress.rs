//! Progress indicator seam and the screen→position mapping.

use crate::types::ScreenId;

/// Number of distinct indicator positions (0..=7).
pub const POSITIONS: u8 = 8;

/// External visual collaborator showing which stage of the narrative is
/// active. Exactly one position is marked active at a time.
pub trait ProgressIndicator: Send + Sync {
    /// Mark `position` (0..[`POSITIONS`]) as the active one.
    fn set_active(&self, position: u8);
}

/// Indicator position for a screen.
///
/// Ten screens share eight positions, so the mapping is one explicit table
/// rather than an inferred formula: `Selection` and `Welcome` share
/// position 0 and `ActiveMonth` and `Farewell` share position 7, keeping
/// the dial monotonic and using every position on the way up.
pub fn position_for(screen: ScreenId) -> u8 {
    match screen {
        ScreenId::Selection => 0,
        ScreenId::Welcome => 0,
        ScreenId::Totals => 1,
        ScreenId::FirstLast => 2,
        ScreenId::FavoriteDay => 3,
        ScreenId::TopDishes => 4,
        ScreenId::Tallies => 5,
        ScreenId::TimeOfDay => 6,
        ScreenId::ActiveMonth => 7,
        ScreenId::Farewell => 7,
    }
}

/// No-op indicator for hosts without a progress dial.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoOpIndicator;

impl ProgressIndicator for NoOpIndicator {
    fn set_active(&self, _position: u8) {}
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mapping_is_monotonic() {
        let mut last = 0;
        for screen in ScreenId::ALL {
            let position = position_for(screen);
            assert!(position >= last, "{screen} maps backwards");
            assert!(position < POSITIONS);
            last = position;
        }
    }

    #[test]
    fn test_every_position_used() {
        for expected in 0..POSITIONS {
            assert!(
                ScreenId::ALL.iter().any(|s| position_for(*s) == expected),
                "position {expected} unused"
            );
        }
    }

    #[test]
    fn test_selection_and_welcome_share_zero() {
        assert_eq!(position_for(ScreenId::Selection), 0);
        assert_eq!(position_for(ScreenId::Welcome), 0);
    }
}
