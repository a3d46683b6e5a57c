//! In-memory record store: the full dataset plus the selected user's view.
//!
//! The store is the only owner of session data. Records are validated once
//! at load time and never mutated afterwards; `user_records` is a filtered
//! copy recomputed on each selection, preserving dataset order.

use tracing::{debug, info};

use crate::types::MealRecord;

/// Errors raised by ingestion and user selection. Statistics never error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum StoreError {
    /// Dataset missing, empty, or malformed. Fatal to the session; the only
    /// recovery is a full reload.
    #[error("malformed dataset{}: {reason}", match index { Some(i) => format!(" (record {i})"), None => String::new() })]
    DataFormat {
        /// Index of the offending record, when one record is at fault.
        index: Option<usize>,
        /// First violated constraint.
        reason: String,
    },
    /// Selected user identity has no records. Not reachable through a UI
    /// derived from `distinct_users`, but programmatic misuse lands here.
    #[error("unknown user: {0}")]
    UnknownUser(String),
}

/// Holds the ingested dataset and the current user's filtered subset.
#[derive(Debug, Clone, Default)]
pub struct RecordStore {
    records: Vec<MealRecord>,
    selected_user: Option<String>,
    user_records: Vec<MealRecord>,
}

impl RecordStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the dataset wholesale.
    ///
    /// Fails with [`StoreError::DataFormat`] if the sequence is empty or any
    /// record violates its internal consistency constraints; on failure the
    /// previous dataset is left untouched. Loading clears any user
    /// selection.
    pub fn load(&mut self, records: Vec<MealRecord>) -> Result<(), StoreError> {
        if records.is_empty() {
            return Err(StoreError::DataFormat {
                index: None,
                reason: "empty dataset".to_string(),
            });
        }
        for (index, record) in records.iter().enumerate() {
            record.validate().map_err(|reason| StoreError::DataFormat {
                index: Some(index),
                reason,
            })?;
        }
        info!(records = records.len(), "dataset loaded");
        self.records = records;
        self.selected_user = None;
        self.user_records.clear();
        Ok(())
    }

    /// Select a user and recompute their record subset, preserving dataset
    /// order. Fails with [`StoreError::UnknownUser`] when no record matches.
    pub fn select_user(&mut self, id: &str) -> Result<(), StoreError> {
        let subset: Vec<MealRecord> = self
            .records
            .iter()
            .filter(|r| r.user == id)
            .cloned()
            .collect();
        if subset.is_empty() {
            return Err(StoreError::UnknownUser(id.to_string()));
        }
        debug!(user = id, records = subset.len(), "user selected");
        self.selected_user = Some(id.to_string());
        self.user_records = subset;
        Ok(())
    }

    /// Drop the current selection and its derived subset.
    pub fn clear_selection(&mut self) {
        self.selected_user = None;
        self.user_records.clear();
    }

    /// Unique user identifiers in first-seen dataset order.
    ///
    /// Lazy and restartable: each call walks the dataset afresh.
    pub fn distinct_users(&self) -> impl Iterator<Item = &str> {
        let mut seen: Vec<&str> = Vec::new();
        self.records.iter().filter_map(move |r| {
            if seen.contains(&r.user.as_str()) {
                None
            } else {
                seen.push(&r.user);
                Some(r.user.as_str())
            }
        })
    }

    /// The full dataset.
    pub fn all_records(&self) -> &[MealRecord] {
        &self.records
    }

    /// The selected user's subset (empty when no user is selected).
    pub fn user_records(&self) -> &[MealRecord] {
        &self.user_records
    }

    /// Currently selected user, if any.
    pub fn selected_user(&self) -> Option<&str> {
        self.selected_user.as_deref()
    }

    /// Number of records in the dataset.
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Whether the dataset is empty (nothing loaded yet).
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::record::tests_support::meal;

    #[test]
    fn test_load_rejects_empty_dataset() {
        let mut store = RecordStore::new();
        let err = store.load(Vec::new()).unwrap_err();
        assert!(matches!(err, StoreError::DataFormat { index: None, .. }));
    }

    #[test]
    fn test_load_reports_offending_record() {
        let mut store = RecordStore::new();
        let good = meal("ana", "sopa", "2026-01-05", 13, 1);
        let mut bad = meal("ana", "sopa", "2026-01-06", 13, 1);
        bad.dish = "  ".to_string();

        let err = store.load(vec![good, bad]).unwrap_err();
        match err {
            StoreError::DataFormat { index, .. } => assert_eq!(index, Some(1)),
            other => panic!("unexpected error: {other}"),
        }
        assert!(store.is_empty());
    }

    #[test]
    fn test_select_user_filters_in_order() {
        let mut store = RecordStore::new();
        store
            .load(vec![
                meal("ana", "sopa", "2026-01-05", 13, 1),
                meal("luis", "pizza", "2026-01-05", 14, 1),
                meal("ana", "cafe", "2026-01-06", 8, 1),
            ])
            .unwrap();

        store.select_user("ana").unwrap();
        assert_eq!(store.selected_user(), Some("ana"));
        let dishes: Vec<_> = store.user_records().iter().map(|r| r.dish.as_str()).collect();
        assert_eq!(dishes, vec!["sopa", "cafe"]);
    }

    #[test]
    fn test_select_unknown_user() {
        let mut store = RecordStore::new();
        store.load(vec![meal("ana", "sopa", "2026-01-05", 13, 1)]).unwrap();
        let err = store.select_user("nadie").unwrap_err();
        assert!(matches!(err, StoreError::UnknownUser(u) if u == "nadie"));
        // Previous selection state is untouched.
        assert_eq!(store.selected_user(), None);
    }

    #[test]
    fn test_distinct_users_first_seen_order_and_restartable() {
        let mut store = RecordStore::new();
        store
            .load(vec![
                meal("luis", "pizza", "2026-01-05", 14, 1),
                meal("ana", "sopa", "2026-01-05", 13, 1),
                meal("luis", "cafe", "2026-01-06", 8, 1),
                meal("ana", "cafe", "2026-01-06", 9, 1),
            ])
            .unwrap();

        let users: Vec<_> = store.distinct_users().collect();
        assert_eq!(users, vec!["luis", "ana"]);
        // Restartable: a second call yields the same sequence.
        let again: Vec<_> = store.distinct_users().collect();
        assert_eq!(again, users);
    }

    #[test]
    fn test_clear_selection() {
        let mut store = RecordStore::new();
        store.load(vec![meal("ana", "sopa", "2026-01-05", 13, 1)]).unwrap();
        store.select_user("ana").unwrap();
        store.clear_selection();
        assert_eq!(store.selected_user(), None);
        assert!(store.user_records().is_empty());
    }
}
