// Caretaker side: keeps snapshots without ever reading what they protect.

use std::cell::RefCell;

use super::holder::{RestoreError, Snapshot, StateHolder};

/// LIFO keeper of [`Snapshot`]s, bound to exactly one [`StateHolder`] for
/// its entire lifetime.
///
/// The borrow of the holder's `RefCell` means a `History` cannot outlive
/// its holder, and `backup`/`undo` hold an exclusive borrow for their full
/// duration, so a capture or restore never observes a state mid-mutation.
pub struct History<'a> {
    holder: &'a RefCell<StateHolder>,
    snapshots: Vec<Snapshot>,
}

impl<'a> History<'a> {
    pub fn new(holder: &'a RefCell<StateHolder>) -> Self {
        Self {
            holder,
            snapshots: Vec::new(),
        }
    }

    /// Capture the bound holder's current state and append the snapshot at
    /// the tail. Repeated calls simply grow the sequence; equal states are
    /// not deduplicated.
    pub fn backup(&mut self) {
        let snapshot = self.holder.borrow().capture();
        log::debug!("backup: {}", snapshot.label());
        self.snapshots.push(snapshot);
    }

    /// Pop the most recent snapshot and roll the holder back to it.
    ///
    /// Undoing with an empty history is a documented no-op, `Ok(false)`.
    /// Otherwise the popped snapshot is handed to the holder and `Ok(true)`
    /// is returned. The snapshot is spent in every path: there is no redo,
    /// and undoing without an intervening backup permanently discards the
    /// overwritten state.
    pub fn undo(&mut self) -> Result<bool, RestoreError> {
        let snapshot = match self.snapshots.pop() {
            Some(snapshot) => snapshot,
            None => {
                log::debug!("undo: history is empty, nothing to do");
                return Ok(false);
            }
        };
        log::debug!("undo: {}", snapshot.label());
        self.holder.borrow_mut().restore_from(snapshot)?;
        Ok(true)
    }

    /// Labels of the held snapshots, oldest first. Lazy and restartable;
    /// never touches the captured values themselves.
    pub fn labels(&self) -> impl Iterator<Item = String> + '_ {
        self.snapshots.iter().map(Snapshot::label)
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::memento::{StateKind, StateValue};
    use proptest::prelude::*;

    fn counting_holder(start: i64) -> RefCell<StateHolder> {
        RefCell::new(StateHolder::with_generator(
            StateValue::Number(start),
            |current| match current {
                StateValue::Number(n) => StateValue::Number(n + 1),
                other => other.clone(),
            },
        ))
    }

    #[test]
    fn backup_mutate_undo_round_trip() {
        let mut script = ["B", "C"].into_iter();
        let holder = RefCell::new(StateHolder::with_generator(
            StateValue::Text("A".to_string()),
            move |_| StateValue::Text(script.next().expect("script exhausted").to_string()),
        ));
        let mut history = History::new(&holder);

        history.backup();
        holder.borrow_mut().mutate();
        history.backup();
        holder.borrow_mut().mutate();
        assert_eq!(*holder.borrow().state(), StateValue::Text("C".into()));
        assert_eq!(history.len(), 2);

        assert_eq!(history.undo(), Ok(true));
        assert_eq!(*holder.borrow().state(), StateValue::Text("B".into()));
        assert_eq!(history.len(), 1);

        assert_eq!(history.undo(), Ok(true));
        assert_eq!(*holder.borrow().state(), StateValue::Text("A".into()));
        assert!(history.is_empty());

        assert_eq!(history.undo(), Ok(false));
        assert_eq!(*holder.borrow().state(), StateValue::Text("A".into()));
    }

    #[test]
    fn undo_restores_latest_backup() {
        let holder = counting_holder(0);
        let mut history = History::new(&holder);

        for _ in 0..4 {
            holder.borrow_mut().mutate();
            history.backup();
        }
        holder.borrow_mut().mutate();
        holder.borrow_mut().mutate();
        assert_eq!(*holder.borrow().state(), StateValue::Number(6));

        assert_eq!(history.undo(), Ok(true));
        assert_eq!(*holder.borrow().state(), StateValue::Number(4));
    }

    #[test]
    fn undo_on_empty_history_is_a_no_op() {
        let holder = counting_holder(7);
        let mut history = History::new(&holder);

        assert_eq!(history.undo(), Ok(false));
        assert_eq!(*holder.borrow().state(), StateValue::Number(7));
        assert!(history.is_empty());
    }

    #[test]
    fn equal_states_are_not_deduplicated() {
        let holder = counting_holder(1);
        let mut history = History::new(&holder);

        history.backup();
        history.backup();
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn labels_run_oldest_first_and_restart() {
        let mut script = ["second"].into_iter();
        let holder = RefCell::new(StateHolder::with_generator(
            StateValue::Text("first".to_string()),
            move |_| StateValue::Text(script.next().expect("script exhausted").to_string()),
        ));
        let mut history = History::new(&holder);

        history.backup();
        holder.borrow_mut().mutate();
        history.backup();

        let labels: Vec<String> = history.labels().collect();
        assert_eq!(labels.len(), 2);
        assert!(labels[0].contains("first"));
        assert!(labels[1].contains("second"));

        // A fresh iterator starts over without side effects.
        assert_eq!(history.labels().count(), 2);
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn undo_propagates_kind_mismatch() {
        // A generator that abandons the text kind turns older snapshots stale.
        let holder = RefCell::new(StateHolder::with_generator(
            StateValue::Text("draft".to_string()),
            |_| StateValue::Number(9),
        ));
        let mut history = History::new(&holder);

        history.backup();
        holder.borrow_mut().mutate();

        let err = history.undo().unwrap_err();
        assert_eq!(
            err,
            RestoreError::TypeMismatch {
                expected: StateKind::Number,
                found: StateKind::Text,
            }
        );
        assert_eq!(*holder.borrow().state(), StateValue::Number(9));
        // The popped snapshot is spent even when the restore fails.
        assert!(history.is_empty());
    }

    proptest! {
        #[test]
        fn history_len_tracks_effective_ops(ops in prop::collection::vec(any::<bool>(), 0..64)) {
            let holder = counting_holder(0);
            let mut history = History::new(&holder);
            let mut expected_len = 0usize;

            for is_backup in ops {
                if is_backup {
                    history.backup();
                    expected_len += 1;
                } else {
                    let undone = history.undo().unwrap();
                    prop_assert_eq!(undone, expected_len > 0);
                    expected_len = expected_len.saturating_sub(1);
                }
                prop_assert_eq!(history.len(), expected_len);
            }
        }
    }
}
