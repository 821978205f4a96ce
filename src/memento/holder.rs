// Originator side of the state-history illustration: a holder whose state
// can be captured into opaque snapshots and rolled back from them.

use std::fmt;

use chrono::{DateTime, Local};
use rand::Rng;
use thiserror::Error;

/// State a holder manages. Callers pick the shape once at construction;
/// afterwards the value only changes through the holder's own operations.
#[derive(Debug, Clone, PartialEq)]
pub enum StateValue {
    Text(String),
    Number(i64),
}

impl StateValue {
    pub fn kind(&self) -> StateKind {
        match self {
            StateValue::Text(_) => StateKind::Text,
            StateValue::Number(_) => StateKind::Number,
        }
    }
}

impl fmt::Display for StateValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StateValue::Text(text) => f.write_str(text),
            StateValue::Number(value) => write!(f, "{}", value),
        }
    }
}

/// Tag identifying the shape of a [`StateValue`]. Restores assert that the
/// snapshot's tag matches the holder's.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StateKind {
    Text,
    Number,
}

impl fmt::Display for StateKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            StateKind::Text => "text",
            StateKind::Number => "number",
        })
    }
}

/// Errors a restore can produce. An empty history is not one of them; see
/// [`History::undo`](crate::memento::History::undo).
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RestoreError {
    /// The snapshot was produced by a holder of a different state kind.
    /// The holder's state is left unchanged.
    #[error("cannot restore a {expected} holder from a {found} snapshot")]
    TypeMismatch {
        expected: StateKind,
        found: StateKind,
    },
}

/// Immutable capture of a holder's state plus creation metadata.
///
/// The captured value is private to this module: any code holding a
/// `Snapshot`, the history keeper included, can display or enumerate it,
/// but only [`StateHolder::restore_from`] reads the value back. Snapshots
/// are single-use; a restore consumes one by value.
pub struct Snapshot {
    state: StateValue,
    created_at: DateTime<Local>,
}

impl Snapshot {
    /// Display string: creation time truncated to whole seconds, plus a
    /// short preview of the captured state.
    pub fn label(&self) -> String {
        let text = self.state.to_string();
        let preview: String = text.chars().take(9).collect();
        format!(
            "{} / ({}...)",
            self.created_at.format("%Y-%m-%d %H:%M:%S"),
            preview
        )
    }

    pub fn created_at(&self) -> DateTime<Local> {
        self.created_at
    }
}

/// Owner of a mutable [`StateValue`]. Produces [`Snapshot`]s of it and
/// accepts them back to roll state backward.
pub struct StateHolder {
    state: StateValue,
    generator: Box<dyn FnMut(&StateValue) -> StateValue>,
}

impl StateHolder {
    /// Holder with the default mutation behavior: every [`mutate`] draws a
    /// fresh random value of the current kind.
    ///
    /// [`mutate`]: StateHolder::mutate
    pub fn new(initial: StateValue) -> Self {
        Self::with_generator(initial, random_state)
    }

    /// Holder with an injected state-generation step, for callers that need
    /// mutation to be deterministic.
    pub fn with_generator(
        initial: StateValue,
        generator: impl FnMut(&StateValue) -> StateValue + 'static,
    ) -> Self {
        Self {
            state: initial,
            generator: Box::new(generator),
        }
    }

    pub fn state(&self) -> &StateValue {
        &self.state
    }

    /// Replace the current state with the generator's next value.
    pub fn mutate(&mut self) {
        let next = (self.generator)(&self.state);
        self.state = next;
    }

    /// Deep-copy the current state into a snapshot stamped with the current
    /// time. The holder itself is untouched.
    pub fn capture(&self) -> Snapshot {
        Snapshot {
            state: self.state.clone(),
            created_at: Local::now(),
        }
    }

    /// Overwrite the current state with the value enclosed in `snapshot`.
    ///
    /// The snapshot must carry the holder's state kind; on a mismatch the
    /// holder is left unchanged. Either way the snapshot is spent; there
    /// is no second restore.
    pub fn restore_from(&mut self, snapshot: Snapshot) -> Result<(), RestoreError> {
        let expected = self.state.kind();
        let found = snapshot.state.kind();
        if expected != found {
            return Err(RestoreError::TypeMismatch { expected, found });
        }
        log::trace!("restoring state captured at {}", snapshot.created_at);
        self.state = snapshot.state;
        Ok(())
    }
}

/// Default mutation step: a fresh random value of the current kind.
fn random_state(current: &StateValue) -> StateValue {
    let mut rng = rand::thread_rng();
    match current {
        StateValue::Text(_) => {
            let word: String = (0..12).map(|_| rng.gen_range(b'a'..=b'z') as char).collect();
            StateValue::Text(word)
        }
        StateValue::Number(_) => StateValue::Number(rng.gen_range(0..1_000_000)),
    }
}
