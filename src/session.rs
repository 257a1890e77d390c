//! The caller-facing aggregate that owns one history and one model. Each
//! interaction session gets its own value, so independent sessions never
//! share statistics.

use crate::history::History;
use crate::models::context::{ContextModel, MODEL_MIN_EVIDENCE, MODEL_ORDER};
use crate::models::Model;
use crate::Symbol;

type StandardModel = ContextModel<MODEL_ORDER, MODEL_MIN_EVIDENCE>;

/// A single interaction session. The caller records the choices that were
/// actually made with 'record_black' and 'record_white', and may ask for a
/// prediction of the next choice at any time, including before the first
/// recording.
pub struct Session {
    history: History,
    model: StandardModel,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    pub fn new() -> Session {
        Session {
            history: History::new(),
            model: StandardModel::new(),
        }
    }

    /// Record that the caller selected the black option.
    pub fn record_black(&mut self) {
        self.record(Symbol::Black);
    }

    /// Record that the caller selected the white option.
    pub fn record_white(&mut self) {
        self.record(Symbol::White);
    }

    fn record(&mut self, sym: Symbol) {
        // The model must see the history as it was before this symbol, so
        // that a symbol never feeds the context entry that predicts it.
        self.model.observe(&self.history, sym);
        self.history.push(sym);
    }

    /// Predict the next symbol, or return None when no context order has
    /// enough one-sided evidence. Read-only: calling this any number of
    /// times between recordings returns the same answer.
    #[must_use]
    pub fn predict_next(&self) -> Option<Symbol> {
        self.model.predict(&self.history)
    }

    /// The number of symbols recorded in this session.
    pub fn len(&self) -> usize {
        self.history.len()
    }

    pub fn is_empty(&self) -> bool {
        self.history.is_empty()
    }
}

#[test]
fn test_fresh_session_abstains() {
    let session = Session::new();
    assert_eq!(session.predict_next(), None);
}

#[test]
fn test_independent_sessions() {
    let mut a = Session::new();
    let b = Session::new();

    for _ in 0..10 {
        a.record_white();
    }
    assert_eq!(a.predict_next(), Some(Symbol::White));
    // The other session saw nothing.
    assert_eq!(b.predict_next(), None);
    assert_eq!(b.len(), 0);
}
