use crate::history::History;
use crate::Symbol;

/// A trait that defines the interface for making predictions.
pub trait Model {
    /// Construct a new model with empty statistics.
    fn new() -> Self;

    /// Return the predicted next symbol using the internal statistics and
    /// the recorded history, or None when the evidence is insufficient.
    /// This is a pure read and two calls with no intervening observation
    /// must agree.
    #[must_use]
    fn predict(&self, history: &History) -> Option<Symbol>;

    /// Update the internal statistics with the next observed symbol 'next'.
    /// 'history' is the history as it was before 'next' was recorded, so
    /// the contexts never include the symbol they are counted against.
    fn observe(&mut self, history: &History, next: Symbol);
}
