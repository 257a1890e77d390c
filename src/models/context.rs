use super::model::Model;
use crate::history::History;
use crate::Symbol;

/// The longest context that the standard model conditions on.
pub const MODEL_ORDER: usize = 5;
/// The smallest number of observations of a context that counts as evidence.
pub const MODEL_MIN_EVIDENCE: u64 = 2;

/// A model that counts which symbol follows each recent context, for every
/// context length from zero up to MAX_ORDER, and predicts by majority vote
/// with backoff.
///
/// MAX_ORDER defines the longest context. MIN_EVIDENCE defines how many
/// times a context must have been seen before its vote is trusted; a
/// context with fewer observations, or with an exactly tied vote, defers
/// to the next shorter context. The order-zero table is the last resort:
/// it commits on any non-tied count and abstains on a tie, which keeps the
/// model honest instead of guessing.
pub struct ContextModel<const MAX_ORDER: usize, const MIN_EVIDENCE: u64> {
    /// One counter table per order. The table for order 'k' has 2^k
    /// entries of (count_black, count_white), keyed by the last 'k'
    /// symbols with the newest symbol in the lowest bit.
    tables: Vec<Vec<(u64, u64)>>,
}

impl<const MAX_ORDER: usize, const MIN_EVIDENCE: u64>
    ContextModel<MAX_ORDER, MIN_EVIDENCE>
{
    /// Return the counters for the context 'key' at order 'order'.
    pub fn counts(&self, order: usize, key: u64) -> (u64, u64) {
        debug_assert!(order <= MAX_ORDER);
        self.tables[order][key as usize]
    }

    /// The total number of observations, which equals the number of
    /// symbols ever observed (the empty context matches all of them).
    pub fn observations(&self) -> u64 {
        let (black, white) = self.tables[0][0];
        black.saturating_add(white)
    }

    /// Try to commit to a majority vote at a single order. Returns None
    /// when the context was seen fewer than 'min_total' times or when the
    /// vote is exactly tied.
    fn vote(&self, order: usize, key: u64, min_total: u64) -> Option<Symbol> {
        let (black, white) = self.tables[order][key as usize];
        if black.saturating_add(white) < min_total {
            return None;
        }
        match black.cmp(&white) {
            std::cmp::Ordering::Greater => Some(Symbol::Black),
            std::cmp::Ordering::Less => Some(Symbol::White),
            std::cmp::Ordering::Equal => None,
        }
    }
}

impl<const MAX_ORDER: usize, const MIN_EVIDENCE: u64> Model
    for ContextModel<MAX_ORDER, MIN_EVIDENCE>
{
    fn new() -> Self {
        let tables = (0..=MAX_ORDER).map(|k| vec![(0, 0); 1 << k]).collect();
        Self { tables }
    }

    fn predict(&self, history: &History) -> Option<Symbol> {
        // Start from the most specific context that the history can fill
        // and back off towards the empty context.
        let start = MAX_ORDER.min(history.len());
        for order in (1..=start).rev() {
            let (key, len) = history.suffix_key(order);
            debug_assert!(len == order);
            if let Some(sym) = self.vote(order, key, MIN_EVIDENCE) {
                return Some(sym);
            }
        }
        // The empty context needs no minimum: any majority beats guessing,
        // and a tie means there is nothing to say.
        self.vote(0, 0, 1)
    }

    fn observe(&mut self, history: &History, next: Symbol) {
        // Every order counts the observation, not only the highest one,
        // so the shorter contexts are ready whenever a longer context
        // falls short of evidence.
        for order in 0..=MAX_ORDER {
            let (key, len) = history.suffix_key(order);
            if len < order {
                // The history is still shorter than this context length.
                continue;
            }
            let (black, white) = &mut self.tables[order][key as usize];
            match next {
                Symbol::Black => *black = black.saturating_add(1),
                Symbol::White => *white = white.saturating_add(1),
            }
        }
    }
}

#[test]
fn test_observe_counts_every_order() {
    let mut model = ContextModel::<3, 2>::new();
    let mut hist = History::new();

    // First observation: only the empty context exists.
    model.observe(&hist, Symbol::White);
    hist.push(Symbol::White);
    assert_eq!(model.counts(0, 0), (0, 1));
    assert_eq!(model.counts(1, 1), (0, 0));

    // Second observation: orders 0 and 1 both count it.
    model.observe(&hist, Symbol::Black);
    hist.push(Symbol::Black);
    assert_eq!(model.counts(0, 0), (1, 1));
    assert_eq!(model.counts(1, 1), (1, 0));
    assert_eq!(model.counts(2, 0b01), (0, 0));
}

#[test]
fn test_backoff_prefers_long_context() {
    let mut model = ContextModel::<2, 1>::new();
    let mut hist = History::new();

    // Two laps of the cycle B, W, W. White dominates overall, but the
    // context [W, W] was followed by B, and the longer context wins.
    let feed = [
        Symbol::Black,
        Symbol::White,
        Symbol::White,
        Symbol::Black,
        Symbol::White,
        Symbol::White,
    ];
    for sym in feed {
        model.observe(&hist, sym);
        hist.push(sym);
    }

    let (key2, _) = hist.suffix_key(2);
    assert_eq!(model.counts(2, key2), (1, 0));
    assert_eq!(model.counts(0, 0), (2, 4));
    assert_eq!(model.predict(&hist), Some(Symbol::Black));
}

#[test]
fn test_tie_backs_off() {
    let mut model = ContextModel::<1, 1>::new();
    let mut hist = History::new();

    // W follows W once and B follows W once: the order-1 vote is tied.
    // The empty context saw (1 B, 3 W) and breaks the tie.
    for sym in [Symbol::White, Symbol::White, Symbol::Black, Symbol::White] {
        model.observe(&hist, sym);
        hist.push(sym);
    }

    // The current suffix is [W] and its vote is split one-one.
    let (key, _) = hist.suffix_key(1);
    assert_eq!(model.counts(1, key), (1, 1));
    assert_eq!(model.predict(&hist), Some(Symbol::White));
}
