//! An append-only record of the symbols observed in a session. The symbols
//! are packed into bits, so the buffer grows by one bit per recording and
//! never needs a retention cap.

use crate::Symbol;

#[derive(PartialEq, Debug)]
pub struct History {
    /// Stores the packed part of the buffer, 64 symbols per word.
    data: Vec<u64>,
    /// Stores the trailing symbols that don't fill a whole word yet.
    /// The bits are packed from the right [xxxxx543210]. Bits above
    /// 'len % 64' are zero.
    last: u64,
    /// The number of symbols recorded (also points to the next free bit).
    len: usize,
}

impl Default for History {
    fn default() -> Self {
        Self::new()
    }
}

impl History {
    pub fn new() -> History {
        History {
            data: Vec::new(),
            last: 0,
            len: 0,
        }
    }

    /// The number of symbols recorded so far.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    fn verify(&self) {
        // Check the invariant that the bits trailing the last recorded
        // symbol are all zero.
        debug_assert!(if self.len % 64 == 0 {
            self.last == 0
        } else {
            self.last >> (self.len % 64) == 0
        });
        // Check that the packed words cover exactly the full prefix.
        debug_assert!(self.data.len() == self.len / 64);
    }

    /// Append 'sym' to the end of the buffer.
    pub fn push(&mut self, sym: Symbol) {
        let bit = sym.as_bit() as u64;
        self.last |= bit << (self.len % 64);
        self.len += 1;
        // If the trailing word is filled, flush it.
        if self.len % 64 == 0 {
            self.data.push(self.last);
            self.last = 0;
        }
        self.verify();
    }

    /// Return the symbol at position 'index' (zero is the oldest).
    pub fn get(&self, index: usize) -> Symbol {
        debug_assert!(index < self.len, "Reading past the end");
        let word = if index / 64 < self.data.len() {
            self.data[index / 64]
        } else {
            self.last
        };
        Symbol::from_bit((word >> (index % 64)) as u8)
    }

    /// Return the last 'n' symbols packed into an integer key, and the
    /// number of symbols that the key actually covers. The most recent
    /// symbol sits in the lowest bit. If the buffer holds fewer than 'n'
    /// symbols the whole buffer is returned.
    pub fn suffix_key(&self, n: usize) -> (u64, usize) {
        debug_assert!(n <= 64, "The key does not fit in a word");
        let take = n.min(self.len);
        let mut key = 0;
        for back in 0..take {
            let bit = self.get(self.len - 1 - back).as_bit() as u64;
            key |= bit << back;
        }
        (key, take)
    }
}

#[test]
fn test_push_and_get() {
    let mut hist = History::new();
    assert!(hist.is_empty());

    // Cross a word boundary to cover the packed part.
    for i in 0..130 {
        hist.push(Symbol::from_bit(i as u8));
    }
    assert_eq!(hist.len(), 130);
    for i in 0..130 {
        assert_eq!(hist.get(i), Symbol::from_bit(i as u8));
    }
}

#[test]
fn test_suffix_key() {
    let mut hist = History::new();
    assert_eq!(hist.suffix_key(5), (0, 0));

    // Push B, W, W. The newest symbol lands in the lowest bit.
    hist.push(Symbol::Black);
    hist.push(Symbol::White);
    hist.push(Symbol::White);
    assert_eq!(hist.suffix_key(2), (0b11, 2));
    assert_eq!(hist.suffix_key(3), (0b011, 3));
    assert_eq!(hist.suffix_key(8), (0b011, 3));
    assert_eq!(hist.suffix_key(0), (0, 0));
}
