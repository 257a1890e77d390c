pub mod history;
pub mod models;
pub mod session;

/// One of the two values that the caller can record. The labels are
/// arbitrary; the caller decides which real-world choice maps to which
/// symbol.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum Symbol {
    Black,
    White,
}

impl Symbol {
    /// Return the bit encoding of the symbol. White is 1 and Black is 0.
    pub fn as_bit(&self) -> u8 {
        match self {
            Symbol::Black => 0,
            Symbol::White => 1,
        }
    }

    /// Construct a symbol from the lowest bit of 'bit'.
    pub fn from_bit(bit: u8) -> Symbol {
        if bit & 1 == 1 {
            Symbol::White
        } else {
            Symbol::Black
        }
    }

    /// Return the other symbol.
    pub fn flipped(&self) -> Symbol {
        match self {
            Symbol::Black => Symbol::White,
            Symbol::White => Symbol::Black,
        }
    }
}

#[test]
fn test_symbol_bits() {
    assert_eq!(Symbol::from_bit(0), Symbol::Black);
    assert_eq!(Symbol::from_bit(1), Symbol::White);
    assert_eq!(Symbol::from_bit(0xfe), Symbol::Black);
    assert_eq!(Symbol::Black.as_bit(), 0);
    assert_eq!(Symbol::White.as_bit(), 1);
    assert_eq!(Symbol::White.flipped(), Symbol::Black);
    assert_eq!(Symbol::Black.flipped().flipped(), Symbol::Black);
}
