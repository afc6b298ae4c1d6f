//! The fixed symbol table.
//!
//! Every identifier is derived from a symbol's position in [`SYMBOLS`], so the
//! numbering is part of the public contract: callers persist raw ids and expect
//! them to decode the same way on every run.
//!
//! | ids    | symbols                          |
//! |--------|----------------------------------|
//! | 0, 1   | `<BOS>`, `<EOS>`                 |
//! | 2..=11 | space, `.` `,` `!` `?` `:` `;` `-` `'` `"` |
//! | 12..=21| `0`..`9`                         |
//! | 22..=47| `a`..`z`                         |
//! | 48..=73| `A`..`Z`                         |

use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier assigned to a [`Symbol`].
pub type TokenId = u32;

/// Id of the begin-of-sequence marker.
pub const BEGIN_ID: TokenId = 0;

/// Id of the end-of-sequence marker.
pub const END_ID: TokenId = 1;

/// Number of entries in the table, reserved markers included.
pub const VOCAB_SIZE: usize = 74;

/// Number of plain characters in the table.
pub const CHAR_COUNT: usize = VOCAB_SIZE - 2;

/// Display label of the begin marker.
pub const BEGIN_LABEL: &str = "<BOS>";

/// Display label of the end marker.
pub const END_LABEL: &str = "<EOS>";

/// One entry of the vocabulary.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Symbol {
    /// Begin-of-sequence marker
    Begin,
    /// End-of-sequence marker
    End,
    /// A plain character
    Char(char),
}

impl Symbol {
    /// True for the begin/end markers, which never appear in decoded text.
    pub fn is_reserved(&self) -> bool {
        matches!(self, Symbol::Begin | Symbol::End)
    }

    /// The character carried by this symbol, `None` for the reserved markers.
    pub fn as_char(&self) -> Option<char> {
        match self {
            Symbol::Char(c) => Some(*c),
            Symbol::Begin | Symbol::End => None,
        }
    }

    /// Text shown for this symbol in listings.
    pub fn label(&self) -> String {
        match self {
            Symbol::Begin => BEGIN_LABEL.to_string(),
            Symbol::End => END_LABEL.to_string(),
            Symbol::Char(c) => c.to_string(),
        }
    }
}

impl fmt::Display for Symbol {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Symbol::Begin => f.write_str(BEGIN_LABEL),
            Symbol::End => f.write_str(END_LABEL),
            Symbol::Char(c) => write!(f, "{}", c),
        }
    }
}

/// Canonical declaration order. The index of an entry is its [`TokenId`].
pub const SYMBOLS: [Symbol; VOCAB_SIZE] = [
    Symbol::Begin,
    Symbol::End,
    // Space and common punctuation
    Symbol::Char(' '),
    Symbol::Char('.'),
    Symbol::Char(','),
    Symbol::Char('!'),
    Symbol::Char('?'),
    Symbol::Char(':'),
    Symbol::Char(';'),
    Symbol::Char('-'),
    Symbol::Char('\''),
    Symbol::Char('"'),
    // Digits
    Symbol::Char('0'),
    Symbol::Char('1'),
    Symbol::Char('2'),
    Symbol::Char('3'),
    Symbol::Char('4'),
    Symbol::Char('5'),
    Symbol::Char('6'),
    Symbol::Char('7'),
    Symbol::Char('8'),
    Symbol::Char('9'),
    // Lowercase
    Symbol::Char('a'),
    Symbol::Char('b'),
    Symbol::Char('c'),
    Symbol::Char('d'),
    Symbol::Char('e'),
    Symbol::Char('f'),
    Symbol::Char('g'),
    Symbol::Char('h'),
    Symbol::Char('i'),
    Symbol::Char('j'),
    Symbol::Char('k'),
    Symbol::Char('l'),
    Symbol::Char('m'),
    Symbol::Char('n'),
    Symbol::Char('o'),
    Symbol::Char('p'),
    Symbol::Char('q'),
    Symbol::Char('r'),
    Symbol::Char('s'),
    Symbol::Char('t'),
    Symbol::Char('u'),
    Symbol::Char('v'),
    Symbol::Char('w'),
    Symbol::Char('x'),
    Symbol::Char('y'),
    Symbol::Char('z'),
    // Uppercase
    Symbol::Char('A'),
    Symbol::Char('B'),
    Symbol::Char('C'),
    Symbol::Char('D'),
    Symbol::Char('E'),
    Symbol::Char('F'),
    Symbol::Char('G'),
    Symbol::Char('H'),
    Symbol::Char('I'),
    Symbol::Char('J'),
    Symbol::Char('K'),
    Symbol::Char('L'),
    Symbol::Char('M'),
    Symbol::Char('N'),
    Symbol::Char('O'),
    Symbol::Char('P'),
    Symbol::Char('Q'),
    Symbol::Char('R'),
    Symbol::Char('S'),
    Symbol::Char('T'),
    Symbol::Char('U'),
    Symbol::Char('V'),
    Symbol::Char('W'),
    Symbol::Char('X'),
    Symbol::Char('Y'),
    Symbol::Char('Z'),
];
