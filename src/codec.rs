//! Character-level encoder/decoder over the fixed table in [`crate::vocab`].
//!
//! Both directions are total. Characters outside the table are dropped on
//! encode, and ids without a table entry are dropped on decode. Reserved
//! markers never appear in decoded text.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use tracing::{debug, trace};

use crate::category::CharCategory;
use crate::vocab::{Symbol, TokenId, BEGIN_ID, CHAR_COUNT, END_ID, SYMBOLS, VOCAB_SIZE};

/// One declared character of an input text with its id and category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TokenInfo {
    /// Source character
    #[serde(rename = "char")]
    pub ch: char,
    /// Assigned identifier
    pub id: TokenId,
    /// Display category
    pub category: CharCategory,
}

/// Encode result with input statistics.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Encoding {
    /// Token ids, identical to [`Codec::encode`] output
    pub ids: Vec<TokenId>,
    /// Number of characters in the input
    pub characters: usize,
    /// Input characters with no table entry, in input order
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub dropped: Vec<char>,
}

impl Encoding {
    pub fn token_count(&self) -> usize {
        self.ids.len()
    }
}

/// Immutable bidirectional character table.
///
/// Construction builds the forward and reverse mappings from [`SYMBOLS`];
/// nothing mutates them afterwards, so a single instance can be shared
/// across threads by reference.
#[derive(Debug, Clone)]
pub struct Codec {
    forward: HashMap<Symbol, TokenId>,
    reverse: Vec<Symbol>,
}

impl Default for Codec {
    fn default() -> Self {
        Self::new()
    }
}

impl Codec {
    pub fn new() -> Self {
        let reverse = SYMBOLS.to_vec();
        let forward: HashMap<Symbol, TokenId> = reverse
            .iter()
            .enumerate()
            .map(|(id, symbol)| (*symbol, id as TokenId))
            .collect();

        debug_assert_eq!(forward.len(), VOCAB_SIZE);
        debug!("Built character table with {} symbols", reverse.len());

        Self { forward, reverse }
    }

    /// Encode `text` one character at a time.
    ///
    /// Undeclared characters are skipped. With `wrap_special` the result is
    /// bracketed by [`BEGIN_ID`] and [`END_ID`], even when nothing else was
    /// emitted.
    pub fn encode(&self, text: &str, wrap_special: bool) -> Vec<TokenId> {
        let mut ids = Vec::with_capacity(text.len() + 2);

        if wrap_special {
            ids.push(BEGIN_ID);
        }
        ids.extend(text.chars().filter_map(|c| self.id_of(c)));
        if wrap_special {
            ids.push(END_ID);
        }

        ids
    }

    /// Like [`Codec::encode`], also reporting the input length and the
    /// characters that were dropped.
    pub fn encode_report(&self, text: &str, wrap_special: bool) -> Encoding {
        let mut encoding = Encoding {
            ids: Vec::with_capacity(text.len() + 2),
            ..Encoding::default()
        };

        if wrap_special {
            encoding.ids.push(BEGIN_ID);
        }
        for c in text.chars() {
            encoding.characters += 1;
            match self.id_of(c) {
                Some(id) => encoding.ids.push(id),
                None => encoding.dropped.push(c),
            }
        }
        if wrap_special {
            encoding.ids.push(END_ID);
        }

        if !encoding.dropped.is_empty() {
            trace!("Dropped {} unsupported characters", encoding.dropped.len());
        }

        encoding
    }

    /// Decode a sequence of ids back into text.
    ///
    /// Accepts any integer type so that negative or oversized values can be
    /// passed through unchanged; they contribute nothing to the output, as do
    /// the reserved markers wherever they occur.
    pub fn decode<T>(&self, ids: &[T]) -> String
    where
        T: Copy + TryInto<usize>,
    {
        let mut text = String::with_capacity(ids.len());
        for &id in ids {
            let symbol = id.try_into().ok().and_then(|idx: usize| self.reverse.get(idx));
            match symbol {
                Some(symbol) if symbol.is_reserved() => {}
                Some(symbol) => text.extend(symbol.as_char()),
                None => trace!("Skipping id with no table entry"),
            }
        }
        text
    }

    /// Total number of table entries, reserved markers included.
    pub fn vocab_size(&self) -> usize {
        self.reverse.len()
    }

    /// All plain characters in code point order.
    pub fn supported_chars(&self) -> Vec<char> {
        let mut chars = Vec::with_capacity(CHAR_COUNT);
        chars.extend(self.reverse.iter().filter_map(Symbol::as_char));
        chars.sort_unstable();
        chars
    }

    /// Display category of `c`. Does not consult the table.
    pub fn char_category(&self, c: char) -> CharCategory {
        CharCategory::of(c)
    }

    pub fn id_of(&self, c: char) -> Option<TokenId> {
        self.forward.get(&Symbol::Char(c)).copied()
    }

    pub fn symbol_of(&self, id: TokenId) -> Option<Symbol> {
        self.reverse.get(id as usize).copied()
    }

    /// Every `(id, symbol)` pair in id order.
    pub fn symbols(&self) -> impl Iterator<Item = (TokenId, Symbol)> + '_ {
        self.reverse
            .iter()
            .enumerate()
            .map(|(id, symbol)| (id as TokenId, *symbol))
    }

    /// Per-character view of `text`, skipping undeclared characters.
    pub fn breakdown(&self, text: &str) -> Vec<TokenInfo> {
        text.chars()
            .filter_map(|ch| {
                self.id_of(ch).map(|id| TokenInfo {
                    ch,
                    id,
                    category: CharCategory::of(ch),
                })
            })
            .collect()
    }
}
