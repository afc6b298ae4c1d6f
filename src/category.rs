//! Character groupings used for display.
//!
//! Two groupings exist. [`CharCategory`] classifies an arbitrary character for
//! token breakdowns and does not consult the table. [`VocabKind`] classifies
//! table entries for the vocabulary catalog and separates letter case.

use serde::{Deserialize, Serialize};

use crate::vocab::Symbol;

/// Marks reported as punctuation in token breakdowns.
const BREAKDOWN_PUNCTUATION: &str = ".!?,:;-'\"";

/// Marks grouped as punctuation in the catalog.
const CATALOG_PUNCTUATION: &str = ".!?,:;-'\"`~@#$%^&*()_+=[]{}|\\<>/";

/// Category of a single character.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CharCategory {
    Space,
    Punctuation,
    Number,
    Letter,
    Other,
}

impl CharCategory {
    /// Classify `c`. Total over all characters.
    pub fn of(c: char) -> Self {
        if c == ' ' {
            CharCategory::Space
        } else if BREAKDOWN_PUNCTUATION.contains(c) {
            CharCategory::Punctuation
        } else if c.is_ascii_digit() {
            CharCategory::Number
        } else if c.is_ascii_alphabetic() {
            CharCategory::Letter
        } else {
            CharCategory::Other
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            CharCategory::Space => "space",
            CharCategory::Punctuation => "punctuation",
            CharCategory::Number => "number",
            CharCategory::Letter => "letter",
            CharCategory::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "space" => Some(CharCategory::Space),
            "punctuation" | "punct" => Some(CharCategory::Punctuation),
            "number" | "digit" => Some(CharCategory::Number),
            "letter" => Some(CharCategory::Letter),
            "other" => Some(CharCategory::Other),
            _ => None,
        }
    }
}

/// Catalog grouping of a vocabulary entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum VocabKind {
    Special,
    Space,
    Punctuation,
    Number,
    Lowercase,
    Uppercase,
    Other,
}

impl VocabKind {
    pub const ALL: [VocabKind; 7] = [
        VocabKind::Special,
        VocabKind::Space,
        VocabKind::Punctuation,
        VocabKind::Number,
        VocabKind::Lowercase,
        VocabKind::Uppercase,
        VocabKind::Other,
    ];

    pub fn of(symbol: Symbol) -> Self {
        match symbol {
            Symbol::Begin | Symbol::End => VocabKind::Special,
            Symbol::Char(' ') => VocabKind::Space,
            Symbol::Char(c) if CATALOG_PUNCTUATION.contains(c) => VocabKind::Punctuation,
            Symbol::Char(c) if c.is_ascii_digit() => VocabKind::Number,
            Symbol::Char(c) if c.is_ascii_lowercase() => VocabKind::Lowercase,
            Symbol::Char(c) if c.is_ascii_uppercase() => VocabKind::Uppercase,
            Symbol::Char(_) => VocabKind::Other,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            VocabKind::Special => "special",
            VocabKind::Space => "space",
            VocabKind::Punctuation => "punctuation",
            VocabKind::Number => "number",
            VocabKind::Lowercase => "lowercase",
            VocabKind::Uppercase => "uppercase",
            VocabKind::Other => "other",
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "special" => Some(VocabKind::Special),
            "space" => Some(VocabKind::Space),
            "punctuation" | "punct" => Some(VocabKind::Punctuation),
            "number" | "numbers" | "digit" => Some(VocabKind::Number),
            "lowercase" | "lower" => Some(VocabKind::Lowercase),
            "uppercase" | "upper" => Some(VocabKind::Uppercase),
            "other" => Some(VocabKind::Other),
            _ => None,
        }
    }
}
