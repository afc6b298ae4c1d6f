//! Parsing and formatting of comma-separated id lists.
//!
//! Each entry is read the way a browser's `parseInt` reads it: surrounding
//! whitespace is ignored, an optional sign is accepted, then the longest run of
//! ASCII digits. A `0x`/`0X` prefix switches to hexadecimal digits, so `"0x16"`
//! reads as `22`. Anything after the digits is ignored, so `"12abc"` reads as
//! `12`. An entry without leading digits is not a number.

use serde::Serialize;
use tracing::warn;

use crate::error::{CodecError, Result};
use crate::vocab::TokenId;

/// An entry that could not be read as a number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RejectedEntry {
    /// 0-based index among the comma-separated entries
    pub position: usize,
    /// The trimmed entry text
    pub token: String,
}

/// Result of lenient parsing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ParsedIds {
    /// Parsed numbers in input order. May hold values outside the table.
    pub ids: Vec<i64>,
    /// Non-empty entries that were skipped
    pub rejected: Vec<RejectedEntry>,
}

/// Parse `input`, skipping entries that are not numbers.
pub fn parse_token_ids(input: &str) -> ParsedIds {
    let mut parsed = ParsedIds::default();

    for (position, raw) in input.split(',').enumerate() {
        let token = raw.trim();
        if token.is_empty() {
            continue;
        }
        match parse_leading_int(token) {
            Some(id) => parsed.ids.push(id),
            None => {
                warn!("Skipping non-numeric token id {:?} at position {}", token, position);
                parsed.rejected.push(RejectedEntry {
                    position,
                    token: token.to_string(),
                });
            }
        }
    }

    parsed
}

/// Parse `input`, failing on the first non-empty entry that is not a number.
pub fn parse_token_ids_strict(input: &str) -> Result<Vec<i64>> {
    let parsed = parse_token_ids(input);
    match parsed.rejected.into_iter().next() {
        Some(entry) => Err(CodecError::InvalidTokenId {
            position: entry.position,
            token: entry.token,
        }),
        None => Ok(parsed.ids),
    }
}

/// Render ids as `"0, 55, 26"`.
pub fn format_token_ids(ids: &[TokenId]) -> String {
    ids.iter()
        .map(|id| id.to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Optional sign, optional `0x`/`0X` prefix, then leading digits in the
/// selected radix. `None` if there are no digits or the value does not fit in
/// an `i64`.
fn parse_leading_int(token: &str) -> Option<i64> {
    let (negative, rest) = match token.as_bytes().first() {
        Some(b'-') => (true, &token[1..]),
        Some(b'+') => (false, &token[1..]),
        _ => (false, token),
    };

    let (radix, rest) = match rest.get(..2) {
        Some("0x" | "0X") => (16, &rest[2..]),
        _ => (10, rest),
    };

    let digits_len = rest
        .bytes()
        .take_while(|b| (*b as char).is_digit(radix))
        .count();
    if digits_len == 0 {
        return None;
    }

    let digits = &rest[..digits_len];
    if negative {
        i64::from_str_radix(&format!("-{}", digits), radix).ok()
    } else {
        i64::from_str_radix(digits, radix).ok()
    }
}
