//! Locale-style string ordering for suggestion lists.
//!
//! Approximates root-locale collation closely enough for label strings:
//! comparison is case-insensitive first, with whitespace and punctuation
//! sorting before digits and digits before letters. ASCII punctuation and
//! symbols follow the root collation order rather than code point order.
//! Strings that differ
//! only in case put the lowercase form first; anything still tied falls
//! back to code point order so the result is a total order.

use std::cmp::Ordering;

/// Compare two strings the way a user-facing sorted list expects.
#[must_use]
pub fn locale_cmp(a: &str, b: &str) -> Ordering {
    primary_keys(a)
        .cmp(primary_keys(b))
        .then_with(|| case_order(a, b))
        .then_with(|| a.cmp(b))
}

/// ASCII punctuation and symbols in root collation order.
const PUNCTUATION_ORDER: &str = "_-,;:!?.'\"()[]{}@*/\\&#%`^+<=>|~$";

fn primary_keys(s: &str) -> impl Iterator<Item = (u8, u32, char)> + '_ {
    s.chars()
        .flat_map(char::to_lowercase)
        .map(|c| (char_class(c), punctuation_rank(c), c))
}

/// Position in [`PUNCTUATION_ORDER`]; characters outside the table share
/// the last rank and fall back to code point order.
fn punctuation_rank(c: char) -> u32 {
    PUNCTUATION_ORDER
        .find(c)
        .map_or(u32::MAX, |i| u32::try_from(i).unwrap_or(u32::MAX))
}

fn char_class(c: char) -> u8 {
    if c.is_whitespace() {
        0
    } else if c.is_numeric() {
        2
    } else if c.is_alphabetic() {
        3
    } else {
        1
    }
}

fn case_order(a: &str, b: &str) -> Ordering {
    for (x, y) in a.chars().zip(b.chars()) {
        if x == y {
            continue;
        }
        return match (x.is_lowercase(), y.is_lowercase()) {
            (true, false) => Ordering::Less,
            (false, true) => Ordering::Greater,
            _ => Ordering::Equal,
        };
    }
    Ordering::Equal
}
