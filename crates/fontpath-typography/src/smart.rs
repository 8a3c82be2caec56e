// this_file: crates/fontpath-typography/src/smart.rs

//! Smart punctuation: a single left-to-right rewrite pass.
//!
//! The cursor walks byte offsets and decodes one code point per step. At each
//! position the first matching rule replaces a run of ASCII bytes and the
//! cursor jumps past the replacement, so substituted text is never scanned
//! again. The previous code point is always the one originally decoded at the
//! previous position.

use crate::quotes::{curly_quote, is_word_boundary, QuoteState, SENTINEL};
use log::trace;

const ELLIPSIS: &str = "\u{2026}";
const EM_DASH: &str = "\u{2014}";
const EN_DASH: &str = "\u{2013}";
const COPYRIGHT: &str = "\u{00A9}";
const REGISTERED: &str = "\u{00AE}";
const TRADEMARK: &str = "\u{2122}";

const SYMBOLS: [(&[u8], &str); 7] = [
    (b"...", ELLIPSIS),
    (b". . .", ELLIPSIS),
    (b"---", EM_DASH),
    (b"--", EN_DASH),
    (b"(c)", COPYRIGHT),
    (b"(r)", REGISTERED),
    (b"(tm)", TRADEMARK),
];

/// Rewrite plain ASCII punctuation into its typographic form.
pub fn smart_typography(text: &str) -> String {
    let mut s = text.to_string();
    let mut quotes = QuoteState::default();
    let mut replaced = 0usize;

    let mut prev;
    let mut current = SENTINEL;
    let mut i = 0usize;
    let mut size = 0usize;
    loop {
        prev = current;
        i += size;
        let Some(c) = s.get(i..).and_then(|rest| rest.chars().next()) else {
            break;
        };
        current = c;
        size = c.len_utf8();

        if let Some((len, target)) = rule_at(&s, i, prev, &mut quotes) {
            s.replace_range(i..i + len, target);
            size = target.len();
            replaced += 1;
        }
    }

    if replaced > 0 {
        trace!(target: "fontpath::typography", "{} smart substitutions", replaced);
    }
    s
}

/// First rule matching at byte offset `i`: the number of bytes to replace and
/// their replacement.
fn rule_at(
    s: &str,
    i: usize,
    prev: char,
    quotes: &mut QuoteState,
) -> Option<(usize, &'static str)> {
    let rest = &s.as_bytes()[i..];

    if let Some((pattern, target)) = SYMBOLS.iter().find(|(p, _)| rest.starts_with(p)) {
        return Some((pattern.len(), *target));
    }

    match rest[0] {
        b'"' => {
            let next = char_at(s, i + 1);
            return Some((1, curly_quote(prev, '"', next, &mut quotes.double)));
        }
        b'\'' => {
            let next = char_at(s, i + 1);
            return Some((1, curly_quote(prev, '\'', next, &mut quotes.single)));
        }
        _ => {}
    }

    if rest.len() < 3 || rest[1] != b'/' {
        return None;
    }
    let next = char_at(s, i + 3);
    if !(is_word_boundary(prev) && prev != '/' && is_word_boundary(next) && next != '/') {
        return None;
    }
    let target = match (rest[0], rest[2]) {
        (b'1', b'2') => "\u{00BD}",
        (b'1', b'4') => "\u{00BC}",
        (b'3', b'4') => "\u{00BE}",
        (b'+', b'-') => "\u{00B1}",
        _ => return None,
    };
    Some((3, target))
}

/// Code point starting at byte offset `i`, or the sentinel past the end.
fn char_at(s: &str, i: usize) -> char {
    s.get(i..)
        .and_then(|rest| rest.chars().next())
        .unwrap_or(SENTINEL)
}
