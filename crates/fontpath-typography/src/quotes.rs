// this_file: crates/fontpath-typography/src/quotes.rs

//! Character classes and the curly quote direction heuristic.

/// Stands in for the code point before the start or after the end of the text.
pub const SENTINEL: char = '\0';

pub fn is_space(c: char) -> bool {
    c.is_whitespace()
}

/// ASCII punctuation: ``!"#$%&'()*+,-./:;<=>?@[\]^_`{|}~``.
pub fn is_punct(c: char) -> bool {
    c.is_ascii_punctuation()
}

pub fn is_word_boundary(c: char) -> bool {
    c == SENTINEL || is_space(c) || is_punct(c)
}

/// Open/closed state per quote kind, kept for one scan of a string.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub(crate) struct QuoteState {
    pub single: bool,
    pub double: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Class {
    Sentinel,
    Space,
    Punct,
    Other,
}

fn classify(c: char) -> Class {
    if c == SENTINEL {
        Class::Sentinel
    } else if is_space(c) {
        Class::Space
    } else if is_punct(c) {
        Class::Punct
    } else {
        Class::Other
    }
}

/// Decide whether the quote between `prev` and `next` opens or closes,
/// update `open`, and return the curly replacement.
pub(crate) fn curly_quote(prev: char, quote: char, next: char, open: &mut bool) -> &'static str {
    use Class::*;

    *open = match (classify(prev), classify(next)) {
        (Sentinel, Sentinel) => !*open,
        (Space, Sentinel) => true,
        (Punct, Sentinel) => false,
        (Other, Sentinel) => false,

        (Sentinel, Space) => false,
        (Space, Space) => !*open,
        (Punct, Space) => false,
        (Other, Space) => false,

        (Sentinel, Punct) => false,
        (Space, Punct) => true,
        (Punct, Punct) => !*open,
        (Other, Punct) => false,

        (Sentinel, Other) => true,
        (Space, Other) => true,
        (Punct, Other) => true,
        // a'b, most likely a contraction
        (Other, Other) => false,
    };

    match (quote, *open) {
        ('"', true) => "\u{201C}",
        ('"', false) => "\u{201D}",
        (_, true) => "\u{2018}",
        (_, false) => "\u{2019}",
    }
}
