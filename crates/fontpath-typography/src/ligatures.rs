// this_file: crates/fontpath-typography/src/ligatures.rs

//! Ligature substitution tables.

use serde::{Deserialize, Serialize};

/// A literal substitution of `source` by `replacement`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Ligature {
    pub source: String,
    pub replacement: String,
}

impl Ligature {
    pub fn new(source: impl Into<String>, replacement: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            replacement: replacement.into(),
        }
    }

    /// True when the source is a single code point.
    pub fn is_single_char(&self) -> bool {
        let mut chars = self.source.chars();
        chars.next().is_some() && chars.next().is_none()
    }
}

/// Which of the four ligature tables an entry belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LigatureKind {
    Required,
    Common,
    Discretionary,
    Historical,
}

/// The ligature tables of a font, each applied in order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LigatureTables {
    pub required: Vec<Ligature>,
    pub common: Vec<Ligature>,
    pub discretionary: Vec<Ligature>,
    pub historical: Vec<Ligature>,
}

impl LigatureTables {
    pub fn get(&self, kind: LigatureKind) -> &[Ligature] {
        match kind {
            LigatureKind::Required => &self.required,
            LigatureKind::Common => &self.common,
            LigatureKind::Discretionary => &self.discretionary,
            LigatureKind::Historical => &self.historical,
        }
    }

    /// Swap in a whole table; individual entries are never edited in place.
    pub fn replace(&mut self, kind: LigatureKind, table: Vec<Ligature>) -> Vec<Ligature> {
        let slot = match kind {
            LigatureKind::Required => &mut self.required,
            LigatureKind::Common => &mut self.common,
            LigatureKind::Discretionary => &mut self.discretionary,
            LigatureKind::Historical => &mut self.historical,
        };
        std::mem::replace(slot, table)
    }
}

/// Latin f-ligatures offered to every font, longest source first.
///
/// A font keeps only those whose replacement glyph it can render.
pub fn common_ligature_candidates() -> Vec<Ligature> {
    vec![
        Ligature::new("ffi", "\u{FB03}"),
        Ligature::new("ffl", "\u{FB04}"),
        Ligature::new("ff", "\u{FB00}"),
        Ligature::new("fi", "\u{FB01}"),
        Ligature::new("fl", "\u{FB02}"),
    ]
}

/// Replace every occurrence of every entry, in table order.
pub(crate) fn replace_all(mut text: String, table: &[Ligature]) -> String {
    for ligature in table {
        if ligature.source.is_empty() || !text.contains(ligature.source.as_str()) {
            continue;
        }
        text = text.replace(ligature.source.as_str(), &ligature.replacement);
    }
    text
}

/// Like [`replace_all`], but multi-character sources need `allow_multi_char_combos`.
pub(crate) fn replace_optional(
    text: String,
    table: &[Ligature],
    allow_multi_char_combos: bool,
) -> String {
    if allow_multi_char_combos {
        return replace_all(text, table);
    }
    table
        .iter()
        .filter(|ligature| ligature.is_single_char())
        .fold(text, |text, ligature| {
            replace_all(text, std::slice::from_ref(ligature))
        })
}
