// this_file: crates/fontpath-typography/src/lib.rs

//! Typographic text transformation for fontpath.
//!
//! Text is rewritten into its typeset form before glyph lookup: ligature
//! tables first, then smart punctuation. Which stages run is decided by
//! [`TransformationOptions`]. The engine never fails; input it cannot improve
//! comes back unchanged.

pub mod ligatures;
pub mod quotes;
pub mod smart;

pub use fontpath_core::TransformationOptions;
pub use ligatures::{common_ligature_candidates, Ligature, LigatureKind, LigatureTables};
pub use quotes::{is_punct, is_space, is_word_boundary};
pub use smart::smart_typography;

/// Apply ligatures and smart punctuation to `text`.
///
/// Required ligatures run unless `NO_REQUIRED_LIGATURES` is set. Each optional
/// table runs when its flag is set; its multi-character entries additionally
/// need `allow_multi_char_combos`. Smart punctuation runs unless
/// `NO_TYPOGRAPHY` is set.
pub fn transform(
    text: &str,
    tables: &LigatureTables,
    options: TransformationOptions,
    allow_multi_char_combos: bool,
) -> String {
    let mut s = text.to_string();

    if !options.contains(TransformationOptions::NO_REQUIRED_LIGATURES) {
        s = ligatures::replace_all(s, &tables.required);
    }

    let optional = [
        (TransformationOptions::COMMON_LIGATURES, &tables.common),
        (TransformationOptions::DISCRETIONARY_LIGATURES, &tables.discretionary),
        (TransformationOptions::HISTORICAL_LIGATURES, &tables.historical),
    ];
    for (flag, table) in optional {
        if options.contains(flag) {
            s = ligatures::replace_optional(s, table, allow_multi_char_combos);
        }
    }

    if !options.contains(TransformationOptions::NO_TYPOGRAPHY) {
        s = smart_typography(&s);
    }
    s
}
