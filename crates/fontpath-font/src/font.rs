// this_file: crates/fontpath-font/src/font.rs

//! Loaded fonts: parsed backend, identity and ligature tables.

use crate::face::FontFace;
use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use fontpath_core::{
    to_fixed, FaceDiagnostics, FaceOptions, FontBackend, FontStyle, GlyphBuffer, Result,
    TransformationOptions,
};
use fontpath_typography::{common_ligature_candidates, Ligature, LigatureKind, LigatureTables};
use log::debug;
use std::fmt;

/// A parsed font together with its identity and typographic settings.
pub struct Font {
    name: String,
    style: FontStyle,
    mimetype: String,
    backend: Box<dyn FontBackend>,
    options: TransformationOptions,
    ligatures: LigatureTables,
}

impl Font {
    /// Load a font from memory.
    ///
    /// Bytes that are not a supported font container fail with one of the
    /// parse-failure errors (see [`fontpath_core::FontError::is_parse_failure`]).
    pub fn load(name: impl Into<String>, style: FontStyle, data: Vec<u8>) -> Result<Self> {
        Self::load_index(name, style, data, 0)
    }

    /// Load face `index` of a font container held in memory.
    pub fn load_index(
        name: impl Into<String>,
        style: FontStyle,
        data: Vec<u8>,
        index: u32,
    ) -> Result<Self> {
        let name = name.into();
        let (mimetype, backend) = fontpath_ttf::parse_font(&name, data, index)?;
        Ok(Self::from_backend(name, style, mimetype, Box::new(backend)))
    }

    /// Build a font over an already parsed backend.
    ///
    /// Common ligatures are kept only when every code point of their
    /// replacement maps to a glyph.
    pub fn from_backend(
        name: impl Into<String>,
        style: FontStyle,
        mimetype: impl Into<String>,
        backend: Box<dyn FontBackend>,
    ) -> Self {
        let name = name.into();
        let mut buf = GlyphBuffer::new();
        let candidates = common_ligature_candidates();
        let offered = candidates.len();
        let common: Vec<Ligature> = candidates
            .into_iter()
            .filter(|ligature| renders(backend.as_ref(), &mut buf, &ligature.replacement))
            .collect();
        debug!(
            target: "fontpath::font",
            "font '{}': {} of {} common ligatures renderable",
            name,
            common.len(),
            offered
        );

        Self {
            name,
            style,
            mimetype: mimetype.into(),
            backend,
            options: TransformationOptions::empty(),
            ligatures: LigatureTables {
                common,
                ..LigatureTables::default()
            },
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn style(&self) -> FontStyle {
        self.style
    }

    pub fn mimetype(&self) -> &str {
        &self.mimetype
    }

    /// The font file as loaded.
    pub fn data(&self) -> &[u8] {
        self.backend.data()
    }

    pub(crate) fn backend(&self) -> &dyn FontBackend {
        self.backend.as_ref()
    }

    pub fn transformation_options(&self) -> TransformationOptions {
        self.options
    }

    /// Replace the active transformation options. Unknown bits are kept but
    /// have no effect.
    pub fn set_transformation_options(&mut self, options: TransformationOptions) {
        self.options = options;
    }

    pub fn ligatures(&self) -> &LigatureTables {
        &self.ligatures
    }

    /// Replace one ligature table wholesale.
    pub fn set_ligatures(&mut self, kind: LigatureKind, table: Vec<Ligature>) {
        self.ligatures.replace(kind, table);
    }

    /// Face at `size` points, measured in millimetres and unhinted.
    pub fn face(&self, size: f64) -> FontFace<'_> {
        self.face_with(size, &FaceOptions::default())
    }

    /// Face at `size` points using the unit scale and hinting in `options`.
    pub fn face_with(&self, size: f64, options: &FaceOptions) -> FontFace<'_> {
        let ppem = to_fixed(size * options.units_per_point);
        FaceDiagnostics::new(&self.name, self.style, ppem, options.hinting, self.options).log();
        FontFace::new(self, ppem, options.hinting)
    }

    /// Embed the raw font as a `data:` URI.
    pub fn to_data_uri(&self) -> String {
        let encoded = BASE64.encode(self.data());
        let mut uri = String::with_capacity(encoded.len() + self.mimetype.len() + 13);
        uri.push_str("data:");
        uri.push_str(&self.mimetype);
        uri.push_str(";base64,");
        uri.push_str(&encoded);
        uri
    }

    /// Rewrite `text` into its typeset form using this font's ligature
    /// tables and transformation options.
    pub fn transform(&self, text: &str, allow_multi_char_combos: bool) -> String {
        fontpath_typography::transform(
            text,
            &self.ligatures,
            self.options,
            allow_multi_char_combos,
        )
    }
}

impl fmt::Debug for Font {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Font")
            .field("name", &self.name)
            .field("style", &self.style)
            .field("mimetype", &self.mimetype)
            .field("bytes", &self.data().len())
            .field("options", &self.options)
            .finish_non_exhaustive()
    }
}

fn renders(backend: &dyn FontBackend, buf: &mut GlyphBuffer, text: &str) -> bool {
    text.chars().all(|c| backend.glyph_index(buf, c).is_some())
}
