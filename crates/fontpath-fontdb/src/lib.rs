// this_file: crates/fontpath-fontdb/src/lib.rs

//! Loading fonts from files and from the fonts installed on the system.

use fontdb::{Database, Family, Query, Style, Weight};
use fontpath_core::{FontError, FontStyle, Result};
use fontpath_font::Font;
use log::{debug, info, warn};
use std::path::Path;

/// Read the font file at `path` and load its first face.
pub fn load_font_file(
    name: impl Into<String>,
    style: FontStyle,
    path: impl AsRef<Path>,
) -> Result<Font> {
    let path = path.as_ref();
    let data = std::fs::read(path).map_err(|e| FontError::font_load(path, e))?;
    debug!(
        target: "fontpath::font",
        "read {} bytes from {}",
        data.len(),
        path.display()
    );
    Font::load(name, style, data)
}

/// Load the installed face whose family is `name`, matching the weight and
/// slant requested by `style`.
pub fn load_local_font(name: &str, style: FontStyle) -> Result<Font> {
    SystemFonts::new().load(name, style)
}

/// Font database used for family lookups.
pub struct SystemFonts {
    db: Database,
}

impl SystemFonts {
    /// Scan the fonts installed on this machine.
    pub fn new() -> Self {
        let mut db = Database::new();
        db.load_system_fonts();
        info!(target: "fontpath::font", "indexed {} system font faces", db.len());
        Self { db }
    }

    /// Look up fonts in an already populated database.
    pub fn from_database(db: Database) -> Self {
        Self { db }
    }

    pub fn len(&self) -> usize {
        self.db.len()
    }

    pub fn is_empty(&self) -> bool {
        self.db.is_empty()
    }

    /// Find the face for `name` and `style` and load it as a [`Font`].
    pub fn load(&self, name: &str, style: FontStyle) -> Result<Font> {
        let families = [Family::Name(name)];
        let query = Query {
            families: &families,
            weight: if style.contains(FontStyle::BOLD) {
                Weight::BOLD
            } else {
                Weight::NORMAL
            },
            style: if style.contains(FontStyle::ITALIC) {
                Style::Italic
            } else {
                Style::Normal
            },
            ..Query::default()
        };

        let not_found = || FontError::FontNotFound {
            name: name.to_string(),
        };
        let id = self.db.query(&query).ok_or_else(not_found)?;
        let (data, index) = self
            .db
            .with_face_data(id, |data, index| (data.to_vec(), index))
            .ok_or_else(not_found)?;

        if let Some(face) = self.db.face(id) {
            debug!(
                target: "fontpath::font",
                "'{}' resolved to {} (face {})",
                name,
                face.post_script_name,
                index
            );
        }
        Font::load_index(name, style, data, index).map_err(|err| {
            if err.is_parse_failure() {
                warn!(
                    target: "fontpath::font",
                    "installed face for '{}' is unusable: {}",
                    name,
                    err
                );
            }
            err
        })
    }
}

impl Default for SystemFonts {
    fn default() -> Self {
        Self::new()
    }
}
