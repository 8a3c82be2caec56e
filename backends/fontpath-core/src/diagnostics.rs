// this_file: backends/fontpath-core/src/diagnostics.rs

//! Face diagnostics helpers used for structured debug logging.

use crate::fixed::Fixed;
use crate::types::{FontStyle, HintingMode, TransformationOptions};
use log::{debug, log_enabled, Level};

/// Lightweight snapshot of a face request.
#[derive(Debug)]
pub struct FaceDiagnostics<'a> {
    font: &'a str,
    style: FontStyle,
    size: f64,
    ppem: Fixed,
    hinting: HintingMode,
    options: TransformationOptions,
}

impl<'a> FaceDiagnostics<'a> {
    /// Capture the diagnostic snapshot for a face resolved from `font`.
    pub fn new(
        font: &'a str,
        style: FontStyle,
        ppem: Fixed,
        hinting: HintingMode,
        options: TransformationOptions,
    ) -> Self {
        Self {
            font,
            style,
            size: ppem.to_f64(),
            ppem,
            hinting,
            options,
        }
    }

    fn style_label(&self) -> &'static str {
        match (
            self.style.contains(FontStyle::BOLD),
            self.style.contains(FontStyle::ITALIC),
        ) {
            (false, false) => "regular",
            (true, false) => "bold",
            (false, true) => "italic",
            (true, true) => "bold-italic",
        }
    }

    /// Emit the snapshot at debug level when logging is enabled.
    pub fn log(&self) {
        if log_enabled!(Level::Debug) {
            debug!(
                target: "fontpath::face",
                "font={font} style={style} size={size:.3} ppem={ppem} hinting={hinting} options={options:#x}",
                font = self.font,
                style = self.style_label(),
                size = self.size,
                ppem = self.ppem.0,
                hinting = self.hinting.as_str(),
                options = self.options.bits(),
            );
        }
    }
}
