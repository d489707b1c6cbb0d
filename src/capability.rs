//! Startup probe for the imaging stack
//!
//! The exporter draws only when this crate was built with the `raster`
//! feature and the bundled `image` build can write both PNG and ICO.
//! Otherwise it falls back to writing manual instructions.

use std::fmt;

/// The piece of the imaging stack that is unavailable, plus how to get it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MissingCapability {
    /// Human-readable name of what is missing
    pub name: &'static str,
    /// How to enable it
    pub hint: &'static str,
}

impl fmt::Display for MissingCapability {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} is not available. {}", self.name, self.hint)
    }
}

impl std::error::Error for MissingCapability {}

/// Check that drawing, resampling and PNG/ICO encoding are all compiled in.
#[cfg(feature = "raster")]
pub fn probe() -> Result<(), MissingCapability> {
    use image::ImageFormat;

    if !ImageFormat::Png.writing_enabled() {
        return Err(MissingCapability {
            name: "PNG encoder",
            hint: "Enable the `png` feature of the `image` crate.",
        });
    }
    if !ImageFormat::Ico.writing_enabled() {
        return Err(MissingCapability {
            name: "ICO encoder",
            hint: "Enable the `ico` feature of the `image` crate.",
        });
    }
    Ok(())
}

#[cfg(not(feature = "raster"))]
pub fn probe() -> Result<(), MissingCapability> {
    Err(MissingCapability {
        name: "Imaging stack (image + tiny-skia)",
        hint: "Rebuild with: cargo build --features raster",
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[cfg(feature = "raster")]
    #[test]
    fn probe_passes_with_raster_feature() {
        assert_eq!(probe(), Ok(()));
    }

    #[cfg(not(feature = "raster"))]
    #[test]
    fn probe_fails_without_raster_feature() {
        let missing = probe().unwrap_err();
        assert!(missing.hint.contains("--features raster"));
    }

    #[test]
    fn display_names_the_capability() {
        let m = MissingCapability {
            name: "ICO encoder",
            hint: "Enable it.",
        };
        assert_eq!(m.to_string(), "ICO encoder is not available. Enable it.");
    }
}
