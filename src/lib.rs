//! RecyTrack icon generator
//!
//! Procedurally draws the RecyTrack logo (a leaf with veins over a green disc,
//! ringed by three curved recycle arrows) and exports it as the PNG set,
//! favicon set and multi-resolution `.ico` files consumed by the Electron
//! shell and the web frontend.
//!
//! # Features
//!
//! - **raster** (default): drawing via `tiny-skia`, Lanczos3 resampling and
//!   PNG/ICO encoding via `image`. Without it the exporter writes manual
//!   instructions instead of images.
//!
//! # Example
//!
//! ```no_run
//! use recyicon::{ExportConfig, ExportOutcome, Exporter};
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let exporter = Exporter::new(ExportConfig::new("."));
//! match exporter.run()? {
//!     ExportOutcome::Exported(report) => println!("wrote {} files", report.len()),
//!     ExportOutcome::Fallback { missing, .. } => println!("{}", missing),
//! }
//! # Ok(())
//! # }
//! ```

use std::path::PathBuf;

pub mod capability;
pub mod error;
pub mod export;
pub mod icon;
pub mod rendering;

pub use capability::MissingCapability;
pub use error::{Error, Result};
pub use export::{ExportOutcome, ExportReport, Exporter, OutputFormat, OutputSpec, WrittenFile};

#[cfg(feature = "raster")]
pub use rendering::render;

/// Master render size; every output is resampled from this.
pub const DEFAULT_MASTER_SIZE: u32 = 1024;

/// Configuration for an export run
///
/// # Examples
///
/// ```
/// let cfg = recyicon::ExportConfig::default();
/// assert_eq!(cfg.master_size, 1024);
/// assert!(cfg.announce);
/// ```
#[derive(Debug, Clone)]
pub struct ExportConfig {
    /// Directory that `electron/` and `frontend/` are resolved against
    pub root: PathBuf,
    /// Edge of the master render in pixels
    pub master_size: u32,
    /// Print one status line per written file
    pub announce: bool,
}

impl ExportConfig {
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self {
            root: root.into(),
            ..Default::default()
        }
    }
}

impl Default for ExportConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("."),
            master_size: DEFAULT_MASTER_SIZE,
            announce: true,
        }
    }
}
