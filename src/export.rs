//! Multi-size exporter
//!
//! Renders the master once, then resamples it into every entry of
//! [`OUTPUTS`] and writes the result. The table is fixed; nothing about the
//! output set is derived at runtime.

use std::fs;
use std::path::{Path, PathBuf};

use log::{debug, info, warn};
use sha2::{Digest, Sha256};

use crate::capability::{self, MissingCapability};
use crate::{Error, ExportConfig, Result};

pub const ELECTRON_ICONS_DIR: &str = "electron/icons";
pub const FRONTEND_PUBLIC_DIR: &str = "frontend/public";

/// Written instead of any image when the imaging stack is missing.
pub const INSTRUCTIONS_FILE: &str = "CREATE_ICON.txt";

/// Resolutions embedded in the desktop `icon.ico`.
pub const ICO_SIZES: [u32; 6] = [16, 32, 48, 64, 128, 256];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Ico,
}

/// One file in the output set.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OutputSpec {
    /// Logical name, also the file name
    pub name: &'static str,
    pub dir: &'static str,
    /// Pixel edge of every image in the file; more than one only for ICO
    pub sizes: &'static [u32],
    pub format: OutputFormat,
}

impl OutputSpec {
    const fn png(dir: &'static str, name: &'static str, sizes: &'static [u32]) -> Self {
        Self {
            name,
            dir,
            sizes,
            format: OutputFormat::Png,
        }
    }

    const fn ico(dir: &'static str, name: &'static str, sizes: &'static [u32]) -> Self {
        Self {
            name,
            dir,
            sizes,
            format: OutputFormat::Ico,
        }
    }

    /// Path relative to the export root.
    pub fn relative_path(&self) -> PathBuf {
        Path::new(self.dir).join(self.name)
    }
}

/// Every file the exporter writes, in write order.
pub const OUTPUTS: [OutputSpec; 14] = [
    OutputSpec::png(ELECTRON_ICONS_DIR, "icon.png", &[512]),
    OutputSpec::png(ELECTRON_ICONS_DIR, "icon@2x.png", &[1024]),
    OutputSpec::png(ELECTRON_ICONS_DIR, "icon-256.png", &[256]),
    OutputSpec::png(ELECTRON_ICONS_DIR, "icon-128.png", &[128]),
    OutputSpec::png(ELECTRON_ICONS_DIR, "icon-64.png", &[64]),
    OutputSpec::png(ELECTRON_ICONS_DIR, "icon-48.png", &[48]),
    OutputSpec::png(ELECTRON_ICONS_DIR, "icon-32.png", &[32]),
    OutputSpec::png(ELECTRON_ICONS_DIR, "icon-16.png", &[16]),
    OutputSpec::png(FRONTEND_PUBLIC_DIR, "logo16.png", &[16]),
    OutputSpec::ico(FRONTEND_PUBLIC_DIR, "favicon.ico", &[32]),
    OutputSpec::png(FRONTEND_PUBLIC_DIR, "logo32.png", &[32]),
    OutputSpec::png(FRONTEND_PUBLIC_DIR, "logo192.png", &[192]),
    OutputSpec::png(FRONTEND_PUBLIC_DIR, "logo512.png", &[512]),
    OutputSpec::ico(ELECTRON_ICONS_DIR, "icon.ico", &ICO_SIZES),
];

/// A file the exporter wrote.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WrittenFile {
    pub path: PathBuf,
    pub format: OutputFormat,
    pub sizes: Vec<u32>,
    /// Lowercase hex SHA-256 of the bytes on disk
    pub digest: String,
}

/// Everything one export run wrote, in write order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExportReport {
    pub files: Vec<WrittenFile>,
}

impl ExportReport {
    pub fn len(&self) -> usize {
        self.files.len()
    }

    pub fn is_empty(&self) -> bool {
        self.files.is_empty()
    }

    pub fn get(&self, path: impl AsRef<Path>) -> Option<&WrittenFile> {
        self.files.iter().find(|f| f.path == path.as_ref())
    }
}

/// What a run ended up doing.
#[derive(Debug)]
pub enum ExportOutcome {
    /// The full output set was written
    Exported(ExportReport),
    /// The imaging stack is missing; only the instructions file was written
    Fallback {
        missing: MissingCapability,
        instructions: PathBuf,
    },
}

const INSTRUCTIONS: &str = "
To create the RecyTrack icon:

1. Build the icon generator with the imaging stack enabled:
   cargo build --release --features raster

2. Run it from the repository root:
   recyicon

Or use an image editor to create:
- A logo with a green leaf and the recycling symbol
- Format: PNG with a transparent background
- Sizes: 16x16, 32x32, 48x48, 64x64, 128x128, 256x256, 512x512
- Save it as icon.ico (multi-resolution) in this folder
";

pub struct Exporter {
    config: ExportConfig,
}

impl Exporter {
    pub fn new(config: ExportConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ExportConfig {
        &self.config
    }

    /// Probe the imaging stack, then export or fall back.
    pub fn run(&self) -> Result<ExportOutcome> {
        self.run_with(capability::probe())
    }

    /// Like [`Exporter::run`], with the probe result supplied by the caller.
    pub fn run_with(
        &self,
        capability: std::result::Result<(), MissingCapability>,
    ) -> Result<ExportOutcome> {
        match capability {
            Ok(()) => self.render_and_export().map(ExportOutcome::Exported),
            Err(missing) => {
                warn!("{}; writing manual instructions instead", missing);
                let instructions = self.write_instructions()?;
                Ok(ExportOutcome::Fallback {
                    missing,
                    instructions,
                })
            }
        }
    }

    #[cfg(feature = "raster")]
    fn render_and_export(&self) -> Result<ExportReport> {
        let master = crate::rendering::render(self.config.master_size)?;
        self.export(&master)
    }

    #[cfg(not(feature = "raster"))]
    fn render_and_export(&self) -> Result<ExportReport> {
        Err(Error::Raster(
            "built without the `raster` feature; nothing can be drawn".into(),
        ))
    }

    /// Resample `master` into every entry of [`OUTPUTS`] and write them.
    ///
    /// Stops at the first failure; files written before it stay on disk.
    #[cfg(feature = "raster")]
    pub fn export(&self, master: &image::RgbaImage) -> Result<ExportReport> {
        use std::collections::HashMap;

        self.ensure_dirs()?;

        let mut resized: HashMap<u32, image::RgbaImage> = HashMap::new();
        let mut report = ExportReport::default();

        for spec in &OUTPUTS {
            let frames: Vec<image::RgbaImage> = spec
                .sizes
                .iter()
                .map(|&size| {
                    resized
                        .entry(size)
                        .or_insert_with(|| resample(master, size))
                        .clone()
                })
                .collect();

            let bytes = match spec.format {
                OutputFormat::Png => encode_png(&frames[0])?,
                OutputFormat::Ico => crate::icon::encode(&frames)?,
            };

            let written = self.write(spec, &bytes)?;
            report.files.push(written);
        }

        info!("exported {} files from a {}px master", report.len(), master.width());
        Ok(report)
    }

    /// Write the plain-text instructions used when nothing can be drawn.
    pub fn write_instructions(&self) -> Result<PathBuf> {
        let dir = self.config.root.join(ELECTRON_ICONS_DIR);
        fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;

        let path = dir.join(INSTRUCTIONS_FILE);
        fs::write(&path, INSTRUCTIONS).map_err(|e| Error::io(&path, e))?;
        info!("wrote {}", path.display());
        Ok(path)
    }

    #[cfg_attr(not(feature = "raster"), allow(dead_code))]
    fn ensure_dirs(&self) -> Result<()> {
        for dir in [ELECTRON_ICONS_DIR, FRONTEND_PUBLIC_DIR] {
            let dir = self.config.root.join(dir);
            fs::create_dir_all(&dir).map_err(|e| Error::io(&dir, e))?;
        }
        Ok(())
    }

    #[cfg_attr(not(feature = "raster"), allow(dead_code))]
    fn write(&self, spec: &OutputSpec, bytes: &[u8]) -> Result<WrittenFile> {
        let path = self.config.root.join(spec.relative_path());
        fs::write(&path, bytes).map_err(|e| Error::io(&path, e))?;

        let digest = hex::encode(Sha256::digest(bytes));
        info!("wrote {} ({:?} {:?})", path.display(), spec.format, spec.sizes);
        debug!("sha256 {} {}", digest, path.display());
        if self.config.announce {
            println!("✅ Created: {}", spec.relative_path().display());
        }

        Ok(WrittenFile {
            path,
            format: spec.format,
            sizes: spec.sizes.to_vec(),
            digest,
        })
    }
}

/// Lanczos3 resample of the master to `size × size`.
#[cfg(feature = "raster")]
pub fn resample(master: &image::RgbaImage, size: u32) -> image::RgbaImage {
    image::imageops::resize(master, size, size, image::imageops::FilterType::Lanczos3)
}

#[cfg(feature = "raster")]
fn encode_png(img: &image::RgbaImage) -> Result<Vec<u8>> {
    let mut buf = std::io::Cursor::new(Vec::new());
    img.write_to(&mut buf, image::ImageFormat::Png)?;
    Ok(buf.into_inner())
}
