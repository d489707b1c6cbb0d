use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use log::debug;

use recyicon::{ExportConfig, ExportOutcome, Exporter, OutputFormat};

/// Generate the RecyTrack logo at every size the desktop and web apps need.
#[derive(Parser, Debug)]
#[command(name = "recyicon", version, about)]
struct Args {
    /// Directory that electron/icons and frontend/public are created under
    #[arg(long, default_value = ".")]
    root: PathBuf,

    /// Edge of the master render every output is resampled from
    #[arg(long, default_value_t = recyicon::DEFAULT_MASTER_SIZE)]
    master_size: u32,

    /// Suppress per-file status lines and banners
    #[arg(long, short)]
    quiet: bool,
}

fn main() -> anyhow::Result<()> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("recyicon=info"))
        .init();

    let args = Args::parse();
    let config = ExportConfig {
        root: args.root,
        master_size: args.master_size,
        announce: !args.quiet,
    };
    let root = config.root.clone();

    let outcome = Exporter::new(config)
        .run()
        .with_context(|| format!("icon export under {} failed", root.display()))?;

    match outcome {
        ExportOutcome::Exported(report) => {
            for file in report.files.iter().filter(|f| f.format == OutputFormat::Ico) {
                if let Ok(bytes) = std::fs::read(&file.path) {
                    if let Ok(entries) = recyicon::icon::entry_sizes(&bytes) {
                        debug!("{} embeds {:?}", file.path.display(), entries);
                    }
                }
            }
            if !args.quiet {
                println!("\n🎨 All {} icons were generated successfully!", report.len());
            }
        }
        ExportOutcome::Fallback {
            missing,
            instructions,
        } => {
            if !args.quiet {
                println!("❌ {}", missing);
                println!("Manual steps written to {}", instructions.display());
            }
        }
    }

    Ok(())
}
