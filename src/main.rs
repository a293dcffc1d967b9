use std::path::PathBuf;

use clap::{Parser, Subcommand};
use masjid_icon::{
    DEFAULT_OUTPUT, IconRenderer, IconStyle, Platform, Result, announce, generate_variants,
    render_icon,
};

#[derive(Debug, Parser)]
#[command(name = "masjid-icon", version, about = "Render the Masjid app launcher icon")]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Render the master icon (the default when no subcommand is given).
    Render {
        /// Output PNG path. Its directory must already exist.
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        output: PathBuf,

        /// JSON style profile overriding size, scale or colors.
        #[arg(short, long)]
        style: Option<PathBuf>,
    },

    /// Resample the master icon into iOS and Android launcher assets.
    Variants {
        /// Master icon to resample.
        #[arg(short, long, default_value = DEFAULT_OUTPUT)]
        source: PathBuf,

        /// Project root containing the `ios/` and `android/` trees.
        #[arg(short, long, default_value = ".")]
        root: PathBuf,

        #[arg(short, long, value_enum, default_value_t = Platform::All)]
        platform: Platform,
    },
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        None => {
            render_icon()?;
        }
        Some(Command::Render { output, style }) => {
            let style = match style {
                Some(path) => IconStyle::load(&path)?,
                None => IconStyle::default(),
            };
            IconRenderer::new(style).render_to_file(&output)?;
            announce(&output);
        }
        Some(Command::Variants {
            source,
            root,
            platform,
        }) => {
            let report = generate_variants(&source, &root, platform)?;
            println!(
                "✅ {} launcher assets written under {}",
                report.written.len(),
                root.display()
            );
        }
    }

    Ok(())
}
