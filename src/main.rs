use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use anyhow::Context;
use imagemanip::assets::{AssetCategory, AssetLoader};
use imagemanip::models::AppConfig;
use imagemanip::services::{PaletteSource, TransformPipeline};
use pixel_transform::{parse_operations, Operation};

#[derive(Parser)]
#[command(name = "imagemanip")]
#[command(about = "Grayscale, negative, frames, stickers and crayon cartoonify for images")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply operations to an image, in the order given
    Apply {
        /// Operations: grayscale, addframe, addsticker, cartoonify, negative
        #[arg(required = true, num_args = 1..)]
        operations: Vec<String>,

        /// Input image
        #[arg(short, long)]
        input: PathBuf,

        /// Output image (format from extension)
        #[arg(short, long)]
        output: PathBuf,

        /// Frame image for addframe
        #[arg(long)]
        frame: Option<PathBuf>,

        /// Sticker image for addsticker
        #[arg(long)]
        sticker: Option<PathBuf>,

        /// Palette file for cartoonify
        #[arg(long)]
        palette: Option<PathBuf>,
    },
    /// Load and print the cartoonify palette
    Palette {
        /// Palette file (default: PALETTE_FILE, config, ./palette.txt, embedded)
        #[arg(long)]
        palette: Option<PathBuf>,
    },
    /// Extract the embedded palette and sample config for customization
    Init {
        /// Overwrite existing files
        #[arg(long, short)]
        force: bool,

        /// List embedded assets without extracting
        #[arg(long)]
        list: bool,
    },
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    match cli.command {
        Some(Commands::Apply {
            operations,
            input,
            output,
            frame,
            sticker,
            palette,
        }) => run_apply_command(
            &operations,
            &input,
            &output,
            frame,
            sticker,
            palette.as_deref(),
        ),
        Some(Commands::Palette { palette }) => run_palette_command(palette.as_deref()),
        Some(Commands::Init { force, list }) => run_init_command(force, list),
        None => {
            run_status_command();
            Ok(())
        }
    }
}

fn init_tracing() {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "imagemanip=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().without_time())
        .init();
}

fn env_path(name: &str) -> Option<PathBuf> {
    std::env::var_os(name).map(PathBuf::from)
}

/// Build the asset loader and config the way every command sees them
fn load_environment(cli_palette: Option<&Path>) -> (AssetLoader, AppConfig) {
    let loader = AssetLoader::new(None, env_path("CONFIG_FILE"));
    let config = AppConfig::load_from_assets(&loader);
    let palette_file = config.resolve_palette(cli_palette, env_path("PALETTE_FILE").as_deref());
    (loader.with_palette_file(palette_file), config)
}

fn run_apply_command(
    operations: &[String],
    input: &Path,
    output: &Path,
    frame: Option<PathBuf>,
    sticker: Option<PathBuf>,
    palette: Option<&Path>,
) -> anyhow::Result<()> {
    // Reject unknown names before touching any file
    let operations = parse_operations(operations)?;

    init_tracing();
    let (loader, config) = load_environment(palette);

    let mut pipeline = TransformPipeline::new(PaletteSource::Assets(loader));
    if let Some(frame) = frame {
        pipeline = pipeline.with_frame(frame);
    }
    if let Some(sticker) = sticker {
        pipeline = pipeline.with_sticker(sticker);
    }

    let grid = pipeline
        .process_file(input, output, &operations, &config.output)
        .with_context(|| format!("Failed to process {}", input.display()))?;

    println!(
        "Wrote {} ({}x{})",
        output.display(),
        grid.width(),
        grid.height()
    );
    Ok(())
}

fn run_palette_command(palette: Option<&Path>) -> anyhow::Result<()> {
    init_tracing();
    let (loader, _config) = load_environment(palette);

    let location = loader.palette_location();
    let palette = loader
        .load_palette()
        .with_context(|| format!("Failed to load palette from {location}"))?;

    println!("Palette: {location} ({} colors)", palette.len());
    for (idx, color) in palette.colors().iter().enumerate() {
        let [r, g, b] = color.rgb();
        println!("{idx:3} {r},{g},{b}");
    }
    Ok(())
}

/// Extract embedded assets to filesystem
fn run_init_command(force: bool, list: bool) -> anyhow::Result<()> {
    if list {
        println!("Embedded assets:\n");
        println!("Palette:");
        for f in AssetLoader::list_embedded(AssetCategory::Palette) {
            println!("  {f}");
        }
        println!("\nConfig:");
        for f in AssetLoader::list_embedded(AssetCategory::Config) {
            println!("  {f}");
        }
        return Ok(());
    }

    let loader = AssetLoader::new(None, env_path("CONFIG_FILE"));
    let report = loader.init(&[AssetCategory::Palette, AssetCategory::Config], force)?;

    if !report.written.is_empty() {
        println!("Extracted {} files:", report.written.len());
        for f in &report.written {
            println!("  + {f}");
        }
    }
    if !report.skipped.is_empty() {
        println!(
            "\nSkipped {} existing files (use --force to overwrite):",
            report.skipped.len()
        );
        for f in &report.skipped {
            println!("  - {f}");
        }
    }

    if report.written.is_empty() && report.skipped.is_empty() {
        println!("No files to extract.");
    }

    Ok(())
}

/// Display status and configuration information
fn run_status_command() {
    const VERSION: &str = env!("CARGO_PKG_VERSION");

    let config_file = std::env::var("CONFIG_FILE").ok();
    let palette_file = std::env::var("PALETTE_FILE").ok();

    println!("imagemanip v{VERSION}");
    println!("Packed-color image transforms\n");

    println!("Environment Variables:");
    println!(
        "  CONFIG_FILE  = {}",
        config_file.as_deref().unwrap_or("(not set)")
    );
    println!(
        "  PALETTE_FILE = {}",
        palette_file.as_deref().unwrap_or("(not set)")
    );

    let loader = AssetLoader::new(None, config_file.map(PathBuf::from));
    let config_path = loader.config_path();
    let config_source = if config_path.is_file() {
        config_path.display().to_string()
    } else {
        "embedded".to_string()
    };
    let config = AppConfig::from_yaml(&loader.read_config_string().unwrap_or_default())
        .unwrap_or_default();
    let palette = config.resolve_palette(None, palette_file.as_deref().map(Path::new));
    let loader = loader.with_palette_file(palette);

    println!("\nAsset Sources:");
    println!("  Config:  {config_source}");
    println!("  Palette: {}", loader.palette_location());

    println!("\nUsage: imagemanip apply {} --input <PATH> --output <PATH>", Operation::usage());
    println!("\nCommands:");
    println!("  imagemanip apply     Apply operations to an image");
    println!("  imagemanip palette   Print the cartoonify palette");
    println!("  imagemanip init      Extract embedded assets");
    println!("\nRun 'imagemanip --help' for more details.");
}
