use std::path::PathBuf;

use anyhow::Result;
use clap::{Parser, Subcommand};
use rand::{rngs::SmallRng, SeedableRng};
use tracing::{info, Level};
use tracing_subscriber;

use vitrina::{
    config::Config,
    decor,
    embed::{self, VideoSource},
};

#[derive(Parser)]
#[command(
    name = "vitrina",
    version,
    about = "Headless presentation engine for marketing landing pages",
    long_about = "Vitrina resolves video URLs into embed markup, generates the decorative particle layer, and manages the page engine's configuration from the command line."
)]
struct Cli {
    /// Configuration file (optional)
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Resolve a video source into embed markup
    Embed {
        /// Remote video URL (YouTube, Vimeo, or any embeddable page)
        #[arg(short, long)]
        url: Option<String>,

        /// Uploaded video file path
        #[arg(short, long)]
        file: Option<String>,

        /// Poster image shown before playback starts
        #[arg(short, long)]
        poster: Option<String>,
    },

    /// Generate the hero section's particle field for a viewport
    Particles {
        /// Viewport width in pixels
        #[arg(short, long, default_value_t = 1200)]
        width: u32,

        /// Seed for reproducible output
        #[arg(short, long)]
        seed: Option<u64>,
    },

    /// Write the effective configuration to a TOML file
    InitConfig {
        /// Destination path
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { Level::DEBUG } else { Level::INFO };
    tracing_subscriber::fmt()
        .with_max_level(log_level)
        .init();

    info!("Starting Vitrina v{}", env!("CARGO_PKG_VERSION"));

    // Load configuration
    let config = match &cli.config {
        Some(config_path) => {
            info!("Loading configuration from {:?}", config_path);
            Config::from_file(config_path)?
        }
        None => {
            info!("Using default configuration");
            Config::default()
        }
    };
    config.validate()?;

    match cli.command {
        Command::Embed { url, file, poster } => {
            let source = VideoSource::from_parts(url, file, poster);
            if !source.is_available() {
                return Err(anyhow::anyhow!(
                    "No playable video source; pass --url or --file"
                ));
            }

            info!("Resolved source: {:?}", source);
            println!("{}", embed::render(&source));
        }
        Command::Particles { width, seed } => {
            let mut rng = match seed {
                Some(seed) => SmallRng::seed_from_u64(seed),
                None => SmallRng::from_entropy(),
            };

            let particles = decor::particles(width, &config.decor, &mut rng);
            info!(
                "Generated {} particles for a {}px viewport",
                particles.len(),
                width
            );
            println!("{}", serde_json::to_string_pretty(&particles)?);
        }
        Command::InitConfig { path } => {
            config.save_to_file(&path)?;
            info!("Configuration written to {:?}", path);
        }
    }

    Ok(())
}
