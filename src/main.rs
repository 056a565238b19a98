//! # Escudo CLI
//!
//! Command-line interface for composing coins and coats of arms.
//!
//! ## Usage
//!
//! ```bash
//! # Compose a coat of arms from a shield and up to four icons
//! escudo emblem --output emblem.svg shield.svg lion.svg eagle.svg
//!
//! # Stamp it onto a coin face with a crown and inscriptions
//! escudo coin --output tails.svg --normalized --crown crown.svg \
//!     --left-text "ONE ESCUDO" --right-text "MMXXVI" emblem.svg
//!
//! # A heads face: bare icon center, laurels instead of text
//! escudo coin --output heads.svg --laurels laurels.svg lion.svg
//!
//! # Start the web generator
//! escudo serve --listen 0.0.0.0:8080 --assets ./assets --output ./output
//! ```

use clap::{Parser, Subcommand};
use std::path::PathBuf;

use escudo::{
    EscudoError,
    compose::{CoinSpec, compose_coin, compose_emblem},
    server::{ServerConfig, serve},
};

/// Escudo - heraldic coin and coat-of-arms generator
#[derive(Parser, Debug)]
#[command(name = "escudo")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Compose a coat-of-arms emblem from a shield and up to four icons
    Emblem {
        /// Output SVG path
        #[arg(long, default_value = "emblem.svg")]
        output: PathBuf,

        /// Shield fragment
        shield: PathBuf,

        /// Quadrant icon fragments, upper-left first (up to four)
        icons: Vec<PathBuf>,
    },

    /// Compose one coin face
    Coin {
        /// Output SVG path
        #[arg(long, default_value = "coin.svg")]
        output: PathBuf,

        /// Center fragment (an icon, or an emblem from `escudo emblem`)
        center: PathBuf,

        /// Crown fragment placed above the center
        #[arg(long)]
        crown: Option<PathBuf>,

        /// Laurel fragment spanning the rim (replaces the inscriptions)
        #[arg(long)]
        laurels: Option<PathBuf>,

        /// Left-half inscription
        #[arg(long, default_value = "")]
        left_text: String,

        /// Right-half inscription
        #[arg(long, default_value = "")]
        right_text: String,

        /// Treat the center as already normalized (emblem output)
        #[arg(long)]
        normalized: bool,

        /// Overlay center crosshair guides
        #[arg(long)]
        debug: bool,

        /// Skip the opaque white background
        #[arg(long)]
        no_background: bool,
    },

    /// Start the HTTP generator server
    Serve {
        /// Address to listen on
        #[arg(long, default_value = "0.0.0.0:8080")]
        listen: String,

        /// Fragment assets directory
        #[arg(long, default_value = "assets")]
        assets: PathBuf,

        /// Directory generated files are written to
        #[arg(long, default_value = "output")]
        output: PathBuf,
    },
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), EscudoError> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Emblem {
            output,
            shield,
            icons,
        } => {
            compose_emblem(&output, &shield, &icons)?;
            println!("Wrote {}", output.display());
        }

        Commands::Coin {
            output,
            center,
            crown,
            laurels,
            left_text,
            right_text,
            normalized,
            debug,
            no_background,
        } => {
            let spec = CoinSpec {
                center,
                crown,
                laurels,
                left_text,
                right_text,
                center_normalized: normalized,
                debug,
                with_background: !no_background,
            };
            compose_coin(&output, &spec)?;
            println!("Wrote {}", output.display());
        }

        Commands::Serve {
            listen,
            assets,
            output,
        } => {
            let config = ServerConfig {
                assets_dir: assets,
                output_dir: output,
                listen_addr: listen,
            };
            tokio::runtime::Runtime::new()?.block_on(serve(config))?;
        }
    }

    Ok(())
}
