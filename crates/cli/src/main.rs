//! MainMarket CLI - demo driver for the page controllers.
//!
//! # Usage
//!
//! ```bash
//! # Render the product grid, optionally filtered
//! mainmarket market products
//! mainmarket market products --category fashion
//! mainmarket market products --search spice
//!
//! # Add demo products to the cart (state persists under the data dir)
//! mainmarket market add 1 1 2
//!
//! # Drive the OTP pipeline
//! mainmarket otp submit 1234
//! mainmarket otp simulate
//! mainmarket otp history
//!
//! # Theme preference
//! mainmarket theme toggle
//! mainmarket theme show
//! ```
//!
//! State lives in `$MAINMARKET_DATA_DIR/state.json` (default
//! `./.mainmarket`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use mainmarket_catalog::CatalogConfig;

mod commands;
mod config;
mod store;

use config::CliConfig;
use store::JsonFileStore;

#[derive(Parser)]
#[command(name = "mainmarket")]
#[command(author, version, about = "MainMarket demo CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Marketplace catalog page
    Market {
        #[command(subcommand)]
        action: MarketAction,
    },
    /// OTP auto-detection page
    Otp {
        #[command(subcommand)]
        action: OtpAction,
    },
    /// Theme preference
    Theme {
        #[command(subcommand)]
        action: ThemeAction,
    },
}

#[derive(Subcommand)]
enum MarketAction {
    /// Render the product grid
    Products {
        /// Restrict to one category (fashion, art, electronics, food, home)
        #[arg(short, long)]
        category: Option<String>,

        /// Case-insensitive search over name, description and seller
        #[arg(short, long)]
        search: Option<String>,
    },
    /// Add products to the cart
    Add {
        /// Product ids from the demo set
        #[arg(required = true)]
        ids: Vec<i32>,
    },
}

#[derive(Subcommand)]
enum OtpAction {
    /// Submit a manually entered code
    Submit {
        /// The 4-6 digit code
        code: String,
    },
    /// Generate and record a test code
    Simulate,
    /// Show the recorded history
    History,
}

#[derive(Subcommand)]
enum ThemeAction {
    /// Flip between light and dark
    Toggle,
    /// Show the effective theme
    Show,
}

#[tokio::main]
async fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "mainmarket=info".into());
    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::from_env()?;
    let store = JsonFileStore::open(&config.data_dir)?;
    let catalog_config = CatalogConfig {
        video_chat_url: config.video_chat_url.clone(),
    };

    let output = match cli.command {
        Commands::Market { action } => match action {
            MarketAction::Products { category, search } => commands::market::products(
                store,
                catalog_config,
                category.as_deref(),
                search.as_deref(),
            )?,
            MarketAction::Add { ids } => commands::market::add(store, catalog_config, &ids)?,
        },
        Commands::Otp { action } => match action {
            OtpAction::Submit { code } => commands::otp::submit(store, &code)?,
            OtpAction::Simulate => commands::otp::simulate(store).await?,
            OtpAction::History => commands::otp::history(store)?,
        },
        Commands::Theme { action } => match action {
            ThemeAction::Toggle => commands::theme::toggle(store)?,
            ThemeAction::Show => commands::theme::show(&store)?,
        },
    };

    emit(&output);
    Ok(())
}

// The rendered fragment or status line is the command's product, not a log
// line, so it goes straight to stdout.
#[allow(clippy::print_stdout)]
fn emit(output: &str) {
    println!("{output}");
}
