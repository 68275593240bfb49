//! # Waxchat - Terminal Chat for Halawa Wax
//!
//! A cozy terminal client for WAXBOT, the Halawa Wax beauty assistant.
//! Ask about products, services, and aftercare; get product cards and a
//! human handoff when the bot is out of its depth.

#[macro_use]
extern crate rust_i18n;

// Load locale files from `locales/` directory, default to English
i18n!("locales", fallback = "en");

mod app;
mod chat;
mod config;
pub mod constants;
mod ui;
mod utils;

use std::fs::File;

use anyhow::Result;
use clap::Parser;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use config::Config;

/// Waxchat - Terminal chat client for the Halawa Wax beauty assistant
#[derive(Parser, Debug)]
#[command(
    name = "waxchat",
    version,
    about = "Chat with WAXBOT, the Halawa Wax beauty assistant, from your terminal"
)]
struct Cli {
    /// Assistant server base URL (e.g. "http://localhost:7860")
    #[arg(long, short = 's', value_name = "URL")]
    server: Option<String>,

    /// Color theme (blossom, light, lavender, noir)
    #[arg(long, short = 't')]
    theme: Option<String>,

    /// UI language (en, es)
    #[arg(long, short = 'l', value_name = "LANG")]
    lang: Option<String>,

    /// Name to introduce yourself with
    #[arg(long, short = 'n', value_name = "NAME")]
    user_name: Option<String>,

    /// Start without the welcome greeting
    #[arg(long)]
    no_greeting: bool,
}

/// Set up file logging. The terminal itself is in raw mode while the app
/// runs, so diagnostics go to a file instead of stderr.
fn init_logging() {
    if let Err(e) = std::fs::create_dir_all(constants::data_dir()) {
        eprintln!("Warning: could not create data dir: {}", e);
        return;
    }
    match File::create(constants::log_file_path()) {
        Ok(log_file) => {
            let filter = EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("info,waxchat=debug"));
            tracing_subscriber::registry()
                .with(filter)
                .with(
                    tracing_subscriber::fmt::layer()
                        .with_target(true)
                        .with_ansi(false)
                        .with_writer(std::sync::Mutex::new(log_file)),
                )
                .init();
        }
        Err(e) => eprintln!("Warning: could not open log file: {}", e),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    // Optional .env next to the config file; may set WAXCHAT_SERVER_URL.
    // Must load before Config so the env override is visible.
    let _ = dotenvy::from_path(constants::env_file_path());

    init_logging();

    // Load and apply CLI overrides to config
    let mut config = Config::load();
    if let Some(ref server) = cli.server {
        config.server_url = server.clone();
    }
    if let Some(ref theme_name) = cli.theme {
        config.theme = theme_name.clone();
    }
    if let Some(ref lang) = cli.lang {
        config.lang = lang.clone();
    }
    if let Some(ref name) = cli.user_name {
        config.user_name = Some(name.clone());
    }
    if cli.no_greeting {
        config.show_greeting = false;
    }

    // Set UI language (CLI > config > default "en")
    rust_i18n::set_locale(&config.lang);

    // Build and run the application
    let mut app = app::App::new(&config);
    app.run().await
}
