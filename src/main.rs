#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod pages;
mod theme;

use std::sync::OnceLock;
use std::time::Duration;

use anyhow::Context;
use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use estate_core::SiteConfig;
use tracing_subscriber::EnvFilter;

/// Site configuration, set once from the command line before launch
static SITE_CONFIG: OnceLock<SiteConfig> = OnceLock::new();

/// Get the site configuration.
///
/// Only `None` if called before `main` stored it.
pub fn site_config() -> Option<SiteConfig> {
    SITE_CONFIG.get().cloned()
}

/// Estate Site - property marketing landing page
#[derive(Parser, Debug)]
#[command(name = "estate-desktop")]
#[command(about = "Estate Site - property landing page backed by a content API")]
struct Args {
    /// Base URL of the content API
    #[arg(long, env = "ESTATE_API_URL")]
    api_url: String,

    /// Website slug sent with every request
    #[arg(long, env = "ESTATE_SITE_SLUG")]
    site_slug: String,

    /// Phone number for the WhatsApp and call buttons
    #[arg(long, env = "ESTATE_CONTACT_PHONE")]
    contact_phone: Option<String>,

    /// Request timeout in seconds
    #[arg(long, default_value_t = 30)]
    timeout_secs: u64,

    /// Log filter used when RUST_LOG is not set
    #[arg(long, default_value = "info")]
    log_level: String,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(&args.log_level))
        .context("invalid log filter")?;
    tracing_subscriber::fmt().with_env_filter(filter).init();

    let mut config = SiteConfig::new(&args.api_url, &args.site_slug)
        .context("invalid site configuration")?
        .with_timeout(Duration::from_secs(args.timeout_secs));
    if let Some(phone) = &args.contact_phone {
        config = config.with_contact_phone(phone);
    }

    tracing::info!(
        "Starting estate-desktop for '{}' against {}",
        config.site_slug,
        config.api_base
    );
    let _ = SITE_CONFIG.set(config);

    let window = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Estate Site")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1280.0, 900.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(window)
        .launch(app::App);

    Ok(())
}
