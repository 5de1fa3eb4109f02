#![cfg_attr(target_os = "windows", windows_subsystem = "windows")]

mod app;
mod domain;
mod ui;
mod util;

use std::path::PathBuf;

use clap::Parser;
use dioxus::prelude::*;

#[cfg(feature = "desktop")]
use dioxus_desktop::{tao::window::WindowBuilder, Config as DesktopConfig};

use crate::domain::RateQuote;
use crate::util::{
    config::{load_launch_config, LaunchConfig},
    logging::init_tracing,
};

/// Shows a business rate, its discounted final rate and any special offer.
#[derive(Parser, Debug)]
#[command(name = "rate-display", version)]
struct Cli {
    /// Business to look up.
    #[arg(long, env = "RATE_DISPLAY_BUSINESS_NAME")]
    business_name: Option<String>,

    /// Discount percentage applied to the business rate.
    #[arg(long, env = "RATE_DISPLAY_DISCOUNT_RATE", allow_hyphen_values = true)]
    discount_rate: Option<f64>,

    /// JSON file with default inputs. Defaults to config.json in the platform config dir.
    #[arg(long)]
    config: Option<PathBuf>,

    /// Log level (trace, debug, info, warn, error). `RUST_LOG` takes precedence.
    #[arg(long, default_value = "info")]
    log_level: String,

    /// Print the derived rates as JSON instead of opening a window.
    #[arg(long, default_value_t = false)]
    summary: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(&cli.log_level);

    let config = resolve_config(&cli);
    tracing::debug!(?config, "resolved launch configuration");

    if cli.summary {
        print_summary(&config);
        return;
    }

    // Wayland explicit-sync crashes on some drivers; fall back to GL unless the caller opts in.
    if std::env::var("WAYLAND_DISPLAY").is_ok() && std::env::var("WGPU_BACKEND").is_err() {
        std::env::set_var("WGPU_BACKEND", "gl");
    }

    // WebKit's DMABUF renderer opts into explicit sync; disable it unless the user overrides.
    if std::env::var("WAYLAND_DISPLAY").is_ok()
        && std::env::var("WEBKIT_DISABLE_DMABUF_RENDERER").is_err()
    {
        std::env::set_var("WEBKIT_DISABLE_DMABUF_RENDERER", "1");
    }

    let builder = LaunchBuilder::new().with_context(config);

    #[cfg(feature = "desktop")]
    let builder = {
        let config = desktop! {
            DesktopConfig::new().with_window(
                WindowBuilder::new()
                    .with_title(util::version::window_title())
            )
        };
        builder.with_cfg(config)
    };

    #[cfg(not(feature = "desktop"))]
    let builder = builder;

    builder.launch(app::App);
}

fn resolve_config(cli: &Cli) -> LaunchConfig {
    let file_config = match load_launch_config(cli.config.as_deref()) {
        Ok(Some(config)) => {
            tracing::info!("loaded launch configuration from file");
            config
        }
        Ok(None) => {
            tracing::info!("no config file found; using command line inputs only");
            LaunchConfig::default()
        }
        Err(err) => {
            tracing::warn!("failed to load config file: {err}");
            LaunchConfig::default()
        }
    };

    file_config.overlay(cli.business_name.clone(), cli.discount_rate)
}

fn print_summary(config: &LaunchConfig) {
    let quote = RateQuote::new(config.business_name.as_deref(), config.discount_rate);
    tracing::info!(
        business_rate = ?quote.business_rate,
        final_rate = ?quote.final_rate,
        "printing rate summary"
    );

    match serde_json::to_string_pretty(&quote) {
        Ok(json) => println!("{json}"),
        Err(err) => tracing::error!("failed to encode rate summary: {err}"),
    }
}
