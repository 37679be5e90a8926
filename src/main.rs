//! cordova-build-config - Cordova build.json generator for CI pipelines.

use clap::Parser;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use cordova_build_config::cli::output;
use cordova_build_config::cli::{execute, Cli};

fn main() {
    let cli = Cli::parse();

    // Initialize tracing subscriber with env-filter support
    let filter = EnvFilter::try_from_env("CORDOVA_BUILD_CONFIG_LOG").unwrap_or_else(|_| {
        if cli.verbose {
            EnvFilter::new("cordova_build_config=debug")
        } else {
            EnvFilter::new("cordova_build_config=warn")
        }
    });

    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_target(false).without_time())
        .init();

    if let Err(e) = execute(cli) {
        output::error(&e.to_string());
        std::process::exit(1);
    }
}
