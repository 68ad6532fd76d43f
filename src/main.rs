// src/main.rs

#![allow(non_snake_case)]

use std::error::Error;

use series_plot_render::cli::Cli;
use series_plot_render::pipeline;
use series_plot_render::plot_framework::PlottersComposer;

fn main() -> Result<(), Box<dyn Error>> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info"))
        .format_timestamp(None)
        .init();

    let config = Cli::parse_with_legacy_flags().into_config();
    log::debug!("Resolved configuration: {config:?}");

    let mut composer = PlottersComposer::new();
    if let Err(e) = pipeline::run(&config, &mut composer) {
        // Printed directly so the failure is visible whatever RUST_LOG says.
        eprintln!("Error: {e}");
        std::process::exit(1);
    }
    Ok(())
}

// src/main.rs
