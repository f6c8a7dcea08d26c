//! TShop mock services: local stand-ins for AI design generation,
//! fulfillment providers, payments and analytics.

mod adapters;
mod cli;
mod config;
mod design;
mod error;
mod latency;
mod model;
mod output;
mod params;
mod ports;
mod routes;
mod server;
mod state;

use std::process;

use clap::Parser;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;
use tracing_subscriber::EnvFilter;

use crate::adapters::entropy::StdRandom;
use crate::adapters::font::load_typeface;
use crate::cli::{Cli, Command, RenderArgs, ServeArgs};
use crate::config::Config;
use crate::design::{DesignRequest, Synthesizer};
use crate::error::MockError;
use crate::latency::Latency;
use crate::output::{resolve_output_path, save_png};
use crate::state::AppState;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if let Err(e) = run(cli).await {
        eprintln!("Error: {e}");
        process::exit(1);
    }
}

/// Log to stderr; `RUST_LOG` wins over the verbosity flag.
fn init_tracing(verbose: bool) {
    let default = if verbose {
        "tshop_mock=debug,tower_http=debug"
    } else {
        "tshop_mock=info,tower_http=info"
    };
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| default.into()))
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

async fn run(cli: Cli) -> Result<(), MockError> {
    let config_path = config::discover_config_path(cli.config.as_deref());
    let config = Config::load(&config_path).map_err(MockError::Config)?;
    tracing::debug!(path = %config_path.display(), "Loaded config");

    match cli.command {
        None => serve(&config, ServeArgs::default()).await,
        Some(Command::Serve(args)) => serve(&config, args).await,
        Some(Command::Render(args)) => render(&config, &args),
    }
}

async fn serve(config: &Config, args: ServeArgs) -> Result<(), MockError> {
    let host = args.host.unwrap_or_else(|| config.host());
    let port = match args.port {
        Some(port) => port,
        None => config.port().map_err(MockError::Config)?,
    };
    let addr = config::socket_addr(&host, port).map_err(MockError::InvalidArgument)?;

    let latency = Latency::from_config(&config.latency, config.delays_enabled() && !args.no_delay);
    let typeface = load_typeface(config.render.font_path(), config.render.font_size);
    tracing::info!(font = typeface.name(), ?latency, "Starting mock services");

    let state = AppState::new(Synthesizer::new(typeface), latency);
    server::serve(addr, state).await
}

fn render(config: &Config, args: &RenderArgs) -> Result<(), MockError> {
    let typeface = load_typeface(config.render.font_path(), config.render.font_size);
    let synthesizer = Synthesizer::new(typeface);
    let mut random = match args.seed {
        Some(seed) => StdRandom::seeded(seed),
        None => StdRandom::from_os(),
    };

    let request = DesignRequest::new(args.prompt.as_str(), args.product_type.as_str())
        .with_size(args.width, args.height);
    let image = synthesizer.synthesize(&request, &mut random);
    tracing::debug!(
        width = image.width,
        height = image.height,
        bytes = image.png.len(),
        "Rendered design"
    );

    let path = resolve_output_path(args.output.as_deref(), &args.prompt, &args.product_type);
    save_png(&image.png, &path)?;
    eprintln!("Saved: {}", path.display());
    Ok(())
}
