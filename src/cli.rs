//! CLI argument parsing with clap.

use clap::{Args, Parser, Subcommand};

use crate::params::{DEFAULT_DIMENSION, MAX_DIMENSION};

/// Local mock services for TShop: AI design generation, fulfillment,
/// payments and analytics stand-ins.
#[derive(Parser, Debug)]
#[command(name = "tshop-mock", version, about)]
pub struct Cli {
    /// Config file path override.
    #[arg(long, global = true)]
    pub config: Option<String>,

    /// Verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// What to do; defaults to `serve`.
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Subcommands.
#[derive(Subcommand, Debug)]
pub enum Command {
    /// Run the mock HTTP services.
    Serve(ServeArgs),
    /// Render one mock design to a PNG file.
    Render(RenderArgs),
}

/// Options for `serve`.
#[derive(Args, Debug, Default)]
pub struct ServeArgs {
    /// Bind address (overrides config and `TSHOP_MOCK_HOST`).
    #[arg(long)]
    pub host: Option<String>,

    /// Listen port (overrides config and `TSHOP_MOCK_PORT`).
    #[arg(short, long)]
    pub port: Option<u16>,

    /// Skip the simulated processing delays.
    #[arg(long)]
    pub no_delay: bool,
}

/// Options for `render`.
#[derive(Args, Debug)]
pub struct RenderArgs {
    /// Prompt text drawn on the design.
    pub prompt: String,

    /// Product type: tshirt, cap, tote_bag (anything else uses the tshirt layout).
    #[arg(short = 't', long, default_value = "tshirt")]
    pub product_type: String,

    /// Canvas width in pixels.
    #[arg(long, default_value_t = DEFAULT_DIMENSION, value_parser = dimension)]
    pub width: u32,

    /// Canvas height in pixels.
    #[arg(long, default_value_t = DEFAULT_DIMENSION, value_parser = dimension)]
    pub height: u32,

    /// Output file path (auto-generated if not specified).
    #[arg(short, long)]
    pub output: Option<String>,

    /// Seed for the style and color picks.
    #[arg(long)]
    pub seed: Option<u64>,
}

fn dimension(value: &str) -> Result<u32, String> {
    let n: u32 = value.parse().map_err(|e| format!("'{value}' is not a number: {e}"))?;
    if (1..=MAX_DIMENSION).contains(&n) {
        Ok(n)
    } else {
        Err(format!("Unsupported dimension {n}. Valid: 1-{MAX_DIMENSION}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_subcommand_means_serve() {
        let cli = Cli::parse_from(["tshop-mock"]);
        assert!(cli.command.is_none());
        assert!(!cli.verbose);
        assert!(cli.config.is_none());
    }

    #[test]
    fn serve_options() {
        let cli = Cli::parse_from([
            "tshop-mock",
            "--config",
            "mock.toml",
            "serve",
            "--host",
            "127.0.0.1",
            "-p",
            "9000",
            "--no-delay",
        ]);
        assert_eq!(cli.config.as_deref(), Some("mock.toml"));
        let Some(Command::Serve(args)) = cli.command else { panic!("expected serve") };
        assert_eq!(args.host.as_deref(), Some("127.0.0.1"));
        assert_eq!(args.port, Some(9000));
        assert!(args.no_delay);
    }

    #[test]
    fn render_defaults() {
        let cli = Cli::parse_from(["tshop-mock", "render", "a cat"]);
        let Some(Command::Render(args)) = cli.command else { panic!("expected render") };
        assert_eq!(args.prompt, "a cat");
        assert_eq!(args.product_type, "tshirt");
        assert_eq!((args.width, args.height), (400, 400));
        assert!(args.output.is_none());
        assert!(args.seed.is_none());
    }

    #[test]
    fn render_all_options() {
        let cli = Cli::parse_from([
            "tshop-mock",
            "render",
            "-t",
            "tote_bag",
            "--width",
            "800",
            "--height",
            "600",
            "-o",
            "out.png",
            "--seed",
            "7",
            "-v",
            "a landscape",
        ]);
        assert!(cli.verbose);
        let Some(Command::Render(args)) = cli.command else { panic!("expected render") };
        assert_eq!(args.product_type, "tote_bag");
        assert_eq!((args.width, args.height), (800, 600));
        assert_eq!(args.output.as_deref(), Some("out.png"));
        assert_eq!(args.seed, Some(7));
        assert_eq!(args.prompt, "a landscape");
    }

    #[test]
    fn render_rejects_bad_dimensions() {
        assert!(Cli::try_parse_from(["tshop-mock", "render", "--width", "0", "x"]).is_err());
        assert!(Cli::try_parse_from(["tshop-mock", "render", "--height", "5000", "x"]).is_err());
        assert!(Cli::try_parse_from(["tshop-mock", "render", "--width", "wide", "x"]).is_err());
    }

    #[test]
    fn render_requires_prompt() {
        assert!(Cli::try_parse_from(["tshop-mock", "render"]).is_err());
    }
}
