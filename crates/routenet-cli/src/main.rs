#![forbid(unsafe_code)]

mod cmd;
mod input;
mod output;
mod settings;

use clap::{CommandFactory, Parser, Subcommand};
use output::{CliError, OutputMode, render_error, resolve_output_mode};
use std::env;
use std::path::PathBuf;
use tracing::{debug, info};
use tracing_subscriber::{EnvFilter, fmt, prelude::*};

#[derive(Parser, Debug)]
#[command(
    author,
    version,
    about = "routenet: airline route network analytics",
    long_about = None
)]
struct Cli {
    /// Enable verbose logging.
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Output format: pretty, text, or json.
    #[arg(long, global = true, value_enum)]
    format: Option<OutputMode>,

    /// Shorthand for `--format json`.
    #[arg(long, global = true, hide = true)]
    json: bool,

    /// Analysis config file (default: ./routenet.toml, then the user config dir).
    #[arg(long, global = true, value_name = "PATH")]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

impl Cli {
    /// Derive the output mode from flags and environment.
    fn output_mode(&self) -> OutputMode {
        resolve_output_mode(self.format, self.json)
    }
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(
        next_help_heading = "Analysis",
        about = "Analyze a route network",
        long_about = "Build the route graph and report hubs, connectivity, distribution, seasonal and airline coverage metrics.",
        after_help = "EXAMPLES:\n    # Analyze a route file\n    routenet analyze routes.json\n\n    # Report the top 10 hubs as JSON\n    routenet analyze routes.json --top 10 --format json\n\n    # Read JSON Lines from stdin\n    cat routes.jsonl | routenet analyze -"
    )]
    Analyze(cmd::analyze::AnalyzeArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Count routes per frequency, price and demand band",
        long_about = "Bucket every route record by weekly frequency, average price and demand score.",
        after_help = "EXAMPLES:\n    # Default bands\n    routenet distribution routes.json\n\n    # Custom bands from a config file\n    routenet distribution routes.json --config bands.toml"
    )]
    Distribution(cmd::distribution::DistributionArgs),

    #[command(
        next_help_heading = "Analysis",
        about = "Summarize routes by peak season",
        long_about = "Report route count, average demand, price and frequency for each peak season present in the data.",
        after_help = "EXAMPLES:\n    # Seasonal summary\n    routenet seasonal routes.json\n\n    # Emit machine-readable output\n    routenet seasonal routes.json --json"
    )]
    Seasonal(cmd::seasonal::SeasonalArgs),

    #[command(
        next_help_heading = "Lookup",
        about = "Show airline coverage",
        long_about = "List every airline's route count and airport footprint, or the routes of one airline.",
        after_help = "EXAMPLES:\n    # Coverage table\n    routenet airlines routes.json\n\n    # Routes of one airline\n    routenet airlines routes.json --airline \"Delta Air Lines\""
    )]
    Airlines(cmd::airlines::AirlinesArgs),

    #[command(
        next_help_heading = "Lookup",
        about = "Show one airport's departures",
        long_about = "List departures, carriers and the blended hub score of a single airport.",
        after_help = "EXAMPLES:\n    # Departures from Atlanta\n    routenet airport routes.json ATL\n\n    # Emit machine-readable output\n    routenet airport routes.json ATL --json"
    )]
    Airport(cmd::airport::AirportArgs),

    #[command(
        next_help_heading = "Data",
        about = "Generate a synthetic route network",
        long_about = "Generate the deterministic demonstration network as a JSON array of route records.",
        after_help = "EXAMPLES:\n    # Print the default network\n    routenet sample\n\n    # Five hubs, fixed seed, written to a file\n    routenet sample --airports 5 --seed 7 --output routes.json"
    )]
    Sample(cmd::sample::SampleArgs),

    #[command(
        next_help_heading = "Data",
        about = "Generate shell completion scripts",
        long_about = "Generate shell completion scripts for supported shells.",
        after_help = "EXAMPLES:\n    # Generate bash completions\n    routenet completions bash\n\n    # Generate zsh completions\n    routenet completions zsh"
    )]
    Completions(cmd::completions::CompletionsArgs),
}

fn init_tracing(verbose: bool) {
    let filter = EnvFilter::try_from_env("ROUTENET_LOG").unwrap_or_else(|_| {
        EnvFilter::new(if verbose || env::var("DEBUG").is_ok() {
            "routenet=debug,info"
        } else {
            "routenet=info,warn"
        })
    });

    let format = env::var("ROUTENET_LOG_FORMAT").unwrap_or_else(|_| "compact".to_string());

    let registry = tracing_subscriber::registry().with(filter);

    match format.as_str() {
        "json" => {
            registry
                .with(fmt::layer().json().with_ansi(false).with_writer(std::io::stderr))
                .init();
        }
        _ => {
            registry
                .with(fmt::layer().compact().with_writer(std::io::stderr))
                .init();
        }
    }
}

fn run(cli: Cli, output: OutputMode) -> anyhow::Result<()> {
    let config_path = cli.config.as_deref();

    match cli.command {
        Commands::Analyze(ref args) => cmd::analyze::run_analyze(args, output, config_path),
        Commands::Distribution(ref args) => {
            cmd::distribution::run_distribution(args, output, config_path)
        }
        Commands::Seasonal(ref args) => cmd::seasonal::run_seasonal(args, output),
        Commands::Airlines(ref args) => cmd::airlines::run_airlines(args, output),
        Commands::Airport(ref args) => cmd::airport::run_airport(args, output, config_path),
        Commands::Sample(ref args) => cmd::sample::run_sample(args, output),
        Commands::Completions(ref args) => {
            let mut command = Cli::command();
            cmd::completions::run_completions(args.shell, &mut command)
        }
    }
}

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    if cli.verbose {
        info!("Verbose mode enabled");
    }

    let output = cli.output_mode();
    debug!(?output, "resolved output mode");

    if let Err(err) = run(cli, output) {
        render_error(output, &CliError::from(&err))?;
        std::process::exit(1);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn format_flag_parses_before_subcommand() {
        let cli = Cli::parse_from(["routenet", "--format", "json", "seasonal", "r.json"]);
        assert_eq!(cli.format, Some(OutputMode::Json));
        assert!(cli.output_mode().is_json());
    }

    #[test]
    fn json_flag_after_subcommand() {
        let cli = Cli::parse_from(["routenet", "analyze", "r.json", "--json"]);
        assert!(cli.json);
        assert!(cli.output_mode().is_json());
    }

    #[test]
    fn config_flag_is_global() {
        let cli = Cli::parse_from(["routenet", "analyze", "r.json", "--config", "x.toml"]);
        assert_eq!(cli.config, Some(PathBuf::from("x.toml")));
    }

    #[test]
    fn analyze_top_parses() {
        let cli = Cli::parse_from(["routenet", "analyze", "routes.json", "--top", "3"]);
        match cli.command {
            Commands::Analyze(args) => {
                assert_eq!(args.file, PathBuf::from("routes.json"));
                assert_eq!(args.top, Some(3));
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn airport_requires_code() {
        assert!(Cli::try_parse_from(["routenet", "airport", "routes.json"]).is_err());
        let cli = Cli::parse_from(["routenet", "airport", "routes.json", "ATL"]);
        assert!(matches!(cli.command, Commands::Airport(ref a) if a.code == "ATL"));
    }

    #[test]
    fn sample_defaults() {
        let cli = Cli::parse_from(["routenet", "sample"]);
        match cli.command {
            Commands::Sample(args) => {
                assert_eq!(args.seed, 0);
                assert_eq!(args.airports, 10);
                assert!(args.output.is_none());
            }
            other => panic!("unexpected command: {other:?}"),
        }
    }

    #[test]
    fn completions_subcommand_parses() {
        let cli = Cli::parse_from(["routenet", "completions", "bash"]);
        assert!(matches!(
            cli.command,
            Commands::Completions(cmd::completions::CompletionsArgs {
                shell: clap_complete::Shell::Bash,
            })
        ));
    }

    #[test]
    fn all_subcommands_listed() {
        let subcommands = [
            vec!["routenet", "analyze", "r.json"],
            vec!["routenet", "distribution", "r.json"],
            vec!["routenet", "seasonal", "r.json"],
            vec!["routenet", "airlines", "r.json", "--airline", "Delta"],
            vec!["routenet", "airport", "r.json", "ATL"],
            vec!["routenet", "sample", "--seed", "3", "--airports", "4"],
            vec!["routenet", "completions", "zsh"],
        ];
        for args in &subcommands {
            let result = Cli::try_parse_from(args.iter());
            assert!(result.is_ok(), "Failed to parse: {args:?}, error: {:?}", result.err());
        }
    }

    #[test]
    fn cli_definition_is_consistent() {
        Cli::command().debug_assert();
    }
}
