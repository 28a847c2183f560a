//! cert-authenticity: heuristic authenticity scoring for scanned certificates
//!
//! Scores pre-computed analyzer bundles or inspects rasterized certificate
//! pages with the built-in analyzers.

use anyhow::{Context, Result};
use cert_authenticity::{
    cli::{self, InspectArgs},
    config::{self, AppConfig},
    reports::ReportFormat,
};
use clap::{CommandFactory, Parser, Subcommand};
use clap_complete::{generate, Shell};
use std::io;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// Build long version string with scoring info
const fn build_long_version() -> &'static str {
    concat!(
        env!("CARGO_PKG_VERSION"),
        "\n\nScoring engine: 1.0",
        "\n  Weights: seal 40%, layout 35%, signature 25%",
        "\n\nInputs:",
        "\n  Analysis bundles (JSON), rasterized pages (PNG, JPEG)",
        "\n\nOutput Formats:",
        "\n  json, summary"
    )
}

#[derive(Parser)]
#[command(name = "cert-authenticity")]
#[command(version, long_version = build_long_version())]
#[command(about = "Heuristic authenticity scoring for scanned certificates", long_about = None)]
#[command(after_help = "EXIT CODES:
    0  All documents scored (at or above --min-score)
    1  A document scored below --min-score
    3  Error occurred

EXAMPLES:
    # Score a pre-computed analysis bundle
    cert-authenticity score bundle.json

    # Reproducible batch scoring for CI
    cert-authenticity score bundles/*.json --seed 42 --min-score 70 -o json

    # Analyze a rasterized page with its OCR text
    cert-authenticity inspect --image page.png --ocr-text page.txt")]
struct Cli {
    /// Enable verbose output
    #[arg(short, long, global = true)]
    verbose: bool,

    /// Suppress non-essential output
    #[arg(short, long, global = true)]
    quiet: bool,

    /// Disable colored output (also respects `NO_COLOR` env)
    #[arg(long, global = true)]
    no_color: bool,

    /// Path to configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

/// Output and scoring flags shared by `score` and `inspect`
#[derive(Parser)]
struct OutputArgs {
    /// Output format (auto detects TTY: summary if interactive, json otherwise)
    #[arg(short, long, default_value = "auto")]
    output: ReportFormat,

    /// Output file path (stdout if not specified)
    #[arg(short = 'O', long)]
    output_file: Option<PathBuf>,

    /// Seed for the signature score draw (random if not specified)
    #[arg(long)]
    seed: Option<u64>,

    /// Exit with code 1 if any document scores below this value (0-100)
    #[arg(long)]
    min_score: Option<f64>,
}

/// Arguments for the `score` subcommand
#[derive(Parser)]
struct ScoreArgs {
    /// Analysis bundle JSON files
    #[arg(required = true)]
    bundles: Vec<PathBuf>,

    #[command(flatten)]
    out: OutputArgs,
}

/// Arguments for the `inspect` subcommand
#[derive(Parser)]
struct InspectCmdArgs {
    /// Rasterized certificate page (PNG or JPEG)
    #[arg(long)]
    image: PathBuf,

    /// Text layer extracted from the document
    #[arg(long)]
    text: Option<PathBuf>,

    /// OCR output for the page
    #[arg(long)]
    ocr_text: Option<PathBuf>,

    /// Run the raster analyzers one after another
    #[arg(long)]
    sequential: bool,

    #[command(flatten)]
    out: OutputArgs,
}

#[derive(Subcommand)]
enum Commands {
    /// Score pre-computed analysis bundles
    Score(ScoreArgs),

    /// Analyze and score a rasterized certificate page
    Inspect(InspectCmdArgs),

    /// Generate shell completions
    Completions {
        /// Shell to generate completions for
        #[arg(value_enum)]
        shell: Shell,
    },

    /// Generate JSON Schema for the config file format
    ConfigSchema {
        /// Write schema to file instead of stdout
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Show, discover, or initialize configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

/// Sub-subcommands for the `config` command
#[derive(Subcommand)]
enum ConfigAction {
    /// Print current effective configuration (merged from defaults + file)
    Show,
    /// Print config file search paths and discovered config file
    Path,
    /// Generate an example .cert-authenticity.yaml in the current directory
    Init,
}

/// CLI flags as a config layer to merge over the file config
fn overrides(cli: &Cli, out: &OutputArgs) -> AppConfig {
    AppConfig::builder()
        .output_format(out.output)
        .output_file(out.output_file.clone())
        .no_color(cli.no_color)
        .quiet(cli.quiet)
        .min_score(out.min_score)
        .seed(out.seed)
        .build()
}

fn effective_config(cli: &Cli, layer: &AppConfig) -> AppConfig {
    let (config, loaded_from) = AppConfig::from_file_with_overrides(cli.config.as_deref(), layer);
    if let Some(path) = loaded_from {
        tracing::debug!("Using config file {}", path.display());
    }
    config
}

fn exit_with(code: i32) -> Result<()> {
    if code != 0 {
        std::process::exit(code);
    }
    Ok(())
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose {
        "debug"
    } else if cli.quiet {
        "warn"
    } else {
        "info"
    };
    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::new(
            std::env::var("RUST_LOG").unwrap_or_else(|_| log_level.to_string()),
        ))
        .with(tracing_subscriber::fmt::layer().with_target(false).with_writer(io::stderr))
        .init();

    // Dispatch to command handlers
    match &cli.command {
        Commands::Score(args) => {
            let config = effective_config(&cli, &overrides(&cli, &args.out));
            exit_with(cli::run_score(&config, &args.bundles)?)
        }

        Commands::Inspect(args) => {
            let mut layer = overrides(&cli, &args.out);
            layer.analysis.run_parallel = !args.sequential;
            let config = effective_config(&cli, &layer);
            let inspect = InspectArgs {
                image: args.image.clone(),
                text: args.text.clone(),
                ocr_text: args.ocr_text.clone(),
            };
            exit_with(cli::run_inspect(&config, &inspect)?)
        }

        Commands::Completions { shell } => {
            generate(*shell, &mut Cli::command(), "cert-authenticity", &mut io::stdout());
            Ok(())
        }

        Commands::ConfigSchema { output } => {
            let schema = config::generate_json_schema().context("failed to generate schema")?;
            match output {
                Some(path) => {
                    std::fs::write(path, &schema)
                        .with_context(|| format!("failed to write {}", path.display()))?;
                    eprintln!("Schema written to {}", path.display());
                }
                None => {
                    println!("{schema}");
                }
            }
            Ok(())
        }

        Commands::Config { action } => match action {
            ConfigAction::Show => {
                let (config, loaded_from) = config::load_or_default(cli.config.as_deref());
                if let Some(path) = &loaded_from {
                    eprintln!("# Loaded from: {}", path.display());
                } else {
                    eprintln!("# No config file found; showing defaults");
                }
                let yaml = serde_yaml::to_string(&config).context("failed to serialize config")?;
                print!("{yaml}");
                Ok(())
            }
            ConfigAction::Path => {
                let search_paths: [Option<String>; 3] = [
                    std::env::current_dir()
                        .ok()
                        .map(|p| p.display().to_string()),
                    config::default_config_path()
                        .and_then(|p| p.parent().map(|d| d.display().to_string())),
                    dirs::home_dir().map(|p| p.display().to_string()),
                ];
                eprintln!("Config file search paths (in order):");
                for path in search_paths.into_iter().flatten() {
                    eprintln!("  {path}");
                }
                eprintln!();
                eprintln!("Recognized file names:");
                for name in config::file::CONFIG_FILE_NAMES {
                    eprintln!("  {name}");
                }
                eprintln!();
                match config::discover_config_file(cli.config.as_deref()) {
                    Some(path) => eprintln!("Active config file: {}", path.display()),
                    None => eprintln!("No config file found."),
                }
                Ok(())
            }
            ConfigAction::Init => {
                let target = std::env::current_dir()
                    .context("cannot determine current directory")?
                    .join(".cert-authenticity.yaml");
                if target.exists() {
                    anyhow::bail!(
                        "{} already exists. Remove it first to re-initialize.",
                        target.display()
                    );
                }
                let content = config::generate_full_example_config();
                std::fs::write(&target, content)
                    .with_context(|| format!("failed to write {}", target.display()))?;
                eprintln!("Created {}", target.display());
                Ok(())
            }
        },
    }
}
