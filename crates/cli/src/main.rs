// ledgercheck CLI - reconcile Balance and DDP provider ledgers

mod compare;
mod exit_codes;
mod util;

use std::path::PathBuf;
use std::process::ExitCode;

use clap::{Parser, Subcommand, ValueEnum};
use ledgercheck_config::{OutputFormat, Settings};
use ledgercheck_recon::normalize::{normalize_balance_id, normalize_ddp_id};
use ledgercheck_recon::Cell;
use tracing_subscriber::EnvFilter;

use compare::{cmd_compare, CompareOptions};
use exit_codes::{EXIT_ERROR, EXIT_SUCCESS};

#[derive(Parser)]
#[command(name = "lcheck")]
#[command(about = "Reconcile a Balance ledger export against a DDP payments export")]
#[command(long_version = long_version())]
#[command(version)]
struct Cli {
    /// Print diagnostics (debug log and underlying error details) to stderr
    #[arg(long, short, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Match providers across both ledgers and report differences
    #[command(after_help = "\
Examples:
  lcheck compare balance.xlsx ddp.xls
  lcheck compare balance.xlsx ddp.xls --all
  lcheck compare balance.xlsx ddp.xls --json > result.json
  lcheck compare balance.xlsx ddp.xls --output result.json --fail-on-diff")]
    Compare {
        /// Balance export (accounting ledger)
        balance: PathBuf,

        /// DDP export (provider payments)
        ddp: PathBuf,

        /// Report format
        #[arg(long, value_enum, env = "LEDGERCHECK_FORMAT")]
        format: Option<FormatArg>,

        /// Shorthand for --format json
        #[arg(long)]
        json: bool,

        /// Also write the JSON report to this file
        #[arg(long)]
        output: Option<PathBuf>,

        /// List every matched provider, not only those with differences
        #[arg(long)]
        all: bool,

        /// Exit with code 3 when differences are found
        #[arg(long)]
        fail_on_diff: bool,
    },

    /// Show the canonical provider id for raw identifier values
    #[command(after_help = "\
Examples:
  lcheck normalize --side ddp 0 2500 98760042
  lcheck normalize --side balance 1234")]
    Normalize {
        /// Which ledger's numbering scheme the values use
        #[arg(long, value_enum)]
        side: Side,

        /// Raw identifier values
        #[arg(required = true)]
        values: Vec<String>,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum FormatArg {
    Human,
    Json,
}

#[derive(Clone, Copy, ValueEnum)]
enum Side {
    Balance,
    Ddp,
}

#[derive(Debug)]
pub struct CliError {
    pub code: u8,
    pub message: String,
    pub hint: Option<String>,
    /// Underlying cause, shown only in verbose mode.
    pub detail: Option<String>,
}

impl CliError {
    /// Add a hint to an existing error.
    pub fn with_hint(mut self, hint: impl Into<String>) -> Self {
        self.hint = Some(hint.into());
        self
    }

    pub fn with_detail(mut self, detail: impl Into<String>) -> Self {
        self.detail = Some(detail.into());
        self
    }
}

fn long_version() -> &'static str {
    if cfg!(debug_assertions) {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nengine:  ledgercheck-recon ", env!("CARGO_PKG_VERSION"),
            "\nbuild:   debug",
            "\ntarget:  ", env!("TARGET"),
        )
    } else {
        concat!(
            env!("CARGO_PKG_VERSION"),
            " (", env!("GIT_COMMIT_HASH"), ")",
            "\nengine:  ledgercheck-recon ", env!("CARGO_PKG_VERSION"),
            "\nbuild:   release",
            "\ntarget:  ", env!("TARGET"),
        )
    }
}

/// Install the stderr log subscriber. `LEDGERCHECK_LOG` overrides the
/// settings file; `--verbose` overrides both.
fn init_logging(verbose: bool, settings: &Settings) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_env("LEDGERCHECK_LOG")
            .unwrap_or_else(|_| EnvFilter::new(&settings.log.level))
    };
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .without_time()
        .with_target(false)
        .try_init();
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let settings = Settings::load();
    init_logging(cli.verbose, &settings);
    log::debug!("settings: {}", Settings::config_path_display());

    let result = match cli.command {
        Commands::Compare { balance, ddp, format, json, output, all, fail_on_diff } => {
            let format = match format {
                Some(FormatArg::Json) => OutputFormat::Json,
                Some(FormatArg::Human) => OutputFormat::Human,
                None => settings.output.format,
            };
            cmd_compare(CompareOptions {
                balance,
                ddp,
                json: json || format == OutputFormat::Json,
                output,
                show_all: all || settings.output.show_all,
                fail_on_diff,
                verbose: cli.verbose,
            })
        }
        Commands::Normalize { side, values } => cmd_normalize(side, &values),
    };

    match result {
        Ok(()) => ExitCode::from(EXIT_SUCCESS),
        Err(CliError { code, message, hint, detail }) => {
            if !message.is_empty() {
                eprintln!("error: {}", message);
            }
            if let Some(detail) = detail {
                eprintln!("detail: {}", detail);
            }
            if let Some(hint) = hint {
                eprintln!("hint:  {}", hint);
            }
            ExitCode::from(code)
        }
    }
}

// ============================================================================
// normalize
// ============================================================================

fn cmd_normalize(side: Side, values: &[String]) -> Result<(), CliError> {
    use std::io::Write;

    let normalize: fn(&Cell) -> Option<String> = match side {
        Side::Balance => normalize_balance_id,
        Side::Ddp => normalize_ddp_id,
    };

    let stdout = std::io::stdout();
    let mut handle = stdout.lock();
    for raw in values {
        let id = normalize(&Cell::Text(raw.clone()));
        writeln!(handle, "{}\t{}", raw, id.as_deref().unwrap_or("-")).map_err(|e| CliError {
            code: EXIT_ERROR,
            message: e.to_string(),
            hint: None,
            detail: None,
        })?;
    }
    Ok(())
}
