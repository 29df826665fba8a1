//! `lcheck compare` — reconcile a Balance export against a DDP export.

use std::io::{self, Write};
use std::path::{Path, PathBuf};

use ledgercheck_io::{compare_files, supported_extension, SUPPORTED_EXTENSIONS};
use ledgercheck_recon::{ComparisonResult, ComparisonSummary, Ledger, MatchRecord};
use serde::Serialize;

use crate::exit_codes::{EXIT_COMPARE_DIFFS, EXIT_COMPARE_INGEST, EXIT_COMPARE_OUTPUT, EXIT_USAGE};
use crate::util::{display_width, pad_right};
use crate::CliError;

const MAX_NAME_WIDTH: usize = 40;

pub struct CompareOptions {
    pub balance: PathBuf,
    pub ddp: PathBuf,
    pub json: bool,
    pub output: Option<PathBuf>,
    pub show_all: bool,
    pub fail_on_diff: bool,
    pub verbose: bool,
}

#[derive(Serialize)]
struct ReportMeta {
    engine_version: String,
    run_at: String,
    balance_file: String,
    ddp_file: String,
}

/// JSON document written by `--json` / `--output`.
#[derive(Serialize)]
struct Report<'a> {
    meta: ReportMeta,
    summary: ComparisonSummary,
    #[serde(flatten)]
    result: &'a ComparisonResult,
}

pub fn cmd_compare(opts: CompareOptions) -> Result<(), CliError> {
    check_input(&opts.balance, Ledger::Balance)?;
    check_input(&opts.ddp, Ledger::Ddp)?;

    let result = compare_files(&opts.balance, &opts.ddp).map_err(|e| {
        log::debug!("ingestion failed: {e}");
        let err = CliError {
            code: EXIT_COMPARE_INGEST,
            message: "could not process files, check format".into(),
            hint: None,
            detail: None,
        };
        if opts.verbose {
            err.with_detail(e.to_string())
        } else {
            err.with_hint("rerun with --verbose to see the underlying error")
        }
    })?;

    let summary = result.summary();

    if opts.json || opts.output.is_some() {
        let report = Report {
            meta: ReportMeta {
                engine_version: env!("CARGO_PKG_VERSION").to_string(),
                run_at: chrono::Utc::now().to_rfc3339(),
                balance_file: opts.balance.display().to_string(),
                ddp_file: opts.ddp.display().to_string(),
            },
            summary: summary.clone(),
            result: &result,
        };
        let json_str = serde_json::to_string_pretty(&report)
            .map_err(|e| output_err(format!("JSON serialization error: {e}")))?;

        if let Some(ref path) = opts.output {
            std::fs::write(path, &json_str)
                .map_err(|e| output_err(format!("cannot write {}: {e}", path.display())))?;
            eprintln!("wrote {}", path.display());
        }
        if opts.json {
            println!("{json_str}");
        }
    }

    if !opts.json {
        let rows = if opts.show_all { &result.matches } else { &result.differences };
        let stdout = io::stdout();
        let mut handle = stdout.lock();
        write_table(&mut handle, rows).map_err(|e| output_err(e.to_string()))?;
    }

    // Human summary to stderr
    eprintln!(
        "{} matched providers, {} with differences ({} excess in DDP, {} excess in BALANCE, {} balanced)",
        summary.matched,
        summary.with_differences,
        summary.excess_in_ddp,
        summary.excess_in_balance,
        summary.balanced,
    );
    eprintln!(
        "totals: balance {:.2} ({} providers), ddp {:.2} ({} providers)",
        result.totals.balance, summary.balance_records, result.totals.ddp, summary.ddp_records,
    );

    if opts.fail_on_diff && result.has_differences() {
        return Err(CliError {
            code: EXIT_COMPARE_DIFFS,
            message: String::new(),
            hint: None,
            detail: None,
        });
    }

    Ok(())
}

fn output_err(msg: impl Into<String>) -> CliError {
    CliError { code: EXIT_COMPARE_OUTPUT, message: msg.into(), hint: None, detail: None }
}

/// Reject missing files and unsupported extensions before reading anything.
fn check_input(path: &Path, ledger: Ledger) -> Result<(), CliError> {
    if !path.is_file() {
        return Err(CliError {
            code: EXIT_USAGE,
            message: format!("{ledger} file not found: {}", path.display()),
            hint: None,
            detail: None,
        });
    }
    if supported_extension(path).is_none() {
        return Err(CliError {
            code: EXIT_USAGE,
            message: format!("{ledger} file has an unsupported type: {}", path.display()),
            hint: Some(format!("accepted extensions: {}", SUPPORTED_EXTENSIONS.join(", "))),
            detail: None,
        });
    }
    Ok(())
}

/// Render match records as an aligned text table.
pub fn write_table<W: Write>(out: &mut W, rows: &[MatchRecord]) -> io::Result<()> {
    if rows.is_empty() {
        writeln!(out, "no differences")?;
        return Ok(());
    }

    let name_width = rows
        .iter()
        .map(|r| display_width(&r.provider_name))
        .max()
        .unwrap_or(0)
        .clamp(4, MAX_NAME_WIDTH);

    writeln!(
        out,
        "{:<9}  {}  {:>14}  {:>14}  {:>14}  OBSERVATION",
        "PROVIDER",
        pad_right("NAME", name_width),
        "BALANCE",
        "DDP",
        "DIFFERENCE",
    )?;
    for r in rows {
        writeln!(
            out,
            "{:<9}  {}  {:>14.2}  {:>14.2}  {:>14.2}  {}",
            r.provider_id,
            pad_right(&r.provider_name, name_width),
            r.balance_amount,
            r.ddp_amount,
            r.difference,
            r.observation,
        )?;
    }
    Ok(())
}
