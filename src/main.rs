//! Main application entry point (CLI binary).
//!
//! This is a thin wrapper around the `dmarc_checker` library that handles:
//! - Command-line argument parsing
//! - Logger initialization
//! - User-facing output formatting
//!
//! All core functionality is implemented in the library crate.

use std::io;
use std::process;

use anyhow::{Context, Result};
use structopt::StructOpt;

use dmarc_checker::app::{
    collect_domains, render_bulk_report, render_domain_report, JsonRow, ReportOptions,
};
use dmarc_checker::check::write_csv;
use dmarc_checker::config::Opt;
use dmarc_checker::initialization::init_logger_with;
use dmarc_checker::{
    check_domains, BulkCheckRow, CheckDomainResponse, Config, DomainChecker, ErrorResponse,
    OutputFormat,
};

#[tokio::main]
async fn main() -> Result<()> {
    let opt = Opt::from_args();
    let config = Config::from(&opt);

    init_logger_with(config.log_level.into(), config.log_format)
        .context("Failed to initialize logger")?;

    let domains = collect_domains(&opt.domains, opt.file.as_deref())?;
    let checker =
        DomainChecker::from_config(&config).context("Failed to initialize DNS resolver")?;
    let options = ReportOptions {
        all_selectors: opt.all_selectors,
        explain: opt.explain,
    };

    // A single domain given on the command line is checked directly, so its
    // invalid input surfaces as the request error rather than a bulk row
    if domains.len() == 1 && opt.file.is_none() && opt.format != OutputFormat::Csv {
        match checker.check_domain(&domains[0]).await {
            Ok(result) => match opt.format {
                OutputFormat::Json => println!(
                    "{}",
                    serde_json::to_string_pretty(&CheckDomainResponse::from(&result))?
                ),
                _ => print!("{}", render_domain_report(&result, options)),
            },
            Err(e) => {
                if opt.format == OutputFormat::Json {
                    let (_, body) = ErrorResponse::from_check_error(&e);
                    println!("{}", serde_json::to_string(&body)?);
                }
                eprintln!("dmarc_checker error: {e}");
                process::exit(1);
            }
        }
        return Ok(());
    }

    let rows = match check_domains(&checker, &domains, config.bulk_concurrency).await {
        Ok(rows) => rows,
        Err(e) => {
            eprintln!("dmarc_checker error: {e}");
            process::exit(1);
        }
    };

    match opt.format {
        OutputFormat::Plain => print!("{}", render_bulk_report(&rows, options)),
        OutputFormat::Json => {
            let json: Vec<JsonRow> = rows.iter().map(JsonRow::from).collect();
            println!("{}", serde_json::to_string_pretty(&json)?);
        }
        OutputFormat::Csv => {
            write_csv(io::stdout(), &rows).context("Failed to export CSV")?;
        }
    }

    if rows.iter().any(|row: &BulkCheckRow| row.result.is_err()) {
        process::exit(1);
    }
    Ok(())
}
