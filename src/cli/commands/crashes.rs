//! Crashes command: crash reports, newest first.

use std::path::PathBuf;

use crate::cli::{Cli, CrashesArgs, OutputFormat};
use crate::config::Config;
use crate::discovery;
use crate::error::Result;
use crate::model::{CrashFormat, CrashRecord};
use crate::parser::{CrashReportParser, LogParser};

use super::{format_age, format_mtime, print_json};

/// Run the crashes command.
pub fn run(cli: &Cli, args: &CrashesArgs, config: &Config) -> Result<()> {
    let limit = args.limit.or(Some(config.defaults.crash_limit));
    let roots = resolve_roots(args, config);

    let mut parser = CrashReportParser::new(limit).with_roots(roots);
    let records = parser.parse()?;

    render(cli, &records)
}

/// CLI `--dir` beats config overrides beats built-in defaults.
fn resolve_roots(args: &CrashesArgs, config: &Config) -> Vec<PathBuf> {
    if !args.dirs.is_empty() {
        return args.dirs.clone();
    }
    config
        .paths
        .crash_report_dirs
        .clone()
        .unwrap_or_else(discovery::default_crash_roots)
}

fn render(cli: &Cli, records: &[CrashRecord]) -> Result<()> {
    match cli.effective_output() {
        OutputFormat::Json => print_json(records)?,
        OutputFormat::Tsv => {
            println!("file_name\tformat\tprocess\ttimestamp\texception_type\tmodified");
            for r in records {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    r.file_name,
                    r.format.extension(),
                    r.process.as_deref().unwrap_or("-"),
                    r.timestamp.as_deref().unwrap_or("-"),
                    r.exception_type.as_deref().unwrap_or("-"),
                    format_mtime(r.modified_time),
                );
            }
        }
        OutputFormat::Compact => {
            for r in records {
                println!(
                    "{} {}",
                    r.file_name,
                    r.process.as_deref().unwrap_or("-")
                );
            }
        }
        OutputFormat::Text => {
            if records.is_empty() {
                if !cli.quiet {
                    println!("No crash reports found.");
                }
                return Ok(());
            }
            if !cli.quiet {
                println!("{} crash reports:", records.len());
                println!();
            }
            for r in records {
                let tag = match r.format {
                    CrashFormat::Ips => "ips",
                    CrashFormat::Crash => "crash",
                };
                println!(
                    "  {}  [{}]  {}",
                    r.file_name,
                    tag,
                    r.process.as_deref().unwrap_or("-")
                );
                if let Some(exception) = &r.exception_type {
                    println!(
                        "      {}: {}",
                        exception,
                        r.exception_message.as_deref().unwrap_or("")
                    );
                }
                println!(
                    "      modified {} ({}), {} bytes",
                    format_mtime(r.modified_time),
                    format_age(r.modified_time),
                    r.file_size
                );
            }
        }
    }
    Ok(())
}
