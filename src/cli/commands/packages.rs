//! Packages command: package-manager log entries.

use std::path::PathBuf;

use crate::cli::{Cli, OutputFormat, PackagesArgs};
use crate::config::Config;
use crate::discovery;
use crate::error::Result;
use crate::model::PackageRecord;
use crate::parser::{LogParser, PackageLogParser};

use super::print_json;

/// Run the packages command.
pub fn run(cli: &Cli, args: &PackagesArgs, config: &Config) -> Result<()> {
    let limit = args.limit.or(Some(config.defaults.package_limit));
    let roots = resolve_roots(args, config);

    let mut parser = PackageLogParser::new(limit).with_roots(roots);
    let records = parser.parse()?;

    render(cli, &records)
}

/// CLI `--dir` beats config overrides beats built-in defaults.
fn resolve_roots(args: &PackagesArgs, config: &Config) -> Vec<PathBuf> {
    if !args.dirs.is_empty() {
        return args.dirs.clone();
    }
    config
        .paths
        .package_log_dirs
        .clone()
        .unwrap_or_else(discovery::default_package_roots)
}

fn render(cli: &Cli, records: &[PackageRecord]) -> Result<()> {
    match cli.effective_output() {
        OutputFormat::Json => print_json(records)?,
        OutputFormat::Tsv => {
            println!("timestamp\tmessage\tfile_name\tline_number");
            for r in records {
                println!(
                    "{}\t{}\t{}\t{}",
                    r.timestamp.as_deref().unwrap_or("-"),
                    r.message,
                    r.file_name,
                    r.line_number
                );
            }
        }
        OutputFormat::Compact => {
            for r in records {
                println!("{}", r.message);
            }
        }
        OutputFormat::Text => {
            if records.is_empty() {
                if !cli.quiet {
                    println!("No package log entries found.");
                }
                return Ok(());
            }
            if !cli.quiet {
                println!("{} package log entries:", records.len());
                println!();
            }
            for r in records {
                println!(
                    "{}  {}  ({}:{})",
                    r.timestamp.as_deref().unwrap_or("-"),
                    r.message,
                    r.file_name,
                    r.line_number
                );
            }
        }
    }
    Ok(())
}
