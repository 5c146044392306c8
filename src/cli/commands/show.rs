//! Show command: unified logs for a named source.

use crate::api::SiftClient;
use crate::cli::{Cli, OutputFormat, ShowArgs};
use crate::config::Config;
use crate::error::Result;
use crate::model::{LogRecord, LogSource};

use super::print_json;

/// Run the show command.
pub fn run(cli: &Cli, args: &ShowArgs, config: &Config) -> Result<()> {
    let client = SiftClient::with_config(config.clone());
    let source = LogSource::from(args.source);

    // Hardware and boot apply their own default and cap; the configured
    // default limit only backs the plain sources.
    let limit = match source {
        LogSource::Hardware | LogSource::Boot => args.limit,
        _ => args.limit.or(Some(config.defaults.show_limit)),
    };

    let records = match &args.predicate {
        Some(predicate) => client.logs_with_predicate(
            predicate,
            source.log_type(),
            args.last.as_deref(),
            limit,
        )?,
        None => client.logs(source, args.last.as_deref(), limit)?,
    };

    render(cli, source, &records)
}

fn render(cli: &Cli, source: LogSource, records: &[LogRecord]) -> Result<()> {
    match cli.effective_output() {
        OutputFormat::Json => print_json(records)?,
        OutputFormat::Tsv => {
            println!("timestamp\thostname\tprocess\tpid\tlevel\tmessage");
            for r in records {
                println!(
                    "{}\t{}\t{}\t{}\t{}\t{}",
                    r.timestamp, r.hostname, r.process, r.pid, r.level, r.message
                );
            }
        }
        OutputFormat::Compact => {
            for r in records {
                println!("{} {}: {}", r.timestamp, r.process, r.message);
            }
        }
        OutputFormat::Text => {
            if records.is_empty() {
                if !cli.quiet {
                    println!("No {} records found.", source.log_type());
                }
                return Ok(());
            }
            if !cli.quiet {
                println!("{} {} records:", records.len(), source.log_type());
                println!();
            }
            for r in records {
                println!(
                    "{}  {}  {}[{}] <{}>: {}",
                    r.timestamp, r.hostname, r.process, r.pid, r.level, r.message
                );
            }
        }
    }
    Ok(())
}
