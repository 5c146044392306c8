//! Check command: platform compatibility probes.

use console::style;

use crate::cli::{Cli, OutputFormat};
use crate::compat::{self, CompatCheck};
use crate::error::{Result, SiftError};

/// Run the check command. Exits non-zero when either probe fails.
pub fn run(cli: &Cli) -> Result<()> {
    let macos = compat::check_macos_version();
    let unified = compat::verify_unified_logging();

    match cli.effective_output() {
        OutputFormat::Json => {
            let status = if macos.ok && unified.ok { "ok" } else { "error" };
            let body = serde_json::json!({
                "status": status,
                "macos_compatible": macos.ok,
                "macos_message": macos.message,
                "unified_logging_available": unified.ok,
                "unified_logging_message": unified.message,
            });
            println!("{}", serde_json::to_string_pretty(&body)?);
        }
        _ => {
            print_check(&macos);
            print_check(&unified);
        }
    }

    for check in [&macos, &unified] {
        if !check.ok {
            return Err(SiftError::incompatible(check.message.clone()));
        }
    }
    Ok(())
}

fn print_check(check: &CompatCheck) {
    let mark = if check.ok {
        style("✓").green()
    } else {
        style("✗").red()
    };
    println!("{mark} {}", check.message);
}
