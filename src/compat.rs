//! Platform compatibility probes.
//!
//! Live unified-log queries need macOS 10.12+ (the first release with the
//! Unified Logging System) and the `log` executable on PATH. Both probes
//! return a result-plus-message pair so the `check` command can render
//! them; the parsers themselves run anywhere, which keeps the crate usable
//! for inspecting report directories copied off a Mac.

use std::path::PathBuf;
use std::process::Command;

/// Outcome of a single compatibility probe.
#[derive(Debug, Clone)]
pub struct CompatCheck {
    /// Whether the probe passed.
    pub ok: bool,
    /// Human-readable explanation either way.
    pub message: String,
}

impl CompatCheck {
    fn pass(message: impl Into<String>) -> Self {
        Self {
            ok: true,
            message: message.into(),
        }
    }

    fn fail(message: impl Into<String>) -> Self {
        Self {
            ok: false,
            message: message.into(),
        }
    }
}

/// Check that this is macOS 10.12 or later.
#[must_use]
pub fn check_macos_version() -> CompatCheck {
    if !cfg!(target_os = "macos") {
        return CompatCheck::fail(format!(
            "This tool only supports macOS. Detected: {}",
            std::env::consts::OS
        ));
    }

    let Some(version) = product_version() else {
        return CompatCheck::fail("Could not detect macOS version.");
    };

    match parse_major_minor(&version) {
        Some((major, minor)) => {
            if major > 10 || (major == 10 && minor >= 12) {
                CompatCheck::pass(format!("macOS {version} is compatible (10.12+ required)"))
            } else {
                CompatCheck::fail(format!(
                    "macOS {version} is too old. Requires 10.12+ (Sierra)"
                ))
            }
        }
        None => CompatCheck::fail(format!("Could not parse macOS version: {version}")),
    }
}

/// Check that the `log` command is on PATH.
#[must_use]
pub fn verify_unified_logging() -> CompatCheck {
    match find_log_tool() {
        Some(path) => CompatCheck::pass(format!(
            "Unified Logging System found at: {}",
            path.display()
        )),
        None => {
            CompatCheck::fail("Unified Logging System not found. 'log' command unavailable.")
        }
    }
}

/// Ask `sw_vers` for the product version, e.g. `"14.2.1"`.
fn product_version() -> Option<String> {
    let output = Command::new("sw_vers")
        .arg("-productVersion")
        .output()
        .ok()?;
    if !output.status.success() {
        return None;
    }
    let version = String::from_utf8_lossy(&output.stdout).trim().to_string();
    if version.is_empty() {
        None
    } else {
        Some(version)
    }
}

/// Scan PATH for the `log` executable.
fn find_log_tool() -> Option<PathBuf> {
    let path_var = std::env::var_os("PATH")?;
    std::env::split_paths(&path_var)
        .map(|dir| dir.join("log"))
        .find(|candidate| candidate.is_file())
}

/// Parse the leading `major.minor` out of a version string.
fn parse_major_minor(version: &str) -> Option<(u32, u32)> {
    let mut parts = version.split('.');
    let major = parts.next()?.parse().ok()?;
    let minor = parts.next().unwrap_or("0").parse().ok()?;
    Some((major, minor))
}
