//! File discovery for crash reports and package logs.
//!
//! Discovery is deliberately forgiving: a root directory that does not
//! exist contributes nothing (an empty result is not an error), unreadable
//! directory entries are skipped, and a file vanishing after discovery is
//! the parsers' problem to tolerate, not ours to prevent.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use globset::{Glob, GlobSet, GlobSetBuilder};
use once_cell::sync::Lazy;
use tracing::debug;

/// System-wide DiagnosticReports directory.
pub const SYSTEM_REPORTS_DIR: &str = "/Library/Logs/DiagnosticReports";

/// DiagnosticReports directory relative to the home directory.
pub const USER_REPORTS_SUBDIR: &str = "Library/Logs/DiagnosticReports";

/// Homebrew log directories, Apple Silicon first, then Intel.
pub const PACKAGE_LOG_DIRS: [&str; 2] = ["/opt/homebrew/var/log", "/usr/local/var/log"];

/// Well-known Homebrew log file names, checked before the `*.log` glob.
pub const PACKAGE_LOG_NAMES: [&str; 3] = ["brew.log", "brew_update.log", "brew_install.log"];

static CRASH_GLOBS: Lazy<GlobSet> = Lazy::new(|| {
    build_globset(&["*.crash", "*.ips"])
});

static PACKAGE_GLOBS: Lazy<GlobSet> = Lazy::new(|| {
    build_globset(&["*.log"])
});

fn build_globset(patterns: &[&str]) -> GlobSet {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        if let Ok(glob) = Glob::new(pattern) {
            builder.add(glob);
        }
    }
    builder.build().unwrap_or_else(|_| GlobSet::empty())
}

/// The default crash report roots: the user directory (when a home
/// directory can be resolved) followed by the system directory.
#[must_use]
pub fn default_crash_roots() -> Vec<PathBuf> {
    let mut roots = Vec::with_capacity(2);
    if let Some(user_dirs) = directories::UserDirs::new() {
        roots.push(user_dirs.home_dir().join(USER_REPORTS_SUBDIR));
    }
    roots.push(PathBuf::from(SYSTEM_REPORTS_DIR));
    roots
}

/// The default package log roots.
#[must_use]
pub fn default_package_roots() -> Vec<PathBuf> {
    PACKAGE_LOG_DIRS.iter().map(PathBuf::from).collect()
}

/// Find crash report files (`*.crash`, `*.ips`) across the given roots,
/// sorted newest-modified first. Missing roots are skipped.
#[must_use]
pub fn crash_report_files(roots: &[PathBuf]) -> Vec<PathBuf> {
    let mut files = Vec::new();
    for root in roots {
        files.extend(matching_files(root, &CRASH_GLOBS));
    }

    // Newest first. A file whose metadata cannot be read sorts as epoch 0,
    // i.e. last.
    files.sort_by_key(|path| std::cmp::Reverse(mtime_of(path)));

    debug!(count = files.len(), "discovered crash report files");
    files
}

/// Find package log files in the FIRST existing root.
///
/// The three well-known names are listed first (whether or not they exist —
/// readers skip missing files), followed by every `*.log` in the
/// directory. Well-known files that exist therefore appear twice; the
/// original listing behaved the same way and per-line records simply
/// repeat.
#[must_use]
pub fn package_log_files(roots: &[PathBuf]) -> Vec<PathBuf> {
    let Some(root) = roots.iter().find(|r| r.exists()) else {
        return Vec::new();
    };

    let mut files: Vec<PathBuf> = PACKAGE_LOG_NAMES.iter().map(|name| root.join(name)).collect();

    let mut globbed = matching_files(root, &PACKAGE_GLOBS);
    globbed.sort();
    files.extend(globbed);

    debug!(root = %root.display(), count = files.len(), "discovered package log files");
    files
}

/// Non-recursive listing of files in `dir` whose names match `globs`.
fn matching_files(dir: &Path, globs: &GlobSet) -> Vec<PathBuf> {
    let Ok(entries) = fs::read_dir(dir) else {
        return Vec::new();
    };

    let mut files = Vec::new();
    for entry in entries.flatten() {
        let path = entry.path();
        if !path.is_file() {
            continue;
        }
        let Some(name) = path.file_name() else {
            continue;
        };
        if globs.is_match(name) {
            files.push(path);
        }
    }
    files
}

fn mtime_of(path: &Path) -> SystemTime {
    fs::metadata(path)
        .and_then(|m| m.modified())
        .unwrap_or(SystemTime::UNIX_EPOCH)
}

#[cfg(test)]
mod tests {
    use std::fs::File;
    use std::io::Write;

    use tempfile::TempDir;

    use super::*;

    fn touch(dir: &Path, name: &str) -> PathBuf {
        let path = dir.join(name);
        let mut file = File::create(&path).unwrap();
        file.write_all(b"x").unwrap();
        path
    }

    #[test]
    fn test_missing_roots_yield_empty() {
        let roots = vec![PathBuf::from("/nonexistent/reports")];
        assert!(crash_report_files(&roots).is_empty());
        assert!(package_log_files(&roots).is_empty());
    }

    #[test]
    fn test_crash_discovery_filters_extensions() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "a.crash");
        touch(dir.path(), "b.ips");
        touch(dir.path(), "notes.txt");
        touch(dir.path(), "c.log");

        let files = crash_report_files(&[dir.path().to_path_buf()]);
        let names: Vec<_> = files
            .iter()
            .map(|p| p.file_name().unwrap().to_str().unwrap().to_string())
            .collect();

        assert_eq!(files.len(), 2);
        assert!(names.contains(&"a.crash".to_string()));
        assert!(names.contains(&"b.ips".to_string()));
    }

    #[test]
    fn test_crash_discovery_newest_first() {
        let dir = TempDir::new().unwrap();
        let older = touch(dir.path(), "older.ips");
        let newer = touch(dir.path(), "newer.ips");

        let later = SystemTime::now() + std::time::Duration::from_secs(10);
        File::options()
            .write(true)
            .open(&newer)
            .unwrap()
            .set_modified(later)
            .unwrap();

        let files = crash_report_files(&[dir.path().to_path_buf()]);
        assert_eq!(files, vec![newer, older]);
    }

    #[test]
    fn test_crash_discovery_merges_roots() {
        let user = TempDir::new().unwrap();
        let system = TempDir::new().unwrap();
        touch(user.path(), "u.ips");
        touch(system.path(), "s.crash");

        let files = crash_report_files(&[
            user.path().to_path_buf(),
            system.path().to_path_buf(),
        ]);
        assert_eq!(files.len(), 2);
    }

    #[test]
    fn test_package_discovery_uses_first_existing_root() {
        let present = TempDir::new().unwrap();
        touch(present.path(), "custom.log");

        let roots = vec![
            PathBuf::from("/nonexistent/var/log"),
            present.path().to_path_buf(),
        ];
        let files = package_log_files(&roots);

        // Three well-known names (possibly missing) plus the glob match.
        assert_eq!(files.len(), 4);
        assert_eq!(files[0], present.path().join("brew.log"));
        assert_eq!(files[3], present.path().join("custom.log"));
    }

    #[test]
    fn test_package_discovery_duplicates_known_names() {
        let dir = TempDir::new().unwrap();
        touch(dir.path(), "brew.log");

        let files = package_log_files(&[dir.path().to_path_buf()]);
        let brew_count = files
            .iter()
            .filter(|p| p.file_name().unwrap() == "brew.log")
            .count();

        // Listed once by name, once by glob.
        assert_eq!(brew_count, 2);
    }

    #[test]
    fn test_default_roots_shapes() {
        let crash = default_crash_roots();
        assert!(!crash.is_empty());
        assert!(crash
            .last()
            .unwrap()
            .ends_with("Library/Logs/DiagnosticReports"));

        let package = default_package_roots();
        assert_eq!(package.len(), 2);
    }
}
