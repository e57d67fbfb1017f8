//! Small helpers: wildcard expansion of CLI inputs, path display names and
//! human-readable sizes.

use crate::error::{DocFuseError, Result};
use std::path::{Path, PathBuf};

/// Expand input tokens into paths.
///
/// Tokens containing `*` or `?` are treated as glob patterns and expanded
/// in sorted order; other tokens pass through as literal paths. Patterns
/// that match nothing and literal paths that do not exist produce warnings
/// (returned alongside the paths) instead of aborting, so the caller can
/// report them and let the merge itself fail on truly missing files.
pub fn expand_inputs(tokens: &[String]) -> Result<(Vec<PathBuf>, Vec<String>)> {
    let mut paths = Vec::new();
    let mut warnings = Vec::new();

    for token in tokens {
        if token.contains('*') || token.contains('?') {
            let matched = collect_paths_for_pattern(token)?;
            if matched.is_empty() {
                warnings.push(format!("pattern matched no files: {token}"));
            }
            paths.extend(matched);
        } else {
            let path = PathBuf::from(token);
            if !path.exists() {
                warnings.push(format!("file not found: {token}"));
            }
            paths.push(path);
        }
    }

    Ok((paths, warnings))
}

/// Expand a single glob pattern into filesystem paths.
fn collect_paths_for_pattern(pattern: &str) -> Result<Vec<PathBuf>> {
    let mut resolved = Vec::new();

    let entries = glob::glob(pattern).map_err(|err| DocFuseError::Other {
        message: err.to_string(),
    })?;
    for entry in entries {
        let path = entry.map_err(|err| DocFuseError::Other {
            message: err.to_string(),
        })?;
        resolved.push(path);
    }

    Ok(resolved)
}

/// Display name for a path: its final component, or the whole path when
/// there is none.
pub fn base_name(path: &Path) -> String {
    path.file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .unwrap_or_else(|| path.display().to_string())
}

/// Format a byte count for humans (`1.5 MB`, `312 B`).
pub fn format_file_size(bytes: u64) -> String {
    const UNITS: [&str; 4] = ["B", "KB", "MB", "GB"];

    let mut size = bytes as f64;
    let mut unit = 0;
    while size >= 1024.0 && unit < UNITS.len() - 1 {
        size /= 1024.0;
        unit += 1;
    }

    if unit == 0 {
        format!("{bytes} {}", UNITS[0])
    } else {
        format!("{size:.1} {}", UNITS[unit])
    }
}
