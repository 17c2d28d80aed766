//! Input discovery for a run directory.
//!
//! Filesystem enumeration order is unspecified across platforms, so every
//! listing here is sorted lexicographically by file name before use. The
//! assembler receives an explicit ordered list and never touches `read_dir`.

use crate::domain::{VisError, VisResult};
use globset::Glob;
use std::fs;
use std::path::{Path, PathBuf};

pub const INPUT_PATTERN: &str = "*.in";
pub const FRAGMENT_PATTERN: &str = "*.out";

/// The run prefix is the stem of the single `*.in` file in the directory.
/// Zero or multiple candidates abort discovery. The prefix is used for
/// display and logging only, never for parsing.
pub fn discover_run_prefix(dir: &Path) -> VisResult<String> {
    let candidates = matching_files(dir, INPUT_PATTERN)?;
    match candidates.as_slice() {
        [only] => {
            let stem = only
                .file_stem()
                .and_then(|stem| stem.to_str())
                .unwrap_or_default();
            Ok(stem.to_string())
        }
        _ => Err(VisError::InputDiscovery {
            pattern: INPUT_PATTERN.to_string(),
            found: candidates.len(),
        }),
    }
}

/// All `*.out` fragments, sorted lexicographically by name. An empty result
/// is legal here; the assembler decides what an empty log means.
pub fn discover_fragments(dir: &Path) -> VisResult<Vec<PathBuf>> {
    matching_files(dir, FRAGMENT_PATTERN)
}

fn matching_files(dir: &Path, pattern: &str) -> VisResult<Vec<PathBuf>> {
    let matcher = Glob::new(pattern)
        .map_err(|error| VisError::Internal {
            message: format!("glob pattern '{pattern}' failed to compile: {error}"),
        })?
        .compile_matcher();

    let entries = fs::read_dir(dir).map_err(|source| VisError::io(dir, source))?;
    let mut names: Vec<String> = Vec::new();
    for entry in entries {
        let entry = entry.map_err(|source| VisError::io(dir, source))?;
        let name = entry.file_name();
        let Some(name) = name.to_str() else {
            continue;
        };
        if matcher.is_match(name) && entry.path().is_file() {
            names.push(name.to_string());
        }
    }
    names.sort_unstable();

    Ok(names.into_iter().map(|name| dir.join(name)).collect())
}
