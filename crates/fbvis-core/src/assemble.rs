//! Log assembly: fragment files → one logical line sequence plus a persisted
//! concatenated artifact for later passes. Content is never interpreted here.

use crate::domain::{VisError, VisResult};
use std::fs;
use std::path::{Path, PathBuf};

/// File name of the persisted concatenation, written next to the fragments.
pub const COMPILED_LOG: &str = "compiled.out";

/// Concatenates `fragments` in the given order (the caller supplies a
/// deterministic ordering), writes the result to `artifact`, and returns the
/// logical line sequence. A fragment without a trailing newline is normalized
/// so concatenation can never merge the last line of one fragment with the
/// first line of the next.
pub fn concatenate(fragments: &[PathBuf], artifact: &Path) -> VisResult<Vec<String>> {
    let mut compiled = String::new();
    for fragment in fragments {
        let text =
            fs::read_to_string(fragment).map_err(|source| VisError::io(fragment, source))?;
        compiled.push_str(&text);
        if !compiled.is_empty() && !compiled.ends_with('\n') {
            compiled.push('\n');
        }
    }

    fs::write(artifact, &compiled).map_err(|source| VisError::io(artifact, source))?;

    Ok(compiled.lines().map(str::to_string).collect())
}
