//! Input/output path resolution for the `md` command.

use anyhow::{bail, Context, Result};
use std::path::{Path, PathBuf};

/// Absolute path of an input file that must exist.
pub fn resolve_input(input: &str) -> Result<PathBuf> {
    let path = std::path::absolute(input)
        .with_context(|| format!("failed to resolve input file path: {input}"))?;
    if !path.exists() {
        bail!("input file does not exist: {}", path.display());
    }
    Ok(path)
}

/// Explicit output made absolute, or the input path with `extension` swapped in.
pub fn resolve_output(input: &Path, output: Option<&str>, extension: &str) -> Result<PathBuf> {
    match output {
        Some(path) => std::path::absolute(path)
            .with_context(|| format!("failed to resolve output file path: {path}")),
        None => Ok(input.with_extension(extension)),
    }
}

/// Refuse to clobber an existing file unless overwriting is allowed.
pub fn ensure_writable(output: &Path, overwrite: bool) -> Result<()> {
    if output.exists() && !overwrite {
        bail!(
            "output file already exists: {} (use -f to overwrite)",
            output.display()
        );
    }
    Ok(())
}
