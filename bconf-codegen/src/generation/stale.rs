//! Detection and removal of stale generated files.

use std::path::{Path, PathBuf};

use bconf_core::is_generated;
use eyre::{Result, WrapErr};

/// Find generated files under `output_dir` other than `keep`.
///
/// Only files with the given extension whose content starts with the
/// generated-file header are reported. Results are sorted.
pub fn find_stale_files(output_dir: &Path, extension: &str, keep: &Path) -> Result<Vec<PathBuf>> {
    let mut stale = Vec::new();
    scan(output_dir, extension, keep, &mut stale)?;
    stale.sort();
    Ok(stale)
}

fn scan(dir: &Path, extension: &str, keep: &Path, stale: &mut Vec<PathBuf>) -> Result<()> {
    if !dir.is_dir() {
        return Ok(());
    }

    let entries =
        std::fs::read_dir(dir).wrap_err_with(|| format!("failed to read '{}'", dir.display()))?;
    for entry in entries {
        let path = entry?.path();

        if path.is_dir() {
            scan(&path, extension, keep, stale)?;
        } else if path.extension().is_some_and(|ext| ext == extension) && path != keep {
            // Unreadable or non-UTF-8 files are not ours.
            let generated = std::fs::read_to_string(&path)
                .map(|content| is_generated(&content))
                .unwrap_or(false);
            if generated {
                stale.push(path);
            }
        }
    }

    Ok(())
}

/// Remove stale generated files under `output_dir`, then prune directories
/// left empty. Returns the removed files.
pub fn remove_stale_files(output_dir: &Path, extension: &str, keep: &Path) -> Result<Vec<PathBuf>> {
    let stale = find_stale_files(output_dir, extension, keep)?;
    for path in &stale {
        std::fs::remove_file(path)
            .wrap_err_with(|| format!("failed to remove '{}'", path.display()))?;
        tracing::info!(path = %path.display(), "removed stale generated file");
        if let Some(parent) = path.parent() {
            remove_empty_dirs(parent, output_dir)?;
        }
    }
    Ok(stale)
}

/// Remove `dir` and its ancestors while they are empty, stopping at `base`.
fn remove_empty_dirs(dir: &Path, base: &Path) -> Result<()> {
    let mut current = dir;
    while current != base && current.starts_with(base) {
        if std::fs::read_dir(current)?.next().is_some() {
            break;
        }
        std::fs::remove_dir(current)?;
        match current.parent() {
            Some(parent) => current = parent,
            None => break,
        }
    }
    Ok(())
}
