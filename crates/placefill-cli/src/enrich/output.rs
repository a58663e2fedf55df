//! Output file naming and the timestamped fallback write.

use std::ffi::OsString;
use std::path::{Path, PathBuf};

use anyhow::Context;

use super::table::Table;

const OUTPUT_PREFIX: &str = "enhanced_";

/// `enhanced_<input file name>` in the working directory.
pub(crate) fn default_output_path(input: &Path) -> PathBuf {
    let mut name = OsString::from(OUTPUT_PREFIX);
    name.push(input.file_name().unwrap_or(input.as_os_str()));
    PathBuf::from(name)
}

/// `<primary stem>_<stamp>.<ext>` in the primary's directory.
pub(crate) fn fallback_output_path(primary: &Path, stamp: &str) -> PathBuf {
    let mut name = primary
        .file_stem()
        .map(OsString::from)
        .unwrap_or_else(|| OsString::from("enhanced"));
    name.push("_");
    name.push(stamp);
    if let Some(ext) = primary.extension() {
        name.push(".");
        name.push(ext);
    }
    primary.with_file_name(name)
}

fn timestamp() -> String {
    chrono::Local::now().format("%Y%m%d_%H%M%S_%3f").to_string()
}

/// Writes `table` to `primary`, falling back to a timestamped sibling when
/// that fails. Returns the path actually written.
pub(crate) fn write_with_fallback(table: &Table, primary: &Path) -> anyhow::Result<PathBuf> {
    let primary_err = match table.write(primary) {
        Ok(()) => return Ok(primary.to_path_buf()),
        Err(e) => e,
    };

    let fallback = fallback_output_path(primary, &timestamp());
    tracing::error!(
        path = %primary.display(),
        fallback = %fallback.display(),
        error = %primary_err,
        "failed to write output file; trying fallback"
    );

    table.write(&fallback).with_context(|| {
        format!(
            "failed to write output to {} ({primary_err}) and to fallback {}",
            primary.display(),
            fallback.display()
        )
    })?;
    Ok(fallback)
}
