//! Atomic JSON writers.

use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

use lesson_model::LessonStructure;
use serde::Serialize;
use tracing::info;

use crate::error::{OutputError, Result};
use crate::report::ReviewReport;

/// Write the reconciled hierarchy consumed by the site.
pub fn write_structure(path: &Path, structure: &LessonStructure) -> Result<()> {
    write_json(path, structure, "lesson structure")?;
    info!(
        path = %path.display(),
        groups = structure.major_lessons.len(),
        entries = structure.total_count(),
        "wrote lesson structure"
    );
    Ok(())
}

pub fn write_report(path: &Path, report: &ReviewReport) -> Result<()> {
    write_json(path, report, "review report")?;
    info!(
        path = %path.display(),
        unmatched = report.unmatched.len(),
        unclaimed = report.unclaimed_chapters.len(),
        "wrote review report"
    );
    Ok(())
}

/// Pretty JSON with a trailing newline, written through a sibling temp file
/// and renamed over `path`. Missing parent directories are created.
fn write_json<T: Serialize>(path: &Path, value: &T, what: &'static str) -> Result<()> {
    let mut bytes = serde_json::to_vec_pretty(value)
        .map_err(|source| OutputError::Serialization { what, source })?;
    bytes.push(b'\n');

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent).map_err(|e| OutputError::Io {
            operation: "create directory",
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let temp_path = temp_path_for(path);
    let mut file = File::create(&temp_path).map_err(|e| OutputError::Io {
        operation: "create",
        path: temp_path.clone(),
        source: e,
    })?;
    file.write_all(&bytes).map_err(|e| OutputError::Io {
        operation: "write",
        path: temp_path.clone(),
        source: e,
    })?;
    file.sync_all().map_err(|e| OutputError::Io {
        operation: "sync",
        path: temp_path.clone(),
        source: e,
    })?;
    drop(file);

    fs::rename(&temp_path, path).map_err(|e| OutputError::AtomicWriteFailed {
        temp_path: temp_path.clone(),
        target_path: path.to_path_buf(),
        source: e,
    })
}

fn temp_path_for(path: &Path) -> PathBuf {
    let mut name = path
        .file_name()
        .map(std::ffi::OsStr::to_os_string)
        .unwrap_or_default();
    name.push(".tmp");
    path.with_file_name(name)
}
