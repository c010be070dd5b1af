//! Output files: a compact JSON array and a delimited text table.

use std::io::Write;
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use thiserror::Error;

use crate::models::NutritionRecord;

#[derive(Error, Debug)]
pub enum WriteError {
    #[error("Failed to write '{}': {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("Failed to serialize records: {0}")]
    Json(#[from] serde_json::Error),
}

/// Where and how the collected records are written.
#[derive(Debug, Clone)]
pub struct OutputFiles {
    pub json_path: PathBuf,
    pub csv_path: PathBuf,
    pub delimiter: char,
}

impl OutputFiles {
    /// Writes both files.
    ///
    /// Both contents are staged in temp files next to their targets before
    /// either output is replaced, so a failure while rendering or staging
    /// leaves existing outputs as they were.
    pub fn write(&self, records: &[NutritionRecord]) -> Result<(), WriteError> {
        let json = to_json_string(records)?;
        let csv = to_delimited_string(records, self.delimiter);

        let staged_json = stage(&self.json_path, &json)?;
        let staged_csv = stage(&self.csv_path, &csv)?;

        persist(staged_json, &self.json_path)?;
        persist(staged_csv, &self.csv_path)?;

        tracing::info!(
            "Wrote {} record(s) to {} and {}",
            records.len(),
            self.json_path.display(),
            self.csv_path.display()
        );
        Ok(())
    }
}

pub fn to_json_string(records: &[NutritionRecord]) -> Result<String, serde_json::Error> {
    serde_json::to_string(records)
}

/// Header line followed by one line per record, with no trailing newline.
///
/// Values are not quoted; a delimiter inside a value is written as-is.
pub fn to_delimited_string(records: &[NutritionRecord], delimiter: char) -> String {
    let delimiter = delimiter.to_string();
    let mut lines = Vec::with_capacity(records.len() + 1);

    lines.push(NutritionRecord::FIELD_NAMES.join(delimiter.as_str()));
    for record in records {
        lines.push(record.field_values().join(delimiter.as_str()));
    }

    lines.join("\n")
}

fn io_error(path: &Path) -> impl Fn(std::io::Error) -> WriteError + '_ {
    move |source| WriteError::Io {
        path: path.to_path_buf(),
        source,
    }
}

/// Writes `contents` to a temp file in the directory of `path`.
fn stage(path: &Path, contents: &str) -> Result<NamedTempFile, WriteError> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };
    std::fs::create_dir_all(dir).map_err(io_error(path))?;

    let mut file = NamedTempFile::new_in(dir).map_err(io_error(path))?;
    file.write_all(contents.as_bytes())
        .and_then(|_| file.flush())
        .map_err(io_error(path))?;
    Ok(file)
}

fn persist(file: NamedTempFile, path: &Path) -> Result<(), WriteError> {
    file.persist(path)
        .map(|_| ())
        .map_err(|e| io_error(path)(e.error))
}
