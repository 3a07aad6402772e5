//! Saved text reports on disk.

use crate::assessment::AssessmentResult;
use crate::report::render_text_report;
use std::fs::{self, OpenOptions};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use tracing::info;

const REPORT_PREFIX: &str = "career_report_";
const REPORT_EXTENSION: &str = "txt";

#[derive(Debug, thiserror::Error)]
pub enum ArchiveError {
    #[error("report archive unavailable: {0}")]
    Io(#[from] std::io::Error),
    #[error("'{0}' is not a valid report file name")]
    InvalidName(String),
    #[error("report '{0}' not found")]
    NotFound(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchivedReport {
    pub file_name: String,
    pub path: PathBuf,
}

/// Directory of rendered reports, one file per finished assessment.
#[derive(Debug, Clone)]
pub struct ReportArchive {
    dir: PathBuf,
}

impl ReportArchive {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Write the rendered report under a timestamped name. A name already taken within
    /// the same second gets a `_2`, `_3`, ... suffix; existing reports are never replaced.
    pub fn save(&self, result: &AssessmentResult) -> Result<PathBuf, ArchiveError> {
        fs::create_dir_all(&self.dir)?;
        let stem = format!(
            "{REPORT_PREFIX}{}_{}",
            slug(&result.user_name),
            result.completed_at.format("%Y%m%d_%H%M%S")
        );
        let body = render_text_report(result);

        let mut attempt: u32 = 1;
        loop {
            let file_name = if attempt == 1 {
                format!("{stem}.{REPORT_EXTENSION}")
            } else {
                format!("{stem}_{attempt}.{REPORT_EXTENSION}")
            };
            let path = self.dir.join(file_name);

            match OpenOptions::new().write(true).create_new(true).open(&path) {
                Ok(mut file) => {
                    file.write_all(body.as_bytes())?;
                    info!(path = %path.display(), "report saved");
                    return Ok(path);
                }
                Err(err) if err.kind() == ErrorKind::AlreadyExists => attempt += 1,
                Err(err) => return Err(err.into()),
            }
        }
    }

    /// Saved reports sorted by file name. A missing directory means no history yet.
    pub fn list(&self) -> Result<Vec<ArchivedReport>, ArchiveError> {
        let entries = match fs::read_dir(&self.dir) {
            Ok(entries) => entries,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Vec::new()),
            Err(err) => return Err(err.into()),
        };

        let mut reports = Vec::new();
        for entry in entries {
            let path = entry?.path();
            let is_report = path.is_file()
                && path.extension().and_then(|ext| ext.to_str()) == Some(REPORT_EXTENSION);
            if !is_report {
                continue;
            }
            if let Some(file_name) = path.file_name().and_then(|name| name.to_str()) {
                reports.push(ArchivedReport {
                    file_name: file_name.to_string(),
                    path: path.clone(),
                });
            }
        }

        reports.sort_by(|a, b| a.file_name.cmp(&b.file_name));
        Ok(reports)
    }

    pub fn read(&self, file_name: &str) -> Result<String, ArchiveError> {
        let trimmed = file_name.trim();
        if trimmed.is_empty()
            || trimmed.contains(['/', '\\'])
            || trimmed.contains("..")
        {
            return Err(ArchiveError::InvalidName(file_name.to_string()));
        }

        match fs::read_to_string(self.dir.join(trimmed)) {
            Ok(contents) => Ok(contents),
            Err(err) if err.kind() == ErrorKind::NotFound => {
                Err(ArchiveError::NotFound(trimmed.to_string()))
            }
            Err(err) => Err(err.into()),
        }
    }
}

fn slug(name: &str) -> String {
    let slug: String = name
        .trim()
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() { c.to_ascii_lowercase() } else { '_' })
        .collect();
    let slug = slug.trim_matches('_');
    if slug.is_empty() {
        "guest".to_string()
    } else {
        slug.to_string()
    }
}
