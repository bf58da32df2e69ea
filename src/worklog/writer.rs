//! Markdown work log.
//!
//! ```text
//! ---
//! tags: [work-log, league]
//! date: 2025-06-18
//! project: League
//! ---
//!
//! # Work Log for League (2025-06-18)
//!
//! - **Task**: Design
//!   - Duration: 1m5s
//! ```

use crate::config::Config;
use crate::errors::{AppError, AppResult};
use crate::utils::format_duration;
use crate::utils::path::expand_tilde;
use crate::worklog::TaskEntry;
use chrono::NaiveDate;
use std::fmt::Write as _;
use std::fs;
use std::path::PathBuf;

/// `<YYYY>-<MM>-<DD>_<project>.md`
pub fn file_name(project: &str, date: NaiveDate) -> String {
    format!("{}_{}.md", date.format("%Y-%m-%d"), project)
}

pub fn render_document(project: &str, date: NaiveDate, entries: &[TaskEntry]) -> String {
    let day = date.format("%Y-%m-%d");
    let mut doc = String::new();

    // Writing into a String cannot fail.
    let _ = write!(
        doc,
        "---\ntags: [work-log, {}]\ndate: {}\nproject: {}\n---\n\n",
        project.to_lowercase(),
        day,
        project
    );
    let _ = write!(doc, "# Work Log for {} ({})\n\n", project, day);

    for entry in entries {
        let _ = writeln!(doc, "- **Task**: {}", entry.task);
        let _ = writeln!(doc, "  - Duration: {}", format_duration(entry.duration));
    }

    doc
}

pub struct LogWriter {
    dir: PathBuf,
}

impl LogWriter {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Writer for the configured `log_dir`. A leading `~/` is resolved at
    /// write time.
    pub fn from_config(cfg: &Config) -> Self {
        Self::new(&cfg.log_dir)
    }

    pub fn resolved_dir(&self) -> AppResult<PathBuf> {
        expand_tilde(&self.dir.to_string_lossy())
    }

    /// Create the directory if needed and (over)write the day's file.
    /// Returns the path written.
    pub fn write(
        &self,
        project: &str,
        entries: &[TaskEntry],
        date: NaiveDate,
    ) -> AppResult<PathBuf> {
        let dir = self.resolved_dir()?;
        fs::create_dir_all(&dir).map_err(|source| AppError::CreateDir {
            path: dir.clone(),
            source,
        })?;

        let path = dir.join(file_name(project, date));
        fs::write(&path, render_document(project, date, entries)).map_err(|source| {
            AppError::WriteLog {
                path: path.clone(),
                source,
            }
        })?;

        tracing::info!(path = %path.display(), entries = entries.len(), "work log written");
        Ok(path)
    }
}
