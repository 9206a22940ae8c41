// Licensed under the Apache License, Version 2.0 <LICENSE-APACHE or
// http://www.apache.org/licenses/LICENSE-2.0> or the MIT license
// <LICENSE-MIT or http://opensource.org/licenses/MIT>, at your
// option. This file may not be copied, modified, or distributed
// except according to those terms.

//! External collaborator interfaces
//!
//! The engine reads raw rows through [`RowSource`] and persists the rendered
//! report through [`ReportSink`]. Concrete spreadsheet bindings live outside
//! this crate; [`LocalWorkbook`] is a directory-backed implementation used by
//! the binary and the integration tests.

use async_trait::async_trait;
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;
use thiserror::Error;

/// Errors surfaced by row sources and report sinks
#[derive(Debug, Error)]
pub enum SheetError {
    #[error("sheet I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("malformed sheet data in {path}: {source}")]
    Malformed {
        path: String,
        source: serde_json::Error,
    },

    #[error("sheet backend unavailable: {0}")]
    Unavailable(String),
}

/// Handle to a named report destination
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReportTarget(pub String);

/// Produces raw row tuples per logical week sheet
#[async_trait]
pub trait RowSource: Send + Sync {
    /// Fetch raw rows for one named week sheet
    ///
    /// `Ok(None)` signals the sheet does not exist. Callers treat absence as
    /// a soft condition and continue with the remaining weeks.
    async fn fetch_week(&self, week_name: &str) -> Result<Option<Vec<Vec<String>>>, SheetError>;
}

/// Persists the rendered report with change detection
#[async_trait]
pub trait ReportSink: Send + Sync {
    /// Return a handle to the report destination, creating it when missing
    async fn ensure_report_target(&self) -> Result<ReportTarget, SheetError>;

    /// Overwrite the destination only when content differs
    ///
    /// The stored content is the title, a blank line, then the lines. When it
    /// already matches byte for byte, nothing is written and `false` is
    /// returned.
    async fn write_if_changed(
        &self,
        target: &ReportTarget,
        title: &str,
        lines: &[String],
    ) -> Result<bool, SheetError>;
}

/// Directory-backed workbook
///
/// One JSON file per week sheet (`<name>.json`, an array of row arrays) and a
/// plain-text report file named after the report sheet.
pub struct LocalWorkbook {
    dir: PathBuf,
    report_name: String,
}

impl LocalWorkbook {
    /// Create a workbook over `dir` writing its report as `<report_name>.txt`
    pub fn new(dir: impl Into<PathBuf>, report_name: impl Into<String>) -> Self {
        Self {
            dir: dir.into(),
            report_name: report_name.into(),
        }
    }

    fn week_path(&self, week_name: &str) -> PathBuf {
        self.dir.join(format!("{}.json", week_name))
    }

    fn report_path(&self) -> PathBuf {
        self.dir.join(format!("{}.txt", self.report_name))
    }
}

#[async_trait]
impl RowSource for LocalWorkbook {
    async fn fetch_week(&self, week_name: &str) -> Result<Option<Vec<Vec<String>>>, SheetError> {
        let path = self.week_path(week_name);
        let content = match fs::read_to_string(&path) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(None),
            Err(err) => return Err(err.into()),
        };

        let rows = serde_json::from_str(&content).map_err(|source| SheetError::Malformed {
            path: path.display().to_string(),
            source,
        })?;
        Ok(Some(rows))
    }
}

#[async_trait]
impl ReportSink for LocalWorkbook {
    async fn ensure_report_target(&self) -> Result<ReportTarget, SheetError> {
        fs::create_dir_all(&self.dir)?;
        let path = self.report_path();
        if !path.exists() {
            fs::write(&path, "")?;
        }
        Ok(ReportTarget(path.display().to_string()))
    }

    async fn write_if_changed(
        &self,
        target: &ReportTarget,
        title: &str,
        lines: &[String],
    ) -> Result<bool, SheetError> {
        let mut content = Vec::with_capacity(lines.len() + 2);
        content.push(title.to_string());
        content.push(String::new());
        content.extend(lines.iter().cloned());
        let new_content = content.join("\n");

        let old_content = match fs::read_to_string(&target.0) {
            Ok(content) => content,
            Err(err) if err.kind() == ErrorKind::NotFound => String::new(),
            Err(err) => return Err(err.into()),
        };
        if old_content == new_content {
            return Ok(false);
        }

        fs::write(&target.0, new_content)?;
        Ok(true)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn workbook() -> (TempDir, LocalWorkbook) {
        let temp_dir = TempDir::new().expect("Failed to create temp dir");
        let workbook = LocalWorkbook::new(temp_dir.path(), "Rotation Report");
        (temp_dir, workbook)
    }

    #[tokio::test]
    async fn test_fetch_missing_week() {
        let (_dir, workbook) = workbook();

        let rows = workbook.fetch_week("Week 1").await.unwrap();
        assert!(rows.is_none());
    }

    #[tokio::test]
    async fn test_fetch_week_rows() {
        let (dir, workbook) = workbook();
        fs::write(
            dir.path().join("Week 1.json"),
            r#"[["Back", "Barbell Rows"], ["Chest", "Bench Press"]]"#,
        )
        .unwrap();

        let rows = workbook.fetch_week("Week 1").await.unwrap().unwrap();
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0], vec!["Back".to_string(), "Barbell Rows".to_string()]);
    }

    #[tokio::test]
    async fn test_fetch_malformed_week() {
        let (dir, workbook) = workbook();
        fs::write(dir.path().join("Week 1.json"), "not json").unwrap();

        let err = workbook.fetch_week("Week 1").await.unwrap_err();
        assert!(matches!(err, SheetError::Malformed { .. }));
    }

    #[tokio::test]
    async fn test_write_if_changed_detects_identical_content() {
        let (_dir, workbook) = workbook();
        let lines = vec!["line one".to_string(), "line two".to_string()];

        let target = workbook.ensure_report_target().await.unwrap();
        assert!(workbook.write_if_changed(&target, "Title", &lines).await.unwrap());
        assert!(!workbook.write_if_changed(&target, "Title", &lines).await.unwrap());

        let changed = vec!["line one".to_string(), "line three".to_string()];
        assert!(workbook.write_if_changed(&target, "Title", &changed).await.unwrap());
    }

    #[tokio::test]
    async fn test_report_content_layout() {
        let (dir, workbook) = workbook();
        let lines = vec!["first".to_string(), "second".to_string()];

        let target = workbook.ensure_report_target().await.unwrap();
        workbook.write_if_changed(&target, "Title", &lines).await.unwrap();

        let stored = fs::read_to_string(dir.path().join("Rotation Report.txt")).unwrap();
        assert_eq!(stored, "Title\n\nfirst\nsecond");
    }
}
