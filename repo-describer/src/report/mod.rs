//! Markdown portfolio report.
//!
//! Documented repositories are accumulated during a summarize run, then
//! rendered once and written to a single timestamped file.

mod entry;
mod error;
mod renderer;

pub use entry::{sort_for_report, DocumentedRepository};
pub use error::ReportError;
pub use renderer::ReportRenderer;

use std::path::{Path, PathBuf};
use time::macros::format_description;
use time::OffsetDateTime;
use tracing::info;

/// Builds the report file name for a generation time.
///
/// Format: `github_projects_report_{YYYYMMDD_HHMMSS}.md`
///
/// # Errors
///
/// Returns [`ReportError::FormatError`] if the timestamp cannot be formatted.
pub fn report_file_name(generated_at: OffsetDateTime) -> Result<String, ReportError> {
    let stamp = generated_at.format(format_description!(
        "[year][month][day]_[hour][minute][second]"
    ))?;
    Ok(format!("github_projects_report_{stamp}.md"))
}

/// Writes a rendered report into `output_dir`.
///
/// # Returns
///
/// The path of the written file.
///
/// # Errors
///
/// Returns [`ReportError::IoError`] if the file cannot be written. There is
/// no partial-write recovery.
pub fn write_report(
    output_dir: &Path,
    generated_at: OffsetDateTime,
    contents: &str,
) -> Result<PathBuf, ReportError> {
    let path = output_dir.join(report_file_name(generated_at)?);
    std::fs::write(&path, contents).map_err(|source| ReportError::IoError {
        path: path.display().to_string(),
        source,
    })?;
    info!(path = %path.display(), "Report written");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;
    use time::macros::datetime;

    #[test]
    fn file_name_uses_timestamp() {
        let name = report_file_name(datetime!(2026-10-19 08:05:09 UTC)).unwrap();
        assert_eq!(name, "github_projects_report_20261019_080509.md");
    }

    #[test]
    fn writes_report_to_directory() {
        let temp = TempDir::new().unwrap();
        let path =
            write_report(temp.path(), datetime!(2026-10-19 08:05:09 UTC), "# Report\n").unwrap();

        assert_eq!(
            path,
            temp.path().join("github_projects_report_20261019_080509.md")
        );
        assert_eq!(std::fs::read_to_string(path).unwrap(), "# Report\n");
    }

    #[test]
    fn missing_directory_is_an_error() {
        let temp = TempDir::new().unwrap();
        let result = write_report(
            &temp.path().join("missing"),
            datetime!(2026-10-19 08:05:09 UTC),
            "# Report\n",
        );
        assert!(matches!(result, Err(ReportError::IoError { .. })));
    }
}
