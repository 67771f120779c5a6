//! Report error types.

/// Errors that can occur while rendering or writing the report.
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// Handlebars rendering error.
    #[error("Template rendering error: {0}")]
    RenderError(#[from] handlebars::RenderError),

    /// Date formatting error.
    #[error("Date formatting error: {0}")]
    FormatError(#[from] time::error::Format),

    /// Failed to write the report file.
    #[error("Failed to write report '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
