//! Processing result types.

/// Result of processing a single repository.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProcessingResult {
    /// A new description was written.
    Updated {
        /// Repository name.
        repository: String,
        /// Description that was written.
        description: String,
    },

    /// A new description was generated but not written (dry run).
    Proposed {
        /// Repository name.
        repository: String,
        /// Description that would have been written.
        description: String,
    },

    /// The generated description matched the current one.
    Unchanged {
        /// Repository name.
        repository: String,
    },

    /// A summary was produced for the report.
    Summarized {
        /// Repository name.
        repository: String,
        /// Whether the fallback text was used because generation failed.
        fallback: bool,
    },

    /// Processing was skipped.
    Skipped {
        /// Repository name.
        repository: String,
        /// Reason for skipping.
        reason: String,
    },

    /// Processing failed.
    Failed {
        /// Repository name.
        repository: String,
        /// Error message.
        error: String,
    },
}
