//! Run summary types.

use super::result::ProcessingResult;
use std::path::PathBuf;

/// Summary of a complete run.
#[derive(Debug, Clone, Default)]
pub struct RunSummary {
    /// Number of repositories listed.
    pub repositories_discovered: usize,

    /// Number of descriptions written.
    pub descriptions_updated: usize,

    /// Number of descriptions generated but not written (dry run).
    pub descriptions_proposed: usize,

    /// Number of repositories whose description was already up to date.
    pub descriptions_unchanged: usize,

    /// Number of summaries produced by the model.
    pub summaries_generated: usize,

    /// Number of summaries that fell back to placeholder text.
    pub summaries_fallback: usize,

    /// Number of repositories skipped (no README, empty output).
    pub skipped: usize,

    /// Number of repositories that failed (generation or write errors).
    pub failed: usize,

    /// Path of the written report, if any.
    pub report_path: Option<PathBuf>,

    /// Whether this was a dry run.
    pub dry_run: bool,
}

impl RunSummary {
    /// Creates a new empty summary.
    #[must_use]
    pub fn new(dry_run: bool) -> Self {
        Self {
            dry_run,
            ..Default::default()
        }
    }

    /// Updates the summary with a processing result.
    pub fn record_result(&mut self, result: &ProcessingResult) {
        match result {
            ProcessingResult::Updated { .. } => self.descriptions_updated += 1,
            ProcessingResult::Proposed { .. } => self.descriptions_proposed += 1,
            ProcessingResult::Unchanged { .. } => self.descriptions_unchanged += 1,
            ProcessingResult::Summarized { fallback, .. } => {
                if *fallback {
                    self.summaries_fallback += 1;
                } else {
                    self.summaries_generated += 1;
                }
            }
            ProcessingResult::Skipped { .. } => self.skipped += 1,
            ProcessingResult::Failed { .. } => self.failed += 1,
        }
    }

    /// Returns true if any failures occurred.
    #[must_use]
    pub fn has_failures(&self) -> bool {
        self.failed > 0 || self.summaries_fallback > 0
    }

    /// Returns true if all operations were successful.
    #[must_use]
    pub fn all_success(&self) -> bool {
        !self.has_failures()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn can_record_result() {
        let mut summary = RunSummary::new(false);

        summary.record_result(&ProcessingResult::Updated {
            repository: "alpha".to_string(),
            description: "Alpha.".to_string(),
        });
        summary.record_result(&ProcessingResult::Unchanged {
            repository: "beta".to_string(),
        });
        summary.record_result(&ProcessingResult::Skipped {
            repository: "gamma".to_string(),
            reason: "empty description".to_string(),
        });

        assert_eq!(summary.descriptions_updated, 1);
        assert_eq!(summary.descriptions_unchanged, 1);
        assert_eq!(summary.skipped, 1);
        assert!(summary.all_success());
    }

    #[test]
    fn fallback_summaries_count_as_failures() {
        let mut summary = RunSummary::new(false);

        summary.record_result(&ProcessingResult::Summarized {
            repository: "alpha".to_string(),
            fallback: false,
        });
        assert!(summary.all_success());

        summary.record_result(&ProcessingResult::Summarized {
            repository: "beta".to_string(),
            fallback: true,
        });
        assert_eq!(summary.summaries_generated, 1);
        assert_eq!(summary.summaries_fallback, 1);
        assert!(summary.has_failures());
    }
}
