//! Per-repository outcomes and the aggregated run summary.

mod result;
mod run_summary;

pub use result::ProcessingResult;
pub use run_summary::RunSummary;
