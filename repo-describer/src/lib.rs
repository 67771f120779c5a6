#![doc = include_str!(concat!("../", env!("CARGO_PKG_README")))]

pub mod config;
pub mod github;
pub mod llm;
pub mod prompt;
pub mod rate_limit;
pub mod report;
pub mod runner;
pub mod summary;

#[cfg(test)]
mod test_support;

pub use config::{ConfigError, Settings};
pub use github::{
    build_client, fetch_languages, fetch_readme, list_public_repositories, update_description,
    DescriptionUpdate, GitHubError, Languages, ReadmeLookup, Repository,
};
pub use llm::{
    build_generator, fallback_summary, finalize_description, Backend, GenerationError,
    GenerationMode, HostedGenerator, LlmConfig, LocalGenerator, TextGenerator,
};
pub use prompt::{description_prompt, summary_prompt};
pub use rate_limit::{pause_after_write, WRITE_DELAY};
pub use report::{
    report_file_name, sort_for_report, write_report, DocumentedRepository, ReportError,
    ReportRenderer,
};
pub use runner::{RunMode, Runner, RunnerConfig, RunnerError};
pub use summary::{ProcessingResult, RunSummary};
