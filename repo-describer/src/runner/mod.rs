//! Orchestrates describe and summarize runs.
//!
//! Repositories are processed strictly one after another, in listing order.

mod config;
mod error;

pub use config::{RunMode, RunnerConfig};
pub use error::RunnerError;

use crate::config::Settings;
use crate::github::{
    build_client, fetch_languages, fetch_readme, list_public_repositories, update_description,
    DescriptionUpdate, Repository,
};
use crate::llm::{
    build_generator, fallback_summary, finalize_description, LlmConfig, TextGenerator,
};
use crate::prompt::{description_prompt, summary_prompt};
use crate::rate_limit::pause_after_write;
use crate::report::{sort_for_report, write_report, DocumentedRepository, ReportRenderer};
use crate::summary::{ProcessingResult, RunSummary};
use octocrab::Octocrab;
use time::OffsetDateTime;
use tracing::{error, info, info_span, warn, Instrument};

/// Entries echoed in the closing log of a summarize run.
const QUICK_SUMMARY_ENTRIES: usize = 5;

/// Orchestrates a full describe or summarize run.
pub struct Runner {
    config: RunnerConfig,
    settings: Settings,
    octocrab: Octocrab,
    generator: Box<dyn TextGenerator>,
    renderer: ReportRenderer,
}

impl Runner {
    /// Builds a runner, selecting the generator configured for the run.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::Config`] if the LLM config file is invalid or
    /// the selected backend lacks credentials. No request has been made at
    /// that point.
    pub fn new(config: RunnerConfig, settings: Settings) -> Result<Self, RunnerError> {
        let llm_config = LlmConfig::load_or_default(config.llm_config_path())?;
        let generator = build_generator(
            config.backend(),
            config.mode().generation_mode(),
            &settings,
            &llm_config,
        )?;
        Self::with_generator(config, settings, generator)
    }

    /// Builds a runner around an existing generator.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError::GitHub`] if the GitHub client cannot be built.
    pub fn with_generator(
        config: RunnerConfig,
        settings: Settings,
        generator: Box<dyn TextGenerator>,
    ) -> Result<Self, RunnerError> {
        let octocrab = build_client(settings.github_token(), config.api_base_uri())?;
        Ok(Self {
            config,
            settings,
            octocrab,
            generator,
            renderer: ReportRenderer::new(),
        })
    }

    /// Executes the run.
    ///
    /// # Errors
    ///
    /// Returns [`RunnerError`] if listing or fetching fails, or if the report
    /// cannot be written. Generation and description-write failures are
    /// recorded in the summary instead.
    pub async fn run(&self) -> Result<RunSummary, RunnerError> {
        let mut summary = RunSummary::new(self.config.dry_run());
        let username = self.settings.github_username();

        info!(user = %username, "Fetching public repositories");
        let repositories = list_public_repositories(&self.octocrab, username).await?;
        info!(count = repositories.len(), "Found public repositories");
        summary.repositories_discovered = repositories.len();

        match self.config.mode() {
            RunMode::Describe => {
                for repository in &repositories {
                    let result = self.describe_repository(repository).await?;
                    summary.record_result(&result);
                }
            }
            RunMode::Summarize => self.summarize(repositories, &mut summary).await?,
        }

        Ok(summary)
    }

    async fn describe_repository(
        &self,
        repository: &Repository,
    ) -> Result<ProcessingResult, RunnerError> {
        let span = info_span!("describe", repo = %repository.name);

        async {
            let owner = self.settings.github_username();
            let current = repository.current_description();
            info!(current = %current, "Processing repository");

            let readme = fetch_readme(&self.octocrab, owner, &repository.name).await?;
            let readme_text = readme.text();
            if readme_text.is_some() {
                info!("README found, generating description");
            } else {
                info!("No README found, generating description from repository name only");
            }

            let prompt = description_prompt(&repository.name, readme_text, self.config.backend());
            let description = match self.generator.generate(&prompt).await {
                Ok(text) => finalize_description(&text),
                Err(e) => {
                    error!(error = %e, "Description generation failed");
                    return Ok(ProcessingResult::Failed {
                        repository: repository.name.clone(),
                        error: e.to_string(),
                    });
                }
            };

            if description.is_empty() {
                info!("Generated description is empty, skipping update");
                return Ok(ProcessingResult::Skipped {
                    repository: repository.name.clone(),
                    reason: "empty description".to_string(),
                });
            }
            if !needs_update(current, &description) {
                info!("Description unchanged, skipping update");
                return Ok(ProcessingResult::Unchanged {
                    repository: repository.name.clone(),
                });
            }

            info!(description = %description, "New description");
            if self.config.dry_run() {
                info!("[DRY RUN] Would update description");
                return Ok(ProcessingResult::Proposed {
                    repository: repository.name.clone(),
                    description,
                });
            }

            let result =
                match update_description(&self.octocrab, owner, &repository.name, &description)
                    .await
                {
                    Ok(DescriptionUpdate::Updated) => {
                        pause_after_write(self.config.write_delay()).await;
                        ProcessingResult::Updated {
                            repository: repository.name.clone(),
                            description,
                        }
                    }
                    Ok(DescriptionUpdate::Rejected { status, body }) => {
                        error!(status, body = %body, "Failed to update description");
                        ProcessingResult::Failed {
                            repository: repository.name.clone(),
                            error: format!("GitHub returned {status}: {body}"),
                        }
                    }
                    Err(e) => {
                        error!(error = %e, "Failed to update description");
                        ProcessingResult::Failed {
                            repository: repository.name.clone(),
                            error: e.to_string(),
                        }
                    }
                };
            Ok(result)
        }
        .instrument(span)
        .await
    }

    async fn summarize(
        &self,
        repositories: Vec<Repository>,
        summary: &mut RunSummary,
    ) -> Result<(), RunnerError> {
        let mut documented = Vec::new();

        for repository in repositories {
            let (result, entry) = self.summarize_repository(repository).await?;
            summary.record_result(&result);
            documented.extend(entry);
        }

        info!(count = documented.len(), "Repositories with README files");
        if documented.is_empty() {
            warn!("No repositories with README files found, no report written");
            return Ok(());
        }

        sort_for_report(&mut documented);

        let generated_at = OffsetDateTime::now_local().unwrap_or_else(|_| OffsetDateTime::now_utc());
        let report =
            self.renderer
                .render(self.settings.github_username(), generated_at, &documented)?;

        if self.config.dry_run() {
            info!(
                bytes = report.len(),
                dir = %self.config.output_dir().display(),
                "[DRY RUN] Would write report"
            );
        } else {
            let path = write_report(self.config.output_dir(), generated_at, &report)?;
            summary.report_path = Some(path);
        }

        log_quick_summary(&documented);
        Ok(())
    }

    async fn summarize_repository(
        &self,
        repository: Repository,
    ) -> Result<(ProcessingResult, Option<DocumentedRepository>), RunnerError> {
        let span = info_span!("summarize", repo = %repository.name);

        async {
            let owner = self.settings.github_username();
            let readme = fetch_readme(&self.octocrab, owner, &repository.name).await?;
            let Some(readme_text) = readme.text() else {
                info!("No README found, skipping");
                return Ok((
                    ProcessingResult::Skipped {
                        repository: repository.name.clone(),
                        reason: "no README".to_string(),
                    },
                    None,
                ));
            };

            info!("README found, generating summary");
            let languages = fetch_languages(&self.octocrab, owner, &repository.name).await?;
            let prompt = summary_prompt(&repository.name, readme_text, &languages);

            let (text, fallback) = match self.generator.generate(&prompt).await {
                Ok(text) if !text.trim().is_empty() => (text.trim().to_string(), false),
                Ok(_) => {
                    warn!("Model returned an empty summary, using fallback");
                    (fallback_summary(&repository.name, &languages), true)
                }
                Err(e) => {
                    error!(error = %e, "Summary generation failed, using fallback");
                    (fallback_summary(&repository.name, &languages), true)
                }
            };

            pause_after_write(self.config.write_delay()).await;

            let result = ProcessingResult::Summarized {
                repository: repository.name.clone(),
                fallback,
            };
            Ok((
                result,
                Some(DocumentedRepository {
                    repository,
                    languages,
                    summary: text,
                }),
            ))
        }
        .instrument(span)
        .await
    }
}

/// A description is written only when it is non-empty and actually new.
fn needs_update(current: &str, proposed: &str) -> bool {
    !proposed.is_empty() && proposed != current
}

fn log_quick_summary(documented: &[DocumentedRepository]) {
    for entry in documented.iter().take(QUICK_SUMMARY_ENTRIES) {
        let languages: Vec<&str> = entry.languages.names().take(2).collect();
        info!(
            repo = %entry.repository.name,
            languages = %languages.join(", "),
            "Documented project"
        );
    }
    if documented.len() > QUICK_SUMMARY_ENTRIES {
        info!(
            remaining = documented.len() - QUICK_SUMMARY_ENTRIES,
            "More documented projects in report"
        );
    }
}
