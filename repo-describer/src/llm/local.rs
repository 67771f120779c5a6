//! Local command-line model runner backend.

use crate::llm::{GenerationError, TextGenerator};
use async_trait::async_trait;
use std::process::Stdio;
use std::time::Duration;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;
use tracing::debug;

/// Generator that pipes the prompt through a local model runner process.
///
/// The default invocation is `ollama run <model>`; the prompt is written to
/// stdin and the generated text is read from stdout.
#[derive(Debug, Clone)]
pub struct LocalGenerator {
    command: String,
    args: Vec<String>,
    timeout_secs: u64,
}

impl LocalGenerator {
    /// Creates a generator invoking `<command> run <model>`.
    pub fn new(command: impl Into<String>, model: &str, timeout_secs: u64) -> Self {
        Self::with_args(command, vec!["run".to_string(), model.to_string()], timeout_secs)
    }

    /// Creates a generator with an explicit argument list.
    pub fn with_args(command: impl Into<String>, args: Vec<String>, timeout_secs: u64) -> Self {
        Self {
            command: command.into(),
            args,
            timeout_secs,
        }
    }

    /// Returns the wall-clock timeout in seconds.
    pub fn timeout_secs(&self) -> u64 {
        self.timeout_secs
    }
}

#[async_trait]
impl TextGenerator for LocalGenerator {
    async fn generate(&self, prompt: &str) -> Result<String, GenerationError> {
        debug!(command = %self.command, args = ?self.args, "Starting model runner");

        let mut child = Command::new(&self.command)
            .args(&self.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::piped())
            .stderr(Stdio::piped())
            .kill_on_drop(true)
            .spawn()
            .map_err(|source| GenerationError::Spawn {
                command: self.command.clone(),
                source,
            })?;

        let mut stdin = child.stdin.take().ok_or_else(|| {
            GenerationError::Io(std::io::Error::other("model runner stdin unavailable"))
        })?;

        // Dropping the future on timeout drops the child, which kills it.
        let run = async move {
            stdin.write_all(prompt.as_bytes()).await?;
            drop(stdin);
            child.wait_with_output().await
        };

        let output = tokio::time::timeout(Duration::from_secs(self.timeout_secs), run)
            .await
            .map_err(|_| GenerationError::Timeout(self.timeout_secs))??;

        if !output.status.success() {
            return Err(GenerationError::ExitStatus {
                code: output.status.code(),
                stderr: String::from_utf8_lossy(&output.stderr).trim().to_string(),
            });
        }

        Ok(String::from_utf8_lossy(&output.stdout).trim().to_string())
    }
}

#[cfg(all(test, unix))]
mod tests {
    use super::*;

    fn shell(script: &str, timeout_secs: u64) -> LocalGenerator {
        LocalGenerator::with_args(
            "sh",
            vec!["-c".to_string(), script.to_string()],
            timeout_secs,
        )
    }

    #[test]
    fn default_invocation_runs_model() {
        let generator = LocalGenerator::new("ollama", "llama3.2:latest", 120);
        assert_eq!(generator.command, "ollama");
        assert_eq!(generator.args, vec!["run", "llama3.2:latest"]);
        assert_eq!(generator.timeout_secs(), 120);
    }

    #[tokio::test]
    async fn prompt_is_piped_through_stdin() {
        let generator = LocalGenerator::with_args("cat", Vec::new(), 10);
        let text = generator.generate("  echoed prompt \n").await.unwrap();
        assert_eq!(text, "echoed prompt");
    }

    #[tokio::test]
    async fn non_zero_exit_is_an_error() {
        let generator = shell("cat >/dev/null; echo 'model not found' >&2; exit 3", 10);
        let error = generator.generate("prompt").await.unwrap_err();

        match error {
            GenerationError::ExitStatus { code, stderr } => {
                assert_eq!(code, Some(3));
                assert_eq!(stderr, "model not found");
            }
            other => panic!("expected exit status error, got {other:?}"),
        }
    }

    #[tokio::test]
    async fn slow_runner_times_out() {
        let generator = LocalGenerator::with_args("sleep", vec!["5".to_string()], 1);
        let error = generator.generate("prompt").await.unwrap_err();
        assert!(matches!(error, GenerationError::Timeout(1)));
    }

    #[tokio::test]
    async fn missing_runner_fails_to_spawn() {
        let generator = LocalGenerator::with_args("definitely-not-a-model-runner", Vec::new(), 10);
        let error = generator.generate("prompt").await.unwrap_err();
        assert!(matches!(error, GenerationError::Spawn { .. }));
    }
}
