//! Prompt construction for description and summary generation.

use crate::github::Languages;
use crate::llm::Backend;

/// README characters included in a description prompt.
pub const DESCRIPTION_README_CHARS: usize = 1500;

/// README characters included in a summary prompt.
pub const SUMMARY_README_CHARS: usize = 2000;

/// Languages named in a summary prompt.
pub const PROMPT_LANGUAGES: usize = 3;

/// Builds the prompt asking for a short repository description.
///
/// The local runner gets a stricter preamble since small local models tend to
/// wrap their answer in quotes or commentary.
#[must_use]
pub fn description_prompt(repo_name: &str, readme: Option<&str>, backend: Backend) -> String {
    let intro = match backend {
        Backend::Hosted => format!(
            "Write a short and clear GitHub repository description (max 120 characters) \
for a project named '{repo_name}'."
        ),
        Backend::Local => format!(
            "Task: Generate a GitHub repo description for '{repo_name}'. STRICT RULES: \
Max 120 characters. Output format: Plain text only - no quotes, no prefixes, \
no explanations, no markdown. Just the description sentence."
        ),
    };

    match readme {
        Some(readme) => format!(
            "{intro}\n\nThe README of the project is:\n{snippet}\n\nDescription:",
            snippet = truncate_chars(readme, DESCRIPTION_README_CHARS)
        ),
        None => format!("{intro}\n\nNo README content is available.\n\nDescription:"),
    }
}

/// Builds the prompt asking for a portfolio summary of a documented repository.
#[must_use]
pub fn summary_prompt(repo_name: &str, readme: &str, languages: &Languages) -> String {
    format!(
        "Task: Analyze this GitHub repository and create a comprehensive project summary.\n\
\n\
Repository: {repo_name}\n\
Main Technologies: {technologies}\n\
\n\
README Content:\n\
{snippet}\n\
\n\
Please provide a detailed summary in the following format:\n\
- Brief project description (1-2 sentences)\n\
- Key features or functionality\n\
- Technologies/frameworks used\n\
- Purpose or use case\n\
\n\
Keep the summary informative but concise (max 300 words). Focus on what the project \
does and its main value proposition.",
        technologies = technologies_line(languages),
        snippet = truncate_chars(readme, SUMMARY_README_CHARS),
    )
}

/// Comma-separated top languages, or `Unknown` when none were reported.
#[must_use]
pub fn technologies_line(languages: &Languages) -> String {
    let top = languages.top(PROMPT_LANGUAGES);
    if top.is_empty() {
        "Unknown".to_string()
    } else {
        top.join(", ")
    }
}

/// Returns at most the first `max` characters of `text`.
pub(crate) fn truncate_chars(text: &str, max: usize) -> &str {
    match text.char_indices().nth(max) {
        Some((index, _)) => &text[..index],
        None => text,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn description_prompt_includes_readme_excerpt() {
        let readme = "x".repeat(DESCRIPTION_README_CHARS + 100);
        let prompt = description_prompt("widget", Some(&readme), Backend::Hosted);

        assert!(prompt.starts_with("Write a short and clear GitHub repository description"));
        assert!(prompt.contains("'widget'"));
        assert!(prompt.contains(&"x".repeat(DESCRIPTION_README_CHARS)));
        assert!(!prompt.contains(&"x".repeat(DESCRIPTION_README_CHARS + 1)));
        assert!(prompt.ends_with("\n\nDescription:"));
    }

    #[test]
    fn description_prompt_without_readme() {
        let prompt = description_prompt("widget", None, Backend::Local);

        assert!(prompt.starts_with("Task: Generate a GitHub repo description for 'widget'."));
        assert!(prompt.contains("No README content is available."));
    }

    #[test]
    fn summary_prompt_lists_top_three_languages() {
        let languages = Languages::new(vec![
            ("Shell".to_string(), 5),
            ("Rust".to_string(), 900),
            ("Python".to_string(), 300),
            ("Go".to_string(), 100),
        ]);
        let prompt = summary_prompt("widget", "A widget factory.", &languages);

        assert!(prompt.contains("Repository: widget\n"));
        assert!(prompt.contains("Main Technologies: Rust, Python, Go\n"));
        assert!(prompt.contains("README Content:\nA widget factory.\n"));
    }

    #[test]
    fn summary_prompt_without_languages_says_unknown() {
        let prompt = summary_prompt("widget", "readme", &Languages::default());
        assert!(prompt.contains("Main Technologies: Unknown\n"));
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_chars("héllo", 2), "hé");
        assert_eq!(truncate_chars("abc", 10), "abc");
        assert_eq!(truncate_chars("", 3), "");
    }
}
