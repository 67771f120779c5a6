//! Report renderer.

use super::{DocumentedRepository, ReportError};
use handlebars::{no_escape, Handlebars};
use serde_json::{json, Value};
use time::macros::format_description;
use time::OffsetDateTime;

/// Language tags shown per project.
const REPORT_LANGUAGE_TAGS: usize = 5;

const REPORT_TEMPLATE: &str = r#"# 🚀 GitHub Projects Portfolio

**Generated on:** {{generated_on}}  
**Total Projects with Documentation:** {{total_projects}}

---

## 📊 Quick Overview

| Metric | Count |
|--------|-------|
| **Total Documented Projects** | {{total_projects}} |
| **Total Stars** | {{total_stars}} |
| **Total Forks** | {{total_forks}} |

---

## 📁 Project Details

{{#each projects}}
### {{index}}. [{{name}}]({{url}})

**Technologies:** {{technologies}}  
**Created:** {{created}} | **Last Updated:** {{updated}}  
**Stats:** {{stats}}

{{summary}}

---

{{/each}}

## 🔗 Connect

Visit my GitHub profile: [@{{username}}](https://github.com/{{username}})

*This report was generated automatically using AI analysis of repository README files.*
"#;

/// Renders the portfolio report with Handlebars.
///
/// The registry disables HTML escaping (output is Markdown) and runs in
/// strict mode so a missing field fails loudly.
pub struct ReportRenderer {
    handlebars: Handlebars<'static>,
}

impl Default for ReportRenderer {
    fn default() -> Self {
        Self::new()
    }
}

impl ReportRenderer {
    /// Creates a new report renderer.
    #[must_use]
    pub fn new() -> Self {
        let mut handlebars = Handlebars::new();
        handlebars.register_escape_fn(no_escape);
        handlebars.set_strict_mode(true);
        Self { handlebars }
    }

    /// Renders the report for `projects`, in the order given.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError`] if a date cannot be formatted or rendering fails.
    pub fn render(
        &self,
        username: &str,
        generated_at: OffsetDateTime,
        projects: &[DocumentedRepository],
    ) -> Result<String, ReportError> {
        let data = report_data(username, generated_at, projects)?;
        Ok(self.handlebars.render_template(REPORT_TEMPLATE, &data)?)
    }
}

fn report_data(
    username: &str,
    generated_at: OffsetDateTime,
    projects: &[DocumentedRepository],
) -> Result<Value, ReportError> {
    let long_date = format_description!("[month repr:long] [day], [year]");
    let month_year = format_description!("[month repr:long] [year]");

    let sections = projects
        .iter()
        .enumerate()
        .map(|(i, project)| -> Result<Value, ReportError> {
            let repo = &project.repository;
            Ok(json!({
                "index": i + 1,
                "name": repo.name,
                "url": repo.html_url,
                "technologies": project.language_tags(REPORT_LANGUAGE_TAGS),
                "created": repo.created_at.format(month_year)?,
                "updated": repo.updated_at.format(long_date)?,
                "stats": project.stats_line(),
                "summary": project.summary,
            }))
        })
        .collect::<Result<Vec<Value>, ReportError>>()?;

    Ok(json!({
        "generated_on": generated_at.format(long_date)?,
        "total_projects": projects.len(),
        "total_stars": projects.iter().map(|p| p.repository.stars).sum::<u64>(),
        "total_forks": projects.iter().map(|p| p.repository.forks).sum::<u64>(),
        "projects": sections,
        "username": username,
    }))
}
