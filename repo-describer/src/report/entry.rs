//! Report entries.

use crate::github::{Languages, Repository};
use std::cmp::Reverse;

/// A repository with a README, ready to be listed in the report.
#[derive(Debug, Clone)]
pub struct DocumentedRepository {
    /// Listing record.
    pub repository: Repository,

    /// Language breakdown (may be empty).
    pub languages: Languages,

    /// Generated or fallback summary.
    pub summary: String,
}

impl DocumentedRepository {
    /// Engagement line: stars, forks and open issues, omitting zero counts.
    pub fn stats_line(&self) -> String {
        let repo = &self.repository;
        let mut stats = Vec::new();
        if repo.stars > 0 {
            stats.push(format!("⭐ {} stars", repo.stars));
        }
        if repo.forks > 0 {
            stats.push(format!("🍴 {} forks", repo.forks));
        }
        if repo.open_issues > 0 {
            stats.push(format!("📝 {} open issues", repo.open_issues));
        }

        if stats.is_empty() {
            "*No public engagement yet*".to_string()
        } else {
            stats.join(" | ")
        }
    }

    /// Up to `count` language tags in reported order, or `` `Unknown` ``.
    pub fn language_tags(&self, count: usize) -> String {
        let tags: Vec<String> = self
            .languages
            .names()
            .take(count)
            .map(|name| format!("`{name}`"))
            .collect();

        if tags.is_empty() {
            "`Unknown`".to_string()
        } else {
            tags.join(" ")
        }
    }
}

/// Orders entries by stars, then last update, both descending.
pub fn sort_for_report(entries: &mut [DocumentedRepository]) {
    entries.sort_by_key(|entry| {
        Reverse((entry.repository.stars, entry.repository.updated_at))
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::repository;

    fn entry(name: &str, stars: u64, forks: u64, updated: &str) -> DocumentedRepository {
        let mut repository = repository(name, stars, forks);
        repository.updated_at =
            time::OffsetDateTime::parse(updated, &time::format_description::well_known::Rfc3339)
                .unwrap();
        DocumentedRepository {
            repository,
            languages: Languages::default(),
            summary: String::new(),
        }
    }

    #[test]
    fn stats_line_omits_zero_counts() {
        let mut item = entry("a", 3, 0, "2024-01-01T00:00:00Z");
        item.repository.open_issues = 2;
        assert_eq!(item.stats_line(), "⭐ 3 stars | 📝 2 open issues");
    }

    #[test]
    fn stats_line_without_engagement() {
        let item = entry("a", 0, 0, "2024-01-01T00:00:00Z");
        assert_eq!(item.stats_line(), "*No public engagement yet*");
    }

    #[test]
    fn language_tags_take_first_five_in_reported_order() {
        let mut item = entry("a", 0, 0, "2024-01-01T00:00:00Z");
        item.languages = Languages::new(
            ["Rust", "Python", "C", "Shell", "Go", "Lua"]
                .iter()
                .enumerate()
                .map(|(i, name)| (name.to_string(), 100 - i as u64))
                .collect(),
        );
        assert_eq!(
            item.language_tags(5),
            "`Rust` `Python` `C` `Shell` `Go`"
        );

        item.languages = Languages::default();
        assert_eq!(item.language_tags(5), "`Unknown`");
    }

    #[test]
    fn sorts_by_stars_then_recency() {
        let mut entries = vec![
            entry("old-popular", 5, 0, "2020-01-01T00:00:00Z"),
            entry("quiet", 0, 0, "2024-06-01T00:00:00Z"),
            entry("new-popular", 5, 0, "2023-01-01T00:00:00Z"),
            entry("star", 9, 0, "2019-01-01T00:00:00Z"),
        ];
        sort_for_report(&mut entries);

        let names: Vec<_> = entries
            .iter()
            .map(|e| e.repository.name.as_str())
            .collect();
        assert_eq!(names, vec!["star", "new-popular", "old-popular", "quiet"]);
    }
}
