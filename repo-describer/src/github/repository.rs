//! Repository records returned by the listing endpoint.

use serde::{Deserialize, Serialize};
use time::OffsetDateTime;

/// A public repository as reported by `GET /users/{user}/repos`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Repository {
    /// Repository name (without owner).
    pub name: String,

    /// Current description, if one is set.
    #[serde(default)]
    pub description: Option<String>,

    /// Canonical web URL.
    pub html_url: String,

    /// Creation timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub created_at: OffsetDateTime,

    /// Last update timestamp.
    #[serde(with = "time::serde::rfc3339")]
    pub updated_at: OffsetDateTime,

    /// Star count.
    #[serde(default, rename = "stargazers_count")]
    pub stars: u64,

    /// Fork count.
    #[serde(default, rename = "forks_count")]
    pub forks: u64,

    /// Open issue count.
    #[serde(default, rename = "open_issues_count")]
    pub open_issues: u64,
}

impl Repository {
    /// Returns the current description, treating a missing one as empty.
    pub fn current_description(&self) -> &str {
        self.description.as_deref().unwrap_or_default()
    }
}

/// Language name to byte count mapping, in the order GitHub reported it.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Languages(Vec<(String, u64)>);

impl Languages {
    /// Creates a breakdown from ordered `(language, bytes)` pairs.
    pub fn new(entries: Vec<(String, u64)>) -> Self {
        Self(entries)
    }

    /// Returns true if no languages were reported.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the entries in reported order.
    pub fn entries(&self) -> &[(String, u64)] {
        &self.0
    }

    /// Returns the language names in reported order.
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(|(name, _)| name.as_str())
    }

    /// Returns up to `count` language names ranked by byte count.
    ///
    /// Equal byte counts keep their reported order.
    pub fn top(&self, count: usize) -> Vec<&str> {
        let mut ranked: Vec<&(String, u64)> = self.0.iter().collect();
        // `sort_by` is stable, so ties stay in reported order.
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
            .into_iter()
            .take(count)
            .map(|(name, _)| name.as_str())
            .collect()
    }
}

impl<'de> Deserialize<'de> for Languages {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        // serde_json is built with `preserve_order`, so the map keeps response order.
        let map = serde_json::Map::<String, serde_json::Value>::deserialize(deserializer)?;
        map.into_iter()
            .map(|(name, bytes)| {
                bytes
                    .as_u64()
                    .map(|bytes| (name.clone(), bytes))
                    .ok_or_else(|| {
                        serde::de::Error::custom(format!("byte count for '{name}' is not a number"))
                    })
            })
            .collect::<Result<Vec<_>, _>>()
            .map(Self)
    }
}
