//! Shared fixtures for unit tests.

use crate::github::{build_client, Repository};
use octocrab::Octocrab;

/// Builds a GitHub client pointed at a mock server.
pub(crate) fn github_client(server: &mockito::ServerGuard) -> Octocrab {
    // octocrab and reqwest enable different rustls providers; pick one.
    let _ = rustls::crypto::aws_lc_rs::default_provider().install_default();
    build_client("test-token", Some(&server.url())).unwrap()
}

/// Listing JSON for a repository owned by `octocat`.
pub(crate) fn repo_json(name: &str, stars: u64, forks: u64) -> String {
    serde_json::json!({
        "name": name,
        "description": null,
        "html_url": format!("https://github.com/octocat/{name}"),
        "created_at": "2021-03-04T10:00:00Z",
        "updated_at": "2024-01-05T08:30:00Z",
        "stargazers_count": stars,
        "forks_count": forks,
        "open_issues_count": 0
    })
    .to_string()
}

/// A repository record as produced by [`repo_json`].
pub(crate) fn repository(name: &str, stars: u64, forks: u64) -> Repository {
    serde_json::from_str(&repo_json(name, stars, forks)).unwrap()
}
