//! GitHub REST API access.
//!
//! This module lists an account's public repositories, fetches README and
//! language information, and patches repository descriptions.
//!
//! Requests go through octocrab's raw request API because several endpoints
//! have status-dependent meaning (404 README, non-200 languages) that typed
//! builders would collapse into errors.

mod error;
mod readme;
mod repository;
mod status;

pub use error::GitHubError;
pub use readme::ReadmeLookup;
pub use repository::{Languages, Repository};
pub use status::DescriptionUpdate;

use octocrab::Octocrab;
use readme::ReadmePayload;
use serde::de::DeserializeOwned;
use serde_json::json;
use tracing::{debug, info, info_span, warn, Instrument};

/// Repositories requested per listing page.
pub const REPOS_PER_PAGE: u32 = 50;

/// Builds an authenticated GitHub client.
///
/// # Arguments
///
/// * `token` - Personal access token, sent as a bearer token
/// * `base_uri` - API root override (GitHub Enterprise, tests); defaults to api.github.com
///
/// # Errors
///
/// Returns [`GitHubError`] if the base URI is invalid or the client cannot be built.
pub fn build_client(token: &str, base_uri: Option<&str>) -> Result<Octocrab, GitHubError> {
    let mut builder = Octocrab::builder().personal_token(token.to_string());
    if let Some(base_uri) = base_uri {
        builder = builder.base_uri(base_uri)?;
    }
    Ok(builder.build()?)
}

/// Lists every public repository of `username`.
///
/// Pages are requested from 1 upwards until a page comes back empty; the
/// entries of all earlier pages are returned in server order.
///
/// # Errors
///
/// Returns [`GitHubError`] if any page request fails or returns a non-success
/// status. There is no retry.
pub async fn list_public_repositories(
    octocrab: &Octocrab,
    username: &str,
) -> Result<Vec<Repository>, GitHubError> {
    let span = info_span!("list_repositories", user = %username);

    async {
        let mut repositories = Vec::new();
        let mut page = 1u32;

        loop {
            let route = format!(
                "/users/{username}/repos?per_page={REPOS_PER_PAGE}&page={page}&type=public"
            );
            debug!(page, "Requesting repository page");

            let response = get_raw(octocrab, &route).await?;
            if !response.is_success() {
                return Err(response.into_status_error(route));
            }

            let entries: Vec<Repository> = response.json(&route)?;
            if entries.is_empty() {
                break;
            }

            repositories.extend(entries);
            page += 1;
        }

        info!(count = repositories.len(), "Listed public repositories");
        Ok(repositories)
    }
    .instrument(span)
    .await
}

/// Fetches and decodes the README of `owner/repo`.
///
/// # Errors
///
/// Returns [`GitHubError`] for any status other than 200 or 404, for
/// malformed JSON, or for invalid base64 content.
pub async fn fetch_readme(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
) -> Result<ReadmeLookup, GitHubError> {
    let route = format!("/repos/{owner}/{repo}/readme");
    let response = get_raw(octocrab, &route).await?;

    if response.status == 404 {
        debug!(repo, "No README");
        return Ok(ReadmeLookup::NotFound);
    }
    if !response.is_success() {
        return Err(response.into_status_error(route));
    }

    let payload: ReadmePayload = response.json(&route)?;
    let lookup = payload
        .decode()
        .map_err(|source| GitHubError::InvalidBase64 {
            repo: format!("{owner}/{repo}"),
            source,
        })?;

    if let ReadmeLookup::Unsupported { encoding } = &lookup {
        warn!(repo, encoding = %encoding, "README is not base64 encoded, ignoring it");
    }
    Ok(lookup)
}

/// Fetches the language breakdown of `owner/repo`.
///
/// Any status other than 200 yields an empty breakdown.
///
/// # Errors
///
/// Returns [`GitHubError`] on transport failures or a malformed 200 body.
pub async fn fetch_languages(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
) -> Result<Languages, GitHubError> {
    let route = format!("/repos/{owner}/{repo}/languages");
    let response = get_raw(octocrab, &route).await?;

    if response.status != 200 {
        debug!(repo, status = response.status, "Languages unavailable");
        return Ok(Languages::default());
    }
    response.json(&route)
}

/// Replaces the description of `owner/repo`.
///
/// A non-200 answer is returned as [`DescriptionUpdate::Rejected`] rather
/// than an error so the caller can carry on with the next repository.
///
/// # Errors
///
/// Returns [`GitHubError`] on transport failures.
pub async fn update_description(
    octocrab: &Octocrab,
    owner: &str,
    repo: &str,
    description: &str,
) -> Result<DescriptionUpdate, GitHubError> {
    let route = format!("/repos/{owner}/{repo}");
    let body = json!({ "description": description });

    let response = octocrab._patch(route.as_str(), Some(&body)).await?;
    let status = response.status().as_u16();
    let body = octocrab.body_to_string(response).await?;

    if status == 200 {
        info!(repo, "Description updated");
        Ok(DescriptionUpdate::Updated)
    } else {
        warn!(repo, status, "Description update rejected");
        Ok(DescriptionUpdate::Rejected { status, body })
    }
}

/// Status and body of a raw API response.
struct RawResponse {
    status: u16,
    body: String,
}

impl RawResponse {
    fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    fn json<T: DeserializeOwned>(&self, route: &str) -> Result<T, GitHubError> {
        serde_json::from_str(&self.body).map_err(|source| GitHubError::InvalidJson {
            route: route.to_string(),
            source,
        })
    }

    fn into_status_error(self, route: String) -> GitHubError {
        GitHubError::UnexpectedStatus {
            route,
            status: self.status,
            body: self.body,
        }
    }
}

/// Issues a GET without mapping error statuses.
async fn get_raw(octocrab: &Octocrab, route: &str) -> Result<RawResponse, GitHubError> {
    let response = octocrab._get(route).await?;
    let status = response.status().as_u16();
    let body = octocrab.body_to_string(response).await?;
    Ok(RawResponse { status, body })
}
