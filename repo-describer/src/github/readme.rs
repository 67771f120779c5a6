//! README lookup results and payload decoding.

use base64::engine::general_purpose::STANDARD;
use base64::Engine;
use serde::Deserialize;

/// Outcome of looking up a repository's README.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadmeLookup {
    /// README found and decoded.
    Found(String),

    /// The repository has no README (HTTP 404).
    NotFound,

    /// A README exists but its payload is not base64 encoded.
    Unsupported {
        /// Encoding reported by the API (empty when no content was sent).
        encoding: String,
    },
}

impl ReadmeLookup {
    /// Returns the README text if it was found and is not empty.
    ///
    /// Whitespace-only content still counts as a README.
    pub fn text(&self) -> Option<&str> {
        match self {
            Self::Found(text) if !text.is_empty() => Some(text),
            _ => None,
        }
    }
}

/// Body of `GET /repos/{owner}/{repo}/readme`.
#[derive(Debug, Deserialize)]
pub(crate) struct ReadmePayload {
    #[serde(default)]
    pub(crate) content: Option<String>,
    #[serde(default)]
    pub(crate) encoding: Option<String>,
}

impl ReadmePayload {
    /// Decodes the payload into a lookup result.
    ///
    /// GitHub wraps base64 content at 60 columns, so whitespace is dropped
    /// before decoding. Invalid UTF-8 sequences are dropped.
    pub(crate) fn decode(self) -> Result<ReadmeLookup, base64::DecodeError> {
        let encoding = self.encoding.unwrap_or_default();
        let content = match self.content {
            Some(content) if !content.is_empty() && encoding == "base64" => content,
            _ => return Ok(ReadmeLookup::Unsupported { encoding }),
        };

        let compact: String = content
            .chars()
            .filter(|c| !c.is_ascii_whitespace())
            .collect();
        let bytes = STANDARD.decode(compact)?;
        let text = bytes
            .utf8_chunks()
            .map(|chunk| chunk.valid())
            .collect::<String>();
        Ok(ReadmeLookup::Found(text))
    }
}
