//! Models for the Recommendations API

use serde::Serialize;
use std::fmt;

/// Default number of recommendations per call
pub const DEFAULT_LIMIT: u32 = 5;
/// Default comma-separated field list returned for each paper
pub const DEFAULT_FIELDS: &str = "title,url";

/// Opaque paper identifier issued by Semantic Scholar.
///
/// The service accepts its primary sha identifiers as well as prefixed
/// external ones (`DOI:...`, `ARXIV:...`, `CorpusId:...`). The client does no
/// local validation and forwards the string verbatim.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct PaperId(String);

impl PaperId {
    pub fn new<S: Into<String>>(id: S) -> Self {
        PaperId(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PaperId {
    fn from(id: &str) -> Self {
        PaperId::new(id)
    }
}

impl From<String> for PaperId {
    fn from(id: String) -> Self {
        PaperId::new(id)
    }
}

impl fmt::Display for PaperId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Pool of candidate papers the single-seed endpoint draws from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum RecommendationPool {
    /// All computer science papers
    #[default]
    #[serde(rename = "all-cs")]
    AllCs,
    /// Recently published papers only
    #[serde(rename = "recent")]
    Recent,
}

impl fmt::Display for RecommendationPool {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RecommendationPool::AllCs => f.write_str("all-cs"),
            RecommendationPool::Recent => f.write_str("recent"),
        }
    }
}

/// The service's JSON payload, returned verbatim.
///
/// Its shape is a contract of the remote service, not of this client, so it is
/// deliberately left untyped.
pub type RecommendationResult = serde_json::Value;
