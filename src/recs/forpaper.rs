//! Recommendations seeded by a single paper
//!
//! `GET /papers/forpaper/{paper_id}`
//!
//! Example: `https://api.semanticscholar.org/recommendations/v1/papers/forpaper/{id}?from=all-cs&limit=5&fields=title,url`

use crate::{
    client::{Method, Query, RecommendationClient, build_request},
    error::{Error, Result},
    recs::{DEFAULT_FIELDS, DEFAULT_LIMIT, PaperId, RecommendationPool, RecommendationResult},
};
use reqwest::StatusCode;
use serde::Serialize;

/// Query parameters for the single-seed recommendation call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ForPaperParam {
    /// The seed paper, forwarded verbatim in the URL path.
    #[serde(skip)]
    paper_id: PaperId,
    /// Pool of candidate papers to recommend from.
    from: RecommendationPool,
    /// The maximum number of recommendations to return.
    limit: u32,
    /// A comma-separated list of the fields to be returned for each paper.
    fields: String,
}

impl ForPaperParam {
    /// Parameters for a seed paper, with the service defaults
    /// (`from=all-cs`, `limit=5`, `fields=title,url`)
    pub fn new<I: Into<PaperId>>(paper_id: I) -> Self {
        Self {
            paper_id: paper_id.into(),
            from: RecommendationPool::default(),
            limit: DEFAULT_LIMIT,
            fields: DEFAULT_FIELDS.to_owned(),
        }
    }

    pub fn pool(&mut self, pool: RecommendationPool) -> &mut Self {
        self.from = pool;
        self
    }

    pub fn limit(&mut self, limit: u32) -> &mut Self {
        self.limit = limit;
        self
    }

    pub fn fields(&mut self, fields: &str) -> &mut Self {
        self.fields = fields.to_owned();
        self
    }

    /// The seed paper this query is built around
    pub fn paper_id(&self) -> &PaperId {
        &self.paper_id
    }
}

impl Query for ForPaperParam {
    type Response = RecommendationResult;

    async fn query(&self, client: &RecommendationClient) -> Result<Self::Response> {
        let url = format!("{}/papers/forpaper/{}", client.base_url(), self.paper_id);
        let req_builder = build_request(client, Method::Get, &url);
        let resp = req_builder.query(self).send().await?;
        match resp.status() {
            StatusCode::OK => Ok(resp.json().await?),
            status => Err(Error::HttpStatus {
                status: status.as_u16(),
                text: resp.text().await?,
            }),
        }
    }
}

impl RecommendationClient {
    /// Recommendations seeded by a single paper, with the service defaults
    pub async fn recommendations_for_paper<I: Into<PaperId>>(
        &self,
        paper_id: I,
    ) -> Result<RecommendationResult> {
        self.query(&ForPaperParam::new(paper_id)).await
    }
}
