//! Recommendations seeded by several papers
//!
//! `POST /papers`
//!
//! The positive seeds pull recommendations toward them, the negative seeds
//! push recommendations away. Seed order is preserved in the request body and
//! ids are never deduplicated.

use crate::{
    client::{Method, Query, RecommendationClient, build_request},
    error::{Error, Result},
    recs::{DEFAULT_FIELDS, DEFAULT_LIMIT, PaperId, RecommendationResult},
};
use reqwest::StatusCode;
use serde::Serialize;

/// Query parameters for the multi-seed recommendation call
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct PapersParam {
    /// Seed papers the recommendations should resemble. The service requires
    /// at least one for a meaningful result; an empty list is forwarded as-is
    /// and the service's answer governs the outcome.
    #[serde(skip)]
    positive_ids: Vec<PaperId>,
    /// Seed papers the recommendations should steer away from.
    #[serde(skip)]
    negative_ids: Vec<PaperId>,
    /// The maximum number of recommendations to return.
    limit: u32,
    /// A comma-separated list of the fields to be returned for each paper.
    fields: String,
}

/// Wire shape of the request body
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct SeedIds<'a> {
    positive_paper_ids: &'a [PaperId],
    negative_paper_ids: &'a [PaperId],
}

impl PapersParam {
    /// Parameters for a set of positive seeds, with no negative seeds and the
    /// service defaults (`limit=5`, `fields=title,url`)
    pub fn new<I: Into<PaperId>>(positive_ids: impl IntoIterator<Item = I>) -> Self {
        Self {
            positive_ids: positive_ids.into_iter().map(Into::into).collect(),
            negative_ids: Vec::new(),
            limit: DEFAULT_LIMIT,
            fields: DEFAULT_FIELDS.to_owned(),
        }
    }

    pub fn negative_ids<I: Into<PaperId>>(
        &mut self,
        negative_ids: impl IntoIterator<Item = I>,
    ) -> &mut Self {
        self.negative_ids = negative_ids.into_iter().map(Into::into).collect();
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

    fn body(&self) -> SeedIds<'_> {
        SeedIds {
            positive_paper_ids: &self.positive_ids,
            negative_paper_ids: &self.negative_ids,
        }
    }
}

impl Query for PapersParam {
    type Response = RecommendationResult;

    async fn query(&self, client: &RecommendationClient) -> Result<Self::Response> {
        let url = format!("{}/papers", client.base_url());
        let req_builder = build_request(client, Method::Post, &url);
        let resp = req_builder.query(self).json(&self.body()).send().await?;
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
    /// Recommendations seeded by positive and negative paper sets, with the
    /// service defaults
    pub async fn recommendations_for_seeds<I: Into<PaperId>>(
        &self,
        positive_ids: impl IntoIterator<Item = I>,
        negative_ids: impl IntoIterator<Item = I>,
    ) -> Result<RecommendationResult> {
        let mut param = PapersParam::new(positive_ids);
        param.negative_ids(negative_ids);
        self.query(&param).await
    }
}
