//! Semantic Scholar Recommendations API
//!
//! <https://api.semanticscholar.org/api-docs/recommendations>

pub(crate) const BASE_URL: &str = "https://api.semanticscholar.org/recommendations/v1";

pub mod models;
pub use models::*;
pub mod forpaper;
pub use forpaper::*;
pub mod papers;
pub use papers::*;
