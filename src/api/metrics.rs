// Usage metrics and article listing — the small read-only endpoints.

use serde::Deserialize;

use super::{ApiClient, ApiError};

/// Response from GET /api/metrics/checks. Both fields are optional on the
/// wire; a missing count renders as "unavailable", not an error.
#[derive(Debug, Clone, Deserialize)]
pub struct UsageMetrics {
    pub count: Option<u64>,
    #[serde(rename = "asOf")]
    pub as_of: Option<String>,
}

/// A published article stub.
#[derive(Debug, Clone, Deserialize)]
pub struct Article {
    pub id: i64,
    pub slug: String,
    pub title: String,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub gmt_create: Option<String>,
}

#[derive(Debug, Deserialize)]
struct ArticleList {
    items: Vec<Article>,
}

impl ApiClient {
    /// Checks performed across the service in the trailing 7 days.
    pub async fn usage_metrics(&self) -> Result<UsageMetrics, ApiError> {
        self.get_json("/api/metrics/checks", &[("window", "7d")]).await
    }

    /// Published articles, newest first as the backend orders them.
    pub async fn list_articles(&self) -> Result<Vec<Article>, ApiError> {
        let list: ArticleList = self.get_enveloped("/api/v1/articles", &[]).await?;
        Ok(list.items)
    }
}
