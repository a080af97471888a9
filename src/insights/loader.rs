// Dataset loading — fetch and parse the three risk CSVs.
//
// DatasetSource abstracts where the CSVs live: a local data directory or
// a static-asset host over HTTP. The three fetches run concurrently and
// the join is all-or-nothing: if any one fails, no partial aggregation —
// the caller surfaces a single "could not load insights" error.

use anyhow::{Context, Result};
use async_trait::async_trait;
use std::path::{Path, PathBuf};
use tracing::debug;

use super::records::{
    parse_email_records, parse_mobile_records, parse_url_records, EmailRecord, MobileRecord,
    UrlRecord,
};

pub const URL_DATASET: &str = "risk_url.csv";
pub const EMAIL_DATASET: &str = "risk_email.csv";
pub const MOBILE_DATASET: &str = "risk_mobile.csv";

/// Where the raw dataset text comes from.
#[async_trait]
pub trait DatasetSource: Send + Sync {
    async fn fetch(&self, name: &str) -> Result<String>;
}

/// Datasets served from a local directory.
pub struct FileSource {
    dir: PathBuf,
}

impl FileSource {
    pub fn new(dir: impl AsRef<Path>) -> Self {
        Self {
            dir: dir.as_ref().to_path_buf(),
        }
    }
}

#[async_trait]
impl DatasetSource for FileSource {
    async fn fetch(&self, name: &str) -> Result<String> {
        let path = self.dir.join(name);
        debug!(path = %path.display(), "reading dataset");
        tokio::fs::read_to_string(&path)
            .await
            .with_context(|| format!("failed to read dataset {}", path.display()))
    }
}

/// Datasets served from a static-asset host.
pub struct HttpSource {
    client: reqwest::Client,
    base_url: String,
}

impl HttpSource {
    pub fn new(base_url: &str) -> Result<Self> {
        let client = reqwest::Client::builder()
            .user_agent("trustlens/0.1")
            .build()
            .context("Failed to build HTTP client")?;
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl DatasetSource for HttpSource {
    async fn fetch(&self, name: &str) -> Result<String> {
        let url = format!("{}/{}", self.base_url, name);
        debug!(url = url, "fetching dataset");
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("dataset request failed: {name}"))?;
        if !response.status().is_success() {
            anyhow::bail!("dataset {name} returned {}", response.status());
        }
        response
            .text()
            .await
            .with_context(|| format!("failed to read dataset body: {name}"))
    }
}

/// The three parsed record collections.
#[derive(Debug)]
pub struct Datasets {
    pub urls: Vec<UrlRecord>,
    pub emails: Vec<EmailRecord>,
    pub mobiles: Vec<MobileRecord>,
}

/// Fetch and parse all three datasets, or fail as a unit.
pub async fn load_datasets(source: &dyn DatasetSource) -> Result<Datasets> {
    let (url_text, email_text, mobile_text) = futures::future::try_join3(
        source.fetch(URL_DATASET),
        source.fetch(EMAIL_DATASET),
        source.fetch(MOBILE_DATASET),
    )
    .await
    .context("could not load insights datasets")?;

    Ok(Datasets {
        urls: parse_url_records(&url_text)?,
        emails: parse_email_records(&email_text)?,
        mobiles: parse_mobile_records(&mobile_text)?,
    })
}
