use std::collections::BTreeMap;
use std::time::Duration;

use percent_encoding::{utf8_percent_encode, AsciiSet, NON_ALPHANUMERIC};
use reqwest::StatusCode;
use serde::Deserialize;
use wikicount_logging::{wc_debug, wc_trace};

use crate::{ArticleContent, FailureKind, FetchError};

pub const DEFAULT_ENDPOINT: &str = "https://bn.wikipedia.org/w/api.php";
pub const DEFAULT_USER_AGENT: &str = "WikiWordCounter/1.0 (Educational Purpose)";

/// Page id MediaWiki assigns to titles that do not exist.
const MISSING_PAGE_ID: &str = "-1";

/// Everything but ASCII alphanumerics and `-._~/` is escaped.
const TITLE_ENCODE_SET: &AsciiSet = &NON_ALPHANUMERIC
    .remove(b'-')
    .remove(b'.')
    .remove(b'_')
    .remove(b'~')
    .remove(b'/');

#[derive(Debug, Clone)]
pub struct FetchSettings {
    pub endpoint: String,
    pub user_agent: String,
    pub connect_timeout: Duration,
    pub request_timeout: Duration,
}

impl Default for FetchSettings {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            user_agent: DEFAULT_USER_AGENT.to_string(),
            connect_timeout: Duration::from_secs(15),
            request_timeout: Duration::from_secs(15),
        }
    }
}

/// Builds the revisions query for a single title against `endpoint`.
pub fn article_query_url(endpoint: &str, title: &str) -> String {
    let encoded = utf8_percent_encode(title, TITLE_ENCODE_SET);
    format!("{endpoint}?action=query&prop=revisions&rvprop=content&format=json&titles={encoded}")
}

#[async_trait::async_trait]
pub trait Fetcher: Send + Sync {
    async fn fetch(&self, title: &str) -> Result<ArticleContent, FetchError>;
}

/// Single-attempt fetcher for the MediaWiki action API.
#[derive(Debug, Clone)]
pub struct MediaWikiFetcher {
    settings: FetchSettings,
    client: reqwest::Client,
}

impl MediaWikiFetcher {
    pub fn new(settings: FetchSettings) -> Result<Self, FetchError> {
        let client = reqwest::Client::builder()
            .user_agent(settings.user_agent.clone())
            .connect_timeout(settings.connect_timeout)
            .timeout(settings.request_timeout)
            .build()
            .map_err(map_reqwest_error)?;
        Ok(Self { settings, client })
    }

    pub fn settings(&self) -> &FetchSettings {
        &self.settings
    }
}

#[async_trait::async_trait]
impl Fetcher for MediaWikiFetcher {
    async fn fetch(&self, title: &str) -> Result<ArticleContent, FetchError> {
        let url = article_query_url(&self.settings.endpoint, title);
        wc_debug!("GET {}", url);

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(map_reqwest_error)?;

        let status = response.status();
        if status != StatusCode::OK {
            return Err(FetchError::new(
                FailureKind::HttpStatus(status.as_u16()),
                status.to_string(),
            ));
        }

        let body = response.bytes().await.map_err(map_reqwest_error)?;
        wc_trace!("received {} bytes for {:?}", body.len(), title);
        parse_revision_response(&body)
    }
}

#[derive(Debug, Deserialize)]
struct ApiResponse {
    #[serde(default)]
    query: Option<ApiQuery>,
}

#[derive(Debug, Deserialize)]
struct ApiQuery {
    #[serde(default)]
    pages: BTreeMap<String, ApiPage>,
}

#[derive(Debug, Deserialize)]
struct ApiPage {
    #[serde(default)]
    revisions: Option<Vec<ApiRevision>>,
}

#[derive(Debug, Deserialize)]
struct ApiRevision {
    #[serde(rename = "*", default)]
    content: Option<String>,
}

/// Extracts the first revision's wikitext from a `prop=revisions` response.
pub(crate) fn parse_revision_response(body: &[u8]) -> Result<ArticleContent, FetchError> {
    let value: serde_json::Value = serde_json::from_slice(body)
        .map_err(|err| FetchError::new(FailureKind::Parse, err.to_string()))?;
    let response: ApiResponse = serde_json::from_value(value).map_err(|err| {
        FetchError::new(
            FailureKind::Other,
            format!("unexpected response shape: {err}"),
        )
    })?;

    let pages = response.query.map(|query| query.pages).unwrap_or_default();
    for (page_id, page) in pages {
        if page_id == MISSING_PAGE_ID {
            return Err(FetchError::new(FailureKind::NotFound, "page does not exist"));
        }
        let Some(revisions) = page.revisions else {
            continue;
        };
        let Some(first) = revisions.into_iter().next() else {
            return Err(FetchError::new(FailureKind::Other, "revision list is empty"));
        };
        return match first.content {
            Some(wikitext) => Ok(ArticleContent { page_id, wikitext }),
            None => Err(FetchError::new(
                FailureKind::Other,
                "revision carries no content",
            )),
        };
    }

    Err(FetchError::new(FailureKind::Other, "no page in response"))
}

fn map_reqwest_error(err: reqwest::Error) -> FetchError {
    if err.is_timeout() {
        return FetchError::new(FailureKind::Timeout, err.to_string());
    }
    let category = if err.is_connect() {
        "connect"
    } else if err.is_redirect() {
        "redirect"
    } else if err.is_body() {
        "body"
    } else if err.is_decode() {
        "decode"
    } else if err.is_builder() {
        "builder"
    } else if err.is_request() {
        "request"
    } else {
        "network"
    };
    FetchError::new(FailureKind::Other, category)
}
