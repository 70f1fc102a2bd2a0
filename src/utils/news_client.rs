use async_trait::async_trait;
use http::{header::USER_AGENT, StatusCode};
use reqwest::Client;
use serde::{de::DeserializeOwned, Deserialize, Serialize};
use serde_json::Value;

use crate::models::{
    error::ProviderError,
    news::{RawArticlesResponse, RawSourcesResponse, SearchRequest, SourcesRequest},
};

const CLIENT_USER_AGENT: &str = "NewsBackend/1.0";

/// The external article-search service.
#[async_trait]
pub trait NewsProvider: Send + Sync {
    async fn top_headlines(
        &self,
        query: &SearchRequest,
    ) -> Result<RawArticlesResponse, ProviderError>;

    async fn everything(
        &self,
        query: &SearchRequest,
    ) -> Result<RawArticlesResponse, ProviderError>;

    async fn sources(&self, query: &SourcesRequest) -> Result<RawSourcesResponse, ProviderError>;
}

/// NewsAPI v2 over HTTP. The request timeout comes from the supplied client.
#[derive(Clone)]
pub struct NewsApiClient {
    http_client: Client,
    base_url: String,
    api_key: String,
}

#[derive(Deserialize)]
struct ErrorBody {
    code: Option<String>,
    message: Option<String>,
}

impl NewsApiClient {
    pub fn new(
        http_client: Client,
        base_url: impl Into<String>,
        api_key: impl Into<String>,
    ) -> Self {
        Self {
            http_client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
            api_key: api_key.into(),
        }
    }

    async fn fetch<Q, T>(&self, endpoint: &str, query: &Q) -> Result<T, ProviderError>
    where
        Q: Serialize + ?Sized,
        T: DeserializeOwned,
    {
        let res = self
            .http_client
            .get(format!("{}/{}", self.base_url, endpoint))
            .header(USER_AGENT, CLIENT_USER_AGENT)
            .header("X-Api-Key", &self.api_key)
            .query(query)
            .send()
            .await?;

        let status = res.status();
        let body = res.text().await?;
        if !status.is_success() {
            return Err(api_error(status, &body));
        }

        let envelope: Value = serde_json::from_str(&body)?;
        if envelope["status"] == "error" {
            return Err(api_error(status, &body));
        }
        Ok(serde_json::from_value(envelope)?)
    }
}

fn api_error(status: StatusCode, body: &str) -> ProviderError {
    let parsed: Option<ErrorBody> = serde_json::from_str(body).ok();
    let (code, message) = match parsed {
        Some(ErrorBody { code, message }) => (code, message),
        None => (None, None),
    };
    ProviderError::Api {
        code,
        message: message.unwrap_or_else(|| {
            status
                .canonical_reason()
                .map(str::to_string)
                .unwrap_or_else(|| format!("HTTP {}", status.as_u16()))
        }),
    }
}

#[async_trait]
impl NewsProvider for NewsApiClient {
    async fn top_headlines(
        &self,
        query: &SearchRequest,
    ) -> Result<RawArticlesResponse, ProviderError> {
        self.fetch("top-headlines", query).await
    }

    async fn everything(
        &self,
        query: &SearchRequest,
    ) -> Result<RawArticlesResponse, ProviderError> {
        self.fetch("everything", query).await
    }

    async fn sources(&self, query: &SourcesRequest) -> Result<RawSourcesResponse, ProviderError> {
        self.fetch("sources", query).await
    }
}
