use std::sync::Arc;

use crate::{
    models::{
        error::NewsError,
        news::{
            Article, ArticlePage, RawArticle, RawArticlesResponse, RawSourceRecord,
            SearchRequest, Source, SourcesRequest,
        },
    },
    utils::news_client::NewsProvider,
};

pub const HEADLINES_FAILURE: &str = "Failed to fetch top headlines";
pub const EVERYTHING_FAILURE: &str = "Failed to fetch articles";
pub const SOURCES_FAILURE: &str = "Failed to fetch sources";

/// Calls the injected provider once per request and maps its records into
/// the internal shapes. Failures are not retried.
#[derive(Clone)]
pub struct SearchGateway {
    provider: Arc<dyn NewsProvider>,
}

impl SearchGateway {
    pub fn new(provider: Arc<dyn NewsProvider>) -> Self {
        Self { provider }
    }

    pub async fn top_headlines(&self, query: &SearchRequest) -> Result<ArticlePage, NewsError> {
        self.provider
            .top_headlines(query)
            .await
            .map(map_page)
            .map_err(|e| NewsError::upstream(HEADLINES_FAILURE, e))
    }

    pub async fn everything(&self, query: &SearchRequest) -> Result<ArticlePage, NewsError> {
        self.provider
            .everything(query)
            .await
            .map(map_page)
            .map_err(|e| NewsError::upstream(EVERYTHING_FAILURE, e))
    }

    pub async fn sources(&self, query: &SourcesRequest) -> Result<Vec<Source>, NewsError> {
        let res = self
            .provider
            .sources(query)
            .await
            .map_err(|e| NewsError::upstream(SOURCES_FAILURE, e))?;
        Ok(res.sources.into_iter().map(map_source).collect())
    }
}

fn map_page(raw: RawArticlesResponse) -> ArticlePage {
    ArticlePage {
        total_results: raw.total_results,
        articles: raw.articles.into_iter().map(map_article).collect(),
    }
}

fn map_article(raw: RawArticle) -> Article {
    Article {
        source: raw.source.and_then(|s| s.resolve()),
        author: raw.author,
        title: raw.title,
        description: raw.description,
        url: raw.url,
        url_to_image: raw.url_to_image,
        published_at: raw.published_at,
        content: raw.content,
    }
}

fn map_source(raw: RawSourceRecord) -> Source {
    Source {
        id: raw.id,
        name: raw.name,
        description: raw.description,
        url: raw.url,
        category: raw.category.and_then(|c| c.resolve()),
        language: raw.language,
        country: raw.country,
    }
}
