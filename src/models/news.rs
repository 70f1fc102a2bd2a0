use chrono::NaiveDate;
use serde::{Deserialize, Serialize, Serializer};
use serde_json::{Map, Value};

/// Ordered, deduplicated list of ids taken from a comma-separated parameter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct IdList(Vec<String>);

impl IdList {
    /// Returns `None` when the parameter holds no usable id.
    pub fn parse(raw: &str) -> Option<Self> {
        let mut ids: Vec<String> = Vec::new();
        for id in raw.split(',').map(str::trim).filter(|id| !id.is_empty()) {
            if !ids.iter().any(|seen| seen == id) {
                ids.push(id.to_string());
            }
        }
        if ids.is_empty() {
            None
        } else {
            Some(Self(ids))
        }
    }
}

impl Serialize for IdList {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0.join(","))
    }
}

/// Normalized query sent to the provider and echoed back to the caller.
#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct SearchRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub q_in_title: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sources: Option<IdList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub domains: Option<IdList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub exclude_domains: Option<IdList>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub from: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub to: Option<NaiveDate>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sort_by: Option<String>,
    pub page: u32,
    pub page_size: u32,
}

#[derive(Debug, Clone, Default, Serialize, PartialEq, Eq)]
pub struct SourcesRequest {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub country: Option<String>,
}

/// A field the provider sends either as a plain string or as a nested record.
#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum RawLabel {
    Bare(String),
    Described {
        #[serde(default)]
        name: Option<String>,
        #[serde(flatten)]
        attributes: Map<String, Value>,
    },
}

impl RawLabel {
    pub fn resolve(self) -> Option<String> {
        match self {
            RawLabel::Bare(value) => Some(value),
            RawLabel::Described { name: Some(name), .. } => Some(name),
            RawLabel::Described { attributes, .. } => attributes
                .get("id")
                .and_then(Value::as_str)
                .map(str::to_string),
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticle {
    pub source: Option<RawLabel>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub published_at: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawArticlesResponse {
    #[serde(default)]
    pub total_results: u64,
    #[serde(default)]
    pub articles: Vec<RawArticle>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSourceRecord {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub category: Option<RawLabel>,
    pub language: Option<String>,
    pub country: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct RawSourcesResponse {
    #[serde(default)]
    pub sources: Vec<RawSourceRecord>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub source: Option<String>,
    pub author: Option<String>,
    pub title: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub url_to_image: Option<String>,
    pub published_at: Option<String>,
    pub content: Option<String>,
}

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct Source {
    pub id: Option<String>,
    pub name: Option<String>,
    pub description: Option<String>,
    pub url: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
}

/// One page of mapped articles as returned by the gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArticlePage {
    pub total_results: u64,
    pub articles: Vec<Article>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PagedResult {
    pub status: &'static str,
    pub total_results: u64,
    pub current_page: u32,
    pub page_size: u32,
    pub total_pages: u64,
    pub articles: Vec<Article>,
    pub query: SearchRequest,
}

#[derive(Debug, Clone, Serialize)]
pub struct AvailableFilters {
    pub categories: Vec<&'static str>,
    pub languages: Vec<&'static str>,
    pub countries: Vec<&'static str>,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SourcesResult {
    pub status: &'static str,
    pub total_sources: usize,
    pub sources: Vec<Source>,
    pub query: SourcesRequest,
    pub available_filters: AvailableFilters,
}
