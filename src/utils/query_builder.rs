use serde::Deserialize;

use crate::{
    models::{
        error::ValidationError,
        news::{IdList, SearchRequest, SourcesRequest},
    },
    utils::{
        catalog::DEFAULT_SORT_ORDER,
        validator::{
            require_anchor, validate_category, validate_country, validate_date,
            validate_date_range, validate_language, validate_page, validate_page_size,
            validate_sort_by, EVERYTHING_ANCHORS, EVERYTHING_MAX_PAGE_SIZE, HEADLINES_ANCHORS,
            HEADLINES_MAX_PAGE_SIZE,
        },
    },
};

pub const DEFAULT_PAGE: u32 = 1;
pub const HEADLINES_DEFAULT_PAGE_SIZE: u32 = 10;
pub const EVERYTHING_DEFAULT_PAGE_SIZE: u32 = 20;

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HeadlinesParams {
    pub q: Option<String>,
    pub sources: Option<String>,
    pub category: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EverythingParams {
    pub q: Option<String>,
    pub q_in_title: Option<String>,
    pub sources: Option<String>,
    pub domains: Option<String>,
    pub exclude_domains: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub language: Option<String>,
    pub sort_by: Option<String>,
    pub page: Option<String>,
    pub page_size: Option<String>,
}

#[derive(Debug, Default, Deserialize)]
pub struct SourcesParams {
    pub category: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
}

// Blank query-string values count as not supplied.
fn present(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn id_list(value: Option<String>) -> Option<IdList> {
    value.as_deref().and_then(IdList::parse)
}

fn page_or_default(raw: Option<String>) -> Result<u32, ValidationError> {
    present(raw).map_or(Ok(DEFAULT_PAGE), |raw| validate_page(&raw))
}

fn page_size_or_default(
    raw: Option<String>,
    max: u32,
    default: u32,
) -> Result<u32, ValidationError> {
    present(raw).map_or(Ok(default), |raw| validate_page_size(&raw, max))
}

pub fn build_headlines(params: HeadlinesParams) -> Result<SearchRequest, ValidationError> {
    let q = present(params.q);
    let sources = id_list(params.sources);
    let category = present(params.category);
    let language = present(params.language);
    let country = present(params.country);

    require_anchor(
        HEADLINES_ANCHORS,
        q.is_some() || sources.is_some() || category.is_some() || country.is_some(),
    )?;
    let page = page_or_default(params.page)?;
    let page_size = page_size_or_default(
        params.page_size,
        HEADLINES_MAX_PAGE_SIZE,
        HEADLINES_DEFAULT_PAGE_SIZE,
    )?;
    if let Some(category) = &category {
        validate_category(category)?;
    }
    if let Some(language) = &language {
        validate_language(language)?;
    }
    if let Some(country) = &country {
        validate_country(country)?;
    }

    Ok(SearchRequest {
        q,
        sources,
        category,
        language,
        country,
        page,
        page_size,
        ..Default::default()
    })
}

pub fn build_everything(params: EverythingParams) -> Result<SearchRequest, ValidationError> {
    let q = present(params.q);
    let q_in_title = present(params.q_in_title);
    let sources = id_list(params.sources);
    let domains = id_list(params.domains);

    require_anchor(
        EVERYTHING_ANCHORS,
        q.is_some() || q_in_title.is_some() || sources.is_some() || domains.is_some(),
    )?;
    let from = present(params.from)
        .map(|raw| validate_date("from", &raw))
        .transpose()?;
    let to = present(params.to)
        .map(|raw| validate_date("to", &raw))
        .transpose()?;
    if let (Some(from), Some(to)) = (from, to) {
        validate_date_range(from, to)?;
    }
    let page = page_or_default(params.page)?;
    let page_size = page_size_or_default(
        params.page_size,
        EVERYTHING_MAX_PAGE_SIZE,
        EVERYTHING_DEFAULT_PAGE_SIZE,
    )?;
    let sort_by = present(params.sort_by).unwrap_or_else(|| DEFAULT_SORT_ORDER.to_string());
    validate_sort_by(&sort_by)?;
    let language = present(params.language);
    if let Some(language) = &language {
        validate_language(language)?;
    }

    Ok(SearchRequest {
        q,
        q_in_title,
        sources,
        domains,
        exclude_domains: id_list(params.exclude_domains),
        from,
        to,
        language,
        sort_by: Some(sort_by),
        page,
        page_size,
        ..Default::default()
    })
}

pub fn build_sources(params: SourcesParams) -> Result<SourcesRequest, ValidationError> {
    let category = present(params.category);
    let language = present(params.language);
    let country = present(params.country);

    if let Some(category) = &category {
        validate_category(category)?;
    }
    if let Some(language) = &language {
        validate_language(language)?;
    }
    if let Some(country) = &country {
        validate_country(country)?;
    }

    Ok(SourcesRequest {
        category,
        language,
        country,
    })
}
