use crate::{
    models::news::{
        ArticlePage, AvailableFilters, PagedResult, SearchRequest, Source, SourcesRequest,
        SourcesResult,
    },
    utils::catalog::{country_codes, language_codes, CATEGORIES},
};

const SUCCESS: &str = "success";

/// `page_size` is at least 1 once validated; zero is guarded anyway.
pub fn total_pages(total_results: u64, page_size: u32) -> u64 {
    total_results.div_ceil(u64::from(page_size.max(1)))
}

pub fn format_articles(page: ArticlePage, query: SearchRequest) -> PagedResult {
    PagedResult {
        status: SUCCESS,
        total_results: page.total_results,
        current_page: query.page,
        page_size: query.page_size,
        total_pages: total_pages(page.total_results, query.page_size),
        articles: page.articles,
        query,
    }
}

pub fn format_sources(sources: Vec<Source>, query: SourcesRequest) -> SourcesResult {
    SourcesResult {
        status: SUCCESS,
        total_sources: sources.len(),
        sources,
        query,
        available_filters: AvailableFilters {
            categories: CATEGORIES.to_vec(),
            languages: language_codes(),
            countries: country_codes(),
        },
    }
}
