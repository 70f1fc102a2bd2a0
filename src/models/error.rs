use axum::extract::rejection::QueryRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::response::Response;
use axum::Json;
use serde_json::json;
use thiserror::Error;

/// Client input errors. Every variant maps to HTTP 400.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Invalid {field} date format. Use YYYY-MM-DD")]
    InvalidDate { field: &'static str },

    #[error("Page must be between 1 and {max}")]
    PageOutOfRange { max: u32 },

    #[error("Page size must be between 1 and {max}")]
    PageSizeOutOfRange { max: u32 },

    #[error("Invalid {label}. Valid options: {}", .allowed.join(", "))]
    InvalidEnum {
        field: &'static str,
        label: &'static str,
        allowed: Vec<&'static str>,
    },

    #[error("Date range cannot exceed 1 month for free tier")]
    RangeTooWide { days: i64 },

    #[error("At least one parameter is required: {}", join_anchors(.anchors))]
    MissingAnchor { anchors: &'static [&'static str] },
}

fn join_anchors(anchors: &[&str]) -> String {
    match anchors.split_last() {
        Some((last, rest)) if !rest.is_empty() => format!("{}, or {}", rest.join(", "), last),
        Some((last, _)) => last.to_string(),
        None => String::new(),
    }
}

/// Failures raised by a `NewsProvider` implementation.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("{0}")]
    Transport(#[from] reqwest::Error),

    #[error("{message}")]
    Api { code: Option<String>, message: String },

    #[error("Malformed provider response: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Error surfaced by the news handlers.
#[derive(Debug, Error)]
pub enum NewsError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Query(#[from] QueryRejection),

    #[error("{context}: {message}")]
    Upstream {
        context: &'static str,
        message: String,
    },
}

impl NewsError {
    pub fn upstream(context: &'static str, error: ProviderError) -> Self {
        Self::Upstream {
            context,
            message: error.to_string(),
        }
    }

    pub fn status(&self) -> StatusCode {
        match self {
            NewsError::Validation(_) | NewsError::Query(_) => StatusCode::BAD_REQUEST,
            NewsError::Upstream { .. } => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for NewsError {
    fn into_response(self) -> Response {
        let code = self.status();
        let body = match self {
            NewsError::Validation(err) => json!({ "error": err.to_string() }),
            NewsError::Query(rejection) => json!({ "error": rejection.body_text() }),
            NewsError::Upstream { context, message } => {
                json!({ "error": context, "message": message })
            }
        };
        (code, Json(body)).into_response()
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("{0} not set")]
    Missing(&'static str),

    #[error("{name} is not valid: {value}")]
    Invalid { name: &'static str, value: String },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_anchor_lists_fields_with_final_or() {
        let err = ValidationError::MissingAnchor {
            anchors: &["q", "sources", "category", "country"],
        };
        assert_eq!(
            err.to_string(),
            "At least one parameter is required: q, sources, category, or country"
        );
    }

    #[test]
    fn validation_maps_to_bad_request() {
        let err = NewsError::from(ValidationError::RangeTooWide { days: 45 });
        assert_eq!(err.status(), StatusCode::BAD_REQUEST);
    }

    #[test]
    fn upstream_keeps_provider_message() {
        let err = NewsError::upstream(
            "Failed to fetch articles",
            ProviderError::Api {
                code: Some("rateLimited".into()),
                message: "You have made too many requests".into(),
            },
        );
        assert_eq!(err.status(), StatusCode::INTERNAL_SERVER_ERROR);
        match err {
            NewsError::Upstream { context, message } => {
                assert_eq!(context, "Failed to fetch articles");
                assert_eq!(message, "You have made too many requests");
            }
            other => panic!("unexpected {other:?}"),
        }
    }
}
