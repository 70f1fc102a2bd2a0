use chrono::NaiveDate;

use crate::{
    models::error::ValidationError,
    utils::catalog::{country_codes, language_codes, CATEGORIES, SORT_ORDERS},
};

/// Upstream page ceiling, shared by every paginated path.
pub const MAX_PAGE: u32 = 15;
pub const HEADLINES_MAX_PAGE_SIZE: u32 = 15;
pub const EVERYTHING_MAX_PAGE_SIZE: u32 = 100;
pub const MAX_RANGE_DAYS: i64 = 29;

pub const HEADLINES_ANCHORS: &[&str] = &["q", "sources", "category", "country"];
pub const EVERYTHING_ANCHORS: &[&str] = &["q", "qInTitle", "sources", "domains"];

/// True when `value` is shaped `YYYY-MM-DD` and names a real calendar day.
pub fn is_valid_date(value: &str) -> bool {
    parse_date(value).is_some()
}

fn parse_date(value: &str) -> Option<NaiveDate> {
    let bytes = value.as_bytes();
    let shaped = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });
    if !shaped {
        return None;
    }
    NaiveDate::parse_from_str(value, "%Y-%m-%d").ok()
}

pub fn validate_date(field: &'static str, value: &str) -> Result<NaiveDate, ValidationError> {
    parse_date(value).ok_or(ValidationError::InvalidDate { field })
}

pub fn is_valid_page(page: i64) -> bool {
    (1..=i64::from(MAX_PAGE)).contains(&page)
}

pub fn validate_page(raw: &str) -> Result<u32, ValidationError> {
    raw.trim()
        .parse::<i64>()
        .ok()
        .filter(|page| is_valid_page(*page))
        .and_then(|page| u32::try_from(page).ok())
        .ok_or(ValidationError::PageOutOfRange { max: MAX_PAGE })
}

/// `max` differs per call path: 15 for headlines, 100 for full search.
pub fn validate_page_size(raw: &str, max: u32) -> Result<u32, ValidationError> {
    parse_bounded(raw, max).ok_or(ValidationError::PageSizeOutOfRange { max })
}

fn parse_bounded(raw: &str, max: u32) -> Option<u32> {
    let value = raw.trim().parse::<i64>().ok()?;
    if (1..=i64::from(max)).contains(&value) {
        u32::try_from(value).ok()
    } else {
        None
    }
}

fn validate_member(
    field: &'static str,
    label: &'static str,
    value: &str,
    allowed: Vec<&'static str>,
) -> Result<(), ValidationError> {
    if allowed.iter().any(|a| *a == value) {
        Ok(())
    } else {
        Err(ValidationError::InvalidEnum {
            field,
            label,
            allowed,
        })
    }
}

pub fn validate_category(value: &str) -> Result<(), ValidationError> {
    validate_member("category", "category", value, CATEGORIES.to_vec())
}

pub fn validate_language(value: &str) -> Result<(), ValidationError> {
    validate_member("language", "language", value, language_codes())
}

pub fn validate_country(value: &str) -> Result<(), ValidationError> {
    validate_member("country", "country code", value, country_codes())
}

pub fn validate_sort_by(value: &str) -> Result<(), ValidationError> {
    validate_member("sortBy", "sortBy", value, SORT_ORDERS.to_vec())
}

/// Whole-day distance between the two dates, in either order, must not exceed 29.
pub fn validate_date_range(from: NaiveDate, to: NaiveDate) -> Result<(), ValidationError> {
    let days = (to - from).num_days().abs();
    if days > MAX_RANGE_DAYS {
        return Err(ValidationError::RangeTooWide { days });
    }
    Ok(())
}

pub fn require_anchor(
    anchors: &'static [&'static str],
    present: bool,
) -> Result<(), ValidationError> {
    if present {
        Ok(())
    } else {
        Err(ValidationError::MissingAnchor { anchors })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn dates_must_be_iso_shaped_and_real() {
        assert!(is_valid_date("2025-06-01"));
        assert!(is_valid_date("2024-02-29"));
        assert!(!is_valid_date("2025-02-30"));
        assert!(!is_valid_date("2025-02-29"));
        assert!(!is_valid_date("2025-13-01"));
        assert!(!is_valid_date("2025-6-01"));
        assert!(!is_valid_date("2025/06/01"));
        assert!(!is_valid_date("2025-06-01T00:00:00"));
        assert!(!is_valid_date(""));
    }

    #[test]
    fn invalid_date_names_the_field() {
        let err = validate_date("from", "yesterday").unwrap_err();
        assert_eq!(err, ValidationError::InvalidDate { field: "from" });
        assert_eq!(err.to_string(), "Invalid from date format. Use YYYY-MM-DD");
    }

    #[test]
    fn page_bounds_are_one_to_fifteen() {
        for p in -3..=20 {
            assert_eq!(is_valid_page(p), (1..=15).contains(&p), "page {p}");
        }
        assert_eq!(validate_page("15"), Ok(15));
        assert_eq!(
            validate_page("16"),
            Err(ValidationError::PageOutOfRange { max: 15 })
        );
        assert!(validate_page("0").is_err());
        assert!(validate_page("two").is_err());
    }

    #[test]
    fn page_size_ceiling_depends_on_path() {
        assert!(validate_page_size("15", HEADLINES_MAX_PAGE_SIZE).is_ok());
        assert_eq!(
            validate_page_size("16", HEADLINES_MAX_PAGE_SIZE),
            Err(ValidationError::PageSizeOutOfRange { max: 15 })
        );
        assert_eq!(validate_page_size("100", EVERYTHING_MAX_PAGE_SIZE), Ok(100));
        assert!(validate_page_size("101", EVERYTHING_MAX_PAGE_SIZE).is_err());
        assert!(validate_page_size("0", EVERYTHING_MAX_PAGE_SIZE).is_err());
    }

    #[test]
    fn enum_matching_is_case_sensitive() {
        assert!(validate_language("en").is_ok());
        assert!(validate_language("EN").is_err());
        assert!(validate_country("us").is_ok());
        assert!(validate_country("US").is_err());
        assert!(validate_category("Sports").is_err());
        assert!(validate_sort_by("publishedAt").is_ok());
        assert!(validate_sort_by("publishedat").is_err());
    }

    #[test]
    fn invalid_language_lists_the_allowed_codes() {
        let err = validate_language("xx").unwrap_err();
        match &err {
            ValidationError::InvalidEnum { field, allowed, .. } => {
                assert_eq!(*field, "language");
                assert_eq!(allowed.len(), 14);
            }
            other => panic!("unexpected {other:?}"),
        }
        assert_eq!(
            err.to_string(),
            "Invalid language. Valid options: \
             ar, de, en, es, fr, he, it, nl, no, pt, ru, sv, ud, zh"
        );
    }

    #[test]
    fn invalid_country_uses_country_code_label() {
        let err = validate_country("zz").unwrap_err();
        assert!(err.to_string().starts_with("Invalid country code. Valid options: ae, ar,"));
    }

    #[test]
    fn range_boundary_is_twenty_nine_days() {
        assert!(validate_date_range(date(2025, 6, 1), date(2025, 6, 30)).is_ok());
        assert_eq!(
            validate_date_range(date(2025, 6, 1), date(2025, 7, 1)),
            Err(ValidationError::RangeTooWide { days: 30 })
        );
        assert!(validate_date_range(date(2025, 6, 30), date(2025, 6, 1)).is_ok());
        assert!(validate_date_range(date(2025, 7, 15), date(2025, 6, 1)).is_err());
    }

    #[test]
    fn anchor_required() {
        assert!(require_anchor(HEADLINES_ANCHORS, true).is_ok());
        assert_eq!(
            require_anchor(EVERYTHING_ANCHORS, false),
            Err(ValidationError::MissingAnchor {
                anchors: EVERYTHING_ANCHORS
            })
        );
    }
}
