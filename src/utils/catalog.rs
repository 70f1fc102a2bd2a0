use serde::Serialize;

pub const CATEGORIES: [&str; 7] = [
    "business",
    "entertainment",
    "general",
    "health",
    "science",
    "sports",
    "technology",
];

pub const SORT_ORDERS: [&str; 3] = ["relevancy", "popularity", "publishedAt"];

pub const DEFAULT_SORT_ORDER: &str = "publishedAt";

pub const LANGUAGES: [(&str, &str); 14] = [
    ("ar", "Arabic"),
    ("de", "German"),
    ("en", "English"),
    ("es", "Spanish"),
    ("fr", "French"),
    ("he", "Hebrew"),
    ("it", "Italian"),
    ("nl", "Dutch"),
    ("no", "Norwegian"),
    ("pt", "Portuguese"),
    ("ru", "Russian"),
    ("sv", "Swedish"),
    ("ud", "Urdu"),
    ("zh", "Chinese"),
];

pub const COUNTRIES: [(&str, &str); 54] = [
    ("ae", "United Arab Emirates"),
    ("ar", "Argentina"),
    ("at", "Austria"),
    ("au", "Australia"),
    ("be", "Belgium"),
    ("bg", "Bulgaria"),
    ("br", "Brazil"),
    ("ca", "Canada"),
    ("ch", "Switzerland"),
    ("cn", "China"),
    ("co", "Colombia"),
    ("cu", "Cuba"),
    ("cz", "Czech Republic"),
    ("de", "Germany"),
    ("eg", "Egypt"),
    ("fr", "France"),
    ("gb", "United Kingdom"),
    ("gr", "Greece"),
    ("hk", "Hong Kong"),
    ("hu", "Hungary"),
    ("id", "Indonesia"),
    ("ie", "Ireland"),
    ("il", "Israel"),
    ("in", "India"),
    ("it", "Italy"),
    ("jp", "Japan"),
    ("kr", "South Korea"),
    ("lt", "Lithuania"),
    ("lv", "Latvia"),
    ("ma", "Morocco"),
    ("mx", "Mexico"),
    ("my", "Malaysia"),
    ("ng", "Nigeria"),
    ("nl", "Netherlands"),
    ("no", "Norway"),
    ("nz", "New Zealand"),
    ("ph", "Philippines"),
    ("pl", "Poland"),
    ("pt", "Portugal"),
    ("ro", "Romania"),
    ("rs", "Serbia"),
    ("ru", "Russia"),
    ("sa", "Saudi Arabia"),
    ("se", "Sweden"),
    ("sg", "Singapore"),
    ("si", "Slovenia"),
    ("sk", "Slovakia"),
    ("th", "Thailand"),
    ("tr", "Turkey"),
    ("tw", "Taiwan"),
    ("ua", "Ukraine"),
    ("us", "United States"),
    ("ve", "Venezuela"),
    ("za", "South Africa"),
];

#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct CodeEntry {
    pub code: &'static str,
    pub name: &'static str,
}

pub fn language_codes() -> Vec<&'static str> {
    LANGUAGES.iter().map(|(code, _)| *code).collect()
}

pub fn country_codes() -> Vec<&'static str> {
    COUNTRIES.iter().map(|(code, _)| *code).collect()
}

pub fn languages() -> Vec<CodeEntry> {
    LANGUAGES
        .iter()
        .map(|&(code, name)| CodeEntry { code, name })
        .collect()
}

pub fn countries() -> Vec<CodeEntry> {
    COUNTRIES
        .iter()
        .map(|&(code, name)| CodeEntry { code, name })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn codes_are_unique_and_lowercase() {
        for codes in [language_codes(), country_codes(), CATEGORIES.to_vec()] {
            let unique: HashSet<_> = codes.iter().collect();
            assert_eq!(unique.len(), codes.len());
            assert!(codes.iter().all(|c| *c == c.to_lowercase()));
        }
    }

    #[test]
    fn entries_keep_catalog_order() {
        let langs = languages();
        assert_eq!(langs.first().map(|e| e.code), Some("ar"));
        assert_eq!(langs.last().map(|e| e.name), Some("Chinese"));
        assert_eq!(countries()[51], CodeEntry { code: "us", name: "United States" });
    }
}
