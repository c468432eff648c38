pub const GOOGLE_BOOKS_ENDPOINT: &str = "https://www.googleapis.com/books/v1/volumes";

pub const MAX_RESULTS: u32 = 20;

const KEYWORD_SEPARATOR: char = '+';

/// Replaces every space with the URL-safe separator. Nothing else is escaped.
pub fn format_keywords(keywords: &str) -> String {
    keywords.replace(' ', &KEYWORD_SEPARATOR.to_string())
}

/// `<endpoint>?q=<keywords>&maxResults=20`
pub fn build_search_url(endpoint: &str, keywords: &str) -> String {
    format!(
        "{}?q={}&maxResults={}",
        endpoint.trim_end_matches('/'),
        format_keywords(keywords),
        MAX_RESULTS
    )
}
