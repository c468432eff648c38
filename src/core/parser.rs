use crate::domain::model::{BookRecord, AUTHOR_UNAVAILABLE};
use crate::utils::error::Result;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct VolumesResponse {
    items: Vec<Volume>,
}

#[derive(Debug, Deserialize)]
struct Volume {
    #[serde(rename = "volumeInfo")]
    volume_info: VolumeInfo,
}

#[derive(Debug, Deserialize)]
struct VolumeInfo {
    title: String,
    #[serde(default)]
    authors: Option<Vec<String>>,
}

impl From<VolumeInfo> for BookRecord {
    fn from(info: VolumeInfo) -> Self {
        let names: Vec<String> = info
            .authors
            .unwrap_or_default()
            .into_iter()
            .filter(|name| !name.trim().is_empty())
            .collect();
        let author = if names.is_empty() {
            AUTHOR_UNAVAILABLE.to_string()
        } else {
            names.join(", ")
        };
        BookRecord::new(author, info.title)
    }
}

/// Decodes a volumes response into records, in source order.
///
/// All or nothing: a body that is not JSON, has no `items` array, or has an
/// item without `volumeInfo.title` fails as a whole.
pub fn parse_books(body: &str) -> Result<Vec<BookRecord>> {
    let response: VolumesResponse = serde_json::from_str(body)?;
    let books: Vec<BookRecord> = response
        .items
        .into_iter()
        .map(|volume| BookRecord::from(volume.volume_info))
        .collect();

    tracing::debug!("Parsed {} books from response", books.len());
    Ok(books)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::BookFinderError;

    #[test]
    fn test_single_book_with_author() {
        let body = r#"{"items":[{"volumeInfo":{"title":"Dune","authors":["Frank Herbert"]}}]}"#;
        let books = parse_books(body).unwrap();
        assert_eq!(books, vec![BookRecord::new("Frank Herbert", "Dune")]);
    }

    #[test]
    fn test_missing_authors_uses_placeholder() {
        let body = r#"{"items":[{"volumeInfo":{"title":"X"}}]}"#;
        let books = parse_books(body).unwrap();
        assert_eq!(books, vec![BookRecord::new("Author name unavailable", "X")]);
    }

    #[test]
    fn test_empty_or_null_authors_uses_placeholder() {
        let body = r#"{"items":[
            {"volumeInfo":{"title":"A","authors":[]}},
            {"volumeInfo":{"title":"B","authors":null}}
        ]}"#;
        let books = parse_books(body).unwrap();
        assert_eq!(books.len(), 2);
        assert!(books.iter().all(|b| b.author == AUTHOR_UNAVAILABLE));
    }

    #[test]
    fn test_blank_author_entries_use_placeholder() {
        let body = r#"{"items":[
            {"volumeInfo":{"title":"T","authors":[""]}},
            {"volumeInfo":{"title":"U","authors":["",""]}}
        ]}"#;
        let books = parse_books(body).unwrap();
        assert_eq!(books[0].author, AUTHOR_UNAVAILABLE);
        assert_eq!(books[1].author, AUTHOR_UNAVAILABLE);
    }

    #[test]
    fn test_blank_entries_skipped_when_joining() {
        let body = r#"{"items":[{"volumeInfo":{"title":"T","authors":["A","","B"]}}]}"#;
        let books = parse_books(body).unwrap();
        assert_eq!(books[0].author, "A, B");
    }

    #[test]
    fn test_multiple_authors_joined_in_order() {
        let body = r#"{"items":[{"volumeInfo":{
            "title":"Good Omens",
            "authors":["Terry Pratchett","Neil Gaiman"]
        }}]}"#;
        let books = parse_books(body).unwrap();
        assert_eq!(books[0].author, "Terry Pratchett, Neil Gaiman");
    }

    #[test]
    fn test_source_order_preserved_and_extra_fields_ignored() {
        let body = r#"{
            "kind": "books#volumes",
            "totalItems": 3,
            "items": [
                {"id": "a", "volumeInfo": {"title": "First", "authors": ["A"], "pageCount": 10}},
                {"id": "b", "volumeInfo": {"title": "Second"}},
                {"id": "c", "volumeInfo": {"title": "Third", "authors": ["C1", "C2", "C3"]}}
            ]
        }"#;
        let books = parse_books(body).unwrap();
        let titles: Vec<&str> = books.iter().map(|b| b.title.as_str()).collect();
        assert_eq!(titles, vec!["First", "Second", "Third"]);
        assert_eq!(books[2].author, "C1, C2, C3");
    }

    #[test]
    fn test_empty_items_is_empty_list() {
        let books = parse_books(r#"{"items":[]}"#).unwrap();
        assert!(books.is_empty());
    }

    #[test]
    fn test_missing_items_is_absent() {
        let result = parse_books(r#"{"kind":"books#volumes","totalItems":0}"#);
        assert!(matches!(result, Err(BookFinderError::ParseError(_))));
    }

    #[test]
    fn test_malformed_json_is_absent() {
        assert!(parse_books("").is_err());
        assert!(parse_books("not json").is_err());
        assert!(parse_books(r#"{"items":[{"volumeInfo":{"title":"Dune""#).is_err());
        assert!(parse_books(r#"[{"volumeInfo":{"title":"Dune"}}]"#).is_err());
    }

    #[test]
    fn test_one_bad_item_fails_whole_parse() {
        let body = r#"{"items":[
            {"volumeInfo":{"title":"Good"}},
            {"volumeInfo":{"authors":["No Title"]}}
        ]}"#;
        assert!(parse_books(body).is_err());

        let no_volume_info = r#"{"items":[{"volumeInfo":{"title":"Good"}},{"id":"x"}]}"#;
        assert!(parse_books(no_volume_info).is_err());
    }
}
