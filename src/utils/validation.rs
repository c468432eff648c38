use crate::utils::error::{BookFinderError, Result};
use url::Url;

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_url(field_name: &str, url_str: &str) -> Result<()> {
    if url_str.is_empty() {
        return Err(BookFinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: "URL cannot be empty".to_string(),
        });
    }

    match Url::parse(url_str) {
        Ok(url) => match url.scheme() {
            "http" | "https" => {
                if url.host_str().is_none() {
                    return Err(BookFinderError::InvalidConfigValueError {
                        field: field_name.to_string(),
                        value: url_str.to_string(),
                        reason: "URL has no host".to_string(),
                    });
                }
                if url.query().is_some() {
                    return Err(BookFinderError::InvalidConfigValueError {
                        field: field_name.to_string(),
                        value: url_str.to_string(),
                        reason: "Endpoint must not carry a query string".to_string(),
                    });
                }
                Ok(())
            }
            scheme => Err(BookFinderError::InvalidConfigValueError {
                field: field_name.to_string(),
                value: url_str.to_string(),
                reason: format!("Unsupported URL scheme: {}", scheme),
            }),
        },
        Err(e) => Err(BookFinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: url_str.to_string(),
            reason: format!("Invalid URL format: {}", e),
        }),
    }
}

pub fn validate_one_of(field_name: &str, value: &str, allowed: &[&str]) -> Result<()> {
    if !allowed.contains(&value) {
        return Err(BookFinderError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: value.to_string(),
            reason: format!("Supported values: {}", allowed.join(", ")),
        });
    }
    Ok(())
}

/// Search keywords must contain something other than whitespace.
pub fn validate_keywords(keywords: &str) -> Result<()> {
    if keywords.trim().is_empty() {
        return Err(BookFinderError::EmptyInput);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_url() {
        assert!(validate_url("endpoint", "https://www.googleapis.com/books/v1/volumes").is_ok());
        assert!(validate_url("endpoint", "http://127.0.0.1:8080/volumes").is_ok());
        assert!(validate_url("endpoint", "").is_err());
        assert!(validate_url("endpoint", "invalid-url").is_err());
        assert!(validate_url("endpoint", "ftp://example.com").is_err());
        assert!(validate_url("endpoint", "https://example.com/volumes?q=x").is_err());
    }

    #[test]
    fn test_validate_one_of() {
        assert!(validate_one_of("format", "csv", &["text", "json", "csv"]).is_ok());
        assert!(validate_one_of("format", "xml", &["text", "json", "csv"]).is_err());
    }

    #[test]
    fn test_validate_keywords() {
        assert!(validate_keywords("dune").is_ok());
        assert!(validate_keywords("the left hand of darkness").is_ok());
        assert!(matches!(validate_keywords(""), Err(BookFinderError::EmptyInput)));
        assert!(matches!(validate_keywords("   "), Err(BookFinderError::EmptyInput)));
    }
}
