//! Error types for the crawl pipeline.
//!
//! Pipeline functions return `Box<dyn Error>` the same way the rest of the
//! binary does; [`CrawlError`] covers the failures that are specific to the
//! archive pages and the job parameters.

/// Failures raised by job validation and article parsing.
#[derive(Debug, thiserror::Error)]
pub enum CrawlError {
    /// Category is not one of the archive sections we know how to crawl.
    #[error("invalid category: {0:?}")]
    InvalidCategory(String),

    /// Page range is empty-start, reversed, or too wide.
    #[error("invalid page params: start={start}, end={end}")]
    InvalidPageRange { start: u32, end: u32 },

    /// The article page carries no JSON-LD metadata block.
    #[error("news meta data not found: {url}")]
    MissingMetadata { url: String },

    /// The JSON-LD block is malformed or lacks `dateCreated`/`headline`.
    #[error("bad meta data at {url}: {source}")]
    Metadata {
        url: String,
        source: serde_json::Error,
    },

    /// `dateCreated` is not in a format we can read.
    #[error("unparseable dateCreated {value:?}")]
    InvalidDate { value: String },

    /// The article page has no body container.
    #[error("article body not found: {url}")]
    MissingBody { url: String },

    /// Non-success HTTP status.
    #[error("HTTP {status} for {url}")]
    Status {
        url: String,
        status: reqwest::StatusCode,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_invalid_page_range() {
        let e = CrawlError::InvalidPageRange { start: 0, end: 10 };
        assert_eq!(e.to_string(), "invalid page params: start=0, end=10");
    }

    #[test]
    fn test_display_invalid_category() {
        let e = CrawlError::InvalidCategory("sports".to_string());
        assert_eq!(e.to_string(), "invalid category: \"sports\"");
    }
}
