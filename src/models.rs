//! Data models for scraped articles.
//!
//! - [`ArticleMetadata`]: the JSON-LD block embedded in every article page
//! - [`NewsRecord`]: the flat record appended to the JSON Lines output
//!
//! Field names follow the formats on either side of the pipeline, hence the
//! `#[allow(non_snake_case)]` attributes.

use crate::error::CrawlError;
use chrono::{DateTime, NaiveDateTime};
use serde::{Deserialize, Serialize};

/// Timestamp layouts seen in `dateCreated`, tried after RFC 3339.
const DATE_CREATED_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S%z", "%Y-%m-%dT%H:%M:%S%.f%z"];
const NAIVE_FORMATS: &[&str] = &["%Y-%m-%dT%H:%M:%S", "%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S"];

/// The subset of an article's JSON-LD metadata we read.
///
/// Any other keys in the block are ignored.
#[allow(non_snake_case)]
#[derive(Debug, Deserialize)]
pub struct ArticleMetadata {
    /// Creation timestamp, e.g. `2018-07-08T02:52:44+0000`.
    pub dateCreated: String,
    /// The article headline.
    pub headline: String,
}

impl ArticleMetadata {
    /// Wall-clock time of `dateCreated` in the offset it was written in.
    pub fn created_at(&self) -> Result<NaiveDateTime, CrawlError> {
        parse_date_created(&self.dateCreated)
    }
}

/// Parse a `dateCreated` value, keeping its local wall-clock time.
pub fn parse_date_created(value: &str) -> Result<NaiveDateTime, CrawlError> {
    let value = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Ok(dt.naive_local());
    }
    for fmt in DATE_CREATED_FORMATS {
        if let Ok(dt) = DateTime::parse_from_str(value, fmt) {
            return Ok(dt.naive_local());
        }
    }
    for fmt in NAIVE_FORMATS {
        if let Ok(dt) = NaiveDateTime::parse_from_str(value, fmt) {
            return Ok(dt);
        }
    }

    Err(CrawlError::InvalidDate {
        value: value.to_string(),
    })
}

/// One persisted article.
///
/// Serialized as a single JSON object with the keys `DATE`, `TIME`, `TITL`,
/// `SOUR` and `BODY`, in that order.
#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct NewsRecord {
    /// Publication date, `YYYYMMDD`.
    pub DATE: String,
    /// Publication time, `HH:MM:SS`.
    pub TIME: String,
    /// Headline.
    pub TITL: String,
    /// Source label, e.g. `Reuters_business`.
    pub SOUR: String,
    /// Body paragraphs joined by single spaces.
    pub BODY: String,
}

impl NewsRecord {
    pub fn new(meta: &ArticleMetadata, source: &str, body: String) -> Result<Self, CrawlError> {
        let created = meta.created_at()?;
        Ok(Self {
            DATE: created.format("%Y%m%d").to_string(),
            TIME: created.format("%H:%M:%S").to_string(),
            TITL: meta.headline.clone(),
            SOUR: source.to_string(),
            BODY: body,
        })
    }

    /// `(year, month)` components of `DATE`, used to partition output.
    pub fn year_month(&self) -> (&str, &str) {
        (&self.DATE[..4], &self.DATE[4..6])
    }
}
