//! Crawl jobs: which archive section to walk and over which pages.
//!
//! A job is validated before anything touches the network or the disk.
//! Several jobs can be listed in a YAML batch file and run back to back:
//!
//! ```yaml
//! jobs:
//!   - { category: business, page_start: 1, page_end: 300 }
//!   - { category: business, page_start: 300, page_end: 600 }
//! ```

use crate::error::CrawlError;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt;
use std::str::FromStr;
use tracing::{info, instrument};

/// Widest page span a single job may cover.
pub const MAX_PAGE_SPAN: u32 = 3270;

/// Archive sections exposed by the listing page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Category {
    Business,
    World,
    Politics,
    Technology,
}

impl Category {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Business => "business",
            Self::World => "world",
            Self::Politics => "politics",
            Self::Technology => "technology",
        }
    }

    /// Value stored in the `SOUR` field of every record of this category.
    pub fn source_label(&self) -> String {
        format!("Reuters_{}", self.as_str())
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = CrawlError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "business" => Ok(Self::Business),
            "world" => Ok(Self::World),
            "politics" => Ok(Self::Politics),
            "technology" => Ok(Self::Technology),
            other => Err(CrawlError::InvalidCategory(other.to_string())),
        }
    }
}

/// A job as written by the operator, before validation.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct JobSpec {
    pub category: String,
    pub page_start: u32,
    pub page_end: u32,
}

/// A validated job. Pages `page_start..page_end` are crawled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CrawlJob {
    pub category: Category,
    pub page_start: u32,
    pub page_end: u32,
}

impl CrawlJob {
    pub fn pages(&self) -> std::ops::Range<u32> {
        self.page_start..self.page_end
    }
}

impl TryFrom<&JobSpec> for CrawlJob {
    type Error = CrawlError;

    fn try_from(spec: &JobSpec) -> Result<Self, Self::Error> {
        let category = spec.category.parse::<Category>()?;

        let (start, end) = (spec.page_start, spec.page_end);
        if start == 0 || end < start || end - start > MAX_PAGE_SPAN {
            return Err(CrawlError::InvalidPageRange { start, end });
        }

        Ok(Self {
            category,
            page_start: start,
            page_end: end,
        })
    }
}

#[derive(Debug, Deserialize)]
struct JobsFile {
    jobs: Vec<JobSpec>,
}

/// Load the job list from a YAML batch file.
#[instrument(level = "info")]
pub async fn load_jobs(path: &str) -> Result<Vec<JobSpec>, Box<dyn Error>> {
    let raw = tokio::fs::read_to_string(path).await?;
    let file: JobsFile = serde_yaml::from_str(&raw)?;
    info!(count = file.jobs.len(), "Loaded crawl jobs");
    Ok(file.jobs)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spec(category: &str, page_start: u32, page_end: u32) -> JobSpec {
        JobSpec {
            category: category.to_string(),
            page_start,
            page_end,
        }
    }

    #[test]
    fn test_all_categories_parse() {
        for name in ["business", "world", "politics", "technology"] {
            let category: Category = name.parse().unwrap();
            assert_eq!(category.as_str(), name);
        }
    }

    #[test]
    fn test_unknown_category_rejected() {
        assert!(matches!(
            CrawlJob::try_from(&spec("sports", 1, 10)),
            Err(CrawlError::InvalidCategory(c)) if c == "sports"
        ));
        assert!("Business".parse::<Category>().is_err());
    }

    #[test]
    fn test_source_label() {
        assert_eq!(Category::Technology.source_label(), "Reuters_technology");
    }

    #[test]
    fn test_valid_range() {
        let job = CrawlJob::try_from(&spec("business", 300, 600)).unwrap();
        assert_eq!(job.category, Category::Business);
        assert_eq!(job.pages(), 300..600);
    }

    #[test]
    fn test_empty_range_is_valid() {
        let job = CrawlJob::try_from(&spec("world", 5, 5)).unwrap();
        assert_eq!(job.pages().count(), 0);
    }

    #[test]
    fn test_invalid_ranges() {
        for (start, end) in [(0, 10), (10, 9), (1, 1 + MAX_PAGE_SPAN + 1)] {
            assert!(matches!(
                CrawlJob::try_from(&spec("politics", start, end)),
                Err(CrawlError::InvalidPageRange { .. })
            ));
        }
    }

    #[test]
    fn test_max_span_allowed() {
        assert!(CrawlJob::try_from(&spec("politics", 1, 1 + MAX_PAGE_SPAN)).is_ok());
    }

    #[tokio::test]
    async fn test_load_jobs_yaml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("jobs.yaml");
        std::fs::write(
            &path,
            "jobs:\n  - { category: business, page_start: 1, page_end: 300 }\n  - category: world\n    page_start: 300\n    page_end: 600\n",
        )
        .unwrap();

        let jobs = load_jobs(path.to_str().unwrap()).await.unwrap();
        assert_eq!(jobs.len(), 2);
        assert_eq!(jobs[0].category, "business");
        assert_eq!(jobs[1].page_start, 300);
        assert_eq!(jobs[1].page_end, 600);
    }
}
