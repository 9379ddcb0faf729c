//! Per-job progress log.
//!
//! One line per discovered article, written before the article is fetched,
//! and a closing line once the page range is exhausted. Lines go through the
//! same JSON Lines writer as the records, so each one is a JSON string.

use crate::jobs::CrawlJob;
use crate::outputs::json::append_json_line;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;

/// Append-only log file for one job: `{log_dir}/log_page{start}to{end}`.
#[derive(Debug)]
pub struct CrawlLog {
    path: PathBuf,
}

impl CrawlLog {
    /// Create `log_dir` if needed and point at this job's log file.
    pub async fn open(log_dir: &Path, job: &CrawlJob) -> Result<Self, Box<dyn Error>> {
        fs::create_dir_all(log_dir).await?;
        Ok(Self {
            path: log_path(log_dir, job),
        })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub async fn article(&self, news_cnt: u64, page: u32, url: &str) -> Result<(), Box<dyn Error>> {
        let line = format!("news_cnt : {news_cnt} / news_page : {page} / url : {url}");
        append_json_line(&line, &self.path).await
    }

    pub async fn finished(&self, news_cnt: u64) -> Result<(), Box<dyn Error>> {
        let line = format!("crawling finished ... {news_cnt}");
        append_json_line(&line, &self.path).await
    }
}

pub fn log_path(log_dir: &Path, job: &CrawlJob) -> PathBuf {
    log_dir.join(format!("log_page{}to{}", job.page_start, job.page_end))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jobs::Category;

    fn job() -> CrawlJob {
        CrawlJob {
            category: Category::Business,
            page_start: 300,
            page_end: 600,
        }
    }

    #[test]
    fn test_log_path() {
        assert_eq!(
            log_path(Path::new("./logs"), &job()),
            PathBuf::from("./logs/log_page300to600")
        );
    }

    #[tokio::test]
    async fn test_log_lines() {
        let dir = tempfile::tempdir().unwrap();
        let log_dir = dir.path().join("logs");
        let log = CrawlLog::open(&log_dir, &job()).await.unwrap();

        log.article(1, 300, "https://www.reuters.com/article/a").await.unwrap();
        log.finished(1).await.unwrap();

        let content = std::fs::read_to_string(log.path()).unwrap();
        let lines: Vec<String> = content
            .lines()
            .map(|l| serde_json::from_str::<String>(l).unwrap())
            .collect();
        assert_eq!(
            lines,
            vec![
                "news_cnt : 1 / news_page : 300 / url : https://www.reuters.com/article/a".to_string(),
                "crawling finished ... 1".to_string(),
            ]
        );
    }
}
