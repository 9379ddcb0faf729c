//! The crawl loop.
//!
//! For every listing page of a job, every article link is logged, fetched,
//! parsed and appended to its date file, strictly one after another. Any
//! failure past validation ends the run; there is no retry or skip.

use crate::jobs::{CrawlJob, JobSpec};
use crate::outputs::json::append_record;
use crate::outputs::log::CrawlLog;
use crate::scrapers::reuters::ReutersClient;
use crate::utils::ensure_writable_dir;
use std::error::Error;
use std::path::PathBuf;
use tracing::{debug, error, info, instrument};

/// Articles between two progress lines.
const PROGRESS_EVERY: u64 = 10;

/// Where a crawl writes.
#[derive(Debug, Clone)]
pub struct CrawlSettings {
    /// Root of the `YYYY/MM/news_YYYYMMDD.json` tree.
    pub save_dir: PathBuf,
    /// Directory holding `log_page{start}to{end}` files.
    pub log_dir: PathBuf,
}

/// Outcome of a completed job.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CrawlSummary {
    pub job: CrawlJob,
    pub pages: u32,
    pub articles: u64,
    pub log_path: PathBuf,
}

/// Run one job to completion.
///
/// Returns `Ok(None)` without touching the network or the disk when the job
/// parameters are invalid.
///
/// # Errors
///
/// Any HTTP, parse or I/O failure after validation.
#[instrument(level = "info", skip_all, fields(category = %spec.category, start = spec.page_start, end = spec.page_end))]
pub async fn execute_news_crawling(
    client: &ReutersClient,
    spec: &JobSpec,
    settings: &CrawlSettings,
) -> Result<Option<CrawlSummary>, Box<dyn Error>> {
    let job = match CrawlJob::try_from(spec) {
        Ok(job) => job,
        Err(e) => {
            error!(error = %e, "Invalid crawl job; skipping");
            return Ok(None);
        }
    };

    let log = CrawlLog::open(&settings.log_dir, &job).await?;
    ensure_writable_dir(&settings.save_dir).await?;

    let source = job.category.source_label();
    let mut news_cnt: u64 = 0;
    let mut pages: u32 = 0;

    for page in job.pages() {
        let urls = client.index_articles(job.category, page).await?;
        pages += 1;

        for url in urls {
            news_cnt += 1;
            log.article(news_cnt, page, &url).await?;

            let record = client.fetch_article(&url, &source).await?;
            let path = append_record(&settings.save_dir, &record).await?;
            debug!(news_cnt, path = %path.display(), "Saved article");

            if news_cnt % PROGRESS_EVERY == 0 {
                info!("now crawling ... {news_cnt}");
            }
        }
    }

    log.finished(news_cnt).await?;
    info!(pages, articles = news_cnt, log = %log.path().display(), "crawling finished");

    Ok(Some(CrawlSummary {
        job,
        pages,
        articles: news_cnt,
        log_path: log.path().to_path_buf(),
    }))
}
