//! # Reuters Archive
//!
//! Crawls the Reuters news archive one section at a time. Listing pages are
//! walked in order, every linked article is fetched and parsed from its
//! JSON-LD metadata and body paragraphs, and each article is appended as one
//! JSON line to a file for its publication day.
//!
//! ## Usage
//!
//! ```sh
//! reuters_archive -c business -s 300 -e 600 -o /data/news_foreign
//! reuters_archive --jobs jobs.yaml -o /data/news_foreign
//! ```
//!
//! ## Architecture
//!
//! A single sequential pipeline per job:
//! 1. **Validation**: category and page range are checked before any I/O
//! 2. **Indexing**: each listing page yields up to ten article URLs
//! 3. **Fetching**: each article is downloaded and parsed into a record
//! 4. **Output**: records are appended to `YYYY/MM/news_YYYYMMDD.json`,
//!    progress to `log_page{start}to{end}`

use clap::Parser;
use std::error::Error;
use std::path::PathBuf;
use std::time::Duration;
use tracing::{debug, info, instrument};
use tracing_subscriber::{EnvFilter, fmt as tfmt};

mod cli;
mod crawl;
mod error;
mod jobs;
mod models;
mod outputs;
mod scrapers;
mod utils;

use cli::Cli;
use crawl::{CrawlSettings, execute_news_crawling};
use jobs::{JobSpec, load_jobs};
use scrapers::reuters::ReutersClient;

#[tokio::main]
#[instrument]
async fn main() -> Result<(), Box<dyn Error>> {
    // --- Tracing init ---
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));
    tfmt()
        .with_env_filter(filter)
        .with_target(true)
        .with_file(false)
        .with_line_number(false)
        .with_timer(tracing_subscriber::fmt::time::UtcTime::rfc_3339())
        .init();

    let start_time = std::time::Instant::now();
    info!("reuters_archive starting up");

    let args = Cli::parse();
    debug!(?args, "Parsed CLI arguments");

    let job_specs = match (&args.jobs, &args.category, args.page_start, args.page_end) {
        (Some(path), _, _, _) => load_jobs(path).await?,
        (None, Some(category), Some(page_start), Some(page_end)) => vec![JobSpec {
            category: category.clone(),
            page_start,
            page_end,
        }],
        _ => return Err("either --jobs or --category/--page-start/--page-end is required".into()),
    };

    let client = ReutersClient::new(
        &args.base_url,
        Duration::from_secs(args.timeout_secs),
        &args.user_agent,
    )?;
    let settings = CrawlSettings {
        save_dir: PathBuf::from(&args.save_dir),
        log_dir: PathBuf::from(&args.log_dir),
    };
    info!(base_url = %client.base_url(), save_dir = %args.save_dir, jobs = job_specs.len(), "Crawler configured");

    let mut total_articles = 0;
    for spec in &job_specs {
        if let Some(summary) = execute_news_crawling(&client, spec, &settings).await? {
            info!(
                category = %summary.job.category,
                pages = summary.pages,
                articles = summary.articles,
                "Job complete"
            );
            total_articles += summary.articles;
        }
    }

    let elapsed = start_time.elapsed();
    info!(
        ?elapsed,
        secs = elapsed.as_secs(),
        articles = total_articles,
        "Execution complete"
    );

    Ok(())
}
