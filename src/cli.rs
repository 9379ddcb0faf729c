//! Command-line interface definitions.
//!
//! A single job is given with `--category`, `--page-start` and `--page-end`;
//! several jobs can be listed in a YAML file passed with `--jobs`.

use crate::scrapers::reuters::DEFAULT_BASE_URL;
use clap::Parser;

/// Command-line arguments for the Reuters archive crawler.
///
/// # Examples
///
/// ```sh
/// # Crawl business listing pages 300..600
/// reuters_archive -c business -s 300 -e 600 -o /data/news_foreign
///
/// # Run every job in a batch file
/// reuters_archive --jobs jobs.yaml -o /data/news_foreign
/// ```
#[derive(Parser, Debug)]
#[command(author, version, about)]
pub struct Cli {
    /// Archive section: business, world, politics or technology
    #[arg(short, long, required_unless_present = "jobs")]
    pub category: Option<String>,

    /// First listing page to crawl (1-based)
    #[arg(short = 's', long, required_unless_present = "jobs")]
    pub page_start: Option<u32>,

    /// Listing page to stop before (exclusive)
    #[arg(short = 'e', long, required_unless_present = "jobs")]
    pub page_end: Option<u32>,

    /// YAML file listing several jobs to run in order
    #[arg(long, conflicts_with_all = ["category", "page_start", "page_end"])]
    pub jobs: Option<String>,

    /// Root directory for the date-partitioned JSON Lines files
    #[arg(short = 'o', long, env = "NEWS_SAVE_DIR")]
    pub save_dir: String,

    /// Directory for the per-job progress logs
    #[arg(short, long, default_value = "./logs")]
    pub log_dir: String,

    /// Site root the archive is fetched from
    #[arg(long, env = "REUTERS_BASE_URL", default_value = DEFAULT_BASE_URL)]
    pub base_url: String,

    /// Per-request timeout in seconds
    #[arg(long, default_value_t = 30)]
    pub timeout_secs: u64,

    /// User-Agent header sent with every request
    #[arg(long, default_value = concat!("reuters_archive/", env!("CARGO_PKG_VERSION")))]
    pub user_agent: String,
}
