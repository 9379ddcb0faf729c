//! Output files written by a crawl.
//!
//! # Submodules
//!
//! - [`json`]: appends article records to date-partitioned JSON Lines files
//! - [`log`]: the per-job progress log
//!
//! # Output Structure
//!
//! ```text
//! save_dir/
//! └── 2018/
//!     └── 07/
//!         ├── news_20180707.json
//!         └── news_20180708.json
//!
//! log_dir/
//! └── log_page300to600
//! ```

pub mod json;
pub mod log;
