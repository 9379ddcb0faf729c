//! News source scrapers.
//!
//! Scrapers follow a two-phase pattern:
//!
//! 1. **Indexing**: discover article URLs from a listing page
//! 2. **Fetching**: download each article and parse it into a record
//!
//! # Supported Sources
//!
//! | Source | Module | Method | Notes |
//! |--------|--------|--------|-------|
//! | Reuters archive | [`reuters`] | HTML scraping | Paginated by section; JSON-LD metadata |
//!
//! Fetching is sequential and unretried: any network or parse failure is
//! returned to the caller.

pub mod reuters;
