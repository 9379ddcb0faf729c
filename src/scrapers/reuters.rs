//! Reuters news-archive scraper.
//!
//! The archive groups headlines by section and paginates them ten at a time:
//!
//! `https://www.reuters.com/news/archive/businessNews?view=page&page=3&pageSize=10`
//!
//! Each headline links to an article page carrying a JSON-LD metadata block
//! (`dateCreated`, `headline`) and a body container whose direct `<p>`
//! children hold the story text.

use crate::error::CrawlError;
use crate::jobs::Category;
use crate::models::{ArticleMetadata, NewsRecord};
use crate::utils::truncate_for_log;
use itertools::Itertools;
use once_cell::sync::Lazy;
use scraper::{ElementRef, Html, Selector};
use std::error::Error;
use std::time::Duration;
use tracing::{debug, info, instrument};
use url::Url;

pub const DEFAULT_BASE_URL: &str = "https://www.reuters.com";
pub const PAGE_SIZE: u32 = 10;

static HEADLINE_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.news-headline-list > article.story").unwrap());
static STORY_LINK_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse("div.story-content a[href]").unwrap());
static METADATA_SELECTOR: Lazy<Selector> =
    Lazy::new(|| Selector::parse(r#"script[type="application/ld+json"]"#).unwrap());
static BODY_SELECTOR: Lazy<Selector> = Lazy::new(|| Selector::parse("div.body_1gnLA").unwrap());

/// HTTP access to one Reuters site (or a mirror of it).
#[derive(Debug, Clone)]
pub struct ReutersClient {
    http: reqwest::Client,
    base_url: Url,
}

impl ReutersClient {
    pub fn new(base_url: &str, timeout: Duration, user_agent: &str) -> Result<Self, Box<dyn Error>> {
        let http = reqwest::Client::builder()
            .timeout(timeout)
            .user_agent(user_agent)
            .build()?;
        Ok(Self {
            http,
            base_url: Url::parse(base_url)?,
        })
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Archive listing page for `category`, 1-based `page`.
    pub fn listing_url(&self, category: Category, page: u32) -> String {
        format!(
            "{}/news/archive/{}News?view=page&page={}&pageSize={}",
            self.base_url.as_str().trim_end_matches('/'),
            urlencoding::encode(category.as_str()),
            page,
            PAGE_SIZE
        )
    }

    /// GET `url` and return the body text. Non-2xx responses are errors.
    async fn get_html(&self, url: &str) -> Result<String, Box<dyn Error>> {
        let response = self.http.get(url).send().await?;
        let status = response.status();
        if !status.is_success() {
            return Err(Box::new(CrawlError::Status {
                url: url.to_string(),
                status,
            }));
        }
        Ok(response.text().await?)
    }

    /// Fetch one listing page and return the article URLs on it.
    #[instrument(level = "info", skip_all, fields(%category, page = page))]
    pub async fn index_articles(
        &self,
        category: Category,
        page: u32,
    ) -> Result<Vec<String>, Box<dyn Error>> {
        let listing_url = self.listing_url(category, page);
        let html = self.get_html(&listing_url).await?;
        let article_urls = extract_links(&html, &self.base_url);

        info!(
            count = article_urls.len(),
            source = %listing_url,
            "Indexed Reuters article URLs"
        );
        debug!(urls = ?article_urls, "Reuters URLs");
        Ok(article_urls)
    }

    /// Fetch a single article and turn it into a record.
    #[instrument(level = "info", skip_all, fields(%url))]
    pub async fn fetch_article(&self, url: &str, source: &str) -> Result<NewsRecord, Box<dyn Error>> {
        let html = self.get_html(url).await?;
        let record = parse_article(&html, url, source)?;

        info!(
            date = %record.DATE,
            bytes = record.BODY.len(),
            "Parsed Reuters article"
        );
        debug!(body = %truncate_for_log(&record.BODY, 200), "Article body");
        Ok(record)
    }
}

/// Article links on a listing page, in document order.
///
/// Each `article.story` contributes the first link inside its
/// `div.story-content`; stories without one are skipped.
pub fn extract_links(html: &str, base_url: &Url) -> Vec<String> {
    let document = Html::parse_document(html);

    let mut links = Vec::new();
    for story in document.select(&HEADLINE_SELECTOR) {
        let Some(href) = story
            .select(&STORY_LINK_SELECTOR)
            .next()
            .and_then(|a| a.value().attr("href"))
        else {
            debug!("Story without a link; skipping");
            continue;
        };

        match base_url.join(href) {
            Ok(resolved) => links.push(resolved.to_string()),
            Err(e) => debug!(%href, error = %e, "Unresolvable story link; skipping"),
        }
    }
    links
}

/// Build a [`NewsRecord`] from an article page.
///
/// # Errors
///
/// - [`CrawlError::MissingMetadata`] if there is no JSON-LD block
/// - [`CrawlError::Metadata`] if the first block is not valid metadata
/// - [`CrawlError::InvalidDate`] if `dateCreated` cannot be read
/// - [`CrawlError::MissingBody`] if the body container is absent
pub fn parse_article(html: &str, url: &str, source: &str) -> Result<NewsRecord, CrawlError> {
    let document = Html::parse_document(html);

    let Some(script) = document.select(&METADATA_SELECTOR).next() else {
        info!(%url, "news meta data not found");
        return Err(CrawlError::MissingMetadata {
            url: url.to_string(),
        });
    };
    let meta_str = script.text().collect::<String>();
    let meta: ArticleMetadata =
        serde_json::from_str(&meta_str).map_err(|e| CrawlError::Metadata {
            url: url.to_string(),
            source: e,
        })?;

    let body_div = document
        .select(&BODY_SELECTOR)
        .next()
        .ok_or_else(|| CrawlError::MissingBody {
            url: url.to_string(),
        })?;
    let body = body_div
        .children()
        .filter_map(ElementRef::wrap)
        .filter(|el| el.value().name() == "p")
        .map(|p| p.text().collect::<String>())
        .join(" ");

    NewsRecord::new(&meta, source, body)
}
