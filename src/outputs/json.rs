//! JSON Lines output.
//!
//! Every article lands in the file for its publication day, under a
//! year/month directory:
//!
//! `{save_dir}/{YYYY}/{MM}/news_{YYYYMMDD}.json`
//!
//! Files are only ever appended to, one JSON value per line.

use crate::models::NewsRecord;
use serde::Serialize;
use std::error::Error;
use std::path::{Path, PathBuf};
use tokio::fs;
use tokio::io::AsyncWriteExt;
use tracing::{debug, instrument};

/// File a record belongs in.
pub fn record_path(save_dir: &Path, record: &NewsRecord) -> PathBuf {
    let (year, month) = record.year_month();
    save_dir
        .join(year)
        .join(month)
        .join(format!("news_{}.json", record.DATE))
}

/// Serialize `value` and append it to `path` as one line.
///
/// The file is created if it does not exist. Non-ASCII text is written as
/// UTF-8, not escaped.
pub async fn append_json_line<T: Serialize + ?Sized>(
    value: &T,
    path: &Path,
) -> Result<(), Box<dyn Error>> {
    let mut line = serde_json::to_string(value)?;
    line.push('\n');

    let mut file = fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .await?;
    file.write_all(line.as_bytes()).await?;
    file.flush().await?;
    Ok(())
}

/// Append a record to its date-partitioned file, creating directories as
/// needed. Returns the path written to.
#[instrument(level = "debug", skip_all, fields(date = %record.DATE))]
pub async fn append_record(
    save_dir: &Path,
    record: &NewsRecord,
) -> Result<PathBuf, Box<dyn Error>> {
    let path = record_path(save_dir, record);
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).await?;
    }

    append_json_line(record, &path).await?;
    debug!(path = %path.display(), "Appended record");
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(date: &str, title: &str) -> NewsRecord {
        NewsRecord {
            DATE: date.to_string(),
            TIME: "12:00:00".to_string(),
            TITL: title.to_string(),
            SOUR: "Reuters_world".to_string(),
            BODY: "Body.".to_string(),
        }
    }

    #[test]
    fn test_record_path_layout() {
        let path = record_path(Path::new("/data/news"), &record("20180708", "t"));
        assert_eq!(path, PathBuf::from("/data/news/2018/07/news_20180708.json"));
    }

    #[test]
    fn test_record_path_trailing_slash() {
        let path = record_path(Path::new("/data/news/"), &record("20191231", "t"));
        assert_eq!(path, PathBuf::from("/data/news/2019/12/news_20191231.json"));
    }

    #[tokio::test]
    async fn test_append_record_one_line_per_record() {
        let dir = tempfile::tempdir().unwrap();

        append_record(dir.path(), &record("20180708", "first")).await.unwrap();
        append_record(dir.path(), &record("20180708", "second")).await.unwrap();
        append_record(dir.path(), &record("20180801", "third")).await.unwrap();

        let july = std::fs::read_to_string(dir.path().join("2018/07/news_20180708.json")).unwrap();
        let lines: Vec<&str> = july.lines().collect();
        assert_eq!(lines.len(), 2);
        let first: NewsRecord = serde_json::from_str(lines[0]).unwrap();
        let second: NewsRecord = serde_json::from_str(lines[1]).unwrap();
        assert_eq!(first.TITL, "first");
        assert_eq!(second.TITL, "second");
        assert!(july.ends_with('\n'));

        let august = std::fs::read_to_string(dir.path().join("2018/08/news_20180801.json")).unwrap();
        assert_eq!(august.lines().count(), 1);
    }
}
