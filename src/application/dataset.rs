//! # Dataset
//!
//! Loads the application and review tables from their CSV files.
//! A failed load is logged and yields an empty table; callers never see an error.
//! With `data.cache` enabled, tables are kept per source path after their first non-empty load.

use anyhow::{Result, bail};
use serde::de::DeserializeOwned;
use std::collections::HashMap;
use std::fs::File;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use tokio::sync::Mutex;

use crate::domain::config::DataConfig;
use crate::domain::records::{ApplicationRecord, ReviewRecord};

pub type Table<T> = Arc<Vec<T>>;

type TableCache<T> = Mutex<HashMap<PathBuf, Table<T>>>;

/// Reads every row of the CSV file at `path` (header row required).
/// Rows shorter than the header are padded with empty cells; a longer row, or any open,
/// read or row error, makes the whole load return an empty table.
pub fn load_table<T: DeserializeOwned>(path: &Path) -> Vec<T> {
    match try_load(path) {
        Ok(rows) => rows,
        Err(e) => {
            tracing::error!("{}", crate::strings::logs::csv_read_failed(path, &e));
            Vec::new()
        }
    }
}

fn try_load<T: DeserializeOwned>(path: &Path) -> Result<Vec<T>> {
    let file = File::open(path)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(file);
    let headers = reader.headers()?.clone();

    let mut rows = Vec::new();
    for record in reader.records() {
        let mut record = record?;
        if record.len() > headers.len() {
            let line = record.position().map_or(0, |p| p.line());
            bail!(crate::strings::logs::row_too_long(
                line as usize,
                record.len(),
                headers.len()
            ));
        }
        while record.len() < headers.len() {
            record.push_field("");
        }
        rows.push(record.deserialize(Some(&headers))?);
    }
    Ok(rows)
}

/// Access point for both tables.
pub struct Dataset {
    config: DataConfig,
    applications: TableCache<ApplicationRecord>,
    reviews: TableCache<ReviewRecord>,
}

impl Dataset {
    pub fn new(config: DataConfig) -> Self {
        Self {
            config,
            applications: Mutex::new(HashMap::new()),
            reviews: Mutex::new(HashMap::new()),
        }
    }

    pub async fn applications(&self) -> Table<ApplicationRecord> {
        self.read(&self.applications, &self.config.applications).await
    }

    pub async fn reviews(&self) -> Table<ReviewRecord> {
        self.read(&self.reviews, &self.config.reviews).await
    }

    async fn read<T>(&self, cache: &TableCache<T>, path: &Path) -> Table<T>
    where
        T: DeserializeOwned + Send + Sync + 'static,
    {
        if !self.config.cache {
            return load_blocking(path.to_path_buf()).await;
        }

        let mut guard = cache.lock().await;
        if let Some(table) = guard.get(path) {
            return table.clone();
        }
        let table = load_blocking(path.to_path_buf()).await;
        if !table.is_empty() {
            guard.insert(path.to_path_buf(), table.clone());
        }
        table
    }
}

async fn load_blocking<T>(path: PathBuf) -> Table<T>
where
    T: DeserializeOwned + Send + Sync + 'static,
{
    match tokio::task::spawn_blocking(move || load_table::<T>(&path)).await {
        Ok(rows) => Arc::new(rows),
        Err(e) => {
            tracing::error!("{}", crate::strings::logs::load_task_failed(&e.to_string()));
            Arc::new(Vec::new())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const APPS: &str = "App,Category,Rating,Reviews\nFooBar,TOOLS,4.2,10\nBaz,GAME,3.9,20\n";
    const REVIEWS: &str = "App,Translated_Review,Sentiment\nFooBar,Great,Positive\n";

    fn write(dir: &TempDir, name: &str, content: &str) -> PathBuf {
        let path = dir.path().join(name);
        fs::write(&path, content).unwrap();
        path
    }

    fn config(applications: PathBuf, reviews: PathBuf, cache: bool) -> DataConfig {
        DataConfig {
            applications,
            reviews,
            cache,
        }
    }

    #[test]
    fn test_load_table_reads_rows_in_order() {
        let dir = TempDir::new().unwrap();
        let path = write(&dir, "apps.csv", APPS);
        let rows: Vec<ApplicationRecord> = load_table(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].name.as_deref(), Some("FooBar"));
        assert_eq!(rows[1].name.as_deref(), Some("Baz"));
    }

    #[test]
    fn test_missing_file_yields_empty_table() {
        let dir = TempDir::new().unwrap();
        let rows: Vec<ApplicationRecord> = load_table(&dir.path().join("missing.csv"));
        assert!(rows.is_empty());
    }

    #[test]
    fn test_malformed_file_yields_empty_table() {
        let dir = TempDir::new().unwrap();
        // Second row has more fields than the header.
        let path = write(&dir, "bad.csv", "App,Rating\nFoo,4.1\nBar,3.0,extra\n");
        let rows: Vec<ApplicationRecord> = load_table(&path);
        assert!(rows.is_empty());
    }

    #[test]
    fn test_short_row_is_padded_not_fatal() {
        let dir = TempDir::new().unwrap();
        let data = "App,Category,Rating,Reviews,Size,Installs,Type,Price,Content Rating,Genres,Last Updated,Current Ver,Android Ver\n\
            Photo Editor,ART_AND_DESIGN,4.1,159,19M,\"10,000+\",Free,0,Everyone,Art & Design,\"January 7, 2018\",1.0.0,4.0.3 and up\n\
            Life Made WI-Fi Touchscreen Photo Frame,1.9,19.0,3.0M,\"1,000+\",Free,0,Everyone,,\"February 11, 2018\",1.0.19,4.0 and up\n";
        let path = write(&dir, "apps.csv", data);
        let rows: Vec<ApplicationRecord> = load_table(&path);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].category.as_deref(), Some("ART_AND_DESIGN"));

        let short = &rows[1];
        assert_eq!(
            short.name.as_deref(),
            Some("Life Made WI-Fi Touchscreen Photo Frame")
        );
        // Cells shift left, as in the source file; the missing trailing cell is empty.
        assert_eq!(short.category.as_deref(), Some("1.9"));
        assert_eq!(short.rating, Some(19.0));
        assert_eq!(short.current_version.as_deref(), Some("4.0 and up"));
        assert_eq!(short.android_version, None);
    }

    #[tokio::test]
    async fn test_dataset_rereads_without_cache() {
        let dir = TempDir::new().unwrap();
        let apps = write(&dir, "apps.csv", APPS);
        let reviews = write(&dir, "reviews.csv", REVIEWS);
        let dataset = Dataset::new(config(apps.clone(), reviews, false));

        assert_eq!(dataset.applications().await.len(), 2);
        fs::write(&apps, "App\nOnlyOne\n").unwrap();
        assert_eq!(dataset.applications().await.len(), 1);
    }

    #[tokio::test]
    async fn test_dataset_cache_keeps_first_load() {
        let dir = TempDir::new().unwrap();
        let apps = write(&dir, "apps.csv", APPS);
        let reviews = write(&dir, "reviews.csv", REVIEWS);
        let dataset = Dataset::new(config(apps.clone(), reviews, true));

        assert_eq!(dataset.applications().await.len(), 2);
        fs::write(&apps, "App\nOnlyOne\n").unwrap();
        assert_eq!(dataset.applications().await.len(), 2);
        assert_eq!(dataset.reviews().await.len(), 1);
    }

    #[tokio::test]
    async fn test_dataset_cache_skips_empty_loads() {
        let dir = TempDir::new().unwrap();
        let apps = dir.path().join("apps.csv");
        let reviews = dir.path().join("reviews.csv");
        let dataset = Dataset::new(config(apps.clone(), reviews, true));

        assert!(dataset.applications().await.is_empty());
        fs::write(&apps, APPS).unwrap();
        assert_eq!(dataset.applications().await.len(), 2);
    }
}
