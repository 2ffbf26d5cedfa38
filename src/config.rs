use serde::Deserialize;
use anyhow::Result;
use dotenvy::dotenv;

const DEFAULT_WORKBOOK: &str = "Daily Sales Report.xlsx";
const DEFAULT_EXPORT_DIR: &str = "csv-exports";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub workbook_path: String,
    pub export_dir: String,
    /// Only the importer needs this; the exporter runs without it.
    pub database_path: Option<String>,
}

impl Config {
    pub fn new() -> Result<Self> {
        // Load .env file first
        dotenv().ok();

        let workbook_path = std::env::var("WORKBOOK_PATH")
            .unwrap_or_else(|_| DEFAULT_WORKBOOK.to_string());
        let export_dir = std::env::var("EXPORT_DIR")
            .unwrap_or_else(|_| DEFAULT_EXPORT_DIR.to_string());
        let database_path = std::env::var("DATABASE_PATH").ok();

        Ok(Config {
            workbook_path,
            export_dir,
            database_path,
        })
    }

    pub fn require_database_path(&self) -> Result<&str> {
        self.database_path
            .as_deref()
            .ok_or_else(|| anyhow::anyhow!("Failed to load DATABASE_PATH"))
    }
}
