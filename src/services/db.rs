use rusqlite::{params, Connection, OptionalExtension};
use tracing::debug;

use crate::error::PipelineResult;
use crate::models::{StoreRevenueRow, SummaryRow};

/// Thin synchronous wrapper around the SQLite connection. Every call is a
/// single auto-committed statement; no transaction spans an import run, so
/// a mid-run failure leaves whatever was inserted so far in place.
pub struct Database {
    conn: Connection,
}

impl Database {
    pub fn open(path: &str) -> PipelineResult<Self> {
        debug!("Opening database at {}", path);
        let conn = Connection::open(path)?;
        Ok(Self { conn })
    }

    pub fn open_in_memory() -> PipelineResult<Self> {
        let conn = Connection::open_in_memory()?;
        Ok(Self { conn })
    }

    /// Creates the reference and derived tables when missing. Populating
    /// the `stores` roster is a provisioning step, not part of the import.
    pub fn init_schema(&self) -> PipelineResult<()> {
        self.conn.execute_batch(
            "CREATE TABLE IF NOT EXISTS stores (
                store_id INTEGER PRIMARY KEY,
                store_name TEXT NOT NULL UNIQUE
            );
            CREATE TABLE IF NOT EXISTS daily_summary_metrics (
                date_id TEXT PRIMARY KEY,
                month_goal REAL NOT NULL,
                mtd_revenue REAL NOT NULL,
                daily_revenue REAL NOT NULL,
                percent_to_goal REAL NOT NULL
            );
            CREATE TABLE IF NOT EXISTS daily_store_revenue (
                date_id TEXT NOT NULL,
                store_id INTEGER NOT NULL,
                daily_revenue REAL NOT NULL,
                mtd_revenue REAL NOT NULL
            );",
        )?;
        Ok(())
    }

    /// Full-replace semantics: both derived tables are emptied before a run.
    pub fn clear_derived(&self) -> PipelineResult<()> {
        self.conn.execute("DELETE FROM daily_store_revenue", [])?;
        self.conn.execute("DELETE FROM daily_summary_metrics", [])?;
        Ok(())
    }

    pub fn add_store(&self, store_name: &str) -> PipelineResult<i64> {
        self.conn.execute(
            "INSERT INTO stores (store_name) VALUES (?1)",
            params![store_name],
        )?;
        Ok(self.conn.last_insert_rowid())
    }

    /// Exact-name lookup; `None` means the store is not in the roster.
    pub fn store_id(&self, store_name: &str) -> PipelineResult<Option<i64>> {
        let id = self
            .conn
            .query_row(
                "SELECT store_id FROM stores WHERE store_name = ?1",
                params![store_name],
                |row| row.get(0),
            )
            .optional()?;
        Ok(id)
    }

    pub fn insert_summary(&self, row: &SummaryRow) -> PipelineResult<()> {
        self.conn.execute(
            "INSERT INTO daily_summary_metrics
                 (date_id, month_goal, mtd_revenue, daily_revenue, percent_to_goal)
             VALUES (?1, ?2, ?3, ?4, ?5)",
            params![
                row.date_id,
                row.month_goal,
                row.mtd_revenue,
                row.daily_revenue,
                row.percent_to_goal
            ],
        )?;
        Ok(())
    }

    pub fn insert_store_revenue(&self, row: &StoreRevenueRow) -> PipelineResult<()> {
        self.conn.execute(
            "INSERT INTO daily_store_revenue (date_id, store_id, daily_revenue, mtd_revenue)
             VALUES (?1, ?2, ?3, ?4)",
            params![row.date_id, row.store_id, row.daily_revenue, row.mtd_revenue],
        )?;
        Ok(())
    }

    pub fn summary_rows(&self) -> PipelineResult<Vec<SummaryRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT date_id, month_goal, mtd_revenue, daily_revenue, percent_to_goal
             FROM daily_summary_metrics ORDER BY date_id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(SummaryRow {
                    date_id: row.get(0)?,
                    month_goal: row.get(1)?,
                    mtd_revenue: row.get(2)?,
                    daily_revenue: row.get(3)?,
                    percent_to_goal: row.get(4)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }

    pub fn store_revenue_rows(&self) -> PipelineResult<Vec<StoreRevenueRow>> {
        let mut stmt = self.conn.prepare(
            "SELECT date_id, store_id, daily_revenue, mtd_revenue
             FROM daily_store_revenue ORDER BY date_id, store_id",
        )?;
        let rows = stmt
            .query_map([], |row| {
                Ok(StoreRevenueRow {
                    date_id: row.get(0)?,
                    store_id: row.get(1)?,
                    daily_revenue: row.get(2)?,
                    mtd_revenue: row.get(3)?,
                })
            })?
            .collect::<Result<Vec<_>, _>>()?;
        Ok(rows)
    }
}
