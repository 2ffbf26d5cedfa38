use std::fs;
use std::path::{Path, PathBuf};

use tracing::info;

use crate::config::Config;
use crate::error::PipelineResult;
use crate::models::{RunningTotals, SheetLayout, StoreRevenueRow, SummaryRow};
use crate::services::dates::date_from_filename;
use crate::services::db::Database;
use crate::services::extract::read_daily_record;

/// Clears both derived tables, then replays every dated CSV export in
/// ascending date order, deriving daily revenue from the MTD deltas.
/// Returns the number of dates processed.
pub fn run_import(config: &Config, db: &Database) -> PipelineResult<u32> {
    info!("Clearing derived tables");
    db.clear_derived()?;

    let layout = SheetLayout::default();
    let dated = dated_files(Path::new(&config.export_dir))?;
    info!("Processing {} days", dated.len());

    let mut totals = RunningTotals::default();
    let mut processed = 0;
    for (date, path) in &dated {
        let record = read_daily_record(path, &layout)?;

        let daily_revenue = record.mtd_revenue - totals.company_mtd;
        let percent_to_goal = if record.month_goal > 0.0 {
            record.mtd_revenue / record.month_goal * 100.0
        } else {
            0.0
        };
        db.insert_summary(&SummaryRow {
            date_id: date.clone(),
            month_goal: record.month_goal,
            mtd_revenue: record.mtd_revenue,
            daily_revenue,
            percent_to_goal,
        })?;

        for (store_name, mtd) in &record.stores {
            // names missing from the roster are skipped, never failed
            let Some(store_id) = db.store_id(store_name)? else {
                continue;
            };

            let prev = totals.store_mtd.get(store_name).copied().unwrap_or(0.0);
            db.insert_store_revenue(&StoreRevenueRow {
                date_id: date.clone(),
                store_id,
                daily_revenue: mtd - prev,
                mtd_revenue: *mtd,
            })?;
            totals.store_mtd.insert(store_name.clone(), *mtd);
        }

        totals.company_mtd = record.mtd_revenue;
        processed += 1;
        info!(
            "{}: daily=${:.2}, mtd=${:.2}",
            date, daily_revenue, record.mtd_revenue
        );
    }

    info!("Import complete, {} days loaded", processed);
    Ok(processed)
}

/// Lists the directory's `.csv` files that carry a parseable date, sorted
/// ascending by date (lexicographic on `YYYY-MM-DD`, which is calendar
/// order). Undated files are excluded, silently.
fn dated_files(dir: &Path) -> PipelineResult<Vec<(String, PathBuf)>> {
    let mut dated = Vec::new();
    for entry in fs::read_dir(dir)? {
        let path = entry?.path();
        if path.extension().and_then(|e| e.to_str()) != Some("csv") {
            continue;
        }
        let Some(stem) = path.file_stem().and_then(|s| s.to_str()) else {
            continue;
        };
        if let Some(date) = date_from_filename(stem) {
            dated.push((date, path));
        }
    }
    dated.sort();
    Ok(dated)
}
