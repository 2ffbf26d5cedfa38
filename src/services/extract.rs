use std::path::Path;

use crate::error::{PipelineError, PipelineResult};
use crate::models::{DailyRecord, SheetLayout};

/// Reads one exported sheet back into its daily figures using the fixed
/// cell positions in `layout`.
pub fn read_daily_record(path: &Path, layout: &SheetLayout) -> PipelineResult<DailyRecord> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_path(path)?;

    let mut rows: Vec<Vec<String>> = Vec::new();
    for record in reader.records() {
        let record = record?;
        rows.push(record.iter().map(str::to_string).collect());
    }

    extract_record(&rows, layout)
}

/// Pulls the company totals and the per-store MTD column out of the grid.
pub fn extract_record(rows: &[Vec<String>], layout: &SheetLayout) -> PipelineResult<DailyRecord> {
    let (row, col) = layout.mtd_revenue_cell;
    let mtd_revenue = cell_to_f64(rows, row, col)?;

    let (row, col) = layout.month_goal_cell;
    let month_goal = cell_to_f64(rows, row, col)?;

    let mut stores = Vec::with_capacity(layout.store_names.len());
    for (offset, name) in layout.store_names.iter().enumerate() {
        let mtd = cell_to_f64(rows, layout.first_store_row + offset, layout.store_column)?;
        stores.push((name.clone(), mtd));
    }

    Ok(DailyRecord {
        mtd_revenue,
        month_goal,
        stores,
    })
}

/// Empty or absent cells count as zero; any other content must parse as a
/// number or the whole run aborts.
fn cell_to_f64(rows: &[Vec<String>], row: usize, col: usize) -> PipelineResult<f64> {
    let cell = rows
        .get(row)
        .and_then(|r| r.get(col))
        .map(String::as_str)
        .unwrap_or("");

    if cell.is_empty() {
        return Ok(0.0);
    }

    cell.trim()
        .parse::<f64>()
        .map_err(|_| PipelineError::Numeric {
            value: cell.to_string(),
            row,
            col,
        })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::STORE_NAMES;

    /// 13x6 grid shaped like the production report sheet.
    fn report_grid(mtd: &str, goal: &str, store_values: &[&str; 11]) -> Vec<Vec<String>> {
        let mut rows = vec![vec![String::new(); 6]; 13];
        rows[4][4] = mtd.to_string();
        rows[2][1] = goal.to_string();
        for (i, v) in store_values.iter().enumerate() {
            rows[2 + i][5] = v.to_string();
        }
        rows
    }

    #[test]
    fn extracts_fixed_positions() {
        let grid = report_grid(
            "1250.5",
            "40000",
            &[
                "100", "200", "300", "400", "500", "600", "700", "800", "900", "1000", "1100",
            ],
        );
        let record = extract_record(&grid, &SheetLayout::default()).unwrap();

        assert_eq!(record.mtd_revenue, 1250.5);
        assert_eq!(record.month_goal, 40000.0);
        assert_eq!(record.stores.len(), 11);
        assert_eq!(record.stores[0], ("Buford".to_string(), 100.0));
        assert_eq!(record.stores[10], ("Costco".to_string(), 1100.0));
        let names: Vec<&str> = record.stores.iter().map(|(n, _)| n.as_str()).collect();
        assert_eq!(names, STORE_NAMES);
    }

    #[test]
    fn empty_and_missing_cells_are_zero() {
        // 3x2 grid leaves every layout position empty or out of range
        let grid = vec![vec![String::new(); 2]; 3];
        let record = extract_record(&grid, &SheetLayout::default()).unwrap();

        assert_eq!(record.mtd_revenue, 0.0);
        assert_eq!(record.month_goal, 0.0);
        assert!(record.stores.iter().all(|(_, mtd)| *mtd == 0.0));
    }

    #[test]
    fn malformed_numeric_cell_is_fatal() {
        let grid = report_grid("not-a-number", "0", &[""; 11]);
        let err = extract_record(&grid, &SheetLayout::default()).unwrap_err();
        match err {
            PipelineError::Numeric { value, row, col } => {
                assert_eq!(value, "not-a-number");
                assert_eq!((row, col), (4, 4));
            }
            other => panic!("expected numeric error, got {other}"),
        }
    }

    #[test]
    fn honors_a_custom_layout() {
        let mut rows = vec![vec![String::new(); 3]; 3];
        rows[0][0] = "7.5".to_string();
        rows[1][1] = "15".to_string();
        rows[2][2] = "3".to_string();

        let layout = SheetLayout {
            mtd_revenue_cell: (0, 0),
            month_goal_cell: (1, 1),
            store_column: 2,
            first_store_row: 2,
            store_names: vec!["Solo".to_string()],
        };
        let record = extract_record(&rows, &layout).unwrap();

        assert_eq!(record.mtd_revenue, 7.5);
        assert_eq!(record.month_goal, 15.0);
        assert_eq!(record.stores, vec![("Solo".to_string(), 3.0)]);
    }
}
