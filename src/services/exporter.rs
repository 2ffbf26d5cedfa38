use std::fs;
use std::path::Path;

use calamine::{open_workbook, Data, Range, Reader, Xlsx};
use tracing::info;

use crate::config::Config;
use crate::error::{PipelineError, PipelineResult};

/// Exports every sheet after the first (summary) one to
/// `<export_dir>/<sheet name>.csv`, creating the directory when missing.
/// Returns the number of sheets written. Any read or write failure aborts
/// the whole run; there is no per-sheet recovery.
pub fn export_workbook(config: &Config) -> PipelineResult<u32> {
    info!("Loading {}", config.workbook_path);
    let mut workbook: Xlsx<_> = open_workbook(&config.workbook_path)
        .map_err(|e| PipelineError::Workbook(format!("Failed to open workbook: {}", e)))?;

    let out_dir = Path::new(&config.export_dir);
    fs::create_dir_all(out_dir)?;

    let sheet_names = workbook.sheet_names().to_vec();
    info!(
        "Found {} sheets, exporting to {}/",
        sheet_names.len(),
        config.export_dir
    );

    let mut exported = 0;
    for sheet_name in sheet_names.iter().skip(1) {
        let range = workbook.worksheet_range(sheet_name).map_err(|e| {
            PipelineError::Workbook(format!("Failed to read sheet {}: {}", sheet_name, e))
        })?;

        let csv_path = out_dir.join(format!("{}.csv", sanitize_sheet_name(sheet_name)));
        write_sheet_csv(&range, &csv_path)?;

        exported += 1;
        info!("Exported: {} -> {}", sheet_name, csv_path.display());
    }

    info!("Done, exported {} sheets", exported);
    Ok(exported)
}

/// One CSV record per sheet row, one field per cell; empty cells become
/// empty fields.
pub fn write_sheet_csv(range: &Range<Data>, path: &Path) -> PipelineResult<()> {
    let mut writer = csv::Writer::from_path(path)?;
    for row in range.rows() {
        let record: Vec<String> = row.iter().map(render_cell).collect();
        writer.write_record(&record)?;
    }
    writer.flush()?;
    Ok(())
}

fn render_cell(cell: &Data) -> String {
    match cell {
        Data::Empty => String::new(),
        other => other.to_string(),
    }
}

/// Sheet names double as filenames; path separators get substituted.
pub fn sanitize_sheet_name(name: &str) -> String {
    name.replace('/', "-")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slashes_become_dashes() {
        assert_eq!(sanitize_sheet_name("8/19/25"), "8-19-25");
        assert_eq!(sanitize_sheet_name("10012025"), "10012025");
    }

    #[test]
    fn null_cells_render_as_empty_fields() {
        let mut range = Range::new((0, 0), (1, 2));
        range.set_value((0, 0), Data::String("Month Goal".to_string()));
        range.set_value((0, 2), Data::Float(40000.0));
        range.set_value((1, 1), Data::Float(1250.5));

        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sheet.csv");
        write_sheet_csv(&range, &path).unwrap();

        let text = fs::read_to_string(&path).unwrap();
        assert_eq!(text, "Month Goal,,40000\n,1250.5,\n");
    }
}
