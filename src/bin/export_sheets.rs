use anyhow::Result;

use daily_sales_etl::config::Config;
use daily_sales_etl::logging;
use daily_sales_etl::services::exporter;

fn main() -> Result<()> {
    logging::init_logging()?;

    let config = Config::new()?;
    exporter::export_workbook(&config)?;

    Ok(())
}
