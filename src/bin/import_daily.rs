use anyhow::Result;

use daily_sales_etl::config::Config;
use daily_sales_etl::logging;
use daily_sales_etl::services::db::Database;
use daily_sales_etl::services::importer;

fn main() -> Result<()> {
    logging::init_logging()?;

    let config = Config::new()?;
    let db = Database::open(config.require_database_path()?)?;
    db.init_schema()?;

    importer::run_import(&config, &db)?;

    Ok(())
}
