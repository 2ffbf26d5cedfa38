pub mod dates;
pub mod db;
pub mod exporter;
pub mod extract;
pub mod importer;
