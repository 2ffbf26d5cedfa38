use std::collections::HashMap;

/// The eleven stores tracked by the daily report, in sheet row order.
pub const STORE_NAMES: [&str; 11] = [
    "Buford",
    "Athens",
    "Warehouse",
    "Kennesaw",
    "Alpharetta",
    "Augusta",
    "Newnan",
    "Oconee",
    "Blue Ridge",
    "Blairsville",
    "Costco",
];

/// Where the daily report sheet keeps its figures. All positions are fixed
/// by the workbook template, not discovered from headers; swapping the
/// template means swapping this value, not the extraction code.
#[derive(Debug, Clone)]
pub struct SheetLayout {
    /// (row, column), zero-indexed.
    pub mtd_revenue_cell: (usize, usize),
    pub month_goal_cell: (usize, usize),
    /// Column holding each store's MTD value.
    pub store_column: usize,
    /// Row of the first store; the rest follow on consecutive rows.
    pub first_store_row: usize,
    pub store_names: Vec<String>,
}

impl Default for SheetLayout {
    fn default() -> Self {
        SheetLayout {
            mtd_revenue_cell: (4, 4),
            month_goal_cell: (2, 1),
            store_column: 5,
            first_store_row: 2,
            store_names: STORE_NAMES.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Month-to-date figures pulled from one exported sheet.
#[derive(Debug, Clone)]
pub struct DailyRecord {
    pub mtd_revenue: f64,
    pub month_goal: f64,
    /// (store name, MTD revenue), in layout order.
    pub stores: Vec<(String, f64)>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct SummaryRow {
    pub date_id: String,
    pub month_goal: f64,
    pub mtd_revenue: f64,
    pub daily_revenue: f64,
    pub percent_to_goal: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreRevenueRow {
    pub date_id: String,
    pub store_id: i64,
    pub daily_revenue: f64,
    pub mtd_revenue: f64,
}

/// Fold state threaded through the sorted date sequence. "Previous" means
/// the preceding date in this run, not the calendar-previous day and not
/// anything persisted from earlier runs.
#[derive(Debug, Default)]
pub struct RunningTotals {
    pub company_mtd: f64,
    pub store_mtd: HashMap<String, f64>,
}
