pub mod columns;
pub mod cost;
pub mod dates;
pub mod objective;
pub mod record;
pub mod sort;
pub mod value;

use anyhow::{bail, Result};
use tracing::{debug, warn};

use crate::grid::{Cell, RawGrid};
use columns::ColumnMap;
use cost::{cell_at, RowMetrics};
use value::{parse_count, parse_currency};

pub use record::{CampaignRecord, Objective};

/// Every record carries this fixed validity label; the report is monthly.
pub const VALIDITY_LABEL: &str = "Mensal";

/// Run the full pipeline over one export grid: resolve columns once, then
/// per row normalize values, classify the objective, derive the cost, and
/// finally sort the sequence by date, base name, and objective.
///
/// An empty grid (no rows, or a header row with no data) is the only fatal
/// error. Rows without a resolvable campaign name are skipped; unparsable
/// cells degrade to zero or absent.
pub fn build_report(grid: &RawGrid) -> Result<Vec<CampaignRecord>> {
    let Some(header) = grid.header_row() else {
        bail!("the export file is empty");
    };
    if grid.data_rows().is_empty() {
        bail!("the export file has a header row but no data rows");
    }

    let cols = ColumnMap::resolve(header);
    if cols.name.is_none() {
        warn!("no campaign-name column found in headers; all rows will be skipped");
    }

    let mut records = Vec::with_capacity(grid.data_rows().len());
    for (row_idx, row) in grid.data_rows().iter().enumerate() {
        match build_record(row, &cols, row_idx as u64) {
            Some(record) => records.push(record),
            None => debug!(row = row_idx + 1, "skipping row without a campaign name"),
        }
    }

    sort::sort_records(&mut records);
    debug!(records = records.len(), "built report");
    Ok(records)
}

fn build_record(row: &[Cell], cols: &ColumnMap, id: u64) -> Option<CampaignRecord> {
    let name = match cell_at(row, cols.name) {
        Cell::Text(t) if !t.is_empty() => t.clone(),
        Cell::Number(n) => n.to_string(),
        _ => return None,
    };
    let name_upper = name.to_uppercase();
    let format_lower = match cell_at(row, cols.format) {
        Cell::Text(t) => t.to_lowercase(),
        Cell::Number(n) => n.to_string(),
        Cell::Empty => String::new(),
    };

    let mut metrics = RowMetrics {
        reach: parse_count(cell_at(row, cols.reach)),
        engagement: parse_count(cell_at(row, cols.engagement)),
        views: parse_count(cell_at(row, cols.thruplay)),
        clicks: parse_count(cell_at(row, cols.link_clicks)),
    };
    let results = parse_count(cell_at(row, cols.results));

    // Classification sees the raw metric columns, before the results-column
    // substitution fills the objective's slot.
    let objective = objective::classify(&name_upper, &format_lower, &metrics);
    cost::apply_results_fallback(objective, results, &mut metrics);

    let spent = parse_currency(cell_at(row, cols.spent));
    let cost_per_result = cost::derive_cost(objective, row, cols, spent, &metrics);

    Some(CampaignRecord {
        id,
        display_format: objective::display_format(&name, objective),
        date: dates::extract_name_date(&name),
        name,
        objective,
        validity: VALIDITY_LABEL.to_string(),
        investment: parse_currency(cell_at(row, cols.budget)),
        amount_spent: spent,
        cost_per_result,
        reach: metrics.reach,
        engagement: metrics.engagement,
        views: metrics.views,
        clicks: metrics.clicks,
    })
}
