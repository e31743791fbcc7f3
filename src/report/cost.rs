use super::columns::ColumnMap;
use super::record::Objective;
use super::value::{parse_count, parse_currency};
use crate::grid::Cell;

/// Raw per-row counts, parsed from the direct metric columns.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RowMetrics {
    pub reach: u64,
    pub engagement: u64,
    pub views: u64,
    pub clicks: u64,
}

/// Substitute the generic "results" column into the metric slot the
/// objective reports on, when the direct column came up empty. Export
/// variants often carry only "Results" plus the objective.
pub fn apply_results_fallback(objective: Objective, results: u64, metrics: &mut RowMetrics) {
    if results == 0 {
        return;
    }
    match objective {
        Objective::Engagement if metrics.engagement == 0 => metrics.engagement = results,
        Objective::Reel if metrics.views == 0 => metrics.views = results,
        Objective::Link if metrics.clicks == 0 => metrics.clicks = results,
        _ => {}
    }
}

/// Derive the cost-per-result for one row.
///
/// Priority per objective: the generic "cost per result" column is the
/// baseline, an objective-specific cost column overrides it when non-zero,
/// and only if the cost is still zero is it computed from spend divided by
/// the objective's denominator (impressions/1000, engagements, views or
/// clicks). `Other` rows keep the generic baseline.
pub fn derive_cost(
    objective: Objective,
    row: &[Cell],
    cols: &ColumnMap,
    spent: f64,
    metrics: &RowMetrics,
) -> f64 {
    let mut cost = parse_currency(cell_at(row, cols.cost_per_result));

    match objective {
        Objective::Reach => {
            let direct = parse_currency(cell_at(row, cols.cpm));
            if direct > 0.0 {
                cost = direct;
            } else if cost == 0.0 {
                let impressions = parse_count(cell_at(row, cols.impressions));
                if impressions > 0 {
                    cost = spent / impressions as f64 * 1000.0;
                }
            }
        }
        Objective::Engagement => {
            let direct = parse_currency(cell_at(row, cols.cpe));
            if direct > 0.0 {
                cost = direct;
            } else if cost == 0.0 && metrics.engagement > 0 {
                cost = spent / metrics.engagement as f64;
            }
        }
        Objective::Reel => {
            let direct = parse_currency(cell_at(row, cols.cpv));
            if direct > 0.0 {
                cost = direct;
            } else if cost == 0.0 && metrics.views > 0 {
                cost = spent / metrics.views as f64;
            }
        }
        Objective::Link => {
            let direct = parse_currency(cell_at(row, cols.cpl));
            if direct > 0.0 {
                cost = direct;
            } else if cost == 0.0 && metrics.clicks > 0 {
                cost = spent / metrics.clicks as f64;
            }
        }
        Objective::Other => {}
    }

    cost
}

/// Cell at a resolved column position, or empty when the column is absent or
/// the row is short.
pub(crate) fn cell_at<'a>(row: &'a [Cell], idx: Option<usize>) -> &'a Cell {
    idx.and_then(|i| row.get(i)).unwrap_or(&Cell::Empty)
}
