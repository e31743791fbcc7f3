use anyhow::{Context, Result};
use rust_xlsxwriter::{Format, FormatAlign, Workbook};
use std::path::Path;
use tracing::info;

use crate::report::{CampaignRecord, Objective};

/// Sheet column headings, in order. Columns 5..=7 are the three cost slots;
/// exactly one of them is filled per row, depending on the objective.
const HEADERS: [&str; 13] = [
    "Nome da Ação",
    "Formato",
    "Validade",
    "Investimento",
    "Valor Gasto",
    "Custo por 1.000 Pessoas",
    "Custo por ThruPlay",
    "Custo por Interação",
    "Filtro",
    "Cidade",
    "Alcance",
    "Visualização",
    "Engajamento",
];

const COLUMN_WIDTHS: [f64; 13] = [
    40.0, 15.0, 15.0, 15.0, 15.0, 20.0, 20.0, 20.0, 10.0, 10.0, 15.0, 15.0, 15.0,
];

/// One record after the objective-conditional projection. Any consumer of
/// the pipeline's output renders exactly this: the cost lands in the column
/// its objective reports under, views only show for Reel, and the
/// engagement column shows engagements (or clicks, for Link rows) for
/// everything that is not Reach or Reel. `None` renders as "-".
#[derive(Debug, Clone, PartialEq)]
pub struct ReportRow {
    pub name: String,
    pub format: String,
    pub validity: String,
    pub investment: f64,
    pub amount_spent: f64,
    pub cost_per_thousand: Option<f64>,
    pub cost_per_thruplay: Option<f64>,
    pub cost_per_interaction: Option<f64>,
    pub reach: u64,
    pub views: Option<u64>,
    pub engagement: Option<u64>,
}

impl ReportRow {
    pub fn project(record: &CampaignRecord) -> Self {
        let mut cost_per_thousand = None;
        let mut cost_per_thruplay = None;
        let mut cost_per_interaction = None;
        match record.objective {
            Objective::Reach => cost_per_thousand = Some(record.cost_per_result),
            Objective::Reel => cost_per_thruplay = Some(record.cost_per_result),
            Objective::Engagement | Objective::Link => {
                cost_per_interaction = Some(record.cost_per_result)
            }
            Objective::Other => {}
        }

        let views = (record.objective == Objective::Reel).then_some(record.views);
        let engagement = (!matches!(record.objective, Objective::Reach | Objective::Reel)).then(
            || {
                if record.engagement > 0 {
                    record.engagement
                } else {
                    record.clicks
                }
            },
        );

        ReportRow {
            name: record.name.clone(),
            format: record.display_format.clone(),
            validity: record.validity.clone(),
            investment: record.investment,
            amount_spent: record.amount_spent,
            cost_per_thousand,
            cost_per_thruplay,
            cost_per_interaction,
            reach: record.reach,
            views,
            engagement,
        }
    }
}

/// Write the ordered records as the styled monthly report workbook.
pub fn write_xlsx(records: &[CampaignRecord], path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let sheet = workbook
        .add_worksheet()
        .set_name("Relatório Geral")
        .context("failed to name worksheet")?;

    let title_format = Format::new()
        .set_bold()
        .set_font_name("Arial")
        .set_font_size(14)
        .set_font_color("#FFFFFF")
        .set_background_color("#FF9900")
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter);
    let header_format = Format::new()
        .set_bold()
        .set_font_name("Arial")
        .set_font_size(10)
        .set_background_color("#9CA3AF")
        .set_align(FormatAlign::Center)
        .set_align(FormatAlign::VerticalCenter)
        .set_text_wrap();
    let cost_header_format = header_format.clone().set_background_color("#D1D5DB");
    let text_format = Format::new().set_font_name("Arial").set_font_size(10);
    let center_format = text_format.clone().set_align(FormatAlign::Center);
    let currency_format = center_format.clone().set_num_format("\"R$ \"#,##0.00");
    let count_format = center_format.clone().set_num_format("#,##0");

    // Row 0: merged title banner, as in the printable report.
    sheet.set_row_height(0, 30)?;
    sheet.merge_range(0, 0, 0, 12, "AÇÕES MENSAIS", &title_format)?;

    sheet.set_row_height(1, 25)?;
    for (col, heading) in HEADERS.iter().enumerate() {
        let format = if (5..=7).contains(&col) {
            &cost_header_format
        } else {
            &header_format
        };
        sheet.write_string_with_format(1, col as u16, *heading, format)?;
        sheet.set_column_width(col as u16, COLUMN_WIDTHS[col])?;
    }

    for (idx, record) in records.iter().enumerate() {
        let row = ReportRow::project(record);
        let r = (idx + 2) as u32;

        sheet.write_string_with_format(r, 0, &row.name, &text_format)?;
        sheet.write_string_with_format(r, 1, &row.format, &center_format)?;
        sheet.write_string_with_format(r, 2, &row.validity, &center_format)?;
        sheet.write_number_with_format(r, 3, row.investment, &currency_format)?;
        sheet.write_number_with_format(r, 4, row.amount_spent, &currency_format)?;
        write_currency_slot(sheet, r, 5, row.cost_per_thousand, &currency_format, &center_format)?;
        write_currency_slot(sheet, r, 6, row.cost_per_thruplay, &currency_format, &center_format)?;
        write_currency_slot(
            sheet,
            r,
            7,
            row.cost_per_interaction,
            &currency_format,
            &center_format,
        )?;
        sheet.write_string_with_format(r, 8, "-", &center_format)?;
        sheet.write_string_with_format(r, 9, "-", &center_format)?;
        sheet.write_number_with_format(r, 10, row.reach as f64, &count_format)?;
        write_count_slot(sheet, r, 11, row.views, &count_format, &center_format)?;
        write_count_slot(sheet, r, 12, row.engagement, &count_format, &center_format)?;
    }

    workbook
        .save(path)
        .with_context(|| format!("failed to save workbook to {}", path.display()))?;
    info!(records = records.len(), path = %path.display(), "wrote report workbook");
    Ok(())
}

fn write_currency_slot(
    sheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: Option<f64>,
    currency_format: &Format,
    blank_format: &Format,
) -> Result<()> {
    match value {
        Some(v) => sheet.write_number_with_format(row, col, v, currency_format)?,
        None => sheet.write_string_with_format(row, col, "-", blank_format)?,
    };
    Ok(())
}

fn write_count_slot(
    sheet: &mut rust_xlsxwriter::Worksheet,
    row: u32,
    col: u16,
    value: Option<u64>,
    count_format: &Format,
    blank_format: &Format,
) -> Result<()> {
    match value {
        Some(v) => sheet.write_number_with_format(row, col, v as f64, count_format)?,
        None => sheet.write_string_with_format(row, col, "-", blank_format)?,
    };
    Ok(())
}
