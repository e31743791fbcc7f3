pub mod csv;
pub mod xlsx;

/// One spreadsheet cell as it arrives from an export file. CSV exports only
/// ever produce `Text` and `Empty`; XLSX exports also carry real numbers.
#[derive(Debug, Clone, PartialEq)]
pub enum Cell {
    Text(String),
    Number(f64),
    Empty,
}

impl Cell {
    pub fn is_empty(&self) -> bool {
        match self {
            Cell::Empty => true,
            Cell::Text(t) => t.is_empty(),
            Cell::Number(_) => false,
        }
    }
}

/// A rectangular-ish grid of raw cell values. Row 0 is the header row; data
/// rows may be shorter or longer than the header (missing cells read as
/// empty). The grid is the pipeline's only input.
#[derive(Debug, Clone, Default)]
pub struct RawGrid {
    pub rows: Vec<Vec<Cell>>,
}

impl RawGrid {
    pub fn header_row(&self) -> Option<&[Cell]> {
        self.rows.first().map(Vec::as_slice)
    }

    pub fn data_rows(&self) -> &[Vec<Cell>] {
        if self.rows.len() > 1 {
            &self.rows[1..]
        } else {
            &[]
        }
    }
}
