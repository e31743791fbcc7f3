use crate::grid::Cell;

/// Parse a currency amount out of a cell. Text is assumed to be BRL-styled
/// ("R$ 1.234,56"): periods are thousands separators and the first comma is
/// the decimal point. Numeric cells pass through unchanged. Anything
/// unparsable is 0.
pub fn parse_currency(cell: &Cell) -> f64 {
    match cell {
        Cell::Number(n) => *n,
        Cell::Empty => 0.0,
        Cell::Text(t) => parse_currency_text(t),
    }
}

fn parse_currency_text(text: &str) -> f64 {
    let mut cleaned: String = text
        .chars()
        .filter(|c| c.is_ascii_digit() || matches!(c, ',' | '.' | '-'))
        .collect();
    cleaned.retain(|c| c != '.');
    cleaned.replacen(',', ".", 1).parse().unwrap_or(0.0)
}

/// Parse an integer count out of a cell. Text keeps only its digits; numeric
/// cells are truncated. Anything unparsable (or negative) is 0.
pub fn parse_count(cell: &Cell) -> u64 {
    match cell {
        // `as` saturates: negative and non-finite values land on 0.
        Cell::Number(n) => *n as u64,
        Cell::Empty => 0,
        Cell::Text(t) => {
            let digits: String = t.chars().filter(char::is_ascii_digit).collect();
            digits.parse().unwrap_or(0)
        }
    }
}
