use crate::model::Cell;

/// Clean a monetary cell. Never fails: anything that does not parse is `0.0`.
pub fn clean_amount(cell: &Cell) -> f64 {
    let value = match cell {
        Cell::Number(n) => *n,
        Cell::Int(n) => *n as f64,
        other => match other.as_text() {
            Some(text) => parse_decimal(&text).unwrap_or(0.0),
            None => 0.0,
        },
    };
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Parse a decimal with optional thousands-separator commas.
fn parse_decimal(text: &str) -> Option<f64> {
    let cleaned = text.trim().replace(',', "");
    if cleaned.is_empty() {
        return None;
    }
    cleaned.parse::<f64>().ok()
}

/// Trimmed display text; missing cells read as the empty string.
pub fn clean_text(cell: &Cell) -> String {
    cell.as_text()
        .map(|s| s.trim().to_string())
        .unwrap_or_default()
}
