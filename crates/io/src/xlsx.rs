// Excel / OpenDocument import via calamine

use std::io::{Cursor, Read, Seek};
use std::path::Path;

use calamine::{open_workbook_auto, open_workbook_auto_from_rs, Data, Range, Reader, Sheets};
use ledgercheck_recon::{Cell, Table};

/// Read the first worksheet of a spreadsheet file (xlsx, xlsm, xls, xlsb, ods).
pub fn import(path: &Path) -> Result<Table, String> {
    let workbook: Sheets<_> = open_workbook_auto(path)
        .map_err(|e| format!("Failed to open spreadsheet: {}", e))?;
    first_sheet(workbook)
}

/// Read the first worksheet of a spreadsheet held in a byte stream.
///
/// The stream is consumed to the end; the container format is sniffed from
/// its content.
pub fn import_from_reader<R: Read>(mut reader: R) -> Result<Table, String> {
    let mut bytes = Vec::new();
    reader
        .read_to_end(&mut bytes)
        .map_err(|e| format!("Failed to read spreadsheet stream: {}", e))?;
    if bytes.is_empty() {
        return Err("Spreadsheet stream is empty".to_string());
    }
    let workbook: Sheets<_> = open_workbook_auto_from_rs(Cursor::new(bytes))
        .map_err(|e| format!("Failed to open spreadsheet: {}", e))?;
    first_sheet(workbook)
}

fn first_sheet<RS: Read + Seek>(mut workbook: Sheets<RS>) -> Result<Table, String> {
    let sheet_name = workbook
        .sheet_names()
        .first()
        .cloned()
        .ok_or_else(|| "Spreadsheet contains no sheets".to_string())?;

    let range = workbook
        .worksheet_range(&sheet_name)
        .map_err(|e| format!("Failed to read sheet '{}': {}", sheet_name, e))?;

    let table = range_to_table(&range);
    log::debug!(
        "sheet '{}': {} row(s) x {} column(s)",
        sheet_name,
        table.height(),
        table.width()
    );
    Ok(table)
}

/// Convert a calamine range into a table addressed from A1.
fn range_to_table(range: &Range<Data>) -> Table {
    let (height, width) = range.get_size();
    if height == 0 || width == 0 {
        return Table::default();
    }

    // Range start offset (data may not begin at A1)
    let (start_row, start_col) = range.start().unwrap_or((0, 0));
    let (start_row, start_col) = (start_row as usize, start_col as usize);

    let mut rows: Vec<Vec<Cell>> = Vec::with_capacity(start_row + height);
    rows.resize_with(start_row, Vec::new);

    for row in range.rows() {
        let mut cells = Vec::with_capacity(start_col + row.len());
        cells.resize(start_col, Cell::Empty);
        cells.extend(row.iter().map(convert_cell));
        rows.push(cells);
    }

    Table::new(rows)
}

fn convert_cell(data: &Data) -> Cell {
    match data {
        Data::Empty => Cell::Empty,
        Data::String(s) => {
            if s.is_empty() {
                Cell::Empty
            } else {
                Cell::Text(s.clone())
            }
        }
        Data::Float(n) => Cell::Number(*n),
        Data::Int(n) => Cell::Int(*n),
        Data::Bool(b) => Cell::Bool(*b),
        Data::Error(e) => Cell::Error(e.to_string()),
        // Dates keep their serial number, matching how they sort and sum.
        Data::DateTime(dt) => Cell::Number(dt.as_f64()),
        Data::DateTimeIso(s) | Data::DurationIso(s) => Cell::Text(s.clone()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_xlsxwriter::Workbook as XlsxWorkbook;

    fn workbook_bytes(build: impl FnOnce(&mut rust_xlsxwriter::Worksheet)) -> Vec<u8> {
        let mut workbook = XlsxWorkbook::new();
        let sheet = workbook.add_worksheet();
        build(sheet);
        workbook.save_to_buffer().unwrap()
    }

    #[test]
    fn reads_typed_cells_from_stream() {
        let bytes = workbook_bytes(|ws| {
            ws.write_string(0, 0, "Cuenta").unwrap();
            ws.write_string(1, 0, "400001234").unwrap();
            ws.write_number(1, 1, -12.5).unwrap();
            ws.write_boolean(1, 2, true).unwrap();
        });

        let table = import_from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(table.height(), 2);
        assert_eq!(table.get(0, 0), &Cell::Text("Cuenta".into()));
        assert_eq!(table.get(1, 0), &Cell::Text("400001234".into()));
        assert_eq!(table.get(1, 1), &Cell::Number(-12.5));
        assert_eq!(table.get(1, 2), &Cell::Bool(true));
        assert_eq!(table.get(5, 5), &Cell::Empty);
    }

    #[test]
    fn offset_ranges_keep_absolute_positions() {
        // Nothing in row 0-2 or column A: calamine's range starts at C4.
        let bytes = workbook_bytes(|ws| {
            ws.write_string(3, 2, "first").unwrap();
            ws.write_number(4, 3, 7.0).unwrap();
        });

        let table = import_from_reader(Cursor::new(bytes)).unwrap();
        assert_eq!(table.get(3, 2), &Cell::Text("first".into()));
        assert_eq!(table.get(4, 3), &Cell::Number(7.0));
        assert_eq!(table.get(0, 0), &Cell::Empty);
        assert_eq!(table.width(), 4);
    }

    #[test]
    fn reads_from_path() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("ledger.xlsx");
        let mut workbook = XlsxWorkbook::new();
        workbook.add_worksheet().write_string(0, 0, "x").unwrap();
        workbook.save(&path).unwrap();

        let table = import(&path).unwrap();
        assert_eq!(table.get(0, 0), &Cell::Text("x".into()));
    }

    #[test]
    fn garbage_bytes_fail() {
        let err = import_from_reader(Cursor::new(b"definitely not a workbook".to_vec())).unwrap_err();
        assert!(err.starts_with("Failed to open spreadsheet"), "{err}");
    }

    #[test]
    fn empty_stream_fails() {
        assert!(import_from_reader(std::io::empty()).is_err());
    }
}
