// CSV import for ledger exports saved as delimited text

use std::io::Read;
use std::path::Path;

use ledgercheck_recon::{Cell, Table};

pub fn import(path: &Path) -> Result<Table, String> {
    let content = read_file_as_utf8(path)?;
    import_from_string(&content)
}

pub fn import_from_string(content: &str) -> Result<Table, String> {
    let delimiter = sniff_delimiter(content);
    let mut reader = csv::ReaderBuilder::new()
        .delimiter(delimiter)
        .has_headers(false)
        .flexible(true)
        .from_reader(content.as_bytes());

    let mut rows = Vec::new();
    for result in reader.records() {
        let record = result.map_err(|e| e.to_string())?;
        rows.push(
            record
                .iter()
                .map(|field| {
                    if field.is_empty() {
                        Cell::Empty
                    } else {
                        Cell::Text(field.to_string())
                    }
                })
                .collect(),
        );
    }

    Ok(Table::new(rows))
}

/// Detect the most likely field delimiter by checking consistency across the first few lines.
///
/// For each candidate (tab, semicolon, comma, pipe), count fields per line. The delimiter
/// that produces the most consistent field count (>1 field) wins.
fn sniff_delimiter(content: &str) -> u8 {
    let candidates: &[u8] = &[b'\t', b';', b',', b'|'];
    let sample_lines: Vec<&str> = content
        .lines()
        .filter(|line| !line.trim().is_empty())
        .take(10)
        .collect();

    if sample_lines.is_empty() {
        return b',';
    }

    let mut best = b',';
    let mut best_score = 0u64;

    for &delim in candidates {
        let counts: Vec<usize> = sample_lines
            .iter()
            .map(|line| {
                csv::ReaderBuilder::new()
                    .delimiter(delim)
                    .has_headers(false)
                    .flexible(true)
                    .from_reader(line.as_bytes())
                    .records()
                    .next()
                    .and_then(|r| r.ok())
                    .map(|r| r.len())
                    .unwrap_or(1)
            })
            .collect();

        // Score by the most common field count; ledger exports carry title
        // lines above the header, so line 1 is not a reliable reference.
        let Some(target) = modal_count(&counts) else {
            continue;
        };
        let consistent = counts.iter().filter(|&&c| c == target).count() as u64;
        let score = consistent * target as u64;

        if score > best_score {
            best_score = score;
            best = delim;
        }
    }

    best
}

/// Most frequent field count above 1, larger counts winning ties.
fn modal_count(counts: &[usize]) -> Option<usize> {
    let mut best: Option<(usize, usize)> = None;
    for &c in counts.iter().filter(|&&c| c > 1) {
        let freq = counts.iter().filter(|&&x| x == c).count();
        if best.map_or(true, |(bc, bf)| freq > bf || (freq == bf && c > bc)) {
            best = Some((c, freq));
        }
    }
    best.map(|(c, _)| c)
}

/// Read file and convert to UTF-8 if needed (handles Windows-1252, Latin-1, etc.)
pub fn read_file_as_utf8(path: &Path) -> Result<String, String> {
    let mut file = std::fs::File::open(path).map_err(|e| e.to_string())?;
    let mut bytes = Vec::new();
    file.read_to_end(&mut bytes).map_err(|e| e.to_string())?;
    Ok(decode(bytes))
}

fn decode(bytes: Vec<u8>) -> String {
    // Try UTF-8 first; on failure, recover the buffer from the error
    match String::from_utf8(bytes) {
        Ok(s) => s,
        Err(e) => {
            let bytes = e.into_bytes();
            // Fall back to Windows-1252 (common for Excel-exported CSVs)
            let (decoded, _, _) = encoding_rs::WINDOWS_1252.decode(&bytes);
            decoded.into_owned()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn semicolon_export_with_title_rows() {
        let content = "\
Pagos a proveedores
Fecha;Proveedor;Numero;Importe
2026-01-31;Acme;2500;\"1,500.00\"
2026-01-31;;7;
";
        let table = import_from_string(content).unwrap();
        assert_eq!(table.height(), 4);
        assert_eq!(table.get(2, 1), &Cell::Text("Acme".into()));
        assert_eq!(table.get(2, 3), &Cell::Text("1,500.00".into()));
        assert_eq!(table.get(3, 1), &Cell::Empty);
        assert_eq!(table.get(3, 3), &Cell::Empty);
    }

    #[test]
    fn sniff_prefers_consistent_delimiter() {
        assert_eq!(sniff_delimiter("a,b,c\n1,2,3\n"), b',');
        assert_eq!(sniff_delimiter("a\tb\tc\n1\t2,5\t3\n"), b'\t');
        assert_eq!(sniff_delimiter("title\na;b;c\n1;2;3\n4;5;6\n"), b';');
    }

    #[test]
    fn windows_1252_fallback() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("ddp.csv");
        // "Peña" in Windows-1252
        fs::write(&path, b"x,Pe\xf1a,1,2\n").unwrap();

        let table = import(&path).unwrap();
        assert_eq!(table.get(0, 1), &Cell::Text("Peña".into()));
    }
}
