use crate::aggregate::{keep_first, sum_merge};
use crate::clean::{clean_amount, clean_text};
use crate::error::ReconError;
use crate::layout::{LedgerLayout, BALANCE_LAYOUT, DDP_LAYOUT};
use crate::model::{Cell, ProviderRecord, Table};
use crate::normalize::{normalize_balance_id, normalize_ddp_id};

/// Load the Balance export: Balance ids, first row per id wins.
pub fn load_balance_records(table: &Table) -> Result<Vec<ProviderRecord>, ReconError> {
    let rows = read_rows(table, &BALANCE_LAYOUT, normalize_balance_id)?;
    Ok(keep_first(rows))
}

/// Load the DDP export: DDP ids, rows per id summed.
pub fn load_ddp_records(table: &Table) -> Result<Vec<ProviderRecord>, ReconError> {
    let rows = read_rows(table, &DDP_LAYOUT, normalize_ddp_id)?;
    Ok(sum_merge(rows))
}

/// Clean every data row under `layout`, dropping rows without an id.
fn read_rows(
    table: &Table,
    layout: &LedgerLayout,
    normalize_id: fn(&Cell) -> Option<String>,
) -> Result<Vec<ProviderRecord>, ReconError> {
    let data_rows = table.height().saturating_sub(layout.header_rows);
    if data_rows == 0 {
        log::debug!("{}: no data rows below the header", layout.ledger);
        return Ok(Vec::new());
    }
    check_width(table, layout)?;

    let mut rows = Vec::with_capacity(data_rows);
    let mut dropped = 0usize;

    for row in layout.header_rows..table.height() {
        let Some(provider_id) = normalize_id(table.get(row, layout.id_column)) else {
            dropped += 1;
            continue;
        };
        rows.push(ProviderRecord {
            provider_id,
            provider_name: clean_text(table.get(row, layout.name_column)),
            amount: clean_amount(table.get(row, layout.amount_column)),
        });
    }

    log::debug!(
        "{}: read {data_rows} data row(s), dropped {dropped} without a provider id",
        layout.ledger
    );
    Ok(rows)
}

fn check_width(table: &Table, layout: &LedgerLayout) -> Result<(), ReconError> {
    let width = table.width();
    if width >= layout.required_width() {
        return Ok(());
    }
    let mut columns = [layout.id_column, layout.name_column, layout.amount_column];
    columns.sort_unstable();
    let missing = columns
        .into_iter()
        .find(|&c| c >= width)
        .unwrap_or(layout.amount_column);
    Err(ReconError::MissingColumn {
        ledger: layout.ledger,
        column: layout.column_label(missing),
        width,
    })
}
