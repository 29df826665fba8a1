//! Provider identifier normalization.
//!
//! Both ledgers encode the same provider code, degraded differently: Balance
//! exports drop leading zeros, DDP exports keep only a short suffix. Each
//! normalizer rebuilds the canonical 9-digit id from its own encoding.

use crate::model::Cell;

/// Canonical provider code base shared by both ledgers.
pub const BASE_PROVIDER_CODE: u32 = 400_000_000;

/// Width of a canonical provider id.
pub const BALANCE_ID_WIDTH: usize = 9;

/// Number of trailing digits a DDP provider number contributes.
pub const DDP_CODE_WIDTH: usize = 4;

/// DDP code 0 is reserved for "no supplier".
const DDP_RESERVED_CODE: u32 = 0;

/// DDP codes below this are shifted up out of the reserved range.
const DDP_SHORT_CODE_LIMIT: u32 = 1000;

/// Ordered ASCII digits of the cell's text, or `None` when there are none.
pub fn extract_digits(cell: &Cell) -> Option<String> {
    let text = cell.as_text()?;
    let digits: String = text.trim().chars().filter(|c| c.is_ascii_digit()).collect();
    if digits.is_empty() {
        None
    } else {
        Some(digits)
    }
}

/// Balance id: the digits left-padded with zeros to 9 characters.
pub fn normalize_balance_id(cell: &Cell) -> Option<String> {
    let digits = extract_digits(cell)?;
    Some(format!("{digits:0>width$}", width = BALANCE_ID_WIDTH))
}

/// DDP id: last 4 digits, coerced out of the reserved range into `1000..=9999`,
/// offset from [`BASE_PROVIDER_CODE`].
pub fn normalize_ddp_id(cell: &Cell) -> Option<String> {
    let digits = extract_digits(cell)?;
    let trimmed = &digits[digits.len().saturating_sub(DDP_CODE_WIDTH)..];
    // At most 4 ASCII digits, always fits.
    let mut code: u32 = trimmed.parse().unwrap_or(DDP_RESERVED_CODE);
    if code == DDP_RESERVED_CODE {
        code = 1;
    }
    if code < DDP_SHORT_CODE_LIMIT {
        code += DDP_SHORT_CODE_LIMIT;
    }
    Some(format!("{:0>width$}", BASE_PROVIDER_CODE + code, width = BALANCE_ID_WIDTH))
}
