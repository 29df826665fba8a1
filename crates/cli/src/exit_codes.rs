//! CLI Exit Code Registry
//!
//! This is the single source of truth for all CLI exit codes.
//! Exit codes are part of the shell contract — scripts rely on them.
//!
//! # Exit Code Ranges
//!
//! | Range   | Domain           | Description                              |
//! |---------|------------------|------------------------------------------|
//! | 0       | Universal        | Success                                  |
//! | 1       | Universal        | General error (unspecified)              |
//! | 2       | Universal        | CLI usage error (bad args, missing file) |
//! | 3-9     | compare          | Reconciliation-specific codes            |

// =============================================================================
// Universal (0-2)
// =============================================================================

/// Success - command completed without errors.
pub const EXIT_SUCCESS: u8 = 0;

/// General error - unspecified failure.
pub const EXIT_ERROR: u8 = 1;

/// Usage error - bad arguments, missing or unsupported input file.
pub const EXIT_USAGE: u8 = 2;

// =============================================================================
// Compare (3-9)
// =============================================================================

/// Differences above tolerance were found (only with `--fail-on-diff`).
pub const EXIT_COMPARE_DIFFS: u8 = 3;

/// Report could not be written (stdout or `--output` file).
pub const EXIT_COMPARE_OUTPUT: u8 = 4;

/// A ledger file could not be read as a spreadsheet.
pub const EXIT_COMPARE_INGEST: u8 = 5;
