//! Custom Test Assertions
//!
//! Provides assertion helpers for rendered batch files that give more
//! meaningful error messages than comparing whole payloads.

use domain_export::{Destination, Rendered};

/// Number of fixed lines before the first transaction row
pub fn preamble_lines(destination: Destination) -> usize {
    if destination.is_general_ledger() {
        3
    } else {
        1
    }
}

/// Returns the transaction rows of a rendered payload, without line endings
///
/// # Panics
///
/// Panics if the payload is not UTF-8
pub fn transaction_rows(rendered: &Rendered, destination: Destination) -> Vec<String> {
    let text = rendered.as_str().expect("rendered payload is not UTF-8");
    text.lines()
        .skip(preamble_lines(destination))
        .map(str::to_string)
        .collect()
}

/// Splits a row into its fields and strips the surrounding quotes
pub fn row_fields(row: &str) -> Vec<String> {
    row.split(',').map(|f| f.trim_matches('"').to_string()).collect()
}

/// Asserts the number of transaction rows in a rendered payload
pub fn assert_row_count(rendered: &Rendered, destination: Destination, expected: usize) {
    let rows = transaction_rows(rendered, destination);
    assert_eq!(
        rows.len(),
        expected,
        "Expected {} transaction rows for {}, got {}: {:?}",
        expected,
        destination,
        rows.len(),
        rows
    );
}

/// Asserts every line ends with `\n` and there is no trailing blank line
pub fn assert_well_terminated(rendered: &Rendered) {
    let text = rendered.as_str().expect("rendered payload is not UTF-8");
    assert!(text.ends_with('\n'), "Payload does not end with a newline");
    assert!(!text.ends_with("\n\n"), "Payload ends with a blank line");
    assert!(!text.contains('\r'), "Payload contains carriage returns");
}
