//! Spreadsheet-style column labels.
//!
//! Labels form a bijective base-26 numeral system: there is no zero digit, so
//! after "Z" comes "AA" and after "ZZ" comes "AAA".

const RADIX: usize = 26;

/// Label for a zero-based column index ("A", "B", ..., "Z", "AA", ...).
pub fn column_code(index: usize) -> String {
    // Find how many letters the label needs by skipping every block of
    // shorter labels (26 one-letter, 26^2 two-letter, ...).
    let mut digits = 1;
    let mut base = 0usize;
    let mut span = RADIX;
    while index - base >= span {
        base += span;
        span = span.saturating_mul(RADIX);
        digits += 1;
    }

    let mut remainder = index - base;
    let mut letters = vec![b'A'; digits];
    for slot in letters.iter_mut().rev() {
        *slot = b'A' + (remainder % RADIX) as u8;
        remainder /= RADIX;
    }
    letters.into_iter().map(char::from).collect()
}

/// Label for a page slot; placeholder slots have no index and no label.
pub fn slot_code(index: Option<usize>) -> String {
    index.map(column_code).unwrap_or_default()
}

/// Inverse of [`column_code`]. Case-insensitive; `None` for anything that is
/// not a run of ASCII letters.
pub fn parse_column_code(code: &str) -> Option<usize> {
    let code = code.trim();
    if code.is_empty() || !code.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    let mut value = 0usize;
    for byte in code.bytes() {
        let digit = usize::from(byte.to_ascii_uppercase() - b'A') + 1;
        value = value.checked_mul(RADIX)?.checked_add(digit)?;
    }
    Some(value - 1)
}
