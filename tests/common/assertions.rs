//! Domain-specific assertion helpers for pinseek harnesses.
//!
//! These add context-rich failure messages that make it clear *what*
//! lookup or rendering property was violated, with the offending block or
//! result set printed in full.

// ---------------------------------------------------------------------------
// Rendered block assertions
// ---------------------------------------------------------------------------

/// Assert that a rendered chat or document block contains `line` exactly.
///
/// ```rust
/// assert_has_line!(block, "📌 <b>Pincode:</b> 110001");
/// ```
#[macro_export]
macro_rules! assert_has_line {
    ($text:expr, $line:expr) => {{
        let text: &str = &$text;
        let line: &str = $line;
        if !text.lines().any(|l| l == line) {
            panic!(
                "assert_has_line! failed: line {:?} not found in block:\n{}",
                line, text
            );
        }
    }};
}

/// Assert that no line of a rendered block starts with `prefix`.
#[macro_export]
macro_rules! assert_no_line_starting {
    ($text:expr, $prefix:expr) => {{
        let text: &str = &$text;
        let prefix: &str = $prefix;
        if let Some(line) = text.lines().find(|l| l.starts_with(prefix)) {
            panic!(
                "assert_no_line_starting! failed: found {:?} in block:\n{}",
                line, text
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Search result assertions
// ---------------------------------------------------------------------------

/// Assert that search results are exactly the given offices, in order.
///
/// ```rust
/// assert_result_offices!(results, ["New Delhi GPO", "Sansad Marg HO"]);
/// ```
#[macro_export]
macro_rules! assert_result_offices {
    ($results:expr, $expected:expr) => {{
        let actual: Vec<&str> = $results.iter().map(|r| r.office.as_str()).collect();
        let expected: Vec<&str> = $expected.to_vec();
        if actual != expected {
            panic!(
                "assert_result_offices! failed:\n  expected: {:?}\n  actual:   {:?}",
                expected, actual
            );
        }
    }};
}

// ---------------------------------------------------------------------------
// Export assertions
// ---------------------------------------------------------------------------

/// Rendered export bytes must be non-empty and carry the PDF magic.
pub fn assert_is_pdf(bytes: &[u8]) {
    assert!(
        bytes.starts_with(b"%PDF"),
        "export does not start with the PDF magic; first bytes: {:?}",
        &bytes[..bytes.len().min(8)]
    );
}
