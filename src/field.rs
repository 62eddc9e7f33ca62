//! Fixed-width field primitives for NACHA records.
//!
//! Every field in every record is emitted through exactly one of the two
//! functions here, which is what guarantees the 94-character record length.

/// Left-justified text field: truncated to `width` characters and
/// right-padded with spaces.
///
/// Operates on characters, not bytes, so multi-byte input still produces
/// exactly `width` characters.
pub fn alphameric(value: &str, width: usize) -> String {
    let mut field: String = value.chars().take(width).collect();
    let taken = value.chars().count().min(width);
    field.push_str(&" ".repeat(width - taken));
    field
}

/// Right-justified numeric field: left-padded with zeros to `width`.
///
/// When the value is longer than `width`, the low-order characters are kept,
/// matching the wire format's truncate-to-low-digits convention for
/// overflowing totals.
pub fn numeric(value: &str, width: usize) -> String {
    let len = value.chars().count();
    if len >= width {
        value.chars().skip(len - width).collect()
    } else {
        let mut field = "0".repeat(width - len);
        field.push_str(value);
        field
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_alphameric_pads_right() {
        assert_eq!(alphameric("ACME", 10), "ACME      ");
    }

    #[test]
    fn test_alphameric_truncates() {
        assert_eq!(alphameric("VENDOR PAYMENTS", 10), "VENDOR PAY");
    }

    #[test]
    fn test_alphameric_exact_width() {
        assert_eq!(alphameric("PAYROLL123", 10), "PAYROLL123");
    }

    #[test]
    fn test_alphameric_empty_value() {
        assert_eq!(alphameric("", 8), "        ");
    }

    #[test]
    fn test_alphameric_counts_characters_not_bytes() {
        let field = alphameric("Müller", 10);
        assert_eq!(field.chars().count(), 10);
        assert!(field.starts_with("Müller"));
    }

    #[test]
    fn test_numeric_pads_left() {
        assert_eq!(numeric("42", 7), "0000042");
    }

    #[test]
    fn test_numeric_keeps_low_order_digits() {
        assert_eq!(numeric("123456789012", 10), "3456789012");
    }

    #[test]
    fn test_numeric_exact_width() {
        assert_eq!(numeric("1234567890", 10), "1234567890");
    }

    #[test]
    fn test_numeric_empty_value() {
        assert_eq!(numeric("", 6), "000000");
    }

    #[test]
    fn test_zero_width() {
        assert_eq!(alphameric("anything", 0), "");
        assert_eq!(numeric("anything", 0), "");
    }
}
