//! ABA routing number validation and slicing.
//!
//! A routing number is nine digits: an eight-digit DFI (Depository Financial
//! Institution) identifier followed by a check digit computed from a 3-7-1
//! weighted sum. The validator uses [`is_valid_routing_number`]; the record
//! layer uses the slicing helpers, which never validate and never panic so
//! the encoder keeps its garbage-in/garbage-out contract.

use crate::field::numeric;

/// Checksum weights applied to the nine digits, left to right.
const WEIGHTS: [u32; 9] = [3, 7, 1, 3, 7, 1, 3, 7, 1];

/// Number of digits in the DFI identifier prefix.
const DFI_DIGITS: usize = 8;

/// Returns `true` only if `value` is exactly nine ASCII digits whose 3-7-1
/// weighted sum is divisible by 10.
///
/// Anything else (wrong length, non-digits, non-ASCII numerals) is `false`.
/// Never panics.
pub fn is_valid_routing_number(value: &str) -> bool {
    if value.len() != 9 || !value.bytes().all(|b| b.is_ascii_digit()) {
        return false;
    }

    let sum: u32 = value
        .bytes()
        .zip(WEIGHTS)
        .map(|(b, weight)| weight * u32::from(b - b'0'))
        .sum();

    sum % 10 == 0
}

/// First eight characters of the routing number, zero-filled to eight.
///
/// For a valid routing number this is the DFI identifier; for malformed
/// input it still produces eight characters.
pub fn dfi_identifier(routing: &str) -> String {
    let prefix: String = routing.chars().take(DFI_DIGITS).collect();
    numeric(&prefix, DFI_DIGITS)
}

/// Ninth character of the routing number, `'0'` when absent.
pub fn check_digit(routing: &str) -> char {
    routing.chars().nth(DFI_DIGITS).unwrap_or('0')
}

/// The DFI identifier as an integer, for entry-hash accumulation.
///
/// Unparseable prefixes contribute zero rather than failing.
pub fn dfi_identifier_value(routing: &str) -> u64 {
    dfi_identifier(routing).parse().unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_routing_number() {
        assert!(is_valid_routing_number("021000021"));
        assert!(is_valid_routing_number("011401533"));
        assert!(is_valid_routing_number("091000019"));
    }

    #[test]
    fn test_rejects_bad_checksum() {
        assert!(!is_valid_routing_number("123456789"));
        assert!(!is_valid_routing_number("021000022"));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(!is_valid_routing_number("12345678"));
        assert!(!is_valid_routing_number("0210000211"));
        assert!(!is_valid_routing_number(""));
    }

    #[test]
    fn test_rejects_non_digits() {
        assert!(!is_valid_routing_number("02100002a"));
        assert!(!is_valid_routing_number("abcdefghi"));
        assert!(!is_valid_routing_number("02100 021"));
    }

    #[test]
    fn test_rejects_non_ascii_numerals() {
        // Arabic-Indic digits are numerals but not ASCII digits.
        assert!(!is_valid_routing_number("٠٢١٠٠٠٠٢١"));
    }

    #[test]
    fn test_dfi_identifier_takes_prefix() {
        assert_eq!(dfi_identifier("021000021"), "02100002");
    }

    #[test]
    fn test_dfi_identifier_zero_fills_short_input() {
        assert_eq!(dfi_identifier("123"), "00000123");
        assert_eq!(dfi_identifier(""), "00000000");
    }

    #[test]
    fn test_check_digit() {
        assert_eq!(check_digit("021000021"), '1');
        assert_eq!(check_digit("0210"), '0');
    }

    #[test]
    fn test_dfi_identifier_value() {
        assert_eq!(dfi_identifier_value("021000021"), 2_100_002);
        assert_eq!(dfi_identifier_value("999999992"), 99_999_999);
        assert_eq!(dfi_identifier_value("not09num"), 0);
    }
}
