//! Luhn (mod 10) card-number validation.

use crate::error::{DrillError, Result};

/// Shortest card number accepted
pub const MIN_CARD_DIGITS: usize = 13;
/// Longest card number accepted
pub const MAX_CARD_DIGITS: usize = 19;

/// Strip `-` and space separators and check that only digits remain.
///
/// The digit count must be within [`MIN_CARD_DIGITS`]..=[`MAX_CARD_DIGITS`].
pub fn normalize_card_number(input: &str) -> Result<String> {
    let digits: String = input.chars().filter(|c| *c != '-' && *c != ' ').collect();

    if let Some(bad) = digits.chars().find(|c| !c.is_ascii_digit()) {
        return Err(DrillError::parse(format!(
            "card number may only contain digits, '-' and spaces, found '{}'",
            bad
        )));
    }

    if !(MIN_CARD_DIGITS..=MAX_CARD_DIGITS).contains(&digits.len()) {
        return Err(DrillError::validation(format!(
            "card number must have {}-{} digits, got {}",
            MIN_CARD_DIGITS,
            MAX_CARD_DIGITS,
            digits.len()
        )));
    }

    Ok(digits)
}

/// Luhn checksum over a string of ASCII digits.
///
/// Walking from the rightmost digit, every second digit is doubled and
/// reduced to its digit sum; the number is valid when the total is a
/// multiple of ten. Non-digit characters are ignored.
pub fn luhn_valid(digits: &str) -> bool {
    let total: u32 = digits
        .chars()
        .rev()
        .filter_map(|c| c.to_digit(10))
        .enumerate()
        .map(|(position, digit)| {
            if position % 2 == 1 {
                let doubled = digit * 2;
                if doubled >= 10 { doubled / 10 + doubled % 10 } else { doubled }
            } else {
                digit
            }
        })
        .sum();

    total % 10 == 0
}

/// Normalize a user-entered card number and run the Luhn check on it.
pub fn verify_card_number(input: &str) -> Result<bool> {
    let digits = normalize_card_number(input)?;
    let valid = luhn_valid(&digits);
    tracing::debug!(digits = digits.len(), valid, "luhn check");
    Ok(valid)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_known_card_numbers() {
        assert!(verify_card_number("4111-1111-4555-1142").unwrap());
        assert!(verify_card_number("4111-1111-1111-1111").unwrap());
        assert!(!verify_card_number("1234-5678-9012-3456").unwrap());
    }

    #[test]
    fn test_spaces_are_separators() {
        assert!(verify_card_number("4111 1111 1111 1111").unwrap());
    }

    #[test]
    fn test_luhn_doubling_reduces_digits() {
        // 7992739871 + check digit 3 is the textbook example
        assert!(luhn_valid("79927398713"));
        assert!(!luhn_valid("79927398710"));
    }

    #[test]
    fn test_rejects_letters() {
        assert!(matches!(verify_card_number("4111-1111-1111-111a"), Err(DrillError::Parse(_))));
    }

    #[test]
    fn test_rejects_wrong_length() {
        assert!(matches!(verify_card_number("4111"), Err(DrillError::Validation(_))));
        assert!(matches!(verify_card_number(""), Err(DrillError::Validation(_))));
        assert!(matches!(
            verify_card_number("41111111111111111111"),
            Err(DrillError::Validation(_))
        ));
    }
}
