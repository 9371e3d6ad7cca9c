//! Input validation for student records
//!
//! Rules are checked in a fixed order and the first failure wins.

use thiserror::Error;

use super::record::Draft;

/// Minimum number of digits a phone number must contain
pub const MIN_PHONE_DIGITS: usize = 7;

/// Why a candidate record was rejected
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Name is required.")]
    MissingName,

    #[error("Enrollment number is required.")]
    MissingEnrollment,

    #[error("Courses are required.")]
    MissingCourses,

    #[error("Phone must have at least 7 digits.")]
    ShortPhone,
}

/// Validate the four raw input fields
pub fn validate(
    name: &str,
    enrollment: &str,
    courses: &str,
    phone: &str,
) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::MissingName);
    }
    if enrollment.trim().is_empty() {
        return Err(ValidationError::MissingEnrollment);
    }
    if courses.trim().is_empty() {
        return Err(ValidationError::MissingCourses);
    }
    // Formatting characters are ignored; only decimal digits count.
    let digits = phone.chars().filter(|&c| is_decimal_digit(c)).count();
    if digits < MIN_PHONE_DIGITS {
        return Err(ValidationError::ShortPhone);
    }
    Ok(())
}

/// Code point ranges of Unicode general category Nd (decimal digits)
#[rustfmt::skip]
const DECIMAL_DIGITS: &[(u32, u32)] = &[
    (0x0030, 0x0039), (0x0660, 0x0669), (0x06F0, 0x06F9), (0x07C0, 0x07C9),
    (0x0966, 0x096F), (0x09E6, 0x09EF), (0x0A66, 0x0A6F), (0x0AE6, 0x0AEF),
    (0x0B66, 0x0B6F), (0x0BE6, 0x0BEF), (0x0C66, 0x0C6F), (0x0CE6, 0x0CEF),
    (0x0D66, 0x0D6F), (0x0DE6, 0x0DEF), (0x0E50, 0x0E59), (0x0ED0, 0x0ED9),
    (0x0F20, 0x0F29), (0x1040, 0x1049), (0x1090, 0x1099), (0x17E0, 0x17E9),
    (0x1810, 0x1819), (0x1946, 0x194F), (0x19D0, 0x19D9), (0x1A80, 0x1A89),
    (0x1A90, 0x1A99), (0x1B50, 0x1B59), (0x1BB0, 0x1BB9), (0x1C40, 0x1C49),
    (0x1C50, 0x1C59), (0xA620, 0xA629), (0xA8D0, 0xA8D9), (0xA900, 0xA909),
    (0xA9D0, 0xA9D9), (0xA9F0, 0xA9F9), (0xAA50, 0xAA59), (0xABF0, 0xABF9),
    (0xFF10, 0xFF19), (0x104A0, 0x104A9), (0x10D30, 0x10D39), (0x11066, 0x1106F),
    (0x110F0, 0x110F9), (0x11136, 0x1113F), (0x111D0, 0x111D9), (0x112F0, 0x112F9),
    (0x11450, 0x11459), (0x114D0, 0x114D9), (0x11650, 0x11659), (0x116C0, 0x116C9),
    (0x11730, 0x11739), (0x118E0, 0x118E9), (0x11950, 0x11959), (0x11C50, 0x11C59),
    (0x11D50, 0x11D59), (0x11DA0, 0x11DA9), (0x11F50, 0x11F59), (0x16A60, 0x16A69),
    (0x16AC0, 0x16AC9), (0x16B50, 0x16B59), (0x1D7CE, 0x1D7FF), (0x1E140, 0x1E149),
    (0x1E2F0, 0x1E2F9), (0x1E4F0, 0x1E4F9), (0x1E950, 0x1E959), (0x1FBF0, 0x1FBF9),
];

/// True for any decimal digit in any script, false for other numerics
/// such as fractions, superscripts or Roman numerals
fn is_decimal_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    let cp = u32::from(c);
    DECIMAL_DIGITS
        .binary_search_by(|&(start, end)| {
            if end < cp {
                std::cmp::Ordering::Less
            } else if start > cp {
                std::cmp::Ordering::Greater
            } else {
                std::cmp::Ordering::Equal
            }
        })
        .is_ok()
}

/// Validate a draft
pub fn validate_draft(draft: &Draft<'_>) -> Result<(), ValidationError> {
    validate(draft.name, draft.enrollment, draft.courses, draft.phone)
}

/// Flag-and-reason form for front-ends that only show a message
///
/// Returns `(true, "")` when the input is accepted.
pub fn check(name: &str, enrollment: &str, courses: &str, phone: &str) -> (bool, String) {
    match validate(name, enrollment, courses, phone) {
        Ok(()) => (true, String::new()),
        Err(e) => (false, e.to_string()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accepts_valid_input() {
        assert_eq!(validate("Alice", "E100", "Math", "555-1234567"), Ok(()));
        assert_eq!(
            check("Alice", "E100", "Math", "555-1234567"),
            (true, String::new())
        );
    }

    #[test]
    fn test_reasons() {
        assert_eq!(
            check("  ", "E100", "Math", "5551234"),
            (false, "Name is required.".to_string())
        );
        assert_eq!(
            check("Alice", "", "Math", "5551234"),
            (false, "Enrollment number is required.".to_string())
        );
        assert_eq!(
            check("Alice", "E100", "\t", "5551234"),
            (false, "Courses are required.".to_string())
        );
        assert_eq!(
            check("Alice", "E100", "Math", "555-123"),
            (false, "Phone must have at least 7 digits.".to_string())
        );
    }

    #[test]
    fn test_first_failure_wins() {
        assert_eq!(validate("", "", "", ""), Err(ValidationError::MissingName));
        assert_eq!(
            validate("Alice", " ", "", "1"),
            Err(ValidationError::MissingEnrollment)
        );
        assert_eq!(
            validate("Alice", "E1", "", "1"),
            Err(ValidationError::MissingCourses)
        );
    }

    #[test]
    fn test_phone_ignores_formatting() {
        assert!(validate("A", "E", "C", "(555) 12-34").is_ok());
        assert!(validate("A", "E", "C", "+1 (55) 5-1").is_err());
        // exactly seven digits buried in punctuation
        assert!(validate("A", "E", "C", "--1-2-3-4-5-6-7--").is_ok());
    }

    #[test]
    fn test_phone_counts_decimal_digits_only() {
        // Arabic-Indic and fullwidth digits are decimal digits
        assert!(validate("A", "E", "C", "٠١٢٣٤٥٦").is_ok());
        assert!(validate("A", "E", "C", "０１２-３４５６").is_ok());

        // Fractions, Roman numerals and superscripts are numeric but not digits
        for phone in ["½½½½½½½", "ⅠⅡⅢⅣⅤⅥⅦ", "¹²³⁴⁵⁶⁷"] {
            assert_eq!(
                validate("A", "E", "C", phone),
                Err(ValidationError::ShortPhone),
                "{:?}",
                phone
            );
        }
        assert_eq!(
            validate("A", "E", "C", "555-12½Ⅳ"),
            Err(ValidationError::ShortPhone)
        );
    }

    #[test]
    fn test_is_decimal_digit() {
        for c in ['0', '9', '٠', '٩', '०', '９', '𝟎', '𝟿'] {
            assert!(is_decimal_digit(c), "{:?}", c);
        }
        for c in ['a', '½', 'Ⅳ', '²', '①', '/', '\u{1D7CD}'] {
            assert!(!is_decimal_digit(c), "{:?}", c);
        }
    }

    #[test]
    fn test_is_deterministic() {
        let first = check("Alice", "E100", "Math", "123");
        let second = check("Alice", "E100", "Math", "123");
        assert_eq!(first, second);
    }
}
