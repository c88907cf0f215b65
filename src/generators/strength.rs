use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

use crate::models::{CharacterClass, StrengthTier};

/// Passwords at least this long satisfy the length criterion.
pub const STRONG_LENGTH: usize = 12;

/// Outcome of the five strength criteria for one password.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, ToSchema)]
pub struct StrengthReport {
    pub long_enough: bool,
    pub has_digit: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_symbol: bool,
    /// Number of satisfied criteria, 0 to 5
    pub score: u8,
    pub tier: StrengthTier,
    /// One suggestion per unmet criterion
    pub feedback: Vec<String>,
}

/// Maps a criteria count to its tier: all five is Strong, three or four Medium, the rest Weak.
pub fn tier_for_score(score: u8) -> StrengthTier {
    match score {
        0..=2 => StrengthTier::Weak,
        3 | 4 => StrengthTier::Medium,
        _ => StrengthTier::Strong,
    }
}

/// First code point of every run of ten decimal digits (general category Nd).
const DECIMAL_DIGIT_ZEROS: &[u32] = &[
    0x0030, 0x0660, 0x06F0, 0x07C0, 0x0966, 0x09E6, 0x0A66, 0x0AE6, 0x0B66, 0x0BE6, 0x0C66,
    0x0CE6, 0x0D66, 0x0DE6, 0x0E50, 0x0ED0, 0x0F20, 0x1040, 0x1090, 0x17E0, 0x1810, 0x1946,
    0x19D0, 0x1A80, 0x1A90, 0x1B50, 0x1BB0, 0x1C40, 0x1C50, 0xA620, 0xA8D0, 0xA900, 0xA9D0,
    0xA9F0, 0xAA50, 0xABF0, 0xFF10, 0x104A0, 0x10D30, 0x11066, 0x110F0, 0x11136, 0x111D0,
    0x112F0, 0x11450, 0x114D0, 0x11650, 0x116C0, 0x11730, 0x118E0, 0x11950, 0x11C50, 0x11D50,
    0x11DA0, 0x11F50, 0x16A60, 0x16AC0, 0x16B50, 0x1D7CE, 0x1D7D8, 0x1D7E2, 0x1D7EC, 0x1D7F6,
    0x1E140, 0x1E2F0, 0x1E4F0, 0x1E950, 0x1FBF0,
];

/// Code points with numeric type Digit: superscripts, subscripts, circled and similar forms.
const OTHER_DIGITS: &[(u32, u32)] = &[
    (0x00B2, 0x00B3),
    (0x00B9, 0x00B9),
    (0x1369, 0x1371),
    (0x19DA, 0x19DA),
    (0x2070, 0x2070),
    (0x2074, 0x2079),
    (0x2080, 0x2089),
    (0x2460, 0x2468),
    (0x2474, 0x247C),
    (0x2488, 0x2490),
    (0x24EA, 0x24EA),
    (0x24F5, 0x24FD),
    (0x24FF, 0x24FF),
    (0x2776, 0x277E),
    (0x2780, 0x2788),
    (0x278A, 0x2792),
    (0x10A40, 0x10A43),
    (0x10E60, 0x10E68),
    (0x11052, 0x1105A),
    (0x1F100, 0x1F10A),
];

/// True for characters whose numeric type is Decimal or Digit.
///
/// Other number characters such as vulgar fractions and Roman numerals do not count.
pub fn is_digit(c: char) -> bool {
    if c.is_ascii_digit() {
        return true;
    }
    if c.is_ascii() || !c.is_numeric() {
        return false;
    }

    let cp = c as u32;
    DECIMAL_DIGIT_ZEROS
        .iter()
        .any(|&zero| (zero..zero + 10).contains(&cp))
        || OTHER_DIGITS
            .iter()
            .any(|&(start, end)| (start..=end).contains(&cp))
}

pub fn analyze(password: &str) -> StrengthReport {
    let long_enough = password.chars().count() >= STRONG_LENGTH;
    let has_digit = password.chars().any(is_digit);
    let has_uppercase = password.chars().any(char::is_uppercase);
    let has_lowercase = password.chars().any(char::is_lowercase);
    let has_symbol = password
        .chars()
        .any(|c| CharacterClass::Symbol.contains(c));

    let score = [long_enough, has_digit, has_uppercase, has_lowercase, has_symbol]
        .iter()
        .filter(|met| **met)
        .count() as u8;

    let mut feedback = Vec::new();
    if !long_enough {
        feedback.push(format!(
            "Increase password length to at least {} characters",
            STRONG_LENGTH
        ));
    }
    if !has_digit {
        feedback.push("Add numbers for better security".to_string());
    }
    if !has_uppercase {
        feedback.push("Add uppercase letters for better security".to_string());
    }
    if !has_lowercase {
        feedback.push("Add lowercase letters for better security".to_string());
    }
    if !has_symbol {
        feedback.push("Add symbols for better security".to_string());
    }

    StrengthReport {
        long_enough,
        has_digit,
        has_uppercase,
        has_lowercase,
        has_symbol,
        score,
        tier: tier_for_score(score),
        feedback,
    }
}

pub fn classify(password: &str) -> StrengthTier {
    analyze(password).tier
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn all_five_criteria_is_strong() {
        assert_eq!(classify("Abcdefgh123!"), StrengthTier::Strong);
    }

    #[test]
    fn three_or_four_criteria_is_medium() {
        // short, digit, upper, lower, symbol
        assert_eq!(classify("Abc1!"), StrengthTier::Medium);
        // long, upper, lower; no digit or symbol
        assert_eq!(classify("Abcdefghijklm"), StrengthTier::Medium);
        // short, digit, upper, lower
        assert_eq!(classify("Abc123"), StrengthTier::Medium);
    }

    #[test]
    fn two_or_fewer_criteria_is_weak() {
        assert_eq!(classify(""), StrengthTier::Weak);
        assert_eq!(classify("abcdef"), StrengthTier::Weak);
        assert_eq!(classify("12345678"), StrengthTier::Weak);
        // long and digits only
        assert_eq!(classify("123456789012"), StrengthTier::Weak);
    }

    #[test]
    fn symbols_outside_the_alphabet_do_not_count() {
        let report = analyze("Abcdefgh123€");
        assert!(!report.has_symbol);
        assert_eq!(report.tier, StrengthTier::Medium);
    }

    #[test]
    fn length_counts_characters_not_bytes() {
        // 11 characters, more than 12 bytes
        let report = analyze("Ääääääääää1");
        assert!(!report.long_enough);
    }

    #[test]
    fn report_lists_unmet_criteria() {
        let report = analyze("abc");
        assert_eq!(report.score, 1);
        assert_eq!(report.feedback.len(), 4);
        assert!(report.feedback.iter().any(|f| f.contains("symbols")));

        let strong = analyze("Abcdefgh123!");
        assert_eq!(strong.score, 5);
        assert!(strong.feedback.is_empty());
    }

    #[test]
    fn adding_a_criterion_never_lowers_the_tier() {
        let pairs = [
            ("abcdefgh", "abcdefg1"),
            ("abcdefg1", "Abcdefg1"),
            ("Abcdefg1", "Abcdef!1"),
            ("Abcdef!1", "Abcdef!1xyzw"),
            ("ABCDEFGHIJKL", "ABCDEFGHIJK!"),
        ];
        for (before, after) in pairs {
            let a = analyze(before);
            let b = analyze(after);
            assert_eq!(b.score, a.score + 1, "{} -> {}", before, after);
            assert!(b.tier >= a.tier, "{} -> {}", before, after);
        }
    }

    #[test]
    fn digit_check_accepts_decimal_and_digit_forms_only() {
        for c in ['0', '9', '٣', '²', '₇', '①', '𝟘'] {
            assert!(is_digit(c), "{:?} should count as a digit", c);
        }
        for c in ['½', 'Ⅻ', '¼', '〇', 'a', '!'] {
            assert!(!is_digit(c), "{:?} should not count as a digit", c);
        }
    }

    #[test]
    fn fractions_and_roman_numerals_are_not_digits() {
        let fraction = analyze("abcdefghijk½");
        assert!(!fraction.has_digit);
        assert_eq!(fraction.tier, StrengthTier::Weak);

        // Roman numerals are uppercase letters, but not digits.
        let roman = analyze("abcdefghijkⅫ");
        assert!(!roman.has_digit);
        assert!(roman.has_uppercase);
        assert_eq!(roman.tier, StrengthTier::Medium);

        let superscript = analyze("Abcdefghijk²");
        assert!(superscript.has_digit);
        assert_eq!(superscript.tier, StrengthTier::Medium);
    }

    #[test]
    fn tier_boundaries() {
        assert_eq!(tier_for_score(0), StrengthTier::Weak);
        assert_eq!(tier_for_score(2), StrengthTier::Weak);
        assert_eq!(tier_for_score(3), StrengthTier::Medium);
        assert_eq!(tier_for_score(4), StrengthTier::Medium);
        assert_eq!(tier_for_score(5), StrengthTier::Strong);
    }
}
