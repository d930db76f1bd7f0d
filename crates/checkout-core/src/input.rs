//! Input Formatting
//!
//! Keystroke-level helpers for the card form: the expiry separator heuristic
//! and the leading-digit brand detection used for the input adornment.

/// Apply the expiry masking heuristic to an incoming raw value.
///
/// When the stored value holds a single character and the incoming value
/// holds two (the user just typed the second month digit), a `/` separator
/// is appended, producing `"MM/"`. Every other edit (deletion, paste,
/// mid-string edits) passes through unchanged. Single-shot on purpose:
/// pasting `"12"` into an empty field does not get the separator.
pub fn format_expiry_input(current: &str, incoming: &str) -> String {
    if current.len() == 1 && incoming.len() == 2 {
        return format!("{incoming}/");
    }
    incoming.to_string()
}

/// Card brand shown next to the number input.
///
/// Purely presentational: detection looks at the leading digit only. No
/// Luhn check, no BIN table.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CardBrand {
    Visa,
    Mastercard,
}

impl CardBrand {
    /// Detect a brand from the current card-number value
    pub fn detect(number: &str) -> Option<Self> {
        if number.starts_with('5') {
            Some(Self::Mastercard)
        } else if number.starts_with('4') {
            Some(Self::Visa)
        } else {
            None
        }
    }

    /// Label for the brand badge
    pub fn label(self) -> &'static str {
        match self {
            Self::Visa => "VISA",
            Self::Mastercard => "Mastercard",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_second_month_digit_inserts_separator() {
        assert_eq!(format_expiry_input("1", "12"), "12/");
    }

    #[test]
    fn test_paste_does_not_insert_separator() {
        assert_eq!(format_expiry_input("", "12"), "12");
    }

    #[test]
    fn test_deletion_passes_through() {
        assert_eq!(format_expiry_input("12/", "12"), "12");
        assert_eq!(format_expiry_input("12", "1"), "1");
    }

    #[test]
    fn test_later_edits_pass_through() {
        assert_eq!(format_expiry_input("12/", "12/4"), "12/4");
        assert_eq!(format_expiry_input("12/4", "12/45"), "12/45");
    }

    #[test]
    fn test_brand_from_leading_digit() {
        assert_eq!(CardBrand::detect("4444 4444"), Some(CardBrand::Visa));
        assert_eq!(CardBrand::detect("5168"), Some(CardBrand::Mastercard));
        assert_eq!(CardBrand::detect("3782"), None);
        assert_eq!(CardBrand::detect(""), None);
    }
}
