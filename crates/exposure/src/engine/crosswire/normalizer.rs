/// Numbers with fewer digits than this are too short to compare reliably.
pub(crate) const MIN_PHONE_DIGITS: usize = 7;

/// Trailing digits kept so country-code and trunk-prefix variations still line up.
pub(crate) const PHONE_SUFFIX_DIGITS: usize = 10;

/// Strip everything but digits and keep the last ten. Returns `None` for short numbers.
pub(crate) fn normalize_phone(raw: &str) -> Option<String> {
    let digits: Vec<char> = raw.chars().filter(char::is_ascii_digit).collect();
    if digits.len() < MIN_PHONE_DIGITS {
        return None;
    }
    let start = digits.len().saturating_sub(PHONE_SUFFIX_DIGITS);
    Some(digits[start..].iter().collect())
}

pub(crate) fn fold(value: &str) -> String {
    value.trim().to_lowercase()
}
