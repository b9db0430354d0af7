pub(super) const PLUS_SIGN: &str = "+";

/// A string consisting only of ASCII digits, the empty string included.
pub(super) const DIGITS_PATTERN: &str = "[0-9]*";
