//! Password strength validation

/// Minimum length counted the way the browser counts string length
pub const PASSWORD_MIN_LENGTH: usize = 8;

/// Symbols that satisfy the special-character requirement
pub const PASSWORD_SYMBOLS: &[char] = &['!', '@', '#', '$', '%', '^', '&', '*'];

/// Checks a password against the strength pattern
/// `^(?=.*[a-z])(?=.*[A-Z])(?=.*[0-9])(?=.*[!@#$%^&*])(?=.{8,})`.
///
/// Every lookahead is anchored at position 0 and `.` stops at a line
/// terminator, so only the first line of the value counts: it must hold a
/// lowercase letter, an uppercase letter, a digit and one of `!@#$%^&*`, and be
/// at least eight UTF-16 code units long.
pub fn is_password_strong(password: &str) -> bool {
    let line = first_line(password);

    let has_lower = line.chars().any(|c| c.is_ascii_lowercase());
    let has_upper = line.chars().any(|c| c.is_ascii_uppercase());
    let has_digit = line.chars().any(|c| c.is_ascii_digit());
    let has_symbol = line.chars().any(|c| PASSWORD_SYMBOLS.contains(&c));
    let long_enough = line.encode_utf16().count() >= PASSWORD_MIN_LENGTH;

    has_lower && has_upper && has_digit && has_symbol && long_enough
}

fn first_line(value: &str) -> &str {
    value
        .split(['\n', '\r', '\u{2028}', '\u{2029}'])
        .next()
        .unwrap_or(value)
}
