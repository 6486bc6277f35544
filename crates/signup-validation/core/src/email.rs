//! Email syntax validation

use once_cell::sync::Lazy;
use regex::Regex;

/// Characters matched by `\s` in a browser regex
const WHITESPACE_CLASS: &str =
    r"\t\n\x0B\x0C\r \xA0\x{1680}\x{2000}-\x{200A}\x{2028}\x{2029}\x{202F}\x{205F}\x{3000}\x{FEFF}";

/// Characters matched by `.` in a browser regex (everything but line terminators)
const ANY_IN_LINE: &str = r"[^\n\r\x{2028}\x{2029}]";

// Email validation regex
//
// local-part: dot-separated atoms, or anything quoted
// domain: bracketed dotted quad, or hostname labels ending in a 2+ letter TLD
static EMAIL_REGEX: Lazy<Regex> = Lazy::new(|| {
    let atom = format!(r#"[^<>()\[\]\\.,;:{WHITESPACE_CLASS}@"]+"#);
    let pattern = format!(
        r#"^(({atom}(\.{atom})*)|("{ANY_IN_LINE}+"))@((\[[0-9]{{1,3}}\.[0-9]{{1,3}}\.[0-9]{{1,3}}\.[0-9]{{1,3}}\])|(([a-zA-Z\-0-9]+\.)+[a-zA-Z]{{2,}}))$"#
    );
    Regex::new(&pattern).unwrap()
});

/// Validates email syntax
///
/// Accepts `local@domain` where the local part is either a dot-separated
/// sequence of atoms (no `<>()[]\.,;:@"` or whitespace) or a quoted string,
/// and the domain is either an IPv4 literal like `[192.168.0.1]` or a
/// hostname ending in a top-level domain of at least two letters.
pub fn is_email_syntax_valid(email: &str) -> bool {
    EMAIL_REGEX.is_match(email)
}
