//! String predicates shared by every field

/// Whitespace as browsers define it for `String.prototype.trim` and the `\s`
/// regex class: the Unicode space separators plus tab, vertical tab, form feed,
/// line terminators and the byte order mark.
pub fn is_form_whitespace(c: char) -> bool {
    matches!(
        c,
        '\t' | '\n'
            | '\u{000B}'
            | '\u{000C}'
            | '\r'
            | ' '
            | '\u{00A0}'
            | '\u{1680}'
            | '\u{2000}'..='\u{200A}'
            | '\u{2028}'
            | '\u{2029}'
            | '\u{202F}'
            | '\u{205F}'
            | '\u{3000}'
            | '\u{FEFF}'
    )
}

/// Trims a raw input value the same way the browser does before validation
pub fn trim_value(raw: &str) -> &str {
    raw.trim_matches(is_form_whitespace)
}

/// A value is present unless it is the empty string
pub fn is_required(value: &str) -> bool {
    !value.is_empty()
}

/// Inclusive range check on a length
pub fn is_between(length: usize, min: usize, max: usize) -> bool {
    min <= length && length <= max
}
