//! Shared string-casing utilities for code generation.

/// Title-case a string: the first letter of every run of letters is
/// upper-cased and the rest of the run is lower-cased. Any non-letter
/// character starts a new word (e.g. "hello2world" -> "Hello2World").
pub fn to_title_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len());
    let mut prev_is_letter = false;
    for c in s.chars() {
        if prev_is_letter {
            result.extend(c.to_lowercase());
        } else {
            result.extend(c.to_uppercase());
        }
        prev_is_letter = c.is_alphabetic();
    }
    result
}

/// Convert a space-separated phrase to UpperCamelCase
/// (e.g. "motor driver" -> "MotorDriver").
pub fn to_upper_camel_case(s: &str) -> String {
    to_title_case(s).replace(' ', "")
}

/// Convert a space-separated phrase to lowerCamelCase
/// (e.g. "motor speed" -> "motorSpeed").
///
/// Returns an empty string when the input contains nothing but spaces;
/// callers that need an identifier must reject that themselves.
pub fn to_lower_camel_case(s: &str) -> String {
    let pascal = to_upper_camel_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        None => String::new(),
        Some(c) => c.to_lowercase().chain(chars).collect(),
    }
}
