//! Shared utility functions

use unicode_width::UnicodeWidthStr;

/// Title-case a label: the first letter of every word is upper-cased, the
/// rest lower-cased.
///
/// A "word" starts at any letter that follows a non-letter, so hyphenated and
/// apostrophised labels get every part capitalised.
///
/// # Examples
///
/// ```ignore
/// assert_eq!(title_case("dark gray"), "Dark Gray");
/// assert_eq!(title_case("BLUE-green"), "Blue-Green");
/// ```
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut at_word_start = true;

    for c in s.chars() {
        if c.is_alphabetic() {
            if at_word_start {
                out.extend(c.to_uppercase());
            } else {
                out.extend(c.to_lowercase());
            }
            at_word_start = false;
        } else {
            out.push(c);
            at_word_start = true;
        }
    }

    out
}

/// Right-pad `s` with spaces to `width` terminal columns.
///
/// Strings already at or past `width` are returned unchanged.
pub fn pad_to_width(s: &str, width: usize) -> String {
    let current = s.width();
    if current >= width {
        return s.to_string();
    }
    let mut out = String::with_capacity(s.len() + width - current);
    out.push_str(s);
    out.extend(std::iter::repeat(' ').take(width - current));
    out
}
