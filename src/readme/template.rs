// `$`-placeholder substitution for the README template
//
// Syntax:
// - `$$` is a literal `$`
// - `${name}` and `$name` are placeholders (name: [_A-Za-z][_A-Za-z0-9]*)
// - any other `$` is malformed
//
// Substitution is strict: every placeholder must be defined.

use crate::error::GenError;
use regex::{Captures, Regex};
use std::collections::HashMap;
use std::sync::OnceLock;

fn placeholder_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| {
        Regex::new(
            r"\$(?:(?P<escaped>\$)|(?P<named>[_A-Za-z][_A-Za-z0-9]*)|\{(?P<braced>[_A-Za-z][_A-Za-z0-9]*)\}|(?P<invalid>))",
        )
        .expect("placeholder pattern is valid")
    })
}

/// 1-based line and column of a byte offset
fn position(text: &str, offset: usize) -> (usize, usize) {
    let before = &text[..offset];
    let line = before.matches('\n').count() + 1;
    let line_start = before.rfind('\n').map_or(0, |i| i + 1);
    let column = text[line_start..offset].chars().count() + 1;
    (line, column)
}

/// Replace every placeholder in `template` with its value from `values`.
pub fn substitute(template: &str, values: &HashMap<&str, &str>) -> Result<String, GenError> {
    let mut failure: Option<GenError> = None;

    let result = placeholder_pattern().replace_all(template, |caps: &Captures<'_>| {
        if failure.is_some() {
            return String::new();
        }
        if caps.name("escaped").is_some() {
            return "$".to_string();
        }

        let name = caps.name("named").or_else(|| caps.name("braced"));
        let whole = caps.get(0).map_or(0, |m| m.start());
        let (line, column) = position(template, whole);

        match name {
            Some(name) => match values.get(name.as_str()) {
                Some(value) => value.to_string(),
                None => {
                    failure = Some(GenError::Template {
                        message: format!(
                            "undefined placeholder '{}' at line {}, column {}",
                            name.as_str(),
                            line,
                            column
                        ),
                    });
                    String::new()
                }
            },
            None => {
                failure = Some(GenError::Template {
                    message: format!("invalid placeholder at line {}, column {}", line, column),
                });
                String::new()
            }
        }
    });

    match failure {
        Some(err) => Err(err),
        None => Ok(result.into_owned()),
    }
}
