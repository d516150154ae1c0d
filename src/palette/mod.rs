// Palette module - the color manifest and what is derived from it
//
// The color manifest has two parts:
// - groups: named swatches that feed one or more theme keys and, unless
//   hidden, a row in the README color table
// - individual: direct theme key -> hex assignments with no table presence
//
// Resolution into the flat theme palette lives in `resolve`.

mod resolve;

pub use resolve::{resolve, ThemeColors};

use crate::error::GenError;
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::path::Path;

/// One semantic swatch definition.
///
/// Text fields are optional at the serde level: whether they are required
/// depends on the consumer (the README table needs all four, the resolver
/// only needs `hex`).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ColorGroup {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub element: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hex: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub desc: Option<String>,

    #[serde(
        rename = "color-desc",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub color_desc: Option<String>,

    /// Usage sites listed after the description
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub examples: Vec<String>,

    /// Theme keys this group's hex populates
    #[serde(rename = "theme-colors", default, skip_serializing_if = "Vec::is_empty")]
    pub theme_colors: Vec<String>,

    /// Table visibility; any JSON value, judged by truthiness
    #[serde(default = "visible_by_default")]
    pub readme: Value,
}

fn visible_by_default() -> Value {
    Value::Bool(true)
}

/// Borrowed view of a group whose required text fields are all present
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CheckedGroup<'a> {
    pub element: &'a str,
    pub hex: &'a str,
    pub desc: &'a str,
    pub color_desc: &'a str,
    pub examples: &'a [String],
}

impl ColorGroup {
    /// Whether this group gets a row in the README table.
    ///
    /// Hidden only when `readme` is present and falsy (`false`, `null`, `0`,
    /// `""`, `[]`, `{}`).
    pub fn in_readme(&self) -> bool {
        is_truthy(&self.readme)
    }

    /// Check the fields the README table needs, in table column order.
    pub fn checked(&self) -> Result<CheckedGroup<'_>, GenError> {
        Ok(CheckedGroup {
            element: self.required("element", &self.element)?,
            hex: self.required("hex", &self.hex)?,
            desc: self.required("desc", &self.desc)?,
            color_desc: self.required("color-desc", &self.color_desc)?,
            examples: &self.examples,
        })
    }

    fn required<'a>(
        &self,
        field: &'static str,
        value: &'a Option<String>,
    ) -> Result<&'a str, GenError> {
        match value.as_deref() {
            Some(v) if !v.is_empty() => Ok(v),
            _ => Err(self.missing(field)),
        }
    }

    pub(crate) fn missing(&self, field: &'static str) -> GenError {
        GenError::MissingField {
            field,
            record: serde_json::to_string(self).unwrap_or_else(|_| format!("{:?}", self)),
        }
    }
}

/// The color manifest: ordered groups plus individual entries
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ColorManifest {
    #[serde(default)]
    pub groups: Vec<ColorGroup>,

    #[serde(default)]
    pub individual: IndexMap<String, String>,
}

impl ColorManifest {
    /// Load the color manifest from the properties directory
    pub fn load(dir: &Path, filename: &str) -> Result<Self, GenError> {
        let manifest: Self = crate::manifest::load_as(dir, filename)?;
        tracing::info!(
            "Color manifest {}: {} group(s), {} individual color(s)",
            filename,
            manifest.groups.len(),
            manifest.individual.len()
        );
        Ok(manifest)
    }

    /// Parse a color manifest from already comment-free JSON text
    #[cfg(test)]
    pub fn from_json(json: &str) -> Self {
        serde_json::from_str(json).expect("test manifest should parse")
    }
}

/// JSON truthiness, the way a dynamic language would judge it
fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(a) => !a.is_empty(),
        Value::Object(o) => !o.is_empty(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn group(value: Value) -> ColorGroup {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_readme_defaults_to_visible() {
        let g = group(json!({"element": "Background", "hex": "1e1e1e"}));
        assert!(g.in_readme());
    }

    #[test]
    fn test_readme_falsy_values_hide() {
        for hidden in [json!(false), json!(null), json!(0), json!(""), json!([])] {
            let g = group(json!({"element": "X", "readme": hidden}));
            assert!(!g.in_readme(), "readme {:?} should hide", g.readme);
        }
        assert!(group(json!({"readme": true})).in_readme());
        assert!(group(json!({"readme": "yes"})).in_readme());
    }

    #[test]
    fn test_checked_requires_fields_in_order() {
        let g = group(json!({"hex": "fff", "desc": "d", "color-desc": "white"}));
        match g.checked() {
            Err(GenError::MissingField { field, record }) => {
                assert_eq!(field, "element");
                assert!(record.contains("\"color-desc\":\"white\""));
            }
            other => panic!("expected missing element, got {:?}", other),
        }
    }

    #[test]
    fn test_checked_rejects_empty_values() {
        let g = group(json!({
            "element": "Cursor", "hex": "fff", "desc": "", "color-desc": "white"
        }));
        assert!(matches!(
            g.checked(),
            Err(GenError::MissingField { field: "desc", .. })
        ));
    }

    #[test]
    fn test_checked_ok() {
        let g = group(json!({
            "element": "Cursor", "hex": "#fff", "desc": "Caret", "color-desc": "white",
            "examples": ["editor"]
        }));
        let checked = g.checked().unwrap();
        assert_eq!(checked.element, "Cursor");
        assert_eq!(checked.color_desc, "white");
        assert_eq!(checked.examples, ["editor".to_string()]);
    }

    #[test]
    fn test_manifest_sections_optional() {
        let m = ColorManifest::from_json("{}");
        assert!(m.groups.is_empty());
        assert!(m.individual.is_empty());
    }

    #[test]
    fn test_individual_keeps_insertion_order() {
        let m = ColorManifest::from_json(r#"{"individual": {"z": "1", "a": "2", "m": "3"}}"#);
        let keys: Vec<_> = m.individual.keys().map(String::as_str).collect();
        assert_eq!(keys, ["z", "a", "m"]);
    }
}
