//! README generation
//!
//! The README is a fixed Markdown template with two placeholders:
//! `${colorTable}` receives the rendered color table and `${refsDefs}` the
//! swatch link-reference definitions.

pub mod table;
pub mod template;

pub use table::{render, ColorTable};

use crate::error::GenError;
use std::collections::HashMap;
use std::path::Path;

/// Placeholder names the template may use
pub const COLOR_TABLE: &str = "colorTable";
pub const REFS_DEFS: &str = "refsDefs";

/// Fill the README template text with a rendered color table
pub fn assemble(template_text: &str, rendered: &ColorTable) -> Result<String, GenError> {
    let values = HashMap::from([
        (COLOR_TABLE, rendered.table.as_str()),
        (REFS_DEFS, rendered.refs.as_str()),
    ]);
    template::substitute(template_text, &values)
}

/// Read the README template from disk
pub fn load_template(path: &Path) -> Result<String, GenError> {
    std::fs::read_to_string(path).map_err(|e| GenError::io(path, e))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_assemble() {
        let rendered = ColorTable {
            table: "| Element |\n|---------|".to_string(),
            refs: "[FFFFFF]: https://placehold.it/20/FFFFFF/?text=+".to_string(),
        };
        let out = assemble("# Colors\n\n${colorTable}\n\n${refsDefs}\n", &rendered).unwrap();
        assert_eq!(
            out,
            "# Colors\n\n| Element |\n|---------|\n\n[FFFFFF]: https://placehold.it/20/FFFFFF/?text=+\n"
        );
    }

    #[test]
    fn test_assemble_unknown_placeholder() {
        let rendered = ColorTable {
            table: String::new(),
            refs: String::new(),
        };
        assert!(assemble("${tokenTable}", &rendered).is_err());
    }

    #[test]
    fn test_load_template_missing() {
        let dir = tempfile::tempdir().unwrap();
        assert!(matches!(
            load_template(&dir.path().join("README.template.md")),
            Err(GenError::Io { .. })
        ));
    }
}
