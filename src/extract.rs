// Colors-block extraction for diffing generated themes
//
// Pulls the `"colors": { ... }` block out of a theme file, strips comments,
// drops blank lines and sorts what is left, so two theme versions can be
// compared with a plain line diff regardless of key order.

use crate::error::GenError;
use crate::manifest::comments;
use regex::Regex;
use std::path::{Path, PathBuf};
use std::sync::OnceLock;

fn colors_open() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r#""colors"\s*:\s*\{"#).expect("colors pattern is valid"))
}

/// Lines from the `"colors"` opener through the first line that closes a
/// brace block. Empty when there is no opener.
fn colors_range(text: &str) -> Vec<&str> {
    let mut lines = text.lines();
    let Some(first) = lines.by_ref().find(|l| colors_open().is_match(l)) else {
        return Vec::new();
    };

    let mut range = vec![first];
    for line in lines {
        range.push(line);
        if line.trim_start().starts_with('}') {
            break;
        }
    }
    range
}

/// Normalize a theme's colors block into sorted, comment-free lines
pub fn normalize_colors(text: &str) -> String {
    let block = colors_range(text).join("\n");
    let stripped = comments::strip(&block);

    let mut lines: Vec<&str> = stripped.lines().filter(|l| !l.trim().is_empty()).collect();
    lines.sort_unstable();

    let mut out = lines.join("\n");
    if !out.is_empty() {
        out.push('\n');
    }
    out
}

/// Append `.json` unless the destination already ends with it
pub fn json_destination(dest: &Path) -> PathBuf {
    match dest.extension() {
        Some(ext) if ext == "json" => dest.to_path_buf(),
        _ => {
            let mut name = dest.as_os_str().to_owned();
            name.push(".json");
            PathBuf::from(name)
        }
    }
}

/// Extract `source`'s colors block into `dest` (suffixed `.json`).
///
/// Returns the path actually written.
pub fn extract_colors(source: &Path, dest: &Path) -> Result<PathBuf, GenError> {
    let text = match std::fs::read_to_string(source) {
        Ok(text) if !text.trim().is_empty() => text,
        Ok(_) => {
            return Err(GenError::Shape {
                file: source.display().to_string(),
                message: "source theme file is empty".to_string(),
            })
        }
        Err(e) => return Err(GenError::io(source, e)),
    };

    let normalized = normalize_colors(&text);
    if normalized.is_empty() {
        tracing::warn!("No \"colors\" block found in {}", source.display());
    }

    let dest = json_destination(dest);
    crate::writer::write_atomic(&dest, &normalized)?;
    tracing::info!("Extracted colors from {} into {}", source.display(), dest.display());
    Ok(dest)
}

#[cfg(test)]
mod tests {
    use super::*;

    const THEME: &str = r##"{
    "name": "Generated",
    "type": "dark",
    "colors": {
        // editor
        "editor.foreground": "#d4d4d4",

        "editor.background": "#1e1e1e", // main
        "activityBar.background": "#333333"
    },
    "tokenColors": [
        { "scope": "comment" }
    ]
}
"##;

    #[test]
    fn test_normalize_colors_sorted_block() {
        let out = normalize_colors(THEME);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(
            lines,
            [
                "        \"activityBar.background\": \"#333333\"",
                "        \"editor.background\": \"#1e1e1e\",",
                "        \"editor.foreground\": \"#d4d4d4\",",
                "    \"colors\": {",
                "    },",
            ]
        );
        assert!(!out.contains("tokenColors"));
    }

    #[test]
    fn test_normalize_without_colors_block() {
        assert_eq!(normalize_colors("{\"name\": \"x\"}"), "");
    }

    #[test]
    fn test_json_destination() {
        assert_eq!(json_destination(Path::new("out")), PathBuf::from("out.json"));
        assert_eq!(json_destination(Path::new("out.json")), PathBuf::from("out.json"));
        assert_eq!(json_destination(Path::new("v1.2")), PathBuf::from("v1.2.json"));
    }

    #[test]
    fn test_extract_colors_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = dir.path().join("theme.json");
        std::fs::write(&source, THEME).unwrap();

        let written = extract_colors(&source, &dir.path().join("old")).unwrap();
        assert_eq!(written, dir.path().join("old.json"));
        let body = std::fs::read_to_string(&written).unwrap();
        assert!(body.starts_with("        \"activityBar.background\""));
    }

    #[test]
    fn test_extract_colors_missing_or_empty_source() {
        let dir = tempfile::tempdir().unwrap();
        let dest = dir.path().join("out");
        assert!(matches!(
            extract_colors(&dir.path().join("missing.json"), &dest),
            Err(GenError::Io { .. })
        ));

        let empty = dir.path().join("empty.json");
        std::fs::write(&empty, "  \n").unwrap();
        assert!(matches!(
            extract_colors(&empty, &dest),
            Err(GenError::Shape { .. })
        ));
        assert!(!dir.path().join("out.json").exists());
    }
}
