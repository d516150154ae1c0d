// Theme color resolution
//
// Flattens the color manifest into theme key -> "#hex". Precedence is an
// explicit ordered merge: group assignments in manifest order form the first
// layer, individual entries the second. Later assignments win; a key that is
// reassigned keeps the position of its first assignment.

use super::ColorManifest;
use crate::error::GenError;
use indexmap::IndexMap;
use serde::Serialize;

/// Flat, ordered mapping of theme key to `#RRGGBB` color
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct ThemeColors(IndexMap<String, String>);

impl ThemeColors {
    pub fn new() -> Self {
        Self::default()
    }

    /// Assign a color, returning the value it replaced
    pub fn assign(&mut self, key: impl Into<String>, color: impl Into<String>) -> Option<String> {
        self.0.insert(key.into(), color.into())
    }

    #[cfg(test)]
    pub fn get(&self, key: &str) -> Option<&str> {
        self.0.get(key).map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    #[cfg(test)]
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.0.keys().map(String::as_str)
    }
}

/// Merge assignment layers in order; later layers (and later entries within a
/// layer) overwrite earlier ones.
pub fn merge_layers<L, K, V>(layers: impl IntoIterator<Item = L>) -> ThemeColors
where
    L: IntoIterator<Item = (K, V)>,
    K: Into<String>,
    V: Into<String>,
{
    let mut colors = ThemeColors::new();
    for layer in layers {
        for (key, color) in layer {
            let key = key.into();
            let color = color.into();
            if let Some(previous) = colors.assign(key.clone(), color.clone()) {
                if previous != color {
                    tracing::debug!("{}: {} overridden by {}", key, previous, color);
                }
            }
        }
    }
    colors
}

/// Prefix a manifest hex code with `#`. Case and digits pass through as-is.
fn theme_color(hex: &str) -> String {
    format!("#{}", hex.strip_prefix('#').unwrap_or(hex))
}

/// Resolve a color manifest into the theme's `colors` block.
///
/// A group that targets theme keys must carry a `hex`; nothing else about the
/// group is checked here.
pub fn resolve(manifest: &ColorManifest) -> Result<ThemeColors, GenError> {
    let mut from_groups = Vec::new();
    for group in &manifest.groups {
        if group.theme_colors.is_empty() {
            continue;
        }
        let hex = match group.hex.as_deref() {
            Some(hex) if !hex.is_empty() => hex,
            _ => return Err(group.missing("hex")),
        };
        let color = theme_color(hex);
        for key in &group.theme_colors {
            from_groups.push((key.clone(), color.clone()));
        }
    }

    let from_individual = manifest
        .individual
        .iter()
        .map(|(key, hex)| (key.clone(), theme_color(hex)))
        .collect::<Vec<_>>();

    let colors = merge_layers([from_groups, from_individual]);
    tracing::info!("Resolved {} theme color(s)", colors.len());
    Ok(colors)
}
