//! Option types for the mdast converter.

use serde::{Deserialize, Serialize};

/// Default heading colors (h1..h6), resolved through the palette.
pub const DEFAULT_HEADING_COLORS: [&str; 6] = [
    "#FF6F61", "#F8B400", "#4DB8FF", "#A3BE8C", "#B48EAD", "#5E81AC",
];

/// Returns the default hex color for a heading depth; depths outside 1..=6
/// use the h1 color.
pub fn default_heading_color(depth: u8) -> &'static str {
    match depth {
        1..=6 => DEFAULT_HEADING_COLORS[usize::from(depth) - 1],
        _ => DEFAULT_HEADING_COLORS[0],
    }
}

/// Per-level heading color overrides.
///
/// Values are palette names (`red`, `blue_background`, ...) or `#RRGGBB`
/// hex strings, which are mapped to the nearest palette color.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct HeadingColors {
    /// Color for `#` headings.
    #[serde(default)]
    pub h1: Option<String>,
    /// Color for `##` headings.
    #[serde(default)]
    pub h2: Option<String>,
    /// Color for `###` headings.
    #[serde(default)]
    pub h3: Option<String>,
    /// Color for `####` headings.
    #[serde(default)]
    pub h4: Option<String>,
    /// Color for `#####` headings.
    #[serde(default)]
    pub h5: Option<String>,
    /// Color for `######` headings.
    #[serde(default)]
    pub h6: Option<String>,
}

impl HeadingColors {
    /// The override for a heading depth. Empty strings count as unset.
    pub fn get(&self, depth: u8) -> Option<&str> {
        let color = match depth {
            1 => &self.h1,
            2 => &self.h2,
            3 => &self.h3,
            4 => &self.h4,
            5 => &self.h5,
            6 => &self.h6,
            _ => return None,
        };
        color.as_deref().filter(|color| !color.is_empty())
    }
}

/// What the inline-only conversion does with top-level nodes that are not paragraphs.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NonInline {
    /// Skip to the next node.
    #[default]
    Ignore,
    /// Fail with [`notionmark_core::NotionmarkError::UnsupportedElement`].
    Raise,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_heading_colors_lookup() {
        let colors = HeadingColors {
            h1: Some("red".to_string()),
            h2: Some(String::new()),
            ..Default::default()
        };
        assert_eq!(colors.get(1), Some("red"));
        assert_eq!(colors.get(2), None);
        assert_eq!(colors.get(3), None);
        assert_eq!(colors.get(7), None);
    }

    #[test]
    fn test_default_heading_color_bounds() {
        assert_eq!(default_heading_color(1), "#FF6F61");
        assert_eq!(default_heading_color(6), "#5E81AC");
        assert_eq!(default_heading_color(0), "#FF6F61");
        assert_eq!(default_heading_color(9), "#FF6F61");
    }

    #[test]
    fn test_non_inline_wire_names() {
        let policy: NonInline = serde_json::from_str(r#""raise""#).unwrap();
        assert_eq!(policy, NonInline::Raise);
        let policy: NonInline = serde_json::from_str(r#""ignore""#).unwrap();
        assert_eq!(policy, NonInline::Ignore);
    }
}
