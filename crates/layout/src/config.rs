use serde::{Deserialize, Serialize};

/// Geometry and typography constants for laying out text on a page.
///
/// All lengths are in points.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase", deny_unknown_fields)]
pub struct LayoutConfig {
    /// Baseline of the first line, measured from the bottom of the page.
    pub start_y: f32,
    /// X position of every line.
    pub margin_left: f32,
    /// Total horizontal margin; lines wrap at `page width - horizontal_margin`.
    pub horizontal_margin: f32,
    /// Line advance as a multiple of the font size.
    pub line_height_factor: f32,
    /// Extra space added after each block-level element.
    pub block_spacing: f32,
    /// Font size for text outside a sized heading.
    pub default_font_size: f32,
    pub heading_sizes: HeadingSizes,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct HeadingSizes {
    pub h1: f32,
    pub h2: f32,
    pub h3: f32,
}

impl Default for HeadingSizes {
    fn default() -> Self {
        Self {
            h1: 24.0,
            h2: 20.0,
            h3: 18.0,
        }
    }
}

impl Default for LayoutConfig {
    fn default() -> Self {
        Self {
            start_y: 800.0,
            margin_left: 50.0,
            horizontal_margin: 100.0,
            line_height_factor: 1.2,
            block_spacing: 10.0,
            default_font_size: 14.0,
            heading_sizes: HeadingSizes::default(),
        }
    }
}

impl LayoutConfig {
    /// Font size for text whose nearest element ancestor has `tag`.
    pub fn font_size_for(&self, tag: &str) -> f32 {
        match tag.to_ascii_lowercase().as_str() {
            "h1" => self.heading_sizes.h1,
            "h2" => self.heading_sizes.h2,
            "h3" => self.heading_sizes.h3,
            _ => self.default_font_size,
        }
    }

    pub fn line_height(&self, font_size: f32) -> f32 {
        font_size * self.line_height_factor
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_font_sizes_by_tag() {
        let config = LayoutConfig::default();
        assert_eq!(config.font_size_for("h1"), 24.0);
        assert_eq!(config.font_size_for("H2"), 20.0);
        assert_eq!(config.font_size_for("h3"), 18.0);
        assert_eq!(config.font_size_for("h4"), 14.0);
        assert_eq!(config.font_size_for("p"), 14.0);
        assert_eq!(config.font_size_for("span"), 14.0);
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config: LayoutConfig =
            serde_json::from_str(r#"{"blockSpacing": 4, "headingSizes": {"h1": 30}}"#).unwrap();
        assert_eq!(config.block_spacing, 4.0);
        assert_eq!(config.heading_sizes.h1, 30.0);
        assert_eq!(config.heading_sizes.h2, 20.0);
        assert_eq!(config.start_y, 800.0);
    }

    #[test]
    fn test_unknown_fields_rejected() {
        assert!(serde_json::from_str::<LayoutConfig>(r#"{"lineSpacing": 2}"#).is_err());
    }
}
