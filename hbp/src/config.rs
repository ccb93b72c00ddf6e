use rectpack::io::svg::SvgDrawOptions;
use serde::{Deserialize, Serialize};

/// Configuration for the heuristic bin packing optimizer
#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq)]
pub struct HBPConfig {
    /// Run the guillotine and maximal rectangles strategies concurrently
    #[serde(default)]
    pub parallel: bool,
    /// Write an SVG per used bin of the chosen solution
    #[serde(default = "default_true")]
    pub svg_export: bool,
    /// Optional SVG drawing options
    #[serde(default)]
    pub svg_draw_options: SvgDrawOptions,
    /// Also write the plain `id bin x y rotated` placement listing
    #[serde(default = "default_true")]
    pub text_output: bool,
}

fn default_true() -> bool {
    true
}

impl Default for HBPConfig {
    fn default() -> Self {
        Self {
            parallel: false,
            svg_export: true,
            svg_draw_options: SvgDrawOptions::default(),
            text_output: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rectpack::io::svg::SvgLayoutTheme;

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let config: HBPConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, HBPConfig::default());
    }

    #[test]
    fn gray_theme_can_be_configured() {
        let json = r##"{
            "parallel": true,
            "svg_draw_options": {
                "theme": {
                    "stroke_width_multiplier": 2.5,
                    "bin_fill": "#D3D3D3",
                    "item_fill": "#7A7A7A",
                    "free_rect_stroke": "#D00000"
                },
                "draw_free_rects": true
            }
        }"##;
        let config: HBPConfig = serde_json::from_str(json).unwrap();
        assert!(config.parallel);
        assert!(config.svg_draw_options.draw_free_rects);
        assert!(config.svg_draw_options.label_items);
        assert_eq!(config.svg_draw_options.theme, SvgLayoutTheme::GRAY);

        let round_trip: HBPConfig =
            serde_json::from_str(&serde_json::to_string(&config).unwrap()).unwrap();
        assert_eq!(round_trip, config);
    }
}
