use crate::geometry::Rect;
use anyhow::{Context, Result, ensure};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt::{Display, Formatter};
use std::str::FromStr;
use svg::node::element::Path;
use svg::node::element::path::Data;

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgDrawOptions {
    ///The theme to use for the svg
    #[serde(default)]
    pub theme: SvgLayoutTheme,
    ///Draw the outlines of the remaining free rectangles on top
    #[serde(default)]
    pub draw_free_rects: bool,
    ///Print the (1-based) item id in the center of each placed item
    #[serde(default = "default_label_items")]
    pub label_items: bool,
}

fn default_label_items() -> bool {
    true
}

impl Default for SvgDrawOptions {
    fn default() -> Self {
        Self {
            theme: SvgLayoutTheme::default(),
            draw_free_rects: false,
            label_items: true,
        }
    }
}

#[derive(Clone, PartialEq, Debug, Serialize, Deserialize, Copy)]
pub struct SvgLayoutTheme {
    pub stroke_width_multiplier: f32,
    pub bin_fill: Color,
    pub item_fill: Color,
    pub free_rect_stroke: Color,
}

impl Default for SvgLayoutTheme {
    fn default() -> Self {
        SvgLayoutTheme::EARTH_TONES
    }
}

impl SvgLayoutTheme {
    pub const EARTH_TONES: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.0,
        bin_fill: Color(0xCC, 0x82, 0x4A),
        item_fill: Color(0xFF, 0xC8, 0x79),
        free_rect_stroke: Color(0x00, 0xFF, 0x00), // LIME
    };

    pub const GRAY: SvgLayoutTheme = SvgLayoutTheme {
        stroke_width_multiplier: 2.5,
        bin_fill: Color(0xD3, 0xD3, 0xD3),
        item_fill: Color(0x7A, 0x7A, 0x7A),
        free_rect_stroke: Color(0xD0, 0x00, 0x00),
    };
}

pub fn change_brightness(color: Color, fraction: f32) -> Color {
    let Color(r, g, b) = color;

    let r = (r as f32 * fraction) as u8;
    let g = (g as f32 * fraction) as u8;
    let b = (b as f32 * fraction) as u8;
    Color(r, g, b)
}

#[derive(Copy, Clone, PartialEq, Debug)]
pub struct Color(u8, u8, u8);

impl Display for Color {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "#{:02X}{:02X}{:02X}", self.0, self.1, self.2)
    }
}

impl FromStr for Color {
    type Err = anyhow::Error;

    fn from_str(s: &str) -> Result<Self> {
        let hex = s.strip_prefix('#').unwrap_or(s);
        ensure!(
            hex.len() == 6 && hex.is_ascii(),
            "invalid color: {s:?}, expected #RRGGBB"
        );
        let channel = |i: usize| {
            u8::from_str_radix(&hex[i..i + 2], 16).with_context(|| format!("invalid color: {s:?}"))
        };
        Ok(Color(channel(0)?, channel(2)?, channel(4)?))
    }
}

impl Serialize for Color {
    fn serialize<S>(&self, serializer: S) -> Result<<S as Serializer>::Ok, <S as Serializer>::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&format!("{self}"))
    }
}

impl<'de> Deserialize<'de> for Color {
    fn deserialize<D>(deserializer: D) -> Result<Self, <D as Deserializer<'de>>::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Color::from_str(&s).map_err(serde::de::Error::custom)
    }
}

/// Path data of `rect` in svg coordinates, where the y-axis points down.
/// The bin's origin (bottom-left) ends up at `(0, bin_height)`.
pub fn rect_data(rect: Rect, bin_height: u64) -> Data {
    let flip = |y: u64| (bin_height - y) as f32;
    Data::new()
        .move_to((rect.x_min as f32, flip(rect.y_min)))
        .line_to((rect.x_max as f32, flip(rect.y_min)))
        .line_to((rect.x_max as f32, flip(rect.y_max)))
        .line_to((rect.x_min as f32, flip(rect.y_max)))
        .close()
}

pub fn data_to_path(data: Data, params: &[(&str, &str)]) -> Path {
    let mut path = Path::new();
    for param in params {
        path = path.set(param.0, param.1)
    }
    path.set("d", data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn color_round_trips_through_hex() {
        let color = Color::from_str("#CC824A").unwrap();
        assert_eq!(color, SvgLayoutTheme::EARTH_TONES.bin_fill);
        assert_eq!(color.to_string(), "#CC824A");
        assert_eq!(Color::from_str("cc824a").unwrap(), color);
    }

    #[test]
    fn invalid_colors_are_rejected() {
        assert!(Color::from_str("#CC824").is_err());
        assert!(Color::from_str("#GG824A").is_err());
    }

    #[test]
    fn brightness_scales_channels() {
        assert_eq!(
            change_brightness(Color(100, 50, 10), 0.5),
            Color(50, 25, 5)
        );
    }
}
