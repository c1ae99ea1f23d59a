//! RGBA color with named-color parsing

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// 8-bit RGBA color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    #[serde(default = "opaque")]
    pub a: u8,
}

fn opaque() -> u8 {
    255
}

/// Names accepted by [`Color::from_str`]
const NAMED: &[(&str, Color)] = &[
    ("black", Color::BLACK),
    ("white", Color::WHITE),
    ("red", Color::RED),
    ("green", Color::GREEN),
    ("blue", Color::BLUE),
    ("yellow", Color::rgb(255, 255, 0)),
    ("orange", Color::rgb(255, 165, 0)),
    ("purple", Color::rgb(160, 32, 240)),
    ("pink", Color::rgb(255, 192, 203)),
    ("brown", Color::rgb(165, 42, 42)),
    ("cyan", Color::rgb(0, 255, 255)),
    ("magenta", Color::rgb(255, 0, 255)),
    ("gray", Color::rgb(190, 190, 190)),
    ("grey", Color::rgb(190, 190, 190)),
    ("darkgray", Color::rgb(169, 169, 169)),
    ("lightgray", Color::rgb(211, 211, 211)),
    ("navy", Color::rgb(0, 0, 128)),
    ("maroon", Color::rgb(176, 48, 96)),
    ("gold", Color::rgb(255, 215, 0)),
    ("lime", Color::rgb(50, 205, 50)),
    ("transparent", Color::TRANSPARENT),
];

impl Color {
    pub const BLACK: Color = Color::rgb(0, 0, 0);
    pub const WHITE: Color = Color::rgb(255, 255, 255);
    pub const RED: Color = Color::rgb(255, 0, 0);
    pub const GREEN: Color = Color::rgb(0, 255, 0);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    /// Fully transparent black (blits leave the destination alone)
    pub const TRANSPARENT: Color = Color::rgba(0, 0, 0, 0);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub fn to_bytes(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }

    pub fn from_bytes(bytes: [u8; 4]) -> Self {
        Self::rgba(bytes[0], bytes[1], bytes[2], bytes[3])
    }

    /// Source-over blend of `self` onto `dst`
    pub fn blend_over(self, dst: Color) -> Color {
        match self.a {
            255 => self,
            0 => dst,
            sa => {
                let sa = sa as u32;
                let da = dst.a as u32;
                // out_a = sa + da * (1 - sa), all in 0..=255 fixed point
                let out_a = sa + da * (255 - sa) / 255;
                if out_a == 0 {
                    return Color::TRANSPARENT;
                }
                let mix = |s: u8, d: u8| -> u8 {
                    let num = s as u32 * sa + d as u32 * da * (255 - sa) / 255;
                    (num / out_a).min(255) as u8
                };
                Color::rgba(
                    mix(self.r, dst.r),
                    mix(self.g, dst.g),
                    mix(self.b, dst.b),
                    out_a.min(255) as u8,
                )
            }
        }
    }
}

impl Default for Color {
    fn default() -> Self {
        Color::BLACK
    }
}

impl From<(u8, u8, u8)> for Color {
    fn from((r, g, b): (u8, u8, u8)) -> Self {
        Color::rgb(r, g, b)
    }
}

impl From<(u8, u8, u8, u8)> for Color {
    fn from((r, g, b, a): (u8, u8, u8, u8)) -> Self {
        Color::rgba(r, g, b, a)
    }
}

impl From<Color> for macroquad::color::Color {
    fn from(c: Color) -> Self {
        macroquad::color::Color::from_rgba(c.r, c.g, c.b, c.a)
    }
}

impl FromStr for Color {
    type Err = Error;

    /// Accepts a color name (`"red"`), `#rrggbb` or `#rrggbbaa`
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Some(hex) = trimmed.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(|| Error::invalid(format!("bad hex color '{}'", s)));
        }
        let wanted: String = trimmed
            .chars()
            .filter(|c| !c.is_whitespace())
            .flat_map(char::to_lowercase)
            .collect();
        NAMED
            .iter()
            .find(|(name, _)| *name == wanted)
            .map(|(_, color)| *color)
            .ok_or_else(|| Error::invalid(format!("unknown color name '{}'", s)))
    }
}

fn parse_hex(hex: &str) -> Option<Color> {
    if !hex.is_ascii() {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(hex.get(i..i + 2)?, 16).ok();
    match hex.len() {
        6 => Some(Color::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Color::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)?)),
        _ => None,
    }
}

impl fmt::Display for Color {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{:02x}{:02x}{:02x}{:02x}", self.r, self.g, self.b, self.a)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_named_colors() {
        assert_eq!("red".parse::<Color>().unwrap(), Color::RED);
        assert_eq!(" White ".parse::<Color>().unwrap(), Color::WHITE);
        assert_eq!("Light Gray".parse::<Color>().unwrap(), Color::rgb(211, 211, 211));
        assert!("reddish".parse::<Color>().is_err());
    }

    #[test]
    fn test_hex_colors() {
        assert_eq!("#ff8000".parse::<Color>().unwrap(), Color::rgb(255, 128, 0));
        assert_eq!("#00000080".parse::<Color>().unwrap(), Color::rgba(0, 0, 0, 128));
        assert!("#12345".parse::<Color>().is_err());
    }

    #[test]
    fn test_blend_over_extremes() {
        assert_eq!(Color::RED.blend_over(Color::BLUE), Color::RED);
        assert_eq!(Color::TRANSPARENT.blend_over(Color::BLUE), Color::BLUE);
    }

    #[test]
    fn test_blend_over_half() {
        let half_white = Color::rgba(255, 255, 255, 128);
        let out = half_white.blend_over(Color::BLACK);
        assert_eq!(out.a, 255);
        assert!(out.r > 120 && out.r < 136);
    }

    #[test]
    fn test_display_roundtrips_through_hex() {
        let c = Color::rgba(1, 2, 3, 4);
        assert_eq!(c.to_string().parse::<Color>().unwrap(), c);
    }
}
