// File: crates/skycast-chart/src/color.rs
// Summary: CSS-style RGBA color parsing and conversion to Skia colors.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use skia_safe as skia;

use crate::error::{ChartError, ChartResult};

/// 8-bit RGB channels with a fractional alpha, as written in CSS.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Rgba = Rgba::rgb(255, 255, 255);

    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: f32) -> Self {
        Self { r, g, b, a }
    }

    /// Parse `#RGB`, `#RRGGBB`, `#RRGGBBAA`, `rgb(r,g,b)` or `rgba(r,g,b,a)`.
    pub fn parse(s: &str) -> ChartResult<Self> {
        let invalid = || ChartError::InvalidColor(s.to_string());
        let t = s.trim().to_ascii_lowercase();

        if let Some(hex) = t.strip_prefix('#') {
            return parse_hex(hex).ok_or_else(invalid);
        }

        let (body, want_alpha) = if let Some(rest) = t.strip_prefix("rgba(") {
            (rest, true)
        } else if let Some(rest) = t.strip_prefix("rgb(") {
            (rest, false)
        } else {
            return Err(invalid());
        };
        let body = body.strip_suffix(')').ok_or_else(invalid)?;
        let parts: Vec<&str> = body.split(',').map(str::trim).collect();
        match (parts.as_slice(), want_alpha) {
            ([r, g, b], false) => Ok(Self::rgb(
                r.parse().map_err(|_| invalid())?,
                g.parse().map_err(|_| invalid())?,
                b.parse().map_err(|_| invalid())?,
            )),
            ([r, g, b, a], true) => {
                let a: f32 = a.parse().map_err(|_| invalid())?;
                if !(0.0..=1.0).contains(&a) {
                    return Err(invalid());
                }
                Ok(Self::rgba(
                    r.parse().map_err(|_| invalid())?,
                    g.parse().map_err(|_| invalid())?,
                    b.parse().map_err(|_| invalid())?,
                    a,
                ))
            }
            _ => Err(invalid()),
        }
    }

    pub fn alpha_u8(&self) -> u8 {
        (self.a.clamp(0.0, 1.0) * 255.0).round() as u8
    }

    pub fn is_opaque(&self) -> bool {
        self.alpha_u8() == 255
    }

    pub fn to_skia(&self) -> skia::Color {
        skia::Color::from_argb(self.alpha_u8(), self.r, self.g, self.b)
    }

    /// Source-over composite onto an opaque background, in 8-bit channels.
    pub fn over(&self, bg: Rgba) -> [u8; 3] {
        let a = self.alpha_u8() as f32 / 255.0;
        let mix = |fg: u8, bg: u8| (fg as f32 * a + bg as f32 * (1.0 - a)).round() as u8;
        [mix(self.r, bg.r), mix(self.g, bg.g), mix(self.b, bg.b)]
    }
}

fn parse_hex(hex: &str) -> Option<Rgba> {
    if !hex.chars().all(|c| c.is_ascii_hexdigit()) {
        return None;
    }
    let byte = |i: usize| u8::from_str_radix(&hex[i..i + 2], 16).ok();
    match hex.len() {
        3 => {
            let nib = |i: usize| u8::from_str_radix(&hex[i..i + 1], 16).ok().map(|v| v * 17);
            Some(Rgba::rgb(nib(0)?, nib(1)?, nib(2)?))
        }
        6 => Some(Rgba::rgb(byte(0)?, byte(2)?, byte(4)?)),
        8 => Some(Rgba::rgba(byte(0)?, byte(2)?, byte(4)?, byte(6)? as f32 / 255.0)),
        _ => None,
    }
}

impl fmt::Display for Rgba {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_opaque() {
            write!(f, "#{:02X}{:02X}{:02X}", self.r, self.g, self.b)
        } else {
            write!(f, "rgba({},{},{},{})", self.r, self.g, self.b, self.a)
        }
    }
}

impl FromStr for Rgba {
    type Err = ChartError;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

impl TryFrom<String> for Rgba {
    type Error = ChartError;
    fn try_from(s: String) -> Result<Self, Self::Error> {
        Self::parse(&s)
    }
}

impl From<Rgba> for String {
    fn from(c: Rgba) -> Self {
        c.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_hex_forms() {
        assert_eq!(Rgba::parse("#29B6F6").unwrap(), Rgba::rgb(41, 182, 246));
        assert_eq!(Rgba::parse("#fff").unwrap(), Rgba::WHITE);
        let c = Rgba::parse("#29b6f680").unwrap();
        assert_eq!((c.r, c.g, c.b, c.alpha_u8()), (41, 182, 246, 128));
    }

    #[test]
    fn parses_functional_forms() {
        assert_eq!(Rgba::parse("rgba(41,182,246,0.3)").unwrap(), Rgba::rgba(41, 182, 246, 0.3));
        assert_eq!(Rgba::parse(" rgb( 1, 2, 3 ) ").unwrap(), Rgba::rgb(1, 2, 3));
    }

    #[test]
    fn rejects_malformed() {
        for bad in ["", "29B6F6", "#12345", "#zzzzzz", "rgb(1,2)", "rgba(1,2,3)", "rgba(1,2,3,1.5)", "rgb(300,0,0)", "hsl(1,2,3)"] {
            assert!(matches!(Rgba::parse(bad), Err(ChartError::InvalidColor(_))), "{bad}");
        }
    }

    #[test]
    fn displays_like_css() {
        assert_eq!(Rgba::rgb(41, 182, 246).to_string(), "#29B6F6");
        assert_eq!(Rgba::rgba(41, 182, 246, 0.3).to_string(), "rgba(41,182,246,0.3)");
    }

    #[test]
    fn composites_over_white() {
        let [r, g, b] = Rgba::rgba(41, 182, 246, 0.3).over(Rgba::WHITE);
        assert!((189..=192).contains(&r));
        assert!((231..=234).contains(&g));
        assert!((251..=253).contains(&b));
    }
}
