//! Rendering a [`Color`] as text or as an integer.

use std::{fmt, str::FromStr};

use crate::{
    color::{Color, Component, HEXP},
    error::{Error, Result},
};

/// The text notations a color can be rendered in.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Notation {
    /// `rgb(r,g,b)`
    Rgb,
    /// `rgba(r,g,b,a)` with alpha as a 0-1 fraction.
    #[default]
    Rgba,
    /// `#rrggbb`, alpha is dropped.
    Hex,
    /// `hsl(h,s%,l%)`
    Hsl,
    /// `hsla(h,s%,l%,a)` with alpha as a 0-1 fraction.
    Hsla,
}

impl FromStr for Notation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "rgb" => Ok(Notation::Rgb),
            "rgba" => Ok(Notation::Rgba),
            "hex" | "hexadecimal" => Ok(Notation::Hex),
            "hsl" => Ok(Notation::Hsl),
            "hsla" => Ok(Notation::Hsla),
            _ => Err(Error::UnknownNotation(s.to_string())),
        }
    }
}

/// Render a number in its shortest form, optionally rounded to `fixed`
/// decimals first. Trailing zeros are never printed.
fn format_number(n: Component, fixed: Option<usize>) -> String {
    let n = match fixed {
        Some(decimals) => format!("{n:.decimals$}").parse().unwrap_or(n),
        None => n,
    };

    // Negative zero prints as "-0".
    if n == 0.0 {
        "0".to_string()
    } else {
        n.to_string()
    }
}

impl Color {
    /// Render the color in the given notation. With `fixed`, fractional
    /// numbers are rounded to that many decimals.
    /// ```rust
    /// use swatch::{Color, Notation};
    /// let c = Color::rgba(210, 105, 30, 128);
    /// assert_eq!(c.render(Notation::Rgb, None), "rgb(210,105,30)");
    /// assert_eq!(c.render(Notation::Hex, None), "#d2691e");
    /// assert_eq!(c.render(Notation::Hsla, Some(2)), "hsla(25,75%,47.06%,0.5)");
    /// ```
    pub fn render(&self, notation: Notation, fixed: Option<usize>) -> String {
        let fix = |n: Component| format_number(n, fixed);
        let alpha = self.alpha as Component / 255.0;
        let Color {
            red, green, blue, ..
        } = self;

        match notation {
            Notation::Rgb => format!("rgb({red},{green},{blue})"),
            Notation::Rgba => format!("rgba({red},{green},{blue},{})", fix(alpha)),
            Notation::Hex => format!("#{}", self.to_hex_number()),
            Notation::Hsl => format!(
                "hsl({},{}%,{}%)",
                fix(self.hue()),
                fix(self.saturation() * HEXP),
                fix(self.lightness() * HEXP)
            ),
            Notation::Hsla => format!(
                "hsla({},{}%,{}%,{})",
                fix(self.hue()),
                fix(self.saturation() * HEXP),
                fix(self.lightness() * HEXP),
                fix(alpha)
            ),
        }
    }

    /// Render the color in the given notation at full precision.
    pub fn to_string_as(&self, notation: Notation) -> String {
        self.render(notation, None)
    }

    /// The red, green and blue channels as six lowercase hexadecimal digits,
    /// without a leading `#`.
    pub fn to_hex_number(&self) -> String {
        format!("{:02x}{:02x}{:02x}", self.red, self.green, self.blue)
    }

    /// The red, green and blue channels packed as `0xRRGGBB`.
    pub fn to_integer(&self) -> u32 {
        (self.red as u32) << 16 | (self.green as u32) << 8 | self.blue as u32
    }
}

impl fmt::Display for Color {
    /// Renders `rgba()` notation. A precision (`{:.2}`) rounds the alpha.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.render(Notation::default(), f.precision()))
    }
}

impl From<Color> for u32 {
    fn from(value: Color) -> Self {
        value.to_integer()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rgb_notations() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(red.to_string_as(Notation::Rgb), "rgb(255,0,0)");
        assert_eq!(red.to_string_as(Notation::Rgba), "rgba(255,0,0,1)");

        let c = Color::rgba(1, 2, 3, 128);
        assert_eq!(c.to_string_as(Notation::Rgba), "rgba(1,2,3,0.5019607843137255)");
        assert_eq!(c.render(Notation::Rgba, Some(2)), "rgba(1,2,3,0.5)");
        assert_eq!(c.render(Notation::Rgba, Some(0)), "rgba(1,2,3,1)");
        assert_eq!(Color::rgba(1, 2, 3, 0).to_string_as(Notation::Rgba), "rgba(1,2,3,0)");
    }

    #[test]
    fn hex_notation() {
        assert_eq!(Color::rgb(1, 2, 3).to_string_as(Notation::Hex), "#010203");
        assert_eq!(Color::rgba(255, 255, 255, 0).to_string_as(Notation::Hex), "#ffffff");
        assert_eq!(Color::rgb(0x64, 0x95, 0xed).to_hex_number(), "6495ed");
    }

    #[test]
    fn hsl_notations() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(red.to_string_as(Notation::Hsl), "hsl(0,100%,50%)");
        assert_eq!(red.to_string_as(Notation::Hsla), "hsla(0,100%,50%,1)");

        let chocolate = Color::rgb(210, 105, 30);
        assert_eq!(chocolate.render(Notation::Hsl, Some(2)), "hsl(25,75%,47.06%)");
        assert_eq!(chocolate.render(Notation::Hsl, Some(0)), "hsl(25,75%,47%)");

        assert_eq!(Color::rgb(128, 128, 128).render(Notation::Hsl, Some(1)), "hsl(0,0%,50.2%)");
    }

    #[test]
    fn fixed_numbers_drop_trailing_zeros_and_signs() {
        assert_eq!(format_number(1.5, Some(3)), "1.5");
        assert_eq!(format_number(2.0, None), "2");
        assert_eq!(format_number(-0.0001, Some(2)), "0");
        assert_eq!(format_number(0.125, None), "0.125");
    }

    #[test]
    fn display_renders_rgba() {
        assert_eq!(Color::rgb(255, 0, 0).to_string(), "rgba(255,0,0,1)");
        assert_eq!(format!("{:.3}", Color::rgba(0, 0, 0, 128)), "rgba(0,0,0,0.502)");
    }

    #[test]
    fn integers() {
        assert_eq!(Color::rgb(0x12, 0x34, 0x56).to_integer(), 0x123456);
        assert_eq!(u32::from(Color::rgba(255, 255, 255, 0)), 0xffffff);
        assert_eq!(Color::from_integer(Color::rgb(9, 8, 7).to_integer()), Color::rgb(9, 8, 7));
    }

    #[test]
    fn notation_names() {
        assert_eq!("hex".parse::<Notation>(), Ok(Notation::Hex));
        assert_eq!("Hexadecimal".parse::<Notation>(), Ok(Notation::Hex));
        assert_eq!(" hsla ".parse::<Notation>(), Ok(Notation::Hsla));
        assert_eq!(
            "cmyk".parse::<Notation>(),
            Err(Error::UnknownNotation("cmyk".to_string()))
        );
        assert_eq!(Notation::default(), Notation::Rgba);
    }
}
