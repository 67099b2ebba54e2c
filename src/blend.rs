//! Blend modes for compositing one color over another.
//!
//! Channel modes work on channels normalized to `0..=1` and scale the result
//! back to the channel domain. The modes that mix HSL components build the
//! result through [`Color::hsl`]. Every mode composites alpha with the
//! "over" operator: `a1 + (255 - a1) * a2 / 255`.

use std::{fmt, str::FromStr};

use bitflags::bitflags;

use crate::{
    color::{Color, Component},
    error::{Error, Result},
};

bitflags! {
    /// The HSL components a blend mode takes from the other color. The rest
    /// come from the receiver.
    #[derive(Clone, Copy, Debug, PartialEq, Eq)]
    pub struct HslPick : u8 {
        /// Take the hue from the other color.
        const HUE = 1 << 0;
        /// Take the HSL saturation from the other color.
        const SATURATION = 1 << 1;
        /// Take the lightness from the other color.
        const LIGHTNESS = 1 << 2;
    }
}

/// A blend mode for [`Color::blend`]: the CSS `<blend-mode>`s plus `add`,
/// `subtract`, `divide` and `linear-burn`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
#[allow(missing_docs)]
pub enum BlendMode {
    #[default]
    Normal,
    Multiply,
    Screen,
    Overlay,
    Darken,
    Lighten,
    ColorDodge,
    ColorBurn,
    HardLight,
    SoftLight,
    Difference,
    Exclusion,
    Hue,
    Saturation,
    Color,
    Luminosity,
    Add,
    Subtract,
    Divide,
    LinearBurn,
}

impl BlendMode {
    /// Every blend mode.
    pub const ALL: [BlendMode; 20] = [
        BlendMode::Normal,
        BlendMode::Multiply,
        BlendMode::Screen,
        BlendMode::Overlay,
        BlendMode::Darken,
        BlendMode::Lighten,
        BlendMode::ColorDodge,
        BlendMode::ColorBurn,
        BlendMode::HardLight,
        BlendMode::SoftLight,
        BlendMode::Difference,
        BlendMode::Exclusion,
        BlendMode::Hue,
        BlendMode::Saturation,
        BlendMode::Color,
        BlendMode::Luminosity,
        BlendMode::Add,
        BlendMode::Subtract,
        BlendMode::Divide,
        BlendMode::LinearBurn,
    ];

    /// The kebab-case name of the mode.
    pub fn name(&self) -> &'static str {
        match self {
            BlendMode::Normal => "normal",
            BlendMode::Multiply => "multiply",
            BlendMode::Screen => "screen",
            BlendMode::Overlay => "overlay",
            BlendMode::Darken => "darken",
            BlendMode::Lighten => "lighten",
            BlendMode::ColorDodge => "color-dodge",
            BlendMode::ColorBurn => "color-burn",
            BlendMode::HardLight => "hard-light",
            BlendMode::SoftLight => "soft-light",
            BlendMode::Difference => "difference",
            BlendMode::Exclusion => "exclusion",
            BlendMode::Hue => "hue",
            BlendMode::Saturation => "saturation",
            BlendMode::Color => "color",
            BlendMode::Luminosity => "luminosity",
            BlendMode::Add => "add",
            BlendMode::Subtract => "subtract",
            BlendMode::Divide => "divide",
            BlendMode::LinearBurn => "linear-burn",
        }
    }

    /// For modes that mix HSL components, which components come from the
    /// other color. `None` for channel modes.
    pub fn hsl_pick(&self) -> Option<HslPick> {
        match self {
            BlendMode::Hue => Some(HslPick::HUE),
            BlendMode::Saturation => Some(HslPick::SATURATION),
            BlendMode::Color => Some(HslPick::HUE | HslPick::SATURATION),
            BlendMode::Luminosity => Some(HslPick::LIGHTNESS),
            _ => None,
        }
    }

    /// Blend one normalized channel `a` of the receiver with the channel `b`
    /// of the other color, whose alpha is `coverage` (0-1).
    fn blend_channel(&self, a: Component, b: Component, coverage: Component) -> Component {
        match self {
            BlendMode::Multiply => a * b * coverage,
            BlendMode::Screen => 1.0 - (1.0 - a) * (1.0 - b),
            BlendMode::Overlay => overlay(a, b),
            BlendMode::Darken => a.min(b),
            BlendMode::Lighten => a.max(b),
            BlendMode::ColorDodge => a / (1.0 - b),
            BlendMode::ColorBurn => 1.0 - (1.0 - a) / b,
            BlendMode::HardLight => overlay(b, a),
            BlendMode::SoftLight => {
                if b <= 0.5 {
                    a - (1.0 - 2.0 * b) * a * (1.0 - a)
                } else {
                    let g = if a <= 0.25 {
                        ((16.0 * a - 12.0) * a + 4.0) * a
                    } else {
                        a.sqrt()
                    };
                    a + (2.0 * b - 1.0) * (g - a)
                }
            }
            BlendMode::Difference => (a - b * coverage).abs(),
            BlendMode::Exclusion => a * b * (1.0 - a) * (1.0 - b),
            BlendMode::Add => a + b * coverage,
            BlendMode::Subtract => a - b * coverage,
            BlendMode::Divide => a / b * coverage,
            BlendMode::LinearBurn => a + b - 1.0,
            BlendMode::Normal
            | BlendMode::Hue
            | BlendMode::Saturation
            | BlendMode::Color
            | BlendMode::Luminosity => (coverage * (b - a) + a).abs(),
        }
    }
}

fn overlay(a: Component, b: Component) -> Component {
    if a < 0.5 {
        2.0 * a * b
    } else {
        1.0 - 2.0 * (1.0 - a) * (1.0 - b)
    }
}

impl fmt::Display for BlendMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for BlendMode {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        BlendMode::ALL
            .into_iter()
            .find(|mode| mode.name() == name)
            .ok_or_else(|| Error::UnknownBlendMode(s.to_string()))
    }
}

impl Color {
    /// Blend `other` into this color with the given mode and return the
    /// result.
    /// ```rust
    /// use swatch::{BlendMode, Color};
    /// let red = Color::rgba(255, 0, 0, 128);
    /// let blue = Color::rgb(0, 0, 255);
    /// assert_eq!(red.blend(&blue, BlendMode::Normal), Color::rgb(0, 0, 255));
    /// ```
    pub fn blend(&self, other: &Color, mode: BlendMode) -> Color {
        let alpha = self.alpha as Component
            + (255 - self.alpha) as Component * other.alpha as Component / 255.0;

        if let Some(pick) = mode.hsl_pick() {
            let take = |flag: HslPick, mine: Component, theirs: Component| {
                if pick.contains(flag) {
                    theirs
                } else {
                    mine
                }
            };

            return Color::hsl(
                take(HslPick::HUE, self.hue(), other.hue()),
                take(HslPick::SATURATION, self.saturation(), other.saturation()),
                take(HslPick::LIGHTNESS, self.lightness(), other.lightness()),
                alpha,
            );
        }

        let coverage = other.alpha as Component / 255.0;
        let channel = |a: u8, b: u8| {
            mode.blend_channel(a as Component / 255.0, b as Component / 255.0, coverage) * 255.0
        };

        Color::new(
            channel(self.red, other.red),
            channel(self.green, other.green),
            channel(self.blue, other.blue),
            alpha,
        )
    }

    /// The most transparent color that looks like this one when composited
    /// over white. Only defined for opaque colors.
    /// ```rust
    /// use swatch::Color;
    /// let c = Color::rgb(200, 150, 100).lowest_rgba_equivalent().unwrap();
    /// assert_eq!(c, Color::rgba(164, 82, 0, 155));
    /// assert!(Color::rgba(1, 2, 3, 4).lowest_rgba_equivalent().is_err());
    /// ```
    pub fn lowest_rgba_equivalent(&self) -> Result<Color> {
        if !self.is_opaque() {
            return Err(Error::Precondition {
                operation: "lowest_rgba_equivalent",
                reason: format!("alpha is {}, expected 255", self.alpha),
            });
        }

        let min = self.channel_min();
        // White has no color left to keep.
        if min == 255 {
            return Ok(Color::rgba(0, 0, 0, 0));
        }

        let alpha = 255 - min;
        let (min, scale) = (min as Component, alpha as Component);

        Ok(Color::from_components(
            self.components().map(|c| (c - min) * 255.0 / scale),
            alpha,
        ))
    }
}
