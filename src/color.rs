//! A [`Color`] holds a single RGBA color. Red, green, blue and alpha are the
//! only stored channels; every other color space is derived from them.

use crate::coerce::{Policy, Value};

/// A 64-bit floating point value that derived components are computed in.
pub type Component = f64;

/// Ratio between a 0-100 percentage and the 0-255 channel domain (20/51).
pub const HEXP: Component = 20.0 / 51.0;

/// Represent the three components of an RGB triple or another 3 component
/// color space, without alpha.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }
}

/// The color spaces a [`Color`] can be specified in.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[repr(u8)]
pub enum Space {
    /// Red, green and blue channels.
    Rgb = 0,
    /// Hue, saturation and lightness.
    Hsl = 1,
    /// Hue, saturation and value.
    Hsv = 2,
    /// Cyan, magenta, yellow and key.
    Cmyk = 3,
}

/// A color stored as four 8-bit channels.
///
/// Because every channel is a `u8`, a color is always valid. Values coming
/// from outside (numbers, text, percentages) go through the coercion rules
/// in [`crate::coerce`] before they are stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Color {
    /// The red channel.
    pub red: u8,
    /// The green channel.
    pub green: u8,
    /// The blue channel.
    pub blue: u8,
    /// The alpha channel, 255 is fully opaque.
    pub alpha: u8,
}

impl Color {
    /// Create a new [`Color`] from loosely typed channels. Each channel can
    /// be anything that converts into a [`Value`]:
    /// ```rust
    /// use swatch::Color;
    /// let c = Color::new(255, "50%", None::<u8>, "garbage");
    /// assert_eq!(c.to_array(), [255, 127, 0, 255]);
    /// ```
    /// Missing or unreadable red, green and blue channels become 0, a missing
    /// or unreadable alpha becomes 255.
    pub fn new(
        red: impl Into<Value>,
        green: impl Into<Value>,
        blue: impl Into<Value>,
        alpha: impl Into<Value>,
    ) -> Self {
        Self {
            red: red.into().channel(),
            green: green.into().channel(),
            blue: blue.into().channel(),
            alpha: alpha.into().alpha(),
        }
    }

    /// Create an opaque color from already valid channels.
    pub const fn rgb(red: u8, green: u8, blue: u8) -> Self {
        Self::rgba(red, green, blue, 255)
    }

    /// Create a color from already valid channels.
    pub const fn rgba(red: u8, green: u8, blue: u8, alpha: u8) -> Self {
        Self {
            red,
            green,
            blue,
            alpha,
        }
    }

    /// Create a color from unbounded RGB components, flooring and clamping
    /// each one into a channel.
    pub fn from_components(components: Components, alpha: u8) -> Self {
        let channel = |c: Component| Value::Number(c).coerce(&Policy::CHANNEL) as u8;

        Self {
            red: channel(components.0),
            green: channel(components.1),
            blue: channel(components.2),
            alpha,
        }
    }

    /// Return the red, green and blue channels as components.
    pub fn components(&self) -> Components {
        Components(
            self.red as Component,
            self.green as Component,
            self.blue as Component,
        )
    }

    /// Return the sum of the red, green and blue channels.
    pub fn channel_sum(&self) -> u16 {
        self.red as u16 + self.green as u16 + self.blue as u16
    }

    /// Return the greatest of the red, green and blue channels.
    pub fn channel_max(&self) -> u8 {
        self.red.max(self.green).max(self.blue)
    }

    /// Return the smallest of the red, green and blue channels.
    pub fn channel_min(&self) -> u8 {
        self.red.min(self.green).min(self.blue)
    }

    /// Perceived lightness out of 255, using the luma approximation
    /// `(3r + 4g + b) / 8`.
    pub fn perceived_lightness(&self) -> u8 {
        ((3 * self.red as u16 + 4 * self.green as u16 + self.blue as u16) >> 3) as u8
    }

    /// Return the channels as `[red, green, blue, alpha]`.
    pub fn to_array(&self) -> [u8; 4] {
        [self.red, self.green, self.blue, self.alpha]
    }

    /// Return the channels as `[red, green, blue]`.
    pub fn to_rgb_array(&self) -> [u8; 3] {
        [self.red, self.green, self.blue]
    }

    /// Returns true if the color is fully opaque.
    pub fn is_opaque(&self) -> bool {
        self.alpha == 255
    }
}

impl Default for Color {
    /// Opaque black.
    fn default() -> Self {
        Self::rgb(0, 0, 0)
    }
}

impl From<[u8; 4]> for Color {
    fn from([red, green, blue, alpha]: [u8; 4]) -> Self {
        Self::rgba(red, green, blue, alpha)
    }
}

impl From<[u8; 3]> for Color {
    fn from([red, green, blue]: [u8; 3]) -> Self {
        Self::rgb(red, green, blue)
    }
}

impl From<Color> for [u8; 4] {
    fn from(value: Color) -> Self {
        value.to_array()
    }
}

impl IntoIterator for Color {
    type Item = u8;
    type IntoIter = std::array::IntoIter<u8, 4>;

    /// Yields red, green, blue and alpha in that order.
    fn into_iter(self) -> Self::IntoIter {
        self.to_array().into_iter()
    }
}
