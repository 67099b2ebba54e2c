//! Filters modeled on the CSS `<filter-function>`s, applied to a single
//! color instead of an image.

use std::{fmt, str::FromStr};

use crate::{
    coerce::{Policy, Value},
    color::{Color, Component},
    error::{Error, Result},
};

/// A filter that can be applied with [`Color::filter`].
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Filter {
    /// Scale the lightness by the level.
    Brightness,
    /// Leaves the color as it is.
    Contrast,
    /// Move each channel toward the sum of all channels.
    Grayscale,
    /// Rotate the hue by the level in degrees.
    HueRotate,
    /// Move each channel toward its complement.
    Invert,
    /// Scale the alpha channel by the level.
    Opacity,
    /// Scale the HSL saturation by the level.
    Saturate,
    /// Tint toward brown, based on the perceived lightness.
    Sepia,
}

impl Filter {
    /// Every filter, in alphabetical order.
    pub const ALL: [Filter; 8] = [
        Filter::Brightness,
        Filter::Contrast,
        Filter::Grayscale,
        Filter::HueRotate,
        Filter::Invert,
        Filter::Opacity,
        Filter::Saturate,
        Filter::Sepia,
    ];

    /// The CSS name of the filter.
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Brightness => "brightness",
            Filter::Contrast => "contrast",
            Filter::Grayscale => "grayscale",
            Filter::HueRotate => "hue-rotate",
            Filter::Invert => "invert",
            Filter::Opacity => "opacity",
            Filter::Saturate => "saturate",
            Filter::Sepia => "sepia",
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Filter {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        let name = s.trim().to_ascii_lowercase();
        Filter::ALL
            .into_iter()
            .find(|filter| filter.name() == name)
            .ok_or_else(|| Error::UnknownFilter(s.to_string()))
    }
}

impl Color {
    /// Return a new color with the filter applied at the given level. A
    /// missing or unreadable level is 1. Alpha is kept by every filter
    /// except [`Filter::Opacity`].
    /// ```rust
    /// use swatch::{Color, Filter};
    /// let c = Color::rgb(10, 20, 30);
    /// assert_eq!(c.filter(Filter::Invert, None::<f64>), Color::rgb(245, 235, 225));
    /// assert_eq!(c.filter(Filter::Invert, 0), c);
    /// ```
    pub fn filter(&self, filter: Filter, level: impl Into<Value>) -> Color {
        let level = level
            .into()
            .coerce(&Policy::new().nan_fallback(1.0).infinity_fallback(1.0));
        let mut color = *self;

        match filter {
            Filter::Brightness => {
                color.set_lightness(self.lightness() * level);
            }
            Filter::Contrast => {}
            Filter::Grayscale => {
                let sum = self.channel_sum() as Component;
                color = self.map_channels(|c| sum * level - c * level + c);
            }
            Filter::HueRotate => {
                color.rotate_hue(level);
            }
            Filter::Invert => {
                color = self.map_channels(|c| 255.0 * level - 2.0 * c * level + c);
            }
            Filter::Opacity => {
                color.set_alpha(self.alpha as Component * level);
            }
            Filter::Saturate => {
                color.set_saturation(self.saturation() * level);
            }
            Filter::Sepia => {
                let l = self.perceived_lightness() as Component;
                color = Color::new(l + 40.0 * level, l + 20.0 * level, l - 20.0 * level, self.alpha);
            }
        }

        color
    }

    /// Map the red, green and blue channels, keeping alpha. Results are
    /// floored and clamped.
    fn map_channels(&self, f: impl Fn(Component) -> Component) -> Color {
        Color::from_components(self.components().map(f), self.alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contrast_is_the_identity() {
        let c = Color::rgba(12, 34, 56, 78);
        assert_eq!(c.filter(Filter::Contrast, 0.3), c);
    }

    #[test]
    fn grayscale() {
        let c = Color::rgba(10, 20, 30, 40);
        assert_eq!(c.filter(Filter::Grayscale, 0), c);
        assert_eq!(c.filter(Filter::Grayscale, 0.5), Color::rgba(35, 40, 45, 40));
        assert_eq!(c.filter(Filter::Grayscale, 1), Color::rgba(60, 60, 60, 40));
        assert_eq!(Color::rgb(200, 100, 0).filter(Filter::Grayscale, 1), Color::rgb(255, 255, 255));
    }

    #[test]
    fn invert() {
        let c = Color::rgba(0, 100, 255, 9);
        assert_eq!(c.filter(Filter::Invert, 1), Color::rgba(255, 155, 0, 9));
        assert_eq!(c.filter(Filter::Invert, 0.5), Color::rgba(127, 127, 127, 9));
    }

    #[test]
    fn opacity() {
        let c = Color::rgba(1, 2, 3, 200);
        assert_eq!(c.filter(Filter::Opacity, 0.5), Color::rgba(1, 2, 3, 100));
        assert_eq!(c.filter(Filter::Opacity, 2), Color::rgba(1, 2, 3, 255));
    }

    #[test]
    fn sepia() {
        assert_eq!(Color::rgb(0, 0, 0).filter(Filter::Sepia, 1), Color::rgb(40, 20, 0));
        assert_eq!(Color::rgb(255, 255, 255).filter(Filter::Sepia, 1), Color::rgb(255, 255, 235));
        assert_eq!(Color::rgb(80, 80, 80).filter(Filter::Sepia, 0), Color::rgb(80, 80, 80));
    }

    #[test]
    fn hsl_filters() {
        let red = Color::rgb(255, 0, 0);
        assert_eq!(red.filter(Filter::HueRotate, 120), Color::rgb(0, 255, 0));
        assert_eq!(red.filter(Filter::Saturate, 0), Color::rgb(128, 128, 128));
        assert_eq!(red.filter(Filter::Saturate, 1), red);

        let gray = Color::rgba(100, 100, 100, 5);
        assert_eq!(gray.filter(Filter::Brightness, 0.5), Color::rgba(50, 50, 50, 5));
        assert_eq!(gray.filter(Filter::Brightness, 2), Color::rgba(200, 200, 200, 5));
    }

    #[test]
    fn unreadable_levels_are_one() {
        let c = Color::rgb(10, 20, 30);
        let full = c.filter(Filter::Invert, 1);
        assert_eq!(c.filter(Filter::Invert, Value::Missing), full);
        assert_eq!(c.filter(Filter::Invert, "nope"), full);
        assert_eq!(c.filter(Filter::Invert, Component::INFINITY), full);
    }

    #[test]
    fn the_receiver_is_not_modified() {
        let c = Color::rgb(10, 20, 30);
        let _ = c.filter(Filter::HueRotate, 90);
        assert_eq!(c, Color::rgb(10, 20, 30));
    }

    #[test]
    fn filter_names() {
        for filter in Filter::ALL {
            assert_eq!(filter.to_string().parse::<Filter>(), Ok(filter));
        }
        assert_eq!("Hue-Rotate".parse::<Filter>(), Ok(Filter::HueRotate));
        assert_eq!("blur".parse::<Filter>(), Err(Error::UnknownFilter("blur".to_string())));
    }
}
