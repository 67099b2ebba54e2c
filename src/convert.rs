//! Conversions between the canonical RGB channels and the derived color
//! spaces.
//!
//! All derived components are on the 0-255 scale except hue, which is in
//! degrees. Forward conversions read the stored channels; inverse
//! conversions produce unbounded RGB [`Components`] that the caller floors
//! or rounds into channels.
//!
//! ```rust
//! use swatch::{models::Model, Color};
//! let chocolate = Color::rgb(210, 105, 30);
//! let hsl = chocolate.to_hsl();
//! assert_eq!(hsl.hue, 25.0);
//! assert_eq!(hsl.to_color(255), chocolate);
//! ```

use crate::{
    color::{Color, Component, Components},
    models::{Cmyk, Hsl, Hsv},
};

impl Color {
    /// The hue in degrees, in `[0, 360)`. Grays have a hue of 0.
    pub fn hue(&self) -> Component {
        util::rgb_hue(&self.components())
    }

    /// The HSL saturation on the 0-255 scale.
    pub fn saturation(&self) -> Component {
        util::rgb_to_hsl(&self.components()).1
    }

    /// The lightness on the 0-255 scale, the mean of the largest and smallest
    /// channel.
    pub fn lightness(&self) -> Component {
        (self.channel_max() as Component + self.channel_min() as Component) / 2.0
    }

    /// The HSV saturation on the 0-255 scale.
    pub fn saturation_hsv(&self) -> Component {
        util::rgb_to_hsv(&self.components()).1
    }

    /// The HSV value, i.e. the largest channel.
    pub fn value(&self) -> Component {
        self.channel_max() as Component
    }

    /// The cyan component on the 0-255 scale.
    pub fn cyan(&self) -> Component {
        self.to_cmyk().cyan
    }

    /// The magenta component on the 0-255 scale.
    pub fn magenta(&self) -> Component {
        self.to_cmyk().magenta
    }

    /// The yellow component on the 0-255 scale.
    pub fn yellow(&self) -> Component {
        self.to_cmyk().yellow
    }

    /// The key (black) component, `255 - value`.
    pub fn key(&self) -> Component {
        255.0 - self.value()
    }

    /// Convert the RGB channels to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) = util::rgb_to_hsl(&self.components());
        Hsl::new(hue, saturation, lightness)
    }

    /// Convert the RGB channels to the HSV notation.
    pub fn to_hsv(&self) -> Hsv {
        let Components(hue, saturation, value) = util::rgb_to_hsv(&self.components());
        Hsv::new(hue, saturation, value)
    }

    /// Convert the RGB channels to CMYK.
    pub fn to_cmyk(&self) -> Cmyk {
        util::rgb_to_cmyk(&self.components()).into()
    }
}

impl Hsl {
    /// Convert this color from the HSL notation to RGB components.
    pub fn to_rgb(&self) -> Components {
        util::hsl_to_rgb(&Components(self.hue, self.saturation, self.lightness))
    }
}

impl Hsv {
    /// Convert this color from the HSV notation to the HSL notation.
    pub fn to_hsl(&self) -> Hsl {
        let Components(hue, saturation, lightness) =
            util::hsv_to_hsl(&Components(self.hue, self.saturation, self.value));
        Hsl::new(hue, saturation, lightness)
    }

    /// Convert this color from the HSV notation to RGB components.
    pub fn to_rgb(&self) -> Components {
        self.to_hsl().to_rgb()
    }
}

impl Cmyk {
    /// Convert this color from CMYK to RGB components.
    pub fn to_rgb(&self) -> Components {
        util::cmyk_to_rgb(&self.to_array())
    }
}

mod util {
    use crate::color::{Component, Components};

    /// Clamp a 0-255 scale component and map NaN to 0.
    fn normalize(value: Component) -> Component {
        if value.is_nan() {
            0.0
        } else {
            value.clamp(0.0, 255.0)
        }
    }

    /// Calculate the hue of RGB components. Which formula applies depends on
    /// the order of the three channels.
    pub fn rgb_hue(from: &Components) -> Component {
        let Components(r, g, b) = *from;

        let hue = if r >= g && g >= b {
            60.0 * (g - b) / (r - b)
        } else if g > r && r >= b {
            60.0 * (2.0 - (r - b) / (g - b))
        } else if g >= b && b > r {
            60.0 * (2.0 + (b - r) / (g - r))
        } else if b > g && g > r {
            60.0 * (4.0 - (g - r) / (b - r))
        } else if b > r && r >= g {
            60.0 * (4.0 + (r - g) / (b - g))
        } else {
            60.0 * (6.0 - (b - g) / (r - g))
        };

        // Only grays produce NaN (0 / 0).
        if hue.is_nan() {
            0.0
        } else {
            hue
        }
    }

    /// Convert RGB components to HSL.
    pub fn rgb_to_hsl(from: &Components) -> Components {
        let Components(r, g, b) = *from;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);
        let lightness = (max + min) / 2.0;

        let saturation = if max == min {
            0.0
        } else {
            let (max, min) = (max / 255.0, min / 255.0);
            let delta = max - min;

            if lightness > 127.5 {
                delta / (2.0 - max - min) * 255.0
            } else {
                delta / (max + min) * 255.0
            }
        };

        Components(rgb_hue(from), saturation, lightness)
    }

    /// Convert HSL components to RGB.
    pub fn hsl_to_rgb(from: &Components) -> Components {
        let hue = if from.0.is_finite() {
            from.0.rem_euclid(360.0)
        } else {
            0.0
        };
        let saturation = normalize(from.1) / 255.0;
        let lightness = normalize(from.2) / 255.0;

        let chroma = saturation * (1.0 - (2.0 * lightness - 1.0).abs());
        let x = chroma * (1.0 - ((hue / 60.0) % 2.0 - 1.0).abs());

        let (r, g, b) = if hue < 60.0 {
            (chroma, x, 0.0)
        } else if hue < 120.0 {
            (x, chroma, 0.0)
        } else if hue < 180.0 {
            (0.0, chroma, x)
        } else if hue < 240.0 {
            (0.0, x, chroma)
        } else if hue < 300.0 {
            (x, 0.0, chroma)
        } else {
            (chroma, 0.0, x)
        };

        let m = lightness - chroma / 2.0;

        Components(r, g, b).map(|c| (c + m) * 255.0)
    }

    /// Convert RGB components to HSV.
    pub fn rgb_to_hsv(from: &Components) -> Components {
        let Components(r, g, b) = *from;

        let max = r.max(g).max(b);
        let min = r.min(g).min(b);

        let saturation = if max == 0.0 {
            0.0
        } else {
            (max - min) / max * 255.0
        };

        Components(rgb_hue(from), saturation, max)
    }

    /// Convert HSV components to HSL.
    pub fn hsv_to_hsl(from: &Components) -> Components {
        let hue = from.0;
        let saturation = normalize(from.1) / 255.0;
        let value = normalize(from.2) / 255.0;

        let lightness = value * (2.0 - saturation) / 2.0;
        let divisor = 1.0 - (2.0 * lightness - 1.0).abs();

        // Black and white have no saturation.
        let saturation = if divisor == 0.0 {
            0.0
        } else {
            value * saturation / divisor
        };

        Components(hue, saturation * 255.0, lightness * 255.0)
    }

    /// Convert RGB components to `[cyan, magenta, yellow, key]`.
    pub fn rgb_to_cmyk(from: &Components) -> [Component; 4] {
        let Components(r, g, b) = *from;
        let value = r.max(g).max(b);

        let ink = |channel: Component| {
            if value == 0.0 {
                0.0
            } else {
                (value - channel) / value * 255.0
            }
        };

        [ink(r), ink(g), ink(b), 255.0 - value]
    }

    /// Convert `[cyan, magenta, yellow, key]` to RGB components.
    pub fn cmyk_to_rgb(from: &[Component; 4]) -> Components {
        let [cyan, magenta, yellow, key] = from.map(normalize);
        let value = 255.0 - key;

        Components(cyan, magenta, yellow).map(|ink| (255.0 - ink) * value / 255.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{assert_component_eq, models::Model};

    #[test]
    fn derived_components_of_chocolate() {
        let c = Color::rgb(210, 105, 30);

        assert_component_eq!(c.hue(), 25.0);
        assert_component_eq!(c.saturation(), 191.25);
        assert_component_eq!(c.lightness(), 120.0);
        assert_component_eq!(c.value(), 210.0);
        assert_component_eq!(c.saturation_hsv(), 180.0 / 210.0 * 255.0);
        assert_component_eq!(c.cyan(), 0.0);
        assert_component_eq!(c.magenta(), 127.5);
        assert_component_eq!(c.yellow(), 180.0 / 210.0 * 255.0);
        assert_component_eq!(c.key(), 45.0);
    }

    #[test]
    fn hue_of_each_channel_order() {
        #[rustfmt::skip]
        const TESTS: &[([u8; 3], Component)] = &[
            ([255, 0, 0], 0.0),
            ([255, 255, 0], 60.0),
            ([0, 255, 0], 120.0),
            ([0, 255, 255], 180.0),
            ([0, 0, 255], 240.0),
            ([255, 0, 255], 300.0),
            ([255, 128, 0], 60.0 * 128.0 / 255.0),
            ([128, 255, 0], 60.0 * (2.0 - 128.0 / 255.0)),
            ([0, 255, 128], 60.0 * (2.0 + 128.0 / 255.0)),
            ([0, 128, 255], 60.0 * (4.0 - 128.0 / 255.0)),
            ([128, 0, 255], 60.0 * (4.0 + 128.0 / 255.0)),
            ([255, 0, 128], 60.0 * (6.0 - 128.0 / 255.0)),
            ([77, 77, 77], 0.0),
        ];

        for (rgb, hue) in TESTS {
            assert_component_eq!(Color::from(*rgb).hue(), *hue);
        }
    }

    #[test]
    fn grays_have_no_saturation() {
        for v in [0, 1, 127, 128, 254, 255] {
            let c = Color::rgb(v, v, v);
            assert_eq!(c.saturation(), 0.0);
            assert_eq!(c.saturation_hsv(), 0.0);
            assert_eq!(c.hue(), 0.0);
        }
        assert_eq!(Color::rgb(0, 0, 0).to_cmyk().to_array(), [0.0, 0.0, 0.0, 255.0]);
    }

    #[test]
    fn hsl_round_trip_within_one() {
        for r in (0..=255u8).step_by(3) {
            for g in (0..=255u8).step_by(7) {
                for b in (0..=255u8).step_by(11) {
                    let c = Color::rgb(r, g, b);
                    let back = c.to_hsl().to_color(255);
                    for (x, y) in c.to_rgb_array().iter().zip(back.to_rgb_array()) {
                        assert!(x.abs_diff(y) <= 1, "{c:?} became {back:?}");
                    }
                }
            }
        }
    }

    #[test]
    fn hsv_and_cmyk_round_trip_within_one() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(9) {
                for b in (0..=255u8).step_by(13) {
                    let c = Color::rgb(r, g, b);
                    for back in [c.to_hsv().to_color(255), c.to_cmyk().to_color(255)] {
                        for (x, y) in c.to_rgb_array().iter().zip(back.to_rgb_array()) {
                            assert!(x.abs_diff(y) <= 1, "{c:?} became {back:?}");
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn hsl_to_rgb_wraps_hue() {
        let a = Hsl::new(30.0, 255.0, 127.5).to_rgb();
        let b = Hsl::new(390.0, 255.0, 127.5).to_rgb();
        let c = Hsl::new(-330.0, 255.0, 127.5).to_rgb();
        assert_component_eq!(a.0, b.0);
        assert_component_eq!(a.1, b.1);
        assert_component_eq!(a.1, c.1);
        assert_component_eq!(a.2, c.2);
    }

    #[test]
    fn full_saturation_mid_lightness_is_pure_red() {
        assert_eq!(Hsl::new(0.0, 255.0, 128.0).to_color(255), Color::rgb(255, 0, 0));
    }

    #[test]
    fn hsv_conversion_handles_black_and_white() {
        let black = Hsv::new(0.0, 0.0, 0.0).to_hsl();
        assert_eq!(black.saturation, 0.0);
        assert_eq!(black.lightness, 0.0);

        let white = Hsv::new(0.0, 0.0, 255.0).to_hsl();
        assert_eq!(white.saturation, 0.0);
        assert_component_eq!(white.lightness, 255.0);
    }

    #[test]
    fn cmyk_to_rgb_scales_by_key() {
        let rgb = Cmyk::new(0.0, 255.0, 255.0, 0.0).to_rgb();
        assert_eq!(rgb, Components(255.0, 0.0, 0.0));

        let rgb = Cmyk::new(0.0, 0.0, 0.0, 255.0).to_rgb();
        assert_eq!(rgb, Components(0.0, 0.0, 0.0));
    }
}
