//! In-place adjustments of a [`Color`].
//!
//! Every method here mutates the receiver and returns it, so calls can be
//! chained:
//! ```rust
//! use swatch::Color;
//! let mut c = Color::rgb(255, 0, 0);
//! c.rotate_hue(120).set_alpha(128);
//! assert_eq!(c, Color::rgba(0, 255, 0, 128));
//! ```
//! Derived components (hue, saturation, CMYK, ...) are not stored. Setting
//! one recomputes the other components of the same space from the current
//! channels, converts back to RGB and writes red, green and blue. Alpha is
//! never touched by those setters.

use crate::{
    coerce::{Policy, Value},
    color::{Color, Component, Components},
    models::{Cmyk, Hsl, Hsv},
};

/// Apply `delta` to `current`: percentages scale it, anything else is added.
fn adjusted(current: Component, delta: &Value) -> Component {
    let amount = delta.coerce(&Policy::new());
    if delta.is_percentage() {
        current * amount
    } else {
        current + amount
    }
}

impl Color {
    /// Write recomputed RGB components into the channels. Components are
    /// rounded so that writing back an unchanged derived component leaves
    /// the channels as they were.
    fn write_components(&mut self, components: Components) -> &mut Self {
        let alpha = self.alpha;
        *self = Color::from_components(components.map(Component::round), alpha);
        self
    }

    fn write_hsl(&mut self, hue: Component, saturation: Component, lightness: Component) -> &mut Self {
        self.write_components(Hsl::new(hue, saturation, lightness).to_rgb())
    }

    fn write_hsv(&mut self, hue: Component, saturation: Component, value: Component) -> &mut Self {
        self.write_components(Hsv::new(hue, saturation, value).to_rgb())
    }

    fn write_cmyk(&mut self, cmyk: Cmyk) -> &mut Self {
        self.write_components(cmyk.to_rgb())
    }

    /// Set the red channel.
    pub fn set_red(&mut self, red: impl Into<Value>) -> &mut Self {
        self.red = red.into().channel();
        self
    }

    /// Set the green channel.
    pub fn set_green(&mut self, green: impl Into<Value>) -> &mut Self {
        self.green = green.into().channel();
        self
    }

    /// Set the blue channel.
    pub fn set_blue(&mut self, blue: impl Into<Value>) -> &mut Self {
        self.blue = blue.into().channel();
        self
    }

    /// Set the alpha channel. Unreadable values make the color opaque.
    pub fn set_alpha(&mut self, alpha: impl Into<Value>) -> &mut Self {
        self.alpha = alpha.into().alpha();
        self
    }

    /// Set the hue in degrees, keeping HSL saturation and lightness.
    pub fn set_hue(&mut self, hue: impl Into<Value>) -> &mut Self {
        let hue = hue.into().coerce(&Policy::new());
        let hsl = self.to_hsl();
        self.write_hsl(hue, hsl.saturation, hsl.lightness)
    }

    /// Set the HSL saturation, keeping hue and lightness.
    pub fn set_saturation(&mut self, saturation: impl Into<Value>) -> &mut Self {
        let saturation = saturation.into().coerce(&Policy::COMPONENT);
        let hsl = self.to_hsl();
        self.write_hsl(hsl.hue, saturation, hsl.lightness)
    }

    /// Set the lightness, keeping hue and HSL saturation.
    pub fn set_lightness(&mut self, lightness: impl Into<Value>) -> &mut Self {
        let lightness = lightness.into().coerce(&Policy::COMPONENT);
        let hsl = self.to_hsl();
        self.write_hsl(hsl.hue, hsl.saturation, lightness)
    }

    /// Set the HSV saturation, keeping hue and value.
    pub fn set_saturation_hsv(&mut self, saturation: impl Into<Value>) -> &mut Self {
        let saturation = saturation.into().coerce(&Policy::COMPONENT);
        let hsv = self.to_hsv();
        self.write_hsv(hsv.hue, saturation, hsv.value)
    }

    /// Set the HSV value, keeping hue and HSV saturation.
    pub fn set_value(&mut self, value: impl Into<Value>) -> &mut Self {
        let value = value.into().coerce(&Policy::COMPONENT);
        let hsv = self.to_hsv();
        self.write_hsv(hsv.hue, hsv.saturation, value)
    }

    /// Set the cyan component, keeping magenta, yellow and key.
    pub fn set_cyan(&mut self, cyan: impl Into<Value>) -> &mut Self {
        let cyan = cyan.into().coerce(&Policy::COMPONENT);
        let cmyk = self.to_cmyk();
        self.write_cmyk(Cmyk { cyan, ..cmyk })
    }

    /// Set the magenta component, keeping cyan, yellow and key.
    pub fn set_magenta(&mut self, magenta: impl Into<Value>) -> &mut Self {
        let magenta = magenta.into().coerce(&Policy::COMPONENT);
        let cmyk = self.to_cmyk();
        self.write_cmyk(Cmyk { magenta, ..cmyk })
    }

    /// Set the yellow component, keeping cyan, magenta and key.
    pub fn set_yellow(&mut self, yellow: impl Into<Value>) -> &mut Self {
        let yellow = yellow.into().coerce(&Policy::COMPONENT);
        let cmyk = self.to_cmyk();
        self.write_cmyk(Cmyk { yellow, ..cmyk })
    }

    /// Set the key (black) component, keeping cyan, magenta and yellow.
    pub fn set_key(&mut self, key: impl Into<Value>) -> &mut Self {
        let key = key.into().coerce(&Policy::COMPONENT);
        let cmyk = self.to_cmyk();
        self.write_cmyk(Cmyk { key, ..cmyk })
    }

    /// Shift the hue by the given number of degrees.
    pub fn rotate_hue(&mut self, degrees: impl Into<Value>) -> &mut Self {
        let degrees = degrees.into().coerce(&Policy::new());
        let hue = (self.hue() + degrees).rem_euclid(360.0);
        self.set_hue(hue)
    }

    /// Add points to the HSL saturation, or scale it by a percentage given
    /// as text (`"50%"` halves it).
    pub fn saturate(&mut self, points: impl Into<Value>) -> &mut Self {
        let saturation = adjusted(self.saturation(), &points.into());
        self.set_saturation(saturation)
    }

    /// Add points to the lightness, or scale it by a percentage given as
    /// text.
    pub fn lighten(&mut self, points: impl Into<Value>) -> &mut Self {
        let lightness = adjusted(self.lightness(), &points.into());
        self.set_lightness(lightness)
    }

    /// Add points to the alpha channel, or scale it by a percentage given as
    /// text.
    pub fn opacify(&mut self, points: impl Into<Value>) -> &mut Self {
        let alpha = adjusted(self.alpha as Component, &points.into());
        self.set_alpha(alpha)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channel_setters_coerce() {
        let mut c = Color::rgb(1, 2, 3);
        c.set_red(300).set_green(-4).set_blue("50%").set_alpha("nope");
        assert_eq!(c, Color::rgba(255, 0, 127, 255));

        c.set_alpha(12.7);
        assert_eq!(c.alpha, 12);
    }

    #[test]
    fn rotating_a_full_turn_is_the_identity() {
        for r in (0..=255u8).step_by(5) {
            for g in (0..=255u8).step_by(7) {
                for b in (0..=255u8).step_by(11) {
                    let original = Color::rgba(r, g, b, 200);
                    let mut c = original;
                    c.rotate_hue(360);
                    assert_eq!(c, original);
                    c.rotate_hue(-720);
                    assert_eq!(c, original);
                }
            }
        }
    }

    #[test]
    fn writing_back_derived_components_is_a_no_op() {
        for [r, g, b] in [[210, 105, 30], [12, 200, 99], [255, 255, 255], [0, 0, 0], [1, 2, 3]] {
            let original = Color::rgb(r, g, b);

            let mut c = original;
            c.set_hue(original.hue())
                .set_saturation(original.saturation())
                .set_lightness(original.lightness());
            assert_eq!(c, original);

            let mut c = original;
            c.set_saturation_hsv(original.saturation_hsv())
                .set_value(original.value());
            assert_eq!(c, original);

            let mut c = original;
            c.set_cyan(original.cyan())
                .set_magenta(original.magenta())
                .set_yellow(original.yellow())
                .set_key(original.key());
            assert_eq!(c, original);
        }
    }

    #[test]
    fn rotating_primaries() {
        let mut c = Color::rgb(255, 0, 0);
        c.rotate_hue(120);
        assert_eq!(c, Color::rgb(0, 255, 0));
        c.rotate_hue(120);
        assert_eq!(c, Color::rgb(0, 0, 255));
        c.rotate_hue(-240);
        assert_eq!(c, Color::rgb(255, 0, 0));
    }

    #[test]
    fn derived_setters_keep_alpha() {
        let mut c = Color::rgba(255, 0, 0, 77);
        c.set_lightness(0);
        assert_eq!(c, Color::rgba(0, 0, 0, 77));
    }

    #[test]
    fn saturation_adjustments() {
        let mut c = Color::rgb(191, 64, 64);
        c.saturate("0%");
        assert_eq!(c, Color::rgb(128, 128, 128));

        let mut c = Color::rgb(191, 64, 64);
        let before = c.saturation();
        c.saturate("50%");
        assert!((c.saturation() - before / 2.0).abs() < 2.0);

        let mut c = Color::rgb(255, 0, 0);
        c.saturate(-255);
        assert_eq!(c.saturation(), 0.0);
        assert_eq!(c.to_rgb_array(), [128, 128, 128]);
    }

    #[test]
    fn lightness_adjustments() {
        let mut c = Color::rgb(100, 100, 100);
        c.lighten(50);
        assert_eq!(c, Color::rgb(150, 150, 150));
        c.lighten("50%");
        assert_eq!(c, Color::rgb(75, 75, 75));
        c.lighten(1000);
        assert_eq!(c, Color::rgb(255, 255, 255));
    }

    #[test]
    fn opacity_adjustments() {
        let mut c = Color::rgba(0, 0, 0, 200);
        c.opacify(-100);
        assert_eq!(c.alpha, 100);
        c.opacify("50%");
        assert_eq!(c.alpha, 50);
        c.opacify(1000);
        assert_eq!(c.alpha, 255);
    }

    #[test]
    fn cmyk_setters() {
        let mut c = Color::rgb(255, 0, 0);
        c.set_key(255);
        assert_eq!(c.to_rgb_array(), [0, 0, 0]);

        let mut c = Color::rgb(255, 255, 255);
        c.set_yellow(255);
        assert_eq!(c.to_rgb_array(), [255, 255, 0]);
    }

    #[test]
    fn hsv_setters() {
        let mut c = Color::rgb(255, 0, 0);
        c.set_value(128);
        assert_eq!(c.to_rgb_array(), [128, 0, 0]);

        let mut c = Color::rgb(255, 0, 0);
        c.set_saturation_hsv(0);
        assert_eq!(c.to_rgb_array(), [255, 255, 255]);
    }
}
