use num_traits::Float;

use crate::{
    coerce::{Policy, Value},
    color::{Color, Component},
};

fn lerp<T: Float>(a: T, b: T, t: T) -> T {
    a + (b - a) * t
}

/// Progress between two colors, clamped to `0..=1`. Unreadable progress is
/// the midpoint.
fn progress(x: Value) -> Component {
    x.coerce(&Policy::new().range(0.0, 1.0).nan_fallback(0.5))
}

impl Color {
    /// Linearly interpolate each RGB channel from this color to `other`,
    /// using `x` as the progress between them. Alpha is kept from this
    /// color.
    pub fn rgb_linear(&self, other: &Color, x: impl Into<Value>) -> Color {
        let x = progress(x.into());
        let channel = |a: u8, b: u8| lerp(a as Component, b as Component, x);

        Color::new(
            channel(self.red, other.red),
            channel(self.green, other.green),
            channel(self.blue, other.blue),
            self.alpha,
        )
    }

    /// Interpolate from this color to `other` through HSL: the hue is taken
    /// from the RGB interpolation, saturation and lightness are interpolated
    /// linearly. Alpha is kept from this color.
    pub fn hsl_linear(&self, other: &Color, x: impl Into<Value>) -> Color {
        let x = progress(x.into());
        let hue = self.rgb_linear(other, x).hue();

        Color::hsl(
            hue,
            lerp(self.saturation(), other.saturation(), x),
            lerp(self.lightness(), other.lightness(), x),
            self.alpha,
        )
    }
}
