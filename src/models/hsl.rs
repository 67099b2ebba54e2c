//! Model a color with the HSL notation.

use crate::color::Component;

swatch_macros::gen_model! {
    /// A color specified with the HSL notation. Saturation and lightness are
    /// on the 0-255 scale.
    pub struct Hsl {
        /// The hue of the color in degrees.
        hue: Component,
        /// The saturation of the color.
        saturation: Component,
        /// The lightness of the color.
        lightness: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{models::Model, Color};

    #[test]
    fn fields_are_public_and_ordered() {
        let hsl = Hsl::from([120.0, 255.0, 127.5]);
        assert_eq!(hsl.hue, 120.0);
        assert_eq!(hsl.saturation, 255.0);
        assert_eq!(hsl.lightness, 127.5);
        assert_eq!(hsl.to_array(), [120.0, 255.0, 127.5]);
    }

    #[test]
    fn to_color_keeps_alpha() {
        let c = Hsl::new(120.0, 255.0, 127.5).to_color(64);
        assert_eq!(c, Color::rgba(0, 255, 0, 64));
    }
}
