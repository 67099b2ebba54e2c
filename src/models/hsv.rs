//! Model a color with the HSV notation.

use crate::color::Component;

swatch_macros::gen_model! {
    /// A color specified with the HSV notation. Saturation and value are on
    /// the 0-255 scale.
    pub struct Hsv {
        /// The hue of the color in degrees.
        hue: Component,
        /// The saturation of the color.
        saturation: Component,
        /// The value (brightest channel) of the color.
        value: Component,
    }
}
