//! Model a color with the CMYK notation.

use crate::color::Component;

swatch_macros::gen_model! {
    /// A color specified by its cyan, magenta, yellow and key components,
    /// each on the 0-255 scale.
    pub struct Cmyk {
        /// The cyan component.
        cyan: Component,
        /// The magenta component.
        magenta: Component,
        /// The yellow component.
        yellow: Component,
        /// The key (black) component.
        key: Component,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn four_components() {
        let cmyk = Cmyk::from([1.0, 2.0, 3.0, 4.0]);
        assert_eq!(cmyk.key, 4.0);
        assert_eq!(<[Component; 4]>::from(cmyk), [1.0, 2.0, 3.0, 4.0]);
    }
}
