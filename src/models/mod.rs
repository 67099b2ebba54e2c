//! Models are structs that represent a color in one of the derived color
//! spaces. They carry no alpha and are always computed from, or converted
//! back into, a [`Color`].

use crate::color::Color;

mod cmyk;
mod hsl;
mod hsv;

pub use cmyk::Cmyk;
pub use hsl::Hsl;
pub use hsv::Hsv;

/// A trait implemented for color models that can be converted into a
/// [`Color`].
pub trait Model {
    /// Convert a model to a [`Color`] with the given alpha. Channels are
    /// floored.
    fn to_color(&self, alpha: u8) -> Color;
}
