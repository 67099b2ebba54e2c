//! swatch is a color value engine. A [`Color`] stores red, green, blue and
//! alpha as 8-bit channels; HSL, HSV and CMYK are derived from them on
//! demand. Colors are parsed from CSS-like text, names, integers and loosely
//! typed channels, rendered back to text, and composited with filters, blend
//! modes and interpolation.
//!
//! ```rust
//! use swatch::{BlendMode, Color, Notation};
//!
//! let mut c = Color::resolve("cornflowerblue");
//! assert_eq!(c.to_string_as(Notation::Hex), "#6495ed");
//!
//! c.rotate_hue(180).lighten("50%");
//! let over = c.blend(&Color::resolve("rgba(255, 255, 255, 0.5)"), BlendMode::Screen);
//! assert!(over.is_opaque());
//! ```

#![deny(missing_docs)]

mod adjust;
mod blend;
mod coerce;
mod color;
mod convert;
mod error;
mod filter;
mod interpolate;
pub mod models;
pub mod named;
mod parse;
mod serialize;

#[cfg(test)]
mod test;

pub use blend::{BlendMode, HslPick};
pub use coerce::{coerce, coerce_alpha, coerce_channel, Policy, Value};
pub use color::{Color, Component, Components, Space, HEXP};
pub use error::{Error, Result};
pub use filter::Filter;
pub use parse::{ChannelRecord, CmykaSpec, Format, HslaSpec, HsvaSpec, Input, RgbaSpec};
pub use serialize::Notation;
