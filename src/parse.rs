//! Construction of colors from the shapes they are written in: channel
//! lists, per-space records, CSS-like text and integers.
//!
//! Parsing never fails. Anything that can not be read as intended still
//! produces a color through the coercion rules, the same way a browser
//! treats a sloppy style sheet.

use crate::{
    coerce::{Policy, Value},
    color::{Color, Component, Space, HEXP},
    error::{Error, Result},
    models::{Cmyk, Hsl, Hsv, Model},
    named,
};

/// Red, green, blue and alpha channels.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct RgbaSpec {
    /// The red channel.
    pub red: Value,
    /// The green channel.
    pub green: Value,
    /// The blue channel.
    pub blue: Value,
    /// The alpha channel, missing means opaque.
    pub alpha: Value,
}

/// Hue, saturation, lightness and alpha.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HslaSpec {
    /// The hue in degrees.
    pub hue: Value,
    /// The saturation on the 0-255 scale.
    pub saturation: Value,
    /// The lightness on the 0-255 scale.
    pub lightness: Value,
    /// The alpha channel, missing means opaque.
    pub alpha: Value,
}

/// Hue, saturation, value and alpha.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct HsvaSpec {
    /// The hue in degrees.
    pub hue: Value,
    /// The saturation on the 0-255 scale.
    pub saturation: Value,
    /// The value on the 0-255 scale.
    pub value: Value,
    /// The alpha channel, missing means opaque.
    pub alpha: Value,
}

/// Cyan, magenta, yellow, key and alpha.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CmykaSpec {
    /// The cyan component on the 0-255 scale.
    pub cyan: Value,
    /// The magenta component on the 0-255 scale.
    pub magenta: Value,
    /// The yellow component on the 0-255 scale.
    pub yellow: Value,
    /// The key component on the 0-255 scale.
    pub key: Value,
    /// The alpha channel, missing means opaque.
    pub alpha: Value,
}

/// A record of single letter channel keys, as found in loosely typed data
/// such as JSON. [`ChannelRecord::space`] decides which space the record is
/// read in, based on which keys are present.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(default)
)]
#[allow(missing_docs)]
pub struct ChannelRecord {
    pub r: Option<Value>,
    pub g: Option<Value>,
    pub b: Option<Value>,
    pub h: Option<Value>,
    pub s: Option<Value>,
    pub l: Option<Value>,
    pub v: Option<Value>,
    pub c: Option<Value>,
    pub m: Option<Value>,
    pub y: Option<Value>,
    pub k: Option<Value>,
    pub a: Option<Value>,
}

impl ChannelRecord {
    /// The space this record is read in. Keys are checked in order: any of
    /// `r`, `g`, `b` selects RGB; `v` selects HSV; any of `h`, `s`, `l`
    /// selects HSL; any of `c`, `m`, `y`, `k` selects CMYK. A record with
    /// none of these is read as RGB.
    pub fn space(&self) -> Space {
        let any = |keys: &[&Option<Value>]| keys.iter().any(|k| k.is_some());

        if any(&[&self.r, &self.g, &self.b]) {
            Space::Rgb
        } else if any(&[&self.v]) {
            Space::Hsv
        } else if any(&[&self.h, &self.s, &self.l]) {
            Space::Hsl
        } else if any(&[&self.c, &self.m, &self.y, &self.k]) {
            Space::Cmyk
        } else {
            Space::Rgb
        }
    }
}

/// Everything a [`Color`] can be constructed from.
#[derive(Clone, Debug, PartialEq)]
pub enum Input {
    /// Up to four channels: red, green, blue and alpha. If the first entry is
    /// text that is not numeric, it is resolved as a color instead.
    Channels(Vec<Value>),
    /// RGBA channels.
    Rgba(RgbaSpec),
    /// HSLA components.
    Hsla(HslaSpec),
    /// HSVA components.
    Hsva(HsvaSpec),
    /// CMYKA components.
    Cmyka(CmykaSpec),
    /// CSS-like text, see [`Color::resolve`].
    Text(String),
    /// A 24-bit `0xRRGGBB` integer.
    Integer(i64),
}

impl From<Vec<Value>> for Input {
    fn from(value: Vec<Value>) -> Self {
        Input::Channels(value)
    }
}

impl From<RgbaSpec> for Input {
    fn from(value: RgbaSpec) -> Self {
        Input::Rgba(value)
    }
}

impl From<HslaSpec> for Input {
    fn from(value: HslaSpec) -> Self {
        Input::Hsla(value)
    }
}

impl From<HsvaSpec> for Input {
    fn from(value: HsvaSpec) -> Self {
        Input::Hsva(value)
    }
}

impl From<CmykaSpec> for Input {
    fn from(value: CmykaSpec) -> Self {
        Input::Cmyka(value)
    }
}

impl From<&str> for Input {
    fn from(value: &str) -> Self {
        Input::Text(value.to_string())
    }
}

impl From<String> for Input {
    fn from(value: String) -> Self {
        Input::Text(value)
    }
}

impl From<i64> for Input {
    fn from(value: i64) -> Self {
        Input::Integer(value)
    }
}

impl From<ChannelRecord> for Input {
    fn from(record: ChannelRecord) -> Self {
        let space = record.space();
        let ChannelRecord {
            r,
            g,
            b,
            h,
            s,
            l,
            v,
            c,
            m,
            y,
            k,
            a,
        } = record;
        let alpha = a.unwrap_or_default();

        match space {
            Space::Rgb => Input::Rgba(RgbaSpec {
                red: r.unwrap_or_default(),
                green: g.unwrap_or_default(),
                blue: b.unwrap_or_default(),
                alpha,
            }),
            Space::Hsv => Input::Hsva(HsvaSpec {
                hue: h.unwrap_or_default(),
                saturation: s.unwrap_or_default(),
                value: v.unwrap_or_default(),
                alpha,
            }),
            Space::Hsl => Input::Hsla(HslaSpec {
                hue: h.unwrap_or_default(),
                saturation: s.unwrap_or_default(),
                lightness: l.unwrap_or_default(),
                alpha,
            }),
            Space::Cmyk => Input::Cmyka(CmykaSpec {
                cyan: c.unwrap_or_default(),
                magenta: m.unwrap_or_default(),
                yellow: y.unwrap_or_default(),
                key: k.unwrap_or_default(),
                alpha,
            }),
        }
    }
}

/// The notations recognized in color text.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Format {
    /// `rgb(r,g,b)`
    Rgb,
    /// `rgba(r,g,b,a)` with alpha as a 0-1 fraction.
    Rgba,
    /// `hsl(h,s%,l%)`
    Hsl,
    /// `hsla(h,s%,l%,a)` with alpha as a 0-1 fraction.
    Hsla,
    /// `#rgb` or `#rrggbb`.
    Hexadecimal,
    /// Anything else, looked up as a color name.
    Name,
}

fn strip_whitespace(text: &str) -> String {
    text.chars().filter(|c| !c.is_whitespace()).collect()
}

/// The comma separated arguments between the first `(` and the last `)`.
fn function_arguments(text: &str) -> Vec<&str> {
    let start = text.find('(').map_or(0, |i| i + 1);
    let end = text.rfind(')').unwrap_or(0);

    text.get(start..end).unwrap_or("").split(',').collect()
}

/// An alpha written as a 0-1 fraction, rescaled to the channel domain.
fn fraction_alpha(argument: Option<&str>) -> Value {
    let fraction = argument.map_or(Component::NAN, |a| Value::from(a).to_number());
    Value::Number(fraction * 255.0)
}

/// A percentage argument of `hsl()`, rescaled to the 0-255 scale. Anything
/// but digits and dots is ignored.
fn percentage_argument(argument: Option<&str>) -> Value {
    let digits: String = argument
        .unwrap_or("")
        .chars()
        .filter(|c| c.is_ascii_digit() || *c == '.')
        .collect();

    Value::Number(Value::from(digits).to_number() / HEXP)
}

/// Repeat every character twice: `f0a` becomes `ff00aa`.
fn doubled(digits: &[char]) -> Vec<char> {
    digits.iter().flat_map(|&c| [c, c]).collect()
}

/// Read up to two characters at `start` as a hexadecimal byte. Characters
/// that are not hexadecimal digits read as `0`.
fn hex_group(digits: &[char], start: usize) -> Value {
    let group: String = digits
        .iter()
        .skip(start)
        .take(2)
        .map(|c| if c.is_ascii_hexdigit() { *c } else { '0' })
        .collect();

    u8::from_str_radix(&group, 16).map_or(Value::Missing, Value::from)
}

impl Color {
    /// Construct a color from any supported [`Input`].
    pub fn from_input(input: impl Into<Input>) -> Self {
        match input.into() {
            Input::Channels(values) => Self::from_channels(&values),
            Input::Rgba(spec) => Self::new(spec.red, spec.green, spec.blue, spec.alpha),
            Input::Hsla(spec) => Self::hsl(spec.hue, spec.saturation, spec.lightness, spec.alpha),
            Input::Hsva(spec) => Self::hsv(spec.hue, spec.saturation, spec.value, spec.alpha),
            Input::Cmyka(spec) => {
                Self::cmyk(spec.cyan, spec.magenta, spec.yellow, spec.key, spec.alpha)
            }
            Input::Text(text) => Self::resolve(&text),
            Input::Integer(integer) => Self::from_integer(integer),
        }
    }

    /// Construct a color from a list of red, green, blue and alpha channels.
    /// Entries past the fourth are ignored. When the first entry is text that
    /// does not read as a number, it is resolved as color text instead.
    pub fn from_channels(values: &[Value]) -> Self {
        if let Some(first @ Value::Text(text)) = values.first() {
            if !first.is_numeric() {
                return Self::resolve(text);
            }
        }

        let channel = |i: usize| values.get(i).cloned().unwrap_or_default();
        Self::new(channel(0), channel(1), channel(2), channel(3))
    }

    /// Construct a color from hue (degrees), saturation and lightness (0-255
    /// scale, percentages allowed) and alpha.
    /// ```rust
    /// use swatch::Color;
    /// assert_eq!(Color::hsl(0, 255, 128, None::<u8>), Color::rgb(255, 0, 0));
    /// ```
    pub fn hsl(
        hue: impl Into<Value>,
        saturation: impl Into<Value>,
        lightness: impl Into<Value>,
        alpha: impl Into<Value>,
    ) -> Self {
        Hsl::new(
            hue.into().coerce(&Policy::new()),
            saturation.into().coerce(&Policy::COMPONENT),
            lightness.into().coerce(&Policy::COMPONENT),
        )
        .to_color(alpha.into().alpha())
    }

    /// Construct a color from hue (degrees), saturation and value (0-255
    /// scale, percentages allowed) and alpha.
    pub fn hsv(
        hue: impl Into<Value>,
        saturation: impl Into<Value>,
        value: impl Into<Value>,
        alpha: impl Into<Value>,
    ) -> Self {
        Hsv::new(
            hue.into().coerce(&Policy::new()),
            saturation.into().coerce(&Policy::COMPONENT),
            value.into().coerce(&Policy::COMPONENT),
        )
        .to_color(alpha.into().alpha())
    }

    /// Construct a color from cyan, magenta, yellow and key (0-255 scale,
    /// percentages allowed) and alpha.
    pub fn cmyk(
        cyan: impl Into<Value>,
        magenta: impl Into<Value>,
        yellow: impl Into<Value>,
        key: impl Into<Value>,
        alpha: impl Into<Value>,
    ) -> Self {
        Cmyk::new(
            cyan.into().coerce(&Policy::COMPONENT),
            magenta.into().coerce(&Policy::COMPONENT),
            yellow.into().coerce(&Policy::COMPONENT),
            key.into().coerce(&Policy::COMPONENT),
        )
        .to_color(alpha.into().alpha())
    }

    /// Determine the notation of color text. Whitespace is ignored; case is
    /// not, so callers should lowercase first.
    pub fn detect_format(text: &str) -> Format {
        let text = strip_whitespace(text);
        let is_function_of = |name: &str| {
            text.strip_prefix(name)
                .is_some_and(|rest| rest.starts_with('(') && rest.ends_with(')'))
        };

        if is_function_of("rgb") {
            Format::Rgb
        } else if is_function_of("rgba") {
            Format::Rgba
        } else if is_function_of("hsl") {
            Format::Hsl
        } else if is_function_of("hsla") {
            Format::Hsla
        } else if text.starts_with('#') && matches!(text.chars().count(), 4 | 7) {
            Format::Hexadecimal
        } else {
            Format::Name
        }
    }

    /// Construct a color from CSS-like text: `rgb()`, `rgba()`, `hsl()`,
    /// `hsla()`, `#rgb`, `#rrggbb`, a color name or bare hexadecimal digits.
    /// Whitespace and case are ignored.
    /// ```rust
    /// use swatch::Color;
    /// assert_eq!(Color::resolve("RGB(255, 0, 0)"), Color::rgb(255, 0, 0));
    /// assert_eq!(Color::resolve("hsla(120, 100%, 50%, 0.5)"), Color::rgba(0, 255, 0, 127));
    /// assert_eq!(Color::resolve(" Cornflower Blue "), Color::rgb(0x64, 0x95, 0xed));
    /// ```
    pub fn resolve(text: &str) -> Self {
        let text = strip_whitespace(text).to_lowercase();
        let format = Self::detect_format(&text);
        tracing::trace!(text = %text, ?format, "resolving color text");

        let arguments = function_arguments(&text);
        let argument = |i: usize| arguments.get(i).copied();
        let channel = |i: usize| Value::from(argument(i));

        match format {
            Format::Rgb => Self::new(channel(0), channel(1), channel(2), Value::Missing),
            Format::Rgba => Self::new(channel(0), channel(1), channel(2), fraction_alpha(argument(3))),
            Format::Hsl => Self::hsl(
                channel(0),
                percentage_argument(argument(1)),
                percentage_argument(argument(2)),
                Value::Missing,
            ),
            Format::Hsla => Self::hsl(
                channel(0),
                percentage_argument(argument(1)),
                percentage_argument(argument(2)),
                fraction_alpha(argument(3)),
            ),
            Format::Hexadecimal => Self::hex(&text),
            Format::Name => Self::from_name(&text),
        }
    }

    /// Construct a color from hexadecimal digits, with or without a leading
    /// `#`.
    ///
    /// Four or eight digits are read as RGBA. Any other length is padded with
    /// `0` to a multiple of three and read as RGB, with three digits doubled
    /// to six. Characters that are not hexadecimal digits read as `0`.
    pub fn hex(text: &str) -> Self {
        let digits: Vec<char> = text.strip_prefix('#').unwrap_or(text).chars().collect();

        match digits.len() {
            4 | 8 => {
                let digits = if digits.len() == 4 {
                    doubled(&digits)
                } else {
                    digits
                };
                let part = digits.len() / 4;

                Self::new(
                    hex_group(&digits, 0),
                    hex_group(&digits, part),
                    hex_group(&digits, 2 * part),
                    hex_group(&digits, 3 * part),
                )
            }
            _ => {
                let mut digits = digits;
                while digits.is_empty() || digits.len() % 3 != 0 {
                    digits.push('0');
                }
                if digits.len() == 3 {
                    digits = doubled(&digits);
                }
                let part = digits.len() / 3;

                Self::new(
                    hex_group(&digits, 0),
                    hex_group(&digits, part),
                    hex_group(&digits, 2 * part),
                    Value::Missing,
                )
            }
        }
    }

    /// Construct a color from its name. Unknown names are read as
    /// hexadecimal digits, which usually produces a dark, arbitrary color;
    /// use [`Color::try_from_name`] to detect them.
    pub fn from_name(name: &str) -> Self {
        let name = strip_whitespace(name);

        named::lookup(&name).unwrap_or_else(|| {
            tracing::debug!(name = %name, "unknown color name, reading it as hexadecimal");
            Self::hex(&name)
        })
    }

    /// Look up a color by name, ignoring whitespace and case.
    pub fn try_from_name(name: &str) -> Result<Self> {
        let name = strip_whitespace(name).to_lowercase();
        named::lookup(&name).ok_or(Error::UnknownName(name))
    }

    /// Construct a color from a `0xRRGGBB` integer. Values outside
    /// `0..=0xFFFFFF` are clamped.
    pub fn from_integer(integer: impl Into<Value>) -> Self {
        let integer = integer
            .into()
            .coerce(&Policy::new().range(0.0, 0xFF_FF_FF as Component).integer());
        Self::hex(&format!("{:06x}", integer as u32))
    }
}

impl From<&str> for Color {
    fn from(value: &str) -> Self {
        Self::resolve(value)
    }
}

impl From<String> for Color {
    fn from(value: String) -> Self {
        Self::resolve(&value)
    }
}

impl From<u32> for Color {
    fn from(value: u32) -> Self {
        Self::from_integer(value)
    }
}

impl From<Input> for Color {
    fn from(value: Input) -> Self {
        Self::from_input(value)
    }
}
