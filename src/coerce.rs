//! Coercion of loosely typed input into valid component values.
//!
//! Channel values reach the engine as numbers, numeric text, percentages or
//! not at all. None of these are rejected; a [`Policy`] decides how each one
//! is turned into a finite value.

use crate::color::{Component, HEXP};

/// A value that can be coerced into a component.
#[derive(Clone, Debug, Default, PartialEq)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(untagged)
)]
pub enum Value {
    /// A plain number.
    Number(Component),
    /// Text holding a number (`"12"`, `"0x1f"`) or a percentage (`"50%"`).
    Text(String),
    /// No value was given.
    #[default]
    Missing,
}

impl Value {
    /// Returns true if this value is a percentage, i.e. text ending in `%`.
    pub fn is_percentage(&self) -> bool {
        matches!(self, Value::Text(text) if text.ends_with('%'))
    }

    /// Returns true if the value is a number or text that reads as a number
    /// or percentage. Missing values are considered numeric.
    pub fn is_numeric(&self) -> bool {
        match self {
            Value::Number(_) | Value::Missing => true,
            Value::Text(text) => text.ends_with('%') || !text_to_number(text).is_nan(),
        }
    }

    /// The numeric reading of this value without any policy applied. Missing
    /// values and unreadable text are NaN.
    pub fn to_number(&self) -> Component {
        match self {
            Value::Number(n) => *n,
            Value::Text(text) => text_to_number(text),
            Value::Missing => Component::NAN,
        }
    }

    /// Coerce this value using the given policy.
    pub fn coerce(&self, policy: &Policy) -> Component {
        let mut n = match self {
            Value::Text(text) if text.ends_with('%') => {
                let ratio = policy.percentage_ratio.unwrap_or(100.0);
                text_to_number(&text[..text.len() - 1]) / ratio
            }
            value => value.to_number(),
        };

        // NaN is kept through clamping so that it reaches its own fallback.
        if !n.is_nan() {
            if let Some(min) = policy.min {
                n = n.max(min);
            }
            if let Some(max) = policy.max {
                n = n.min(max);
            }
            if policy.integer {
                n = n.floor();
            }
        }

        if n.is_nan() {
            n = policy.nan_fallback.or(policy.min).unwrap_or(0.0);
        }

        if n.is_infinite() {
            n = policy.infinity_fallback.unwrap_or(0.0);
        }

        n
    }

    /// Coerce this value into a color channel.
    pub fn channel(&self) -> u8 {
        self.coerce(&Policy::CHANNEL) as u8
    }

    /// Coerce this value into an alpha channel.
    pub fn alpha(&self) -> u8 {
        self.coerce(&Policy::ALPHA) as u8
    }
}

macro_rules! impl_from_number {
    ($($t:ty),*) => {
        $(
            impl From<$t> for Value {
                fn from(value: $t) -> Self {
                    Value::Number(value as Component)
                }
            }
        )*
    };
}

impl_from_number!(f64, f32, i8, i16, i32, i64, u8, u16, u32, u64, usize);

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<&String> for Value {
    fn from(value: &String) -> Self {
        Value::Text(value.clone())
    }
}

impl From<&Value> for Value {
    fn from(value: &Value) -> Self {
        value.clone()
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        value.map_or(Value::Missing, Into::into)
    }
}

/// Describes how a [`Value`] is turned into a component.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Policy {
    /// Lower clamp bound.
    pub min: Option<Component>,
    /// Upper clamp bound.
    pub max: Option<Component>,
    /// Floor the value after clamping.
    pub integer: bool,
    /// Divisor applied to percentages. Defaults to 100.
    pub percentage_ratio: Option<Component>,
    /// Replacement for NaN. Falls back to `min`, then 0.
    pub nan_fallback: Option<Component>,
    /// Replacement for infinite values. Falls back to 0.
    pub infinity_fallback: Option<Component>,
}

impl Policy {
    /// Policy for red, green and blue channels.
    pub const CHANNEL: Policy = Policy {
        min: Some(0.0),
        max: Some(255.0),
        integer: true,
        percentage_ratio: Some(HEXP),
        nan_fallback: None,
        infinity_fallback: None,
    };

    /// Policy for the alpha channel. Unreadable alpha means fully opaque.
    pub const ALPHA: Policy = Policy::CHANNEL.nan_fallback(255.0).infinity_fallback(255.0);

    /// Policy for derived components on the 0-255 scale (saturation,
    /// lightness, value, cyan, magenta, yellow and key). Unlike channels
    /// they are not floored.
    pub const COMPONENT: Policy = Policy::new().range(0.0, 255.0).percentage_ratio(HEXP);

    /// A policy that only turns NaN and infinity into 0.
    pub const fn new() -> Self {
        Policy {
            min: None,
            max: None,
            integer: false,
            percentage_ratio: None,
            nan_fallback: None,
            infinity_fallback: None,
        }
    }

    /// Clamp values to `min..=max`.
    pub const fn range(mut self, min: Component, max: Component) -> Self {
        self.min = Some(min);
        self.max = Some(max);
        self
    }

    /// Floor values after clamping.
    pub const fn integer(mut self) -> Self {
        self.integer = true;
        self
    }

    /// Divide percentages by `ratio`.
    pub const fn percentage_ratio(mut self, ratio: Component) -> Self {
        self.percentage_ratio = Some(ratio);
        self
    }

    /// Replace NaN with `value`.
    pub const fn nan_fallback(mut self, value: Component) -> Self {
        self.nan_fallback = Some(value);
        self
    }

    /// Replace infinite values with `value`.
    pub const fn infinity_fallback(mut self, value: Component) -> Self {
        self.infinity_fallback = Some(value);
        self
    }
}

/// Coerce any value with the given policy.
pub fn coerce(value: impl Into<Value>, policy: &Policy) -> Component {
    value.into().coerce(policy)
}

/// Coerce a value into a red, green or blue channel. Unreadable values are 0.
pub fn coerce_channel(value: impl Into<Value>) -> u8 {
    value.into().channel()
}

/// Coerce a value into an alpha channel. Unreadable values are 255.
pub fn coerce_alpha(value: impl Into<Value>) -> u8 {
    value.into().alpha()
}

/// Read text as a number the way loosely typed input is usually read: blank
/// text is 0, `0x`/`0o`/`0b` prefixes select a radix and anything else that
/// is not a decimal literal is NaN.
fn text_to_number(text: &str) -> Component {
    let text = text.trim();

    if text.is_empty() {
        return 0.0;
    }

    let (sign, unsigned) = match text.as_bytes()[0] {
        b'-' => (-1.0, &text[1..]),
        b'+' => (1.0, &text[1..]),
        _ => (1.0, text),
    };

    if unsigned == "Infinity" {
        return sign * Component::INFINITY;
    }

    for (prefix, radix) in [("0x", 16), ("0o", 8), ("0b", 2)] {
        let digits = unsigned
            .strip_prefix(prefix)
            .or_else(|| unsigned.strip_prefix(&prefix.to_uppercase()));
        if let Some(digits) = digits {
            // Radix literals do not take a sign.
            if sign < 0.0 || unsigned.len() != text.len() {
                return Component::NAN;
            }
            return u64::from_str_radix(digits, radix).map_or(Component::NAN, |n| n as Component);
        }
    }

    // Rust accepts "inf" and "nan" literals, which are not numbers here.
    if unsigned
        .chars()
        .any(|c| c.is_ascii_alphabetic() && c != 'e' && c != 'E')
    {
        return Component::NAN;
    }

    text.parse::<Component>().unwrap_or(Component::NAN)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn channels_are_clamped_and_floored() {
        assert_eq!(coerce_channel(-5), 0);
        assert_eq!(coerce_channel(999), 255);
        assert_eq!(coerce_channel(12.9), 12);
        assert_eq!(coerce_channel(Component::NAN), 0);
        assert_eq!(coerce_channel(Component::INFINITY), 255);
        assert_eq!(coerce_channel(Component::NEG_INFINITY), 0);
        assert_eq!(coerce_channel(Value::Missing), 0);
    }

    #[test]
    fn alpha_defaults_to_opaque() {
        assert_eq!(coerce_alpha(Value::Missing), 255);
        assert_eq!(coerce_alpha(Component::NAN), 255);
        assert_eq!(coerce_alpha("garbage"), 255);
        assert_eq!(coerce_alpha(-1), 0);
        assert_eq!(coerce_alpha(127.5), 127);
    }

    #[test]
    fn percentages_use_the_channel_ratio() {
        assert_eq!(coerce_channel("50%"), 127);
        assert_eq!(coerce_channel("100%"), 255);
        assert_eq!(coerce_channel("0%"), 0);
        assert_eq!(coerce("50%", &Policy::new()), 0.5);
    }

    #[test]
    fn components_are_not_floored() {
        assert_eq!(coerce(127.5, &Policy::COMPONENT), 127.5);
        assert_eq!(coerce("50%", &Policy::COMPONENT), 127.5);
        assert_eq!(coerce(-1, &Policy::COMPONENT), 0.0);
        assert_eq!(coerce(Value::Missing, &Policy::COMPONENT), 0.0);
    }

    #[test]
    fn text_is_read_as_a_number() {
        assert_eq!(coerce_channel(" 12 "), 12);
        assert_eq!(coerce_channel("0x1f"), 31);
        assert_eq!(coerce_channel(""), 0);
        assert_eq!(coerce_channel("abc"), 0);
        assert_eq!(coerce_channel("nan"), 0);
        assert_eq!(coerce_channel("1e2"), 100);
    }

    #[test]
    fn fallbacks_without_bounds() {
        let policy = Policy::new();
        assert_eq!(coerce(Component::INFINITY, &policy), 0.0);
        assert_eq!(coerce(Value::Missing, &policy), 0.0);
        assert_eq!(coerce("-Infinity", &policy), 0.0);

        let policy = Policy::new().nan_fallback(0.5).infinity_fallback(1.0);
        assert_eq!(coerce(Value::Missing, &policy), 0.5);
        assert_eq!(coerce(Component::INFINITY, &policy), 1.0);
    }

    #[test]
    fn nan_falls_back_to_min() {
        let policy = Policy::new().range(10.0, 20.0);
        assert_eq!(coerce("x", &policy), 10.0);
        assert_eq!(coerce(15.5, &policy), 15.5);
        assert_eq!(coerce(15.5, &policy.integer()), 15.0);
    }

    #[test]
    fn numeric_detection() {
        assert!(Value::from(1).is_numeric());
        assert!(Value::from("20%").is_numeric());
        assert!(Value::from(" 3.5").is_numeric());
        assert!(Value::Missing.is_numeric());
        assert!(!Value::from("red").is_numeric());
        assert!(!Value::from("#ff0000").is_numeric());
    }

    #[test]
    fn options_become_missing() {
        assert_eq!(Value::from(None::<u8>), Value::Missing);
        assert_eq!(Value::from(Some(3u8)), Value::Number(3.0));
    }
}
