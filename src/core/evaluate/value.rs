use std::{fmt, sync::LazyLock};

use indexmap::IndexMap;
use regex::Regex;

/// Unsigned decimal numeric literal, as accepted by JavaScript `Number()`.
static DECIMAL_LITERAL: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[+-]?(?:\d+\.?\d*|\.\d+)(?:[eE][+-]?\d+)?$").unwrap()
});

/// A literal value produced by constant folding.
#[derive(Debug, Clone, PartialEq)]
pub enum StaticValue {
    Str(String),
    Num(f64),
    Bool(bool),
    Null,
    Undefined,
    Array(Vec<StaticValue>),
    /// Object literal; property order follows the source.
    Object(IndexMap<String, StaticValue>),
}

impl StaticValue {
    /// `null` and `undefined`, the values skipped by `??`.
    pub fn is_nullish(&self) -> bool {
        matches!(self, StaticValue::Null | StaticValue::Undefined)
    }

    /// JavaScript truthiness.
    pub fn is_truthy(&self) -> bool {
        match self {
            StaticValue::Str(s) => !s.is_empty(),
            StaticValue::Num(n) => *n != 0.0 && !n.is_nan(),
            StaticValue::Bool(b) => *b,
            StaticValue::Null | StaticValue::Undefined => false,
            StaticValue::Array(_) | StaticValue::Object(_) => true,
        }
    }

    /// JavaScript `ToNumber` for primitives.
    pub fn to_number(&self) -> f64 {
        match self {
            StaticValue::Num(n) => *n,
            StaticValue::Bool(true) => 1.0,
            StaticValue::Bool(false) | StaticValue::Null => 0.0,
            StaticValue::Str(s) => string_to_number(s),
            StaticValue::Undefined | StaticValue::Array(_) | StaticValue::Object(_) => f64::NAN,
        }
    }

    /// Whether `+` with this operand concatenates instead of adding.
    pub fn concatenates(&self) -> bool {
        matches!(
            self,
            StaticValue::Str(_) | StaticValue::Array(_) | StaticValue::Object(_)
        )
    }

    pub fn as_object(&self) -> Option<&IndexMap<String, StaticValue>> {
        match self {
            StaticValue::Object(props) => Some(props),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            StaticValue::Str(s) => Some(s),
            _ => None,
        }
    }
}

/// JavaScript `StringToNumber`.
///
/// Rust's float parser also accepts `inf` and `nan` spellings and rejects
/// `0x`/`0o`/`0b` literals, so both are handled here.
fn string_to_number(s: &str) -> f64 {
    let trimmed = s.trim();
    if trimmed.is_empty() {
        return 0.0;
    }

    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }

    let radix = match trimmed.get(..2) {
        Some("0x" | "0X") => Some(16),
        Some("0o" | "0O") => Some(8),
        Some("0b" | "0B") => Some(2),
        _ => None,
    };
    if let Some(radix) = radix {
        let digits = &trimmed[2..];
        if digits.is_empty() {
            return f64::NAN;
        }
        return digits
            .chars()
            .try_fold(0.0, |acc: f64, c| {
                c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
            })
            .unwrap_or(f64::NAN);
    }

    if DECIMAL_LITERAL.is_match(trimmed) {
        trimmed.parse().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

/// Same output as JavaScript `String(value)`.
impl fmt::Display for StaticValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StaticValue::Str(s) => f.write_str(s),
            StaticValue::Num(n) => f.write_str(&format_number(*n)),
            StaticValue::Bool(b) => write!(f, "{}", b),
            StaticValue::Null => f.write_str("null"),
            StaticValue::Undefined => f.write_str("undefined"),
            StaticValue::Array(items) => {
                for (i, item) in items.iter().enumerate() {
                    if i > 0 {
                        f.write_str(",")?;
                    }
                    // Array join renders holes and nullish items as empty strings
                    if !item.is_nullish() {
                        write!(f, "{}", item)?;
                    }
                }
                Ok(())
            }
            StaticValue::Object(_) => f.write_str("[object Object]"),
        }
    }
}

/// Format a number the way JavaScript prints it.
pub fn format_number(n: f64) -> String {
    if n.is_nan() {
        return "NaN".to_string();
    }
    if n.is_infinite() {
        return if n > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if n == 0.0 {
        return "0".to_string();
    }

    let abs = n.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let formatted = format!("{:e}", n);
        return match formatted.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => formatted,
        };
    }
    if n.fract() == 0.0 {
        format!("{:.0}", n)
    } else {
        format!("{}", n)
    }
}
