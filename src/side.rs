use std::fmt;

use serde::{Deserialize, Serialize};

use crate::{get_env_var_option, Error};

pub const ENV_VAR_MAX_SIDE: &str = "TRIANGLE_MAX_SIDE";

/// inclusive range of accepted side lengths
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Bounds {
    pub min: u32,
    pub max: u32,
}

impl Bounds {
    pub const DEFAULT: Self = Self { min: 1, max: 200 };

    pub fn new(min: u32, max: u32) -> Result<Self, Error> {
        if min == 0 || min > max {
            return Err(Error::Bounds { min, max });
        }
        Ok(Self { min, max })
    }

    pub fn with_max(self, max: u32) -> Result<Self, Error> {
        Self::new(self.min, max)
    }

    /// default bounds, with the upper bound taken from `TRIANGLE_MAX_SIDE` if set
    pub fn from_env() -> Result<Self, Error> {
        let Some(max) = get_env_var_option(ENV_VAR_MAX_SIDE)? else {
            return Ok(Self::DEFAULT);
        };
        let max = max
            .trim()
            .parse()
            .map_err(|_| Error::EnvVarFormat(ENV_VAR_MAX_SIDE, max.clone()))?;
        Self::DEFAULT.with_max(max)
    }

    /// bounds from the environment, with an explicit upper bound taking precedence
    pub fn configured(max_side: Option<u32>) -> Result<Self, Error> {
        let bounds = Self::from_env()?;
        match max_side {
            Some(max) => bounds.with_max(max),
            None => Ok(bounds),
        }
    }

    pub fn contains(&self, len: u32) -> bool {
        (self.min..=self.max).contains(&len)
    }
}
impl Default for Bounds {
    fn default() -> Self {
        Self::DEFAULT
    }
}

/// a side length that passed validation
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(transparent)]
pub struct Side(u32);

impl Side {
    pub fn new(len: u32, bounds: Bounds) -> Result<Self, InvalidSide> {
        if len == 0 {
            return Err(InvalidSide::NonPositive(0));
        }
        if len < bounds.min {
            return Err(InvalidSide::TooSmall {
                len,
                min: bounds.min,
            });
        }
        if len > bounds.max {
            return Err(InvalidSide::TooLarge {
                len: len.into(),
                max: bounds.max,
            });
        }
        Ok(Self(len))
    }

    pub fn get(self) -> u32 {
        self.0
    }
}
impl TryFrom<u32> for Side {
    type Error = InvalidSide;

    fn try_from(len: u32) -> Result<Self, Self::Error> {
        Self::new(len, Bounds::DEFAULT)
    }
}
impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum InvalidSide {
    #[error("missing value")]
    Missing,
    #[error("not a number: {0}")]
    NotNumeric(String),
    #[error("not a finite number: {0}")]
    NotFinite(f64),
    #[error("not an integer: {0}")]
    Fractional(f64),
    #[error("not positive: {0}")]
    NonPositive(i64),
    #[error("{len} is below the minimum of {min}")]
    TooSmall { len: u32, min: u32 },
    #[error("{len} exceeds the maximum of {max}")]
    TooLarge { len: i64, max: u32 },
}

/// a side length as handed in by a caller, before any validation
///
/// Deserializes from any JSON value. `null` becomes `Missing`, integers become
/// `Int` (or `Float` if they do not fit into `i64`), strings stay `Text` even if
/// they look like numbers.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSide {
    Missing,
    Int(i64),
    Float(f64),
    Text(String),
    Other(serde_json::Value),
}

impl RawSide {
    /// interpret a textual token, e.g. a command line argument or a csv cell
    pub fn parse_arg(s: &str) -> Self {
        let t = s.trim();
        if t.is_empty() {
            return Self::Missing;
        }
        if let Ok(i) = t.parse::<i64>() {
            return Self::Int(i);
        }
        match t.parse::<f64>() {
            Ok(f) => Self::Float(f),
            Err(_) => Self::Text(s.to_owned()),
        }
    }

    pub fn validate(&self, bounds: Bounds) -> Result<Side, InvalidSide> {
        match self {
            RawSide::Missing => Err(InvalidSide::Missing),
            RawSide::Int(i) => validate_int(*i, bounds),
            RawSide::Float(f) => validate_float(*f, bounds),
            RawSide::Text(s) => Err(InvalidSide::NotNumeric(format!("{s:?}"))),
            RawSide::Other(v) => Err(InvalidSide::NotNumeric(v.to_string())),
        }
    }
}

fn validate_int(i: i64, bounds: Bounds) -> Result<Side, InvalidSide> {
    if i <= 0 {
        return Err(InvalidSide::NonPositive(i));
    }
    match u32::try_from(i) {
        Ok(len) => Side::new(len, bounds),
        Err(_) => Err(InvalidSide::TooLarge {
            len: i,
            max: bounds.max,
        }),
    }
}

fn validate_float(f: f64, bounds: Bounds) -> Result<Side, InvalidSide> {
    if !f.is_finite() {
        return Err(InvalidSide::NotFinite(f));
    }
    if f.fract() != 0.0 {
        return Err(InvalidSide::Fractional(f));
    }
    // saturating cast, exact for every value that can pass the bounds
    validate_int(f as i64, bounds)
}

impl fmt::Display for RawSide {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RawSide::Missing => Ok(()),
            RawSide::Int(i) => write!(f, "{i}"),
            RawSide::Float(x) => write!(f, "{x}"),
            RawSide::Text(s) => write!(f, "{s}"),
            RawSide::Other(v) => write!(f, "{v}"),
        }
    }
}

macro_rules! raw_side_from_lossless_int {
    ($($t:ty),*) => {$(
        impl From<$t> for RawSide {
            fn from(i: $t) -> Self {
                Self::Int(i64::from(i))
            }
        }
    )*};
}
raw_side_from_lossless_int!(i8, i16, i32, i64, u8, u16, u32);

macro_rules! raw_side_from_wide_int {
    ($($t:ty),*) => {$(
        impl From<$t> for RawSide {
            fn from(i: $t) -> Self {
                match i64::try_from(i) {
                    Ok(i) => Self::Int(i),
                    Err(_) => Self::Float(i as f64),
                }
            }
        }
    )*};
}
raw_side_from_wide_int!(i128, isize, u64, u128, usize);

impl From<f64> for RawSide {
    fn from(f: f64) -> Self {
        Self::Float(f)
    }
}
impl From<f32> for RawSide {
    fn from(f: f32) -> Self {
        Self::Float(f.into())
    }
}
impl From<bool> for RawSide {
    fn from(b: bool) -> Self {
        Self::Other(serde_json::Value::Bool(b))
    }
}
impl From<&str> for RawSide {
    fn from(s: &str) -> Self {
        Self::Text(s.to_owned())
    }
}
impl From<String> for RawSide {
    fn from(s: String) -> Self {
        Self::Text(s)
    }
}
impl<T: Into<RawSide>> From<Option<T>> for RawSide {
    fn from(o: Option<T>) -> Self {
        o.map_or(Self::Missing, Into::into)
    }
}
impl From<serde_json::Value> for RawSide {
    fn from(v: serde_json::Value) -> Self {
        use serde_json::Value;
        match v {
            Value::Null => Self::Missing,
            Value::Number(n) => match (n.as_i64(), n.as_f64()) {
                (Some(i), _) => Self::Int(i),
                (None, Some(f)) => Self::Float(f),
                (None, None) => Self::Other(Value::Number(n)),
            },
            Value::String(s) => Self::Text(s),
            v => Self::Other(v),
        }
    }
}
