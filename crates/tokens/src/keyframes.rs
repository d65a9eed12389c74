use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// CSS property name → value, in declaration order.
pub type Declarations = IndexMap<String, String>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum KeyframeStopError {
    #[error("expected a percentage, 'from' or 'to', got {0:?}")]
    NotAPercentage(String),
    #[error("stop {0:?} is outside 0%..=100%")]
    OutOfRange(String),
    #[error("stop {0:?} has more than two decimal places")]
    TooPrecise(String),
    #[error("stop {0} is declared more than once")]
    Duplicate(KeyframeStop),
    #[error("keyframes need at least one stop")]
    Empty,
}

/// A keyframe offset, stored in hundredths of a percent so stops order and
/// compare exactly (`50%` and `50.00%` are the same stop). Offsets finer
/// than that are rejected rather than rounded.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct KeyframeStop(u16);

impl KeyframeStop {
    pub const FROM: Self = Self(0);
    pub const TO: Self = Self(10_000);

    /// A whole-number stop; values above 100 saturate to `100%`.
    pub const fn percent(value: u8) -> Self {
        let value = if value > 100 { 100 } else { value };
        Self(value as u16 * 100)
    }

    pub fn as_percent(self) -> f64 {
        f64::from(self.0) / 100.0
    }
}

impl FromStr for KeyframeStop {
    type Err = KeyframeStopError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        match trimmed {
            "from" => return Ok(Self::FROM),
            "to" => return Ok(Self::TO),
            _ => {}
        }

        let not_a_percentage = || KeyframeStopError::NotAPercentage(s.to_string());
        let number = trimmed
            .strip_suffix('%')
            .map(str::trim)
            .filter(|n| n.chars().all(|c| c.is_ascii_digit() || matches!(c, '.' | '-' | '+')))
            .ok_or_else(not_a_percentage)?;
        let value: f64 = number.parse().map_err(|_| not_a_percentage())?;
        if !(0.0..=100.0).contains(&value) {
            return Err(KeyframeStopError::OutOfRange(s.to_string()));
        }
        if number.split_once('.').is_some_and(|(_, frac)| frac.len() > 2) {
            return Err(KeyframeStopError::TooPrecise(s.to_string()));
        }
        Ok(Self((value * 100.0).round() as u16))
    }
}

impl TryFrom<String> for KeyframeStop {
    type Error = KeyframeStopError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<KeyframeStop> for String {
    fn from(stop: KeyframeStop) -> Self {
        stop.to_string()
    }
}

impl fmt::Display for KeyframeStop {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let whole = self.0 / 100;
        let frac = self.0 % 100;
        if frac == 0 {
            write!(f, "{whole}%")
        } else if frac % 10 == 0 {
            write!(f, "{whole}.{}%", frac / 10)
        } else {
            write!(f, "{whole}.{frac:02}%")
        }
    }
}

/// An `@keyframes` body: sorted stops, each with its declarations.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Keyframes {
    stops: BTreeMap<KeyframeStop, Declarations>,
}

impl Keyframes {
    /// Build from `(selector, declarations)` pairs as written in a config.
    ///
    /// A selector may list several stops (`"0%, 100%"`); each gets a copy of
    /// the declarations. Repeating a stop across selectors is an error.
    pub fn from_selectors<I, S>(selectors: I) -> Result<Self, KeyframeStopError>
    where
        I: IntoIterator<Item = (S, Declarations)>,
        S: AsRef<str>,
    {
        let mut stops = BTreeMap::new();
        for (selector, declarations) in selectors {
            for part in selector.as_ref().split(',') {
                let stop: KeyframeStop = part.parse()?;
                if stops.insert(stop, declarations.clone()).is_some() {
                    return Err(KeyframeStopError::Duplicate(stop));
                }
            }
        }
        if stops.is_empty() {
            return Err(KeyframeStopError::Empty);
        }
        Ok(Self { stops })
    }

    /// Add a stop, replacing any declarations already at that offset.
    pub fn with_stop(mut self, stop: KeyframeStop, declarations: &[(&str, &str)]) -> Self {
        let declarations = declarations
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect();
        self.stops.insert(stop, declarations);
        self
    }

    pub fn stops(&self) -> impl Iterator<Item = (KeyframeStop, &Declarations)> {
        self.stops.iter().map(|(stop, decls)| (*stop, decls))
    }

    pub fn len(&self) -> usize {
        self.stops.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stops.is_empty()
    }
}
