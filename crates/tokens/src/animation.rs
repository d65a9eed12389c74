use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AnimationError {
    #[error("animation shorthand is empty")]
    Empty,
    #[error("animation shorthand {0:?} does not name any keyframes")]
    MissingName(String),
    #[error("unbalanced parentheses in {0:?}")]
    Unbalanced(String),
}

const TIMING_KEYWORDS: &[&str] = &[
    "linear",
    "ease",
    "ease-in",
    "ease-out",
    "ease-in-out",
    "step-start",
    "step-end",
];

const OTHER_KEYWORDS: &[&str] = &[
    "normal",
    "reverse",
    "alternate",
    "alternate-reverse",
    "none",
    "forwards",
    "backwards",
    "both",
    "running",
    "paused",
];

/// A CSS `animation` shorthand, kept verbatim for emission and split into
/// the parts the theme cares about.
///
/// The keyframes name is the first word that is not a time, timing
/// function, iteration count or other shorthand keyword.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Animation {
    shorthand: String,
    keyframes: String,
    duration: Option<String>,
    timing: Option<String>,
    iterations: Option<String>,
}

impl Animation {
    /// Compose a shorthand from parts.
    pub fn new(
        keyframes: &str,
        duration: &str,
        timing: Option<&str>,
        iterations: Option<&str>,
    ) -> Self {
        let mut shorthand = format!("{keyframes} {duration}");
        for part in [timing, iterations].into_iter().flatten() {
            shorthand.push(' ');
            shorthand.push_str(part);
        }
        Self {
            shorthand,
            keyframes: keyframes.to_string(),
            duration: Some(duration.to_string()),
            timing: timing.map(str::to_string),
            iterations: iterations.map(str::to_string),
        }
    }

    pub fn shorthand(&self) -> &str {
        &self.shorthand
    }

    /// Name of the `@keyframes` block this animation plays.
    pub fn keyframes(&self) -> &str {
        &self.keyframes
    }

    pub fn duration(&self) -> Option<&str> {
        self.duration.as_deref()
    }

    pub fn timing(&self) -> Option<&str> {
        self.timing.as_deref()
    }

    pub fn iterations(&self) -> Option<&str> {
        self.iterations.as_deref()
    }
}

fn is_time(word: &str) -> bool {
    word.strip_suffix("ms")
        .or_else(|| word.strip_suffix('s'))
        .is_some_and(|n| n.parse::<f64>().is_ok())
}

fn is_timing_function(word: &str) -> bool {
    TIMING_KEYWORDS.contains(&word)
        || word.starts_with("cubic-bezier(")
        || word.starts_with("steps(")
}

fn is_iteration_count(word: &str) -> bool {
    word == "infinite" || word.parse::<f64>().is_ok()
}

/// Split on whitespace, keeping parenthesized groups such as
/// `cubic-bezier(0.4, 0, 0.6, 1)` together.
fn words(shorthand: &str) -> Result<Vec<String>, AnimationError> {
    let mut out = Vec::new();
    let mut current = String::new();
    let mut depth = 0usize;

    for ch in shorthand.chars() {
        match ch {
            '(' => depth += 1,
            ')' => {
                depth = depth
                    .checked_sub(1)
                    .ok_or_else(|| AnimationError::Unbalanced(shorthand.to_string()))?;
            }
            c if c.is_whitespace() && depth == 0 => {
                if !current.is_empty() {
                    out.push(std::mem::take(&mut current));
                }
                continue;
            }
            _ => {}
        }
        current.push(ch);
    }
    if depth != 0 {
        return Err(AnimationError::Unbalanced(shorthand.to_string()));
    }
    if !current.is_empty() {
        out.push(current);
    }
    Ok(out)
}

impl FromStr for Animation {
    type Err = AnimationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let words = words(s)?;
        if words.is_empty() {
            return Err(AnimationError::Empty);
        }

        let mut keyframes = None;
        let mut duration = None;
        let mut timing = None;
        let mut iterations = None;

        for word in words {
            // Later duplicates lose: a second time value is the delay.
            let slot = if is_time(&word) {
                &mut duration
            } else if is_timing_function(&word) {
                &mut timing
            } else if is_iteration_count(&word) {
                &mut iterations
            } else if OTHER_KEYWORDS.contains(&word.as_str()) {
                continue;
            } else {
                &mut keyframes
            };
            if slot.is_none() {
                *slot = Some(word);
            }
        }

        let keyframes = keyframes.ok_or_else(|| AnimationError::MissingName(s.to_string()))?;
        Ok(Self {
            shorthand: s.split_whitespace().collect::<Vec<_>>().join(" "),
            keyframes,
            duration,
            timing,
            iterations,
        })
    }
}

impl TryFrom<String> for Animation {
    type Error = AnimationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Animation> for String {
    fn from(animation: Animation) -> Self {
        animation.shorthand
    }
}

impl fmt::Display for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.shorthand)
    }
}
