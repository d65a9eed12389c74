use std::path::PathBuf;

use catwind_tokens::{AnimationError, HexColorError, KeyframeStopError, TokenCategory};
use thiserror::Error;

/// Everything that can make a theme descriptor fail to load.
///
/// A descriptor is either fully valid or not constructed at all; there is
/// no partially-applied theme.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("malformed config: {0}")]
    Json(#[from] serde_json::Error),
    #[error("content glob {0:?} is empty")]
    EmptyGlob(String),
    #[error("invalid content glob {pattern:?}: {source}")]
    InvalidGlob {
        pattern: String,
        #[source]
        source: globset::Error,
    },
    #[error("invalid safelist pattern {pattern:?}: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },
    #[error("safelist pattern {0:?} must be anchored to the start of the class name with '^'")]
    UnanchoredPattern(String),
    #[error("invalid safelist class {0:?}")]
    InvalidLiteral(String),
    #[error("unknown variant {variant:?} on safelist pattern {pattern:?}")]
    UnknownVariant { pattern: String, variant: String },
    #[error("{category}: invalid token name {name:?}")]
    InvalidTokenName {
        category: TokenCategory,
        name: String,
    },
    #[error("{category}: token {name:?} is declared more than once")]
    DuplicateToken {
        category: TokenCategory,
        name: String,
    },
    #[error("colors.{name}: {source}")]
    InvalidColor {
        name: String,
        #[source]
        source: HexColorError,
    },
    #[error("keyframes.{name}: {source}")]
    InvalidKeyframes {
        name: String,
        #[source]
        source: KeyframeStopError,
    },
    #[error("animation.{name}: {source}")]
    InvalidAnimation {
        name: String,
        #[source]
        source: AnimationError,
    },
    #[error("animation.{animation} plays unknown keyframes {keyframes:?}")]
    UnknownKeyframes { animation: String, keyframes: String },
    #[error("fontFamily.{0}: font stack is empty")]
    EmptyFontStack(String),
}
