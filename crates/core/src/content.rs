use std::fmt;
use std::path::PathBuf;

use globset::{Glob, GlobBuilder, GlobSet, GlobSetBuilder};

use crate::error::ConfigError;

/// A content-scan glob, compiled when the descriptor loads.
///
/// Patterns are relative to the scan root; a leading `./` is accepted and
/// ignored. `*` does not cross directory separators, `**` does.
#[derive(Debug, Clone)]
pub struct GlobPattern {
    raw: String,
    glob: Glob,
}

impl GlobPattern {
    pub fn new(raw: &str) -> Result<Self, ConfigError> {
        let normalized = normalize(raw);
        if normalized.is_empty() {
            return Err(ConfigError::EmptyGlob(raw.to_string()));
        }
        let glob = GlobBuilder::new(normalized)
            .literal_separator(true)
            .build()
            .map_err(|source| ConfigError::InvalidGlob {
                pattern: raw.to_string(),
                source,
            })?;
        Ok(Self {
            raw: raw.to_string(),
            glob,
        })
    }

    /// The pattern as written in the config.
    pub fn as_str(&self) -> &str {
        &self.raw
    }

    pub fn glob(&self) -> &Glob {
        &self.glob
    }

    /// Longest leading run of path components with no glob syntax. Only this
    /// directory needs walking to find every match (`src` for `src/**/*.rs`).
    pub fn base(&self) -> PathBuf {
        let mut base = PathBuf::new();
        for component in normalize(&self.raw).split('/') {
            if component.is_empty() || component.contains(['*', '?', '[', '{']) {
                break;
            }
            base.push(component);
        }
        if base.as_os_str().is_empty() {
            base.push(".");
        }
        base
    }
}

impl fmt::Display for GlobPattern {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.raw)
    }
}

fn normalize(raw: &str) -> &str {
    let mut pattern = raw.trim();
    while let Some(rest) = pattern.strip_prefix("./") {
        pattern = rest;
    }
    pattern
}

/// Compile all content globs into a single matcher.
pub fn build_glob_set(patterns: &[GlobPattern]) -> Result<GlobSet, ConfigError> {
    let mut builder = GlobSetBuilder::new();
    for pattern in patterns {
        builder.add(pattern.glob.clone());
    }
    builder.build().map_err(|source| ConfigError::InvalidGlob {
        pattern: patterns
            .iter()
            .map(GlobPattern::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        source,
    })
}
