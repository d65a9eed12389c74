use std::collections::BTreeSet;

use regex::Regex;

use crate::error::ConfigError;
use crate::variant::Variant;

/// One force-emitted class, or a family of them.
#[derive(Debug, Clone)]
pub enum SafelistEntry {
    Literal(String),
    Pattern { regex: Regex, variants: Vec<Variant> },
}

impl SafelistEntry {
    pub fn literal(class: &str) -> Result<Self, ConfigError> {
        if class.is_empty() || class.contains(char::is_whitespace) {
            return Err(ConfigError::InvalidLiteral(class.to_string()));
        }
        Ok(SafelistEntry::Literal(class.to_string()))
    }

    /// Compile a pattern entry.
    ///
    /// Every top-level alternative must start with `^`: matching is a
    /// substring search, so an unanchored branch like the `ctp-` in
    /// `^bg-.*|ctp-` would also keep unrelated classes that merely contain it.
    pub fn pattern<S: AsRef<str>>(pattern: &str, variants: &[S]) -> Result<Self, ConfigError> {
        let regex = Regex::new(pattern).map_err(|source| ConfigError::InvalidPattern {
            pattern: pattern.to_string(),
            source,
        })?;
        if !top_level_branches(pattern).all(|branch| branch.starts_with('^')) {
            return Err(ConfigError::UnanchoredPattern(pattern.to_string()));
        }
        let variants = variants
            .iter()
            .map(|name| {
                Variant::from_name(name.as_ref()).ok_or_else(|| ConfigError::UnknownVariant {
                    pattern: pattern.to_string(),
                    variant: name.as_ref().to_string(),
                })
            })
            .collect::<Result<Vec<_>, _>>()?;
        Ok(SafelistEntry::Pattern { regex, variants })
    }

    /// A pattern entry also keeps `variant:class` when `variant` is one of
    /// its own variants and the pattern keeps `class`.
    pub fn matches(&self, class: &str) -> bool {
        match self {
            SafelistEntry::Literal(literal) => literal == class,
            SafelistEntry::Pattern { regex, variants } => {
                if regex.is_match(class) {
                    return true;
                }
                class.split_once(':').is_some_and(|(prefix, base)| {
                    Variant::from_name(prefix).is_some_and(|v| variants.contains(&v))
                        && regex.is_match(base)
                })
            }
        }
    }
}

/// Split a regex at its top-level `|`, ignoring alternations inside groups
/// and bracket classes. Only meaningful for a pattern that already compiled.
fn top_level_branches(pattern: &str) -> impl Iterator<Item = &str> {
    let mut branches = Vec::new();
    let mut start = 0;
    let mut depth = 0usize;
    let mut class_depth = 0usize;
    let mut chars = pattern.char_indices().peekable();

    while let Some((at, ch)) = chars.next() {
        match ch {
            '\\' => {
                chars.next();
            }
            '[' => {
                class_depth += 1;
                // `[]` and `[^]` open a class whose first member is `]`.
                if chars.peek().is_some_and(|&(_, c)| c == '^') {
                    chars.next();
                }
                if class_depth == 1 && chars.peek().is_some_and(|&(_, c)| c == ']') {
                    chars.next();
                }
            }
            ']' if class_depth > 0 => class_depth -= 1,
            _ if class_depth > 0 => {}
            '(' => depth += 1,
            ')' => depth = depth.saturating_sub(1),
            '|' if depth == 0 => {
                branches.push(&pattern[start..at]);
                start = at + 1;
            }
            _ => {}
        }
    }
    branches.push(&pattern[start..]);
    branches.into_iter()
}

/// Classes kept regardless of what the content scan finds.
#[derive(Debug, Clone, Default)]
pub struct Safelist {
    entries: Vec<SafelistEntry>,
}

impl Safelist {
    pub fn new(entries: Vec<SafelistEntry>) -> Self {
        Self { entries }
    }

    pub fn entries(&self) -> &[SafelistEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether `class` must survive unused-class elimination: it equals a
    /// literal entry or some pattern matches it. Entries are tried in order
    /// and the first hit wins.
    pub fn retains(&self, class: &str) -> bool {
        self.entries.iter().any(|entry| entry.matches(class))
    }

    pub fn literals(&self) -> impl Iterator<Item = &str> {
        self.entries.iter().filter_map(|entry| match entry {
            SafelistEntry::Literal(class) => Some(class.as_str()),
            SafelistEntry::Pattern { .. } => None,
        })
    }

    /// Pick the classes of `universe` that pattern entries keep, plus their
    /// variant-prefixed forms when the entry asks for variants.
    pub fn select<'a, I>(&self, universe: I) -> BTreeSet<String>
    where
        I: IntoIterator<Item = &'a str>,
    {
        let mut selected = BTreeSet::new();
        for class in universe {
            for entry in &self.entries {
                let SafelistEntry::Pattern { variants, .. } = entry else {
                    continue;
                };
                if !entry.matches(class) {
                    continue;
                }
                selected.insert(class.to_string());
                for variant in variants {
                    selected.insert(format!("{variant}:{class}"));
                }
            }
        }
        selected
    }
}
