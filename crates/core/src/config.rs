//! On-disk config shape, before validation.
//!
//! The JSON layout follows the utility generator's own config file:
//!
//! ```json
//! {
//!   "content": ["./src/**/*.rs"],
//!   "safelist": [{ "pattern": "^(bg|text|border)-ctp-.*" }, "animate-spin"],
//!   "theme": { "extend": { "colors": { "ctp-mauve": "#cba6f7" } } }
//! }
//! ```
//!
//! Unknown top-level keys (`mode`, `plugins`, ...) are ignored.

use std::fmt;
use std::marker::PhantomData;
use std::path::Path;

use catwind_tokens::Declarations;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};

use crate::error::ConfigError;

/// An ordered `name → value` table as written in the config.
///
/// Unlike a map, a repeated name survives deserialization so validation can
/// report it instead of silently keeping the last value.
#[derive(Debug, Clone, PartialEq)]
pub struct Entries<V>(pub Vec<(String, V)>);

impl<V> Default for Entries<V> {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl<V> Entries<V> {
    pub fn push(&mut self, name: impl Into<String>, value: V) {
        self.0.push((name.into(), value));
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &V)> {
        self.0.iter().map(|(name, value)| (name.as_str(), value))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    fn append(&mut self, other: Entries<V>) {
        self.0.extend(other.0);
    }
}

impl<V> IntoIterator for Entries<V> {
    type Item = (String, V);
    type IntoIter = std::vec::IntoIter<(String, V)>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<V: Serialize> Serialize for Entries<V> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.0.len()))?;
        for (name, value) in &self.0 {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}

impl<'de, V: Deserialize<'de>> Deserialize<'de> for Entries<V> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        struct EntriesVisitor<V>(PhantomData<V>);

        impl<'de, V: Deserialize<'de>> Visitor<'de> for EntriesVisitor<V> {
            type Value = Entries<V>;

            fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str("a map of token names to values")
            }

            fn visit_map<A: MapAccess<'de>>(self, mut access: A) -> Result<Self::Value, A::Error> {
                let mut entries = Vec::with_capacity(access.size_hint().unwrap_or(0));
                while let Some(entry) = access.next_entry::<String, V>()? {
                    entries.push(entry);
                }
                Ok(Entries(entries))
            }
        }

        deserializer.deserialize_map(EntriesVisitor(PhantomData))
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawSafelistEntry {
    Literal(String),
    Pattern {
        pattern: String,
        #[serde(default, skip_serializing_if = "Vec::is_empty")]
        variants: Vec<String>,
    },
}

/// `fontFamily` values may be a single name or a list.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawFontStack {
    One(String),
    Many(Vec<String>),
}

impl RawFontStack {
    pub fn into_families(self) -> Vec<String> {
        match self {
            RawFontStack::One(family) => vec![family],
            RawFontStack::Many(families) => families,
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct RawExtension {
    #[serde(skip_serializing_if = "Entries::is_empty")]
    pub colors: Entries<String>,
    #[serde(skip_serializing_if = "Entries::is_empty")]
    pub animation: Entries<String>,
    #[serde(skip_serializing_if = "Entries::is_empty")]
    pub keyframes: Entries<Entries<Declarations>>,
    #[serde(skip_serializing_if = "Entries::is_empty")]
    pub background_image: Entries<String>,
    #[serde(skip_serializing_if = "Entries::is_empty")]
    pub backdrop_blur: Entries<String>,
    #[serde(skip_serializing_if = "Entries::is_empty")]
    pub box_shadow: Entries<String>,
    #[serde(skip_serializing_if = "Entries::is_empty")]
    pub font_family: Entries<RawFontStack>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawTheme {
    pub extend: RawExtension,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct RawConfig {
    pub content: Vec<String>,
    pub safelist: Vec<RawSafelistEntry>,
    pub theme: RawTheme,
}

impl RawConfig {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json(&json)
    }

    /// Layer `other` onto this config.
    ///
    /// Content globs and safelist entries are appended unless already
    /// present. Token tables are appended as-is, so a name defined on both
    /// sides surfaces as a duplicate when the result is validated.
    pub fn overlay(&mut self, other: RawConfig) {
        for glob in other.content {
            if !self.content.contains(&glob) {
                self.content.push(glob);
            }
        }
        for entry in other.safelist {
            if !self.safelist.contains(&entry) {
                self.safelist.push(entry);
            }
        }

        let ours = &mut self.theme.extend;
        let theirs = other.theme.extend;
        ours.colors.append(theirs.colors);
        ours.animation.append(theirs.animation);
        ours.keyframes.append(theirs.keyframes);
        ours.background_image.append(theirs.background_image);
        ours.backdrop_blur.append(theirs.backdrop_blur);
        ours.box_shadow.append(theirs.box_shadow);
        ours.font_family.append(theirs.font_family);
    }

    pub fn to_json_pretty(&self) -> Result<String, ConfigError> {
        Ok(serde_json::to_string_pretty(self)?)
    }
}
