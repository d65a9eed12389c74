use std::fmt;

use indexmap::IndexMap;
use serde::Serialize;

use crate::{Animation, FontStack, HexColor, Keyframes};

/// The theme sections a descriptor can extend. The wire names are fixed:
/// consumers look categories up by these exact keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum TokenCategory {
    Colors,
    Animation,
    Keyframes,
    BackgroundImage,
    BackdropBlur,
    BoxShadow,
    FontFamily,
}

impl TokenCategory {
    pub const ALL: [TokenCategory; 7] = [
        TokenCategory::Colors,
        TokenCategory::Animation,
        TokenCategory::Keyframes,
        TokenCategory::BackgroundImage,
        TokenCategory::BackdropBlur,
        TokenCategory::BoxShadow,
        TokenCategory::FontFamily,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            TokenCategory::Colors => "colors",
            TokenCategory::Animation => "animation",
            TokenCategory::Keyframes => "keyframes",
            TokenCategory::BackgroundImage => "backgroundImage",
            TokenCategory::BackdropBlur => "backdropBlur",
            TokenCategory::BoxShadow => "boxShadow",
            TokenCategory::FontFamily => "fontFamily",
        }
    }
}

impl fmt::Display for TokenCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Validated design tokens, one ordered table per category.
///
/// Used both for a descriptor's own `theme.extend` block and for the
/// merged table (generator defaults with the extension applied on top).
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ThemeExtension {
    pub colors: IndexMap<String, HexColor>,
    pub animation: IndexMap<String, Animation>,
    pub keyframes: IndexMap<String, Keyframes>,
    pub background_image: IndexMap<String, String>,
    pub backdrop_blur: IndexMap<String, String>,
    pub box_shadow: IndexMap<String, String>,
    pub font_family: IndexMap<String, FontStack>,
}

impl ThemeExtension {
    /// Apply `other` on top of `self`: new names are appended, existing
    /// names take `other`'s value and keep their position.
    pub fn extend_with(&mut self, other: &ThemeExtension) {
        fn merge<V: Clone>(into: &mut IndexMap<String, V>, from: &IndexMap<String, V>) {
            for (name, value) in from {
                into.insert(name.clone(), value.clone());
            }
        }

        merge(&mut self.colors, &other.colors);
        merge(&mut self.animation, &other.animation);
        merge(&mut self.keyframes, &other.keyframes);
        merge(&mut self.background_image, &other.background_image);
        merge(&mut self.backdrop_blur, &other.backdrop_blur);
        merge(&mut self.box_shadow, &other.box_shadow);
        merge(&mut self.font_family, &other.font_family);
    }

    pub fn len(&self, category: TokenCategory) -> usize {
        match category {
            TokenCategory::Colors => self.colors.len(),
            TokenCategory::Animation => self.animation.len(),
            TokenCategory::Keyframes => self.keyframes.len(),
            TokenCategory::BackgroundImage => self.background_image.len(),
            TokenCategory::BackdropBlur => self.backdrop_blur.len(),
            TokenCategory::BoxShadow => self.box_shadow.len(),
            TokenCategory::FontFamily => self.font_family.len(),
        }
    }

    pub fn is_empty(&self) -> bool {
        TokenCategory::ALL.iter().all(|c| self.len(*c) == 0)
    }
}
