use std::path::Path;

use catwind_tokens::{Animation, FontStack, HexColor, Keyframes, ThemeExtension, TokenCategory};
use globset::GlobSet;
use indexmap::IndexMap;
use tracing::debug;

use crate::config::{Entries, RawConfig, RawSafelistEntry};
use crate::content::{GlobPattern, build_glob_set};
use crate::defaults::default_tokens;
use crate::error::ConfigError;
use crate::safelist::{Safelist, SafelistEntry};

/// A validated theme descriptor: where to scan, what to always keep, and
/// which tokens to add to the generator's defaults.
///
/// Built once per run and never mutated. Construction validates everything
/// up front, so holding a `ThemeDescriptor` means every glob, pattern and
/// token in it is well-formed.
#[derive(Debug, Clone)]
pub struct ThemeDescriptor {
    content: Vec<GlobPattern>,
    content_set: GlobSet,
    safelist: Safelist,
    extension: ThemeExtension,
    tokens: ThemeExtension,
    config: RawConfig,
}

impl ThemeDescriptor {
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        Self::from_config(RawConfig::from_json(json)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_config(RawConfig::load(path)?)
    }

    pub fn from_config(config: RawConfig) -> Result<Self, ConfigError> {
        let content = config
            .content
            .iter()
            .map(|raw| GlobPattern::new(raw))
            .collect::<Result<Vec<_>, _>>()?;
        let content_set = build_glob_set(&content)?;

        let safelist = config
            .safelist
            .iter()
            .map(|entry| match entry {
                RawSafelistEntry::Literal(class) => SafelistEntry::literal(class),
                RawSafelistEntry::Pattern { pattern, variants } => {
                    SafelistEntry::pattern(pattern, variants.as_slice())
                }
            })
            .collect::<Result<Vec<_>, _>>()?;

        let extension = validate_extension(&config)?;

        let mut tokens = default_tokens();
        tokens.extend_with(&extension);
        for (name, animation) in &tokens.animation {
            if !tokens.keyframes.contains_key(animation.keyframes()) {
                return Err(ConfigError::UnknownKeyframes {
                    animation: name.clone(),
                    keyframes: animation.keyframes().to_string(),
                });
            }
        }
        // Colors and background images share the `bg-` utility prefix.
        if let Some(name) = tokens
            .background_image
            .keys()
            .find(|name| tokens.colors.contains_key(*name))
        {
            return Err(ConfigError::DuplicateToken {
                category: TokenCategory::BackgroundImage,
                name: name.clone(),
            });
        }

        debug!(
            globs = content.len(),
            safelist = safelist.len(),
            colors = extension.colors.len(),
            "theme descriptor loaded"
        );

        Ok(Self {
            content,
            content_set,
            safelist: Safelist::new(safelist),
            extension,
            tokens,
            config,
        })
    }

    /// Scan roots, in declaration order.
    pub fn content_globs(&self) -> &[GlobPattern] {
        &self.content
    }

    /// All content globs compiled into one matcher.
    pub fn content_matcher(&self) -> &GlobSet {
        &self.content_set
    }

    pub fn safelist(&self) -> &Safelist {
        &self.safelist
    }

    /// The descriptor's own `theme.extend` tokens, without defaults.
    pub fn theme_extensions(&self) -> &ThemeExtension {
        &self.extension
    }

    /// Default tokens with the extension merged on top; what the generator
    /// actually resolves classes against.
    pub fn tokens(&self) -> &ThemeExtension {
        &self.tokens
    }

    /// The config this descriptor was validated from.
    pub fn config(&self) -> &RawConfig {
        &self.config
    }
}

fn check_name(category: TokenCategory, name: &str) -> Result<(), ConfigError> {
    if name.is_empty() || name.contains(char::is_whitespace) {
        return Err(ConfigError::InvalidTokenName {
            category,
            name: name.to_string(),
        });
    }
    Ok(())
}

/// Validate one category: names must be well-formed and unique, values go
/// through `convert`.
fn unique<V, T, F>(
    category: TokenCategory,
    entries: &Entries<V>,
    mut convert: F,
) -> Result<IndexMap<String, T>, ConfigError>
where
    F: FnMut(&str, &V) -> Result<T, ConfigError>,
{
    let mut out = IndexMap::with_capacity(entries.len());
    for (name, value) in entries.iter() {
        check_name(category, name)?;
        if out.contains_key(name) {
            return Err(ConfigError::DuplicateToken {
                category,
                name: name.to_string(),
            });
        }
        let value = convert(name, value)?;
        out.insert(name.to_string(), value);
    }
    Ok(out)
}

fn validate_extension(config: &RawConfig) -> Result<ThemeExtension, ConfigError> {
    let raw = &config.theme.extend;
    let verbatim = |_: &str, value: &String| Ok::<_, ConfigError>(value.clone());

    let colors = unique(TokenCategory::Colors, &raw.colors, |name, value| {
        value
            .parse::<HexColor>()
            .map_err(|source| ConfigError::InvalidColor {
                name: name.to_string(),
                source,
            })
    })?;

    let animation = unique(TokenCategory::Animation, &raw.animation, |name, value| {
        value
            .parse::<Animation>()
            .map_err(|source| ConfigError::InvalidAnimation {
                name: name.to_string(),
                source,
            })
    })?;

    let keyframes = unique(TokenCategory::Keyframes, &raw.keyframes, |name, stops| {
        Keyframes::from_selectors(stops.iter().map(|(stop, decls)| (stop, decls.clone()))).map_err(
            |source| ConfigError::InvalidKeyframes {
                name: name.to_string(),
                source,
            },
        )
    })?;

    let font_family = unique(TokenCategory::FontFamily, &raw.font_family, |name, stack| {
        FontStack::new(stack.clone().into_families())
            .ok_or_else(|| ConfigError::EmptyFontStack(name.to_string()))
    })?;

    Ok(ThemeExtension {
        colors,
        animation,
        keyframes,
        background_image: unique(
            TokenCategory::BackgroundImage,
            &raw.background_image,
            verbatim,
        )?,
        backdrop_blur: unique(TokenCategory::BackdropBlur, &raw.backdrop_blur, verbatim)?,
        box_shadow: unique(TokenCategory::BoxShadow, &raw.box_shadow, verbatim)?,
        font_family,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessors_expose_each_section() {
        let descriptor = ThemeDescriptor::from_json(
            r##"{
                "content": ["./src/**/*.rs", "./dist/**/*.html"],
                "safelist": [{ "pattern": "^(bg|text|border)-ctp-.*" }, "animate-fade-in"],
                "theme": { "extend": {
                    "colors": { "ctp-mauve": "#cba6f7" },
                    "animation": { "fade-in": "fade-in 0.3s ease-out" },
                    "keyframes": { "fade-in": {
                        "0%": { "opacity": "0" },
                        "100%": { "opacity": "1" }
                    } }
                } }
            }"##,
        )
        .unwrap();

        let globs: Vec<&str> = descriptor
            .content_globs()
            .iter()
            .map(GlobPattern::as_str)
            .collect();
        assert_eq!(globs, ["./src/**/*.rs", "./dist/**/*.html"]);
        assert_eq!(descriptor.safelist().len(), 2);
        assert_eq!(
            descriptor.theme_extensions().colors["ctp-mauve"],
            HexColor::rgb(0xcb, 0xa6, 0xf7)
        );
        assert!(descriptor.tokens().animation.contains_key("spin"));
        assert!(descriptor.tokens().animation.contains_key("fade-in"));
        assert!(!descriptor.theme_extensions().animation.contains_key("spin"));
    }

    #[test]
    fn invalid_hex_fails_load() {
        let err = ThemeDescriptor::from_json(
            r##"{ "theme": { "extend": { "colors": { "ctp-broken": "#zzzzzz" } } } }"##,
        )
        .unwrap_err();
        assert!(
            matches!(err, ConfigError::InvalidColor { ref name, .. } if name == "ctp-broken")
        );
    }

    #[test]
    fn duplicate_token_fails_load() {
        let err = ThemeDescriptor::from_json(
            r##"{ "theme": { "extend": { "colors": {
                "ctp-red": "#f38ba8", "ctp-red": "#f38ba8"
            } } } }"##,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateToken {
                category: TokenCategory::Colors,
                ref name,
            } if name == "ctp-red"
        ));
    }

    #[test]
    fn overlay_redefining_a_token_fails_load() {
        let mut config = RawConfig::from_json(
            r##"{ "theme": { "extend": { "boxShadow": { "ctp-card": "0 1px 2px black" } } } }"##,
        )
        .unwrap();
        config.overlay(
            RawConfig::from_json(
                r##"{ "theme": { "extend": { "boxShadow": { "ctp-card": "none" } } } }"##,
            )
            .unwrap(),
        );
        let err = ThemeDescriptor::from_config(config).unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateToken {
                category: TokenCategory::BoxShadow,
                ref name,
            } if name == "ctp-card"
        ));
    }

    #[test]
    fn background_image_sharing_a_color_name_fails_load() {
        let err = ThemeDescriptor::from_json(
            r##"{
                "safelist": ["bg-ctp-x"],
                "theme": { "extend": {
                    "colors": { "ctp-x": "#000000" },
                    "backgroundImage": { "ctp-x": "linear-gradient(red, blue)" }
                } }
            }"##,
        )
        .unwrap_err();
        assert!(matches!(
            err,
            ConfigError::DuplicateToken {
                category: TokenCategory::BackgroundImage,
                ref name,
            } if name == "ctp-x"
        ));
    }

    #[test]
    fn animation_without_keyframes_fails_load() {
        let err = ThemeDescriptor::from_json(
            r#"{ "theme": { "extend": { "animation": {
                "wiggle": "wiggle 1s ease-in-out infinite"
            } } } }"#,
        )
        .unwrap_err();
        assert!(
            matches!(err, ConfigError::UnknownKeyframes { ref keyframes, .. } if keyframes == "wiggle")
        );
    }

    #[test]
    fn animation_may_use_default_keyframes() {
        let descriptor = ThemeDescriptor::from_json(
            r#"{ "theme": { "extend": { "animation": {
                "spin-slow": "spin 3s linear infinite"
            } } } }"#,
        )
        .unwrap();
        assert_eq!(descriptor.tokens().animation["spin-slow"].keyframes(), "spin");
    }

    #[test]
    fn out_of_range_stop_fails_load() {
        let err = ThemeDescriptor::from_json(
            r#"{ "theme": { "extend": { "keyframes": {
                "grow": { "150%": { "opacity": "1" } }
            } } } }"#,
        )
        .unwrap_err();
        assert!(matches!(err, ConfigError::InvalidKeyframes { .. }));
    }

    #[test]
    fn bad_glob_or_pattern_fails_load() {
        assert!(matches!(
            ThemeDescriptor::from_json(r#"{ "content": ["./src/[a-"] }"#),
            Err(ConfigError::InvalidGlob { .. })
        ));
        assert!(matches!(
            ThemeDescriptor::from_json(r#"{ "safelist": [{ "pattern": "^(bg" }] }"#),
            Err(ConfigError::InvalidPattern { .. })
        ));
        assert!(matches!(
            ThemeDescriptor::from_json(r#"{ "safelist": [{ "pattern": "ctp-.*" }] }"#),
            Err(ConfigError::UnanchoredPattern(_))
        ));
    }

    #[test]
    fn alternation_with_an_unanchored_branch_fails_load() {
        assert!(matches!(
            ThemeDescriptor::from_json(r#"{ "safelist": [{ "pattern": "^bg-ctp-.*|ctp-" }] }"#),
            Err(ConfigError::UnanchoredPattern(_))
        ));
    }

    #[test]
    fn empty_font_stack_and_bad_names_fail_load() {
        assert!(matches!(
            ThemeDescriptor::from_json(
                r#"{ "theme": { "extend": { "fontFamily": { "mono": [] } } } }"#
            ),
            Err(ConfigError::EmptyFontStack(_))
        ));
        assert!(matches!(
            ThemeDescriptor::from_json(
                r#"{ "theme": { "extend": { "boxShadow": { "soft glow": "none" } } } }"#
            ),
            Err(ConfigError::InvalidTokenName { .. })
        ));
    }

    #[test]
    fn extension_overrides_default_font() {
        let descriptor = ThemeDescriptor::from_json(
            r#"{ "theme": { "extend": { "fontFamily": {
                "mono": ["JetBrains Mono", "monospace"]
            } } } }"#,
        )
        .unwrap();
        assert_eq!(
            descriptor.tokens().font_family["mono"].families(),
            ["JetBrains Mono", "monospace"]
        );
        assert!(descriptor.tokens().font_family.contains_key("sans"));
    }
}
