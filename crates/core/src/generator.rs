use std::collections::{BTreeSet, HashSet};

use catwind_tokens::{HexColor, ThemeExtension};
use indexmap::IndexMap;
use tracing::{debug, warn};

use crate::css::{CssWriter, escape_class};
use crate::descriptor::ThemeDescriptor;
use crate::variant::Variant;

const COLOR_UTILITIES: &[(&str, &str)] = &[
    ("bg", "background-color"),
    ("text", "color"),
    ("border", "border-color"),
];

/// Output of one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generation {
    pub css: String,
    /// Number of class rules emitted (keyframes blocks not counted).
    pub class_count: usize,
    /// Safelist literals that no token can produce.
    pub unmatched_literals: Vec<String>,
}

/// A resolved utility class, ready to print.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rule {
    pub class: String,
    pub selector: String,
    pub declarations: Vec<(&'static str, String)>,
    /// `@keyframes` block this rule depends on.
    pub keyframes: Option<String>,
}

/// Turns class names into CSS using a descriptor's merged tokens.
pub struct Generator<'a> {
    descriptor: &'a ThemeDescriptor,
    minify: bool,
}

impl<'a> Generator<'a> {
    pub fn new(descriptor: &'a ThemeDescriptor) -> Self {
        Self {
            descriptor,
            minify: false,
        }
    }

    pub fn minify(mut self, minify: bool) -> Self {
        self.minify = minify;
        self
    }

    fn tokens(&self) -> &ThemeExtension {
        self.descriptor.tokens()
    }

    /// Every class (without variants) the merged tokens can produce.
    pub fn universe(&self) -> Vec<String> {
        let tokens = self.tokens();
        let mut classes = Vec::new();

        for (prefix, _) in COLOR_UTILITIES {
            for name in tokens.colors.keys() {
                classes.push(format!("{prefix}-{name}"));
            }
        }
        for name in tokens.background_image.keys() {
            classes.push(format!("bg-{name}"));
        }
        for name in tokens.animation.keys() {
            classes.push(format!("animate-{name}"));
        }
        for name in tokens.backdrop_blur.keys() {
            classes.push(suffixed("backdrop-blur", name));
        }
        for name in tokens.box_shadow.keys() {
            classes.push(suffixed("shadow", name));
        }
        for name in tokens.font_family.keys() {
            classes.push(format!("font-{name}"));
        }
        classes
    }

    /// Resolve `[variant:]*utility[/opacity]`, or `None` if no token
    /// produces it.
    pub fn resolve(&self, class: &str) -> Option<Rule> {
        let mut parts: Vec<&str> = class.split(':').collect();
        let utility = parts.pop()?;
        let variants = parts
            .into_iter()
            .map(Variant::from_name)
            .collect::<Option<Vec<_>>>()?;

        let (utility, opacity) = match utility.rsplit_once('/') {
            Some((base, alpha)) => (base, Some(parse_opacity(alpha)?)),
            None => (utility, None),
        };

        let (declarations, keyframes) = self.declarations(utility, opacity)?;
        let mut selector = format!(".{}", escape_class(class));
        for variant in variants.iter().rev() {
            selector = variant.apply(&selector);
        }

        Some(Rule {
            class: class.to_string(),
            selector,
            declarations,
            keyframes,
        })
    }

    #[allow(clippy::type_complexity)]
    fn declarations(
        &self,
        utility: &str,
        opacity: Option<f32>,
    ) -> Option<(Vec<(&'static str, String)>, Option<String>)> {
        let tokens = self.tokens();

        for (prefix, property) in COLOR_UTILITIES {
            let Some(name) = utility
                .strip_prefix(prefix)
                .and_then(|rest| rest.strip_prefix('-'))
            else {
                continue;
            };
            if let Some(color) = tokens.colors.get(name) {
                return Some((vec![(*property, color_value(*color, opacity))], None));
            }
        }

        // Everything below is not a color and takes no opacity modifier.
        if opacity.is_some() {
            return None;
        }

        if let Some(name) = utility.strip_prefix("bg-")
            && let Some(image) = tokens.background_image.get(name)
        {
            return Some((vec![("background-image", image.clone())], None));
        }

        if let Some(name) = utility.strip_prefix("animate-")
            && let Some(animation) = tokens.animation.get(name)
        {
            return Some((
                vec![("animation", animation.shorthand().to_string())],
                Some(animation.keyframes().to_string()),
            ));
        }

        if let Some(size) = lookup(&tokens.backdrop_blur, utility, "backdrop-blur") {
            return Some((vec![("backdrop-filter", format!("blur({size})"))], None));
        }

        if let Some(shadow) = lookup(&tokens.box_shadow, utility, "shadow") {
            return Some((vec![("box-shadow", shadow.clone())], None));
        }

        if let Some(name) = utility.strip_prefix("font-")
            && let Some(stack) = tokens.font_family.get(name)
        {
            return Some((vec![("font-family", stack.to_css())], None));
        }

        None
    }

    /// The classes a run emits: scanned candidates, safelist literals, and
    /// universe classes kept by safelist patterns.
    pub fn emitted_classes(&self, scanned: &BTreeSet<String>) -> BTreeSet<String> {
        let safelist = self.descriptor.safelist();
        let universe = self.universe();

        let mut classes = scanned.clone();
        classes.extend(safelist.literals().map(str::to_string));
        classes.extend(safelist.select(universe.iter().map(String::as_str)));
        classes
    }

    pub fn generate(&self, scanned: &BTreeSet<String>) -> Generation {
        let safelist = self.descriptor.safelist();
        let literals: HashSet<&str> = safelist.literals().collect();

        let mut writer = CssWriter::new(self.minify);
        let mut emitted_keyframes = HashSet::new();
        let mut class_count = 0;
        let mut unmatched_literals = Vec::new();

        for class in self.emitted_classes(scanned) {
            let Some(rule) = self.resolve(&class) else {
                if literals.contains(class.as_str()) {
                    warn!(class = %class, "safelisted class has no matching token");
                    unmatched_literals.push(class);
                }
                continue;
            };

            if let Some(name) = &rule.keyframes
                && emitted_keyframes.insert(name.clone())
                && let Some(frames) = self.tokens().keyframes.get(name)
            {
                writer.keyframes(name, frames);
            }
            writer.rule(&rule.selector, &rule.declarations);
            class_count += 1;
        }

        debug!(class_count, scanned = scanned.len(), "css generated");
        Generation {
            css: writer.finish(),
            class_count,
            unmatched_literals,
        }
    }
}

/// `prefix` alone selects the `DEFAULT` token, `prefix-name` selects `name`.
fn lookup<'t>(
    table: &'t IndexMap<String, String>,
    utility: &str,
    prefix: &str,
) -> Option<&'t String> {
    let rest = utility.strip_prefix(prefix)?;
    if rest.is_empty() {
        return table.get("DEFAULT");
    }
    let name = rest.strip_prefix('-')?;
    if name == "DEFAULT" {
        return None;
    }
    table.get(name)
}

fn suffixed(prefix: &str, name: &str) -> String {
    if name == "DEFAULT" {
        prefix.to_string()
    } else {
        format!("{prefix}-{name}")
    }
}

fn parse_opacity(alpha: &str) -> Option<f32> {
    let percent: u8 = alpha.parse().ok()?;
    (percent <= 100).then(|| f32::from(percent) / 100.0)
}

fn color_value(color: HexColor, opacity: Option<f32>) -> String {
    match opacity {
        Some(alpha) => color.with_alpha(alpha),
        None => color.to_hex(),
    }
}
