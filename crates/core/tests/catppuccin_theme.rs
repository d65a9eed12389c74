//! End-to-end checks of the built-in Catppuccin descriptors: load, scan a
//! source tree, generate CSS.

use std::collections::BTreeSet;
use std::fs;

use catwind_core::{ConfigError, Generator, Scanner, ThemeDescriptor, ThemeVariant};
use catwind_tokens::{HexColor, KeyframeStop};

const PALETTE: &[(&str, &str)] = &[
    ("ctp-rosewater", "#f5e0dc"),
    ("ctp-flamingo", "#f2cdcd"),
    ("ctp-pink", "#f5c2e7"),
    ("ctp-mauve", "#cba6f7"),
    ("ctp-red", "#f38ba8"),
    ("ctp-maroon", "#eba0ac"),
    ("ctp-peach", "#fab387"),
    ("ctp-yellow", "#f9e2af"),
    ("ctp-green", "#a6e3a1"),
    ("ctp-teal", "#94e2d5"),
    ("ctp-sky", "#89dceb"),
    ("ctp-sapphire", "#74c7ec"),
    ("ctp-blue", "#89b4fa"),
    ("ctp-lavender", "#b4befe"),
    ("ctp-text", "#cdd6f4"),
    ("ctp-subtext1", "#bac2de"),
    ("ctp-subtext0", "#a6adc8"),
    ("ctp-overlay2", "#9399b2"),
    ("ctp-overlay1", "#7f849c"),
    ("ctp-overlay0", "#6c7086"),
    ("ctp-surface2", "#585b70"),
    ("ctp-surface1", "#45475a"),
    ("ctp-surface0", "#313244"),
    ("ctp-base", "#1e1e2e"),
    ("ctp-mantle", "#181825"),
    ("ctp-crust", "#11111b"),
];

fn basic() -> ThemeDescriptor {
    ThemeDescriptor::catppuccin(ThemeVariant::Basic).expect("built-in basic theme loads")
}

#[test]
fn empty_tree_still_emits_safelisted_classes() {
    let root = tempfile::tempdir().expect("tempdir");
    fs::create_dir(root.path().join("dist")).expect("create dist");

    let descriptor = basic();
    let report = Scanner::new(root.path(), &descriptor).scan();
    assert!(report.files.is_empty());
    assert!(report.candidates.is_empty());

    let generation = Generator::new(&descriptor).generate(&report.candidates);
    let css = &generation.css;
    assert!(css.contains(".animate-fade-in {"));
    assert!(css.contains("@keyframes fade-in"));
    assert!(css.contains(".animate-spin {"));
    assert!(css.contains(".backdrop-blur-sm {"));
    for (name, _) in PALETTE {
        for prefix in ["bg", "text", "border"] {
            assert!(
                css.contains(&format!(".{prefix}-{name} {{")),
                "missing .{prefix}-{name}"
            );
        }
    }
    assert!(generation.unmatched_literals.is_empty());
    assert_eq!(generation.class_count, PALETTE.len() * 3 + 3);
}

#[test]
fn palette_round_trips_unchanged() {
    let descriptor = basic();
    let colors = &descriptor.theme_extensions().colors;
    assert_eq!(colors.len(), PALETTE.len());
    for (name, hex) in PALETTE {
        let expected: HexColor = hex.parse().expect("palette hex");
        assert_eq!(colors.get(*name), Some(&expected), "{name}");
        assert_eq!(descriptor.tokens().colors.get(*name), Some(&expected), "{name}");
    }

    let css = Generator::new(&descriptor).generate(&BTreeSet::new()).css;
    assert!(css.contains(".bg-ctp-mauve {\n  background-color: #cba6f7;\n}"));
    assert!(css.contains(".text-ctp-red {\n  color: #f38ba8;\n}"));
    assert!(css.contains(".border-ctp-surface0 {\n  border-color: #313244;\n}"));
}

#[test]
fn keyframes_are_well_formed_and_referenced() {
    for variant in [ThemeVariant::Basic, ThemeVariant::Enhanced] {
        let descriptor = ThemeDescriptor::catppuccin(variant).expect("built-in theme loads");
        let tokens = descriptor.tokens();
        for (name, frames) in &tokens.keyframes {
            assert!(!frames.is_empty(), "{variant}: {name} has no stops");
            let stops: Vec<KeyframeStop> = frames.stops().map(|(stop, _)| stop).collect();
            assert!(stops.windows(2).all(|w| w[0] < w[1]), "{variant}: {name} unsorted");
            for stop in stops {
                assert!((0.0..=100.0).contains(&stop.as_percent()));
            }
        }
        for (name, animation) in &tokens.animation {
            assert!(
                tokens.keyframes.contains_key(animation.keyframes()),
                "{variant}: animation {name} plays missing keyframes"
            );
        }
    }
}

#[test]
fn invalid_hex_aborts_load() {
    let err = ThemeDescriptor::from_json(include_str!("fixtures/broken-color.json"))
        .expect_err("#zzzzzz must not load");
    assert!(matches!(err, ConfigError::InvalidColor { ref name, .. } if name == "ctp-broken"));
    assert!(err.to_string().contains("#zzzzzz"));
}

#[test]
fn scanned_classes_are_generated_with_variants_and_opacity() {
    let root = tempfile::tempdir().expect("tempdir");
    let components = root.path().join("src/components");
    fs::create_dir_all(&components).expect("create src/components");
    fs::write(components.join("navbar.rs"), include_str!("fixtures/navbar.rs")).expect("write");
    fs::write(root.path().join("README.md"), "bg-ctp-peach/50").expect("write");

    let descriptor = basic();
    let report = Scanner::new(root.path(), &descriptor).scan();
    assert_eq!(report.files.len(), 1);
    assert!(report.candidates.contains("hover:text-ctp-blue"));
    assert!(!report.candidates.contains("bg-ctp-peach/50"));

    let css = Generator::new(&descriptor).generate(&report.candidates).css;
    assert!(css.contains(".bg-ctp-base\\/80 {\n  background-color: rgb(30 30 46 / 0.8);"));
    assert!(css.contains(".hover\\:text-ctp-blue:hover {\n  color: #89b4fa;"));
    assert!(css.contains(
        ".font-mono {\n  font-family: \"JetBrains Mono\", \"Fira Code\", Consolas, monospace;"
    ));
    assert!(!css.contains("font-light"));
    assert!(!css.contains("bg-ctp-peach\\/50"));
}

#[test]
fn enhanced_variant_adds_tokens_and_variant_safelist() {
    let descriptor =
        ThemeDescriptor::catppuccin(ThemeVariant::Enhanced).expect("built-in enhanced loads");
    let css = Generator::new(&descriptor).generate(&BTreeSet::new()).css;

    assert!(css.contains(".hover\\:bg-ctp-mauve:hover {"));
    assert!(css.contains(".focus\\:text-ctp-lavender:focus {"));
    assert!(!css.contains(".hover\\:bg-ctp-red:hover"));
    assert!(css.contains(".shadow-ctp-glow {\n  box-shadow: 0 0 20px rgb(203 166 247 / 0.3);"));
    assert!(css.contains(".backdrop-blur-xs {\n  backdrop-filter: blur(2px);"));
    assert!(css.contains("@keyframes glow"));
    assert!(css.contains("box-shadow: 0 0 24px rgb(203 166 247 / 0.5);"));
    assert!(css.contains(".bg-ctp-aurora {\n  background-image: linear-gradient("));
}

#[test]
fn retention_agrees_with_force_emitted_classes() {
    for variant in [ThemeVariant::Basic, ThemeVariant::Enhanced] {
        let descriptor = ThemeDescriptor::catppuccin(variant).expect("built-in theme loads");
        let emitted = Generator::new(&descriptor).emitted_classes(&BTreeSet::new());
        for class in &emitted {
            assert!(
                descriptor.safelist().retains(class),
                "{variant}: {class} is emitted but not retained"
            );
        }
    }

    let enhanced =
        ThemeDescriptor::catppuccin(ThemeVariant::Enhanced).expect("built-in enhanced loads");
    assert!(enhanced.safelist().retains("hover:bg-ctp-mauve"));
    assert!(enhanced.safelist().retains("focus:text-ctp-lavender"));
    assert!(!enhanced.safelist().retains("active:bg-ctp-mauve"));
    assert!(!enhanced.safelist().retains("hover:bg-ctp-red"));
    assert!(!basic().safelist().retains("hover:bg-ctp-mauve"));
}

#[test]
fn effective_config_dumps_and_reloads() {
    let descriptor =
        ThemeDescriptor::catppuccin(ThemeVariant::Enhanced).expect("built-in enhanced loads");
    let json = descriptor.config().to_json_pretty().expect("serialize");
    let reloaded = ThemeDescriptor::from_json(&json).expect("reload");
    assert_eq!(reloaded.theme_extensions(), descriptor.theme_extensions());
    assert_eq!(reloaded.safelist().len(), descriptor.safelist().len());
    assert_eq!(
        reloaded.content_globs().len(),
        descriptor.content_globs().len()
    );
}
