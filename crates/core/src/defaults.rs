//! The generator's built-in token set. A descriptor's `theme.extend` block
//! is merged on top of this, name by name.

use catwind_tokens::{Animation, FontStack, KeyframeStop, Keyframes, ThemeExtension};
use indexmap::IndexMap;

const BLUR: &[(&str, &str)] = &[
    ("none", "0"),
    ("sm", "4px"),
    ("DEFAULT", "8px"),
    ("md", "12px"),
    ("lg", "16px"),
    ("xl", "24px"),
    ("2xl", "40px"),
    ("3xl", "64px"),
];

const SHADOW: &[(&str, &str)] = &[
    ("sm", "0 1px 2px 0 rgb(0 0 0 / 0.05)"),
    (
        "DEFAULT",
        "0 1px 3px 0 rgb(0 0 0 / 0.1), 0 1px 2px -1px rgb(0 0 0 / 0.1)",
    ),
    (
        "md",
        "0 4px 6px -1px rgb(0 0 0 / 0.1), 0 2px 4px -2px rgb(0 0 0 / 0.1)",
    ),
    (
        "lg",
        "0 10px 15px -3px rgb(0 0 0 / 0.1), 0 4px 6px -4px rgb(0 0 0 / 0.1)",
    ),
    (
        "xl",
        "0 20px 25px -5px rgb(0 0 0 / 0.1), 0 8px 10px -6px rgb(0 0 0 / 0.1)",
    ),
    ("2xl", "0 25px 50px -12px rgb(0 0 0 / 0.25)"),
    ("inner", "inset 0 2px 4px 0 rgb(0 0 0 / 0.05)"),
    ("none", "none"),
];

const FONTS: &[(&str, &[&str])] = &[
    (
        "sans",
        &[
            "ui-sans-serif",
            "system-ui",
            "sans-serif",
            "Apple Color Emoji",
            "Segoe UI Emoji",
            "Segoe UI Symbol",
            "Noto Color Emoji",
        ],
    ),
    (
        "serif",
        &["ui-serif", "Georgia", "Cambria", "Times New Roman", "Times", "serif"],
    ),
    (
        "mono",
        &[
            "ui-monospace",
            "SFMono-Regular",
            "Menlo",
            "Monaco",
            "Consolas",
            "Liberation Mono",
            "Courier New",
            "monospace",
        ],
    ),
];

fn table(pairs: &[(&str, &str)]) -> IndexMap<String, String> {
    pairs
        .iter()
        .map(|(name, value)| ((*name).to_string(), (*value).to_string()))
        .collect()
}

fn animations() -> IndexMap<String, Animation> {
    [
        Animation::new("spin", "1s", Some("linear"), Some("infinite")),
        Animation::new(
            "ping",
            "1s",
            Some("cubic-bezier(0, 0, 0.2, 1)"),
            Some("infinite"),
        ),
        Animation::new(
            "pulse",
            "2s",
            Some("cubic-bezier(0.4, 0, 0.6, 1)"),
            Some("infinite"),
        ),
        Animation::new("bounce", "1s", None, Some("infinite")),
    ]
    .into_iter()
    .map(|anim| (anim.keyframes().to_string(), anim))
    .collect()
}

fn keyframes() -> IndexMap<String, Keyframes> {
    let spin = Keyframes::default().with_stop(KeyframeStop::TO, &[("transform", "rotate(360deg)")]);

    let ping_out = &[("transform", "scale(2)"), ("opacity", "0")];
    let ping = Keyframes::default()
        .with_stop(KeyframeStop::percent(75), ping_out)
        .with_stop(KeyframeStop::TO, ping_out);

    let pulse = Keyframes::default()
        .with_stop(KeyframeStop::FROM, &[("opacity", "1")])
        .with_stop(KeyframeStop::percent(50), &[("opacity", ".5")])
        .with_stop(KeyframeStop::TO, &[("opacity", "1")]);

    let bounce_up = &[
        ("transform", "translateY(-25%)"),
        ("animationTimingFunction", "cubic-bezier(0.8, 0, 1, 1)"),
    ];
    let bounce = Keyframes::default()
        .with_stop(KeyframeStop::FROM, bounce_up)
        .with_stop(
            KeyframeStop::percent(50),
            &[
                ("transform", "none"),
                ("animationTimingFunction", "cubic-bezier(0, 0, 0.2, 1)"),
            ],
        )
        .with_stop(KeyframeStop::TO, bounce_up);

    [
        ("spin", spin),
        ("ping", ping),
        ("pulse", pulse),
        ("bounce", bounce),
    ]
    .into_iter()
    .map(|(name, frames)| (name.to_string(), frames))
    .collect()
}

fn fonts() -> IndexMap<String, FontStack> {
    FONTS
        .iter()
        .filter_map(|(name, families)| {
            FontStack::new(families.iter().copied()).map(|stack| ((*name).to_string(), stack))
        })
        .collect()
}

/// Tokens available before any extension is applied.
pub fn default_tokens() -> ThemeExtension {
    ThemeExtension {
        colors: IndexMap::new(),
        animation: animations(),
        keyframes: keyframes(),
        background_image: IndexMap::new(),
        backdrop_blur: table(BLUR),
        box_shadow: table(SHADOW),
        font_family: fonts(),
    }
}
