use std::io::Write;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use catwind_core::catwind_tokens::TokenCategory;
use catwind_core::{Generator, Scanner, ThemeDescriptor, ThemeVariant};
use clap::{Args, ValueEnum};
use tracing::info;

/// Looked up in the root when neither `--config` nor `CATWIND_CONFIG` is set.
pub const DEFAULT_CONFIG_FILE: &str = "catwind.json";

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum VariantArg {
    Basic,
    Enhanced,
}

impl From<VariantArg> for ThemeVariant {
    fn from(arg: VariantArg) -> Self {
        match arg {
            VariantArg::Basic => ThemeVariant::Basic,
            VariantArg::Enhanced => ThemeVariant::Enhanced,
        }
    }
}

#[derive(Debug, Clone, Args)]
pub struct ThemeArgs {
    /// Descriptor JSON file.
    #[arg(long, env = "CATWIND_CONFIG")]
    pub config: Option<PathBuf>,

    /// Built-in theme used when no config file is found.
    #[arg(long, value_enum, default_value_t = VariantArg::Basic)]
    pub variant: VariantArg,

    /// Directory content globs are resolved against.
    #[arg(long, default_value = ".")]
    pub root: PathBuf,
}

/// Where the descriptor came from, for messages.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Source {
    File(PathBuf),
    Builtin(ThemeVariant),
}

impl std::fmt::Display for Source {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Source::File(path) => write!(f, "{}", path.display()),
            Source::Builtin(variant) => write!(f, "built-in catppuccin ({variant})"),
        }
    }
}

/// Explicit path first, then `catwind.json` in the root, then the built-in.
pub fn resolve_source(args: &ThemeArgs) -> Source {
    if let Some(path) = &args.config {
        return Source::File(path.clone());
    }
    let candidate = args.root.join(DEFAULT_CONFIG_FILE);
    if candidate.is_file() {
        return Source::File(candidate);
    }
    Source::Builtin(args.variant.into())
}

pub fn load(args: &ThemeArgs) -> Result<(ThemeDescriptor, Source)> {
    let source = resolve_source(args);
    let descriptor = match &source {
        Source::File(path) => ThemeDescriptor::load(path),
        Source::Builtin(variant) => ThemeDescriptor::catppuccin(*variant),
    }
    .with_context(|| format!("invalid theme descriptor: {source}"))?;
    Ok((descriptor, source))
}

pub fn build(
    args: &ThemeArgs,
    output: Option<&Path>,
    minify: bool,
    stdout: &mut impl Write,
) -> Result<()> {
    let (descriptor, source) = load(args)?;
    let report = Scanner::new(&args.root, &descriptor).scan();
    let generation = Generator::new(&descriptor)
        .minify(minify)
        .generate(&report.candidates);

    match output {
        Some(path) => std::fs::write(path, &generation.css)
            .with_context(|| format!("failed to write {}", path.display()))?,
        None => stdout.write_all(generation.css.as_bytes())?,
    }

    info!(
        source = %source,
        files = report.files.len(),
        classes = generation.class_count,
        "stylesheet generated"
    );
    Ok(())
}

pub fn check(args: &ThemeArgs, out: &mut impl Write) -> Result<()> {
    let (descriptor, source) = load(args)?;
    writeln!(out, "ok: {source}")?;
    writeln!(out, "  content globs: {}", descriptor.content_globs().len())?;
    writeln!(out, "  safelist entries: {}", descriptor.safelist().len())?;
    let extension = descriptor.theme_extensions();
    for category in TokenCategory::ALL {
        writeln!(out, "  {category}: {}", extension.len(category))?;
    }
    Ok(())
}

pub fn match_classes(args: &ThemeArgs, classes: &[String], out: &mut impl Write) -> Result<()> {
    let (descriptor, _) = load(args)?;
    let safelist = descriptor.safelist();
    for class in classes {
        let verdict = if safelist.retains(class) { "kept" } else { "not safelisted" };
        writeln!(out, "{class}: {verdict}")?;
    }
    Ok(())
}

pub fn dump(args: &ThemeArgs, out: &mut impl Write) -> Result<()> {
    let (descriptor, _) = load(args)?;
    writeln!(out, "{}", descriptor.config().to_json_pretty()?)?;
    Ok(())
}
