//! Theme descriptors for a utility-class CSS generator.
//!
//! A [`ThemeDescriptor`] says which files to scan for class names, which
//! classes to keep no matter what the scan finds, and which design tokens
//! to add to the generator's defaults. [`Scanner`] and [`Generator`] consume
//! it to produce a stylesheet.

pub mod builtin;
pub mod config;
pub mod content;
pub mod css;
pub mod defaults;
pub mod descriptor;
pub mod error;
pub mod generator;
pub mod safelist;
pub mod scanner;
pub mod variant;

pub use catwind_tokens;

pub use builtin::ThemeVariant;
pub use config::RawConfig;
pub use content::GlobPattern;
pub use descriptor::ThemeDescriptor;
pub use error::ConfigError;
pub use generator::{Generation, Generator, Rule};
pub use safelist::{Safelist, SafelistEntry};
pub use scanner::{ScanReport, Scanner};
pub use variant::Variant;
