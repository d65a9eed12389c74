//! Built-in Catppuccin Mocha descriptors.

use std::fmt;
use std::str::FromStr;

use crate::config::RawConfig;
use crate::descriptor::ThemeDescriptor;
use crate::error::ConfigError;

const CATPPUCCIN: &str = include_str!("../themes/catppuccin.json");
const CATPPUCCIN_ENHANCED: &str = include_str!("../themes/catppuccin-enhanced.json");

/// Which flavour of the built-in theme to load.
///
/// `Enhanced` is `Basic` plus an overlay adding motion, shadow, blur and
/// gradient tokens. The overlay may only add names; redefining a basic
/// token is a load error.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeVariant {
    #[default]
    Basic,
    Enhanced,
}

impl ThemeVariant {
    pub fn name(self) -> &'static str {
        match self {
            ThemeVariant::Basic => "basic",
            ThemeVariant::Enhanced => "enhanced",
        }
    }

    pub fn raw_config(self) -> Result<RawConfig, ConfigError> {
        let mut config = RawConfig::from_json(CATPPUCCIN)?;
        if self == ThemeVariant::Enhanced {
            config.overlay(RawConfig::from_json(CATPPUCCIN_ENHANCED)?);
        }
        Ok(config)
    }
}

impl fmt::Display for ThemeVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for ThemeVariant {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "basic" => Ok(ThemeVariant::Basic),
            "enhanced" => Ok(ThemeVariant::Enhanced),
            other => Err(format!("unknown theme variant {other:?}")),
        }
    }
}

impl ThemeDescriptor {
    pub fn catppuccin(variant: ThemeVariant) -> Result<Self, ConfigError> {
        Self::from_config(variant.raw_config()?)
    }
}
