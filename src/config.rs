//! Settings record filled by the command line (and optionally a config file).
//!
//! Defaults follow the classic Fresh Eye usage text: 15-word context,
//! sensitivity 600, wordcount coefficient 50, log written to `fresheye.log`.

use crate::error::{FreshEyeError, Result};
use std::fmt;
use std::path::PathBuf;
use std::str::FromStr;

pub const DEFAULT_CONTEXT_SIZE: u32 = 15;
pub const MIN_CONTEXT_SIZE: u32 = 2;
pub const DEFAULT_SENSITIVITY: u32 = 600;
pub const DEFAULT_WORDCOUNT_USE: u8 = 50;
pub const MAX_WORDCOUNT_USE: u8 = 100;
pub const DEFAULT_LOG_PATH: &str = "fresheye.log";

/// Cyrillic code pages the checker understands.
///
/// Conversion tables live with the analysis engine; this type only names them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
pub enum Codepage {
    #[value(name = "koi8-r")]
    #[cfg_attr(feature = "config", serde(rename = "koi8-r"))]
    Koi8R,
    #[value(name = "cp866")]
    #[cfg_attr(feature = "config", serde(rename = "cp866"))]
    Cp866,
    #[value(name = "cp1251")]
    #[cfg_attr(feature = "config", serde(rename = "cp1251"))]
    Cp1251,
    #[value(name = "mac")]
    #[cfg_attr(feature = "config", serde(rename = "mac"))]
    Mac,
    #[value(name = "iso8859-5")]
    #[cfg_attr(feature = "config", serde(rename = "iso8859-5"))]
    Iso8859_5,
}

impl Codepage {
    pub const ALL: [Codepage; 5] = [
        Codepage::Koi8R,
        Codepage::Cp866,
        Codepage::Cp1251,
        Codepage::Mac,
        Codepage::Iso8859_5,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Codepage::Koi8R => "koi8-r",
            Codepage::Cp866 => "cp866",
            Codepage::Cp1251 => "cp1251",
            Codepage::Mac => "mac",
            Codepage::Iso8859_5 => "iso8859-5",
        }
    }

    /// Case-insensitive lookup by name.
    pub fn from_name(name: &str) -> Result<Self> {
        Self::ALL
            .into_iter()
            .find(|cp| cp.name().eq_ignore_ascii_case(name))
            .ok_or_else(|| FreshEyeError::unknown_codepage(name))
    }

    pub fn platform_default() -> Self {
        if cfg!(windows) {
            Codepage::Cp866
        } else {
            Codepage::Koi8R
        }
    }
}

impl Default for Codepage {
    fn default() -> Self {
        Self::platform_default()
    }
}

impl fmt::Display for Codepage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Codepage {
    type Err = FreshEyeError;

    fn from_str(s: &str) -> Result<Self> {
        Self::from_name(s)
    }
}

/// Checker settings.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "config", derive(serde::Deserialize))]
#[cfg_attr(feature = "config", serde(default, deny_unknown_fields))]
pub struct Config {
    /// Size of the context window in words
    pub context_size: u32,
    pub sensitivity_threshold: u32,
    /// Weight of wordcount information, 0 (off) to 100
    pub wordcount_use: u8,
    /// Write findings to the log without asking
    pub silent: bool,
    pub dump_wordcount: bool,
    pub exclude_proper_names: bool,
    pub resume: bool,
    pub log_path: PathBuf,
    pub input_codepage: Codepage,
    pub output_codepage: Codepage,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            context_size: DEFAULT_CONTEXT_SIZE,
            sensitivity_threshold: DEFAULT_SENSITIVITY,
            wordcount_use: DEFAULT_WORDCOUNT_USE,
            silent: false,
            dump_wordcount: false,
            exclude_proper_names: true,
            resume: false,
            log_path: PathBuf::from(DEFAULT_LOG_PATH),
            input_codepage: Codepage::platform_default(),
            output_codepage: Codepage::platform_default(),
        }
    }
}

impl Config {
    /// Check value ranges.
    pub fn validate(&self) -> Result<()> {
        if self.context_size < MIN_CONTEXT_SIZE {
            return Err(FreshEyeError::config(format!(
                "context size must be at least {MIN_CONTEXT_SIZE}, got {}",
                self.context_size
            )));
        }
        if self.wordcount_use > MAX_WORDCOUNT_USE {
            return Err(FreshEyeError::config(format!(
                "wordcount coefficient must be within 0..={MAX_WORDCOUNT_USE}, got {}",
                self.wordcount_use
            )));
        }
        if self.log_path.as_os_str().is_empty() {
            return Err(FreshEyeError::config("log path must not be empty"));
        }
        Ok(())
    }

    pub fn wordcount_enabled(&self) -> bool {
        self.wordcount_use > 0
    }
}

#[cfg(feature = "config")]
impl Config {
    /// `<config dir>/fresheye/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("fresheye").join("config.toml"))
    }

    /// Parse a TOML config; missing fields keep their defaults.
    pub fn load_from_file(path: &std::path::Path) -> Result<Self> {
        let text = std::fs::read_to_string(path).map_err(|e| {
            FreshEyeError::io(format!("Failed to read config {}", path.display()), e)
        })?;
        let config: Config = toml::from_str(&text)
            .map_err(|e| FreshEyeError::config(format!("{}: {e}", path.display())))?;
        config.validate()?;
        log::debug!("loaded configuration from {}", path.display());
        Ok(config)
    }

    /// Load the default config file, falling back to defaults when absent.
    pub fn load_default() -> Result<Self> {
        match Self::default_path() {
            Some(path) if path.is_file() => Self::load_from_file(&path),
            _ => Ok(Self::default()),
        }
    }
}
