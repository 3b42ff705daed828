//! Environment snapshot and typed accessors.
//!
//! Settings are never read from the live process environment field by field.
//! Instead an [`Env`] snapshot is taken once (optionally merged with a `.env`
//! file) and every section reads from it through [`EnvSource`]. Tests build
//! snapshots directly and never touch the process environment.
//!
//! # Accessors
//!
//! - [`EnvSource::get`]: optional value, `None` when absent or unparsable
//! - [`EnvSource::get_or`]: value with a default substituted
//! - [`EnvSource::require`]: value that must be present, fails fast otherwise
//! - [`EnvSource::get_list`]: comma-separated list, see [`crate::hosts`]
//!
//! An unparsable optional value is logged at `warn` and replaced by the
//! default. An unparsable required value is an error.
//!
//! # Booleans
//!
//! An integer is true when non-zero. Any other value is true only if it is
//! one of `true`, `on`, `ok`, `y`, `yes`, `1` (case-insensitive); everything
//! else, including the empty string, is false. A boolean never falls back to
//! its default once the variable is set.

use std::collections::BTreeMap;
use std::fmt;
use std::path::{Path, PathBuf};

use serde::Serialize;
use tracing::{debug, warn};

use crate::errors::ConfigError;
use crate::hosts::parse_csv;

/// Conversion from a raw environment string into a typed setting.
pub trait FromEnvValue: Sized {
    /// Human readable description of accepted values, used in errors.
    const EXPECTED: &'static str;

    fn from_env_value(raw: &str) -> Option<Self>;
}

impl FromEnvValue for String {
    const EXPECTED: &'static str = "a string";

    fn from_env_value(raw: &str) -> Option<Self> {
        Some(raw.to_string())
    }
}

impl FromEnvValue for PathBuf {
    const EXPECTED: &'static str = "a filesystem path";

    fn from_env_value(raw: &str) -> Option<Self> {
        Some(PathBuf::from(raw))
    }
}

const TRUE_STRINGS: &[&str] = &["true", "on", "ok", "y", "yes", "1"];

impl FromEnvValue for bool {
    const EXPECTED: &'static str = "a boolean";

    fn from_env_value(raw: &str) -> Option<Self> {
        if let Ok(n) = raw.trim().parse::<i64>() {
            return Some(n != 0);
        }
        let lowered = raw.to_lowercase();
        Some(TRUE_STRINGS.contains(&lowered.as_str()))
    }
}

macro_rules! impl_from_env_value_int {
    ($($ty:ty => $expected:literal),* $(,)?) => {
        $(
            impl FromEnvValue for $ty {
                const EXPECTED: &'static str = $expected;

                fn from_env_value(raw: &str) -> Option<Self> {
                    raw.trim().parse().ok()
                }
            }
        )*
    };
}

impl_from_env_value_int! {
    u16 => "an integer between 0 and 65535",
    u32 => "a non-negative integer",
    i64 => "an integer",
}

/// Deployment environment, selected by `ENV`.
///
/// Only the exact value `PROD` selects production; anything else is `Dev`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Environment {
    #[default]
    Dev,
    Prod,
}

impl Environment {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Dev => "DEV",
            Self::Prod => "PROD",
        }
    }

    pub fn is_prod(&self) -> bool {
        matches!(self, Self::Prod)
    }
}

impl fmt::Display for Environment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromEnvValue for Environment {
    const EXPECTED: &'static str = "DEV or PROD";

    fn from_env_value(raw: &str) -> Option<Self> {
        match raw {
            "PROD" => Some(Self::Prod),
            _ => Some(Self::Dev),
        }
    }
}

/// Read access to named string variables.
///
/// Implementors only provide [`EnvSource::var`]; the typed accessors are
/// derived from it.
pub trait EnvSource {
    /// Raw value of `name`, `None` when unset. An empty string counts as set.
    fn var(&self, name: &str) -> Option<String>;

    fn get<T: FromEnvValue>(&self, name: &str) -> Option<T> {
        let raw = self.var(name)?;
        let parsed = T::from_env_value(&raw);
        if parsed.is_none() {
            warn!(
                setting = name,
                value = %raw,
                expected = T::EXPECTED,
                "Ignoring unparsable setting, falling back to default"
            );
        }
        parsed
    }

    fn get_or<T: FromEnvValue>(&self, name: &str, default: T) -> T {
        self.get(name).unwrap_or(default)
    }

    /// # Errors
    ///
    /// [`ConfigError::MissingRequiredSetting`] when `name` is unset and
    /// [`ConfigError::InvalidSetting`] when its value does not parse.
    fn require<T: FromEnvValue>(&self, name: &str) -> Result<T, ConfigError> {
        let raw = self.var(name).ok_or_else(|| ConfigError::missing(name))?;
        T::from_env_value(&raw).ok_or_else(|| ConfigError::InvalidSetting {
            name: name.to_string(),
            value: raw,
            expected: T::EXPECTED,
        })
    }

    fn get_list(&self, name: &str, default: &str) -> Vec<String> {
        match self.var(name) {
            Some(raw) => parse_csv(&raw),
            None => parse_csv(default),
        }
    }
}

/// Point-in-time copy of environment variables.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Env {
    vars: BTreeMap<String, String>,
}

impl Env {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_map(vars: BTreeMap<String, String>) -> Self {
        Self { vars }
    }

    /// Snapshot of the current process environment.
    ///
    /// Variables whose name or value is not valid unicode are skipped.
    pub fn from_std_env() -> Self {
        std::env::vars_os()
            .filter_map(|(k, v)| Some((k.into_string().ok()?, v.into_string().ok()?)))
            .collect()
    }

    /// Merges variables from a `.env` file into the snapshot.
    ///
    /// Variables already present win over the file, so the real environment
    /// can always override it. A missing file is not an error.
    ///
    /// # Errors
    ///
    /// [`ConfigError::EnvFile`] when the file exists but cannot be parsed.
    pub fn with_dotenv(mut self, path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        if !path.is_file() {
            debug!(path = %path.display(), "No env file found, skipping");
            return Ok(self);
        }

        let env_file_error = |source: dotenvy::Error| ConfigError::EnvFile {
            path: path.to_path_buf(),
            source,
        };

        let mut loaded = 0usize;
        for item in dotenvy::from_path_iter(path).map_err(env_file_error)? {
            let (key, value) = item.map_err(env_file_error)?;
            if !self.vars.contains_key(&key) {
                self.vars.insert(key, value);
                loaded += 1;
            }
        }

        debug!(path = %path.display(), loaded, "Loaded env file");
        Ok(self)
    }

    /// Builder-style insert, overwriting any previous value.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(name.into(), value.into());
        self
    }

    pub fn len(&self) -> usize {
        self.vars.len()
    }

    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }
}

impl EnvSource for Env {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

impl<K, V> FromIterator<(K, V)> for Env
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}
