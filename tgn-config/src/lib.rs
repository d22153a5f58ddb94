//! Shared configuration loader for the tgn toolchain.
//!
//! `defaults/tgn.default.toml` is embedded into every binary so that docs and
//! runtime behavior stay in sync. Applications layer user-specific files and
//! `TGN_*` environment variables on top of those defaults via [`Loader`] before
//! deserializing into [`TgnConfig`].

use config::builder::DefaultState;
use config::{Config, ConfigBuilder, ConfigError, Environment, File, FileFormat, ValueKind};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use tgn_babel::formats::{html, plain};
use tgn_babel::BackendOptions;

const DEFAULT_TOML: &str = include_str!("../defaults/tgn.default.toml");

/// Prefix of environment overrides; `__` separates nested keys.
pub const ENV_PREFIX: &str = "TGN";

/// Top-level configuration consumed by tgn applications.
#[derive(Debug, Clone, Deserialize)]
pub struct TgnConfig {
    pub data: DataConfig,
    pub typeset: TypesetConfig,
    pub logging: LoggingConfig,
}

/// Where the verse database comes from.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    pub bible_file: PathBuf,
}

/// Backend selection and per-backend knobs.
#[derive(Debug, Clone, Deserialize)]
pub struct TypesetConfig {
    pub default: String,
    pub plain: PlainConfig,
    pub html5: HtmlConfig,
    #[serde(default)]
    pub tex: PreludeConfig,
    #[serde(default)]
    pub sile: PreludeConfig,
}

#[derive(Debug, Clone, Deserialize)]
pub struct PlainConfig {
    pub max_column: usize,
    #[serde(default)]
    pub verse_column: Option<usize>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct HtmlConfig {
    pub class_prefix: String,
    pub inline_styles: bool,
    /// Stylesheet file inlined instead of the embedded default
    #[serde(default)]
    pub css: Option<PathBuf>,
    /// href linked when `inline_styles` is off
    #[serde(default)]
    pub style_sheet: Option<String>,
}

/// Macro-language backends only take a replacement prelude file.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PreludeConfig {
    #[serde(default)]
    pub prelude: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct LoggingConfig {
    pub level: String,
}

impl TypesetConfig {
    /// Option map for the named backend, from the values that need no file access.
    ///
    /// Asset files (`css`, `prelude`) are left to the caller, which reads them and adds their
    /// contents under the backend's option key.
    pub fn options(&self, typesetter: &str) -> BackendOptions {
        let mut options = BackendOptions::new();
        match typesetter {
            plain::NAME => {
                options.insert(
                    plain::MAX_COLUMN.to_string(),
                    self.plain.max_column.to_string(),
                );
                if let Some(column) = self.plain.verse_column {
                    options.insert(plain::VERSE_COLUMN.to_string(), column.to_string());
                }
            }
            html::NAME => {
                options.insert(
                    html::CLASS_PREFIX.to_string(),
                    self.html5.class_prefix.clone(),
                );
                options.insert(
                    html::INLINE_STYLES.to_string(),
                    self.html5.inline_styles.to_string(),
                );
                if let Some(href) = &self.html5.style_sheet {
                    options.insert(html::STYLE_SHEET.to_string(), href.clone());
                }
            }
            _ => {}
        }
        options
    }

    /// Asset file whose contents become the backend's `css`/`prelude` option
    pub fn asset(&self, typesetter: &str) -> Option<(&'static str, &Path)> {
        match typesetter {
            html::NAME => self.html5.css.as_deref().map(|path| (html::CSS, path)),
            tgn_babel::formats::tex::NAME => self
                .tex
                .prelude
                .as_deref()
                .map(|path| (tgn_babel::formats::tex::PRELUDE, path)),
            tgn_babel::formats::sile::NAME => self
                .sile
                .prelude
                .as_deref()
                .map(|path| (tgn_babel::formats::sile::PRELUDE, path)),
            _ => None,
        }
    }
}

/// Helper for layering user overrides over the built-in defaults.
#[derive(Debug, Clone)]
pub struct Loader {
    builder: ConfigBuilder<DefaultState>,
}

impl Loader {
    /// Start a loader seeded with the embedded defaults.
    pub fn new() -> Self {
        let builder = Config::builder().add_source(File::from_str(DEFAULT_TOML, FileFormat::Toml));
        Self { builder }
    }

    /// Layer a configuration file. Missing files trigger an error.
    pub fn with_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(true);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer an optional configuration file (ignored if the file is absent).
    pub fn with_optional_file(mut self, path: impl AsRef<Path>) -> Self {
        let source = File::from(path.as_ref())
            .format(FileFormat::Toml)
            .required(false);
        self.builder = self.builder.add_source(source);
        self
    }

    /// Layer `TGN_*` environment variables (`TGN_DATA__BIBLE_FILE` → `data.bible_file`).
    pub fn with_env(mut self) -> Self {
        self.builder = self.builder.add_source(Self::environment());
        self
    }

    fn environment() -> Environment {
        Environment::with_prefix(ENV_PREFIX)
            .prefix_separator("_")
            .separator("__")
            .try_parsing(true)
    }

    /// Apply a single key/value override (useful for CLI settings).
    pub fn set_override<I>(mut self, key: &str, value: I) -> Result<Self, ConfigError>
    where
        I: Into<ValueKind>,
    {
        self.builder = self.builder.set_override(key, value)?;
        Ok(self)
    }

    /// Finalize the builder and deserialize the resulting configuration.
    pub fn build(self) -> Result<TgnConfig, ConfigError> {
        self.builder.build()?.try_deserialize()
    }
}

impl Default for Loader {
    fn default() -> Self {
        Self::new()
    }
}

/// Convenience helper for callers that only need the defaults.
pub fn load_defaults() -> Result<TgnConfig, ConfigError> {
    Loader::new().build()
}
