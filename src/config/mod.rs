//! TOML configuration loading and its translation into [`LoggerOptions`].
//!
//! Separated from the logger so the file format (string levels, named formatters and
//! outputs, per-app overrides) stays independent of the runtime configuration types.

mod structs;

pub use structs::AppConfig;

use crate::formatter::FormatterKind;
use crate::internal;
use crate::level::{Level, LogLevel};
use crate::logger::LoggerOptions;
use crate::sink::{ConsoleSink, NullSink, SharedSink, SinkKind};
use serde::Deserialize;
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Arc;

const CONFIG_FILE: &str = "config.toml";

/// A completely empty file must still produce a usable logger: `#[serde(default)]`
/// on every field means anything left out keeps the logger's own default.
///
/// ```toml
/// level = "warn"
/// verbose = false
/// formatter = "json"
/// output = "console"
///
/// [levels]
/// error = "stderr"
///
/// [apps.worker]
/// level = "debug"
/// ```
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct Config {
    /// Threshold name or code; pseudo-levels and unknown names are skipped when applied.
    pub level: Option<String>,
    pub verbose: Option<bool>,
    pub formatter: Option<FormatterKind>,
    /// Output for every level; entries in `levels` take precedence.
    pub output: Option<SinkKind>,
    /// Per-level outputs keyed by level name.
    pub levels: HashMap<String, SinkKind>,
    /// Apps sharing one file diverge on level or output without separate files.
    pub apps: HashMap<String, AppConfig>,
}

impl Config {
    /// Loads the user's config from the platform config directory.
    ///
    /// # Errors
    /// Fails if the config directory can't be determined or TOML parsing hits a syntax error.
    pub fn load() -> Result<Self, crate::Error> {
        internal::debug("CONFIG", "Loading config from default location");
        let path = Self::get_config_path()?;
        let config = Self::load_from(&path)?;
        internal::info("CONFIG", &format!("Config loaded from {}", path.display()));
        Ok(config)
    }

    /// Loads from an explicit path; `~` is expanded. A missing file yields the defaults.
    ///
    /// # Errors
    /// Returns error if the file cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self, crate::Error> {
        let expanded = shellexpand::tilde(&path.to_string_lossy()).into_owned();
        let path = PathBuf::from(expanded);
        internal::trace("CONFIG", &format!("Resolved path: {}", path.display()));

        if !path.exists() {
            internal::debug("CONFIG", "Config file not found, using defaults");
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&path)?;
        Self::parse(&content)
    }

    /// # Errors
    /// Returns the TOML syntax or schema error.
    pub fn parse(content: &str) -> Result<Self, crate::Error> {
        Ok(toml::from_str(content)?)
    }

    /// `<config dir>/aglog/config.toml`, e.g. `~/.config/aglog/config.toml` on Linux.
    ///
    /// # Errors
    /// Fails when the platform has no concept of a config directory.
    pub fn get_config_path() -> Result<PathBuf, crate::Error> {
        directories::ProjectDirs::from("", "", "aglog")
            .map(|dirs| dirs.config_dir().join(CONFIG_FILE))
            .ok_or(crate::Error::ConfigDirNotFound)
    }

    /// Folds `[apps.<name>]` over the top-level settings.
    #[must_use]
    pub fn for_app(&self, app_name: &str) -> Self {
        let mut config = self.clone();

        if let Some(app) = self.apps.get(app_name) {
            internal::debug("CONFIG", &format!("Applying overrides for app={app_name}"));
            if app.level.is_some() {
                config.level.clone_from(&app.level);
            }
            if app.verbose.is_some() {
                config.verbose = app.verbose;
            }
            if app.formatter.is_some() {
                config.formatter = app.formatter;
            }
            if app.output.is_some() {
                config.output = app.output;
            }
            for (level, output) in &app.levels {
                config.levels.insert(level.clone(), *output);
            }
        }

        config
    }

    /// Converts the file's string-typed settings into options for a logger.
    ///
    /// Unknown level names are reported on the internal logger and left out; pseudo-level
    /// names pass through and are dropped by the bulk-apply rules.
    #[must_use]
    pub fn to_options(&self) -> LoggerOptions {
        let mut options = LoggerOptions::new();

        // `output` covers every level, including ones an earlier layer routed explicitly.
        if let Some(output) = self.output {
            options = options.shared_default_logger(build_sink(output, Level::Info));
            for level in Level::all() {
                options.logger_map.push((level.into(), build_sink(output, level)));
            }
        }
        if let Some(formatter) = self.formatter {
            options = options.shared_formatter(formatter.build());
        }
        if let Some(level) = &self.level {
            match level.parse::<LogLevel>() {
                Ok(level) => options = options.log_level(level),
                Err(e) => internal::warn("CONFIG", &format!("Ignoring level: {e}")),
            }
        }
        if let Some(verbose) = self.verbose {
            options = options.verbose(verbose);
        }

        let mut levels: Vec<_> = self.levels.iter().collect();
        levels.sort_by(|a, b| a.0.cmp(b.0));
        for (name, output) in levels {
            match name.parse::<LogLevel>() {
                Ok(level) => {
                    let route = level.standard().unwrap_or(Level::Info);
                    options.logger_map.push((level, build_sink(*output, route)));
                }
                Err(e) => internal::warn("CONFIG", &format!("Ignoring [levels] entry: {e}")),
            }
        }

        options
    }
}

/// `Console` picks the stream that suits `level`.
fn build_sink(kind: SinkKind, level: Level) -> SharedSink {
    match kind {
        SinkKind::Console => Arc::new(ConsoleSink::for_level(level)),
        SinkKind::Stdout => Arc::new(ConsoleSink::stdout()),
        SinkKind::Stderr => Arc::new(ConsoleSink::stderr()),
        SinkKind::Null => Arc::new(NullSink),
    }
}
