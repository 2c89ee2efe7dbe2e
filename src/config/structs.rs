//! Configuration struct definitions.

use crate::formatter::FormatterKind;
use crate::sink::SinkKind;
use serde::Deserialize;
use std::collections::HashMap;

/// Per-app override: every field is optional so an app only states what differs.
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct AppConfig {
    /// Threshold override.
    pub level: Option<String>,
    /// Verbose flag override.
    pub verbose: Option<bool>,
    /// Formatter override.
    pub formatter: Option<FormatterKind>,
    /// Default output override.
    pub output: Option<SinkKind>,
    /// Per-level outputs, merged over the top-level `[levels]` table.
    pub levels: HashMap<String, SinkKind>,
}
