//! Severity levels: the ordered standard levels that can act as a threshold, and the
//! call-site pseudo-levels (`Verbose`, `Log`, `Default`) that never can.

mod policy;

pub use policy::should_output;

use std::fmt;
use std::str::FromStr;

/// Standard levels. Lower code means higher severity; `Off` disables all standard output.
///
/// Derives `Ord` so the policy can compare a message's level against the configured threshold.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub enum Level {
    /// Threshold that blocks every standard message.
    #[default]
    Off = 0,
    /// The process cannot continue.
    Fatal = 1,
    /// Unrecoverable failures that prevent the operation from completing.
    Error = 2,
    /// Non-fatal anomalies that may need attention.
    Warn = 3,
    /// Normal operational milestones.
    Info = 4,
    /// Diagnostics too noisy for normal operation.
    Debug = 5,
    /// High-volume instrumentation.
    Trace = 6,
}

impl Level {
    /// Number of standard levels, `Off` included.
    pub const COUNT: usize = 7;

    /// Integer code, `0` (`Off`) through `6` (`Trace`).
    #[must_use]
    pub const fn code(self) -> i64 {
        self as i64
    }

    /// Position in per-level tables.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Lowercase because config files and CLI args use lowercase level strings.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::Fatal => "fatal",
            Self::Error => "error",
            Self::Warn => "warn",
            Self::Info => "info",
            Self::Debug => "debug",
            Self::Trace => "trace",
        }
    }

    /// Uppercase label rendered by the built-in formatters.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Off => "OFF",
            Self::Fatal => "FATAL",
            Self::Error => "ERROR",
            Self::Warn => "WARN",
            Self::Info => "INFO",
            Self::Debug => "DEBUG",
            Self::Trace => "TRACE",
        }
    }

    /// Maps a code back to its level; codes outside `0..=6` have none.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            0 => Some(Self::Off),
            1 => Some(Self::Fatal),
            2 => Some(Self::Error),
            3 => Some(Self::Warn),
            4 => Some(Self::Info),
            5 => Some(Self::Debug),
            6 => Some(Self::Trace),
            _ => None,
        }
    }

    /// Every standard level in code order.
    #[must_use]
    pub const fn all() -> [Self; Self::COUNT] {
        [
            Self::Off,
            Self::Fatal,
            Self::Error,
            Self::Warn,
            Self::Info,
            Self::Debug,
            Self::Trace,
        ]
    }
}

impl fmt::Display for Level {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Any level a caller can name: a standard level or one of the pseudo-levels.
///
/// Only the `Standard` arm is ordered. Pseudo-levels tag call sites (`log`, `verbose`)
/// and are rejected wherever a threshold or a logger-map key is expected.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LogLevel {
    /// One of the ordered standard levels.
    Standard(Level),
    /// Output iff the verbose flag is set, independent of the threshold.
    Verbose,
    /// Force output, bypassing all filtering.
    Log,
    /// Sentinel naming the default sink; never output, never a threshold.
    Default,
}

impl LogLevel {
    pub const OFF: Self = Self::Standard(Level::Off);
    pub const FATAL: Self = Self::Standard(Level::Fatal);
    pub const ERROR: Self = Self::Standard(Level::Error);
    pub const WARN: Self = Self::Standard(Level::Warn);
    pub const INFO: Self = Self::Standard(Level::Info);
    pub const DEBUG: Self = Self::Standard(Level::Debug);
    pub const TRACE: Self = Self::Standard(Level::Trace);

    /// Out-of-band code of `Verbose`.
    pub const VERBOSE_CODE: i64 = -99;
    /// Out-of-band code of `Log`.
    pub const LOG_CODE: i64 = -12;
    /// Out-of-band code of `Default`.
    pub const DEFAULT_CODE: i64 = -10;

    /// Integer code; pseudo-levels sit outside the contiguous standard range.
    #[must_use]
    pub const fn code(self) -> i64 {
        match self {
            Self::Standard(level) => level.code(),
            Self::Verbose => Self::VERBOSE_CODE,
            Self::Log => Self::LOG_CODE,
            Self::Default => Self::DEFAULT_CODE,
        }
    }

    /// The standard level, or `None` for a pseudo-level.
    #[must_use]
    pub const fn standard(self) -> Option<Level> {
        match self {
            Self::Standard(level) => Some(level),
            Self::Verbose | Self::Log | Self::Default => None,
        }
    }

    #[must_use]
    pub const fn is_standard(self) -> bool {
        matches!(self, Self::Standard(_))
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Standard(level) => level.as_str(),
            Self::Verbose => "verbose",
            Self::Log => "log",
            Self::Default => "default",
        }
    }

    /// Uppercase label rendered by the built-in formatters.
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::Standard(level) => level.label(),
            Self::Verbose => "VERBOSE",
            Self::Log => "LOG",
            Self::Default => "DEFAULT",
        }
    }

    /// Maps a code to a level, pseudo-levels included.
    #[must_use]
    pub const fn from_code(code: i64) -> Option<Self> {
        match code {
            Self::VERBOSE_CODE => Some(Self::Verbose),
            Self::LOG_CODE => Some(Self::Log),
            Self::DEFAULT_CODE => Some(Self::Default),
            _ => match Level::from_code(code) {
                Some(level) => Some(Self::Standard(level)),
                None => None,
            },
        }
    }
}

impl fmt::Display for LogLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl From<Level> for LogLevel {
    fn from(level: Level) -> Self {
        Self::Standard(level)
    }
}

/// Returned when a string, code, or pseudo-level cannot be turned into the requested level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParseLevelError {
    input: String,
    pseudo: bool,
}

impl ParseLevelError {
    fn unknown(input: impl Into<String>) -> Self {
        Self {
            input: input.into(),
            pseudo: false,
        }
    }

    pub(crate) fn pseudo(level: LogLevel) -> Self {
        Self {
            input: level.as_str().to_string(),
            pseudo: true,
        }
    }

    /// The offending value as the caller supplied it.
    #[must_use]
    pub fn input(&self) -> &str {
        &self.input
    }

    /// Whether the value named a pseudo-level rather than nothing at all.
    #[must_use]
    pub const fn is_pseudo(&self) -> bool {
        self.pseudo
    }
}

impl fmt::Display for ParseLevelError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.pseudo {
            write!(f, "'{}' is a pseudo-level, not a threshold", self.input)
        } else {
            write!(f, "unknown log level: '{}'", self.input)
        }
    }
}

impl std::error::Error for ParseLevelError {}

impl TryFrom<LogLevel> for Level {
    type Error = ParseLevelError;

    fn try_from(level: LogLevel) -> Result<Self, ParseLevelError> {
        level.standard().ok_or_else(|| ParseLevelError::pseudo(level))
    }
}

impl TryFrom<i64> for LogLevel {
    type Error = ParseLevelError;

    fn try_from(code: i64) -> Result<Self, ParseLevelError> {
        Self::from_code(code).ok_or_else(|| ParseLevelError::unknown(code.to_string()))
    }
}

impl TryFrom<i64> for Level {
    type Error = ParseLevelError;

    fn try_from(code: i64) -> Result<Self, ParseLevelError> {
        Self::try_from(LogLevel::try_from(code)?)
    }
}

impl FromStr for LogLevel {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        if let Ok(code) = trimmed.parse::<i64>() {
            return Self::from_code(code).ok_or_else(|| ParseLevelError::unknown(s));
        }
        match trimmed.to_lowercase().as_str() {
            "off" | "none" => Ok(Self::OFF),
            "fatal" => Ok(Self::FATAL),
            "error" | "err" => Ok(Self::ERROR),
            "warn" | "warning" => Ok(Self::WARN),
            "info" => Ok(Self::INFO),
            "debug" => Ok(Self::DEBUG),
            "trace" => Ok(Self::TRACE),
            "verbose" => Ok(Self::Verbose),
            "log" => Ok(Self::Log),
            "default" => Ok(Self::Default),
            _ => Err(ParseLevelError::unknown(s)),
        }
    }
}

impl FromStr for Level {
    type Err = ParseLevelError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::try_from(s.parse::<LogLevel>()?)
    }
}
