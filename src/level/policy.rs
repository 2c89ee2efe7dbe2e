//! Decides whether a message at a given level reaches the formatter at all.

use super::{Level, LogLevel};

/// Filtering rule shared by every logger.
///
/// Checked in order: `Log` always passes, `Verbose` follows the verbose flag alone,
/// `Default` never passes, an `Off` threshold blocks every standard level, and
/// otherwise a message passes when its code is at or below the threshold's.
#[must_use]
pub const fn should_output(configured: Level, verbose: bool, message: LogLevel) -> bool {
    match message {
        LogLevel::Log => true,
        LogLevel::Verbose => verbose,
        LogLevel::Default => false,
        LogLevel::Standard(level) => {
            !matches!(configured, Level::Off) && level.code() <= configured.code()
        }
    }
}
