//! App Constants
//!
//! Storage key, user-facing messages and logger settings.

use rolling_logger::LoggerConfig;
use tracing::Level;

/// localStorage key holding the JSON list of labels
pub const STORAGE_KEY: &str = "items";

pub const EMPTY_ITEM_MESSAGE: &str = "Please add an item.";
pub const REMOVE_CONFIRM_MESSAGE: &str = "Are you sure?";
pub const CLEAR_CONFIRM_MESSAGE: &str =
    "Are you sure you want to remove ALL items? This cannot be undone.";
pub const SAVE_FAILED_MESSAGE: &str = "Your list could not be saved in this browser.";

/// Lines kept in the in-memory log ring
pub const LOG_CAPACITY: usize = 200;

pub fn logger_config() -> LoggerConfig {
    LoggerConfig {
        capacity: LOG_CAPACITY,
        level: if cfg!(debug_assertions) { Level::DEBUG } else { Level::INFO },
    }
}
