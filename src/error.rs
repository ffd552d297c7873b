//! Unified error type for propmeter.
//!
//! We avoid `alloc` - all error variants carry only fixed-size data.
//! Implements `defmt::Format` for efficient on-target logging.

/// Top-level error type used across the firmware.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Error {
    // Display
    /// I²C transaction to the LCD backpack failed.
    Display,

    // Storage
    /// Flash read/write/erase failed.
    Storage(StorageError),
}

/// Which side of the flash round-trip failed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum StorageError {
    /// Fetching the settings record failed.
    Load,
    /// Storing the settings record failed.
    Save,
    /// The stored record has an unexpected length.
    Corrupt,
}

// Convenience conversions

impl From<StorageError> for Error {
    fn from(e: StorageError) -> Self {
        Error::Storage(e)
    }
}
