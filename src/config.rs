//! Application-wide constants and compile-time configuration.
//!
//! Display geometry, timing parameters, editor clamps and the flash
//! region live here so they can be tuned in one place.

// Display

/// Character LCD geometry (HD44780 16x2).
pub const LCD_COLS: u8 = 16;
pub const LCD_ROWS: u8 = 2;

/// I2C address of the PCF8574 backpack (common values: 0x27, 0x3F).
pub const LCD_I2C_ADDRESS: u8 = 0x27;

// Input
//
// Buttons are active-low with internal pull-up:
//
//   Button UP      → P0.11
//   Button DOWN    → P0.12
//   Button ENTER   → P0.24
//   I²C SDA        → P0.26
//   I²C SCL        → P0.27

/// Button debounce time (ms).
pub const BUTTON_DEBOUNCE_MS: u64 = 50;

/// Main loop poll cadence (ms).
pub const POLL_INTERVAL_MS: u64 = 5;

// Editors

/// Period editor step per Up/Down press (ms).
pub const PERIOD_STEP_MS: f32 = 100.0;

/// Measurement progress: one dot per elapsed interval (ms).
pub const DOT_INTERVAL_MS: u64 = 1000;

/// Date/time field bounds, inclusive (min, max).
pub const DAY_RANGE: (u8, u8) = (1, 31);
pub const MONTH_RANGE: (u8, u8) = (1, 12);
pub const YEAR_RANGE: (u8, u8) = (1, 50);
pub const HOUR_RANGE: (u8, u8) = (0, 23);
pub const MINUTE_RANGE: (u8, u8) = (0, 60);

// Settings storage

/// Flash page index where the settings image starts (4 KB per page on nRF52840).
pub const STORAGE_FLASH_PAGE_START: u32 = 240;

/// Number of flash pages reserved for the settings image.
pub const STORAGE_FLASH_PAGE_COUNT: u32 = 4;
