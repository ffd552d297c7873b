//! Persisted configuration - an EEPROM-style byte image.
//!
//! Field offsets are fixed and shared with devices already in the field:
//!
//! ```text
//! Offset 0..4   coefficient A      f32 (little-endian)
//! Offset 4..8   coefficient B      f32
//! Offset 8..12  period in ms       f32
//! Offset 12     day                u8
//! Offset 13     month              u8
//! Offset 14     year (from 2000)   u8
//! Offset 15     hour               u8
//! Offset 16     minute             u8
//! Offset 17     initialized flag   u8 (1 = initialized)
//! ```
//!
//! Fields are only written by the editor that owns them; see `editors`.

pub mod image;

pub use image::EepromImage;

pub const COEFF_A: usize = 0;
pub const COEFF_B: usize = 4;
pub const PERIOD: usize = 8;
pub const DAY: usize = 12;
pub const MONTH: usize = 13;
pub const YEAR: usize = 14;
pub const HOUR: usize = 15;
pub const MINUTE: usize = 16;
pub const INIT_FLAG: usize = 17;

/// Total bytes covered by the layout.
pub const IMAGE_SIZE: usize = 18;

/// Flag value marking a provisioned store.
pub const INITIALIZED: u8 = 1;

/// Byte-addressable storage that survives power loss.
pub trait Eeprom {
    fn read(&self, addr: usize) -> u8;

    fn write(&mut self, addr: usize, value: u8);

    /// Write only if the stored byte differs (saves wear).
    fn update(&mut self, addr: usize, value: u8) {
        if self.read(addr) != value {
            self.write(addr, value);
        }
    }

    fn read_f32(&self, addr: usize) -> f32 {
        let mut bytes = [0u8; 4];
        for (i, b) in bytes.iter_mut().enumerate() {
            *b = self.read(addr + i);
        }
        f32::from_le_bytes(bytes)
    }

    fn write_f32(&mut self, addr: usize, value: f32) {
        for (i, b) in value.to_le_bytes().into_iter().enumerate() {
            self.write(addr + i, b);
        }
    }

    fn update_f32(&mut self, addr: usize, value: f32) {
        for (i, b) in value.to_le_bytes().into_iter().enumerate() {
            self.update(addr + i, b);
        }
    }
}

impl<T: Eeprom + ?Sized> Eeprom for &mut T {
    fn read(&self, addr: usize) -> u8 {
        (**self).read(addr)
    }

    fn write(&mut self, addr: usize, value: u8) {
        (**self).write(addr, value)
    }
}

/// Calendar fields as stored, year counted from 2000.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DateTime {
    pub day: u8,
    pub month: u8,
    pub year: u8,
    pub hour: u8,
    pub minute: u8,
}

impl DateTime {
    pub fn load(store: &impl Eeprom) -> Self {
        Self {
            day: store.read(DAY),
            month: store.read(MONTH),
            year: store.read(YEAR),
            hour: store.read(HOUR),
            minute: store.read(MINUTE),
        }
    }

    /// Persist all five fields, skipping bytes that already match.
    pub fn update(&self, store: &mut impl Eeprom) {
        store.update(DAY, self.day);
        store.update(MONTH, self.month);
        store.update(YEAR, self.year);
        store.update(HOUR, self.hour);
        store.update(MINUTE, self.minute);
    }
}

pub fn period_ms(store: &impl Eeprom) -> f32 {
    store.read_f32(PERIOD)
}

pub fn is_initialized(store: &impl Eeprom) -> bool {
    store.read(INIT_FLAG) == INITIALIZED
}

/// First-boot defaults.
///
/// If the initialized flag is not set, zero both coefficients, the period
/// and the date/time fields, then set the flag. Returns whether anything
/// was written.
pub fn provision_defaults(store: &mut impl Eeprom) -> bool {
    if is_initialized(store) {
        return false;
    }

    info!("Settings: first boot, writing defaults");
    store.write_f32(COEFF_A, 0.0);
    store.write_f32(COEFF_B, 0.0);
    store.write_f32(PERIOD, 0.0);
    store.write(INIT_FLAG, INITIALIZED);
    for addr in [DAY, MONTH, YEAR, HOUR, MINUTE] {
        store.write(addr, 0);
    }
    true
}
