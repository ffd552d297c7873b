//! RAM copy of the settings bytes with a dirty flag.
//!
//! The image is the byte store the firmware reads and writes; the binary
//! syncs it to flash whenever it is dirty.

use super::{Eeprom, IMAGE_SIZE};

/// Value of a never-written EEPROM / erased flash byte.
pub const ERASED: u8 = 0xFF;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct EepromImage {
    bytes: [u8; IMAGE_SIZE],
    /// Dirty flag - true if the image differs from what was last persisted.
    dirty: bool,
    /// Byte writes performed since creation (wear accounting).
    writes: u32,
}

impl EepromImage {
    /// A store that has never been written.
    pub const fn erased() -> Self {
        Self {
            bytes: [ERASED; IMAGE_SIZE],
            dirty: false,
            writes: 0,
        }
    }

    /// Rebuild from a persisted record. Short records are padded with
    /// erased bytes, extra bytes are ignored.
    pub fn from_bytes(data: &[u8]) -> Self {
        let mut image = Self::erased();
        let len = data.len().min(IMAGE_SIZE);
        image.bytes[..len].copy_from_slice(&data[..len]);
        image
    }

    pub fn as_bytes(&self) -> &[u8; IMAGE_SIZE] {
        &self.bytes
    }

    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Call after the image has been persisted.
    pub fn mark_clean(&mut self) {
        self.dirty = false;
    }

    pub fn write_count(&self) -> u32 {
        self.writes
    }
}

impl Default for EepromImage {
    fn default() -> Self {
        Self::erased()
    }
}

impl Eeprom for EepromImage {
    fn read(&self, addr: usize) -> u8 {
        self.bytes.get(addr).copied().unwrap_or(ERASED)
    }

    fn write(&mut self, addr: usize, value: u8) {
        match self.bytes.get_mut(addr) {
            Some(b) => {
                *b = value;
                self.dirty = true;
                self.writes += 1;
            }
            None => warn!("EEPROM write outside image: addr={}", addr),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn erased_reads_ff_and_is_clean() {
        let image = EepromImage::erased();
        assert!(image.as_bytes().iter().all(|&b| b == ERASED));
        assert!(!image.is_dirty());
    }

    #[test]
    fn write_marks_dirty() {
        let mut image = EepromImage::erased();
        image.write(3, 0x42);
        assert!(image.is_dirty());
        assert_eq!(image.read(3), 0x42);
        image.mark_clean();
        assert!(!image.is_dirty());
    }

    #[test]
    fn update_with_same_value_does_not_write() {
        let mut image = EepromImage::from_bytes(&[7; IMAGE_SIZE]);
        image.update(0, 7);
        assert_eq!(image.write_count(), 0);
        assert!(!image.is_dirty());
        image.update(0, 8);
        assert_eq!(image.write_count(), 1);
    }

    #[test]
    fn out_of_range_is_ignored() {
        let mut image = EepromImage::erased();
        image.write(IMAGE_SIZE, 1);
        assert!(!image.is_dirty());
        assert_eq!(image.read(IMAGE_SIZE + 10), ERASED);
    }

    #[test]
    fn from_bytes_pads_short_records() {
        let image = EepromImage::from_bytes(&[1, 2, 3]);
        assert_eq!(&image.as_bytes()[..4], &[1, 2, 3, ERASED]);
        assert!(!image.is_dirty());
    }
}
