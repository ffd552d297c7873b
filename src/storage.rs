//! Persistent settings storage.
//!
//! Uses the nRF52840's internal flash via the `sequential-storage` crate
//! to keep the EEPROM image across power cycles.
//!
//! Storage layout:
//!   - One map item under [`KEY_SETTINGS`] holding the raw image bytes.
//!   - Each save appends a new record; the flash pages are managed by
//!     `sequential-storage` which handles wear levelling and GC.

use defmt::{debug, error, info, warn};
use embedded_storage_async::nor_flash::NorFlash;
use propmeter::config::{STORAGE_FLASH_PAGE_COUNT, STORAGE_FLASH_PAGE_START};
use propmeter::settings::{EepromImage, IMAGE_SIZE};
use propmeter::{Error, StorageError};

/// Flash page size for nRF52840 (4 KB).
const FLASH_PAGE_SIZE: u32 = 4096;

/// Start address of our storage region.
const STORAGE_START: u32 = STORAGE_FLASH_PAGE_START * FLASH_PAGE_SIZE;

/// End address (exclusive) of our storage region.
const STORAGE_END: u32 = (STORAGE_FLASH_PAGE_START + STORAGE_FLASH_PAGE_COUNT) * FLASH_PAGE_SIZE;

/// Key for the settings image in the map storage.
const KEY_SETTINGS: u8 = 0x01;

/// Scratch buffer for `sequential-storage` (item header + image + padding).
const SCRATCH_SIZE: usize = 64;

/// Owns the flash driver and syncs the image to it.
pub struct SettingsStore<F> {
    flash: F,
}

impl<F: NorFlash> SettingsStore<F> {
    pub fn new(flash: F) -> Self {
        Self { flash }
    }

    /// Read the image back from flash.
    ///
    /// An absent record gives an erased image, which first-boot
    /// provisioning then fills in.
    pub async fn load(&mut self) -> Result<EepromImage, Error> {
        let mut buf = [0u8; SCRATCH_SIZE];

        match sequential_storage::map::fetch_item::<u8, &[u8], _>(
            &mut self.flash,
            STORAGE_START..STORAGE_END,
            &mut sequential_storage::cache::NoCache::new(),
            &mut buf,
            &KEY_SETTINGS,
        )
        .await
        {
            Ok(Some(data)) if data.len() == IMAGE_SIZE => {
                info!("Loaded settings from flash");
                Ok(EepromImage::from_bytes(data))
            }
            Ok(Some(data)) => {
                warn!(
                    "Settings record is {} bytes, expected {}",
                    data.len(),
                    IMAGE_SIZE
                );
                Err(StorageError::Corrupt.into())
            }
            Ok(None) => {
                info!("No settings in flash");
                Ok(EepromImage::erased())
            }
            Err(e) => {
                error!("Flash read error: {:?}", defmt::Debug2Format(&e));
                Err(StorageError::Load.into())
            }
        }
    }

    /// Persist the image if it has unsaved writes.
    ///
    /// The image is marked clean only after the record is stored, so a
    /// failed save is retried on the next call.
    pub async fn save(&mut self, image: &mut EepromImage) -> Result<(), Error> {
        if !image.is_dirty() {
            debug!("SettingsStore: no changes to save");
            return Ok(());
        }

        let mut buf = [0u8; SCRATCH_SIZE];
        let item: &[u8] = image.as_bytes();

        match sequential_storage::map::store_item::<u8, &[u8], _>(
            &mut self.flash,
            STORAGE_START..STORAGE_END,
            &mut sequential_storage::cache::NoCache::new(),
            &mut buf,
            &KEY_SETTINGS,
            &item,
        )
        .await
        {
            Ok(()) => {
                debug!("Saved settings to flash");
                image.mark_clean();
                Ok(())
            }
            Err(e) => {
                error!("Flash write error: {:?}", defmt::Debug2Format(&e));
                Err(StorageError::Save.into())
            }
        }
    }
}
