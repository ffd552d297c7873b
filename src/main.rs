//! propmeter firmware for nRF52840.
//!
//! Menu-driven control unit for a propeller current meter: a 16x2
//! character LCD on an I²C backpack, three push-buttons and a settings
//! image persisted to internal flash.
//!
//! # Architecture
//!
//! One Embassy task runs a cooperative poll loop:
//! - Sample the buttons (at most one event per poll)
//! - Feed the event to the [`Controller`] (menu navigation or the open editor)
//! - Save the settings image to flash if the poll changed it
//!
//! # Pin Mapping
//!
//! | Function     | Pin   |
//! |--------------|-------|
//! | Button UP    | P0.11 |
//! | Button DOWN  | P0.12 |
//! | Button ENTER | P0.24 |
//! | I²C SDA      | P0.26 |
//! | I²C SCL      | P0.27 |

#![no_std]
#![no_main]

// Modules only used in the binary (not testable on host)
mod buttons;
mod storage;

use defmt::{error, info, warn};
use embassy_embedded_hal::adapter::BlockingAsync;
use embassy_executor::Spawner;
use embassy_nrf::gpio::Pin;
use embassy_nrf::nvmc::Nvmc;
use embassy_nrf::twim::{self, Twim};
use embassy_nrf::{bind_interrupts, peripherals};
use embassy_time::{Delay, Duration, Instant, Timer};
use propmeter::config::{LCD_I2C_ADDRESS, POLL_INTERVAL_MS};
use propmeter::display::Lcd;
use propmeter::settings::EepromImage;
use propmeter::Controller;
use {defmt_rtt as _, panic_probe as _};

use crate::buttons::ButtonPanel;
use crate::storage::SettingsStore;

bind_interrupts!(struct Irqs {
    SPIM0_SPIS0_TWIM0_TWIS0_SPI0_TWI0 => twim::InterruptHandler<peripherals::TWISPI0>;
});

#[embassy_executor::main]
async fn main(_spawner: Spawner) {
    info!("propmeter starting...");

    let p = embassy_nrf::init(Default::default());

    // ── Display ────────────────────────────────────────────────────────
    let mut twim_config = twim::Config::default();
    twim_config.frequency = twim::Frequency::K100;
    let i2c = Twim::new(p.TWISPI0, Irqs, p.P0_26, p.P0_27, twim_config);
    let mut lcd = Lcd::new(i2c, Delay, LCD_I2C_ADDRESS);
    if let Err(e) = lcd.init() {
        // Keep running: the settings logic works without a screen.
        error!("LCD init failed: {}", e);
    }

    // ── Settings ───────────────────────────────────────────────────────
    let mut settings = SettingsStore::new(BlockingAsync::new(Nvmc::new(p.NVMC)));
    let image = match settings.load().await {
        Ok(image) => image,
        Err(e) => {
            warn!("Settings unreadable ({}), starting from erased image", e);
            EepromImage::erased()
        }
    };

    // ── Controller ─────────────────────────────────────────────────────
    let mut controller = Controller::new(lcd, image);
    match controller.boot() {
        Ok(true) => info!("First boot: defaults written"),
        Ok(false) => {}
        Err(e) => error!("Boot draw failed: {}", e),
    }

    let mut buttons = ButtonPanel::new(
        p.P0_11.degrade(),
        p.P0_12.degrade(),
        p.P0_24.degrade(),
    );

    info!("Entering poll loop");
    loop {
        let now_ms = Instant::now().as_millis();
        let event = buttons.poll(now_ms);

        if let Err(e) = controller.poll(event, now_ms) {
            warn!("Poll failed: {}", e);
        }

        // Failed saves leave the image dirty and are retried next poll.
        if let Err(e) = settings.save(controller.store_mut()).await {
            warn!("Settings save failed: {}", e);
        }

        Timer::after(Duration::from_millis(POLL_INTERVAL_MS)).await;
    }
}
