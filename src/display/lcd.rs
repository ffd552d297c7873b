//! HD44780 16x2 character LCD behind a PCF8574 I²C backpack.
//!
//! The backpack exposes the LCD in 4-bit mode; each byte goes out as two
//! nibbles, each latched with an Enable pulse. Expander bit mapping:
//!
//! ```text
//! P0 = RS (0 = command, 1 = data)
//! P1 = RW (held low, write only)
//! P2 = EN
//! P3 = backlight
//! P4..P7 = D4..D7
//! ```

use embedded_hal::delay::DelayNs;
use embedded_hal::i2c::I2c;

use super::TextDisplay;
use crate::error::Error;

const RS_BIT: u8 = 0b0000_0001;
const EN_BIT: u8 = 0b0000_0100;
const BL_BIT: u8 = 0b0000_1000;

const CMD_CLEAR: u8 = 0x01;
const CMD_ENTRY_MODE_INC: u8 = 0x06;
const CMD_DISPLAY_ON: u8 = 0x0C;
const CMD_FUNCTION_4BIT_2LINE: u8 = 0x28;
const CMD_SET_DDRAM: u8 = 0x80;

/// DDRAM start address of each visible row.
const ROW_OFFSETS: [u8; 2] = [0x00, 0x40];

pub struct Lcd<I2C, D> {
    i2c: I2C,
    delay: D,
    address: u8,
}

impl<I2C, D> Lcd<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    pub fn new(i2c: I2C, delay: D, address: u8) -> Self {
        Self {
            i2c,
            delay,
            address,
        }
    }

    /// Run the 4-bit initialisation sequence and clear the screen.
    pub fn init(&mut self) -> Result<(), Error> {
        // Power-on wait before the controller accepts anything.
        self.delay.delay_ms(50);

        // Reset to 8-bit three times, then switch to 4-bit.
        self.send_nibble(0x03, false)?;
        self.delay.delay_ms(5);
        self.send_nibble(0x03, false)?;
        self.delay.delay_us(100);
        self.send_nibble(0x03, false)?;
        self.delay.delay_us(100);
        self.send_nibble(0x02, false)?;
        self.delay.delay_us(100);

        self.command(CMD_FUNCTION_4BIT_2LINE)?;
        self.command(CMD_DISPLAY_ON)?;
        self.command(CMD_ENTRY_MODE_INC)?;
        self.clear()
    }

    pub fn release(self) -> (I2C, D) {
        (self.i2c, self.delay)
    }

    fn pulse_enable(&mut self, data: u8) -> Result<(), Error> {
        self.i2c
            .write(self.address, &[data | EN_BIT])
            .map_err(|_| Error::Display)?;
        self.delay.delay_us(1);
        self.i2c
            .write(self.address, &[data & !EN_BIT])
            .map_err(|_| Error::Display)?;
        self.delay.delay_us(50);
        Ok(())
    }

    fn send_nibble(&mut self, nibble: u8, rs: bool) -> Result<(), Error> {
        let mut data = (nibble & 0x0F) << 4;
        if rs {
            data |= RS_BIT;
        }
        self.pulse_enable(data | BL_BIT)
    }

    fn send_byte(&mut self, byte: u8, rs: bool) -> Result<(), Error> {
        self.send_nibble(byte >> 4, rs)?;
        self.send_nibble(byte & 0x0F, rs)
    }

    fn command(&mut self, cmd: u8) -> Result<(), Error> {
        self.send_byte(cmd, false)
    }
}

impl<I2C, D> TextDisplay for Lcd<I2C, D>
where
    I2C: I2c,
    D: DelayNs,
{
    fn clear(&mut self) -> Result<(), Error> {
        self.command(CMD_CLEAR)?;
        // Clear is the one slow instruction (1.52 ms).
        self.delay.delay_ms(2);
        Ok(())
    }

    fn set_cursor(&mut self, col: u8, row: u8) -> Result<(), Error> {
        let offset = ROW_OFFSETS[(row as usize).min(ROW_OFFSETS.len() - 1)];
        self.command(CMD_SET_DDRAM | offset.wrapping_add(col))
    }

    fn write_str(&mut self, text: &str) -> Result<(), Error> {
        for b in text.bytes() {
            self.send_byte(b, true)?;
        }
        Ok(())
    }
}
