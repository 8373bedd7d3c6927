use crate::sensor::DhtType;

/// Highest GPIO number broken out on the ESP32-C3
pub const MAX_GPIO: u8 = 21;

// GC9A01 240x240 round LCD
/// SPI clock
pub const TFT_SCK: u8 = 4;
/// SPI data out
pub const TFT_MOSI: u8 = 5;
/// Chip select
pub const TFT_CS: u8 = 6;
/// Data/command select
pub const TFT_DC: u8 = 7;
/// Reset
pub const TFT_RST: u8 = 8;
/// Backlight
pub const TFT_BL: u8 = 0;
/// Backlight lights up when the pin is driven high
pub const TFT_BL_ACTIVE_HIGH: bool = true;

/// Panel width in pixels
pub const DISPLAY_WIDTH: u16 = 240;
/// Panel height in pixels
pub const DISPLAY_HEIGHT: u16 = 240;

// DHT11 temperature & humidity sensor
/// Sensor signal line
pub const DHTPIN: u8 = 3;
/// Sensor model wired to `DHTPIN`
pub const DHTTYPE: DhtType = DhtType::Dht11;
