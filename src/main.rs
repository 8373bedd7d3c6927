#![no_std]
#![no_main]

use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

use esp_backtrace as _;
use esp_hal::{
    gpio::{Level, Output, OutputConfig},
    timer::timg::TimerGroup,
};
use esp_println::logger::init_logger;

use climate_display::{
    config::CONFIG,
    constants::*,
    pins::BOARD_PINS,
    validate::{log_summary, validate},
};

esp_bootloader_esp_idf::esp_app_desc!();

/// Seconds between idle heartbeats
const HEARTBEAT_INTERVAL: u64 = 60;

// Backlight is claimed as GPIO0 below
const _: () = assert!(TFT_BL == 0, "TFT_BL moved, update the GPIO used in main");

#[esp_hal_embassy::main]
async fn main(_spawner: Spawner) {
    init_logger(log::LevelFilter::Info);

    let peripherals = esp_hal::init(esp_hal::Config::default());

    let timg0 = TimerGroup::new(peripherals.TIMG0);
    esp_hal_embassy::init(timg0.timer0);

    log::info!("climate_display v{}", env!("CARGO_PKG_VERSION"));

    if let Err(e) = validate(&CONFIG, &BOARD_PINS) {
        log::error!("Configuration error: {:?}", e);
        loop {
            Timer::after(Duration::from_secs(HEARTBEAT_INTERVAL)).await;
        }
    }

    log_summary(&CONFIG, &BOARD_PINS);

    let _backlight = Output::new(
        peripherals.GPIO0,
        Level::from(TFT_BL_ACTIVE_HIGH),
        OutputConfig::default(),
    );
    log::info!("Backlight on (GPIO{})", TFT_BL);

    loop {
        log::debug!("Heartbeat");
        Timer::after(Duration::from_secs(HEARTBEAT_INTERVAL)).await;
    }
}
