use core::fmt;

/// DHT family model wired to the sensor pin. Each model speaks a slightly
/// different variant of the single-wire protocol.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DhtType {
    Dht11,
    Dht12,
    /// Also sold as AM2301
    Dht21,
    Dht22,
}

impl DhtType {
    pub const fn name(self) -> &'static str {
        match self {
            DhtType::Dht11 => "DHT11",
            DhtType::Dht12 => "DHT12",
            DhtType::Dht21 => "DHT21",
            DhtType::Dht22 => "DHT22",
        }
    }

    /// Length of the low pulse the host drives to wake the sensor, in microseconds.
    pub const fn start_signal_us(self) -> u32 {
        match self {
            DhtType::Dht11 => 18_000,
            DhtType::Dht12 | DhtType::Dht21 | DhtType::Dht22 => 1_100,
        }
    }

    /// Shortest interval between two reads the sensor will answer.
    pub const fn min_sample_interval_ms(self) -> u32 {
        match self {
            DhtType::Dht11 | DhtType::Dht12 => 1_000,
            DhtType::Dht21 | DhtType::Dht22 => 2_000,
        }
    }
}

impl fmt::Display for DhtType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
