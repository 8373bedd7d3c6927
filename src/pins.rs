use crate::constants::*;

/// A named GPIO, as wired on the board.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PinAssignment {
    pub name: &'static str,
    pub gpio: u8,
}

impl PinAssignment {
    pub const fn new(name: &'static str, gpio: u8) -> Self {
        Self { name, gpio }
    }
}

/// Every GPIO the firmware claims: the display bus plus the sensor line.
#[derive(Debug, Clone, Copy)]
pub struct PinMap {
    pub display: [PinAssignment; 6],
    pub sensor: PinAssignment,
}

pub const BOARD_PINS: PinMap = PinMap {
    display: [
        PinAssignment::new("SCK", TFT_SCK),
        PinAssignment::new("MOSI", TFT_MOSI),
        PinAssignment::new("CS", TFT_CS),
        PinAssignment::new("DC", TFT_DC),
        PinAssignment::new("RST", TFT_RST),
        PinAssignment::new("BL", TFT_BL),
    ],
    sensor: PinAssignment::new("DHT", DHTPIN),
};

// The board does not build with a miswired pin map.
const _: () = assert!(
    BOARD_PINS.first_collision().is_none(),
    "two functions share a GPIO"
);
const _: () = assert!(
    BOARD_PINS.first_out_of_range(MAX_GPIO).is_none(),
    "GPIO number not available on this chip"
);

impl PinMap {
    pub const fn all(&self) -> [PinAssignment; 7] {
        [
            self.display[0],
            self.display[1],
            self.display[2],
            self.display[3],
            self.display[4],
            self.display[5],
            self.sensor,
        ]
    }

    /// First pair of assignments sharing a GPIO, in declaration order.
    pub const fn first_collision(&self) -> Option<(PinAssignment, PinAssignment)> {
        let pins = self.all();
        let mut i = 0;
        while i < pins.len() {
            let mut j = i + 1;
            while j < pins.len() {
                if pins[i].gpio == pins[j].gpio {
                    return Some((pins[i], pins[j]));
                }
                j += 1;
            }
            i += 1;
        }
        None
    }

    pub const fn first_out_of_range(&self, max: u8) -> Option<PinAssignment> {
        let pins = self.all();
        let mut i = 0;
        while i < pins.len() {
            if pins[i].gpio > max {
                return Some(pins[i]);
            }
            i += 1;
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn map(gpios: [u8; 7]) -> PinMap {
        PinMap {
            display: [
                PinAssignment::new("SCK", gpios[0]),
                PinAssignment::new("MOSI", gpios[1]),
                PinAssignment::new("CS", gpios[2]),
                PinAssignment::new("DC", gpios[3]),
                PinAssignment::new("RST", gpios[4]),
                PinAssignment::new("BL", gpios[5]),
            ],
            sensor: PinAssignment::new("DHT", gpios[6]),
        }
    }

    #[test]
    fn display_pins_are_pairwise_distinct() {
        let display = BOARD_PINS.display;
        for (i, a) in display.iter().enumerate() {
            for b in &display[i + 1..] {
                assert_ne!(a.gpio, b.gpio, "{} and {} collide", a.name, b.name);
            }
        }
    }

    #[test]
    fn sensor_pin_avoids_display_pins() {
        assert!(BOARD_PINS.display.iter().all(|p| p.gpio != DHTPIN));
    }

    #[test]
    fn shipped_wiring_is_distinct() {
        let wiring = map([4, 5, 6, 7, 8, 0, 3]);
        assert_eq!(wiring.first_collision(), None);
        assert_eq!(
            BOARD_PINS.all().map(|p| p.gpio),
            [4, 5, 6, 7, 8, 0, 3]
        );
    }

    #[test]
    fn shipped_sensor_is_dht11() {
        assert_eq!(DHTTYPE, crate::sensor::DhtType::Dht11);
    }

    #[test]
    fn sensor_on_backlight_pin_is_reported() {
        let wiring = map([4, 5, 6, 7, 8, 0, 0]);
        let (first, second) = wiring.first_collision().unwrap();
        assert_eq!(first.name, "BL");
        assert_eq!(second.name, "DHT");
        assert_eq!(first.gpio, 0);
    }

    #[test]
    fn duplicate_display_pins_are_reported() {
        let wiring = map([4, 4, 6, 7, 8, 0, 3]);
        let (first, second) = wiring.first_collision().unwrap();
        assert_eq!((first.name, second.name), ("SCK", "MOSI"));
    }

    #[test]
    fn out_of_range_pin_is_reported() {
        let wiring = map([4, 5, 6, 7, 8, 0, 22]);
        assert_eq!(
            wiring.first_out_of_range(MAX_GPIO),
            Some(PinAssignment::new("DHT", 22))
        );
        assert_eq!(BOARD_PINS.first_out_of_range(MAX_GPIO), None);
    }
}
