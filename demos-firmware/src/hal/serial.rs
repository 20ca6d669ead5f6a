// Serielle Konsole - Text-Ausgabe über UART0
//
// Kapselt den blockierenden UART-Treiber hinter core::fmt::Write,
// damit die Report-Formatierung aus demos-core direkt darauf schreiben kann.

use core::fmt;

use esp_hal::Blocking;
use esp_hal::uart::{Config, ConfigError, Uart};

use crate::config::SERIAL_BAUD_RATE;

/// UART0 mit fester Baudrate (9600) als fmt::Write Senke
pub struct SerialConsole<'a> {
    uart: Uart<'a, Blocking>,
}

impl<'a> SerialConsole<'a> {
    /// Erstellt eine neue SerialConsole
    ///
    /// # Parameter
    /// - `uart0`: UART0 Peripheral
    /// - `tx`: TX-Pin (GPIO16)
    /// - `rx`: RX-Pin (GPIO17)
    pub fn new(
        uart0: esp_hal::peripherals::UART0<'a>,
        tx: esp_hal::peripherals::GPIO16<'a>,
        rx: esp_hal::peripherals::GPIO17<'a>,
    ) -> Result<Self, ConfigError> {
        let config = Config::default().with_baudrate(SERIAL_BAUD_RATE);
        let uart = Uart::new(uart0, config)?.with_tx(tx).with_rx(rx);
        Ok(Self { uart })
    }
}

impl fmt::Write for SerialConsole<'_> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        let mut remaining = s.as_bytes();
        while !remaining.is_empty() {
            let written = self.uart.write(remaining).map_err(|_| fmt::Error)?;
            remaining = &remaining[written..];
        }
        Ok(())
    }
}
