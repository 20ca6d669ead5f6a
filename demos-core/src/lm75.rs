//! LM75 Temperatur-Sensor Treiber
//!
//! Generisch über `embedded_hal::i2c::I2c`, damit derselbe Code auf dem ESP32
//! (esp-hal I2C Master) und im Host-Test (MockI2c) läuft.
//!
//! Register-Layout:
//! - `0x00` Temperatur (16 Bit, Zweierkomplement, 8 Nachkommabits)
//! - `0x01` Konfiguration (8 Bit)
//! - `0x02` T_HYST, `0x03` T_OS (16 Bit, nur die oberen 9 Bit gültig)

use core::fmt;

use embedded_hal::i2c::I2c;

use crate::traits::SensorError;

/// 7-Bit I2C-Adresse (0x90 in 8-Bit Schreibweise)
pub const LM75_ADDRESS: u8 = 0x48;

pub const REG_TEMPERATURE: u8 = 0x00;
pub const REG_CONFIG: u8 = 0x01;
pub const REG_HYSTERESIS: u8 = 0x02;
pub const REG_OVERTEMP: u8 = 0x03;

/// Konfiguration: Thermostat im Interrupt-Modus, Fault-Queue 1
pub const CONFIG_INTERRUPT_MODE: u8 = 0x02;

/// Schwellwerte für den OS/ALERT-Ausgang
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Lm75Config {
    pub configuration: u8,
    /// Alarm-Schwelle T_OS in °C
    pub overtemp_celsius: f32,
    /// Rückfall-Schwelle T_HYST in °C
    pub hysteresis_celsius: f32,
}

impl Default for Lm75Config {
    fn default() -> Self {
        Self {
            configuration: CONFIG_INTERRUPT_MODE,
            overtemp_celsius: 28.0,
            hysteresis_celsius: 26.0,
        }
    }
}

/// Kodiert eine Schwelle für T_OS/T_HYST (0,5 °C Auflösung, Big Endian)
pub fn encode_threshold(celsius: f32) -> [u8; 2] {
    let raw = ((celsius * 256.0) as i16 as u16) & 0xFF80;
    raw.to_be_bytes()
}

/// Rohwert des Temperatur-Registers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawTemperature(pub i16);

impl RawTemperature {
    pub fn from_be_bytes(bytes: [u8; 2]) -> Self {
        Self(i16::from_be_bytes(bytes))
    }

    pub fn celsius(self) -> f32 {
        f32::from(self.0) / 256.0
    }

    /// Anzeige-Form mit 0,5 °C Auflösung, z.B. `+025.5 C`
    pub fn display(self) -> CelsiusDisplay {
        // Obere 9 Bit: Vorzeichen + 7 Ganzzahl-Bits + Halbgrad-Bit
        let mut value = (self.0 as u16) >> 7;
        let negative = value > 256;
        if negative {
            value = 512 - value;
        }
        CelsiusDisplay {
            negative,
            whole: value >> 1,
            half: value & 0x01 != 0,
        }
    }
}

/// Temperatur im Format `"+abc.d C"`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CelsiusDisplay {
    pub negative: bool,
    pub whole: u16,
    pub half: bool,
}

impl fmt::Display for CelsiusDisplay {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}{:03}.{} C",
            if self.negative { '-' } else { '+' },
            self.whole,
            if self.half { 5 } else { 0 }
        )
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CelsiusDisplay {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(
            fmt,
            "{}{=u16}.{} C",
            if self.negative { '-' } else { '+' },
            self.whole,
            if self.half { 5u8 } else { 0u8 }
        )
    }
}

pub struct Lm75<I2C> {
    i2c: I2C,
    address: u8,
}

impl<I2C: I2c> Lm75<I2C> {
    pub fn new(i2c: I2C, address: u8) -> Self {
        Self { i2c, address }
    }

    /// Schreibt das Konfigurations-Register
    ///
    /// # Fehlerbehandlung
    /// Gibt `SensorError::ConfigWriteFailed` zurück. Die Firmware behandelt
    /// diesen Fehler als fatal.
    pub fn configure(&mut self, config: &Lm75Config) -> Result<(), SensorError> {
        self.i2c
            .write(self.address, &[REG_CONFIG, config.configuration])
            .map_err(|_| SensorError::ConfigWriteFailed)
    }

    /// Schreibt T_OS, dann T_HYST
    ///
    /// Beide Schreibzugriffe werden immer versucht, auch wenn der erste
    /// scheitert. Der Fehler ist nicht fatal, der Sensor misst weiter.
    pub fn write_thresholds(&mut self, config: &Lm75Config) -> Result<(), SensorError> {
        let overtemp = self.write_threshold(REG_OVERTEMP, config.overtemp_celsius);
        let hysteresis = self.write_threshold(REG_HYSTERESIS, config.hysteresis_celsius);
        overtemp.and(hysteresis)
    }

    fn write_threshold(&mut self, register: u8, celsius: f32) -> Result<(), SensorError> {
        let [msb, lsb] = encode_threshold(celsius);
        self.i2c
            .write(self.address, &[register, msb, lsb])
            .map_err(|_| SensorError::ThresholdWriteFailed)
    }

    /// Liest das Temperatur-Register (Pointer schreiben, ohne Stop 2 Byte lesen)
    pub fn read_raw(&mut self) -> Result<RawTemperature, SensorError> {
        let mut buffer = [0u8; 2];
        self.i2c
            .write_read(self.address, &[REG_TEMPERATURE], &mut buffer)
            .map_err(|_| SensorError::ReadFailed)?;
        Ok(RawTemperature::from_be_bytes(buffer))
    }

    pub fn read_celsius(&mut self) -> Result<f32, SensorError> {
        self.read_raw().map(RawTemperature::celsius)
    }

    pub fn release(self) -> I2C {
        self.i2c
    }
}
