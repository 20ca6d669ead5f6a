//! Hardware Abstraction Traits
//!
//! Diese Traits und Fehler-Typen definieren Schnittstellen für Hardware-Zugriff
//! ohne konkrete Implementierung.

use embedded_hal::digital::OutputPin;

use crate::types::LedState;

/// Fehler-Typ für LED-Operationen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LedError {
    WriteFailed,
}

/// Fehler-Typ für Sensor-Operationen (I2C)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SensorError {
    /// Schreiben des Konfigurations-Registers fehlgeschlagen (fatal)
    ConfigWriteFailed,
    /// Schreiben von T_OS oder T_HYST fehlgeschlagen
    ThresholdWriteFailed,
    /// Lesen des Temperatur-Registers fehlgeschlagen
    ReadFailed,
}

/// Trait für die drei diskreten LEDs (Rot, Grün, Blau)
///
/// # Implementierungen
/// - **Production:** `PinLeds` über drei `OutputPin`s (esp-hal `Output`)
/// - **Testing:** MockPin (in-memory Mock)
pub trait IndicatorLeds {
    /// Zeigt genau einen LED-Zustand an, alle anderen Leitungen gehen auf Low
    ///
    /// # Fehlerbehandlung
    /// Gibt `LedError::WriteFailed` zurück wenn ein Pin nicht gesetzt werden kann
    fn show(&mut self, state: LedState) -> Result<(), LedError>;
}

/// Drei GPIO-Ausgänge als `IndicatorLeds`
pub struct PinLeds<R, G, B> {
    red: R,
    green: G,
    blue: B,
}

impl<R, G, B> PinLeds<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    pub fn new(red: R, green: G, blue: B) -> Self {
        Self { red, green, blue }
    }

    pub fn release(self) -> (R, G, B) {
        (self.red, self.green, self.blue)
    }
}

impl<R, G, B> IndicatorLeds for PinLeds<R, G, B>
where
    R: OutputPin,
    G: OutputPin,
    B: OutputPin,
{
    fn show(&mut self, state: LedState) -> Result<(), LedError> {
        let lines = state.lines();
        self.red
            .set_state(lines.r.into())
            .map_err(|_| LedError::WriteFailed)?;
        self.green
            .set_state(lines.g.into())
            .map_err(|_| LedError::WriteFailed)?;
        self.blue
            .set_state(lines.b.into())
            .map_err(|_| LedError::WriteFailed)
    }
}

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            LedError::WriteFailed => defmt::write!(fmt, "WriteFailed"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for SensorError {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            SensorError::ConfigWriteFailed => defmt::write!(fmt, "ConfigWriteFailed"),
            SensorError::ThresholdWriteFailed => defmt::write!(fmt, "ThresholdWriteFailed"),
            SensorError::ReadFailed => defmt::write!(fmt, "ReadFailed"),
        }
    }
}
