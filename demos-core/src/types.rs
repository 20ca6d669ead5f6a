//! Core Types für LED-Recorder und Temperatur-Monitor
//!
//! Datenstrukturen ohne Hardware-Dependencies

use rgb::RGB;

/// Leitungs-Pegel der drei diskreten LEDs (true = an)
pub type LedLines = RGB<bool>;

/// Zustand der LED-Anzeige
///
/// Genau eine der drei LEDs ist aktiv, oder keine (`Off`).
/// Der numerische Index entspricht dem LED-Zähler des Cyclers (0..=3).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LedState {
    #[default]
    Off,
    Red,
    Green,
    Blue,
}

impl LedState {
    /// Wählt die LED anhand des Zähler-Index
    ///
    /// 1, 2, 3 → Rot, Grün, Blau. Jeder andere Wert (auch 0) → `Off`.
    ///
    /// ```
    /// # use demos_core::LedState;
    /// assert_eq!(LedState::from_index(2), LedState::Green);
    /// assert_eq!(LedState::from_index(7), LedState::Off);
    /// ```
    pub fn from_index(index: u8) -> Self {
        match index {
            1 => Self::Red,
            2 => Self::Green,
            3 => Self::Blue,
            _ => Self::Off,
        }
    }

    pub fn index(self) -> u8 {
        match self {
            Self::Off => 0,
            Self::Red => 1,
            Self::Green => 2,
            Self::Blue => 3,
        }
    }

    /// Ausgangs-Pegel für die drei LED-Leitungen (exklusiv)
    pub fn lines(self) -> LedLines {
        LedLines {
            r: self == Self::Red,
            g: self == Self::Green,
            b: self == Self::Blue,
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Self::Off => "Aus",
            Self::Red => "Rot",
            Self::Green => "Grün",
            Self::Blue => "Blau",
        }
    }
}

/// Betriebsart des LED-Cyclers
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CycleMode {
    /// Rot → Grün → Blau → Rot, solange das Press-Log nicht voll ist
    FreeRun,
    /// Abspielen der aufgezeichneten Sequenz (endgültig)
    Playback,
}

/// Alarm-Zustand ("fire flag")
///
/// Wird bei jeder akzeptierten Alarm-Flanke umgeschaltet, nicht gesetzt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum AlertState {
    #[default]
    Normal,
    Alerting,
}

impl AlertState {
    pub fn toggled(self) -> Self {
        match self {
            Self::Normal => Self::Alerting,
            Self::Alerting => Self::Normal,
        }
    }

    pub fn is_alerting(self) -> bool {
        self == Self::Alerting
    }
}

/// Ein entprellter Tastendruck (Button-Task → LED-Task)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ButtonPress;

// ============================================================================
// defmt::Format Implementations (optional feature)
// ============================================================================

#[cfg(feature = "defmt")]
impl defmt::Format for LedState {
    fn format(&self, fmt: defmt::Formatter) {
        defmt::write!(fmt, "{} ({})", self.name(), self.index())
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for CycleMode {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            CycleMode::FreeRun => defmt::write!(fmt, "FreeRun"),
            CycleMode::Playback => defmt::write!(fmt, "Playback"),
        }
    }
}

#[cfg(feature = "defmt")]
impl defmt::Format for AlertState {
    fn format(&self, fmt: defmt::Formatter) {
        match self {
            AlertState::Normal => defmt::write!(fmt, "Normal"),
            AlertState::Alerting => defmt::write!(fmt, "Alerting"),
        }
    }
}
