//! Temperatur-Monitor (Programm B)
//!
//! `ThermalMonitor` besitzt Historie und den zuletzt übergebenen Alarm-Zustand.
//! Jede Messung wird aufgezeichnet, unabhängig vom Modus. Der Modus bestimmt
//! nur, was ausgegeben wird.

use core::fmt::{self, Write};

use crate::history::TemperatureHistory;
use crate::types::AlertState;

/// Was die Report-Schleife nach einer Messung ausgibt
#[derive(Debug, Clone, Copy)]
pub enum Report<'a> {
    /// Normalbetrieb: nur der aktuelle Messwert
    Live { celsius: f32 },
    /// Alarm: komplette Historie in Speicher-Reihenfolge
    History(&'a TemperatureHistory),
}

impl Report<'_> {
    /// Schreibt den Report als Textzeilen (`\r\n`) auf die serielle Konsole
    pub fn write_to<W: Write>(&self, out: &mut W) -> fmt::Result {
        match self {
            Report::Live { celsius } => {
                out.write_str("Measuring temp.\r\n")?;
                write!(out, "Temperature = {:.3}\r\n", celsius)
            }
            Report::History(history) => {
                write!(
                    out,
                    "Fire! Last {} temperature measurements.\r\n",
                    history.capacity()
                )?;
                out.write_str("-------------------------------\r\n")?;
                for sample in history.slots() {
                    write!(out, "{:.3}\r\n", sample)?;
                }
                Ok(())
            }
        }
    }
}

#[derive(Debug, Clone, Default)]
pub struct ThermalMonitor {
    history: TemperatureHistory,
    alert: AlertState,
}

impl ThermalMonitor {
    pub const fn new() -> Self {
        Self {
            history: TemperatureHistory::new(),
            alert: AlertState::Normal,
        }
    }

    /// Zeichnet eine Messung auf und liefert den passenden Report
    pub fn record(&mut self, celsius: f32) -> Report<'_> {
        self.history.push(celsius);
        match self.alert {
            AlertState::Normal => Report::Live { celsius },
            AlertState::Alerting => Report::History(&self.history),
        }
    }

    /// Übernimmt den Alarm-Zustand vom Alarm-Task
    pub fn set_alert(&mut self, state: AlertState) {
        self.alert = state;
    }

    pub fn alert(&self) -> AlertState {
        self.alert
    }

    pub fn history(&self) -> &TemperatureHistory {
        &self.history
    }
}

/// Start-Meldung von Programm A
pub fn write_recorder_banner<W: Write>(out: &mut W, buffer_size: usize) -> fmt::Result {
    out.write_str("Start!\r\n")?;
    write!(out, "Buffer size: {}. \r\n", buffer_size)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_records_in_both_modes() {
        let mut monitor = ThermalMonitor::new();
        monitor.record(20.0);
        monitor.set_alert(AlertState::Alerting);
        monitor.record(30.0);
        assert_eq!(monitor.history().slots()[..2], [20.0, 30.0]);
        assert_eq!(monitor.history().write_index(), 2);
    }

    #[test]
    fn test_report_follows_alert_state() {
        let mut monitor = ThermalMonitor::new();
        assert!(matches!(monitor.record(21.5), Report::Live { celsius } if celsius == 21.5));

        monitor.set_alert(AlertState::Alerting);
        assert!(matches!(monitor.record(29.0), Report::History(_)));

        monitor.set_alert(AlertState::Normal);
        assert!(matches!(monitor.record(25.0), Report::Live { .. }));
    }
}
