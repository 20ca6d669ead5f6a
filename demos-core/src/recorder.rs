//! LED Recorder/Player (Programm A)
//!
//! `LedRecorder` ist der einzige Besitzer des Programmzustands: LED-Zähler,
//! zuletzt leuchtende LED, Press-Log und Playback-Cursor. Ticks und
//! Tastendrücke werden nacheinander vom selben Task zugestellt.

use heapless::Vec;

use crate::logic::{advance_led_counter, advance_playback_cursor};
use crate::types::{CycleMode, LedState};

/// Kapazität des Press-Logs
pub const PRESS_LOG_CAPACITY: usize = 5;

/// Aufgezeichnete LED-Zustände in Einfüge-Reihenfolge
///
/// Append-only bis voll, danach werden alle weiteren Einträge verworfen.
#[derive(Debug, Clone, Default)]
pub struct PressLog {
    entries: Vec<LedState, PRESS_LOG_CAPACITY>,
}

impl PressLog {
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Hängt einen Eintrag an. `false` wenn das Log bereits voll ist.
    pub fn record(&mut self, state: LedState) -> bool {
        self.entries.push(state).is_ok()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn is_full(&self) -> bool {
        self.entries.is_full()
    }

    pub fn get(&self, index: usize) -> Option<LedState> {
        self.entries.get(index).copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = LedState> + '_ {
        self.entries.iter().copied()
    }

    pub fn as_slice(&self) -> &[LedState] {
        &self.entries
    }
}

/// Zustand von LedCycler + PressRecorder
#[derive(Debug, Clone, Default)]
pub struct LedRecorder {
    log: PressLog,
    led_counter: u8,
    last_led: LedState,
    playback_cursor: usize,
}

impl LedRecorder {
    pub const fn new() -> Self {
        Self {
            log: PressLog::new(),
            led_counter: 0,
            last_led: LedState::Off,
            playback_cursor: 0,
        }
    }

    /// Periodischer Tick (1 s): liefert die jetzt anzuzeigende LED
    ///
    /// Free-Run solange das Log nicht voll ist, danach endgültig Playback.
    pub fn on_tick(&mut self) -> LedState {
        match self.mode() {
            CycleMode::FreeRun => {
                let state = LedState::from_index(self.led_counter);
                self.last_led = state;
                self.led_counter = advance_led_counter(self.led_counter);
                state
            }
            CycleMode::Playback => {
                self.playback_cursor = advance_playback_cursor(self.playback_cursor, self.log.len());
                // Cursor ist 1..=len, Log ist 0-basiert
                self.log
                    .get(self.playback_cursor - 1)
                    .unwrap_or(LedState::Off)
            }
        }
    }

    /// Entprellter Tastendruck: zeichnet die zuletzt leuchtende LED auf
    ///
    /// Gibt `true` zurück wenn ein Eintrag geschrieben wurde.
    pub fn on_press(&mut self) -> bool {
        self.log.record(self.last_led)
    }

    pub fn mode(&self) -> CycleMode {
        if self.log.is_full() {
            CycleMode::Playback
        } else {
            CycleMode::FreeRun
        }
    }

    pub fn last_led(&self) -> LedState {
        self.last_led
    }

    pub fn log(&self) -> &PressLog {
        &self.log
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_tick_lights_nothing() {
        let mut recorder = LedRecorder::new();
        assert_eq!(recorder.on_tick(), LedState::Off);
        assert_eq!(recorder.on_tick(), LedState::Red);
        assert_eq!(recorder.on_tick(), LedState::Green);
        assert_eq!(recorder.on_tick(), LedState::Blue);
        assert_eq!(recorder.on_tick(), LedState::Red);
    }

    #[test]
    fn test_press_before_first_tick_records_off() {
        let mut recorder = LedRecorder::new();
        assert!(recorder.on_press());
        assert_eq!(recorder.log().get(0), Some(LedState::Off));
    }

    #[test]
    fn test_press_log_rejects_sixth_entry() {
        let mut log = PressLog::new();
        for _ in 0..PRESS_LOG_CAPACITY {
            assert!(log.record(LedState::Blue));
        }
        assert!(log.is_full());
        assert!(!log.record(LedState::Red));
        assert_eq!(log.len(), PRESS_LOG_CAPACITY);
        assert!(log.iter().all(|state| state == LedState::Blue));
    }

    #[test]
    fn test_playback_starts_at_first_entry() {
        let mut recorder = LedRecorder::new();
        recorder.on_tick(); // Off
        for _ in 0..PRESS_LOG_CAPACITY {
            recorder.on_tick();
            recorder.on_press();
        }
        // Log: Rot, Grün, Blau, Rot, Grün
        assert_eq!(recorder.mode(), CycleMode::Playback);
        assert_eq!(recorder.on_tick(), LedState::Red);
        assert_eq!(recorder.on_tick(), LedState::Green);
    }
}
