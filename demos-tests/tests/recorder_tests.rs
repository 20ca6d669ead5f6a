//! Integration Tests für Programm A (LED Recorder/Player)
//!
//! Diese Tests laufen auf dem Host (x86_64) und nutzen MockPin

use demos_core::{
    CycleMode, DEBOUNCE_LOCKOUT_MS, EdgeDebouncer, IndicatorLeds, LedError, LedLines,
    LedRecorder, LedState, PRESS_LOG_CAPACITY, PinLeds, write_recorder_banner,
};
use embedded_hal::digital::{ErrorKind, ErrorType, OutputPin};

// ============================================================================
// Mock Pin
// ============================================================================

#[derive(Default)]
pub struct MockPin {
    pub high: bool,
    pub write_count: usize,
    pub fail_next_write: bool,
}

impl MockPin {
    pub fn new() -> Self {
        Self::default()
    }

    fn set(&mut self, high: bool) -> Result<(), ErrorKind> {
        if self.fail_next_write {
            self.fail_next_write = false;
            return Err(ErrorKind::Other);
        }

        self.high = high;
        self.write_count += 1;
        Ok(())
    }
}

impl ErrorType for MockPin {
    type Error = ErrorKind;
}

impl OutputPin for MockPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.set(false)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.set(true)
    }
}

fn mock_leds() -> PinLeds<MockPin, MockPin, MockPin> {
    PinLeds::new(MockPin::new(), MockPin::new(), MockPin::new())
}

fn lit(leds: PinLeds<MockPin, MockPin, MockPin>) -> LedLines {
    let (r, g, b) = leds.release();
    LedLines {
        r: r.high,
        g: g.high,
        b: b.high,
    }
}

/// Lässt den Recorder `ticks` mal ticken und liefert die zuletzt angezeigte LED
fn tick_n(recorder: &mut LedRecorder, ticks: usize) -> LedState {
    let mut state = LedState::Off;
    for _ in 0..ticks {
        state = recorder.on_tick();
    }
    state
}

// ============================================================================
// Tests: PinLeds
// ============================================================================

#[test]
fn test_pin_leds_select_exactly_one() {
    for (index, expected) in [
        (1, LedLines { r: true, g: false, b: false }),
        (2, LedLines { r: false, g: true, b: false }),
        (3, LedLines { r: false, g: false, b: true }),
    ] {
        let mut leds = mock_leds();
        leds.show(LedState::from_index(index)).unwrap();
        assert_eq!(lit(leds), expected);
    }
}

#[test]
fn test_pin_leds_zero_and_out_of_range_light_nothing() {
    for index in [0, 4, 200] {
        let mut leds = mock_leds();
        leds.show(LedState::Blue).unwrap();
        leds.show(LedState::from_index(index)).unwrap();
        assert_eq!(lit(leds), LedLines { r: false, g: false, b: false });
    }
}

#[test]
fn test_pin_leds_switching_clears_previous() {
    let mut leds = mock_leds();
    leds.show(LedState::Red).unwrap();
    leds.show(LedState::Green).unwrap();
    assert_eq!(lit(leds), LedLines { r: false, g: true, b: false });
}

#[test]
fn test_pin_leds_write_failure() {
    let mut green = MockPin::new();
    green.fail_next_write = true;
    let mut leds = PinLeds::new(MockPin::new(), green, MockPin::new());

    assert_eq!(leds.show(LedState::Green), Err(LedError::WriteFailed));

    // Nächster Versuch klappt wieder
    assert!(leds.show(LedState::Green).is_ok());
    assert_eq!(lit(leds), LedLines { r: false, g: true, b: false });
}

// ============================================================================
// Tests: LedCycler
// ============================================================================

#[test]
fn test_free_run_sequence() {
    let mut recorder = LedRecorder::new();
    let sequence: Vec<LedState> = (0..7).map(|_| recorder.on_tick()).collect();
    assert_eq!(
        sequence,
        [
            LedState::Off,
            LedState::Red,
            LedState::Green,
            LedState::Blue,
            LedState::Red,
            LedState::Green,
            LedState::Blue,
        ]
    );
    assert_eq!(recorder.mode(), CycleMode::FreeRun);
}

#[test]
fn test_full_log_never_returns_to_free_run() {
    let mut recorder = LedRecorder::new();
    tick_n(&mut recorder, 2); // Off, Rot
    for _ in 0..PRESS_LOG_CAPACITY {
        recorder.on_press();
    }
    // Log: 5x Rot
    assert_eq!(recorder.mode(), CycleMode::Playback);

    for _ in 0..100 {
        assert_eq!(recorder.on_tick(), LedState::Red);
        recorder.on_press();
        assert_eq!(recorder.mode(), CycleMode::Playback);
    }
}

#[test]
fn test_playback_cycles_recorded_sequence() {
    let mut recorder = LedRecorder::new();
    recorder.on_tick(); // Off
    let mut recorded = Vec::new();
    for ticks in [1, 1, 2, 3, 1] {
        recorded.push(tick_n(&mut recorder, ticks));
        recorder.on_press();
    }
    assert_eq!(recorder.log().as_slice(), recorded.as_slice());

    let played: Vec<LedState> = (0..2 * PRESS_LOG_CAPACITY)
        .map(|_| recorder.on_tick())
        .collect();
    let expected: Vec<LedState> = recorded.iter().chain(recorded.iter()).copied().collect();
    assert_eq!(played, expected);
}

// ============================================================================
// Tests: PressRecorder
// ============================================================================

#[test]
fn test_log_length_tracks_press_count() {
    for presses in 0..=12 {
        let mut recorder = LedRecorder::new();
        for _ in 0..presses {
            recorder.on_tick();
            recorder.on_press();
        }
        assert_eq!(recorder.log().len(), presses.min(PRESS_LOG_CAPACITY));
    }
}

#[test]
fn test_records_last_lit_led() {
    let mut recorder = LedRecorder::new();
    tick_n(&mut recorder, 3); // Off, Rot, Grün
    assert_eq!(recorder.last_led(), LedState::Green);
    assert!(recorder.on_press());
    assert_eq!(recorder.log().get(0), Some(LedState::Green));
}

#[test]
fn test_six_presses_keep_first_five() {
    let mut recorder = LedRecorder::new();
    recorder.on_tick(); // Off - erster Tick lässt alles aus

    // LEDs zyklen 1, 2, 3, 1, 2, 3 zwischen den Drücken
    let mut expected = Vec::new();
    for press in 0..6 {
        let shown = recorder.on_tick();
        if press < PRESS_LOG_CAPACITY {
            expected.push(shown);
            assert!(recorder.on_press());
        } else {
            assert!(!recorder.on_press());
        }
    }

    assert_eq!(
        expected,
        [
            LedState::Red,
            LedState::Green,
            LedState::Blue,
            LedState::Red,
            LedState::Green,
        ]
    );
    assert_eq!(recorder.log().as_slice(), expected.as_slice());
}

// ============================================================================
// Tests: ButtonDebouncer
// ============================================================================

#[test]
fn test_debouncer_one_action_per_window() {
    let mut recorder = LedRecorder::new();
    let mut debouncer = EdgeDebouncer::new(DEBOUNCE_LOCKOUT_MS);
    recorder.on_tick();
    recorder.on_tick(); // Rot

    // Prellen: fünf Flanken kurz hintereinander
    for _ in 0..5 {
        debouncer.on_edge_with(|| recorder.on_press());
    }
    assert_eq!(recorder.log().len(), 1);

    // Timer abgelaufen
    debouncer.rearm();
    assert!(debouncer.on_edge_with(|| recorder.on_press()).is_some());
    assert_eq!(recorder.log().len(), 2);
}

// ============================================================================
// Tests: Start-Meldung
// ============================================================================

#[test]
fn test_banner_text() {
    let mut out = String::new();
    write_recorder_banner(&mut out, PRESS_LOG_CAPACITY).unwrap();
    assert_eq!(out, "Start!\r\nBuffer size: 5. \r\n");
}
