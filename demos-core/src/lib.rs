//! Demos Core - Platform-agnostic Logic and Traits
//!
//! Diese Crate enthält KEINE Hardware-Dependencies.
//! Sie definiert Traits, Zustandsautomaten und Treiber gegen embedded-hal.

#![no_std]

pub mod debounce;
pub mod history;
pub mod lm75;
pub mod logic;
pub mod monitor;
pub mod recorder;
pub mod traits;
pub mod types;

// Re-exports für einfachen Zugriff
pub use debounce::{AlertDebouncer, DEBOUNCE_LOCKOUT_MS, EdgeDebouncer};
pub use history::{HISTORY_CAPACITY, HistoryRing, TemperatureHistory};
pub use lm75::{CelsiusDisplay, LM75_ADDRESS, Lm75, Lm75Config, RawTemperature};
pub use logic::{advance_led_counter, advance_playback_cursor};
pub use monitor::{Report, ThermalMonitor, write_recorder_banner};
pub use recorder::{LedRecorder, PRESS_LOG_CAPACITY, PressLog};
pub use traits::{IndicatorLeds, LedError, PinLeds, SensorError};
pub use types::{AlertState, ButtonPress, CycleMode, LedLines, LedState};
