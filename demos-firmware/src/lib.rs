// Library-Root: Wiederverwendbare Logik und Module beider Programme
// Keine Standard-Bibliothek (Embedded System)
#![no_std]

// Module
pub mod config;
pub mod hal;
pub mod tasks;

// Re-exports von demos-core
pub use demos_core::{
    AlertState, ButtonPress, CycleMode, IndicatorLeds, LedRecorder, LedState, PRESS_LOG_CAPACITY,
    SensorError,
};

// Embassy Channel-Typen
use embassy_sync::blocking_mutex::raw::{CriticalSectionRawMutex, NoopRawMutex};
use embassy_sync::channel::{Channel, Receiver, Sender};
use embassy_sync::signal::Signal;

use crate::config::PRESS_CHANNEL_CAPACITY;

// ============================================================================
// Type-Aliase für Channel-Typen
// ============================================================================
//
// Diese Type-Aliase vereinfachen die Lesbarkeit der Funktionssignaturen.
// Statt:  Sender<'static, NoopRawMutex, ButtonPress, 4>
// Nutze:  PressSender

/// Channel für entprellte Tastendrücke (Button Task → LED Task)
/// - PRESS_CHANNEL_CAPACITY: Drücke, die auf den nächsten Poll warten dürfen
pub type PressChannel = Channel<NoopRawMutex, ButtonPress, PRESS_CHANNEL_CAPACITY>;

/// Sender für Tastendrücke (Button Task)
pub type PressSender = Sender<'static, NoopRawMutex, ButtonPress, PRESS_CHANNEL_CAPACITY>;

/// Receiver für Tastendrücke (LED Task)
pub type PressReceiver = Receiver<'static, NoopRawMutex, ButtonPress, PRESS_CHANNEL_CAPACITY>;

/// Übergabe des Alarm-Zustands (Alert Task → Report Task)
///
/// Hält nur den neuesten Wert; der Report-Task liest ihn nicht blockierend.
pub type AlertSignal = Signal<CriticalSectionRawMutex, AlertState>;
