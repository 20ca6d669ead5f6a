// LED Cycle Task - Free-Run Zyklus, Aufnahme und Playback der LED-Sequenz
use defmt::{error, info};
use embassy_futures::select::{Either, select};
use embassy_time::{Duration, Ticker};

use crate::config::CYCLE_INTERVAL_SECS;
use crate::hal::board_leds;
use crate::{CycleMode, IndicatorLeds, LedRecorder, PRESS_LOG_CAPACITY, PressReceiver};

/// LED Cycle Logic - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Dieser Task ist der einzige Besitzer des `LedRecorder`:
/// - Tick (1 s): nächste LED im Free-Run bzw. nächster Eintrag im Playback
/// - Tastendruck: zuletzt leuchtende LED ins Press-Log
///
/// Ticks und Drücke kommen nacheinander über `select` an, es gibt keinen
/// geteilten Zustand mit dem Button-Task.
///
/// # Trait-basierte Abstraktion
/// Der generische Parameter `L: IndicatorLeds` ermöglicht:
/// - Real Hardware (BoardLeds) im Production-Code
/// - Mock Implementation in Tests
pub async fn led_cycle_logic<L: IndicatorLeds>(mut leds: L, press_receiver: PressReceiver) -> ! {
    let mut recorder = LedRecorder::new();
    let mut ticker = Ticker::every(Duration::from_secs(CYCLE_INTERVAL_SECS));

    loop {
        match select(ticker.next(), press_receiver.receive()).await {
            Either::First(()) => {
                let state = recorder.on_tick();

                // LED setzen (via Trait - Hardware oder Mock)
                if let Err(_e) = leds.show(state) {
                    error!("Failed to write to LEDs");
                }
                info!("Tick: {} ({})", state, recorder.mode());
            }
            Either::Second(_press) => {
                if recorder.on_press() {
                    info!(
                        "Press recorded: {} ({}/{})",
                        recorder.last_led(),
                        recorder.log().len(),
                        PRESS_LOG_CAPACITY
                    );
                    if recorder.mode() == CycleMode::Playback {
                        info!("Press log full, switching to playback");
                    }
                } else {
                    info!("Press ignored, log full");
                }
            }
        }
    }
}

/// LED Cycle Task - Embassy Task für Programm A
///
/// Übernimmt die Hardware-Initialisierung und ruft dann
/// die testbare `led_cycle_logic()` Funktion auf.
///
/// # Parameter
/// - `red`, `green`, `blue`: GPIO-Pins der drei LEDs
/// - `press_receiver`: Channel Receiver für entprellte Tastendrücke
#[embassy_executor::task]
pub async fn led_cycle_task(
    red: esp_hal::peripherals::GPIO4<'static>,
    green: esp_hal::peripherals::GPIO5<'static>,
    blue: esp_hal::peripherals::GPIO10<'static>,
    press_receiver: PressReceiver,
) {
    let leds = board_leds(red, green, blue);
    led_cycle_logic(leds, press_receiver).await
}

