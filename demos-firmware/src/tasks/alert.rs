// Alert Task - reagiert auf den OS/ALERT-Ausgang des LM75
use defmt::warn;
use embassy_time::{Duration, Timer};
use esp_hal::gpio::{Input, Level, Output};

use demos_core::{AlertDebouncer, DEBOUNCE_LOCKOUT_MS};

use crate::AlertSignal;

/// Alert Task - Embassy Task für die Alarm-Leitung
///
/// Jede akzeptierte fallende Flanke schaltet den Alarm-Zustand um (nicht
/// setzen!), unabhängig von der aktuellen Temperatur. Die Alarm-LED folgt dem
/// Zustand, der Report-Task bekommt den neuesten Zustand über das Signal.
///
/// # Parameter
/// - `alert_line`: OS/ALERT-Eingang (active low, Pull-Up)
/// - `alert_led`: LED, die während ALERTING leuchtet
/// - `alert_signal`: Übergabe des Zustands an den Report-Task
#[embassy_executor::task]
pub async fn alert_task(
    mut alert_line: Input<'static>,
    mut alert_led: Output<'static>,
    alert_signal: &'static AlertSignal,
) {
    let mut alerts = AlertDebouncer::new(DEBOUNCE_LOCKOUT_MS);

    loop {
        alert_line.wait_for_falling_edge().await;

        // Die Sperrzeit ist das Timer-Await unten: währenddessen wird nicht
        // auf Flanken gewartet, hier ist der Debouncer also immer scharf.
        let Some((state, lockout_ms)) = alerts.on_edge() else {
            continue;
        };

        alert_led.set_level(if state.is_alerting() {
            Level::High
        } else {
            Level::Low
        });
        alert_signal.signal(state);
        warn!("Alert edge: {}", state);

        Timer::after(Duration::from_millis(lockout_ms)).await;
        alerts.rearm();
    }
}
