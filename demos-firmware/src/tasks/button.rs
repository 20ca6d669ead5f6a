// Button Task - entprellt den Taster und meldet Drücke an den LED-Task
use defmt::{info, warn};
use embassy_time::{Duration, Timer};
use esp_hal::gpio::Input;

use demos_core::{ButtonPress, DEBOUNCE_LOCKOUT_MS, EdgeDebouncer};

use crate::PressSender;

/// Button Task - Embassy Task für den Taster
///
/// Sendet pro Sperrzeit (0,3 s) höchstens einen `ButtonPress`.
/// Ist der Channel voll, wird der Druck verworfen statt zu blockieren.
///
/// # Parameter
/// - `button`: Taster-Eingang (active low, Pull-Up)
/// - `press_sender`: Channel Sender zum LED-Task
#[embassy_executor::task]
pub async fn button_task(mut button: Input<'static>, press_sender: PressSender) {
    let mut debouncer = EdgeDebouncer::new(DEBOUNCE_LOCKOUT_MS);
    info!("Button: waiting for presses");

    loop {
        button.wait_for_falling_edge().await;

        // Während der Sperrzeit (Timer-Await unten) wird nicht auf Flanken
        // gewartet; Prellen geht verloren statt gepuffert zu werden.
        let accepted = debouncer.on_edge_with(|| press_sender.try_send(ButtonPress));
        let Some((sent, lockout_ms)) = accepted else {
            continue;
        };
        if sent.is_err() {
            warn!("Button: press dropped, channel full");
        }

        Timer::after(Duration::from_millis(lockout_ms)).await;
        debouncer.rearm();
    }
}
