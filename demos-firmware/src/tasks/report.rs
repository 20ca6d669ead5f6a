// Thermal Monitor Task - Sensor-Init, Messung, Historie und Report (1 Hz)
use core::fmt::Write;

use defmt::{error, info, warn};
use embassy_time::{Duration, Timer};
use embedded_hal::i2c::I2c;
use esp_hal::Blocking;
use esp_hal::gpio::Output;

use demos_core::{LM75_ADDRESS, Lm75, Lm75Config, ThermalMonitor};

use crate::AlertSignal;
use crate::config::{
    FATAL_BLINK_INTERVAL_MS, HYSTERESIS_CELSIUS, OVERTEMP_CELSIUS, REPORT_INTERVAL_SECS,
};
use crate::hal::SerialConsole;

/// Report Loop - Testbare Business Logic ohne Hardware-Abhängigkeit
///
/// Pro Sekunde:
/// 1. neuesten Alarm-Zustand übernehmen (nicht blockierend)
/// 2. Temperatur lesen und in die Historie schreiben (immer, in jedem Modus)
/// 3. Normal: aktuellen Wert ausgeben, Alarm: komplette Historie ausgeben
///
/// Lesefehler werden geloggt, die Messung entfällt, die Schleife läuft weiter.
pub async fn report_loop<I: I2c, W: Write>(
    mut sensor: Lm75<I>,
    mut console: W,
    alert_signal: &'static AlertSignal,
) -> ! {
    let mut monitor = ThermalMonitor::new();

    loop {
        if let Some(state) = alert_signal.try_take() {
            info!("Report: alert state now {}", state);
            monitor.set_alert(state);
        }

        match sensor.read_raw() {
            Ok(raw) => {
                info!("Temperature: {}", raw.display());
                let report = monitor.record(raw.celsius());
                if report.write_to(&mut console).is_err() {
                    error!("Failed to write report to serial console");
                }
            }
            Err(e) => warn!("Sensor read failed: {}", e),
        }

        // Async Delay: gibt CPU an den Alert-Task zurück
        Timer::after(Duration::from_secs(REPORT_INTERVAL_SECS)).await;
    }
}

/// Fataler Fehler: Status-LED blinkt endlos, kein Retry, keine Rückkehr
pub async fn fatal_blink(mut status_led: Output<'static>) -> ! {
    loop {
        status_led.toggle();
        Timer::after(Duration::from_millis(FATAL_BLINK_INTERVAL_MS)).await;
    }
}

/// Thermal Monitor Task - Embassy Task für Programm B
///
/// Konfiguriert den LM75 (Interrupt-Modus, T_OS, T_HYST) und startet danach
/// die Report-Schleife. Nur ein Fehler beim Konfigurations-Register ist fatal
/// (Blink-Loop), fehlgeschlagene Schwellwerte werden geloggt.
///
/// # Parameter
/// - `i2c`: I2C Master (blockierend)
/// - `console`: UART0 Konsole (9600 Baud)
/// - `status_led`: LED für den fatalen Fehler-Loop
/// - `alert_signal`: Alarm-Zustand vom Alert-Task
#[embassy_executor::task]
pub async fn thermal_monitor_task(
    i2c: esp_hal::i2c::master::I2c<'static, Blocking>,
    console: SerialConsole<'static>,
    status_led: Output<'static>,
    alert_signal: &'static AlertSignal,
) {
    let mut sensor = Lm75::new(i2c, LM75_ADDRESS);
    let config = Lm75Config {
        overtemp_celsius: OVERTEMP_CELSIUS,
        hysteresis_celsius: HYSTERESIS_CELSIUS,
        ..Lm75Config::default()
    };

    if let Err(e) = sensor.configure(&config) {
        error!("LM75 configuration failed: {}", e);
        fatal_blink(status_led).await
    }

    // Schwellwerte: Fehler nur loggen, gemessen wird trotzdem
    match sensor.write_thresholds(&config) {
        Ok(()) => info!(
            "LM75 configured: T_OS {} C, T_HYST {} C",
            OVERTEMP_CELSIUS, HYSTERESIS_CELSIUS
        ),
        Err(e) => warn!("LM75 threshold write failed: {}", e),
    }

    report_loop(sensor, console, alert_signal).await
}
