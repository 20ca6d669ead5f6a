// Programm B: Temperatur-Monitor mit Alarm und Historie
// Keine Standard-Bibliothek verwenden (Embedded System)
#![no_std]
// Kein normaler main() Einstiegspunkt (wird von esp_rtos bereitgestellt)
#![no_main]
// Verbiete mem::forget - gefährlich bei ESP HAL Types mit DMA-Buffern
#![deny(
    clippy::mem_forget,
    reason = "mem::forget is generally not safe to do with esp_hal types, especially those \
    holding buffers for the duration of a data transfer."
)]
// Verbiete große Stack-Frames (Stack ist auf Embedded Systemen begrenzt)
#![deny(clippy::large_stack_frames)]

// Embassy Async Runtime
use embassy_executor::Spawner;
use embassy_time::{Duration, Timer};

// ESP32-C6 HAL
use esp_hal::clock::CpuClock;
use esp_hal::gpio::{Input, InputConfig, Pull};
use esp_hal::i2c::master::{Config as I2cConfig, I2c};
use esp_hal::time::Rate;
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::info;

// Projekt-Module und Konfiguration
use esp_demos::AlertSignal;
use esp_demos::config::I2C_FREQUENCY_KHZ;
use esp_demos::hal::{SerialConsole, led_output};
use esp_demos::tasks::{alert_task, thermal_monitor_task};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Report- und Alert-Task.
/// Danach schläft main() - alle Arbeit läuft in Tasks.
#[esp_rtos::main]
async fn main(spawner: Spawner) -> ! {
    // ESP32-C6 Konfiguration: CPU auf maximale Taktfrequenz (160 MHz)
    let config = esp_hal::Config::default().with_cpu_clock(CpuClock::max());
    let peripherals = esp_hal::init(config);

    // Embassy Runtime initialisieren (Timer + Software Interrupt)
    let timg0 = TimerGroup::new(peripherals.TIMG0);
    let sw_interrupt =
        esp_hal::interrupt::software::SoftwareInterruptControl::new(peripherals.SW_INTERRUPT);
    esp_rtos::start(timg0.timer0, sw_interrupt.software_interrupt0);

    // I2C Master für den LM75 (blockierend, Standard Mode)
    let i2c = I2c::new(
        peripherals.I2C0,
        I2cConfig::default().with_frequency(Rate::from_khz(I2C_FREQUENCY_KHZ)),
    )
    .expect("Failed to initialize I2C0")
    .with_sda(peripherals.GPIO6)
    .with_scl(peripherals.GPIO7);

    // Serielle Konsole (9600 Baud) für die Reports
    let console = SerialConsole::new(peripherals.UART0, peripherals.GPIO16, peripherals.GPIO17)
        .expect("Failed to initialize UART0");

    // LEDs: Alarm-Anzeige und Status (ALERT_LED_GPIO_PIN, STATUS_LED_GPIO_PIN)
    let alert_led = led_output(peripherals.GPIO4);
    let status_led = led_output(peripherals.GPIO5);

    // OS/ALERT-Leitung des LM75: open drain, active low (SENSOR_ALERT_GPIO_PIN)
    let alert_line = Input::new(peripherals.GPIO11, InputConfig::default().with_pull(Pull::Up));

    // Alarm-Signal erstellen (Alert Task → Report Task)
    static ALERT_SIGNAL: static_cell::StaticCell<AlertSignal> = static_cell::StaticCell::new();
    let alert_signal = &*ALERT_SIGNAL.init(AlertSignal::new());

    // Zuerst den Sensor konfigurieren, dann die Alarm-Leitung beobachten
    spawner
        .spawn(thermal_monitor_task(i2c, console, status_led, alert_signal))
        .unwrap();
    spawner
        .spawn(alert_task(alert_line, alert_led, alert_signal))
        .unwrap();

    info!("Thermal monitor started");

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
