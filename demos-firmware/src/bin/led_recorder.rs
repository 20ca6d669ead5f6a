// Programm A: LED Recorder/Player
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
use esp_hal::timer::timg::TimerGroup;

// Backtrace bei Panic und println!() Support
use {esp_backtrace as _, esp_println as _};

use defmt::{error, info};

// Projekt-Module
use demos_core::write_recorder_banner;
use esp_demos::hal::SerialConsole;
use esp_demos::tasks::{button_task, led_cycle_task};
use esp_demos::{PRESS_LOG_CAPACITY, PressChannel};

// ESP-IDF App Descriptor - erforderlich für den Bootloader!
// Ohne diesen schlägt das Flashen mit "ESP-IDF App Descriptor missing" fehl
esp_bootloader_esp_idf::esp_app_desc!();

/// Main Entry Point
///
/// Initialisiert Hardware, startet Embassy Runtime und spawnt Button- und LED-Task.
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

    // Serielle Konsole (9600 Baud) für die Start-Meldung
    let mut console = SerialConsole::new(peripherals.UART0, peripherals.GPIO16, peripherals.GPIO17)
        .expect("Failed to initialize UART0");
    if write_recorder_banner(&mut console, PRESS_LOG_CAPACITY).is_err() {
        error!("Failed to write banner to serial console");
    }
    info!("LED recorder starting, press log capacity {}", PRESS_LOG_CAPACITY);

    // Taster: BOOT-Taste, active low (BUTTON_GPIO_PIN)
    let button = Input::new(peripherals.GPIO9, InputConfig::default().with_pull(Pull::Up));

    // Press-Channel erstellen (Button Task → LED Task)
    static PRESS_CHANNEL: static_cell::StaticCell<PressChannel> = static_cell::StaticCell::new();
    let press_channel = &*PRESS_CHANNEL.init(PressChannel::new());

    // Spawn LED Task (besitzt LedRecorder und die drei LED-Pins, LED_*_GPIO_PIN)
    spawner
        .spawn(led_cycle_task(
            peripherals.GPIO4,
            peripherals.GPIO5,
            peripherals.GPIO10,
            press_channel.receiver(),
        ))
        .unwrap();

    // Spawn Button Task (Entprellung, sendet Drücke)
    spawner
        .spawn(button_task(button, press_channel.sender()))
        .unwrap();

    // Main-Loop: schläft (alle Arbeit läuft in Tasks)
    loop {
        Timer::after(Duration::from_secs(3600)).await;
    }
}
