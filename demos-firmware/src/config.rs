// Projekt-Konfiguration: Konstanten und Hardware-Zuordnungen
//
// Die `*_GPIO_PIN` Konstanten sind reine Dokumentation: esp-hal vergibt Pins
// als typisierte Peripherals (`peripherals.GPIO4`), die Binaries benutzen diese
// direkt. Wer einen Pin umlegt, muss ihn hier UND in `src/bin/*.rs` ändern.
#![allow(dead_code)]

// ============================================================================
// LED Konfiguration (Programm A)
// ============================================================================

/// GPIO-Pins der drei diskreten LEDs (Rot, Grün, Blau)
pub const LED_RED_GPIO_PIN: u8 = 4;
pub const LED_GREEN_GPIO_PIN: u8 = 5;
pub const LED_BLUE_GPIO_PIN: u8 = 10;

/// GPIO-Pin des Tasters (BOOT-Taste, active low, interner Pull-Up)
pub const BUTTON_GPIO_PIN: u8 = 9;

/// Tick-Intervall des LED-Cyclers in Sekunden
pub const CYCLE_INTERVAL_SECS: u64 = 1;

/// Kapazität des Tastendruck-Channels (Button-Task → LED-Task)
pub const PRESS_CHANNEL_CAPACITY: usize = 4;

// ============================================================================
// Sensor Konfiguration (Programm B)
// ============================================================================

/// I2C-Pins für den LM75
pub const I2C_SDA_GPIO_PIN: u8 = 6;
pub const I2C_SCL_GPIO_PIN: u8 = 7;

/// I2C Taktfrequenz in kHz (Standard Mode)
pub const I2C_FREQUENCY_KHZ: u32 = 100;

/// OS/ALERT-Ausgang des LM75 (open drain, active low, interner Pull-Up)
pub const SENSOR_ALERT_GPIO_PIN: u8 = 11;

/// Alarm-LED: leuchtet während ALERTING
pub const ALERT_LED_GPIO_PIN: u8 = 4;

/// Status-LED: blinkt bei fatalem Sensor-Fehler
pub const STATUS_LED_GPIO_PIN: u8 = 5;

/// Alarm-Schwelle T_OS in °C
pub const OVERTEMP_CELSIUS: f32 = 28.0;

/// Rückfall-Schwelle T_HYST in °C
pub const HYSTERESIS_CELSIUS: f32 = 26.0;

/// Mess- und Report-Intervall in Sekunden
pub const REPORT_INTERVAL_SECS: u64 = 1;

/// Blink-Intervall im fatalen Fehler-Loop in Millisekunden
pub const FATAL_BLINK_INTERVAL_MS: u64 = 200;

// ============================================================================
// Serielle Konsole
// ============================================================================

/// UART0 Baudrate für Status-Ausgaben
pub const SERIAL_BAUD_RATE: u32 = 9600;

/// UART0 Pins (Default-Pins am ESP32-C6)
pub const UART_TX_GPIO_PIN: u8 = 16;
pub const UART_RX_GPIO_PIN: u8 = 17;
