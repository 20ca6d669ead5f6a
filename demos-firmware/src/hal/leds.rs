// Diskrete LEDs - drei GPIO-Ausgänge hinter dem IndicatorLeds Trait

use esp_hal::gpio::{Level, Output, OutputConfig, OutputPin};

use demos_core::PinLeds;

/// Rot, Grün, Blau als esp-hal Outputs
pub type BoardLeds = PinLeds<Output<'static>, Output<'static>, Output<'static>>;

/// Erstellt einen Low-aktiven Ausgang (LED aus)
pub fn led_output(pin: impl OutputPin + 'static) -> Output<'static> {
    Output::new(pin, Level::Low, OutputConfig::default())
}

/// Erstellt die drei LED-Ausgänge, alle zunächst aus
pub fn board_leds(
    red: impl OutputPin + 'static,
    green: impl OutputPin + 'static,
    blue: impl OutputPin + 'static,
) -> BoardLeds {
    PinLeds::new(led_output(red), led_output(green), led_output(blue))
}
