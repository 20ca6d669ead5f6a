// Hardware Abstraction Layer (HAL) Module
//
// Dieses Modul kapselt Hardware-Zugriffe hinter Traits aus demos-core,
// um Testbarkeit und Wartbarkeit zu verbessern.

pub mod leds;
pub mod serial;

pub use leds::{BoardLeds, board_leds, led_output};
pub use serial::SerialConsole;
