// Task-Modul: Enthält alle Embassy Tasks beider Programme
//
// Jeder Task läuft asynchron und unabhängig.
// Tasks kommunizieren über Embassy Channels/Signals (Button → LED, Alarm → Report).

pub mod alert;
pub mod button;
pub mod led_cycle;
pub mod report;

// Re-export Tasks für einfachen Import
pub use alert::alert_task;
pub use button::button_task;
pub use led_cycle::led_cycle_task;
pub use report::thermal_monitor_task;
