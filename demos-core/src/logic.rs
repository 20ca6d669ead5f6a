//! Pure Business Logic Functions
//!
//! Zähler-Arithmetik des LED-Cyclers, ohne Hardware-Dependencies (testbar!)

/// Anzahl der LEDs im Free-Run Zyklus
pub const LED_COUNT: u8 = 3;

/// Nächster Wert des Free-Run Zählers: 0 → 1 → 2 → 3 → 1 → ...
///
/// Der Zähler startet bei 0, daher bleibt beim allerersten Tick jede LED aus.
///
/// # Beispiele
///
/// ```
/// # use demos_core::advance_led_counter;
/// assert_eq!(advance_led_counter(0), 1);
/// assert_eq!(advance_led_counter(3), 1);
/// ```
pub fn advance_led_counter(counter: u8) -> u8 {
    (counter % LED_COUNT) + 1
}

/// Nächster Wert des Playback-Cursors
///
/// Der Cursor ist 1-basiert (1..=len), der Zugriff ins Log erfolgt mit `cursor - 1`.
pub fn advance_playback_cursor(cursor: usize, len: usize) -> usize {
    (cursor % len) + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_led_counter_starts_at_zero() {
        assert_eq!(advance_led_counter(0), 1);
    }

    #[test]
    fn test_led_counter_full_cycle() {
        let mut counter = 1;
        counter = advance_led_counter(counter); // Rot → Grün
        counter = advance_led_counter(counter); // Grün → Blau
        counter = advance_led_counter(counter); // Blau → Rot
        assert_eq!(counter, 1);
    }

    #[test]
    fn test_playback_cursor_is_one_based() {
        assert_eq!(advance_playback_cursor(0, 5), 1);
        assert_eq!(advance_playback_cursor(4, 5), 5);
        assert_eq!(advance_playback_cursor(5, 5), 1);
    }
}
