//! Ringpuffer für Messwerte
//!
//! Feste Kapazität, ein einziger Schreib-Index, der nach dem letzten Slot auf 0
//! springt. Der älteste Wert wird still überschrieben. Es gibt kein "voll"-Flag:
//! noch nicht beschriebene Slots lesen sich als `0.0`.

/// Anzahl der gespeicherten Temperatur-Messungen
pub const HISTORY_CAPACITY: usize = 60;

/// Temperatur-Historie des Monitors (60 Werte)
pub type TemperatureHistory = HistoryRing<HISTORY_CAPACITY>;

#[derive(Debug, Clone, PartialEq)]
pub struct HistoryRing<const N: usize> {
    slots: [f32; N],
    write_index: usize,
}

impl<const N: usize> HistoryRing<N> {
    /// Leerer Ring, alle Slots `0.0`
    ///
    /// `N` muss größer 0 sein, sonst schlägt schon das Kompilieren fehl:
    ///
    /// ```compile_fail
    /// let _ring = demos_core::HistoryRing::<0>::new();
    /// ```
    pub const fn new() -> Self {
        const { assert!(N > 0, "HistoryRing needs at least one slot") };
        Self {
            slots: [0.0; N],
            write_index: 0,
        }
    }

    /// Schreibt einen Wert an den Schreib-Index und rückt ihn weiter
    pub fn push(&mut self, sample: f32) {
        self.slots[self.write_index] = sample;
        self.write_index = if self.write_index < N - 1 {
            self.write_index + 1
        } else {
            0
        };
    }

    /// Alle Slots in Speicher-Reihenfolge (so wie sie ausgegeben werden)
    pub fn slots(&self) -> &[f32; N] {
        &self.slots
    }

    /// Alle Slots vom ältesten zum neuesten Wert, beginnend beim Schreib-Index
    pub fn chronological(&self) -> impl Iterator<Item = f32> + '_ {
        self.slots[self.write_index..]
            .iter()
            .chain(self.slots[..self.write_index].iter())
            .copied()
    }

    /// Slot, der beim nächsten `push` überschrieben wird
    pub fn write_index(&self) -> usize {
        self.write_index
    }

    pub const fn capacity(&self) -> usize {
        N
    }
}

impl<const N: usize> Default for HistoryRing<N> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_starts_zeroed() {
        let ring = HistoryRing::<4>::new();
        assert_eq!(ring.slots(), &[0.0; 4]);
        assert_eq!(ring.write_index(), 0);
    }

    #[test]
    fn test_partial_fill_shows_zero_slots() {
        let mut ring = HistoryRing::<4>::new();
        ring.push(21.0);
        ring.push(22.0);
        assert_eq!(ring.slots(), &[21.0, 22.0, 0.0, 0.0]);
    }

    #[test]
    fn test_index_wraps_after_last_slot() {
        let mut ring = HistoryRing::<3>::new();
        ring.push(1.0);
        ring.push(2.0);
        ring.push(3.0);
        assert_eq!(ring.write_index(), 0);
        ring.push(4.0);
        assert_eq!(ring.slots(), &[4.0, 2.0, 3.0]);
        assert_eq!(ring.write_index(), 1);
    }
}
