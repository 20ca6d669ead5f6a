//! Flanken-Entprellung mit Sperrzeit
//!
//! Nach einer akzeptierten Flanke ist der Eingang gesperrt, bis der Aufrufer
//! nach Ablauf der Sperrzeit `rearm()` aufruft. Verpasste Flanken werden
//! nicht gepuffert.

use crate::types::AlertState;

/// Sperrzeit nach Tastendruck bzw. Alarm-Flanke (0,3 s)
pub const DEBOUNCE_LOCKOUT_MS: u64 = 300;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EdgeDebouncer {
    armed: bool,
    lockout_ms: u64,
}

impl EdgeDebouncer {
    pub const fn new(lockout_ms: u64) -> Self {
        Self {
            armed: true,
            lockout_ms,
        }
    }

    /// Meldet eine Hardware-Flanke
    ///
    /// Gibt `Some(sperrzeit_ms)` zurück wenn die Flanke akzeptiert wurde.
    /// Der Aufrufer führt die Aktion aus und startet einen Timer, der danach
    /// `rearm()` aufruft. Während der Sperre liefert jede Flanke `None`.
    pub fn on_edge(&mut self) -> Option<u64> {
        if !self.armed {
            return None;
        }
        self.armed = false;
        Some(self.lockout_ms)
    }

    /// Wie `on_edge`, führt aber `action` nur bei akzeptierter Flanke aus
    pub fn on_edge_with<T>(&mut self, action: impl FnOnce() -> T) -> Option<(T, u64)> {
        let lockout_ms = self.on_edge()?;
        Some((action(), lockout_ms))
    }

    /// Timer abgelaufen: Flanken werden wieder angenommen
    pub fn rearm(&mut self) {
        self.armed = true;
    }

    pub fn is_armed(&self) -> bool {
        self.armed
    }

    pub fn lockout_ms(&self) -> u64 {
        self.lockout_ms
    }
}

impl Default for EdgeDebouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_LOCKOUT_MS)
    }
}

/// Entprellter Alarm-Eingang mit umschaltendem Zustand
///
/// Jede akzeptierte Flanke schaltet den Zustand um (nicht setzen), unabhängig
/// von der Temperatur. Flanken während der Sperrzeit ändern nichts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AlertDebouncer {
    edge: EdgeDebouncer,
    state: AlertState,
}

impl AlertDebouncer {
    pub const fn new(lockout_ms: u64) -> Self {
        Self {
            edge: EdgeDebouncer::new(lockout_ms),
            state: AlertState::Normal,
        }
    }

    /// Meldet eine fallende Flanke der Alarm-Leitung
    ///
    /// Gibt den neuen Zustand und die Sperrzeit zurück, oder `None` während
    /// der Sperre.
    pub fn on_edge(&mut self) -> Option<(AlertState, u64)> {
        let state = &mut self.state;
        self.edge.on_edge_with(|| {
            *state = state.toggled();
            *state
        })
    }

    pub fn rearm(&mut self) {
        self.edge.rearm();
    }

    pub fn is_armed(&self) -> bool {
        self.edge.is_armed()
    }

    pub fn state(&self) -> AlertState {
        self.state
    }
}

impl Default for AlertDebouncer {
    fn default() -> Self {
        Self::new(DEBOUNCE_LOCKOUT_MS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_first_edge_is_accepted() {
        let mut debouncer = EdgeDebouncer::default();
        assert_eq!(debouncer.on_edge(), Some(DEBOUNCE_LOCKOUT_MS));
        assert!(!debouncer.is_armed());
    }

    #[test]
    fn test_edges_during_lockout_are_dropped() {
        let mut debouncer = EdgeDebouncer::new(50);
        assert!(debouncer.on_edge().is_some());
        assert_eq!(debouncer.on_edge(), None);
        assert_eq!(debouncer.on_edge(), None);

        // Kein Puffern: nach rearm genau eine weitere Flanke
        debouncer.rearm();
        assert_eq!(debouncer.on_edge(), Some(50));
        assert_eq!(debouncer.on_edge(), None);
    }

    #[test]
    fn test_stays_locked_without_rearm() {
        let mut debouncer = EdgeDebouncer::default();
        debouncer.on_edge();
        for _ in 0..100 {
            assert_eq!(debouncer.on_edge(), None);
        }
    }

    #[test]
    fn test_action_runs_only_for_accepted_edges() {
        let mut debouncer = EdgeDebouncer::new(50);
        let mut calls = 0;
        assert_eq!(debouncer.on_edge_with(|| calls += 1), Some(((), 50)));
        assert_eq!(debouncer.on_edge_with(|| calls += 1), None);
        assert_eq!(calls, 1);
    }

    #[test]
    fn test_alert_toggles_per_accepted_edge() {
        let mut alerts = AlertDebouncer::default();
        assert_eq!(
            alerts.on_edge(),
            Some((AlertState::Alerting, DEBOUNCE_LOCKOUT_MS))
        );
        assert_eq!(alerts.on_edge(), None);
        assert_eq!(alerts.state(), AlertState::Alerting);

        alerts.rearm();
        assert_eq!(alerts.on_edge(), Some((AlertState::Normal, DEBOUNCE_LOCKOUT_MS)));
    }
}
