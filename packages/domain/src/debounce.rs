//! Generation counter behind debounced inputs.
//!
//! Every change bumps the generation and schedules a delayed check; when the
//! delay elapses, only the task holding the latest generation fires. The timer
//! itself lives in the UI layer.

use std::sync::atomic::{AtomicU64, Ordering};

#[derive(Debug, Default)]
pub struct DebounceGate {
    generation: AtomicU64,
}

impl DebounceGate {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a change and return its generation.
    pub fn bump(&self) -> u64 {
        self.generation.fetch_add(1, Ordering::SeqCst) + 1
    }

    /// Whether `generation` is still the most recent change.
    pub fn is_current(&self, generation: u64) -> bool {
        self.generation.load(Ordering::SeqCst) == generation
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_only_last_change_fires() {
        let gate = DebounceGate::new();
        let a = gate.bump();
        let b = gate.bump();
        let c = gate.bump();
        assert!(!gate.is_current(a));
        assert!(!gate.is_current(b));
        assert!(gate.is_current(c));
    }

    #[test]
    fn test_generations_increase() {
        let gate = DebounceGate::new();
        assert_eq!(gate.bump(), 1);
        assert_eq!(gate.bump(), 2);
    }
}
