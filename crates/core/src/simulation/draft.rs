//! Single-slot draft exchange between views.
//!
//! The results view stores the simulation it is showing; the simulator view
//! takes it exactly once to pre-fill an edit/recalculate flow without asking
//! the server again.

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};

use tracing::debug;

use super::types::SimulationResult;

/// Write-then-read-once store for a simulation payload.
///
/// Cloning returns another handle to the same slot, so one exchange can be
/// injected into both the producing and the consuming view.
#[derive(Debug)]
pub struct DraftExchange<T = SimulationResult> {
    slot: Arc<Mutex<Option<T>>>,
}

impl<T> DraftExchange<T> {
    /// Creates an empty exchange.
    #[must_use]
    pub fn new() -> Self {
        Self {
            slot: Arc::new(Mutex::new(None)),
        }
    }

    /// Stores a draft, replacing any draft not yet taken.
    pub fn put(&self, value: T) {
        let replaced = self.slot().replace(value).is_some();
        debug!(replaced, "Simulation draft stored");
    }

    /// Returns the stored draft and leaves the slot empty.
    ///
    /// A second call before the next `put` returns `None`.
    pub fn take_and_clear(&self) -> Option<T> {
        let taken = self.slot().take();
        debug!(found = taken.is_some(), "Simulation draft taken");
        taken
    }

    /// Returns true when no draft is waiting.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.slot().is_none()
    }

    // A panic while holding the guard cannot leave the Option half-written.
    fn slot(&self) -> MutexGuard<'_, Option<T>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T> Clone for DraftExchange<T> {
    fn clone(&self) -> Self {
        Self {
            slot: Arc::clone(&self.slot),
        }
    }
}

impl<T> Default for DraftExchange<T> {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::simulation::types::{ClientInfo, PaymentRow};

    fn sample() -> SimulationResult {
        SimulationResult {
            client_info: Some(ClientInfo {
                name: Some("Ana Torres".to_string()),
            }),
            ..SimulationResult::default()
        }
        .with_payments(vec![PaymentRow::new(1), PaymentRow::new(2)])
    }

    #[test]
    fn test_put_then_take_returns_value_once() {
        let exchange = DraftExchange::new();
        exchange.put(sample());

        assert_eq!(exchange.take_and_clear(), Some(sample()));
        assert_eq!(exchange.take_and_clear(), None);
    }

    #[test]
    fn test_new_exchange_is_empty() {
        let exchange: DraftExchange = DraftExchange::default();
        assert!(exchange.is_empty());
        assert!(exchange.take_and_clear().is_none());
    }

    #[test]
    fn test_last_write_wins() {
        let exchange = DraftExchange::new();
        exchange.put(1);
        exchange.put(2);

        assert_eq!(exchange.take_and_clear(), Some(2));
        assert!(exchange.is_empty());
    }

    #[test]
    fn test_cloned_handles_share_slot() {
        let producer = DraftExchange::new();
        let consumer = producer.clone();

        producer.put(sample());
        assert!(!consumer.is_empty());
        assert_eq!(consumer.take_and_clear(), Some(sample()));
        assert!(producer.is_empty());
    }

    #[test]
    fn test_put_after_take_refills() {
        let exchange = DraftExchange::new();
        exchange.put("first");
        let _ = exchange.take_and_clear();
        exchange.put("second");

        assert_eq!(exchange.take_and_clear(), Some("second"));
    }

    #[test]
    fn test_concurrent_consumers_get_single_value() {
        let exchange = DraftExchange::new();
        exchange.put(7_u32);

        let handles: Vec<_> = (0..4)
            .map(|_| {
                let consumer = exchange.clone();
                std::thread::spawn(move || consumer.take_and_clear())
            })
            .collect();

        let taken: Vec<u32> = handles
            .into_iter()
            .filter_map(|h| h.join().expect("consumer thread panicked"))
            .collect();
        assert_eq!(taken, vec![7]);
    }
}
