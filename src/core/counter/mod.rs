mod observer;
mod snapshot;

use tracing::instrument;

use crate::core::error::CounterError;

pub use observer::SubscriptionId;
pub use snapshot::CounterSnapshot;

use observer::Observers;

/// Value every freshly created counter starts from.
pub const INITIAL_COUNT: u64 = 3;

/// Single-owner counter. `increment_count` is the only way the value changes.
#[derive(Debug)]
pub struct CounterState {
    current_count: u64,
    observers: Observers,
}

impl CounterState {
    pub fn create() -> Self {
        tracing::info!("Creating a new counter with initial value: {}", INITIAL_COUNT);
        Self {
            current_count: INITIAL_COUNT,
            observers: Observers::default(),
        }
    }

    pub fn current_count(&self) -> u64 {
        self.current_count
    }

    /// Adds one to the count and hands the new value to every observer,
    /// oldest registration first.
    #[instrument(name = "increment_count", level = "debug", skip(self))]
    pub fn increment_count(&mut self) {
        self.current_count = self.current_count.saturating_add(1);
        tracing::info!("Counter incremented to: {}", self.current_count);
        self.observers.notify(self.current_count);
    }

    /// Registers `observer` to be called with the new value after each increment.
    pub fn subscribe<F>(&mut self, observer: F) -> SubscriptionId
    where
        F: FnMut(u64) + 'static,
    {
        self.observers.insert(Box::new(observer))
    }

    pub fn unsubscribe(&mut self, id: SubscriptionId) -> Result<(), CounterError> {
        self.observers.remove(id)
    }

    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    pub fn snapshot(&self) -> CounterSnapshot {
        CounterSnapshot {
            current_count: self.current_count,
        }
    }
}

impl Default for CounterState {
    fn default() -> Self {
        Self::create()
    }
}

// Observers stay with the original; the clone starts with none.
impl Clone for CounterState {
    fn clone(&self) -> Self {
        Self {
            current_count: self.current_count,
            observers: Observers::default(),
        }
    }
}
