use std::fmt;

use tracing::debug;

use crate::core::error::CounterError;

/// Handle returned by `CounterState::subscribe`. Never reused within a counter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

impl fmt::Display for SubscriptionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "subscription #{}", self.0)
    }
}

type Observer = Box<dyn FnMut(u64)>;

#[derive(Default)]
pub(crate) struct Observers {
    entries: Vec<(SubscriptionId, Observer)>,
    next_id: u64,
}

impl Observers {
    pub(crate) fn insert(&mut self, observer: Observer) -> SubscriptionId {
        self.next_id += 1;
        let id = SubscriptionId(self.next_id);
        self.entries.push((id, observer));
        debug!("Registered observer {}", id);
        id
    }

    pub(crate) fn remove(&mut self, id: SubscriptionId) -> Result<(), CounterError> {
        let position = self
            .entries
            .iter()
            .position(|(entry_id, _)| *entry_id == id)
            .ok_or(CounterError::UnknownSubscription(id))?;
        self.entries.remove(position);
        debug!("Removed observer {}", id);
        Ok(())
    }

    pub(crate) fn notify(&mut self, value: u64) {
        for (_, observer) in self.entries.iter_mut() {
            observer(value);
        }
    }

    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }
}

impl fmt::Debug for Observers {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observers")
            .field("registered", &self.entries.len())
            .field("next_id", &self.next_id)
            .finish()
    }
}
