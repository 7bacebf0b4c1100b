pub mod core;


pub use crate::core::counter::{CounterSnapshot, CounterState, SubscriptionId, INITIAL_COUNT};
pub use crate::core::error::CounterError;
