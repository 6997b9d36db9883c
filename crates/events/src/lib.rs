//! Diagnostic events: the event contract, envelopes and pub/sub mechanics.
//!
//! Domain crates describe *what happened* as [`Event`] values; hosts subscribe
//! to an [`EventBus`] to observe them. Nothing here knows about carts.

pub mod bus;
pub mod envelope;
pub mod event;
pub mod in_memory_bus;

pub use bus::{EventBus, Subscription};
pub use envelope::EventEnvelope;
pub use event::Event;
pub use in_memory_bus::{InMemoryBusError, InMemoryEventBus};
