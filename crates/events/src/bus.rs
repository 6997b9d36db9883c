//! Event publishing/subscription abstraction (mechanics only).
//!
//! The bus distributes diagnostics from the domain layer to whoever is
//! listening (a logging host, a test, a UI status bar). It makes minimal
//! assumptions:
//!
//! - **Transport-agnostic**: in-memory channels today, anything else later.
//! - **Best-effort**: a publish failure is reported to the publisher, which is
//!   free to ignore it. Diagnostics must never change domain outcomes.
//! - **No persistence**: a subscriber only sees messages published after it
//!   subscribed.

use std::sync::mpsc::Receiver;

/// A subscription to an event stream.
///
/// Each subscription gets a copy of every message published after it was
/// created (broadcast semantics).
///
/// ```ignore
/// let subscription = engine.subscribe();
/// engine.add_unit("Pears")?;
/// for envelope in subscription.drain() {
///     tracing::info!(event_type = envelope.event_type(), "diagnostic");
/// }
/// ```
///
/// Subscriptions are meant for single-threaded consumption.
#[derive(Debug)]
pub struct Subscription<M> {
    receiver: Receiver<M>,
}

impl<M> Subscription<M> {
    pub fn new(receiver: Receiver<M>) -> Self {
        Self { receiver }
    }

    /// Collect every message already queued, without blocking.
    pub fn drain(&self) -> Vec<M> {
        self.receiver.try_iter().collect()
    }
}

/// Domain-agnostic event bus (pub/sub abstraction).
///
/// ```text
/// CartEngine (mutation) → EventBus (publish) → Subscribers
///                                                 ├─ host logging
///                                                 └─ tests
/// ```
///
/// The trait requires `Send + Sync` so a host may consume subscriptions on a
/// different thread from the one mutating the cart.
pub trait EventBus<M>: Send + Sync {
    type Error: core::fmt::Debug + Send + Sync + 'static;

    fn publish(&self, message: M) -> Result<(), Self::Error>;

    fn subscribe(&self) -> Subscription<M>;
}
