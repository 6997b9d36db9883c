//! Cart domain module.
//!
//! The [`CartEngine`] owns the inventory and the cart and keeps them
//! consistent under the buy-two-get-one-free promotion on every mutation.
//! Presentation lives elsewhere: hosts call the engine, then re-read it.

pub mod cart;
pub mod engine;
pub mod event;
pub mod line;
pub mod promotion;
pub mod summary;
pub mod totals;

pub use cart::{Cart, LineCounts};
pub use engine::{AddOutcome, CartEngine, DiagnosticBus, RemoveOutcome};
pub use event::{CartEvent, CartOperation, RemovalReason};
pub use line::CartLine;
pub use summary::{CartSummary, CartSummaryLine};
pub use totals::CartTotals;
