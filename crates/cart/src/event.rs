use serde::{Deserialize, Serialize};

use storefront_core::{Money, ProductName};
use storefront_events::Event;

/// The three mutating entry points of the engine.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CartOperation {
    AddUnit,
    RemoveLastUnit,
    RemoveAllUnits,
}

/// Why a line left the cart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RemovalReason {
    /// The caller asked for it.
    Requested,
    /// Paid unit removed together with the free unit it had earned.
    PairedWithFreeUnit,
    /// Free unit no longer backed by enough paid units.
    ExcessFreeUnit,
}

/// Diagnostic event published by the cart engine.
///
/// These are observations for hosts and tests, separate from the errors
/// returned to callers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CartEvent {
    UnitAdded {
        product: ProductName,
        unit_price: Money,
        is_free: bool,
    },
    /// A pair was completed but no stock was left for the free unit.
    RewardUnavailable {
        product: ProductName,
        paid_count: usize,
    },
    UnitRemoved {
        product: ProductName,
        is_free: bool,
        reason: RemovalReason,
    },
    ProductCleared {
        product: ProductName,
        units: usize,
    },
    OperationRejected {
        operation: CartOperation,
        product: String,
        reason: String,
    },
    InconsistencyDetected {
        product: String,
        detail: String,
    },
}

impl Event for CartEvent {
    fn event_type(&self) -> &'static str {
        match self {
            CartEvent::UnitAdded { .. } => "cart.unit.added",
            CartEvent::RewardUnavailable { .. } => "cart.reward.unavailable",
            CartEvent::UnitRemoved { .. } => "cart.unit.removed",
            CartEvent::ProductCleared { .. } => "cart.product.cleared",
            CartEvent::OperationRejected { .. } => "cart.operation.rejected",
            CartEvent::InconsistencyDetected { .. } => "cart.inconsistency.detected",
        }
    }

    fn version(&self) -> u32 {
        1
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serializes_with_kind_tag() {
        let event = CartEvent::RewardUnavailable {
            product: ProductName::new("Pears").unwrap(),
            paid_count: 2,
        };
        let json = serde_json::to_value(&event).unwrap();
        assert_eq!(json["kind"], "reward_unavailable");
        assert_eq!(json["product"], "Pears");
        assert_eq!(json["paid_count"], 2);
        assert_eq!(event.event_type(), "cart.reward.unavailable");
    }
}
