use serde::Serialize;
use tracing::{debug, error, info, instrument, warn};

use storefront_core::{DomainError, DomainResult};
use storefront_events::{EventBus, EventEnvelope, InMemoryEventBus, Subscription};
use storefront_inventory::{InventoryStore, Product};

use crate::cart::{Cart, LineCounts};
use crate::event::{CartEvent, CartOperation, RemovalReason};
use crate::line::CartLine;
use crate::promotion;
use crate::summary::CartSummary;
use crate::totals::CartTotals;

/// Default diagnostic sink: in-memory fan-out of enveloped cart events.
pub type DiagnosticBus = InMemoryEventBus<EventEnvelope<CartEvent>>;

/// What an add did.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    /// One paid unit added.
    Added,
    /// One paid unit added, and it completed a pair that earned a free unit.
    AddedWithFreeUnit,
    /// One paid unit added; it completed a pair but no stock was left for the
    /// free unit. The reward is not retried later.
    AddedRewardUnavailable,
}

/// Lines a removal took out of the cart (and returned to stock).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct RemoveOutcome {
    pub paid_removed: usize,
    pub free_removed: usize,
}

impl RemoveOutcome {
    pub fn units(&self) -> usize {
        self.paid_removed + self.free_removed
    }

    /// Nothing was in the cart for the product.
    pub fn is_noop(&self) -> bool {
        self.units() == 0
    }

    fn record(&mut self, line: &CartLine) {
        if line.is_free() {
            self.free_removed += 1;
        } else {
            self.paid_removed += 1;
        }
    }
}

/// The cart mutation engine.
///
/// Owns the inventory and the cart. Every public mutation either fails before
/// touching anything or returns with both invariants restored:
///
/// - **stock conservation**: `stock + paid + free == initial stock`, per product
/// - **promotion bound**: `free <= max_free_units(paid)`, per product, with
///   equality unless a reward was withheld for lack of stock
///
/// Diagnostics go to `B`; hosts observe them through [`subscribe`](Self::subscribe).
#[derive(Debug)]
pub struct CartEngine<B = DiagnosticBus> {
    inventory: InventoryStore,
    cart: Cart,
    bus: B,
    sequence: u64,
}

impl CartEngine {
    pub fn new(inventory: InventoryStore) -> Self {
        Self::with_bus(inventory, DiagnosticBus::new())
    }
}

impl<B> CartEngine<B>
where
    B: EventBus<EventEnvelope<CartEvent>>,
{
    pub fn with_bus(inventory: InventoryStore, bus: B) -> Self {
        Self {
            inventory,
            cart: Cart::new(),
            bus,
            sequence: 0,
        }
    }

    /// Receive diagnostics published after this call.
    pub fn subscribe(&self) -> Subscription<EventEnvelope<CartEvent>> {
        self.bus.subscribe()
    }

    /// Add one paid unit of `name`, plus a free unit when it completes a
    /// promotion pair and stock allows.
    #[instrument(skip(self))]
    pub fn add_unit(&mut self, name: &str) -> DomainResult<AddOutcome> {
        let product = match self.inventory.find_by_name(name).cloned() {
            Some(product) => product,
            None => {
                return Err(self.reject(
                    CartOperation::AddUnit,
                    name,
                    DomainError::product_not_found(name),
                ));
            }
        };

        if let Err(err) = self.inventory.decrement_stock(name) {
            return Err(self.reject(CartOperation::AddUnit, name, err));
        }
        self.push_line(CartLine::paid(product.name().clone(), product.unit_price()));

        let paid = self.cart.counts(name).paid;
        if !promotion::earns_free_unit(product.promotions(), paid) {
            return Ok(AddOutcome::Added);
        }

        if self.inventory.decrement_stock(name).is_ok() {
            debug!(product = %product.name(), paid, "free unit granted");
            self.push_line(CartLine::free(product.name().clone(), product.unit_price()));
            Ok(AddOutcome::AddedWithFreeUnit)
        } else {
            info!(
                product = %product.name(),
                paid,
                "qualified for a free unit, but none left in stock"
            );
            self.emit(CartEvent::RewardUnavailable {
                product: product.name().clone(),
                paid_count: paid,
            });
            Ok(AddOutcome::AddedRewardUnavailable)
        }
    }

    /// Remove the most recently added line for `name`, then restore the
    /// promotion bound:
    ///
    /// - a removed free unit takes its paired paid unit with it
    /// - a removed paid unit that leaves too many free units takes the most
    ///   recent free unit with it
    ///
    /// No-op when the cart holds nothing for `name`.
    #[instrument(skip(self))]
    pub fn remove_last_unit(&mut self, name: &str) -> DomainResult<RemoveOutcome> {
        let Some(product) = self.inventory.find_by_name(name).cloned() else {
            return Err(self.reject(
                CartOperation::RemoveLastUnit,
                name,
                DomainError::product_not_found(name),
            ));
        };

        let mut outcome = RemoveOutcome::default();
        let Some(removed) = self.cart.remove_last(name, |_| true) else {
            debug!("nothing to remove");
            return Ok(outcome);
        };
        self.return_to_stock(&removed, RemovalReason::Requested);
        outcome.record(&removed);

        if removed.is_free() {
            match self.cart.remove_last(name, CartLine::is_paid) {
                Some(paired) => {
                    self.return_to_stock(&paired, RemovalReason::PairedWithFreeUnit);
                    outcome.record(&paired);
                }
                None => {
                    let detail = "free unit had no paid unit to pair with";
                    error!(product = %product.name(), detail, "cart inconsistency");
                    self.emit(CartEvent::InconsistencyDetected {
                        product: name.to_string(),
                        detail: detail.to_string(),
                    });
                }
            }
        } else {
            let counts = self.cart.counts(name);
            if counts.free > promotion::max_free_units(product.promotions(), counts.paid) {
                if let Some(excess) = self.cart.remove_last(name, CartLine::is_free) {
                    self.return_to_stock(&excess, RemovalReason::ExcessFreeUnit);
                    outcome.record(&excess);
                }
            }
        }

        Ok(outcome)
    }

    /// Remove every line for `name` and return all of its units to stock.
    #[instrument(skip(self))]
    pub fn remove_all_units(&mut self, name: &str) -> DomainResult<RemoveOutcome> {
        if !self.inventory.contains(name) {
            return Err(self.reject(
                CartOperation::RemoveAllUnits,
                name,
                DomainError::product_not_found(name),
            ));
        }

        let removed = self.cart.remove_all(name);
        let mut outcome = RemoveOutcome::default();
        let Some(first) = removed.first() else {
            debug!("nothing to remove");
            return Ok(outcome);
        };
        let product = first.product().clone();
        removed.iter().for_each(|line| outcome.record(line));

        let units = u32::try_from(removed.len()).unwrap_or(u32::MAX);
        if let Err(err) = self.inventory.restock(name, units) {
            self.report_inconsistency(name, err);
        }

        debug!(product = %product, units = removed.len(), "product cleared");
        self.emit(CartEvent::ProductCleared {
            product,
            units: removed.len(),
        });
        Ok(outcome)
    }

    /// Subtotal, savings and total over the whole cart.
    pub fn compute_totals(&self) -> CartTotals {
        CartTotals::from_lines(self.cart.lines())
    }

    /// Cart grouped per product, with totals.
    pub fn summary(&self) -> CartSummary {
        CartSummary::from_cart(&self.cart)
    }

    pub fn inventory(&self) -> &InventoryStore {
        &self.inventory
    }

    /// Catalog products with their live stock, in catalog order.
    pub fn products(&self) -> &[Product] {
        self.inventory.products()
    }

    pub fn product(&self, name: &str) -> Option<&Product> {
        self.inventory.find_by_name(name)
    }

    pub fn cart(&self) -> &Cart {
        &self.cart
    }

    pub fn lines(&self) -> &[CartLine] {
        self.cart.lines()
    }

    /// Units of `name` in the cart, paid and free.
    pub fn cart_quantity(&self, name: &str) -> usize {
        self.cart.quantity(name)
    }

    pub fn counts(&self, name: &str) -> LineCounts {
        self.cart.counts(name)
    }

    pub fn paid_count(&self, name: &str) -> usize {
        self.cart.counts(name).paid
    }

    pub fn free_count(&self, name: &str) -> usize {
        self.cart.counts(name).free
    }

    /// Verify stock conservation and the promotion bound for every product.
    ///
    /// Public operations keep these true; a failure here means state was
    /// corrupted some other way.
    pub fn check_invariants(&self) -> DomainResult<()> {
        if let Some(stray) = self
            .cart
            .lines()
            .iter()
            .find(|line| !self.inventory.contains(line.product().as_str()))
        {
            return Err(DomainError::inconsistency(format!(
                "cart line for unknown product {}",
                stray.product()
            )));
        }

        for product in self.inventory.products() {
            let name = product.name().as_str();
            let counts = self.cart.counts(name);
            let initial = self.inventory.initial_stock(name).unwrap_or(product.stock());

            if product.stock() as usize + counts.total() != initial as usize {
                return Err(DomainError::inconsistency(format!(
                    "stock not conserved for {name}: \
                     stock {} + paid {} + free {} != initial {initial}",
                    product.stock(),
                    counts.paid,
                    counts.free,
                )));
            }

            let max_free = promotion::max_free_units(product.promotions(), counts.paid);
            if counts.free > max_free {
                return Err(DomainError::inconsistency(format!(
                    "{name} has {} free units for {} paid units (max {max_free})",
                    counts.free, counts.paid,
                )));
            }
        }

        Ok(())
    }

    fn push_line(&mut self, line: CartLine) {
        let event = CartEvent::UnitAdded {
            product: line.product().clone(),
            unit_price: line.unit_price(),
            is_free: line.is_free(),
        };
        self.cart.push(line);
        self.emit(event);
    }

    fn return_to_stock(&mut self, line: &CartLine, reason: RemovalReason) {
        if let Err(err) = self.inventory.increment_stock(line.product().as_str()) {
            self.report_inconsistency(line.product().as_str(), err);
        }
        debug!(product = %line.product(), is_free = line.is_free(), ?reason, "unit removed");
        self.emit(CartEvent::UnitRemoved {
            product: line.product().clone(),
            is_free: line.is_free(),
            reason,
        });
    }

    fn report_inconsistency(&mut self, name: &str, err: DomainError) {
        error!(product = name, error = %err, "failed to return units to stock");
        self.emit(CartEvent::InconsistencyDetected {
            product: name.to_string(),
            detail: err.to_string(),
        });
    }

    /// Log and publish a rejected operation, handing the error back.
    fn reject(&mut self, operation: CartOperation, name: &str, err: DomainError) -> DomainError {
        if err.is_user_facing() {
            info!(?operation, product = name, error = %err, "operation rejected");
        } else {
            warn!(?operation, product = name, error = %err, "operation rejected");
        }
        self.emit(CartEvent::OperationRejected {
            operation,
            product: name.to_string(),
            reason: err.to_string(),
        });
        err
    }

    fn emit(&mut self, event: CartEvent) {
        self.sequence += 1;
        if let Err(err) = self.bus.publish(EventEnvelope::record(self.sequence, event)) {
            warn!(error = ?err, "failed to publish cart diagnostic");
        }
    }
}
