//! Domain error model.

use thiserror::Error;

/// Result type used across the domain layer.
pub type DomainResult<T> = Result<T, DomainError>;

/// Domain-level error.
///
/// Every variant is raised *before* any state is touched: an operation that
/// returns one of these left the inventory and the cart exactly as they were.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DomainError {
    /// The caller referenced a product the catalog does not carry.
    #[error("product not found: {0}")]
    ProductNotFound(String),

    /// No units of the product remain in stock.
    #[error("out of stock: {0}")]
    OutOfStock(String),

    /// Cart and inventory disagree in a way no public operation can produce.
    #[error("internal inconsistency: {0}")]
    InternalInconsistency(String),

    /// A value failed validation (e.g. malformed catalog configuration).
    #[error("validation failed: {0}")]
    Validation(String),
}

impl DomainError {
    pub fn product_not_found(name: impl Into<String>) -> Self {
        Self::ProductNotFound(name.into())
    }

    pub fn out_of_stock(name: impl Into<String>) -> Self {
        Self::OutOfStock(name.into())
    }

    pub fn inconsistency(msg: impl Into<String>) -> Self {
        Self::InternalInconsistency(msg.into())
    }

    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Errors the user is expected to see (as opposed to diagnostics-only ones).
    pub fn is_user_facing(&self) -> bool {
        matches!(self, DomainError::OutOfStock(_))
    }
}
