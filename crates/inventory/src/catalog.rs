//! Static catalog configuration, loaded once at startup.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use storefront_core::{DomainError, Money, ProductName};

use crate::product::{Product, Promotion};
use crate::store::InventoryStore;

#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("failed to read catalog {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error(transparent)]
    Invalid(#[from] DomainError),
}

/// One product entry as written in configuration.
///
/// `unit_price` is in the smallest currency unit (e.g., cents).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProductConfig {
    pub name: String,
    pub unit_price: u64,
    pub stock: u32,
    #[serde(default)]
    pub coupons: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image_url: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    pub products: Vec<ProductConfig>,
}

impl CatalogConfig {
    /// The storefront's built-in catalog.
    pub fn default_catalog() -> Self {
        fn entry(
            name: &str,
            unit_price: u64,
            stock: u32,
            coupons: &[&str],
            image: &str,
        ) -> ProductConfig {
            ProductConfig {
                name: name.to_string(),
                unit_price,
                stock,
                coupons: coupons.iter().map(|c| c.to_string()).collect(),
                image_url: Some(image.to_string()),
            }
        }

        Self {
            products: vec![
                entry("Oranges", 125, 5, &[], "./img/oranges.webp"),
                entry("Apples", 200, 1, &[], "./img/apples.webp"),
                entry("Pears", 239, 7, &["B2GO"], "./img/pears.jpg"),
            ],
        }
    }

    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path).map_err(|source| CatalogError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&json)
    }

    /// Validate every entry and build the live store.
    ///
    /// Rejects blank names, duplicate names, coupon codes that do not map to a
    /// known [`Promotion`], and prices whose stocked value overflows.
    pub fn into_store(self) -> Result<InventoryStore, CatalogError> {
        let products = self
            .products
            .into_iter()
            .map(ProductConfig::into_product)
            .collect::<Result<Vec<_>, _>>()?;

        let store = InventoryStore::from_products(products)?;
        tracing::debug!(products = store.len(), "catalog loaded");
        Ok(store)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self::default_catalog()
    }
}

impl ProductConfig {
    fn into_product(self) -> Result<Product, DomainError> {
        let name = ProductName::new(&self.name)?;
        let mut product = Product::new(name, Money::from_cents(self.unit_price), self.stock);

        for code in &self.coupons {
            let promotion: Promotion = code.parse()?;
            product = product.with_promotion(promotion);
        }
        if let Some(url) = self.image_url {
            product = product.with_image_url(url);
        }
        Ok(product)
    }
}
