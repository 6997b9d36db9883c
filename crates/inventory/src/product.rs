use core::str::FromStr;

use serde::{Deserialize, Serialize};

use storefront_core::{DomainError, DomainResult, Entity, Money, ProductName};

/// Promotion kinds a product can carry.
///
/// Coupon codes from configuration map onto these variants; a new promotion is
/// a new variant, never a string comparison at the call site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Promotion {
    /// "Buy two, get one free": every second paid unit earns a free unit.
    #[serde(rename = "B2GO")]
    BuyTwoGetOneFree,
}

impl Promotion {
    pub fn code(self) -> &'static str {
        match self {
            Promotion::BuyTwoGetOneFree => "B2GO",
        }
    }
}

impl core::fmt::Display for Promotion {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.code())
    }
}

impl FromStr for Promotion {
    type Err = DomainError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim() {
            "B2GO" => Ok(Promotion::BuyTwoGetOneFree),
            other => Err(DomainError::validation(format!("unknown coupon code: {other}"))),
        }
    }
}

/// Entity: a catalog product.
///
/// Everything except `stock` is fixed once the catalog is loaded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    name: ProductName,
    unit_price: Money,
    stock: u32,
    promotions: Vec<Promotion>,
    image_url: Option<String>,
}

impl Product {
    pub fn new(name: ProductName, unit_price: Money, stock: u32) -> Self {
        Self {
            name,
            unit_price,
            stock,
            promotions: Vec::new(),
            image_url: None,
        }
    }

    pub fn with_promotion(mut self, promotion: Promotion) -> Self {
        if !self.promotions.contains(&promotion) {
            self.promotions.push(promotion);
        }
        self
    }

    pub fn with_image_url(mut self, url: impl Into<String>) -> Self {
        self.image_url = Some(url.into());
        self
    }

    pub fn name(&self) -> &ProductName {
        &self.name
    }

    pub fn unit_price(&self) -> Money {
        self.unit_price
    }

    pub fn stock(&self) -> u32 {
        self.stock
    }

    pub fn promotions(&self) -> &[Promotion] {
        &self.promotions
    }

    pub fn image_url(&self) -> Option<&str> {
        self.image_url.as_deref()
    }

    pub fn has_promotion(&self, promotion: Promotion) -> bool {
        self.promotions.contains(&promotion)
    }

    pub fn is_in_stock(&self) -> bool {
        self.stock > 0
    }

    pub(crate) fn take_one(&mut self) -> DomainResult<()> {
        if self.stock == 0 {
            return Err(DomainError::out_of_stock(self.name.as_str()));
        }
        self.stock -= 1;
        Ok(())
    }

    pub(crate) fn put_back(&mut self, units: u32) {
        self.stock += units;
    }
}

impl Entity for Product {
    type Id = ProductName;

    fn id(&self) -> &Self::Id {
        &self.name
    }
}
