//! Products with a percentage discount.

use crate::error::{PricingError, PricingResult};
use recipebook_core::PricingConfig;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

/// A named product with a base price and an optional percentage discount.
///
/// Deserialization goes through the same checks as construction.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "RawProduct")]
pub struct Product {
    name: String,
    price: f64,
    discount_percent: f64,
    max_discount_percent: f64,
}

impl Product {
    /// Create a product using the default discount ceiling.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidPrice` if `price` is negative or not finite.
    pub fn new(name: impl Into<String>, price: f64) -> PricingResult<Self> {
        Self::with_config(name, price, &PricingConfig::default())
    }

    /// Create a product whose discount ceiling comes from `config`.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidCeiling` if the ceiling is not a finite
    /// percentage in `[0, 100]`, and `PricingError::InvalidPrice` as for
    /// [`Product::new`].
    pub fn with_config(
        name: impl Into<String>,
        price: f64,
        config: &PricingConfig,
    ) -> PricingResult<Self> {
        config
            .validate()
            .map_err(|e| PricingError::InvalidCeiling(e.to_string()))?;

        if !price.is_finite() || price < 0.0 {
            return Err(PricingError::InvalidPrice(price));
        }

        Ok(Self {
            name: name.into(),
            price,
            discount_percent: 0.0,
            max_discount_percent: config.max_discount_percent,
        })
    }

    /// Get the product name.
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Get the base price.
    #[must_use]
    pub fn price(&self) -> f64 {
        self.price
    }

    /// Get the currently applied discount in percent.
    #[must_use]
    pub fn discount_percent(&self) -> f64 {
        self.discount_percent
    }

    /// Apply a discount, replacing any previous one.
    ///
    /// # Errors
    /// Returns `PricingError::InvalidDiscount` if `percent` is negative, not
    /// finite, or above the discount ceiling. The product is left unchanged.
    pub fn apply_discount(&mut self, percent: f64) -> PricingResult<()> {
        if !percent.is_finite() || percent < 0.0 || percent > self.max_discount_percent {
            warn!(product = %self.name, percent, "rejected discount");
            return Err(PricingError::InvalidDiscount {
                percent,
                max: self.max_discount_percent,
            });
        }

        self.discount_percent = percent;
        debug!(product = %self.name, percent, final_price = self.final_price(), "applied discount");
        Ok(())
    }

    /// Price after the current discount.
    #[must_use]
    pub fn final_price(&self) -> f64 {
        self.price * (100.0 - self.discount_percent) / 100.0
    }
}

/// Unchecked wire form of [`Product`].
#[derive(Deserialize)]
struct RawProduct {
    name: String,
    price: f64,
    #[serde(default)]
    discount_percent: f64,
    #[serde(default = "default_max_discount_percent")]
    max_discount_percent: f64,
}

fn default_max_discount_percent() -> f64 {
    PricingConfig::default().max_discount_percent
}

impl TryFrom<RawProduct> for Product {
    type Error = PricingError;

    fn try_from(raw: RawProduct) -> PricingResult<Self> {
        let config = PricingConfig {
            max_discount_percent: raw.max_discount_percent,
        };
        let mut product = Self::with_config(raw.name, raw.price, &config)?;
        product.apply_discount(raw.discount_percent)?;
        Ok(product)
    }
}
