use serde::{Deserialize, Serialize};

use rental_core::{DomainError, DomainResult};
use rental_shared::round2;

/// A priced, weighed unit a customer can order: a fee, an add-on, a product
/// line. Immutable once built.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CatalogItem {
    id: String,
    description: String,
    unit_price: f64,
    unit_weight: f64,
}

impl CatalogItem {
    pub fn new(
        id: impl Into<String>,
        description: impl Into<String>,
        unit_price: f64,
        unit_weight: f64,
    ) -> DomainResult<Self> {
        if unit_price < 0.0 {
            return Err(DomainError::Validation(format!(
                "unit price must be >= 0, got {unit_price}"
            )));
        }
        if unit_weight < 0.0 {
            return Err(DomainError::Validation(format!(
                "unit weight must be >= 0, got {unit_weight}"
            )));
        }
        Ok(Self {
            id: id.into(),
            description: description.into(),
            unit_price,
            unit_weight,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn unit_price(&self) -> f64 {
        self.unit_price
    }

    pub fn unit_weight(&self) -> f64 {
        self.unit_weight
    }

    /// Price of `qty` units, rounded once at the final value.
    pub fn price_for_quantity(&self, qty: u32) -> DomainResult<f64> {
        check_quantity(qty)?;
        Ok(round2(self.unit_price * f64::from(qty)))
    }

    /// Weight of `qty` units. Weight is not money, so no rounding applies.
    pub fn weight_for_quantity(&self, qty: u32) -> DomainResult<f64> {
        check_quantity(qty)?;
        Ok(self.unit_weight * f64::from(qty))
    }
}

fn check_quantity(qty: u32) -> DomainResult<()> {
    if qty == 0 {
        return Err(DomainError::Validation(
            "quantity must be a positive integer".to_string(),
        ));
    }
    Ok(())
}
