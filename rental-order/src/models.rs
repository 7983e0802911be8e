use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use rental_catalog::CatalogItem;
use rental_core::{DomainError, DomainResult};
use rental_shared::round2;

use crate::status::OrderStatus;

/// Advisory tax flag stored per line. Totals do not apply tax; the field is
/// recorded for a tax calculation that was never specified upstream.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TaxStatus {
    #[default]
    Taxable,
    Nontaxable,
}

/// One catalog item at a quantity inside an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OrderLine {
    item: CatalogItem,
    qty: u32,
    tax_status: TaxStatus,
    discount: f64,
}

impl OrderLine {
    pub fn new(
        item: CatalogItem,
        qty: u32,
        tax_status: TaxStatus,
        discount: f64,
    ) -> DomainResult<Self> {
        if qty == 0 {
            return Err(DomainError::Validation(
                "quantity must be a positive integer".to_string(),
            ));
        }
        if discount < 0.0 {
            return Err(DomainError::Validation(format!(
                "discount must be >= 0, got {discount}"
            )));
        }
        Ok(Self {
            item,
            qty,
            tax_status,
            discount,
        })
    }

    pub fn item(&self) -> &CatalogItem {
        &self.item
    }

    pub fn qty(&self) -> u32 {
        self.qty
    }

    pub fn tax_status(&self) -> TaxStatus {
        self.tax_status
    }

    pub fn discount(&self) -> f64 {
        self.discount
    }

    /// Line subtotal. A discount larger than the gross price floors the
    /// subtotal at zero rather than failing.
    pub fn subtotal(&self) -> f64 {
        // qty was validated at construction, so quantity pricing cannot fail.
        let gross = round2(self.item.unit_price() * f64::from(self.qty));
        round2((gross - self.discount).max(0.0))
    }

    pub fn weight(&self) -> f64 {
        self.item.unit_weight() * f64::from(self.qty)
    }
}

/// Aggregate of order lines with a cached total and a status workflow.
///
/// The total is recomputed synchronously after every line mutation and is
/// never left stale; weight is summed on demand instead.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    created_at: DateTime<Utc>,
    status: OrderStatus,
    total_amount: f64,
    lines: Vec<OrderLine>,
}

impl Order {
    pub fn new() -> Self {
        Self::from_parts(Utc::now(), OrderStatus::Create)
    }

    /// Rebuild from stored fields; the persistence layer maps rows to these.
    pub fn from_parts(created_at: DateTime<Utc>, status: OrderStatus) -> Self {
        Self {
            created_at,
            status,
            total_amount: 0.0,
            lines: Vec::new(),
        }
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn status(&self) -> OrderStatus {
        self.status
    }

    pub fn total_amount(&self) -> f64 {
        self.total_amount
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn add_line_item(
        &mut self,
        item: CatalogItem,
        qty: u32,
        discount: f64,
        tax_status: TaxStatus,
    ) -> DomainResult<()> {
        let line = OrderLine::new(item, qty, tax_status, discount)?;
        self.lines.push(line);
        self.recalculate_totals();
        Ok(())
    }

    /// Remove the line at `index` and recompute the total. An out-of-bounds
    /// index is silently ignored.
    pub fn remove_line_item(&mut self, index: usize) {
        if index >= self.lines.len() {
            return;
        }
        self.lines.remove(index);
        self.recalculate_totals();
    }

    fn recalculate_totals(&mut self) {
        self.total_amount = round2(self.lines.iter().map(OrderLine::subtotal).sum());
    }

    pub fn total_weight(&self) -> f64 {
        self.lines.iter().map(OrderLine::weight).sum()
    }

    /// One step forward along the chain; a no-op at the terminal state.
    pub fn advance_status(&mut self) {
        if let Some(next) = self.status.successor() {
            tracing::debug!(from = ?self.status, to = ?next, "order status advanced");
            self.status = next;
        }
    }

    /// Explicit transition, rejected unless `(current, next)` is an adjacent
    /// pair in the workflow.
    pub fn set_status(&mut self, next: OrderStatus) -> DomainResult<()> {
        self.status.check_transition(next)?;
        tracing::debug!(from = ?self.status, to = ?next, "order status set");
        self.status = next;
        Ok(())
    }
}

impl Default for Order {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str, price: f64, weight: f64) -> CatalogItem {
        CatalogItem::new(id, "test item", price, weight).unwrap()
    }

    #[test]
    fn line_validation() {
        assert!(OrderLine::new(item("a", 10.0, 1.0), 0, TaxStatus::Taxable, 0.0).is_err());
        assert!(OrderLine::new(item("a", 10.0, 1.0), 1, TaxStatus::Taxable, -0.5).is_err());
    }

    #[test]
    fn discount_floors_the_subtotal_at_zero() {
        let line = OrderLine::new(item("a", 10.0, 1.0), 2, TaxStatus::Taxable, 25.0).unwrap();
        assert_eq!(line.subtotal(), 0.0);
    }

    #[test]
    fn totals_follow_every_mutation() {
        let mut order = Order::new();
        order
            .add_line_item(item("a", 10.0, 1.0), 2, 0.0, TaxStatus::Taxable)
            .unwrap();
        order
            .add_line_item(item("b", 15.0, 2.0), 1, 5.0, TaxStatus::Nontaxable)
            .unwrap();
        // 20.00 + (15.00 - 5.00)
        assert_eq!(order.total_amount(), 30.0);

        order.remove_line_item(1);
        assert_eq!(order.total_amount(), 20.0);
        assert_eq!(order.lines().len(), 1);
    }

    #[test]
    fn out_of_bounds_removal_is_ignored() {
        let mut order = Order::new();
        order
            .add_line_item(item("a", 10.0, 1.0), 1, 0.0, TaxStatus::Taxable)
            .unwrap();
        order.remove_line_item(5);
        assert_eq!(order.lines().len(), 1);
        assert_eq!(order.total_amount(), 10.0);
    }

    #[test]
    fn weight_is_summed_on_demand() {
        let mut order = Order::new();
        order
            .add_line_item(item("a", 10.0, 1.5), 2, 0.0, TaxStatus::Taxable)
            .unwrap();
        order
            .add_line_item(item("b", 5.0, 4.0), 1, 0.0, TaxStatus::Taxable)
            .unwrap();
        assert_eq!(order.total_weight(), 7.0);
    }

    #[test]
    fn advance_walks_the_chain_and_stops_at_paid() {
        let mut order = Order::new();
        order.advance_status();
        assert_eq!(order.status(), OrderStatus::Shipping);
        order.advance_status();
        order.advance_status();
        assert_eq!(order.status(), OrderStatus::Paid);

        // Terminal state: no-op, no panic.
        order.advance_status();
        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[test]
    fn set_status_rejects_jumps() {
        let mut order = Order::new();
        let err = order.set_status(OrderStatus::Paid).unwrap_err();
        assert!(matches!(
            err,
            rental_core::DomainError::IllegalTransition { .. }
        ));
        assert_eq!(order.status(), OrderStatus::Create);

        order.set_status(OrderStatus::Shipping).unwrap();
        order.set_status(OrderStatus::Delivered).unwrap();
        order.set_status(OrderStatus::Paid).unwrap();
        assert_eq!(order.status(), OrderStatus::Paid);
    }

    #[test]
    fn from_parts_keeps_the_stored_state() {
        let when = Utc::now();
        let order = Order::from_parts(when, OrderStatus::Shipping);
        assert_eq!(order.created_at(), when);
        assert_eq!(order.status(), OrderStatus::Shipping);
        assert_eq!(order.total_amount(), 0.0);
    }
}
