use serde::{Deserialize, Serialize};

use rental_core::{DomainError, DomainResult};

/// Order lifecycle states.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum OrderStatus {
    Create,
    Shipping,
    Delivered,
    Paid,
}

/// The fixed transition table. Allowing a new edge is a one-line change here.
const TRANSITIONS: &[(OrderStatus, OrderStatus)] = &[
    (OrderStatus::Create, OrderStatus::Shipping),
    (OrderStatus::Shipping, OrderStatus::Delivered),
    (OrderStatus::Delivered, OrderStatus::Paid),
];

impl OrderStatus {
    /// Next state along the chain, or `None` at the terminal state.
    pub fn successor(self) -> Option<OrderStatus> {
        TRANSITIONS
            .iter()
            .find(|(from, _)| *from == self)
            .map(|(_, to)| *to)
    }

    pub fn can_transition_to(self, next: OrderStatus) -> bool {
        TRANSITIONS.contains(&(self, next))
    }

    pub(crate) fn check_transition(self, next: OrderStatus) -> DomainResult<()> {
        if self.can_transition_to(next) {
            Ok(())
        } else {
            Err(DomainError::IllegalTransition {
                from: format!("{self:?}"),
                to: format!("{next:?}"),
            })
        }
    }
}
