pub mod customer;
pub mod payment;

pub use customer::Customer;
pub use payment::{Payment, PaymentMethod, PaymentReceipt};

#[derive(Debug, thiserror::Error)]
pub enum DomainError {
    #[error("Validation failed: {0}")]
    Validation(String),
    #[error("Reservation conflict: {0}")]
    Conflict(String),
    #[error("Illegal status change {from} -> {to}")]
    IllegalTransition { from: String, to: String },
}

pub type DomainResult<T> = Result<T, DomainError>;
