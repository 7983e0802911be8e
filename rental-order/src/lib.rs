pub mod models;
pub mod status;

pub use models::{Order, OrderLine, TaxStatus};
pub use status::OrderStatus;
