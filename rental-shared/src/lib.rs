pub mod money;
pub mod pii;

pub use money::round2;
pub use pii::CardNumber;
