use serde::{Deserialize, Serialize};
use std::fmt;

/// A card number that never renders more than its last four digits.
///
/// `Debug` and `Display` are masked so the full number cannot leak through
/// log macros like `tracing::info!("{:?}", payment)`. Serialization keeps
/// the real value, which the persistence layer needs to round-trip rows.
#[derive(Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CardNumber(String);

impl CardNumber {
    pub fn new(number: impl Into<String>) -> Self {
        Self(number.into())
    }

    /// Final four characters, or the whole string when it is shorter.
    pub fn last4(&self) -> &str {
        let cut = self.0.len().saturating_sub(4);
        self.0.get(cut..).unwrap_or(&self.0)
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Debug for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "CardNumber(**** {})", self.last4())
    }
}

impl fmt::Display for CardNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "**** {}", self.last4())
    }
}
