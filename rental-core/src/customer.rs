use serde::{Deserialize, Serialize};

/// Account holder on file. The booking flow checks the active flag before
/// accepting a new reservation; the core only stores it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub delivery_address: String,
    pub contact: String,
    pub active: bool,
}

impl Customer {
    pub fn new(
        name: impl Into<String>,
        delivery_address: impl Into<String>,
        contact: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            delivery_address: delivery_address.into(),
            contact: contact.into(),
            active: true,
        }
    }

    pub fn activate(&mut self) {
        self.active = true;
    }

    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
