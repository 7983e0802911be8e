use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use uuid::Uuid;

use rental_shared::{round2, CardNumber};

use crate::{DomainError, DomainResult};

/// Outcome of a charge or refund, handed back to the booking flow.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentReceipt {
    pub ok: bool,
    pub method: String,
    pub id: String,
    pub amount: f64,
    pub at: DateTime<Utc>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub meta: Option<Value>,
}

/// Settlement instrument. The variant set is closed by design (cash, credit,
/// wire only), so callers get exhaustiveness checking instead of an open
/// subclass hierarchy.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PaymentMethod {
    Cash {
        tendered: f64,
    },
    Credit {
        number: CardNumber,
        card_type: String,
        expiry: String,
        holder: String,
        auth_code: Option<String>,
    },
    Wire {
        bank_id: String,
        bank_name: String,
    },
}

/// A single charge/refund capability, exclusively owned by the flow that
/// created it. `settled_at` records the most recent settlement operation
/// only; a refund after a charge overwrites it.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Payment {
    id: String,
    amount: f64,
    settled_at: Option<DateTime<Utc>>,
    method: PaymentMethod,
}

impl Payment {
    pub fn cash(id: impl Into<String>, amount: f64, tendered: f64) -> DomainResult<Self> {
        if tendered < amount {
            return Err(DomainError::Validation(format!(
                "cash tendered {tendered} does not cover amount {amount}"
            )));
        }
        Self::from_parts(id.into(), amount, None, PaymentMethod::Cash { tendered })
    }

    pub fn credit(
        id: impl Into<String>,
        amount: f64,
        number: CardNumber,
        card_type: impl Into<String>,
        expiry: impl Into<String>,
        holder: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::from_parts(
            id.into(),
            amount,
            None,
            PaymentMethod::Credit {
                number,
                card_type: card_type.into(),
                expiry: expiry.into(),
                holder: holder.into(),
                auth_code: None,
            },
        )
    }

    pub fn wire(
        id: impl Into<String>,
        amount: f64,
        bank_id: impl Into<String>,
        bank_name: impl Into<String>,
    ) -> DomainResult<Self> {
        Self::from_parts(
            id.into(),
            amount,
            None,
            PaymentMethod::Wire {
                bank_id: bank_id.into(),
                bank_name: bank_name.into(),
            },
        )
    }

    /// Rebuild from stored fields; the persistence layer maps rows to these.
    pub fn from_parts(
        id: String,
        amount: f64,
        settled_at: Option<DateTime<Utc>>,
        method: PaymentMethod,
    ) -> DomainResult<Self> {
        if amount < 0.0 {
            return Err(DomainError::Validation(format!(
                "payment amount must be >= 0, got {amount}"
            )));
        }
        Ok(Self {
            id,
            amount,
            settled_at,
            method,
        })
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> f64 {
        self.amount
    }

    /// Most recent settlement time, or `None` before the first operation.
    pub fn settled_at(&self) -> Option<DateTime<Utc>> {
        self.settled_at
    }

    pub fn method(&self) -> &PaymentMethod {
        &self.method
    }

    /// Change due on a cash payment; `None` for the other variants.
    pub fn change(&self) -> Option<f64> {
        match &self.method {
            PaymentMethod::Cash { tendered } => Some(round2(tendered - self.amount)),
            _ => None,
        }
    }

    /// Settle the full amount. Infallible once constructed: declines and
    /// network failures belong to a real provider integration behind this
    /// seam, not to this layer.
    pub async fn charge(&mut self) -> PaymentReceipt {
        let at = Utc::now();
        self.settled_at = Some(at);

        let (method, meta) = match &mut self.method {
            PaymentMethod::Cash { tendered } => {
                let change = round2(*tendered - self.amount);
                ("cash", Some(json!({ "change": change })))
            }
            PaymentMethod::Credit {
                number,
                card_type,
                auth_code,
                ..
            } => {
                let code = settlement_code("AUTH", 6);
                *auth_code = Some(code.clone());
                (
                    "credit",
                    Some(json!({
                        "authCode": code,
                        "type": card_type,
                        "last4": number.last4(),
                    })),
                )
            }
            PaymentMethod::Wire { bank_id, bank_name } => {
                let confirmation = settlement_code("WT", 8);
                (
                    "wire",
                    Some(json!({
                        "bankID": bank_id,
                        "bankName": bank_name,
                        "confirmation": confirmation,
                    })),
                )
            }
        };

        tracing::debug!(payment = %self.id, method, "payment charged");
        PaymentReceipt {
            ok: true,
            method: method.to_string(),
            id: self.id.clone(),
            amount: self.amount,
            at,
            meta,
        }
    }

    /// Refund the full amount, or `partial_amount` when given. Overwrites
    /// the settlement timestamp.
    pub async fn refund(&mut self, partial_amount: Option<f64>) -> PaymentReceipt {
        let at = Utc::now();
        self.settled_at = Some(at);
        let amount = partial_amount.unwrap_or(self.amount);

        let (method, meta) = match &self.method {
            PaymentMethod::Cash { .. } => ("cash-refund", None),
            PaymentMethod::Credit { auth_code, .. } => (
                "credit-refund",
                // Auth code of the most recent charge, or null if never charged.
                Some(json!({ "originalAuthCode": auth_code })),
            ),
            PaymentMethod::Wire { bank_id, .. } => {
                ("wire-refund", Some(json!({ "bankID": bank_id })))
            }
        };

        tracing::debug!(payment = %self.id, method, amount, "payment refunded");
        PaymentReceipt {
            ok: true,
            method: method.to_string(),
            id: self.id.clone(),
            amount,
            at,
            meta,
        }
    }
}

// Codes only need to be unique enough for reconciliation, not secret.
fn settlement_code(prefix: &str, len: usize) -> String {
    let token = Uuid::new_v4().simple().to_string();
    format!("{}-{}", prefix, token[..len].to_uppercase())
}
