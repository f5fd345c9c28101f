use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::Money;

/// Direction of a ledger entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum TransactionKind {
    Credit,
    Debit,
}

/// An immutable wallet ledger entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Transaction {
    pub id: String,
    /// Magnitude; direction comes from `kind`
    pub amount: Money,
    pub kind: TransactionKind,
    pub description: String,
    #[serde(default)]
    pub healer_name: Option<String>,
    pub created_at: DateTime<Utc>,
}

impl Transaction {
    pub fn credit(amount: Money, description: impl Into<String>) -> Self {
        Self::new(amount, TransactionKind::Credit, description.into(), None)
    }

    pub fn debit(amount: Money, description: impl Into<String>, healer_name: Option<String>) -> Self {
        Self::new(amount, TransactionKind::Debit, description.into(), healer_name)
    }

    fn new(
        amount: Money,
        kind: TransactionKind,
        description: String,
        healer_name: Option<String>,
    ) -> Self {
        Self {
            id: format!("tx_{}", uuid::Uuid::new_v4().simple()),
            amount,
            kind,
            description,
            healer_name,
            created_at: Utc::now(),
        }
    }

    /// Signed amount in cents: positive for credits, negative for debits.
    pub fn signed_cents(&self) -> i64 {
        let cents = self.amount.cents() as i64;
        match self.kind {
            TransactionKind::Credit => cents,
            TransactionKind::Debit => -cents,
        }
    }

    /// `+$55.00` / `-$5.00`
    pub fn display_amount(&self) -> String {
        match self.kind {
            TransactionKind::Credit => format!("+{}", self.amount),
            TransactionKind::Debit => format!("-{}", self.amount),
        }
    }
}
