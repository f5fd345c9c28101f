//! The user's wallet and its append-only ledger.

use tracing::{info, warn};

use crate::models::{Money, Transaction};

/// Starting balance for a fresh profile.
pub const INITIAL_BALANCE: Money = Money::from_cents(15_000);

/// How many ledger entries the profile tab lists.
pub const RECENT_LIMIT: usize = 5;

#[derive(Debug, Clone, PartialEq)]
pub struct Wallet {
    balance: Money,
    /// Newest first
    ledger: Vec<Transaction>,
}

impl Default for Wallet {
    fn default() -> Self {
        Self::new(INITIAL_BALANCE)
    }
}

impl Wallet {
    pub fn new(initial: Money) -> Self {
        Self {
            balance: initial,
            ledger: Vec::new(),
        }
    }

    pub fn balance(&self) -> Money {
        self.balance
    }

    pub fn ledger(&self) -> &[Transaction] {
        &self.ledger
    }

    /// Up to `n` entries, newest first.
    pub fn recent(&self, n: usize) -> &[Transaction] {
        &self.ledger[..self.ledger.len().min(n)]
    }

    /// Charge a finished session. The balance floors at zero; the ledger
    /// still records the full cost.
    pub fn debit_session(&mut self, cost: Money, healer_name: &str) -> &Transaction {
        if cost > self.balance {
            warn!(%cost, balance = %self.balance, "session cost exceeds balance, clamping to zero");
        }
        self.balance = self.balance.saturating_sub(cost);
        info!(%cost, balance = %self.balance, healer = healer_name, "wallet debited");
        self.push(Transaction::debit(
            cost,
            format!("Session with {}", healer_name),
            Some(healer_name.to_string()),
        ))
    }

    pub fn credit_top_up(&mut self, amount: Money) -> &Transaction {
        self.balance = self.balance + amount;
        info!(%amount, balance = %self.balance, "wallet credited");
        self.push(Transaction::credit(amount, "Wallet Top Up"))
    }

    fn push(&mut self, tx: Transaction) -> &Transaction {
        self.ledger.insert(0, tx);
        &self.ledger[0]
    }
}
