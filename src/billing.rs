//! Simulated wallet top-up: plan selection, a processing pause, success.

use tracing::{debug, info};

use crate::models::Money;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Plan {
    pub id: &'static str,
    pub name: &'static str,
    pub amount: Money,
    pub bonus: Money,
    pub popular: bool,
}

impl Plan {
    /// What the wallet receives: base amount plus bonus.
    pub fn credit(&self) -> Money {
        self.amount + self.bonus
    }
}

pub const PLANS: &[Plan] = &[
    Plan {
        id: "p1",
        name: "Standard Pack",
        amount: Money::from_dollars(20),
        bonus: Money::ZERO,
        popular: false,
    },
    Plan {
        id: "p2",
        name: "Wisdom Pack",
        amount: Money::from_dollars(50),
        bonus: Money::from_dollars(5),
        popular: true,
    },
    Plan {
        id: "p3",
        name: "Healing Pack",
        amount: Money::from_dollars(100),
        bonus: Money::from_dollars(15),
        popular: false,
    },
    Plan {
        id: "p4",
        name: "Mastery Pack",
        amount: Money::from_dollars(250),
        bonus: Money::from_dollars(50),
        popular: false,
    },
];

pub const DEFAULT_PLAN: &str = "p2";

pub fn plan(id: &str) -> Option<&'static Plan> {
    PLANS.iter().find(|p| p.id == id)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BillingStep {
    Selection,
    Processing,
    Success,
}

/// Identifies one confirmation so a settle from an abandoned flow is ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BillingToken(u64);

impl BillingToken {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BillingFlow {
    step: BillingStep,
    selected: usize,
    token: BillingToken,
}

impl BillingFlow {
    /// A new flow with the popular plan preselected. `token` must be unique
    /// per flow.
    pub fn new(token: BillingToken) -> Self {
        let selected = PLANS.iter().position(|p| p.id == DEFAULT_PLAN).unwrap_or(0);
        Self {
            step: BillingStep::Selection,
            selected,
            token,
        }
    }

    pub fn step(&self) -> BillingStep {
        self.step
    }

    pub fn selected(&self) -> &'static Plan {
        &PLANS[self.selected]
    }

    pub fn selected_index(&self) -> usize {
        self.selected
    }

    pub fn select_next(&mut self) {
        if self.step == BillingStep::Selection {
            self.selected = (self.selected + 1) % PLANS.len();
        }
    }

    pub fn select_prev(&mut self) {
        if self.step == BillingStep::Selection {
            self.selected = (self.selected + PLANS.len() - 1) % PLANS.len();
        }
    }

    /// Select by plan id. Returns false for unknown ids or outside selection.
    pub fn select(&mut self, id: &str) -> bool {
        if self.step != BillingStep::Selection {
            return false;
        }
        match PLANS.iter().position(|p| p.id == id) {
            Some(index) => {
                self.selected = index;
                true
            }
            None => false,
        }
    }

    /// Selection → Processing. Returns the token the settle must present.
    pub fn confirm(&mut self) -> Option<BillingToken> {
        if self.step != BillingStep::Selection {
            return None;
        }
        self.step = BillingStep::Processing;
        info!(plan = self.selected().id, "payment processing");
        Some(self.token)
    }

    /// Processing → Success if `token` belongs to this flow.
    pub fn settle(&mut self, token: BillingToken) -> bool {
        if self.step != BillingStep::Processing || token != self.token {
            debug!(?token, "ignoring stale billing settle");
            return false;
        }
        self.step = BillingStep::Success;
        true
    }

    /// The credit owed once the flow has succeeded.
    pub fn finish(&self) -> Option<Money> {
        (self.step == BillingStep::Success).then(|| self.selected().credit())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plan_credits() {
        let credits: Vec<u64> = PLANS.iter().map(|p| p.credit().cents()).collect();
        assert_eq!(credits, vec![2_000, 5_500, 11_500, 30_000]);
        assert!(plan("p2").unwrap().popular);
        assert!(plan("p9").is_none());
    }

    #[test]
    fn test_default_selection_is_popular() {
        let flow = BillingFlow::new(BillingToken::new(1));
        assert_eq!(flow.selected().id, "p2");
        assert_eq!(flow.step(), BillingStep::Selection);
    }

    #[test]
    fn test_selection_wraps() {
        let mut flow = BillingFlow::new(BillingToken::new(1));
        flow.select_next();
        flow.select_next();
        assert_eq!(flow.selected().id, "p4");
        flow.select_next();
        assert_eq!(flow.selected().id, "p1");
        flow.select_prev();
        assert_eq!(flow.selected().id, "p4");
    }

    #[test]
    fn test_full_flow() {
        let mut flow = BillingFlow::new(BillingToken::new(7));
        assert!(flow.select("p3"));
        let token = flow.confirm().unwrap();
        assert_eq!(flow.finish(), None);
        assert!(!flow.select("p1"));
        assert!(flow.confirm().is_none());
        assert!(flow.settle(token));
        assert_eq!(flow.finish(), Some(Money::from_dollars(115)));
    }

    #[test]
    fn test_settle_with_wrong_token_is_ignored() {
        let mut flow = BillingFlow::new(BillingToken::new(2));
        flow.confirm();
        assert!(!flow.settle(BillingToken::new(1)));
        assert_eq!(flow.step(), BillingStep::Processing);
    }
}
