//! Top-up flow and wallet ledger.

mod common;

use common::*;
use soulstream::billing::BillingStep;
use soulstream::models::{Money, TransactionKind};

#[tokio::test(start_paused = true)]
async fn test_default_plan_credits_fifty_five_dollars() {
    let mut app = TestAppBuilder::new().build();
    assert!(app.open_billing());
    assert_eq!(app.billing.as_ref().unwrap().selected().id, "p2");

    assert!(app.confirm_billing());
    assert_eq!(app.billing.as_ref().unwrap().step(), BillingStep::Processing);
    // Nothing credited while processing
    assert!(app.finish_billing().is_none());

    advance(&mut app, BILLING_DELAY).await;
    assert_eq!(app.billing.as_ref().unwrap().step(), BillingStep::Success);

    assert_eq!(app.finish_billing(), Some(Money::from_dollars(55)));
    assert_eq!(app.wallet.balance(), Money::from_dollars(205));
    assert!(app.billing.is_none());

    let latest = &app.wallet.ledger()[0];
    assert_eq!(latest.kind, TransactionKind::Credit);
    assert_eq!(latest.description, "Wallet Top Up");
    assert_eq!(latest.amount, Money::from_dollars(55));
}

#[tokio::test(start_paused = true)]
async fn test_closing_before_confirm_changes_nothing() {
    let mut app = TestAppBuilder::new().build();
    app.open_billing();
    app.billing.as_mut().unwrap().select("p4");
    app.close_billing();
    advance(&mut app, BILLING_DELAY).await;
    assert_eq!(app.wallet.balance(), Money::from_dollars(150));
    assert!(app.wallet.ledger().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_session_then_top_up_ledger_is_newest_first() {
    let mut app = TestAppBuilder::new().build();
    app.start_session(&soulstream::models::HealerId::new("h1"), soulstream::models::SessionMode::Voice);
    connect(&mut app).await;
    run_for(&mut app, 60).await;
    app.end_session();
    app.skip_review();

    app.open_billing();
    app.billing.as_mut().unwrap().select("p1");
    app.confirm_billing();
    advance(&mut app, BILLING_DELAY).await;
    app.finish_billing();

    assert_eq!(app.wallet.balance(), Money::from_cents(15000 - 250 + 2000));
    let kinds: Vec<_> = app.wallet.ledger().iter().map(|t| t.kind).collect();
    assert_eq!(kinds, [TransactionKind::Credit, TransactionKind::Debit]);
}
