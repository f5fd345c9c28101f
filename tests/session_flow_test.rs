//! End-to-end session behavior: connect, clock, chat and charging.

mod common;

use common::*;
use soulstream::adapters::{MockGenerator, RecordingCaptureDevice};
use soulstream::app::{Focus, Overlay};
use soulstream::generation::{GREETING_FALLBACK, REPLY_FALLBACK};
use soulstream::models::{HealerId, Money, SessionMode, TransactionKind, TranscriptRole};
use soulstream::session::SessionPhase;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test(start_paused = true)]
async fn test_two_minute_video_session_charges_five_dollars() {
    let mut app = TestAppBuilder::new().build();
    assert!(app.start_session(&HealerId::new("h1"), SessionMode::Video));
    assert_eq!(app.session.as_ref().unwrap().phase(), SessionPhase::Connecting);

    connect(&mut app).await;
    run_for(&mut app, 120).await;
    assert_eq!(app.session.as_ref().unwrap().elapsed_label(), "02:00");

    let outcome = app.end_session().unwrap();
    assert_eq!(outcome.cost, Money::from_cents(500));
    assert_eq!(app.wallet.balance(), Money::from_cents(14500));

    let debits: Vec<_> = app
        .wallet
        .ledger()
        .iter()
        .filter(|t| t.kind == TransactionKind::Debit)
        .collect();
    assert_eq!(debits.len(), 1);
    assert_eq!(debits[0].amount, Money::from_cents(500));
    assert_eq!(debits[0].healer_name.as_deref(), Some("Dr. Seraphina Moon"));
    assert_eq!(app.overlay(), Overlay::Summary);
}

#[tokio::test(start_paused = true)]
async fn test_ninety_seconds_is_prorated() {
    assert_eq!(Money::for_duration(Money::from_cents(200), 90), Money::from_cents(300));

    let mut app = TestAppBuilder::new().build();
    app.start_session(&HealerId::new("h2"), SessionMode::Voice);
    connect(&mut app).await;
    run_for(&mut app, 90).await;
    assert_eq!(app.session.as_ref().unwrap().running_cost(), Money::from_cents(270));
    let outcome = app.end_session().unwrap();
    assert_eq!(outcome.cost, Money::from_cents(270));
}

#[tokio::test(start_paused = true)]
async fn test_clock_does_not_run_while_connecting() {
    let mut app = TestAppBuilder::new().build();
    app.start_session(&HealerId::new("h1"), SessionMode::Text);
    advance(&mut app, Duration::from_millis(1000)).await;
    assert_eq!(app.session.as_ref().unwrap().elapsed_secs(), 0);

    // Ending before connect costs nothing
    let outcome = app.end_session().unwrap();
    assert_eq!(outcome.cost, Money::ZERO);
    assert_eq!(app.wallet.balance(), Money::from_dollars(150));
}

#[tokio::test(start_paused = true)]
async fn test_second_start_is_rejected() {
    let mut app = TestAppBuilder::new().build();
    assert!(app.start_session(&HealerId::new("h1"), SessionMode::Video));
    assert!(!app.start_session(&HealerId::new("h2"), SessionMode::Text));
    assert_eq!(app.session.as_ref().unwrap().healer().id, HealerId::new("h1"));
    assert!(app.status.is_some());
}

#[tokio::test(start_paused = true)]
async fn test_greeting_then_reply() {
    let generator = MockGenerator::with_replies(["Breathe with me."]).with_greeting("Hello, seeker.");
    let mut app = TestAppBuilder::new().with_generator(generator.clone()).build();
    app.start_session(&HealerId::new("h2"), SessionMode::Text);
    assert_eq!(app.focus, Focus::Chat);
    connect(&mut app).await;
    drain(&mut app).await;

    let transcript = app.session.as_ref().unwrap().transcript().to_vec();
    assert_eq!(transcript.len(), 1);
    assert_eq!(transcript[0].role, TranscriptRole::Persona);
    assert_eq!(transcript[0].text, "Hello, seeker.");

    app.handle_paste("I feel restless");
    assert!(app.send_chat());
    assert!(app.session.as_ref().unwrap().is_composing());
    drain(&mut app).await;

    let session = app.session.as_ref().unwrap();
    assert!(!session.is_composing());
    let texts: Vec<_> = session.transcript().iter().map(|m| m.text.as_str()).collect();
    assert_eq!(texts, ["Hello, seeker.", "I feel restless", "Breathe with me."]);

    let calls = generator.reply_calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].persona_name, "Master Kenji");
    assert_eq!(calls[0].message, "I feel restless");
}

#[tokio::test(start_paused = true)]
async fn test_generation_failure_adds_one_fallback_entry() {
    let mut app = TestAppBuilder::new().with_generator(MockGenerator::failing()).build();
    app.start_session(&HealerId::new("h1"), SessionMode::Text);
    connect(&mut app).await;
    drain(&mut app).await;

    app.handle_paste("hello");
    app.send_chat();
    drain(&mut app).await;

    let transcript = app.session.as_ref().unwrap().transcript().to_vec();
    assert_eq!(transcript.len(), 3);
    assert_eq!(transcript[0].text, GREETING_FALLBACK);
    let fallbacks = transcript.iter().filter(|m| m.text == REPLY_FALLBACK).count();
    assert_eq!(fallbacks, 1);
    assert!(!app.session.as_ref().unwrap().is_composing());
}

#[tokio::test(start_paused = true)]
async fn test_blank_message_is_not_sent() {
    let generator = MockGenerator::new();
    let mut app = TestAppBuilder::new().with_generator(generator.clone()).build();
    app.start_session(&HealerId::new("h1"), SessionMode::Text);
    connect(&mut app).await;
    app.handle_paste("   ");
    assert!(!app.send_chat());
    drain(&mut app).await;
    assert!(generator.reply_calls().is_empty());
}

#[tokio::test(start_paused = true)]
async fn test_late_reply_after_end_is_ignored() {
    let mut app = TestAppBuilder::new().build();
    app.start_session(&HealerId::new("h1"), SessionMode::Text);
    connect(&mut app).await;
    let stale = app.session.as_ref().unwrap().id();
    app.end_session();
    app.skip_review();

    app.start_session(&HealerId::new("h2"), SessionMode::Text);
    app.message_tx
        .send(soulstream::app::AppMessage::ReplyReady {
            session: stale,
            text: "from the past".to_string(),
        })
        .unwrap();
    drain(&mut app).await;

    let session = app.session.as_ref().unwrap();
    assert!(session.transcript().iter().all(|m| m.text != "from the past"));
}

#[tokio::test(start_paused = true)]
async fn test_capture_unavailable_session_still_runs() {
    let mut app = TestAppBuilder::new().without_capture().build();
    assert!(app.start_session(&HealerId::new("h1"), SessionMode::Video));
    let session = app.session.as_ref().unwrap();
    assert!(session.capture_unavailable());
    assert!(session.capture().is_none());

    connect(&mut app).await;
    run_for(&mut app, 3).await;
    app.session.as_mut().unwrap().toggle_mute();
    assert!(app.session.as_ref().unwrap().is_muted());
}

#[tokio::test(start_paused = true)]
async fn test_end_releases_capture_and_stops_clock() {
    let device = RecordingCaptureDevice::new();
    let mut app = TestAppBuilder::new().with_capture(Arc::new(device.clone())).build();
    app.start_session(&HealerId::new("h1"), SessionMode::Video);
    assert_eq!(device.open_streams(), 1);
    connect(&mut app).await;
    run_for(&mut app, 2).await;

    let outcome = app.end_session().unwrap();
    assert_eq!(outcome.elapsed_secs, 2);
    assert_eq!(device.released(), 1);
    assert_eq!(device.open_streams(), 0);

    advance(&mut app, Duration::from_secs(5)).await;
    assert!(app.session.is_none());
    assert_eq!(app.last_session.as_ref().unwrap().elapsed_secs, 2);
}

#[tokio::test(start_paused = true)]
async fn test_end_while_connecting_releases_capture() {
    let device = RecordingCaptureDevice::new();
    let mut app = TestAppBuilder::new().with_capture(Arc::new(device.clone())).build();
    app.start_session(&HealerId::new("h2"), SessionMode::Voice);
    app.end_session();
    assert_eq!(device.acquired(), 1);
    assert_eq!(device.open_streams(), 0);
}

#[tokio::test(start_paused = true)]
async fn test_quit_and_drop_release_live_capture() {
    let device = RecordingCaptureDevice::new();
    let mut app = TestAppBuilder::new().with_capture(Arc::new(device.clone())).build();
    app.start_session(&HealerId::new("h1"), SessionMode::Video);
    connect(&mut app).await;

    app.quit();
    assert!(app.should_quit);
    assert_eq!(device.open_streams(), 0);
    drop(app);
    assert_eq!(device.released(), 1);

    // A session dropped without quitting still hands its tracks back
    let mut app = TestAppBuilder::new().with_capture(Arc::new(device.clone())).build();
    app.start_session(&HealerId::new("h2"), SessionMode::Voice);
    connect(&mut app).await;
    drop(app);
    assert_eq!(device.acquired(), 2);
    assert_eq!(device.open_streams(), 0);
}
