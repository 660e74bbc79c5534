use crate::common::ManualClock;
use dm_account_client::prelude::*;
use std::sync::atomic::{AtomicU32, Ordering};
use std::time::Duration;

#[test]
fn test_poll_config_new() {
    let config = PollConfig::new();
    assert_eq!(config.attempts, 5);
    assert_eq!(config.delay(), Duration::from_millis(1000));
    assert_eq!(config.limit, 50);
    assert_eq!(config.activation_deadline(), Duration::from_secs(3));
    assert_eq!(config, PollConfig::default());
}

#[test]
fn test_poll_config_builders() {
    let config = PollConfig::new()
        .with_attempts(2)
        .with_delay_ms(10)
        .with_limit(5)
        .with_activation_deadline_ms(100);
    assert_eq!(config.max_attempts(), 2);
    assert_eq!(config.delay(), Duration::from_millis(10));
    assert_eq!(config.limit, 5);
    assert_eq!(config.activation_deadline(), Duration::from_millis(100));
}

#[test]
fn test_zero_attempts_means_one() {
    assert_eq!(PollConfig::new().with_attempts(0).max_attempts(), 1);
}

#[tokio::test]
async fn test_poll_returns_first_hit() {
    let clock = ManualClock::new();
    let config = PollConfig::new().with_attempts(5).with_delay_ms(1000);
    let calls = AtomicU32::new(0);

    let result = poll_until_some(&config, &clock, |attempt| {
        calls.fetch_add(1, Ordering::SeqCst);
        async move { Ok(if attempt == 3 { Some("tok") } else { None }) }
    })
    .await
    .unwrap();

    assert_eq!(result, Some("tok"));
    assert_eq!(calls.load(Ordering::SeqCst), 3);
    assert_eq!(clock.sleeps(), vec![Duration::from_millis(1000); 2]);
}

#[tokio::test]
async fn test_poll_exhausted_without_trailing_sleep() {
    let clock = ManualClock::new();
    let config = PollConfig::new().with_attempts(4).with_delay_ms(250);
    let calls = AtomicU32::new(0);

    let result: Option<()> = poll_until_some(&config, &clock, |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Ok(None) }
    })
    .await
    .unwrap();

    assert_eq!(result, None);
    assert_eq!(calls.load(Ordering::SeqCst), 4);
    assert_eq!(clock.sleeps().len(), 3);
}

#[tokio::test]
async fn test_poll_stops_on_error() {
    let clock = ManualClock::new();
    let config = PollConfig::new().with_attempts(5);
    let calls = AtomicU32::new(0);

    let err = poll_until_some::<(), _, _>(&config, &clock, |_| {
        calls.fetch_add(1, Ordering::SeqCst);
        async { Err(AppError::Assertion("mail service down".into())) }
    })
    .await
    .unwrap_err();

    assert!(matches!(err, AppError::Assertion(_)));
    assert_eq!(calls.load(Ordering::SeqCst), 1);
    assert!(clock.sleeps().is_empty());
}

#[tokio::test]
async fn test_tokio_clock_sleeps() {
    let clock = TokioClock;
    let start = clock.now();
    clock.sleep(Duration::from_millis(5)).await;
    assert!(clock.now().duration_since(start) >= Duration::from_millis(5));
}
