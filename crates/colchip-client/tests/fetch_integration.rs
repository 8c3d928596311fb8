//! Integration tests for the column fetch service.

use std::time::Duration;

use colchip_client::{
    fetch_columns, ColumnService, FetchConfig, FetchError, FixedDraw, SeededSource,
};
use colchip_core::reference_columns;
use futures::future::join_all;
use tokio::time::Instant;

const TRIALS: usize = 2000;

/// Accepted band for failures out of `TRIALS` at p = 0.05.
///
/// Mean is 100 with a standard deviation of about 9.75; the band is five
/// standard deviations wide on each side.
fn failure_band() -> std::ops::RangeInclusive<usize> {
    51..=149
}

#[tokio::test(start_paused = true)]
async fn test_success_waits_full_delay() {
    let service = ColumnService::new(FetchConfig::default()).with_source(FixedDraw(0.9));

    let start = Instant::now();
    let result = service.fetch_columns().await;
    assert!(result.is_ok());
    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[tokio::test(start_paused = true)]
async fn test_failure_waits_full_delay() {
    let service = ColumnService::new(FetchConfig::default()).with_source(FixedDraw(0.0));

    let start = Instant::now();
    let result = service.fetch_columns().await;
    assert_eq!(result, Err(FetchError::Api));
    assert!(start.elapsed() >= Duration::from_millis(500));
}

#[tokio::test]
async fn test_concurrent_calls_resolve_independently() {
    let delay = Duration::from_millis(50);
    let service = ColumnService::new(FetchConfig::new().with_delay(delay).never_fail());

    let calls = (0..8).map(|_| {
        let service = service.clone();
        tokio::spawn(async move {
            let start = std::time::Instant::now();
            let result = service.fetch_columns().await;
            (start.elapsed(), result)
        })
    });

    for handle in join_all(calls).await {
        let (elapsed, result) = handle.unwrap();
        assert!(elapsed >= delay, "resolved after {:?}", elapsed);
        assert_eq!(result.unwrap(), reference_columns());
    }
}

#[tokio::test]
async fn test_seeded_failure_rate() {
    let service = ColumnService::new(FetchConfig::new().with_delay(Duration::ZERO))
        .with_source(SeededSource::new(7));

    let mut failures = 0;
    for _ in 0..TRIALS {
        match service.fetch_columns().await {
            Ok(columns) => assert_eq!(columns, reference_columns()),
            Err(err) => {
                assert_eq!(err.to_string(), "API Error: Failed to fetch columns");
                failures += 1;
            }
        }
    }

    assert!(
        failure_band().contains(&failures),
        "{} failures out of {}",
        failures,
        TRIALS
    );
}

#[tokio::test(start_paused = true)]
async fn test_default_fetch_failure_rate() {
    let expected = reference_columns();
    let start = Instant::now();

    let results = join_all((0..TRIALS).map(|_| fetch_columns())).await;
    assert!(start.elapsed() >= Duration::from_millis(500));

    let mut failures = 0;
    for result in results {
        match result {
            Ok(columns) => assert_eq!(columns, expected),
            Err(FetchError::Api) => failures += 1,
        }
    }

    assert!(
        failure_band().contains(&failures),
        "{} failures out of {}",
        failures,
        TRIALS
    );
}

#[tokio::test(start_paused = true)]
async fn test_caller_can_time_out() {
    let service = ColumnService::default();
    let result = tokio::time::timeout(Duration::from_millis(100), service.fetch_columns()).await;
    assert!(result.is_err());
}
