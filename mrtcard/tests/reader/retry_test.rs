use crate::common;
use crate::common::fixtures::{fare_block, polling_response, read_response_with_status};

use mrtcard::reader::{NfcReader, ReaderConfig};
use mrtcard::transport::MockTransport;
use mrtcard::types::TagId;
use mrtcard::utils::ms;
use mrtcard::{Error, TransportErrorKind};
use tokio::time::Instant;

#[tokio::test(start_paused = true)]
async fn fails_twice_then_succeeds() -> anyhow::Result<()> {
    common::init_logging();
    let (mock, handle) = MockTransport::new();
    let idm = common::fixtures::sample_idm();

    for _ in 0..3 {
        handle.present(TagId::new("card"));
    }
    // Two attempts rejected by the card, then a clean read.
    handle.push_response(polling_response(&idm));
    handle.push_response(read_response_with_status(&idm, 0xa4, 0x00, &[]));
    handle.push_response(polling_response(&idm));
    handle.push_response(read_response_with_status(&idm, 0x01, 0xa2, &[]));
    handle.push_response(polling_response(&idm));
    handle.push_response(read_response_with_status(
        &idm,
        0,
        0,
        &[fare_block(50, 10, 440, 300), fare_block(10, 50, 500, 200)],
    ));

    let reader = NfcReader::new(mock);
    let started = Instant::now();
    let outcome = reader.read().await.expect("session was not started");
    let elapsed = started.elapsed();

    assert!(outcome.is_success(), "{:?}", outcome.error());
    assert_eq!(outcome.report().attempts, 3);
    assert_eq!(outcome.report().delays, vec![ms(1_000), ms(2_000)]);
    assert!(elapsed >= ms(3_000) && elapsed < ms(3_100), "{:?}", elapsed);
    assert_eq!(outcome.transactions().map(|t| t.len()), Some(2));

    // one subscription for the whole session
    assert_eq!(handle.scans(), 1);
    assert_eq!(handle.releases(), 1);
    assert_eq!(handle.sent().len(), 6);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn exhausted_retries_report_last_error() -> anyhow::Result<()> {
    let (mock, handle) = MockTransport::new();
    let config = ReaderConfig::builder().retry_attempts(2).build()?;
    let reader = NfcReader::with_config(mock, config)?;

    handle.read_error("tag lost");
    handle.read_error("tag lost again");

    let outcome = reader.read().await.expect("session was not started");
    match outcome.error() {
        Some(Error::MaxRetriesExceeded { attempts: 2, last }) => {
            assert!(matches!(
                **last,
                Error::Transport {
                    kind: TransportErrorKind::ReadError,
                    ..
                }
            ));
        }
        other => panic!("expected MaxRetriesExceeded, got {:?}", other),
    }
    assert_eq!(
        outcome.message().as_deref(),
        Some("Error reading card. Please try again")
    );
    assert_eq!(outcome.report().delays, vec![ms(1_000)]);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn scan_is_retried_after_permission_error() -> anyhow::Result<()> {
    let (mock, handle) = MockTransport::new();
    let idm = common::fixtures::sample_idm();
    handle.fail_next_scan(Error::transport(
        TransportErrorKind::PermissionDenied,
        "denied",
    ));
    handle.present(TagId::new("card"));
    handle.push_response(polling_response(&idm));
    handle.push_response(read_response_with_status(&idm, 0, 0, &[]));

    let reader = NfcReader::new(mock);
    let outcome = reader.read().await.expect("session was not started");

    assert!(outcome.is_success());
    assert_eq!(outcome.report().attempts, 2);
    assert_eq!(handle.scans(), 2);
    assert_eq!(handle.releases(), 1);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn silent_card_times_out_per_exchange() -> anyhow::Result<()> {
    let (mock, handle) = MockTransport::new();
    let config = ReaderConfig::builder()
        .retry_attempts(1)
        .read_timeout(ms(250))
        .build()?;
    let reader = NfcReader::with_config(mock, config)?;

    handle.present(TagId::new("card"));
    // no response queued: the polling exchange never completes

    let started = Instant::now();
    let outcome = reader.read().await.expect("session was not started");
    assert!(started.elapsed() < ms(300));
    assert!(matches!(outcome.error().map(Error::root), Some(Error::Timeout)));
    assert_eq!(handle.sent().len(), 1);
    Ok(())
}
