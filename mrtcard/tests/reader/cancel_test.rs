use std::sync::Arc;

use mrtcard::reader::NfcReader;
use mrtcard::transport::MockTransport;
use mrtcard::utils::ms;

#[tokio::test(start_paused = true)]
async fn stop_releases_and_delivers_nothing() {
    let (mock, handle) = MockTransport::new();
    let reader = Arc::new(NfcReader::new(mock));

    let r = reader.clone();
    let session = tokio::spawn(async move { r.read().await });
    tokio::time::sleep(ms(1_500)).await;
    assert!(reader.is_reading());
    assert!(handle.is_subscribed());

    reader.stop();
    assert!(session.await.unwrap().is_none());
    assert!(!reader.is_reading());
    assert!(!handle.is_subscribed());
    assert_eq!(handle.releases(), 1);
}

#[tokio::test(start_paused = true)]
async fn cleanup_without_session_is_harmless() {
    let (mock, handle) = MockTransport::new();
    let reader = NfcReader::new(mock);
    reader.cleanup();
    reader.stop();
    assert_eq!(handle.releases(), 0);
    assert!(!reader.is_reading());
}

#[tokio::test(start_paused = true)]
async fn dropping_the_read_future_releases() {
    let (mock, handle) = MockTransport::new();
    let reader = NfcReader::new(mock);

    let res = tokio::time::timeout(ms(100), reader.read()).await;
    assert!(res.is_err());
    assert_eq!(handle.releases(), 1);
    assert!(!reader.is_reading());
}
