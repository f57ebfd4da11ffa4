use mrtcard::transport::{MockTransport, TagEvent, TagTransport};
use mrtcard::types::TagId;
use mrtcard::{Error, TransportErrorKind};

#[tokio::test]
async fn events_require_a_scan() {
    let (mut mock, handle) = MockTransport::new();
    handle.present(TagId::new("a"));

    assert!(matches!(
        mock.next_event().await,
        Err(Error::Transport {
            kind: TransportErrorKind::Disconnected,
            ..
        })
    ));

    mock.scan().await.unwrap();
    assert!(handle.is_subscribed());
    match mock.next_event().await.unwrap() {
        TagEvent::Present(tag) => assert_eq!(tag.as_str(), "a"),
        other => panic!("expected Present, got {:?}", other),
    }

    mock.release();
    assert!(!handle.is_subscribed());
    assert_eq!(handle.releases(), 1);
}

#[tokio::test]
async fn exchanges_are_recorded_per_tag() {
    let (mut mock, handle) = MockTransport::new();
    handle.push_response(vec![0x01]);
    handle.push_failure(Error::transport(TransportErrorKind::ReadError, "lost"));

    let tag = TagId::new("card");
    assert_eq!(mock.transceive(&tag, &[0xaa]).await.unwrap(), vec![0x01]);
    assert!(mock.transceive(&tag, &[0xbb]).await.is_err());

    assert_eq!(handle.sent(), vec![vec![0xaa], vec![0xbb]]);
    assert_eq!(handle.sent_to(), vec![tag.clone(), tag]);
    assert_eq!(handle.pending_responses(), 0);
}

#[tokio::test]
async fn scan_failure_carries_permission_kind() {
    let (mut mock, handle) = MockTransport::new();
    handle.fail_next_scan(Error::transport(
        TransportErrorKind::PermissionDenied,
        "denied",
    ));

    let err = mock.scan().await.unwrap_err();
    assert_eq!(
        err.user_message(),
        "Please allow NFC access to read your card"
    );
    assert!(mock.scan().await.is_ok());
    assert_eq!(handle.scans(), 2);
}
