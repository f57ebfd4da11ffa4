use crate::common::fixtures::FARE_TAP_HEX;

use mrtcard::card::{CachedData, RawBlock, TransactionType, decode_block, timestamp};
use mrtcard::test_support::block_from_hex;

#[test]
fn captured_fare_tap_decodes() {
    let block = hex::decode(FARE_TAP_HEX.replace(' ', "")).unwrap();
    let tx = decode_block(&block, Some(100)).unwrap();

    assert_eq!(tx.transaction_type, TransactionType::Fare);
    assert_eq!(tx.balance, 10000);
    assert_eq!(tx.amount, 9900);
    assert_eq!(tx.from_station.en, "Agargaon");
    assert_eq!(tx.to_station.en, "Motijheel");
    assert_eq!(
        timestamp::to_iso8601(&tx.timestamp),
        "2024-01-01T01:40:00.000Z"
    );
}

#[test]
fn hex_helper_agrees_with_hex_crate() {
    let ours = block_from_hex(FARE_TAP_HEX).unwrap();
    let theirs = hex::decode(FARE_TAP_HEX.replace(' ', "")).unwrap();
    assert_eq!(ours.as_slice(), theirs.as_slice());
    assert_eq!(RawBlock::parse(&ours).unwrap().to_bytes(), ours);
}

#[test]
fn snapshot_takes_newest_balance() {
    let block = block_from_hex(FARE_TAP_HEX).unwrap();
    let tx = decode_block(&block, None).unwrap();
    let cached = CachedData::from_transactions(vec![tx], timestamp::epoch(), None);
    assert_eq!(cached.last_balance, 10000);
    assert_eq!(cached.summary().journeys, 1);
    assert!(cached.card_number.is_none());
}
