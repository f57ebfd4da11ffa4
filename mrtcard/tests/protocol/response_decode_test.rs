use crate::common;
use crate::common::fixtures::{fare_block, read_response, read_response_with_status};

use mrtcard::Error;
use mrtcard::card::TransactionType;
use mrtcard::protocol::{decode_polling, parse_response, validate_response};

#[test]
fn ten_byte_response_is_too_short() {
    common::init_logging();
    match parse_response(&[0u8; 10]) {
        Err(Error::ResponseTooShort { actual: 10 }) => {}
        other => panic!("expected ResponseTooShort, got {:?}", other),
    }
}

#[test]
fn status_flag_wins_over_block_data() {
    let idm = common::fixtures::sample_idm();
    let data = read_response_with_status(&idm, 0x01, 0x00, &common::fixtures::short_history());
    match parse_response(&data) {
        Err(Error::CardStatus {
            status1: 0x01,
            status2: 0x00,
        }) => {}
        other => panic!("expected CardStatus, got {:?}", other),
    }
}

#[test]
fn truncated_block_data_is_reported() {
    let mut data = read_response(&common::fixtures::short_history());
    data.truncate(data.len() - 1);
    match validate_response(&data) {
        Err(Error::IncompleteBlockData {
            expected: 48,
            actual: 47,
        }) => {}
        other => panic!("expected IncompleteBlockData, got {:?}", other),
    }
}

#[test]
fn history_decodes_in_card_order() {
    common::init_logging();
    let data = read_response(&common::fixtures::short_history());
    let txs = parse_response(&data).unwrap();

    assert_eq!(txs.len(), 3);
    assert_eq!(txs[0].transaction_type, TransactionType::Fare);
    assert_eq!(txs[0].from_station.en, "Agargaon");
    assert_eq!(txs[0].to_station.en, "Motijheel");
    assert_eq!(txs[0].amount, 0);

    assert_eq!(txs[1].transaction_type, TransactionType::Recharge);
    assert_eq!(txs[1].balance, 500);
    assert_eq!(txs[1].amount, 60);

    assert_eq!(txs[2].from_station.en, "Uttara North");
    assert_eq!(txs[2].amount, 500);
    assert!(txs[0].timestamp > txs[2].timestamp);
}

#[test]
fn full_page_of_blocks() {
    let blocks: Vec<[u8; 16]> = (0..10u32)
        .map(|i| fare_block(50, 10, 1_000 - i * 20, 500 - i as u16))
        .collect();
    let txs = parse_response(&read_response(&blocks)).unwrap();
    assert_eq!(txs.len(), 10);
    assert!(txs.iter().skip(1).all(|t| t.amount == 20));
}

#[test]
fn polling_response_yields_idm() {
    let idm = common::fixtures::sample_idm();
    let resp = common::fixtures::polling_response(&idm);
    assert_eq!(decode_polling(&resp).unwrap(), idm);
}
