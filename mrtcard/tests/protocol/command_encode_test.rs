use crate::common;

use mrtcard::protocol::{
    Command, ReadCommandConfig, build_polling_command, build_read_command, encode_read,
};
use mrtcard::types::{ServiceCode, SystemCode};

#[test]
fn polling_frame_is_fixed() {
    assert_eq!(
        build_polling_command(),
        vec![0x06, 0x00, 0xff, 0xff, 0x00, 0x00]
    );

    let cmd = Command::Polling {
        system_code: SystemCode::ANY,
        request_code: 0,
        time_slot: 0,
    };
    assert_eq!(cmd.encode().unwrap(), build_polling_command());
}

#[test]
fn default_history_read_is_34_bytes() {
    let idm = [0u8; 8];
    let frame = build_read_command(&ReadCommandConfig {
        idm: &idm,
        service_code: common::fixtures::history_service(),
        block_count: 10,
    })
    .unwrap();

    assert_eq!(frame.len(), 14 + 20);
    assert_eq!(frame[0], 34);
    assert_eq!(frame[1], 0x06);
    assert_eq!(&frame[2..10], &idm);
    assert_eq!(frame[10], 0x01);
    // service code low byte first, then the block count
    assert_eq!(&frame[11..13], &[0x0f, 0x22]);
    assert_eq!(frame[13], 10);
    for i in 0..10u8 {
        let at = 14 + 2 * usize::from(i);
        assert_eq!(&frame[at..at + 2], &[0x80, i]);
    }
}

#[test]
fn command_enum_matches_builder() {
    let idm = common::fixtures::sample_idm();
    let cmd = Command::ReadWithoutEncryption {
        idm,
        service: ServiceCode::HISTORY,
        block_count: 4,
    };
    assert_eq!(cmd.command_code(), 0x06);
    assert_eq!(
        cmd.encode().unwrap(),
        encode_read(idm, ServiceCode::HISTORY, 4).unwrap()
    );
}

#[test]
fn read_command_rejects_short_idm() {
    let res = build_read_command(&ReadCommandConfig {
        idm: &[0u8; 4],
        service_code: ServiceCode::HISTORY,
        block_count: 1,
    });
    assert!(matches!(res, Err(mrtcard::Error::InvalidArgument(_))));
}
