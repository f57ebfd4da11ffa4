// mrtcard/src/protocol/responses/read.rs

use log::{debug, warn};

use crate::card::{RawBlock, Transaction};
use crate::constants::{
    BLOCK_COUNT_OFFSET, BLOCK_SIZE, READ_RESPONSE_HEADER_LEN, STATUS_FLAG1_OFFSET,
    STATUS_FLAG2_OFFSET,
};
use crate::{Error, Result};

/// Check the fail-fast conditions of a read response and return the number
/// of blocks it carries.
///
/// Layout: length(1) + response code(1) + IDm(8) + status1(1) + status2(1)
/// + block count(1) + blocks(N*16)
pub fn validate_response(response: &[u8]) -> Result<usize> {
    if response.len() < READ_RESPONSE_HEADER_LEN {
        return Err(Error::ResponseTooShort {
            actual: response.len(),
        });
    }

    let status1 = response[STATUS_FLAG1_OFFSET];
    let status2 = response[STATUS_FLAG2_OFFSET];
    if status1 != 0 || status2 != 0 {
        return Err(Error::CardStatus { status1, status2 });
    }

    let block_count = usize::from(response[BLOCK_COUNT_OFFSET]);
    let available = response.len() - READ_RESPONSE_HEADER_LEN;
    let expected = block_count * BLOCK_SIZE;
    if available < expected {
        return Err(Error::IncompleteBlockData {
            expected,
            actual: available,
        });
    }

    Ok(block_count)
}

/// Parse a read response into transactions, newest first (card order).
///
/// Blocks are decoded best-effort: a block that fails to decode is logged
/// and skipped. Amounts are computed against the last block that decoded
/// successfully.
pub fn parse_response(response: &[u8]) -> Result<Vec<Transaction>> {
    #[cfg(feature = "diagnostics")]
    log::trace!("read response: {}", crate::utils::to_hex_string(response));

    let block_count = validate_response(response)?;
    let data = &response[READ_RESPONSE_HEADER_LEN..];

    let transactions = decode_run(data.chunks(BLOCK_SIZE).take(block_count));

    debug!(
        "decoded {} of {} blocks",
        transactions.len(),
        block_count
    );
    Ok(transactions)
}

/// Decode an arbitrary run of blocks, e.g. a history dump that was captured
/// without its response header. A trailing partial block is skipped.
pub fn parse_blocks(data: &[u8]) -> Vec<Transaction> {
    decode_run(data.chunks(BLOCK_SIZE))
}

/// Decode blocks in order, skipping any that fail. Amounts are computed
/// against the last block that decoded. Behind a validated response every
/// block is full size, so only `parse_blocks` and direct callers reach the
/// skip path.
fn decode_run<'a>(blocks: impl Iterator<Item = &'a [u8]>) -> Vec<Transaction> {
    let mut transactions = Vec::new();
    let mut previous_balance: Option<u32> = None;

    for (index, block) in blocks.enumerate() {
        match RawBlock::parse(block) {
            Ok(raw) => {
                #[cfg(feature = "diagnostics")]
                log::trace!("block {}: trailing {:02X?}", index, raw.trailing);

                let tx = raw.into_transaction(previous_balance);
                previous_balance = Some(tx.balance);
                transactions.push(tx);
            }
            Err(e) => warn!("skipping block {}: {}", index, e),
        }
    }
    transactions
}
