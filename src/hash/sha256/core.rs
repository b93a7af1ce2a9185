//! SHA-256 core hashing functions
//!
//! This module drives the block-level pipeline of the SHA-256 hash
//! function as defined in FIPS 180-4.
//!
//! It provides:
//! - the compression function operating on 512-bit blocks
//! - a complete SHA-256 hashing function for arbitrary-length input
//!
//! The implementation is intentionally minimal, explicit, and designed
//! for use as a low-level primitive within the Ember ecosystem.

use super::H256_INIT;
use super::computations::{all_rounds, schedule};
use super::padding::{Sha256Error, pad};
use crate::hash::Digest256;

/// Compresses a single 512-bit message block.
///
/// This function performs the SHA-256 compression step on a single
/// 64-byte block, updating the running hash state in place.
///
/// # Parameters
/// - `block`: A 512-bit (64-byte) message block
/// - `state`: The current hash state (8 × 32-bit words)
///
/// # Notes
/// - The block's message schedule is fully expanded here and consumed by
///   `all_rounds`, then discarded.
/// - Input words are interpreted as big-endian, as required by SHA-256.
pub fn compress(block: &[u8; 64], state: &mut [u32; 8]) {
    let w = schedule(block);

    all_rounds(state, &w);
}

/// Computes the SHA-256 hash of the given input.
///
/// The message is padded to a multiple of 512 bits, split into 64-byte
/// blocks, and compressed block by block into the running hash state
/// seeded from `H256_INIT`. Blocks are chained, so they are processed
/// strictly in order.
///
/// # Parameters
/// - `input`: Arbitrary-length input message. Callers hashing text must
///   encode it to bytes first; no encoding is assumed here.
///
/// # Returns
/// - The final 256-bit digest, serialized big-endian per state word.
///
/// # Errors
/// - `Sha256Error::InputTooLarge` if the message bit length exceeds
///   2^64 - 1 (see `padding::pad`).
///
/// # Notes
/// - The computation is deterministic and has no side effects; hashing
///   the same bytes always yields the same digest.
pub fn sha256(input: &[u8]) -> Result<Digest256, Sha256Error> {
    let padded = pad(input)?;
    let mut state = H256_INIT;

    for block in padded.chunks_exact(64) {
        let block: &[u8; 64] = block.try_into().unwrap();
        compress(block, &mut state);
    }

    Ok(Digest256::from(state))
}
