//! Message padding for SHA-256 (FIPS 180-4 §5.1.1).
//!
//! Padding extends a message so its bit length is a multiple of 512 while
//! keeping the original bytes as an unmodified prefix and recording the
//! original bit length in the final 8 bytes. The length field makes the
//! padding unambiguously reversible in length.

use std::fmt::{Display, Formatter, Result as FmtResult};

/// Errors that can occur during SHA-256 computation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sha256Error {
    /// Message bit length exceeds 2^64 - 1 and cannot be encoded in the
    /// 8-byte length field.
    InputTooLarge,
}

impl Display for Sha256Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        match self {
            Sha256Error::InputTooLarge => {
                f.write_str("message exceeds 2^64 - 1 bits and cannot be length-encoded")
            }
        }
    }
}

impl std::error::Error for Sha256Error {}

/// Length in bytes of the padded form of a `len`-byte message.
///
/// Always a multiple of 64: the message, one terminator byte, and the
/// 8-byte length field, rounded up to the next full block.
pub const fn padded_len(len: usize) -> usize {
    (len + 9).div_ceil(64) * 64
}

/// Pads a message to a multiple of 512 bits.
///
/// Appends the `0x80` terminator byte, zero fill up to 448 (mod 512)
/// bits, and the original message length in bits as an 8-byte big-endian
/// integer. The input is never mutated; the padded message is returned as
/// a new, owned byte sequence.
///
/// # Errors
/// - `Sha256Error::InputTooLarge` if the message bit length does not fit
///   in 64 bits (unreachable for inputs that fit in memory).
pub fn pad(message: &[u8]) -> Result<Vec<u8>, Sha256Error> {
    let bit_len = u64::try_from(message.len())
        .ok()
        .and_then(|len| len.checked_mul(8))
        .ok_or(Sha256Error::InputTooLarge)?;

    let total = padded_len(message.len());
    let mut padded = Vec::with_capacity(total);

    padded.extend_from_slice(message);
    padded.push(0x80);
    padded.resize(total - 8, 0x00);
    padded.extend_from_slice(&bit_len.to_be_bytes());

    Ok(padded)
}
