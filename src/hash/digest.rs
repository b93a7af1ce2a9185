//! Fixed-size 256-bit digest value
//!
//! This module defines the output type shared by 256-bit hash functions
//! in the Ember ecosystem.
//!
//! It is designed as a **simple, explicit value type**, not as an
//! arithmetic integer. Its primary use cases include:
//! - carrying hash outputs between components
//! - equality comparison and map keys
//! - rendering digests for display and logging at higher layers
//!
//! The internal representation is big-endian, which aligns with the
//! serialization order mandated by FIPS 180-4 and with conventional
//! hexadecimal rendering.

use std::fmt::{Display, Formatter, Result};

/// Fixed-size 256-bit hash digest.
///
/// The value is stored as 32 bytes in **big-endian** word order, exactly
/// as produced by serializing the final hash state. A digest is immutable
/// once produced.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Digest256(pub(crate) [u8; 32]);

impl Digest256 {
    /// Size of the digest in bytes.
    pub const SIZE: usize = 32;

    /// Borrows the digest as a 32-byte array.
    pub const fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Consumes the digest, returning the underlying 32-byte array.
    pub const fn into_bytes(self) -> [u8; 32] {
        self.0
    }

    /// Renders the digest as a 64-character lowercase hexadecimal string.
    ///
    /// This is the conventional display form for SHA-256 digests.
    pub fn to_hex(&self) -> String {
        self.to_string()
    }
}

/// Converts eight 32-bit state words into a `Digest256`.
///
/// Each word is serialized as 4 big-endian bytes, most significant word
/// first. This is the final serialization step of the hash pipeline.
impl From<[u32; 8]> for Digest256 {
    fn from(words: [u32; 8]) -> Self {
        let mut out = [0u8; 32];

        for (chunk, word) in out.chunks_exact_mut(4).zip(words.into_iter()) {
            chunk.copy_from_slice(&word.to_be_bytes());
        }

        Digest256(out)
    }
}

/// Converts a 32-byte array into a `Digest256`.
///
/// The input is interpreted as an already-serialized big-endian digest.
impl From<[u8; 32]> for Digest256 {
    fn from(bytes: [u8; 32]) -> Self {
        Digest256(bytes)
    }
}

/// Converts a `Digest256` into its 32-byte array form.
impl From<Digest256> for [u8; 32] {
    fn from(digest: Digest256) -> Self {
        digest.0
    }
}

/// Borrows the underlying byte slice of a `Digest256`.
impl AsRef<[u8]> for Digest256 {
    fn as_ref(&self) -> &[u8] {
        &self.0
    }
}

/// Borrows the underlying 32-byte array of a `Digest256`.
impl AsRef<[u8; 32]> for Digest256 {
    fn as_ref(&self) -> &[u8; 32] {
        &self.0
    }
}

impl Display for Digest256 {
    /// Formats the digest as 64 lowercase hexadecimal characters.
    fn fmt(&self, f: &mut Formatter<'_>) -> Result {
        for byte in self.0 {
            write!(f, "{:02x}", byte)?;
        }

        Ok(())
    }
}
