//! Hash algorithms exposed by the crate.
//!
//! Currently includes SHA-256 with a pure-Rust implementation, plus the
//! `Digest256` value type shared by 256-bit hash outputs.

pub mod digest;
pub mod sha256;

/// Re-export of the digest value type.
pub use digest::Digest256;

/// Re-export of the SHA-256 convenience function and its error type.
pub use sha256::core::sha256;
pub use sha256::padding::Sha256Error;
