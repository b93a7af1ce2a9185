//! Cryptographic hash primitives for Ember
//!
//! This crate provides the low-level hashing building blocks used
//! throughout the Ember ecosystem.
//!
//! The focus is on **clarity, predictability, and auditability**, rather
//! than on providing a large or high-level cryptographic API. Every
//! component is dependency-free, explicit in its semantics, and suitable
//! for embedding in security-critical code.
//!
//! # Module overview
//!
//! - `hash`
//!   Cryptographic hash functions and their supporting types. Currently
//!   provides SHA-256 (FIPS 180-4) as a pure-Rust implementation, along
//!   with the fixed-size `Digest256` output type.
//!
//! # Design goals
//!
//! - Minimal and explicit APIs
//! - Stable, well-defined semantics (bit-exact against published vectors)
//! - Deterministic, side-effect-free computation
//!
//! Each hash computation owns its entire working state, so independent
//! messages may be hashed concurrently without any shared-state
//! coordination.
//!
//! This crate is not intended to replace full-featured, externally audited
//! cryptographic libraries, but to serve as a small, controlled foundation
//! for Ember's internal hashing needs.

pub mod hash;
