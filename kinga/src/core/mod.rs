//! Deterministic, pure logic for the greeting card.
//!
//! Core modules must be free of I/O side effects. Randomness enters only
//! through a caller-supplied source, so every module here is testable with a
//! seeded or scripted generator.

pub mod greeting;
pub mod permutation;
pub mod symbols;
