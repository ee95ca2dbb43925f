//! Deterministic random number generation
//!
//! All randomness in the generator flows through a single seeded RngManager.

pub mod sampling;
pub mod xorshift;

pub use xorshift::RngManager;
