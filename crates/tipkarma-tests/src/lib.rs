//! Integration test crate for TipKarma.
//!
//! This crate exists solely to hold cross-crate integration tests.
//! It depends on the tipkarma crates to verify they work together.

#[cfg(test)]
mod flow;

#[cfg(test)]
mod persistence;
