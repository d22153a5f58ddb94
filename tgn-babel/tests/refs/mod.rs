//! Reference expression tests
//!
//! Expansion of reference expressions against the fixture canon.

mod context;
mod expand;
