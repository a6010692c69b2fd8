//! Tests for the group expansion engine.
//!
//! Organized by functionality:
//! - Input validation
//! - Direct and nested member resolution
//! - Cycle handling and single-visit guarantees
//! - Member classification
//! - Membership checks
//! - Failure propagation


#[cfg(test)]
mod resolver_tests;
