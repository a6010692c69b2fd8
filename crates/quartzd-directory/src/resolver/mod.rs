//! Group expansion engine.
//!
//! The resolver performs a breadth-first traversal over nested directory
//! groups to collect the full set of user members, guarding against cyclic
//! group graphs with a visited set.

mod group_resolver;
mod patterns;
mod traits;
mod types;

#[cfg(test)]
mod tests;

pub use group_resolver::GroupResolver;
pub use patterns::MemberPatterns;
pub use traits::GroupSearch;
pub use types::{GroupNames, MemberRef};
