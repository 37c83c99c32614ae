//! Content negotiation.
//!
//! Selects a response representation by scoring candidate variants against
//! the client's Accept preferences: quality factors dominate, structured
//! subtypes break ties, explicit zero-quality entries exclude.

mod accept;
mod tests;
mod variant;

// Re-export public items
pub use accept::{parse_accept_header, AcceptEntry};
pub use variant::{select_variant, Variant};
