//! Clinicsite core library — domain types, content loading, errors.
//!
//! Public API surface:
//! - [`types`] — [`StaffId`], [`StaffMember`], the fixed roster order
//! - [`error`] — [`LoadError`]
//! - [`loader`] — welcome text and roster loading from a templates tree

pub mod error;
pub mod loader;
pub mod types;

pub use error::LoadError;
pub use types::{StaffId, StaffMember, ROSTER_ORDER};
