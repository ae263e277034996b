//! # Domain Models
//!
//! Pure flag types shared by every Switchyard crate.
//! Keep it lean: no I/O, no environment access, no resolution logic. Just data and simple helpers.

pub mod catalog;
pub mod config;
pub mod descriptor;
pub mod status;

pub use catalog::{CatalogEntry, Flag};
pub use descriptor::FlagDescriptor;
pub use status::{FlagStatus, StatusSet};
