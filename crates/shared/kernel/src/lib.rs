//! Kernel utilities shared across the Switchyard crates.
//! Keep this crate lightweight: it owns settings loading and nothing that touches flags.
//!
//! ## Settings loading
//! ```rust,no_run
//! use syd_kernel::config::load_settings;
//!
//! let settings = load_settings(None::<&str>).unwrap();
//! println!("log level: {}", settings.logging.level);
//! ```

pub mod config;

pub use syd_domain as domain;
