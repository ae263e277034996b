#![allow(unreachable_pub)]
#![allow(clippy::needless_pass_by_value)]

//! # Macros
//!
//! Procedural macros shared by the Switchyard workspace.
//!
//! ## Usage
//! Every crate that defines its own error enum depends on this crate and annotates the enum
//! with [`macro@syd_error`]:
//! ```toml
//! [dependencies]
//! syd-derive.workspace = true
//! thiserror.workspace = true
//! ```

mod macros;

use proc_macro::TokenStream;
use syn::{DeriveInput, parse_macro_input};

/// Attribute macro for defining crate-level error enums.
///
/// # Features
///
/// * **Automatic Derives**: Injects `#[derive(Debug, thiserror::Error)]` unless already present.
/// * **Context Support**: Generates a companion `<Name>Ext` trait that adds `.context()`
///   to `Result<T, Name>` and to `Result<T, Source>` for every variant wrapping a source error.
/// * **Conversions**: Implements `From<Source>` for variants with a `source` field
///   (or a field marked `#[source]`/`#[from]`), so `?` works on upstream errors.
/// * **Kind Tag**: Generates `fn kind(&self) -> &'static str` returning the variant name,
///   handy as a structured logging field.
/// * **Internal Fallback**: Provides `From<&'static str>` and `From<String>` when an
///   `Internal` variant is present.
///
/// # Requirements
///
/// 1. Only enums are accepted.
/// 2. Every variant uses named fields (tuple and unit variants are rejected).
/// 3. Variants wrapping a source error must also carry `context: Option<Cow<'static, str>>`.
///
/// # Example
///
/// ```rust,ignore
/// use std::borrow::Cow;
///
/// #[syd_derive::syd_error]
/// pub enum ManifestError {
///     #[error("Manifest I/O failure{}: {source}", format_context(.context))]
///     Io { source: std::io::Error, context: Option<Cow<'static, str>> },
///
///     #[error("Internal manifest error{}: {message}", format_context(.context))]
///     Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
/// }
///
/// fn read(path: &std::path::Path) -> Result<String, ManifestError> {
///     let raw = std::fs::read_to_string(path).context("Reading flag manifest")?;
///     if raw.is_empty() {
///         return Err("manifest is empty".into());
///     }
///     Ok(raw)
/// }
/// ```
#[proc_macro_attribute]
pub fn syd_error(_args: TokenStream, item: TokenStream) -> TokenStream {
    let input = parse_macro_input!(item as DeriveInput);
    macros::error::expand(input).into()
}
