//! The canonical, compiled-in set of flags.
//!
//! Every flag the application code knows about is a [`Flag`] variant. The registry's
//! built-in set is generated from [`Flag::iter`], so adding a flag means adding a
//! variant and its [`CatalogEntry`] arm here, nothing else.

use crate::status::FlagStatus;
use serde::{Deserialize, Serialize};
use strum_macros::{AsRefStr, Display, EnumCount, EnumIter, EnumString, IntoStaticStr};

pub use strum::IntoEnumIterator;

#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    EnumCount,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[strum(serialize_all = "SCREAMING_SNAKE_CASE")]
pub enum Flag {
    /// Practice adoption workflow.
    PracticeAdoption,
}

/// Compiled-in metadata of a [`Flag`].
///
/// `created_at` stays a literal `YYYY-MM-DD` string; the registry parses it during
/// registration like any other definition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CatalogEntry {
    pub env_key: &'static str,
    pub default_value: bool,
    pub description: &'static str,
    pub owner: &'static str,
    pub status: FlagStatus,
    pub created_at: &'static str,
}

impl Flag {
    /// Registry name of the flag (`PRACTICE_ADOPTION`).
    #[must_use]
    pub fn name(self) -> &'static str {
        self.into()
    }

    #[must_use]
    pub const fn entry(self) -> CatalogEntry {
        match self {
            Self::PracticeAdoption => CatalogEntry {
                env_key: "ENABLE_PRACTICE_ADOPTION",
                default_value: false,
                description: "Practice adoption workflow for onboarding new practices",
                owner: "platform",
                status: FlagStatus::Beta,
                created_at: "2025-01-15",
            },
        }
    }
}
