use crate::status::FlagStatus;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use typed_builder::TypedBuilder;

/// Static definition of one flag: its identity, override key, default and metadata.
///
/// Construction does not validate anything; the registry checks shape and uniqueness
/// when the descriptor is registered.
///
/// ```rust
/// use chrono::NaiveDate;
/// use syd_domain::{FlagDescriptor, FlagStatus};
///
/// let descriptor = FlagDescriptor::builder()
///     .name("PRACTICE_ADOPTION")
///     .env_key("ENABLE_PRACTICE_ADOPTION")
///     .default_value(false)
///     .status(FlagStatus::Beta)
///     .created_at(NaiveDate::from_ymd_opt(2025, 1, 15).unwrap())
///     .build();
///
/// assert_eq!(descriptor.env_key, "ENABLE_PRACTICE_ADOPTION");
/// assert!(descriptor.owner.is_empty());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TypedBuilder)]
pub struct FlagDescriptor {
    #[builder(setter(into))]
    pub name: String,
    #[builder(setter(into))]
    pub env_key: String,
    pub default_value: bool,
    #[builder(default, setter(into))]
    pub description: String,
    #[builder(default, setter(into))]
    pub owner: String,
    #[builder(default = FlagStatus::Alpha)]
    pub status: FlagStatus,
    pub created_at: NaiveDate,
}

impl FlagDescriptor {
    #[must_use]
    pub const fn is_deprecated(&self) -> bool {
        matches!(self.status, FlagStatus::Deprecated)
    }
}
