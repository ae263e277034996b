use bitflags::bitflags;
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use strum::IntoEnumIterator;
use strum_macros::{AsRefStr, Display, EnumIter, EnumString, IntoStaticStr};

/// Lifecycle stage of a flag. Documentation only; resolution never looks at it.
#[derive(
    Debug,
    Clone,
    Copy,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    Display,
    EnumString,
    EnumIter,
    AsRefStr,
    IntoStaticStr,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum FlagStatus {
    Alpha,
    Beta,
    Stable,
    Deprecated,
}

bitflags! {
    /// A set of [`FlagStatus`] values, used to filter registry listings.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
    pub struct StatusSet: u8 {
        const ALPHA = 1 << 0;
        const BETA = 1 << 1;
        const STABLE = 1 << 2;
        const DEPRECATED = 1 << 3;

        const ACTIVE = Self::ALPHA.bits() | Self::BETA.bits() | Self::STABLE.bits();
        const ALL = Self::ACTIVE.bits() | Self::DEPRECATED.bits();
    }
}

impl StatusSet {
    #[must_use]
    pub fn admits(self, status: FlagStatus) -> bool {
        self.contains(status.into())
    }

    /// Statuses contained in this set, in lifecycle order.
    pub fn statuses(self) -> impl Iterator<Item = FlagStatus> {
        FlagStatus::iter().filter(move |status| self.admits(*status))
    }
}

impl From<FlagStatus> for StatusSet {
    fn from(status: FlagStatus) -> Self {
        match status {
            FlagStatus::Alpha => Self::ALPHA,
            FlagStatus::Beta => Self::BETA,
            FlagStatus::Stable => Self::STABLE,
            FlagStatus::Deprecated => Self::DEPRECATED,
        }
    }
}

impl FromIterator<FlagStatus> for StatusSet {
    fn from_iter<I: IntoIterator<Item = FlagStatus>>(iter: I) -> Self {
        iter.into_iter().fold(Self::empty(), |set, status| set | status.into())
    }
}

/// Parses a comma separated list such as `alpha,beta`; `all`/`*` and `active` are shorthands.
impl FromStr for StatusSet {
    type Err = strum::ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.split(',').map(str::trim).filter(|part| !part.is_empty()).try_fold(
            Self::empty(),
            |set, part| {
                let next = match part {
                    "all" | "*" => Self::ALL,
                    "active" => Self::ACTIVE,
                    other => FlagStatus::from_str(other)?.into(),
                };
                Ok(set | next)
            },
        )
    }
}
