use crate::error::ResolverError;
use chrono::{DateTime, Utc};
use fxhash::FxHashMap;
use serde::Serialize;
use strum_macros::{Display, IntoStaticStr};
use syd_domain::Flag;

/// Where a resolved value came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Display, IntoStaticStr)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ValueSource {
    /// The registered default; the environment had no (or an empty) override.
    Default,
    /// A recognised literal found under the flag's environment key.
    Environment,
}

/// The effective value of one flag.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedFlag {
    pub name: String,
    pub env_key: String,
    pub value: bool,
    pub source: ValueSource,
}

/// An immutable, fully resolved set of flag values.
///
/// Self-contained: answers come from the values captured at resolution time, even for
/// flags that were deregistered afterwards. Share it as `Arc<ResolvedFlagSet>`
/// (see [`FlagHandle`](crate::FlagHandle)); it is never mutated.
#[derive(Debug, Clone, Serialize)]
pub struct ResolvedFlagSet {
    flags: Vec<ResolvedFlag>,
    #[serde(skip)]
    index: FxHashMap<String, usize>,
    resolved_at: DateTime<Utc>,
}

impl ResolvedFlagSet {
    pub(crate) fn new(flags: Vec<ResolvedFlag>) -> Self {
        let index = flags.iter().enumerate().map(|(i, flag)| (flag.name.clone(), i)).collect();
        Self { flags, index, resolved_at: Utc::now() }
    }

    /// Effective value of `name`.
    ///
    /// # Errors
    /// [`ResolverError::UnknownFlag`] if `name` is not part of this snapshot. A typo never
    /// reads as `false`.
    pub fn is_enabled(&self, name: &str) -> Result<bool, ResolverError> {
        self.get(name).map(|flag| flag.value).ok_or_else(|| ResolverError::unknown(name))
    }

    /// Typed accessor for the compiled-in catalog.
    ///
    /// # Errors
    /// [`ResolverError::UnknownFlag`] if the snapshot was resolved from a registry that
    /// does not contain `flag`.
    pub fn is_on(&self, flag: Flag) -> Result<bool, ResolverError> {
        self.is_enabled(flag.name())
    }

    #[must_use]
    pub fn get(&self, name: &str) -> Option<&ResolvedFlag> {
        self.index.get(name).map(|&i| &self.flags[i])
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.index.contains_key(name)
    }

    /// Flags in registry order.
    pub fn iter(&self) -> std::slice::Iter<'_, ResolvedFlag> {
        self.flags.iter()
    }

    /// Flags whose value came from the environment.
    pub fn overrides(&self) -> impl Iterator<Item = &ResolvedFlag> {
        self.flags.iter().filter(|flag| flag.source == ValueSource::Environment)
    }

    /// Names of the flags that are on.
    pub fn enabled(&self) -> impl Iterator<Item = &str> {
        self.flags.iter().filter(|flag| flag.value).map(|flag| flag.name.as_str())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.flags.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.flags.is_empty()
    }

    #[must_use]
    pub const fn resolved_at(&self) -> DateTime<Utc> {
        self.resolved_at
    }

    /// `true` when both snapshots hold the same flags with the same values and sources,
    /// regardless of when they were taken.
    #[must_use]
    pub fn same_values(&self, other: &Self) -> bool {
        self.flags == other.flags
    }
}

impl<'a> IntoIterator for &'a ResolvedFlagSet {
    type Item = &'a ResolvedFlag;
    type IntoIter = std::slice::Iter<'a, ResolvedFlag>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
