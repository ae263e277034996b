use crate::error::ResolverError;
use crate::resolve::refresh;
use crate::snapshot::ResolvedFlagSet;
use crate::source::EnvironmentSource;
use parking_lot::RwLock;
use std::sync::Arc;
use syd_domain::Flag;
use syd_registry::FlagRegistry;
use tracing::info;

/// Publication point for the current [`ResolvedFlagSet`].
///
/// Cheap to clone; every clone sees the same current snapshot. Publishing swaps a single
/// `Arc`, so a reader gets either the old or the new snapshot, never a mix. Readers that
/// already hold an `Arc` keep their snapshot for as long as they like.
#[derive(Debug, Clone)]
pub struct FlagHandle {
    current: Arc<RwLock<Arc<ResolvedFlagSet>>>,
}

impl FlagHandle {
    #[must_use]
    pub fn new(initial: ResolvedFlagSet) -> Self {
        Self { current: Arc::new(RwLock::new(Arc::new(initial))) }
    }

    /// The snapshot published most recently.
    #[must_use]
    pub fn snapshot(&self) -> Arc<ResolvedFlagSet> {
        Arc::clone(&self.current.read())
    }

    /// Replaces the current snapshot and returns the previous one.
    pub fn publish(&self, next: ResolvedFlagSet) -> Arc<ResolvedFlagSet> {
        self.swap(Arc::new(next))
    }

    /// Resolves `env` again and publishes the result.
    ///
    /// A failed refresh publishes nothing: the previous snapshot stays current.
    ///
    /// # Errors
    /// See [`resolve`](crate::resolve).
    pub fn refresh<S>(
        &self,
        registry: &FlagRegistry,
        env: &S,
    ) -> Result<Arc<ResolvedFlagSet>, ResolverError>
    where
        S: EnvironmentSource + ?Sized,
    {
        let next = Arc::new(refresh(registry, env)?);
        let previous = self.swap(Arc::clone(&next));
        info!(
            flags = next.len(),
            changed = changed_count(&previous, &next),
            "Published refreshed flag snapshot"
        );
        Ok(next)
    }

    /// Shortcut for `self.snapshot().is_enabled(name)`.
    ///
    /// # Errors
    /// [`ResolverError::UnknownFlag`] if `name` is not in the current snapshot.
    pub fn is_enabled(&self, name: &str) -> Result<bool, ResolverError> {
        self.current.read().is_enabled(name)
    }

    /// Shortcut for `self.snapshot().is_on(flag)`.
    ///
    /// # Errors
    /// [`ResolverError::UnknownFlag`] if `flag` is not in the current snapshot.
    pub fn is_on(&self, flag: Flag) -> Result<bool, ResolverError> {
        self.current.read().is_on(flag)
    }

    fn swap(&self, next: Arc<ResolvedFlagSet>) -> Arc<ResolvedFlagSet> {
        std::mem::replace(&mut *self.current.write(), next)
    }
}

fn changed_count(previous: &ResolvedFlagSet, next: &ResolvedFlagSet) -> usize {
    next.iter()
        .filter(|flag| previous.get(&flag.name).is_none_or(|old| old.value != flag.value))
        .count()
}
