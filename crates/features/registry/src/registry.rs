use crate::definition::{IntoDescriptor, validate_shape};
use crate::error::RegistryError;
use fxhash::FxHashMap;
use std::slice;
use strum::IntoEnumIterator;
use syd_domain::{Flag, FlagDescriptor, StatusSet};
use tracing::{debug, info};

/// The closed set of known flags, in registration order.
///
/// Populated once at startup (built-in catalog, manifests), then lent out by shared
/// reference. Names and environment keys are unique.
#[derive(Debug, Default, Clone)]
pub struct FlagRegistry {
    descriptors: Vec<FlagDescriptor>,
    by_name: FxHashMap<String, usize>,
    by_env_key: FxHashMap<String, usize>,
}

impl FlagRegistry {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry holding every [`Flag`] of the compiled-in catalog.
    ///
    /// # Errors
    /// Fails if the catalog itself is inconsistent (duplicate keys, bad dates).
    pub fn builtin() -> Result<Self, RegistryError> {
        let mut registry = Self::new();
        let count = registry.register_all(Flag::iter())?;
        info!(count, "Built-in flag catalog registered");
        Ok(registry)
    }

    /// Validates and adds one descriptor.
    ///
    /// # Errors
    /// * [`RegistryError::InvalidDescriptor`] if the definition is malformed.
    /// * [`RegistryError::DuplicateFlag`] if the name or the environment key is taken.
    pub fn register<D: IntoDescriptor>(
        &mut self,
        descriptor: D,
    ) -> Result<&FlagDescriptor, RegistryError> {
        let descriptor = descriptor.into_descriptor()?;
        validate_shape(&descriptor)?;

        if self.by_name.contains_key(&descriptor.name) {
            return Err(RegistryError::DuplicateFlag {
                name: descriptor.name,
                message: "name is already registered".into(),
                context: None,
            });
        }
        if let Some(&index) = self.by_env_key.get(&descriptor.env_key) {
            return Err(RegistryError::DuplicateFlag {
                message: format!(
                    "env_key '{}' is already used by '{}'",
                    descriptor.env_key, self.descriptors[index].name
                )
                .into(),
                name: descriptor.name,
                context: None,
            });
        }

        debug!(
            flag = %descriptor.name,
            env_key = %descriptor.env_key,
            default = descriptor.default_value,
            status = %descriptor.status,
            "Registered flag"
        );

        let index = self.descriptors.len();
        self.by_name.insert(descriptor.name.clone(), index);
        self.by_env_key.insert(descriptor.env_key.clone(), index);
        self.descriptors.push(descriptor);
        Ok(&self.descriptors[index])
    }

    /// Registers a batch all-or-nothing: on error the registry is left untouched.
    ///
    /// # Errors
    /// The first error any item produces; see [`FlagRegistry::register`].
    pub fn register_all<I>(&mut self, descriptors: I) -> Result<usize, RegistryError>
    where
        I: IntoIterator,
        I::Item: IntoDescriptor,
    {
        let mut staged = self.clone();
        let before = staged.len();
        for descriptor in descriptors {
            staged.register(descriptor)?;
        }
        let added = staged.len() - before;
        *self = staged;
        Ok(added)
    }

    /// Every descriptor in registration order. Restartable: each call starts over.
    pub fn all(&self) -> slice::Iter<'_, FlagDescriptor> {
        self.descriptors.iter()
    }

    /// # Errors
    /// [`RegistryError::UnknownFlag`] if `name` was never registered.
    pub fn get(&self, name: &str) -> Result<&FlagDescriptor, RegistryError> {
        self.by_name.get(name).map(|&i| &self.descriptors[i]).ok_or_else(|| RegistryError::unknown(name))
    }

    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Descriptor owning the environment key `key`, if any.
    #[must_use]
    pub fn by_env_key(&self, key: &str) -> Option<&FlagDescriptor> {
        self.by_env_key.get(key).map(|&i| &self.descriptors[i])
    }

    pub fn names(&self) -> impl ExactSizeIterator<Item = &str> + Clone {
        self.descriptors.iter().map(|d| d.name.as_str())
    }

    /// Descriptors whose status is in `statuses`, in registration order.
    pub fn with_status(&self, statuses: StatusSet) -> impl Iterator<Item = &FlagDescriptor> + Clone {
        self.descriptors.iter().filter(move |d| statuses.admits(d.status))
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Removes a flag. Snapshots resolved earlier keep answering for it.
    ///
    /// # Errors
    /// [`RegistryError::UnknownFlag`] if `name` was never registered.
    pub fn deregister(&mut self, name: &str) -> Result<FlagDescriptor, RegistryError> {
        let index = self.by_name.get(name).copied().ok_or_else(|| RegistryError::unknown(name))?;
        let removed = self.descriptors.remove(index);
        self.reindex();
        debug!(flag = %removed.name, "Deregistered flag");
        Ok(removed)
    }

    fn reindex(&mut self) {
        self.by_name.clear();
        self.by_env_key.clear();
        for (index, descriptor) in self.descriptors.iter().enumerate() {
            self.by_name.insert(descriptor.name.clone(), index);
            self.by_env_key.insert(descriptor.env_key.clone(), index);
        }
    }
}

impl<'a> IntoIterator for &'a FlagRegistry {
    type Item = &'a FlagDescriptor;
    type IntoIter = slice::Iter<'a, FlagDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.all()
    }
}
