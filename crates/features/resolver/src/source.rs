use std::borrow::Cow;
use std::collections::{BTreeMap, HashMap};
use std::hash::BuildHasher;
use std::sync::Arc;

/// A read-only key-value lookup the resolver takes overrides from.
///
/// Implementations must keep the three states apart: absent (`None`), present but
/// empty (`Some("")`) and present with a value.
pub trait EnvironmentSource {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>>;

    /// Puts `self` in front of `fallback`: keys present here shadow `fallback`.
    fn over<F>(self, fallback: F) -> Layered<Self, F>
    where
        Self: Sized,
        F: EnvironmentSource,
    {
        Layered::new(self, fallback)
    }
}

/// The variables of the current process.
///
/// Values that are not valid UTF-8 are passed through lossily, so they fail resolution
/// as invalid values instead of silently counting as absent.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl EnvironmentSource for ProcessEnvironment {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        std::env::var_os(key).map(|value| match value.into_string() {
            Ok(value) => Cow::Owned(value),
            Err(raw) => Cow::Owned(raw.to_string_lossy().into_owned()),
        })
    }
}

/// Two sources stacked: `primary` first, then `fallback`.
///
/// A key present in `primary` shadows `fallback` even when its value is empty, which lets
/// an override layer force the registered default back.
#[derive(Debug, Clone, Default)]
pub struct Layered<P, F> {
    primary: P,
    fallback: F,
}

impl<P, F> Layered<P, F> {
    pub const fn new(primary: P, fallback: F) -> Self {
        Self { primary, fallback }
    }

    pub const fn primary(&self) -> &P {
        &self.primary
    }

    pub const fn fallback(&self) -> &F {
        &self.fallback
    }
}

impl<P: EnvironmentSource, F: EnvironmentSource> EnvironmentSource for Layered<P, F> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.primary.lookup(key).or_else(|| self.fallback.lookup(key))
    }
}

impl<S: EnvironmentSource + ?Sized> EnvironmentSource for &S {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(key)
    }
}

impl<S: EnvironmentSource + ?Sized> EnvironmentSource for Box<S> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(key)
    }
}

impl<S: EnvironmentSource + ?Sized> EnvironmentSource for Arc<S> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        (**self).lookup(key)
    }
}

impl<H: BuildHasher> EnvironmentSource for HashMap<String, String, H> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}

impl EnvironmentSource for BTreeMap<String, String> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.get(key).map(|value| Cow::Borrowed(value.as_str()))
    }
}

/// Pairs, as in `[("ENABLE_X", "true")]`; the last assignment of a key wins.
impl<K: AsRef<str>, V: AsRef<str>> EnvironmentSource for [(K, V)] {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.iter().rev().find(|(k, _)| k.as_ref() == key).map(|(_, v)| Cow::Borrowed(v.as_ref()))
    }
}

impl<K: AsRef<str>, V: AsRef<str>, const N: usize> EnvironmentSource for [(K, V); N] {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(key)
    }
}

impl<K: AsRef<str>, V: AsRef<str>> EnvironmentSource for Vec<(K, V)> {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.as_slice().lookup(key)
    }
}
