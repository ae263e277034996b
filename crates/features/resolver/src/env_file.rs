use crate::error::{ResolverError, ResolverErrorExt};
use crate::source::EnvironmentSource;
use std::borrow::Cow;
use std::collections::BTreeMap;
use std::fs;
use std::path::Path;

/// Variables read from a dotenv-style file.
///
/// Parsed with `dotenvy` (`export` prefixes, quoting, `#` comments). Parsing never writes
/// to the process environment, but it reads it: unquoted and double-quoted `$VAR` /
/// `${VAR}` references expand from process variables first, then from earlier lines of
/// the same file. Later assignments of the same key win.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct EnvFile {
    vars: BTreeMap<String, String>,
}

impl EnvFile {
    /// # Errors
    /// [`ResolverError::EnvFile`] for the first line that cannot be parsed.
    pub fn parse(contents: &str) -> Result<Self, ResolverError> {
        let vars = dotenvy::from_read_iter(contents.as_bytes())
            .collect::<Result<BTreeMap<_, _>, _>>()?;
        Ok(Self { vars })
    }

    /// # Errors
    /// [`ResolverError::Io`] if the file cannot be read, [`ResolverError::EnvFile`] if it
    /// is malformed.
    pub fn read(path: impl AsRef<Path>) -> Result<Self, ResolverError> {
        let path = path.as_ref();
        let contents =
            fs::read_to_string(path).context(format!("Reading env file {}", path.display()))?;
        Self::parse(&contents).context(path.display().to_string())
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.vars.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.vars.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.vars.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl EnvironmentSource for EnvFile {
    fn lookup(&self, key: &str) -> Option<Cow<'_, str>> {
        self.vars.lookup(key)
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for EnvFile {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self { vars: iter.into_iter().map(|(k, v)| (k.into(), v.into())).collect() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_common_dotenv_forms() {
        let file = EnvFile::parse(
            r#"
# feature toggles
ENABLE_PRACTICE_ADOPTION=true
export ENABLE_NEW_CHECKOUT="0"
ENABLE_REPORTS='FALSE'
ENABLE_EMPTY=
"#,
        )
        .expect("valid env file");

        assert_eq!(file.len(), 4);
        assert_eq!(file.lookup("ENABLE_PRACTICE_ADOPTION").as_deref(), Some("true"));
        assert_eq!(file.lookup("ENABLE_NEW_CHECKOUT").as_deref(), Some("0"));
        assert_eq!(file.lookup("ENABLE_REPORTS").as_deref(), Some("FALSE"));
        assert_eq!(file.lookup("ENABLE_EMPTY").as_deref(), Some(""));
    }

    #[test]
    fn later_assignment_wins() {
        let file = EnvFile::parse("K=0\nK=1\n").expect("valid env file");
        assert_eq!(file.lookup("K").as_deref(), Some("1"));
    }

    #[test]
    fn malformed_lines_are_rejected() {
        let err = EnvFile::parse("A=1\nJUST_A_WORD\n").unwrap_err();
        assert_eq!(err.kind(), "EnvFile");
        assert!(err.to_string().contains("JUST_A_WORD"), "{err}");
    }
}
