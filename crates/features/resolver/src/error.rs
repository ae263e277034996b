use std::borrow::Cow;

/// Errors raised while resolving flags or reading override sources.
#[syd_derive::syd_error]
pub enum ResolverError {
    /// The environment supplies an override that is not a recognised boolean literal.
    #[error(
        "Invalid flag value{}: {flag} ({env_key}={value:?}), expected true/false/1/0",
        format_context(.context)
    )]
    InvalidFlagValue {
        flag: String,
        env_key: String,
        value: String,
        context: Option<Cow<'static, str>>,
    },

    /// Lookup of a name that is not part of the snapshot.
    #[error("Unknown flag{}: {name}", format_context(.context))]
    UnknownFlag { name: String, context: Option<Cow<'static, str>> },

    /// A dotenv-style override file is malformed.
    #[error("Invalid env file{}: {source}", format_context(.context))]
    EnvFile { source: dotenvy::Error, context: Option<Cow<'static, str>> },

    #[error("Env file I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

impl ResolverError {
    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownFlag { name: name.to_owned(), context: None }
    }
}
