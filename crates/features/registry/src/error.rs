use std::borrow::Cow;

/// Errors raised while building or querying a [`FlagRegistry`](crate::FlagRegistry).
///
/// All of them are configuration-correctness errors: startup must stop rather than
/// continue with a partially valid registry.
#[syd_derive::syd_error]
pub enum RegistryError {
    /// A definition is malformed (non-boolean default, unknown status, bad date, bad key).
    #[error("Invalid flag descriptor{}: {name}: {message}", format_context(.context))]
    InvalidDescriptor {
        name: String,
        message: Cow<'static, str>,
        context: Option<Cow<'static, str>>,
    },

    /// The name or the environment key is already taken by another flag.
    #[error("Duplicate flag{}: {name}: {message}", format_context(.context))]
    DuplicateFlag { name: String, message: Cow<'static, str>, context: Option<Cow<'static, str>> },

    /// No flag with this name was ever registered.
    #[error("Unknown flag{}: {name}", format_context(.context))]
    UnknownFlag { name: String, context: Option<Cow<'static, str>> },

    /// The manifest is not valid TOML or does not match the `[[flags]]` layout.
    #[error("Flag manifest error{}: {source}", format_context(.context))]
    Manifest { source: toml::de::Error, context: Option<Cow<'static, str>> },

    #[error("Flag manifest I/O failure{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },
}

impl RegistryError {
    pub(crate) fn invalid(name: &str, message: impl Into<Cow<'static, str>>) -> Self {
        Self::InvalidDescriptor { name: name.to_owned(), message: message.into(), context: None }
    }

    pub(crate) fn unknown(name: &str) -> Self {
        Self::UnknownFlag { name: name.to_owned(), context: None }
    }
}
