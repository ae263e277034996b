use std::borrow::Cow;
use syd_kernel::config::ConfigError;
use syd_logger::LoggerError;
use syd_registry::RegistryError;
use syd_resolver::ResolverError;

/// Everything that can go wrong while bootstrapping or refreshing flags.
#[syd_derive::syd_error]
pub enum SwitchyardError {
    #[error("Settings error{}: {source}", format_context(.context))]
    Config { source: ConfigError, context: Option<Cow<'static, str>> },

    #[error("Logging error{}: {source}", format_context(.context))]
    Logger { source: LoggerError, context: Option<Cow<'static, str>> },

    #[error("Flag registry error{}: {source}", format_context(.context))]
    Registry { source: RegistryError, context: Option<Cow<'static, str>> },

    #[error("Flag resolution error{}: {source}", format_context(.context))]
    Resolver { source: ResolverError, context: Option<Cow<'static, str>> },
}
