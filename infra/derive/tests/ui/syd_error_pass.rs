use std::borrow::Cow;
use syd_derive::syd_error;

#[syd_error]
pub enum DemoError {
    #[error("IO error{}: {source}", format_context(.context))]
    Io { source: std::io::Error, context: Option<Cow<'static, str>> },

    #[error("Unknown flag{}: {name}", format_context(.context))]
    UnknownFlag { name: String, context: Option<Cow<'static, str>> },

    #[error("Internal error{}: {message}", format_context(.context))]
    Internal { message: Cow<'static, str>, context: Option<Cow<'static, str>> },
}

fn read() -> Result<(), DemoError> {
    Err(std::io::Error::other("boom")).context("reading manifest")
}

fn main() {
    let err = read().unwrap_err();
    assert_eq!(err.kind(), "Io");
    assert_eq!(err.to_string(), "IO error (reading manifest): boom");

    let err: DemoError = "bad state".into();
    assert_eq!(err.kind(), "Internal");

    let err: Result<(), DemoError> =
        Err(DemoError::UnknownFlag { name: "NOPE".to_owned(), context: None });
    let err = err.context("lookup").unwrap_err();
    assert_eq!(err.to_string(), "Unknown flag (lookup): NOPE");
}
