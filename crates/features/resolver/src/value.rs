/// An override value that is neither empty nor a recognised boolean literal.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unrecognized flag value {0:?}")]
pub struct UnrecognizedValue(pub String);

/// Interprets one raw override value.
///
/// Surrounding whitespace is ignored. An empty value means "no override" (`Ok(None)`).
/// Recognised literals are `true`/`false` in any letter case, and `1`/`0`.
///
/// ```rust
/// use syd_resolver::parse_flag_value;
///
/// assert_eq!(parse_flag_value(" TRUE "), Ok(Some(true)));
/// assert_eq!(parse_flag_value("0"), Ok(Some(false)));
/// assert_eq!(parse_flag_value(""), Ok(None));
/// assert!(parse_flag_value("yes").is_err());
/// ```
///
/// # Errors
/// [`UnrecognizedValue`] carrying the trimmed input for anything else.
pub fn parse_flag_value(raw: &str) -> Result<Option<bool>, UnrecognizedValue> {
    let value = raw.trim();
    if value.is_empty() {
        Ok(None)
    } else if value == "1" || value.eq_ignore_ascii_case("true") {
        Ok(Some(true))
    } else if value == "0" || value.eq_ignore_ascii_case("false") {
        Ok(Some(false))
    } else {
        Err(UnrecognizedValue(value.to_owned()))
    }
}
