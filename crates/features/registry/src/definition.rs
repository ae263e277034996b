use crate::error::RegistryError;
use chrono::NaiveDate;
use serde::Deserialize;
use std::str::FromStr;
use syd_domain::{Flag, FlagDescriptor, FlagStatus};
use toml::Value;

const DATE_FORMAT: &str = "%Y-%m-%d";

/// A flag as authored in a manifest, before validation.
///
/// Loosely typed on purpose: a manifest saying `default_value = "yes"` must be reported
/// as an invalid descriptor naming the flag, not as an anonymous parse failure.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct FlagDefinition {
    pub name: String,
    pub env_key: String,
    pub default_value: Option<Value>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub owner: String,
    pub status: Option<Value>,
    pub created_at: Option<Value>,
}

/// Anything that can become a validated [`FlagDescriptor`] at registration time.
pub trait IntoDescriptor {
    /// # Errors
    /// Returns [`RegistryError::InvalidDescriptor`] when a field cannot be interpreted.
    fn into_descriptor(self) -> Result<FlagDescriptor, RegistryError>;
}

impl IntoDescriptor for FlagDescriptor {
    fn into_descriptor(self) -> Result<FlagDescriptor, RegistryError> {
        Ok(self)
    }
}

impl IntoDescriptor for FlagDefinition {
    fn into_descriptor(self) -> Result<FlagDescriptor, RegistryError> {
        let name = self.name;

        let default_value = match self.default_value {
            Some(Value::Boolean(value)) => value,
            Some(other) => {
                return Err(RegistryError::invalid(
                    &name,
                    format!("default_value must be a boolean, got {}", other.type_str()),
                ));
            },
            None => return Err(RegistryError::invalid(&name, "default_value is missing")),
        };

        let status = match self.status {
            Some(Value::String(raw)) => parse_status(&name, &raw)?,
            Some(other) => {
                return Err(RegistryError::invalid(
                    &name,
                    format!("status must be a string, got {}", other.type_str()),
                ));
            },
            None => return Err(RegistryError::invalid(&name, "status is missing")),
        };

        let created_at = match self.created_at {
            Some(Value::String(raw)) => parse_date(&name, &raw)?,
            Some(Value::Datetime(datetime)) => match (datetime.date, datetime.time, datetime.offset)
            {
                (Some(date), None, None) => NaiveDate::from_ymd_opt(
                    i32::from(date.year),
                    u32::from(date.month),
                    u32::from(date.day),
                )
                .ok_or_else(|| {
                    RegistryError::invalid(&name, format!("created_at '{datetime}' is not a date"))
                })?,
                _ => {
                    return Err(RegistryError::invalid(
                        &name,
                        format!("created_at must be a calendar date, got '{datetime}'"),
                    ));
                },
            },
            Some(other) => {
                return Err(RegistryError::invalid(
                    &name,
                    format!("created_at must be a date, got {}", other.type_str()),
                ));
            },
            None => return Err(RegistryError::invalid(&name, "created_at is missing")),
        };

        Ok(FlagDescriptor {
            name,
            env_key: self.env_key,
            default_value,
            description: self.description,
            owner: self.owner,
            status,
            created_at,
        })
    }
}

impl IntoDescriptor for Flag {
    fn into_descriptor(self) -> Result<FlagDescriptor, RegistryError> {
        let entry = self.entry();
        Ok(FlagDescriptor {
            name: self.name().to_owned(),
            env_key: entry.env_key.to_owned(),
            default_value: entry.default_value,
            description: entry.description.to_owned(),
            owner: entry.owner.to_owned(),
            status: entry.status,
            created_at: parse_date(self.name(), entry.created_at)?,
        })
    }
}

fn parse_status(name: &str, raw: &str) -> Result<FlagStatus, RegistryError> {
    FlagStatus::from_str(raw).map_err(|_| {
        RegistryError::invalid(
            name,
            format!("status '{raw}' is not one of alpha, beta, stable, deprecated"),
        )
    })
}

fn parse_date(name: &str, raw: &str) -> Result<NaiveDate, RegistryError> {
    NaiveDate::parse_from_str(raw.trim(), DATE_FORMAT).map_err(|e| {
        RegistryError::invalid(name, format!("created_at '{raw}' is not a YYYY-MM-DD date: {e}"))
    })
}

/// Shape rules shared by every descriptor, whatever its origin.
pub(crate) fn validate_shape(descriptor: &FlagDescriptor) -> Result<(), RegistryError> {
    let name = descriptor.name.as_str();
    if name.is_empty() {
        return Err(RegistryError::invalid(name, "name must not be empty"));
    }
    if name.chars().any(|c| c.is_whitespace() || c.is_control()) {
        return Err(RegistryError::invalid(name, "name must not contain whitespace"));
    }

    let key = descriptor.env_key.as_str();
    if key.is_empty() {
        return Err(RegistryError::invalid(name, "env_key must not be empty"));
    }
    if key.chars().any(|c| c.is_whitespace() || c.is_control() || c == '=') {
        return Err(RegistryError::invalid(
            name,
            format!("env_key '{key}' is not a valid environment variable name"),
        ));
    }
    Ok(())
}
