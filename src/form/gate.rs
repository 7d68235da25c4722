use serde::Serialize;
use std::collections::BTreeMap;
use thiserror::Error;

use super::schema::Schema;
use crate::types::{Field, WiFiSettings};

/// User correctable problem with a single field
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "field")]
pub enum ValidationError {
    #[error("{} is required", .0.label())]
    MissingRequired(Field),
    #[error("{}", format_hint(.0))]
    InvalidFormat(Field),
}

impl ValidationError {
    pub fn field(&self) -> Field {
        match self {
            Self::MissingRequired(field) | Self::InvalidFormat(field) => *field,
        }
    }
}

fn format_hint(field: &Field) -> &'static str {
    match field {
        Field::Ssid => "SSID must be 32 characters or less",
        Field::Password => "Password must be 64 characters or less",
        Field::Hostname => "Not a valid hostname",
        Field::LocalIp | Field::GatewayIp | Field::SubnetMask | Field::DnsIp1 | Field::DnsIp2 => {
            "Must be an IP address"
        }
    }
}

/// Every failing field of one validation run
#[derive(Clone, Debug, Default, Error, PartialEq, Eq, Serialize)]
#[error("{} field(s) failed validation", .0.len())]
pub struct ValidationErrors(BTreeMap<Field, ValidationError>);

impl ValidationErrors {
    pub fn get(&self, field: Field) -> Option<&ValidationError> {
        self.0.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.0.contains_key(&field)
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &ValidationError)> {
        self.0.iter().map(|(field, error)| (*field, error))
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Check every active field of `settings` against `schema`
///
/// Each field reports at most one error: a required empty field is
/// `MissingRequired`, any non-empty value its validator rejects is
/// `InvalidFormat`. Fields outside the schema are ignored.
pub fn validate(schema: &Schema, settings: &WiFiSettings) -> Result<(), ValidationErrors> {
    let mut errors = BTreeMap::new();

    for (field, rule) in schema.iter() {
        let value = settings.value(field);

        if value.is_empty() {
            if rule.required {
                errors.insert(field, ValidationError::MissingRequired(field));
            }
        } else if !rule.accepts(value) {
            errors.insert(field, ValidationError::InvalidFormat(field));
        }
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(ValidationErrors(errors))
    }
}
