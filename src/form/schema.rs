use std::{collections::BTreeMap, fmt, sync::Arc};

use crate::{
    types::{Field, NetworkSelection, WiFiSettings},
    validators::{Validator, is_hostname, is_ip, max_length, optional},
};

pub const MAX_SSID_LEN: usize = 32;
pub const MAX_PASSWORD_LEN: usize = 64;

/// Validation rule of one active field
#[derive(Clone)]
pub struct FieldRule {
    pub required: bool,
    pub validator: Validator,
}

impl FieldRule {
    fn new<F>(required: bool, validator: F) -> Self
    where
        F: Fn(&str) -> bool + Send + Sync + 'static,
    {
        Self {
            required,
            validator: Arc::new(validator),
        }
    }

    /// Run the validator against a value
    pub fn accepts(&self, value: &str) -> bool {
        (self.validator)(value)
    }
}

impl fmt::Debug for FieldRule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FieldRule")
            .field("required", &self.required)
            .finish_non_exhaustive()
    }
}

/// The fields currently required or validated, keyed by field
///
/// Fields absent from the schema are never evaluated.
#[derive(Clone, Debug, Default)]
pub struct Schema {
    rules: BTreeMap<Field, FieldRule>,
}

impl Schema {
    pub fn get(&self, field: Field) -> Option<&FieldRule> {
        self.rules.get(&field)
    }

    pub fn contains(&self, field: Field) -> bool {
        self.rules.contains_key(&field)
    }

    pub fn is_required(&self, field: Field) -> bool {
        self.get(field).is_some_and(|rule| rule.required)
    }

    pub fn fields(&self) -> impl Iterator<Item = Field> + '_ {
        self.rules.keys().copied()
    }

    pub fn iter(&self) -> impl Iterator<Item = (Field, &FieldRule)> {
        self.rules.iter().map(|(field, rule)| (*field, rule))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    fn insert(&mut self, field: Field, rule: FieldRule) {
        self.rules.insert(field, rule);
    }
}

/// Derive the active schema from the current selection and settings
///
/// Only the two mode flags (selection presence, static IP toggle) shape the
/// result; field values never do.
pub fn compose(selection: Option<&NetworkSelection>, settings: &WiFiSettings) -> Schema {
    let mut schema = Schema::default();

    // a selected network supplies a read-only ssid
    if selection.is_none() {
        schema.insert(Field::Ssid, FieldRule::new(true, max_length(MAX_SSID_LEN)));
    }

    let password_required = selection.is_none_or(|network| !network.is_open());
    schema.insert(
        Field::Password,
        FieldRule::new(password_required, max_length(MAX_PASSWORD_LEN)),
    );

    schema.insert(Field::Hostname, FieldRule::new(true, is_hostname));

    if settings.static_ip_enabled {
        for field in [Field::LocalIp, Field::GatewayIp, Field::SubnetMask] {
            schema.insert(field, FieldRule::new(true, is_ip));
        }
        for field in [Field::DnsIp1, Field::DnsIp2] {
            schema.insert(field, FieldRule::new(false, optional(is_ip)));
        }
    }

    schema
}
