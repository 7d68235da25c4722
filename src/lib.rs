pub mod config;
pub mod form;
pub mod http_client;
pub mod settings_client;
pub mod types;
pub mod validators;

pub use crate::{
    form::{
        EditSession, SessionError, SessionState, SettingsEdit, ValidationError, ValidationErrors,
    },
    settings_client::{DeviceRestClient, WiFiSettingsClient},
    types::*,
};
