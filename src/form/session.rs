use anyhow::Result;
use log::{debug, info, warn};
use thiserror::Error;

use super::{
    gate::{ValidationErrors, validate},
    schema::{Schema, compose},
};
use crate::{
    settings_client::WiFiSettingsClient,
    types::{Field, NetworkSelection, WiFiSettings},
};

/// Lifecycle of one editing session
///
/// ```text
///  load ──► Clean ──edit──► Dirty ──submit──► (validate)
///                             ▲                  │
///                             │ invalid /        │ valid
///                             │ save failed      ▼
///                             └────────────── Submitting ──saved──► Submitted
/// ```
///
/// Validation is synchronous, so it has no state of its own. `Submitted` is
/// terminal until the next load.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum SessionState {
    #[default]
    Clean,
    Dirty,
    Submitting,
    Submitted,
}

#[derive(Debug, Error)]
pub enum SessionError {
    #[error("settings are invalid: {0}")]
    Invalid(#[from] ValidationErrors),
    #[error("a save is already in progress")]
    SubmitInFlight,
    #[error("settings were already submitted")]
    AlreadySubmitted,
    #[error("ssid is provided by the selected network")]
    SsidReadOnly,
    #[error("failed to save settings")]
    Persistence(#[source] anyhow::Error),
}

/// Editing session owning the settings draft and both mode flags
#[derive(Debug, Default)]
pub struct EditSession {
    state: SessionState,
    settings: WiFiSettings,
    selected_network: Option<NetworkSelection>,
    errors: Option<ValidationErrors>,
    last_save_error: Option<String>,
}

impl EditSession {
    /// Start a session from freshly loaded settings
    pub fn new(settings: WiFiSettings) -> Self {
        Self {
            settings,
            ..Default::default()
        }
    }

    /// Discard edits and selection and restart from freshly loaded settings
    pub fn reload(&mut self, settings: WiFiSettings) -> Result<(), SessionError> {
        if self.state == SessionState::Submitting {
            return Err(SessionError::SubmitInFlight);
        }

        debug!("reload settings");
        *self = Self::new(settings);
        Ok(())
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn settings(&self) -> &WiFiSettings {
        &self.settings
    }

    pub fn selected_network(&self) -> Option<&NetworkSelection> {
        self.selected_network.as_ref()
    }

    /// Errors of the last rejected submit attempt
    pub fn errors(&self) -> Option<&ValidationErrors> {
        self.errors.as_ref()
    }

    /// Message of the last failed save
    pub fn last_save_error(&self) -> Option<&str> {
        self.last_save_error.as_deref()
    }

    /// The SSID that will be persisted
    pub fn ssid(&self) -> &str {
        self.selected_network
            .as_ref()
            .map_or(&self.settings.ssid, |network| &network.ssid)
    }

    pub fn select_network(&mut self, network: NetworkSelection) -> Result<(), SessionError> {
        self.ensure_editable()?;

        info!("select network {} ({})", network.ssid, network.summary());
        self.selected_network = Some(network);
        self.mark_dirty();
        Ok(())
    }

    /// Return to manual SSID entry; the previously typed SSID comes back
    pub fn deselect_network(&mut self) -> Result<(), SessionError> {
        self.ensure_editable()?;

        if let Some(network) = self.selected_network.take() {
            info!("deselect network {}", network.ssid);
            self.mark_dirty();
        }
        Ok(())
    }

    pub fn set_field(
        &mut self,
        field: Field,
        value: impl Into<String>,
    ) -> Result<(), SessionError> {
        self.ensure_editable()?;

        if field == Field::Ssid && self.selected_network.is_some() {
            return Err(SessionError::SsidReadOnly);
        }

        debug!("set {field}");
        self.settings.set_value(field, value.into());
        self.mark_dirty();
        Ok(())
    }

    pub fn set_static_ip_enabled(&mut self, enabled: bool) -> Result<(), SessionError> {
        self.ensure_editable()?;

        debug!("set static ip config: {enabled}");
        self.settings.static_ip_enabled = enabled;
        self.mark_dirty();
        Ok(())
    }

    /// Active schema for the current mode flags
    pub fn schema(&self) -> Schema {
        compose(self.selected_network.as_ref(), &self.settings)
    }

    /// Validate without changing state
    pub fn validate(&self) -> Result<(), ValidationErrors> {
        validate(&self.schema(), &self.settings)
    }

    /// Validate and, on success, enter `Submitting`
    ///
    /// Returns the record to hand to the persistence collaborator. Only one
    /// submit may be outstanding; the caller reports the outcome through
    /// [`EditSession::complete_submit`].
    pub fn begin_submit(&mut self) -> Result<WiFiSettings, SessionError> {
        match self.state {
            SessionState::Submitting => return Err(SessionError::SubmitInFlight),
            SessionState::Submitted => return Err(SessionError::AlreadySubmitted),
            SessionState::Clean | SessionState::Dirty => {}
        }

        if let Err(errors) = self.validate() {
            warn!("submit rejected: {errors}");
            self.errors = Some(errors.clone());
            self.state = SessionState::Dirty;
            return Err(errors.into());
        }

        self.errors = None;
        self.last_save_error = None;
        self.state = SessionState::Submitting;

        let mut outgoing = self.settings.clone();
        if let Some(network) = &self.selected_network {
            outgoing.ssid = network.ssid.clone();
        }

        info!("submit settings: {outgoing:?}");
        Ok(outgoing)
    }

    /// Record the outcome of the save started by [`EditSession::begin_submit`]
    pub fn complete_submit(&mut self, result: Result<()>) -> Result<(), SessionError> {
        if self.state != SessionState::Submitting {
            warn!("ignore save result outside of submit");
            return Ok(());
        }

        match result {
            Ok(()) => {
                self.mark_submitted();
                Ok(())
            }
            Err(e) => Err(self.mark_save_failed(e)),
        }
    }

    /// Validate, persist through `client` and record the outcome
    ///
    /// Returns the record as stored by the device.
    pub async fn submit<T>(&mut self, client: &T) -> Result<WiFiSettings, SessionError>
    where
        T: WiFiSettingsClient,
    {
        let outgoing = self.begin_submit()?;

        match client.save_settings(outgoing).await {
            Ok(saved) => {
                self.mark_submitted();
                Ok(saved)
            }
            Err(e) => Err(self.mark_save_failed(e)),
        }
    }

    fn mark_submitted(&mut self) {
        info!("settings saved");
        self.state = SessionState::Submitted;
    }

    fn mark_save_failed(&mut self, e: anyhow::Error) -> SessionError {
        warn!("failed to save settings: {e:#}");
        self.last_save_error = Some(format!("{e:#}"));
        self.state = SessionState::Dirty;
        SessionError::Persistence(e)
    }

    fn ensure_editable(&self) -> Result<(), SessionError> {
        match self.state {
            SessionState::Submitting => Err(SessionError::SubmitInFlight),
            SessionState::Submitted => Err(SessionError::AlreadySubmitted),
            SessionState::Clean | SessionState::Dirty => Ok(()),
        }
    }

    fn mark_dirty(&mut self) {
        self.state = SessionState::Dirty;
    }
}
