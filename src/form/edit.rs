use serde::Deserialize;

use super::session::{EditSession, SessionError};
use crate::types::{Field, NetworkSelection};

/// A batch of user edits, keyed like the device record
///
/// Absent keys leave the corresponding value untouched.
#[derive(Default, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SettingsEdit {
    /// SSID of a discovered network to select
    pub select_network: Option<String>,
    /// Return to manual SSID entry
    pub deselect_network: bool,
    pub ssid: Option<String>,
    pub password: Option<String>,
    pub hostname: Option<String>,
    #[serde(rename = "static_ip_config")]
    pub static_ip_enabled: Option<bool>,
    pub local_ip: Option<String>,
    pub gateway_ip: Option<String>,
    pub subnet_mask: Option<String>,
    pub dns_ip_1: Option<String>,
    pub dns_ip_2: Option<String>,
}

impl SettingsEdit {
    /// Apply the edits to `session`
    ///
    /// `network` is the discovered entry matching `select_network`, looked up
    /// by the caller. Selection changes are applied first, so an `ssid` edit
    /// combined with `deselect_network` lands in manual entry.
    ///
    /// An `ssid` edit that would land on a selected network rejects the whole
    /// batch before anything is applied.
    pub fn apply(
        self,
        session: &mut EditSession,
        network: Option<NetworkSelection>,
    ) -> Result<(), SessionError> {
        let selected_after = network.is_some()
            || (session.selected_network().is_some() && !self.deselect_network);
        if self.ssid.is_some() && selected_after {
            return Err(SessionError::SsidReadOnly);
        }

        if self.deselect_network {
            session.deselect_network()?;
        }
        if let Some(network) = network {
            session.select_network(network)?;
        }
        if let Some(enabled) = self.static_ip_enabled {
            session.set_static_ip_enabled(enabled)?;
        }

        let text_edits = [
            (Field::Ssid, self.ssid),
            (Field::Password, self.password),
            (Field::Hostname, self.hostname),
            (Field::LocalIp, self.local_ip),
            (Field::GatewayIp, self.gateway_ip),
            (Field::SubnetMask, self.subnet_mask),
            (Field::DnsIp1, self.dns_ip_1),
            (Field::DnsIp2, self.dns_ip_2),
        ];

        for (field, value) in text_edits {
            if let Some(value) = value {
                session.set_field(field, value)?;
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        form::session::SessionState,
        types::{EncryptionType, WiFiSettings},
    };

    fn loaded() -> EditSession {
        EditSession::new(WiFiSettings {
            ssid: "home".to_string(),
            password: "secret-pass".to_string(),
            hostname: "esp-01".to_string(),
            ..Default::default()
        })
    }

    #[test]
    fn applies_only_present_keys() {
        let edit: SettingsEdit =
            serde_json::from_str(r#"{"static_ip_config":true,"local_ip":"10.0.0.5"}"#).unwrap();
        let mut session = loaded();

        edit.apply(&mut session, None).unwrap();

        assert_eq!(session.state(), SessionState::Dirty);
        assert!(session.settings().static_ip_enabled);
        assert_eq!(session.settings().local_ip, "10.0.0.5");
        assert_eq!(session.settings().ssid, "home");
        assert_eq!(session.settings().password, "secret-pass");
    }

    #[test]
    fn empty_edit_keeps_session_clean() {
        let edit: SettingsEdit = serde_json::from_str("{}").unwrap();
        let mut session = loaded();

        edit.apply(&mut session, None).unwrap();

        assert_eq!(session.state(), SessionState::Clean);
    }

    #[test]
    fn rejects_unknown_keys() {
        assert!(serde_json::from_str::<SettingsEdit>(r#"{"localIp":"10.0.0.5"}"#).is_err());
    }

    #[test]
    fn ssid_edit_with_selection_is_rejected() {
        let edit: SettingsEdit =
            serde_json::from_str(r#"{"select_network":"cafe","ssid":"other"}"#).unwrap();
        let network = NetworkSelection {
            ssid: "cafe".to_string(),
            encryption_type: EncryptionType::Open,
            ..Default::default()
        };
        let mut session = loaded();

        let result = edit.apply(&mut session, Some(network));

        assert!(matches!(result, Err(SessionError::SsidReadOnly)));
    }

    #[test]
    fn rejected_batch_leaves_session_untouched() {
        let edit: SettingsEdit = serde_json::from_str(
            r#"{"select_network":"cafe","static_ip_config":true,"ssid":"x"}"#,
        )
        .unwrap();
        let network = NetworkSelection {
            ssid: "cafe".to_string(),
            ..Default::default()
        };
        let mut session = loaded();

        let result = edit.apply(&mut session, Some(network));

        assert!(matches!(result, Err(SessionError::SsidReadOnly)));
        assert_eq!(session.state(), SessionState::Clean);
        assert!(session.selected_network().is_none());
        assert!(!session.settings().static_ip_enabled);
        assert_eq!(session.settings().ssid, "home");
    }

    #[test]
    fn ssid_edit_after_deselect_is_applied() {
        let mut session = loaded();
        session
            .select_network(NetworkSelection {
                ssid: "cafe".to_string(),
                ..Default::default()
            })
            .unwrap();
        let edit: SettingsEdit =
            serde_json::from_str(r#"{"deselect_network":true,"ssid":"office"}"#).unwrap();

        edit.apply(&mut session, None).unwrap();

        assert!(session.selected_network().is_none());
        assert_eq!(session.ssid(), "office");
    }
}
