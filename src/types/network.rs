use serde::{Deserialize, Serialize};
use serde_repr::{Deserialize_repr, Serialize_repr};
use serde_valid::Validate;

/// Authentication mode advertised by a discovered network
#[derive(Clone, Copy, Debug, Default, Deserialize_repr, PartialEq, Eq, Serialize_repr)]
#[repr(u8)]
pub enum EncryptionType {
    #[default]
    Open = 0,
    Wep = 1,
    WpaPsk = 2,
    Wpa2Psk = 3,
    WpaWpa2Psk = 4,
    Wpa2Enterprise = 5,
    Wpa3Psk = 6,
    Wpa2Wpa3Psk = 7,
}

impl EncryptionType {
    /// Human readable security mode label
    pub fn label(&self) -> &'static str {
        match self {
            Self::Open => "Open",
            Self::Wep => "WEP",
            Self::WpaPsk => "WPA",
            Self::Wpa2Psk => "WPA2",
            Self::WpaWpa2Psk => "WPA/WPA2",
            Self::Wpa2Enterprise => "WPA2 Enterprise",
            Self::Wpa3Psk => "WPA3",
            Self::Wpa2Wpa3Psk => "WPA2/WPA3",
        }
    }
}

/// A network reported by the device's scan that the user picked
///
/// While a selection is active its SSID is authoritative and read-only.
#[derive(Clone, Debug, Default, Deserialize, PartialEq, Eq, Serialize, Validate)]
pub struct NetworkSelection {
    #[validate(max_length = 32)]
    pub ssid: String,
    #[serde(default)]
    pub bssid: String,
    #[serde(default)]
    pub rssi: i32,
    /// Informational only
    #[serde(default)]
    pub channel: u16,
    pub encryption_type: EncryptionType,
}

impl NetworkSelection {
    /// True when the network advertises no encryption
    pub fn is_open(&self) -> bool {
        self.encryption_type == EncryptionType::Open
    }

    pub fn security_mode(&self) -> &'static str {
        self.encryption_type.label()
    }

    /// One-line description shown beneath the selected SSID
    pub fn summary(&self) -> String {
        format!("Security: {}, Ch: {}", self.security_mode(), self.channel)
    }
}

/// Discovery listing as returned by the device
#[derive(Debug, Default, Deserialize)]
pub struct NetworkList {
    #[serde(default)]
    pub networks: Vec<serde_json::Value>,
}

#[cfg(test)]
mod tests {
    use super::*;

    fn network(encryption_type: EncryptionType) -> NetworkSelection {
        NetworkSelection {
            ssid: "workshop".to_string(),
            bssid: "24:0A:C4:00:11:22".to_string(),
            rssi: -61,
            channel: 6,
            encryption_type,
        }
    }

    #[test]
    fn open_network_is_detected() {
        assert!(network(EncryptionType::Open).is_open());
        assert!(!network(EncryptionType::Wpa2Psk).is_open());
        assert!(!network(EncryptionType::Wep).is_open());
    }

    #[test]
    fn summary_contains_security_mode_and_channel() {
        assert_eq!(
            network(EncryptionType::WpaWpa2Psk).summary(),
            "Security: WPA/WPA2, Ch: 6"
        );
        assert_eq!(network(EncryptionType::Open).summary(), "Security: Open, Ch: 6");
    }

    #[test]
    fn decodes_numeric_encryption_type() {
        let json = r#"{"ssid":"lab","bssid":"aa:bb","rssi":-40,"channel":11,"encryption_type":3}"#;
        let selection: NetworkSelection = serde_json::from_str(json).unwrap();

        assert_eq!(selection.encryption_type, EncryptionType::Wpa2Psk);
        assert_eq!(selection.security_mode(), "WPA2");
        assert_eq!(selection.channel, 11);
    }

    #[test]
    fn rejects_unknown_encryption_type() {
        let json = r#"{"ssid":"lab","encryption_type":42}"#;
        assert!(serde_json::from_str::<NetworkSelection>(json).is_err());
    }

    #[test]
    fn overlong_ssid_fails_shape_validation() {
        let mut selection = network(EncryptionType::Wpa2Psk);
        assert!(selection.validate().is_ok());

        selection.ssid = "x".repeat(33);
        assert!(selection.validate().is_err());
    }
}
