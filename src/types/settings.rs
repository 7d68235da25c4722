use serde::{Deserialize, Serialize};
use std::fmt;

/// Identifier of an editable text field
///
/// The string form is the key used on the wire and in error batches.
#[derive(Clone, Copy, Debug, Deserialize, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum Field {
    #[serde(rename = "ssid")]
    Ssid,
    #[serde(rename = "password")]
    Password,
    #[serde(rename = "hostname")]
    Hostname,
    #[serde(rename = "local_ip")]
    LocalIp,
    #[serde(rename = "gateway_ip")]
    GatewayIp,
    #[serde(rename = "subnet_mask")]
    SubnetMask,
    #[serde(rename = "dns_ip_1")]
    DnsIp1,
    #[serde(rename = "dns_ip_2")]
    DnsIp2,
}

impl Field {
    pub const ALL: [Field; 8] = [
        Field::Ssid,
        Field::Password,
        Field::Hostname,
        Field::LocalIp,
        Field::GatewayIp,
        Field::SubnetMask,
        Field::DnsIp1,
        Field::DnsIp2,
    ];

    /// Wire key of the field
    pub fn key(&self) -> &'static str {
        match self {
            Self::Ssid => "ssid",
            Self::Password => "password",
            Self::Hostname => "hostname",
            Self::LocalIp => "local_ip",
            Self::GatewayIp => "gateway_ip",
            Self::SubnetMask => "subnet_mask",
            Self::DnsIp1 => "dns_ip_1",
            Self::DnsIp2 => "dns_ip_2",
        }
    }

    /// Display label of the field
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ssid => "SSID",
            Self::Password => "Password",
            Self::Hostname => "Hostname",
            Self::LocalIp => "Local IP",
            Self::GatewayIp => "Gateway IP",
            Self::SubnetMask => "Subnet mask",
            Self::DnsIp1 => "DNS IP #1",
            Self::DnsIp2 => "DNS IP #2",
        }
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

/// WiFi settings record as loaded from and saved to the device
///
/// Static IP values are kept even while `static_ip_enabled` is off, so that
/// re-enabling does not require re-entry.
#[derive(Clone, Default, Deserialize, PartialEq, Eq, Serialize)]
#[serde(default)]
pub struct WiFiSettings {
    pub ssid: String,
    pub password: String,
    pub hostname: String,
    #[serde(rename = "static_ip_config")]
    pub static_ip_enabled: bool,
    pub local_ip: String,
    pub gateway_ip: String,
    pub subnet_mask: String,
    pub dns_ip_1: String,
    pub dns_ip_2: String,
}

impl WiFiSettings {
    pub fn value(&self, field: Field) -> &str {
        match field {
            Field::Ssid => &self.ssid,
            Field::Password => &self.password,
            Field::Hostname => &self.hostname,
            Field::LocalIp => &self.local_ip,
            Field::GatewayIp => &self.gateway_ip,
            Field::SubnetMask => &self.subnet_mask,
            Field::DnsIp1 => &self.dns_ip_1,
            Field::DnsIp2 => &self.dns_ip_2,
        }
    }

    pub fn set_value(&mut self, field: Field, value: String) {
        let slot = match field {
            Field::Ssid => &mut self.ssid,
            Field::Password => &mut self.password,
            Field::Hostname => &mut self.hostname,
            Field::LocalIp => &mut self.local_ip,
            Field::GatewayIp => &mut self.gateway_ip,
            Field::SubnetMask => &mut self.subnet_mask,
            Field::DnsIp1 => &mut self.dns_ip_1,
            Field::DnsIp2 => &mut self.dns_ip_2,
        };
        *slot = value;
    }
}

// never print the password
impl fmt::Debug for WiFiSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let password = if self.password.is_empty() {
            ""
        } else {
            "<redacted>"
        };

        f.debug_struct("WiFiSettings")
            .field("ssid", &self.ssid)
            .field("password", &password)
            .field("hostname", &self.hostname)
            .field("static_ip_enabled", &self.static_ip_enabled)
            .field("local_ip", &self.local_ip)
            .field("gateway_ip", &self.gateway_ip)
            .field("subnet_mask", &self.subnet_mask)
            .field("dns_ip_1", &self.dns_ip_1)
            .field("dns_ip_2", &self.dns_ip_2)
            .finish()
    }
}
