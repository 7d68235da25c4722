pub mod edit;
pub mod gate;
pub mod schema;
pub mod session;

pub use edit::SettingsEdit;
pub use gate::{ValidationError, ValidationErrors, validate};
pub use schema::{FieldRule, MAX_PASSWORD_LEN, MAX_SSID_LEN, Schema, compose};
pub use session::{EditSession, SessionError, SessionState};

/*
Schema shape per mode flags:

                    │ static_ip_config = false │ static_ip_config = true
────────────────────┼──────────────────────────┼──────────────────────────────────
 no network         │ ssid*, password*,        │ ssid*, password*, hostname*,
 selected           │ hostname*                │ local_ip*, gateway_ip*,
                    │                          │ subnet_mask*, dns_ip_1, dns_ip_2
────────────────────┼──────────────────────────┼──────────────────────────────────
 network selected   │ password(*), hostname*   │ password(*), hostname*,
                    │                          │ local_ip*, gateway_ip*,
                    │                          │ subnet_mask*, dns_ip_1, dns_ip_2

 * required   (*) required unless the selected network is open
*/
