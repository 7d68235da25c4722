//! Domain-based type organization
//!
//! - network: discovered WiFi networks the user may pick
//! - settings: the editable settings record and its field identifiers

pub mod network;
pub mod settings;

pub use network::*;
pub use settings::*;
