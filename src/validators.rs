//! Field validators
//!
//! Every validator is a pure predicate over the raw field text. A failed
//! match is `false`, never an error.

use std::sync::Arc;

/// Shared, clonable validator
pub type Validator = Arc<dyn Fn(&str) -> bool + Send + Sync>;

const MAX_HOSTNAME_LEN: usize = 253;
const MAX_LABEL_LEN: usize = 63;

/// Validate IPv4 address format
pub fn is_ip(ip: &str) -> bool {
    let parts: Vec<&str> = ip.split('.').collect();
    if parts.len() != 4 {
        return false;
    }

    parts.iter().all(|part| {
        !part.is_empty()
            && part.len() <= 3
            && part.bytes().all(|b| b.is_ascii_digit())
            && part.parse::<u16>().is_ok_and(|num| num <= 255)
    })
}

/// Validate hostname format
///
/// Dot separated labels of 1-63 alphanumerics or hyphens, no label starting
/// or ending with a hyphen, at most 253 characters overall.
pub fn is_hostname(hostname: &str) -> bool {
    if hostname.is_empty() || hostname.len() > MAX_HOSTNAME_LEN {
        return false;
    }

    hostname.split('.').all(|label| {
        (1..=MAX_LABEL_LEN).contains(&label.len())
            && label.bytes().all(|b| b.is_ascii_alphanumeric() || b == b'-')
            && !label.starts_with('-')
            && !label.ends_with('-')
    })
}

/// Accept empty input, otherwise delegate to `validator`
pub fn optional<F>(validator: F) -> impl Fn(&str) -> bool + Send + Sync + 'static
where
    F: Fn(&str) -> bool + Send + Sync + 'static,
{
    move |value| value.is_empty() || validator(value)
}

const LINE_TERMINATORS: [char; 4] = ['\n', '\r', '\u{2028}', '\u{2029}'];

/// Accept a single line of at most `max` characters
pub fn max_length(max: usize) -> impl Fn(&str) -> bool + Send + Sync + 'static {
    move |value| !value.contains(LINE_TERMINATORS) && value.chars().count() <= max
}
