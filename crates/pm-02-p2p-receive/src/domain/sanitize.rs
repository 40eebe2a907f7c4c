//! # Address Sanitation
//!
//! Normalizes a caller-supplied paymail into `(alias, domain)`:
//!
//! - `mailto:` prefixes, surrounding whitespace and case are dropped
//! - only `[a-z0-9._+@-]` survive in the address
//! - the domain loses any scheme, `www.`, port and path

use super::entities::PaymailAddress;
use crate::ports::outbound::AddressSanitizer;

/// Default sanitizer for `alias@domain` addresses.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaymailSanitizer;

impl AddressSanitizer for PaymailSanitizer {
    fn sanitize(&self, raw: &str) -> PaymailAddress {
        sanitize_paymail(raw)
    }
}

/// Split and normalize a paymail address.
pub fn sanitize_paymail(raw: &str) -> PaymailAddress {
    let address = sanitize_email(raw);
    let mut parts = address.split('@');
    let alias = parts.next().unwrap_or_default().trim().to_string();
    let domain = parts.next().map(sanitize_domain).unwrap_or_default();

    PaymailAddress {
        alias,
        domain,
        address,
    }
}

/// Normalize an email-style address.
pub fn sanitize_email(raw: &str) -> String {
    let mut value = raw.to_string();
    for prefix in ["mailto:", "Mailto:", "MAILTO:"] {
        value = value.replace(prefix, "");
    }
    value
        .trim()
        .to_lowercase()
        .chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '_' | '.' | '@' | '+'))
        .collect()
}

/// Normalize a domain name.
pub fn sanitize_domain(raw: &str) -> String {
    let mut host = raw.trim().to_lowercase();
    for scheme in ["https://", "http://"] {
        if let Some(rest) = host.strip_prefix(scheme) {
            host = rest.to_string();
            break;
        }
    }
    if let Some(end) = host.find(['/', '?', '#', ':']) {
        host.truncate(end);
    }
    if let Some(rest) = host.strip_prefix("www.") {
        host = rest.to_string();
    }
    host.chars()
        .filter(|c| c.is_ascii_alphanumeric() || matches!(c, '-' | '.'))
        .collect()
}
