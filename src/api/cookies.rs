//! Cookie-header parsing for the CSRF token.

/// Extract a cookie's value from a `Cookie`-header-style string.
///
/// Entries split on `;`, each trimmed; the first exact `name=` match wins.
/// Values are percent-decoded; invalid `%` sequences stay verbatim.
pub fn cookie_value(header: &str, name: &str) -> Option<String> {
    for entry in header.split(';') {
        let entry = entry.trim();
        if let Some(rest) = entry.strip_prefix(name) {
            if let Some(value) = rest.strip_prefix('=') {
                return Some(percent_decode(value));
            }
        }
    }
    None
}

/// The token Django expects back in the `X-CSRFToken` header
pub fn csrf_token(header: &str) -> Option<String> {
    cookie_value(header, "csrftoken")
}

fn percent_decode(value: &str) -> String {
    let bytes = value.as_bytes();
    let mut out = Vec::with_capacity(bytes.len());
    let mut i = 0;

    while i < bytes.len() {
        if bytes[i] == b'%' && i + 2 < bytes.len() {
            if let (Some(hi), Some(lo)) = (hex_value(bytes[i + 1]), hex_value(bytes[i + 2])) {
                out.push(hi * 16 + lo);
                i += 3;
                continue;
            }
        }
        out.push(bytes[i]);
        i += 1;
    }

    String::from_utf8_lossy(&out).into_owned()
}

fn hex_value(byte: u8) -> Option<u8> {
    match byte {
        b'0'..=b'9' => Some(byte - b'0'),
        b'a'..=b'f' => Some(byte - b'a' + 10),
        b'A'..=b'F' => Some(byte - b'A' + 10),
        _ => None,
    }
}
