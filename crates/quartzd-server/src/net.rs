//! Hostname and request-audit helpers.

/// Ensures a hostname is fully qualified.
///
/// Returns the hostname unchanged if it already contains a dot, otherwise
/// appends the configured domain suffix.
pub fn fqdnify(hostname: &str, domain: &str) -> String {
    if hostname.contains('.') {
        hostname.to_string()
    } else {
        format!("{hostname}.{domain}")
    }
}

/// Formats the standard audit line logged at the start of a request.
pub fn request_log_line(username: &str, host: &str, method: &str) -> String {
    format!("User {username} ({host}) requests {method}")
}
