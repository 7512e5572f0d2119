//! API utilities for console-backend communication

use contracts::shared::config::default_config;

/// Base URL for API requests: current host, backend port from the console
/// configuration.
///
/// Returns an empty string outside a browser window.
pub fn api_base() -> String {
    let window = match web_sys::window() {
        Some(w) => w,
        None => return String::new(),
    };
    let location = window.location();
    let protocol = location.protocol().unwrap_or_else(|_| "http:".to_string());
    let hostname = location
        .hostname()
        .unwrap_or_else(|_| "127.0.0.1".to_string());
    format!("{}//{}:{}", protocol, hostname, default_config().api.port)
}

/// Full API URL for `path` (which should start with "/api/").
pub fn api_url(path: &str) -> String {
    format!("{}{}", api_base(), path)
}

/// Append the tenant scope to a collection path, e.g.
/// `/api/orders` + `acme co` -> `/api/orders?tenant=acme%20co`.
pub fn with_tenant(path: &str, tenant_id: Option<&str>) -> String {
    match tenant_id {
        Some(tenant) if !tenant.is_empty() => {
            let separator = if path.contains('?') { '&' } else { '?' };
            format!(
                "{}{}tenant={}",
                path,
                separator,
                urlencoding::encode(tenant)
            )
        }
        _ => path.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_tenant() {
        assert_eq!(with_tenant("/api/orders", None), "/api/orders");
        assert_eq!(with_tenant("/api/orders", Some("")), "/api/orders");
        assert_eq!(
            with_tenant("/api/orders?limit=5", Some("t-1")),
            "/api/orders?limit=5&tenant=t-1"
        );
        assert_eq!(
            with_tenant("/api/orders", Some("acme co")),
            "/api/orders?tenant=acme%20co"
        );
    }
}
