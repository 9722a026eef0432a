use dnsload_domain::DomainError;
use std::net::{IpAddr, SocketAddr};

const DEFAULT_DNS_PORT: u16 = 53;

/// Turns the configured server into a socket address.
///
/// Accepts `ip:port`, a bare IP, `host:port` or a bare host name. Missing
/// ports default to 53; host names take the first address the system
/// resolver returns.
pub async fn resolve_server(server: &str) -> Result<SocketAddr, DomainError> {
    let server = server.trim();

    if let Ok(addr) = server.parse::<SocketAddr>() {
        return Ok(addr);
    }
    if let Ok(ip) = server.trim_matches(|c| c == '[' || c == ']').parse::<IpAddr>() {
        return Ok(SocketAddr::new(ip, DEFAULT_DNS_PORT));
    }

    let target = if server.contains(':') {
        server.to_string()
    } else {
        format!("{}:{}", server, DEFAULT_DNS_PORT)
    };

    let mut resolved = tokio::net::lookup_host(target.as_str())
        .await
        .map_err(|e| DomainError::InvalidServerAddress(format!("{}: {}", server, e)))?;

    resolved.next().ok_or_else(|| {
        DomainError::InvalidServerAddress(format!("{}: no addresses found", server))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_socket_address_is_used_as_is() {
        let addr = resolve_server("127.0.0.1:5353").await.unwrap();
        assert_eq!(addr, "127.0.0.1:5353".parse().unwrap());
    }

    #[tokio::test]
    async fn test_bare_ip_gets_default_port() {
        assert_eq!(
            resolve_server("10.0.0.1").await.unwrap(),
            "10.0.0.1:53".parse().unwrap()
        );
        assert_eq!(
            resolve_server("[::1]").await.unwrap(),
            "[::1]:53".parse().unwrap()
        );
    }

    #[tokio::test]
    async fn test_unresolvable_host_is_rejected() {
        let err = resolve_server("no such host:53").await.unwrap_err();
        assert!(matches!(err, DomainError::InvalidServerAddress(_)));
    }

    #[tokio::test]
    async fn test_localhost_resolves() {
        let addr = resolve_server("localhost:8053").await.unwrap();
        assert_eq!(addr.port(), 8053);
        assert!(addr.ip().is_loopback());
    }
}
