//! DNS resolver initialization.
//!
//! The resolver configuration is built once per run and never changes
//! afterwards. Without a server override the system configuration is used.

use std::net::SocketAddr;

use hickory_resolver::config::{NameServerConfigGroup, ResolverConfig, ResolverOpts};
use hickory_resolver::system_conf::read_system_conf;
use hickory_resolver::TokioAsyncResolver;
use log::{debug, warn};

use crate::error_handling::InitializationError;

/// Initializes the DNS resolver used for every query in the run.
///
/// With `server` set, queries go to that single nameserver (UDP with TCP
/// fallback for truncated answers) and nowhere else. Otherwise the system
/// configuration (`/etc/resolv.conf` or the platform equivalent) is read,
/// falling back to hickory's default upstreams if it cannot be loaded.
///
/// Timeouts and attempts are left at the configuration's defaults.
///
/// # Errors
///
/// Returns `InitializationError::DnsResolverError` if `server` is an
/// unspecified address (`0.0.0.0` or `::`), which can never answer a query.
pub fn init_resolver(server: Option<SocketAddr>) -> Result<TokioAsyncResolver, InitializationError> {
    let (config, opts) = match server {
        Some(addr) => (single_server_config(addr)?, ResolverOpts::default()),
        None => match read_system_conf() {
            Ok((config, opts)) => {
                debug!(
                    "Using system DNS configuration ({} nameservers)",
                    config.name_servers().len()
                );
                (config, opts)
            }
            Err(e) => {
                warn!("Failed to read system DNS configuration: {e}. Using default upstreams.");
                (ResolverConfig::default(), ResolverOpts::default())
            }
        },
    };

    Ok(TokioAsyncResolver::tokio(config, opts))
}

/// Builds a resolver configuration that talks to exactly one nameserver.
fn single_server_config(addr: SocketAddr) -> Result<ResolverConfig, InitializationError> {
    if addr.ip().is_unspecified() {
        return Err(InitializationError::DnsResolverError(format!(
            "{addr} is not a usable DNS server address"
        )));
    }
    debug!("Using DNS server {addr}");
    let name_servers = NameServerConfigGroup::from_ips_clear(&[addr.ip()], addr.port(), true);
    Ok(ResolverConfig::from_parts(None, Vec::new(), name_servers))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_server_config_uses_only_that_server() {
        let addr: SocketAddr = "9.9.9.9:5353".parse().unwrap();
        let config = single_server_config(addr).unwrap();
        // One UDP and one TCP entry for the same socket address
        assert!(!config.name_servers().is_empty());
        assert!(config
            .name_servers()
            .iter()
            .all(|ns| ns.socket_addr == addr));
    }

    #[test]
    fn test_single_server_config_rejects_unspecified() {
        let addr: SocketAddr = "0.0.0.0:53".parse().unwrap();
        assert!(matches!(
            single_server_config(addr),
            Err(InitializationError::DnsResolverError(_))
        ));
    }

    #[tokio::test]
    async fn test_init_resolver_with_server() {
        let addr: SocketAddr = "127.0.0.1:53".parse().unwrap();
        assert!(init_resolver(Some(addr)).is_ok());
    }

    #[tokio::test]
    async fn test_init_resolver_with_system_config() {
        // Falls back to defaults on hosts without a readable resolv.conf
        assert!(init_resolver(None).is_ok());
    }
}
