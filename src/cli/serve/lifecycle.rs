//! Server lifecycle management.

use crate::{core::register_server, log};
use anyhow::{Result, anyhow};
use std::{net::SocketAddr, sync::Arc};
use tiny_http::Server;

/// Maximum number of port binding attempts.
const MAX_PORT_RETRIES: u16 = 10;

/// Bind to the specified interface and port, with automatic port retry.
pub fn bind_with_retry(
    interface: std::net::IpAddr,
    base_port: u16,
) -> Result<(Server, SocketAddr)> {
    let mut last_error = None;

    for offset in 0..MAX_PORT_RETRIES {
        let port = base_port.saturating_add(offset);
        let addr = SocketAddr::new(interface, port);

        match Server::http(addr) {
            Ok(server) => {
                if offset > 0 {
                    log!("serve"; "port {} in use, using {} instead", base_port, port);
                }
                return Ok((server, addr));
            }
            Err(e) => last_error = Some(e),
        }
    }

    Err(anyhow!(
        "Failed to bind after {} attempts (ports {}-{}): {}",
        MAX_PORT_RETRIES,
        base_port,
        base_port.saturating_add(MAX_PORT_RETRIES - 1),
        last_error.map(|e| e.to_string()).unwrap_or_default()
    ))
}

/// Register server for graceful shutdown.
///
/// Ctrl+C (handler installed in main) unblocks the request loop.
pub fn register_server_for_shutdown(server: Arc<Server>) {
    register_server(server);
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{IpAddr, Ipv4Addr};

    #[test]
    fn test_bind_retries_next_port() {
        let localhost = IpAddr::V4(Ipv4Addr::LOCALHOST);
        let (first, first_addr) = bind_with_retry(localhost, 0).unwrap();
        let taken = first.server_addr().to_ip().unwrap().port();
        assert_eq!(first_addr.port(), 0);

        let (_second, second_addr) = bind_with_retry(localhost, taken).unwrap();
        assert_ne!(second_addr.port(), taken);
        assert!(second_addr.port() > taken);
    }
}
