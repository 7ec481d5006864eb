//! HTTP server utility methods

use crate::server::server::HttpServer;
use crate::utils::error::TrashError;
use std::io::ErrorKind;

impl HttpServer {
    /// Turn a bind failure into an operator-facing message with next steps
    pub(crate) fn format_bind_error(
        error: std::io::Error,
        bind_addr: &str,
        port: u16,
    ) -> TrashError {
        let text = error.to_string();
        let in_use = error.kind() == ErrorKind::AddrInUse
            || text.contains("Address already in use")
            || text.contains("os error 48")
            || text.contains("os error 98");
        let denied = error.kind() == ErrorKind::PermissionDenied
            || text.contains("Permission denied")
            || text.contains("os error 13");

        if in_use {
            let next = port.saturating_add(1);
            TrashError::server(format!(
                "❌ Port {port} is already in use.\n\
                 \x20  Stop the other process (lsof -ti:{port} | xargs kill) or pick another port:\n\
                 \x20  trash-server --port {next}   or   TRASH_PORT={next}"
            ))
        } else if denied {
            TrashError::server(format!(
                "❌ Permission denied for port {port}.\n\
                 \x20  Ports below 1024 are privileged; try --port 8000 or TRASH_PORT=8000"
            ))
        } else {
            TrashError::server(format!("Failed to bind to {}: {}", bind_addr, error))
        }
    }
}
