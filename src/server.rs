// SPDX-License-Identifier: MIT

//! Listener setup
//!
//! A socket inherited from a supervisor such as `systemfd` takes precedence,
//! so `systemfd --no-pid -s http::8000 -- cargo watch -x run` restarts the
//! process on source changes without dropping the listening socket.

use std::net::SocketAddr;

use listenfd::ListenFd;
use tokio::net::TcpListener;

use crate::error::Result;

/// Takes the first inherited TCP socket, or binds `addr` when there is none
pub async fn bind_listener(fds: &mut ListenFd, addr: SocketAddr) -> Result<TcpListener> {
    match fds.take_tcp_listener(0)? {
        Some(inherited) => {
            inherited.set_nonblocking(true)?;
            let listener = TcpListener::from_std(inherited)?;
            tracing::info!(
                "Using inherited listener on {} (reload-on-change enabled)",
                listener.local_addr()?
            );
            Ok(listener)
        }
        None => Ok(TcpListener::bind(addr).await?),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_binds_when_nothing_inherited() {
        let mut fds = ListenFd::empty();
        let addr: SocketAddr = "127.0.0.1:0".parse().unwrap();

        let listener = bind_listener(&mut fds, addr).await.unwrap();
        let local = listener.local_addr().unwrap();
        assert!(local.ip().is_loopback());
        assert_ne!(local.port(), 0);
    }

    #[tokio::test]
    async fn test_bind_failure_is_io_error() {
        let taken = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        let addr = taken.local_addr().unwrap();

        let mut fds = ListenFd::empty();
        let err = bind_listener(&mut fds, addr).await.unwrap_err();
        assert!(matches!(err, crate::error::AppError::Io(_)));
    }
}
