use axum::Router;
use pageview_shared::PageviewError;
use socket2::{Domain, Protocol, Socket, Type};
use std::future::Future;
use std::io;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tracing::{info, warn};

const LISTEN_BACKLOG: i32 = 1024;

/// Binds all interfaces on `port`, IPv4 and IPv6 on a single dual-stack
/// socket. Falls back to IPv4 only when the host has no IPv6.
pub async fn bind(port: &str) -> Result<TcpListener, PageviewError> {
    let addr = format!("[::]:{}", port);
    let socket_addr: SocketAddr = addr.parse().map_err(|_| PageviewError::Bind {
        addr: addr.clone(),
        source: io::Error::new(io::ErrorKind::InvalidInput, format!("invalid port {:?}", port)),
    })?;

    let socket = match Socket::new(Domain::IPV6, Type::STREAM, Some(Protocol::TCP)) {
        Ok(socket) => socket,
        Err(e) => {
            warn!("IPv6 unavailable ({}), listening on IPv4 only", e);
            return bind_ipv4(port).await;
        }
    };

    match listen_dual_stack(socket, socket_addr) {
        Ok(listener) => Ok(listener),
        Err(e) if e.kind() == io::ErrorKind::AddrNotAvailable => {
            warn!("IPv6 unavailable ({}), listening on IPv4 only", e);
            bind_ipv4(port).await
        }
        Err(source) => Err(PageviewError::Bind { addr, source }),
    }
}

fn listen_dual_stack(socket: Socket, addr: SocketAddr) -> io::Result<TcpListener> {
    socket.set_only_v6(false)?;
    #[cfg(unix)]
    socket.set_reuse_address(true)?;
    socket.set_nonblocking(true)?;
    socket.bind(&addr.into())?;
    socket.listen(LISTEN_BACKLOG)?;
    TcpListener::from_std(socket.into())
}

async fn bind_ipv4(port: &str) -> Result<TcpListener, PageviewError> {
    let addr = format!("0.0.0.0:{}", port);
    TcpListener::bind(&addr)
        .await
        .map_err(|source| PageviewError::Bind { addr, source })
}

/// Serves `app` until `shutdown` resolves, then drains in-flight requests.
pub async fn serve<F>(listener: TcpListener, app: Router, shutdown: F) -> Result<(), PageviewError>
where
    F: Future<Output = ()> + Send + 'static,
{
    axum::serve(listener, app.into_make_service_with_connect_info::<SocketAddr>())
        .with_graceful_shutdown(shutdown)
        .await
        .map_err(PageviewError::Serve)
}

/// Resolves on Ctrl-C, or on SIGTERM where supported.
pub async fn shutdown_signal() {
    #[cfg(unix)]
    {
        use tokio::signal::unix::{signal, SignalKind};

        match signal(SignalKind::terminate()) {
            Ok(mut sigterm) => {
                tokio::select! {
                    _ = sigterm.recv() => {
                        info!("SIGTERM received, initiating graceful shutdown...");
                    }
                    _ = tokio::signal::ctrl_c() => {
                        info!("SIGINT received, initiating graceful shutdown...");
                    }
                }
                return;
            }
            Err(e) => warn!("Failed to register SIGTERM handler: {}", e),
        }
    }

    if let Err(e) = tokio::signal::ctrl_c().await {
        warn!("Failed to listen for Ctrl-C: {}", e);
        std::future::pending::<()>().await;
    }
    info!("Ctrl-C received, initiating graceful shutdown...");
}
