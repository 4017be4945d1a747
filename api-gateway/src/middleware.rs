use axum::{
    extract::{ConnectInfo, Request},
    http::{Method, StatusCode},
    middleware::Next,
    response::Response,
};
use std::net::SocketAddr;
use std::time::{Duration, Instant};
use tracing::{error, info, warn};

/// Access log in the same column layout as gin's Logger:
/// `| status | latency | client ip | method "path"`.
pub async fn request_logging(req: Request, next: Next) -> Response {
    let start = Instant::now();
    let method = req.method().clone();
    let path = req.uri().path().to_string();
    let client = req
        .extensions()
        .get::<ConnectInfo<SocketAddr>>()
        .map(|ConnectInfo(addr)| addr.ip().to_canonical().to_string())
        .unwrap_or_else(|| "-".to_string());

    let response = next.run(req).await;
    let status = response.status();
    let line = access_line(status, start.elapsed(), &client, &method, &path);

    if status.is_success() {
        info!("{}", line);
    } else if status.is_client_error() {
        warn!("{}", line);
    } else {
        error!("{}", line);
    }

    response
}

fn access_line(
    status: StatusCode,
    latency: Duration,
    client: &str,
    method: &Method,
    path: &str,
) -> String {
    format!(
        "| {:>3} | {:>13} | {:>15} | {:<7} {:?}",
        status.as_u16(),
        format!("{:?}", latency),
        client,
        method.as_str(),
        path
    )
}
