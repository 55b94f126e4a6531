//! Logging middleware

use std::time::Instant;

use axum::{
    body::Body,
    extract::Request,
    http::StatusCode,
    middleware::Next,
    response::Response,
};
use tracing::{error, info, warn};

#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    Success,
    /// 4xx other than 404; includes rejected complexity notations
    Rejected,
    ServerError,
}

fn classify(status: StatusCode) -> Outcome {
    if status.is_server_error() {
        Outcome::ServerError
    } else if status.is_client_error() && status != StatusCode::NOT_FOUND {
        Outcome::Rejected
    } else {
        Outcome::Success
    }
}

/// Request logging middleware
pub async fn logging_middleware(request: Request<Body>, next: Next) -> Response {
    let start = Instant::now();
    let method = request.method().clone();
    let path = request.uri().path().to_owned();

    let response = next.run(request).await;

    let status = response.status();
    let duration_ms = format!("{:.2}", start.elapsed().as_secs_f64() * 1000.0);

    match classify(status) {
        Outcome::ServerError => error!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request failed"
        ),
        Outcome::Rejected => warn!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request rejected"
        ),
        Outcome::Success => info!(
            method = %method,
            path = %path,
            status = status.as_u16(),
            duration_ms = %duration_ms,
            "Request completed"
        ),
    }

    response
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify() {
        assert_eq!(classify(StatusCode::CREATED), Outcome::Success);
        assert_eq!(classify(StatusCode::NOT_FOUND), Outcome::Success);
        assert_eq!(classify(StatusCode::BAD_REQUEST), Outcome::Rejected);
        assert_eq!(classify(StatusCode::SERVICE_UNAVAILABLE), Outcome::ServerError);
    }
}
