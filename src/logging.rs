//! Middleware for logging requests and responses.

use axum::{
    body::Body,
    extract::Request,
    http::{request, response},
    middleware::Next,
    response::{IntoResponse, Response},
};

use crate::Error;

/// The number of bytes of a request or response body that are logged at the
/// `info` level.
pub const LOG_BODY_LENGTH_LIMIT: usize = 64;

/// Log the request and response for each request.
///
/// Both the request and response are logged at the `info` level.
/// If a body is longer than [LOG_BODY_LENGTH_LIMIT] bytes, it is truncated and
/// the full body is logged at the `debug` level.
pub async fn logging_middleware(request: Request, next: Next) -> Response {
    let (parts, body_text) = match extract_request_body_text(request).await {
        Ok(request) => request,
        Err(error) => return error.into_response(),
    };
    log_request(&parts, &body_text);

    let request = Request::from_parts(parts, Body::from(body_text));
    let response = next.run(request).await;

    let (parts, body_text) = match extract_response_body_text(response).await {
        Ok(response) => response,
        Err(error) => return error.into_response(),
    };
    log_response(&parts, &body_text);

    Response::from_parts(parts, Body::from(body_text))
}

async fn extract_request_body_text(request: Request) -> Result<(request::Parts, String), Error> {
    let (parts, body) = request.into_parts();
    let body_text = body_to_text(body).await?;

    Ok((parts, body_text))
}

async fn extract_response_body_text(
    response: Response,
) -> Result<(response::Parts, String), Error> {
    let (parts, body) = response.into_parts();
    let body_text = body_to_text(body).await?;

    Ok((parts, body_text))
}

async fn body_to_text(body: Body) -> Result<String, Error> {
    let bytes = axum::body::to_bytes(body, usize::MAX)
        .await
        .inspect_err(|error| tracing::error!("could not read body: {error}"))
        .map_err(|_| Error::BodyReadError)?;

    Ok(String::from_utf8_lossy(&bytes).to_string())
}

/// The longest prefix of `text` that is at most `limit` bytes long and ends on
/// a character boundary.
fn truncate(text: &str, limit: usize) -> &str {
    if text.len() <= limit {
        return text;
    }

    let mut end = limit;
    while !text.is_char_boundary(end) {
        end -= 1;
    }

    &text[..end]
}

fn log_request(parts: &request::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Received request: {} {}\nbody: {}...",
            parts.method,
            parts.uri,
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full request: {parts:#?}\nbody: {body:?}");
    } else {
        tracing::info!(
            "Received request: {} {}\nbody: {body:?}",
            parts.method,
            parts.uri
        );
    }
}

fn log_response(parts: &response::Parts, body: &str) {
    if body.len() > LOG_BODY_LENGTH_LIMIT {
        tracing::info!(
            "Sending response: {}\nbody: {}...",
            parts.status,
            truncate(body, LOG_BODY_LENGTH_LIMIT)
        );
        tracing::debug!("Full response: {parts:#?}\nbody: {body:?}");
    } else {
        tracing::info!("Sending response: {}\nbody: {body:?}", parts.status);
    }
}
