//! HTTP response helpers.

use crate::core::Reply;
use crate::utils::mime::types::PLAIN;
use anyhow::{Result, anyhow};
use tiny_http::{Header, Request, Response, StatusCode};

/// Send a handler [`Reply`].
pub fn respond_reply(request: Request, reply: Reply) -> Result<()> {
    send_body(request, reply.status, reply.content_type, reply.body.into_bytes())
}

/// Respond with 503 Service Unavailable (server shutting down).
pub fn respond_unavailable(request: Request) -> Result<()> {
    send_body(request, 503, PLAIN, b"503 Service Unavailable".to_vec())
}

fn send_body(
    request: Request,
    status: u16,
    content_type: &'static str,
    body: Vec<u8>,
) -> Result<()> {
    let response = Response::from_data(body)
        .with_status_code(StatusCode(status))
        .with_header(make_header("Content-Type", content_type)?);
    request.respond(response)?;
    Ok(())
}

fn make_header(key: &'static str, value: &'static str) -> Result<Header> {
    Header::from_bytes(key, value).map_err(|_| anyhow!("invalid header {key}: {value}"))
}
