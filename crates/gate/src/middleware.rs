//! Axum layer applying the gate to every request

use axum::{
    extract::Request,
    http::{
        header::{COOKIE, SET_COOKIE},
        HeaderValue,
    },
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use pcdentro_common::keys::{ROLE_COOKIE, TOKEN_COOKIE};

use crate::cookies::{cookie_value, expired_cookie};
use crate::decision::{evaluate, GateDecision};

/// Gate one request: read the token mirror from the `Cookie` header, decide,
/// and either forward the request or answer with a temporary redirect,
/// expiring both mirrors when the token turned out dead.
///
/// Wire with `axum::middleware::from_fn(route_gate)` over the page routes.
pub async fn route_gate(request: Request, next: Next) -> Response {
    let path = request.uri().path().to_owned();

    let cookie_header = request
        .headers()
        .get(COOKIE)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    let token = cookie_header
        .as_deref()
        .and_then(|header| cookie_value(header, TOKEN_COOKIE));

    match evaluate(&path, token) {
        GateDecision::Next => next.run(request).await,
        GateDecision::Redirect {
            location,
            clear_mirrors,
        } => {
            tracing::debug!(path = %path, redirect = location, clear_mirrors, "navigation gated");

            let mut response = Redirect::temporary(location).into_response();
            if clear_mirrors {
                for name in [TOKEN_COOKIE, ROLE_COOKIE] {
                    if let Ok(value) = HeaderValue::from_str(&expired_cookie(name)) {
                        response.headers_mut().append(SET_COOKIE, value);
                    }
                }
            }
            response
        }
    }
}
