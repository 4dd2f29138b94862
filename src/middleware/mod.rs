//! Middleware for TaskForge.
//!
//! Provides the authentication gate for API routes. Session identity is
//! issued by an external provider; this layer only verifies the signed
//! token and injects the resulting `SessionUser` into the request.

use axum::{
    body::Body,
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use axum_extra::extract::CookieJar;
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use serde::Deserialize;

use crate::error::Error;
use crate::{AppState, Result};

/// Cookie carrying the session token for browser clients.
pub const SESSION_COOKIE_NAME: &str = "taskforge_session";

/// Authenticated user context injected into request extensions.
#[derive(Clone, Debug)]
pub struct SessionUser {
    pub user_id: String,
    pub email: Option<String>,
    pub name: Option<String>,
}

/// Claims carried by the externally-issued session token.
#[derive(Debug, Deserialize)]
struct Claims {
    sub: String,
    email: Option<String>,
    name: Option<String>,
    #[allow(dead_code)]
    exp: usize,
}

/// Middleware that requires a verified session on gated routes.
///
/// Looks for the token in the session cookie first (web UI), then in a
/// `Bearer` Authorization header (programmatic access). When no session
/// secret is configured the gate is open and requests pass through
/// unchanged (demo profile).
///
/// # Errors
///
/// Returns 401 Unauthorized when no token is presented, the signature
/// is invalid, or the token has expired.
pub async fn require_session(
    State(state): State<AppState>,
    jar: CookieJar,
    mut req: Request<Body>,
    next: Next,
) -> Result<Response> {
    let Some(secret) = state.auth.session_secret.as_deref() else {
        return Ok(next.run(req).await);
    };

    let token = token_from_request(&jar, &req).ok_or(Error::Unauthenticated)?;
    let user = verify_token(&token, secret)?;
    req.extensions_mut().insert(user);

    Ok(next.run(req).await)
}

fn token_from_request(jar: &CookieJar, req: &Request<Body>) -> Option<String> {
    if let Some(cookie) = jar.get(SESSION_COOKIE_NAME) {
        return Some(cookie.value().to_string());
    }

    req.headers()
        .get(axum::http::header::AUTHORIZATION)
        .and_then(|h| h.to_str().ok())
        .and_then(|h| h.strip_prefix("Bearer "))
        .map(String::from)
}

fn verify_token(token: &str, secret: &str) -> Result<SessionUser> {
    let data = decode::<Claims>(
        token,
        &DecodingKey::from_secret(secret.as_bytes()),
        &Validation::new(Algorithm::HS256),
    )
    .map_err(|e| match e.kind() {
        jsonwebtoken::errors::ErrorKind::ExpiredSignature => Error::TokenExpired,
        _ => Error::InvalidToken,
    })?;

    Ok(SessionUser {
        user_id: data.claims.sub,
        email: data.claims.email,
        name: data.claims.name,
    })
}
