//! Bearer-token authentication
//!
//! The accounts module issues HS256 tokens through [`JwtCodec`]; the server
//! wraps protected routes in [`require_auth`], which verifies the token and
//! makes the caller's [`AuthContext`] available as a request extension.

use crate::problem::Problem;
use axum::{
    extract::{Request, State},
    http::header,
    middleware::Next,
    response::Response,
};
use chrono::{Duration, Utc};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use serde::{Deserialize, Serialize};
use std::str::FromStr;
use std::sync::Arc;
use uuid::Uuid;

/// Errors from token issuing and verification
#[derive(Debug, thiserror::Error)]
pub enum AuthError {
    #[error("token is missing")]
    MissingToken,

    #[error("token is invalid or expired")]
    InvalidToken,

    #[error("token could not be issued: {0}")]
    Issue(String),
}

/// Access role carried by every authenticated caller
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Admin,
    Technician,
    Viewer,
}

impl Role {
    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Admin => "admin",
            Role::Technician => "technician",
            Role::Viewer => "viewer",
        }
    }
}

impl std::fmt::Display for Role {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "admin" => Ok(Role::Admin),
            "technician" => Ok(Role::Technician),
            "viewer" => Ok(Role::Viewer),
            other => Err(format!("unknown role '{other}'")),
        }
    }
}

/// Identity of the authenticated caller, decoded from the bearer token
#[derive(Debug, Clone)]
pub struct AuthContext {
    pub user_id: Uuid,
    pub name: String,
    pub role: Role,
}

impl AuthContext {
    pub fn is_admin(&self) -> bool {
        self.role == Role::Admin
    }
}

impl<S> axum::extract::FromRequestParts<S> for AuthContext
where
    S: Send + Sync,
{
    type Rejection = Problem;

    async fn from_request_parts(
        parts: &mut axum::http::request::Parts,
        _state: &S,
    ) -> Result<Self, Self::Rejection> {
        parts
            .extensions
            .get::<AuthContext>()
            .cloned()
            .ok_or_else(|| Problem::unauthorized("Missing bearer token"))
    }
}

/// Refuse non-admin callers with a 403 problem
pub fn require_admin(ctx: &AuthContext) -> Result<(), Problem> {
    if ctx.is_admin() {
        Ok(())
    } else {
        Err(Problem::forbidden("This action requires the admin role"))
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Claims {
    sub: String,
    name: String,
    role: String,
    iat: i64,
    exp: i64,
}

/// HS256 token codec shared between the accounts module and the auth middleware
pub struct JwtCodec {
    encoding: EncodingKey,
    decoding: DecodingKey,
    ttl: Duration,
}

impl JwtCodec {
    pub fn new(secret: &str, ttl: Duration) -> Self {
        Self {
            encoding: EncodingKey::from_secret(secret.as_bytes()),
            decoding: DecodingKey::from_secret(secret.as_bytes()),
            ttl,
        }
    }

    /// Issue a token for the given identity, expiring after the configured ttl
    pub fn issue(&self, ctx: &AuthContext) -> Result<String, AuthError> {
        self.issue_at(ctx, Utc::now())
    }

    fn issue_at(&self, ctx: &AuthContext, issued_at: chrono::DateTime<Utc>) -> Result<String, AuthError> {
        let claims = Claims {
            sub: ctx.user_id.to_string(),
            name: ctx.name.clone(),
            role: ctx.role.as_str().to_string(),
            iat: issued_at.timestamp(),
            exp: (issued_at + self.ttl).timestamp(),
        };
        encode(&Header::default(), &claims, &self.encoding).map_err(|e| AuthError::Issue(e.to_string()))
    }

    /// Verify a token and recover the caller identity
    pub fn verify(&self, token: &str) -> Result<AuthContext, AuthError> {
        let data = decode::<Claims>(token, &self.decoding, &Validation::default())
            .map_err(|_| AuthError::InvalidToken)?;
        let user_id = Uuid::parse_str(&data.claims.sub).map_err(|_| AuthError::InvalidToken)?;
        let role = Role::from_str(&data.claims.role).map_err(|_| AuthError::InvalidToken)?;
        Ok(AuthContext {
            user_id,
            name: data.claims.name,
            role,
        })
    }
}

fn bearer_token(headers: &axum::http::HeaderMap) -> Option<&str> {
    headers
        .get(header::AUTHORIZATION)?
        .to_str()
        .ok()?
        .strip_prefix("Bearer ")
}

/// Middleware guarding the protected API surface
///
/// On success the request gains an [`AuthContext`] extension; failures are
/// answered with a 401 problem envelope.
pub async fn require_auth(
    State(codec): State<Arc<JwtCodec>>,
    mut req: Request,
    next: Next,
) -> Result<Response, Problem> {
    let token = bearer_token(req.headers())
        .ok_or_else(|| Problem::unauthorized("Missing bearer token"))?;
    let ctx = codec
        .verify(token)
        .map_err(|_| Problem::unauthorized("Invalid or expired token"))?;
    req.extensions_mut().insert(ctx);
    Ok(next.run(req).await)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn codec() -> JwtCodec {
        JwtCodec::new("test-secret", Duration::hours(1))
    }

    fn context() -> AuthContext {
        AuthContext {
            user_id: Uuid::new_v4(),
            name: "Dana Ivers".to_string(),
            role: Role::Technician,
        }
    }

    #[test]
    fn issue_and_verify_round_trip() {
        let codec = codec();
        let ctx = context();
        let token = codec.issue(&ctx).unwrap();
        let decoded = codec.verify(&token).unwrap();
        assert_eq!(decoded.user_id, ctx.user_id);
        assert_eq!(decoded.name, ctx.name);
        assert_eq!(decoded.role, Role::Technician);
    }

    #[test]
    fn wrong_secret_is_rejected() {
        let token = codec().issue(&context()).unwrap();
        let other = JwtCodec::new("another-secret", Duration::hours(1));
        assert!(matches!(other.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn expired_token_is_rejected() {
        let codec = codec();
        // Issue far enough in the past to clear the default leeway.
        let token = codec
            .issue_at(&context(), Utc::now() - Duration::hours(3))
            .unwrap();
        assert!(matches!(codec.verify(&token), Err(AuthError::InvalidToken)));
    }

    #[test]
    fn role_parsing() {
        assert_eq!(Role::from_str("admin").unwrap(), Role::Admin);
        assert_eq!(Role::from_str("viewer").unwrap(), Role::Viewer);
        assert!(Role::from_str("root").is_err());
        assert_eq!(Role::Technician.to_string(), "technician");
    }

    #[test]
    fn admin_gate() {
        let mut ctx = context();
        assert!(require_admin(&ctx).is_err());
        ctx.role = Role::Admin;
        assert!(require_admin(&ctx).is_ok());
    }
}
