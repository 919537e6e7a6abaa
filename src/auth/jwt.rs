use std::time::Duration;

use async_trait::async_trait;
use axum::{
    extract::{FromRef, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, encode, DecodingKey, EncodingKey, Header, Validation};
use time::{Duration as TimeDuration, OffsetDateTime};
use tracing::{debug, warn};
use uuid::Uuid;

use super::claims::Claims;
use crate::{config::JwtConfig, error::ApiError, state::AppState};

/// Signing and verification material for session tokens.
#[derive(Clone)]
pub struct JwtKeys {
    pub encoding: EncodingKey,
    pub decoding: DecodingKey,
    pub issuer: String,
    pub audience: String,
    pub ttl: Duration,
}

impl JwtKeys {
    pub fn from_config(cfg: &JwtConfig) -> Self {
        Self {
            encoding: EncodingKey::from_secret(cfg.secret.as_bytes()),
            decoding: DecodingKey::from_secret(cfg.secret.as_bytes()),
            issuer: cfg.issuer.clone(),
            audience: cfg.audience.clone(),
            ttl: Duration::from_secs(cfg.ttl_minutes as u64 * 60),
        }
    }

    pub fn sign(&self, user_id: Uuid, email: &str) -> anyhow::Result<String> {
        let now = OffsetDateTime::now_utc();
        let exp = now + TimeDuration::seconds(self.ttl.as_secs() as i64);
        let claims = Claims {
            sub: user_id,
            email: email.to_owned(),
            iat: now.unix_timestamp() as usize,
            exp: exp.unix_timestamp() as usize,
            iss: self.issuer.clone(),
            aud: self.audience.clone(),
        };
        let token = encode(&Header::default(), &claims, &self.encoding)?;
        debug!(user_id = %user_id, "jwt signed");
        Ok(token)
    }

    pub fn verify(&self, token: &str) -> anyhow::Result<Claims> {
        let mut validation = Validation::default();
        // expiry is exact; no clock tolerance
        validation.leeway = 0;
        validation.set_audience(std::slice::from_ref(&self.audience));
        validation.set_issuer(std::slice::from_ref(&self.issuer));
        let data = decode::<Claims>(token, &self.decoding, &validation)?;
        debug!(user_id = %data.claims.sub, "jwt verified");
        Ok(data.claims)
    }
}

impl FromRef<AppState> for JwtKeys {
    fn from_ref(state: &AppState) -> Self {
        state.keys.clone()
    }
}

/// Identity of the caller, taken from a verified bearer token.
///
/// Missing or malformed `Authorization` headers reject with 401; a token that fails
/// verification (signature, expiry, issuer, audience) rejects with 403.
#[derive(Debug, Clone)]
pub struct AuthUser {
    pub id: Uuid,
    pub email: String,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthUser
where
    S: Send + Sync,
    JwtKeys: FromRef<S>,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let token = bearer_token(parts).ok_or_else(|| {
            debug!("missing bearer token");
            ApiError::MissingToken
        })?;

        let keys = JwtKeys::from_ref(state);
        let claims = keys.verify(token).map_err(|e| {
            warn!(error = %e, "invalid or expired token");
            ApiError::InvalidToken
        })?;

        Ok(AuthUser {
            id: claims.sub,
            email: claims.email,
        })
    }
}

fn bearer_token(parts: &Parts) -> Option<&str> {
    let header = parts.headers.get(AUTHORIZATION)?.to_str().ok()?;
    let token = header
        .strip_prefix("Bearer ")
        .or_else(|| header.strip_prefix("bearer "))?
        .trim();
    (!token.is_empty()).then_some(token)
}
