use rand::{distributions::Alphanumeric, Rng};
use serde::Serialize;
use time::{Duration, OffsetDateTime};
use tracing::debug;
use uuid::Uuid;

/// Payload handed to the token issuer.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct TokenPayload {
    pub username: String,
}

/// Source of access and refresh tokens.
///
/// Tokens are opaque to callers; only their presence matters.
pub trait TokenIssuer: Send + Sync {
    fn generate_jwt(&self, payload: &TokenPayload, ttl: Duration) -> anyhow::Result<String>;
    fn generate_refresh_token(&self, payload: &TokenPayload, ttl: Duration)
        -> anyhow::Result<String>;
}

/// Issues random, unsigned tokens. Nothing can verify them later.
#[derive(Debug, Clone, Default)]
pub struct OpaqueTokenIssuer;

const REFRESH_TOKEN_LEN: usize = 64;

impl OpaqueTokenIssuer {
    fn expiry(ttl: Duration) -> OffsetDateTime {
        OffsetDateTime::now_utc() + ttl
    }
}

impl TokenIssuer for OpaqueTokenIssuer {
    fn generate_jwt(&self, payload: &TokenPayload, ttl: Duration) -> anyhow::Result<String> {
        let token = format!("atk_{}", Uuid::new_v4().simple());
        debug!(username = %payload.username, expires_at = %Self::expiry(ttl), "access token issued");
        Ok(token)
    }

    fn generate_refresh_token(
        &self,
        payload: &TokenPayload,
        ttl: Duration,
    ) -> anyhow::Result<String> {
        let suffix: String = rand::thread_rng()
            .sample_iter(&Alphanumeric)
            .take(REFRESH_TOKEN_LEN)
            .map(char::from)
            .collect();
        debug!(username = %payload.username, expires_at = %Self::expiry(ttl), "refresh token issued");
        Ok(format!("rtk_{suffix}"))
    }
}
