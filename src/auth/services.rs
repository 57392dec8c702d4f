use time::Duration;
use tracing::debug;

use crate::auth::{
    dto::AuthResult,
    issuer::{TokenIssuer, TokenPayload},
};

pub const ACCESS_TOKEN_TTL: Duration = Duration::hours(24);
pub const REFRESH_TOKEN_TTL: Duration = Duration::days(7);

/// Value of `expires_in`, kept literal rather than derived from the TTL.
pub const EXPIRES_IN_SECS: i64 = 86_400;

/// Issues a token pair for `username`. There is no credential check: every
/// call succeeds unless the issuer itself fails.
pub fn authenticate_user(
    issuer: &dyn TokenIssuer,
    username: &str,
    _password: &str,
) -> anyhow::Result<AuthResult> {
    let payload = TokenPayload {
        username: username.to_owned(),
    };
    let token = issuer.generate_jwt(&payload, ACCESS_TOKEN_TTL)?;
    let refresh_token = issuer.generate_refresh_token(&payload, REFRESH_TOKEN_TTL)?;
    debug!(username = %username, "user authenticated");

    Ok(AuthResult {
        success: true,
        token,
        refresh_token,
        expires_in: EXPIRES_IN_SECS,
    })
}

#[cfg(test)]
pub(crate) mod fakes {
    use std::sync::Mutex;

    use super::*;

    /// Deterministic issuer that records the TTLs it was asked for.
    #[derive(Default)]
    pub struct FixedIssuer {
        pub calls: Mutex<Vec<(&'static str, String, Duration)>>,
    }

    impl TokenIssuer for FixedIssuer {
        fn generate_jwt(&self, payload: &TokenPayload, ttl: Duration) -> anyhow::Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push(("jwt", payload.username.clone(), ttl));
            Ok(format!("jwt-{}", payload.username))
        }

        fn generate_refresh_token(
            &self,
            payload: &TokenPayload,
            ttl: Duration,
        ) -> anyhow::Result<String> {
            self.calls
                .lock()
                .unwrap()
                .push(("refresh", payload.username.clone(), ttl));
            Ok(format!("refresh-{}", payload.username))
        }
    }

    /// Issuer whose refresh step always fails.
    pub struct BrokenIssuer;

    impl TokenIssuer for BrokenIssuer {
        fn generate_jwt(&self, _payload: &TokenPayload, _ttl: Duration) -> anyhow::Result<String> {
            Ok("jwt".into())
        }

        fn generate_refresh_token(
            &self,
            _payload: &TokenPayload,
            _ttl: Duration,
        ) -> anyhow::Result<String> {
            anyhow::bail!("refresh signer unavailable")
        }
    }
}
