use crate::auth::issuer::{OpaqueTokenIssuer, TokenIssuer};
use crate::config::AppConfig;
use std::sync::Arc;

#[derive(Clone)]
pub struct AppState {
    pub config: Arc<AppConfig>,
    pub issuer: Arc<dyn TokenIssuer>,
}

impl AppState {
    pub fn init() -> Self {
        let config = Arc::new(AppConfig::from_env());
        let issuer = Arc::new(OpaqueTokenIssuer) as Arc<dyn TokenIssuer>;
        Self::from_parts(config, issuer)
    }

    pub fn from_parts(config: Arc<AppConfig>, issuer: Arc<dyn TokenIssuer>) -> Self {
        Self { config, issuer }
    }

    #[cfg(test)]
    pub fn fake(issuer: Arc<dyn TokenIssuer>) -> Self {
        use crate::db::{load_db_config, EnvMap};

        let mut env = EnvMap::new();
        env.insert("DB_HOST".into(), "db.test".into());
        env.insert("DB_NAME".into(), "fixture".into());

        let config = Arc::new(AppConfig {
            host: "127.0.0.1".into(),
            port: "0".into(),
            db: load_db_config(&env),
        });
        Self::from_parts(config, issuer)
    }
}
