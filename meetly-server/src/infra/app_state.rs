use std::{fmt, sync::Arc};

use meetly_core::{ProfileService, database::ProfileRepository};

use crate::{auth::TokenKeys, infra::config::Config};

#[derive(Clone)]
pub struct AppState {
    pub profiles: ProfileService,
    pub config: Arc<Config>,
    pub token_keys: Arc<TokenKeys>,
}

impl fmt::Debug for AppState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("AppState").finish_non_exhaustive()
    }
}

impl AppState {
    pub fn new(config: Arc<Config>, repository: Arc<dyn ProfileRepository>) -> Self {
        let token_keys = Arc::new(TokenKeys::new(&config.auth.token_key));
        Self {
            profiles: ProfileService::new(repository),
            config,
            token_keys,
        }
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    pub fn token_keys(&self) -> &TokenKeys {
        &self.token_keys
    }

    pub fn profiles(&self) -> &ProfileService {
        &self.profiles
    }
}
