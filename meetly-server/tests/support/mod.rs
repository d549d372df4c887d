#![allow(dead_code)]

use std::sync::Arc;

use anyhow::{Result, anyhow};
use axum_test::TestServer;
use chrono::Duration;
use meetly_core::{
    UserProfile,
    database::{InMemoryProfileRepository, ProfileRepository},
};
use meetly_server::{
    AppState, create_app,
    infra::config::{AuthConfig, Config, ConfigMetadata, CorsConfig, DatabaseConfig, ServerConfig},
};
use uuid::Uuid;

pub const TEST_TOKEN_KEY: &str = "test-token-key";

pub struct TestApp {
    pub server: TestServer,
    pub state: AppState,
}

impl TestApp {
    /// Signed bearer header value for `user_id`.
    pub fn bearer_for(&self, user_id: Uuid) -> String {
        let token = self
            .state
            .token_keys()
            .issue(user_id, Duration::minutes(15))
            .expect("token issues");
        bearer(&token)
    }
}

pub fn bearer(token: &str) -> String {
    format!("Bearer {}", token)
}

pub fn test_config() -> Config {
    Config {
        server: ServerConfig {
            host: "127.0.0.1".into(),
            port: 0,
        },
        database: DatabaseConfig {
            url: None,
            max_connections: 1,
        },
        cors: CorsConfig {
            allowed_origins: vec![],
        },
        auth: AuthConfig {
            token_key: TEST_TOKEN_KEY.into(),
        },
        dev_mode: true,
        metadata: ConfigMetadata::default(),
    }
}

pub fn build_test_app_with(repository: Arc<dyn ProfileRepository>) -> Result<TestApp> {
    let state = AppState::new(Arc::new(test_config()), repository);
    let server = TestServer::builder()
        .build(create_app(state.clone()))
        .map_err(|err| anyhow!(err.to_string()))?;
    Ok(TestApp { server, state })
}

pub fn build_test_app(
    profiles: impl IntoIterator<Item = UserProfile>,
) -> Result<(TestApp, InMemoryProfileRepository)> {
    let repository = InMemoryProfileRepository::with_profiles(profiles);
    let app = build_test_app_with(Arc::new(repository.clone()))?;
    Ok((app, repository))
}

pub fn sample_profile() -> UserProfile {
    let mut profile = UserProfile::new(Uuid::new_v4(), "xiaoming@example.com");
    profile.name = Some("王小明".into());
    profile.auth_providers = vec!["email".into()];
    profile
}
