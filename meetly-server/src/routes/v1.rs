use axum::{Router, middleware, routing::get};
use meetly_model::api::routes::{
    relative_to_v1,
    v1::{profile_options, users},
};

use crate::{
    auth::auth_middleware,
    handlers::{options, profile},
    infra::app_state::AppState,
};

/// Create all v1 API routes
pub fn create_v1_router(state: AppState) -> Router<AppState> {
    Router::new()
        // Public picker data
        .route(
            relative_to_v1(profile_options::REGIONS),
            get(options::list_region_options),
        )
        .route(
            relative_to_v1(profile_options::EVENT_TYPES),
            get(options::list_event_type_options),
        )
        .merge(create_protected_routes(state))
}

/// Create protected routes that require authentication
fn create_protected_routes(state: AppState) -> Router<AppState> {
    Router::new()
        .route(
            relative_to_v1(users::CURRENT_PROFILE),
            get(profile::get_profile)
                .put(profile::update_profile)
                .patch(profile::update_profile),
        )
        .route_layer(middleware::from_fn_with_state(state, auth_middleware))
}
