use axum::{Json, extract::State};
use meetly_model::{ApiResponse, ProfileUpdateRequest, ProfileView};
use serde::Serialize;
use tracing::debug;

use crate::{
    auth::AuthenticatedUser,
    infra::{
        app_state::AppState,
        errors::{AppResult, ValidatedJson},
    },
};

/// `data` payload of both profile endpoints.
#[derive(Debug, Serialize)]
pub struct ProfileEnvelope {
    pub user: ProfileView,
}

/// Current user's profile, gender rendered as its localized label.
pub async fn get_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
) -> AppResult<Json<ApiResponse<ProfileEnvelope>>> {
    let profile = state.profiles().get_profile(user.id).await?;

    Ok(Json(
        ApiResponse::success(ProfileEnvelope {
            user: profile.to_view(),
        })
        .with_message("获取用户资料成功"),
    ))
}

/// Partial update of the current user's profile.
pub async fn update_profile(
    State(state): State<AppState>,
    user: AuthenticatedUser,
    ValidatedJson(request): ValidatedJson<ProfileUpdateRequest>,
) -> AppResult<Json<ApiResponse<ProfileEnvelope>>> {
    if request.is_empty() {
        debug!(user_id = %user.id, "empty profile update");
    }

    let profile = state.profiles().update_profile(user.id, request).await?;

    Ok(Json(
        ApiResponse::success(ProfileEnvelope {
            user: profile.to_view(),
        })
        .with_message("用户资料更新成功"),
    ))
}
