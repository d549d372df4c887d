use axum::Json;
use meetly_model::{ApiResponse, EventType, OptionEntry, Region};

pub async fn list_region_options() -> Json<ApiResponse<Vec<OptionEntry>>> {
    Json(ApiResponse::success(OptionEntry::list::<Region>()).with_message("获取地区选项成功"))
}

pub async fn list_event_type_options() -> Json<ApiResponse<Vec<OptionEntry>>> {
    Json(
        ApiResponse::success(OptionEntry::list::<EventType>())
            .with_message("获取活动类型选项成功"),
    )
}
