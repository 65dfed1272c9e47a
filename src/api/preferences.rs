use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::common::{into_response, ApiResponse};
use crate::core::models::Preferences;
use crate::core::storage::PreferencesStorage;
use crate::core::traits::EventEmitter;
use crate::state::AppState;

pub async fn load_preferences(State(state): State<Arc<AppState>>) -> Response {
    into_response(PreferencesStorage::load(&state.storage))
}

/// 整体替换偏好设置
/// 写入成功后表单工作副本立即重置：外部状态优先于未保存的编辑
pub async fn save_preferences(
    State(state): State<Arc<AppState>>,
    Json(preferences): Json<Preferences>,
) -> Response {
    if let Err(e) = PreferencesStorage::save(&state.storage, &preferences) {
        return ApiResponse::err(e).into_response();
    }

    state.form.write().await.sync_external(&preferences);
    state.emitter.emit("preferences-updated", &preferences);

    ApiResponse::ok(preferences).into_response()
}
