use axum::{
    extract::{Json, State},
    response::{IntoResponse, Response},
};
use std::sync::atomic::Ordering;
use std::sync::Arc;

use super::common::ApiResponse;
use crate::core::traits::PreferencesStore;
use crate::form::view::{self, FormView};
use crate::form::{FieldPatch, SubmitOutcome};
use crate::state::AppState;

#[derive(serde::Serialize)]
pub struct SubmitResponse {
    pub outcome: SubmitOutcome,
    pub form: FormView,
}

/// 当前表单视图
pub async fn get_form(State(state): State<Arc<AppState>>) -> Response {
    let form = state.form.read().await;
    let submitting = state.submitting.load(Ordering::SeqCst);
    ApiResponse::ok(view::render(&form, submitting)).into_response()
}

/// 应用单字段更新，返回更新后的视图
pub async fn update_field(
    State(state): State<Arc<AppState>>,
    Json(patch): Json<FieldPatch>,
) -> Response {
    let mut form = state.form.write().await;
    form.apply(patch);

    let submitting = state.submitting.load(Ordering::SeqCst);
    ApiResponse::ok(view::render(&form, submitting)).into_response()
}

/// 提交表单
pub async fn submit_form(State(state): State<Arc<AppState>>) -> Response {
    // 拦截重复的在途提交
    if state.submitting.swap(true, Ordering::SeqCst) {
        return ApiResponse::err("已有保存任务进行中").into_response();
    }

    let mut form = state.form.write().await;
    let outcome = form
        .submit(&state.storage, &state.emitter, &state.notifications)
        .await;
    state.submitting.store(false, Ordering::SeqCst);

    let view = view::render(&form, false);
    ApiResponse::ok(SubmitResponse { outcome, form: view }).into_response()
}

/// 丢弃编辑，从存储重新同步表单
pub async fn reset_form(State(state): State<Arc<AppState>>) -> Response {
    let preferences = match state.storage.get_preferences().await {
        Ok(preferences) => preferences,
        Err(e) => return ApiResponse::err(e).into_response(),
    };

    let mut form = state.form.write().await;
    form.sync_external(&preferences);

    ApiResponse::ok(view::render(&form, false)).into_response()
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::to_bytes;

    fn temp_state() -> (Arc<AppState>, std::path::PathBuf) {
        let dir = std::env::temp_dir().join(format!("proxy-settings-test-{}", uuid::Uuid::new_v4()));
        let state = Arc::new(AppState::with_data_dir(dir.clone()).unwrap());
        (state, dir)
    }

    async fn body_json(response: Response) -> serde_json::Value {
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        serde_json::from_slice(&body).unwrap()
    }

    #[tokio::test]
    async fn test_submit_rejected_while_in_flight() {
        let (state, _dir) = temp_state();
        state.submitting.store(true, Ordering::SeqCst);

        let response = submit_form(State(state.clone())).await;
        let json = body_json(response).await;
        assert_eq!(json["success"], false);

        // 标记仍由先到的提交持有
        assert!(state.submitting.load(Ordering::SeqCst));
    }

    #[tokio::test]
    async fn test_submit_form_persists_and_clears_flag() {
        let (state, dir) = temp_state();
        state
            .form
            .write()
            .await
            .apply(FieldPatch::Hostname("proxy.local".to_string()));

        let response = submit_form(State(state.clone())).await;
        let json = body_json(response).await;
        assert_eq!(json["success"], true);
        assert_eq!(json["data"]["outcome"], "saved");
        assert!(!state.submitting.load(Ordering::SeqCst));

        let saved = std::fs::read_to_string(dir.join("preferences.json")).unwrap();
        assert!(saved.contains("proxy.local"));
    }

    #[tokio::test]
    async fn test_reset_discards_edits() {
        let (state, _dir) = temp_state();
        state
            .form
            .write()
            .await
            .apply(FieldPatch::Hostname("draft.example.com".to_string()));

        let response = reset_form(State(state.clone())).await;
        let json = body_json(response).await;
        let hostname = json["data"]["fields"]
            .as_array()
            .unwrap()
            .iter()
            .find(|f| f["key"] == "hostname")
            .unwrap()
            .clone();
        assert_eq!(hostname["value"], "");

        assert_eq!(state.form.read().await.draft().hostname, "");
    }
}
