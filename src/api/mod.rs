//! Web API 路由定义

use crate::state::AppState;
use axum::{
    routing::{get, post, put},
    Router,
};
use std::sync::Arc;

pub mod common;
mod form;
mod notifications;
mod preferences;

/// 构建 API 路由
pub fn build_routes(state: Arc<AppState>) -> Router {
    Router::new()
        // 偏好设置
        .route(
            "/api/preferences",
            get(preferences::load_preferences).put(preferences::save_preferences),
        )
        // 代理设置表单
        .route("/api/proxy/form", get(form::get_form))
        .route("/api/proxy/form/field", put(form::update_field))
        .route("/api/proxy/form/submit", post(form::submit_form))
        .route("/api/proxy/form/reset", post(form::reset_form))
        // 通知
        .route("/api/notifications", get(notifications::get_notifications))
        .route(
            "/api/notifications/clear",
            post(notifications::clear_notifications),
        )
        // Health
        .route("/healthz", get(|| async { "ok" }))
        .with_state(state)
}
