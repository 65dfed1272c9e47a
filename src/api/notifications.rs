use axum::{
    extract::{Query, State},
    response::{IntoResponse, Response},
};
use std::sync::Arc;

use super::common::ApiResponse;
use crate::core::notify::Notification;
use crate::state::AppState;

#[derive(serde::Deserialize)]
pub struct NotificationQueryParams {
    pub limit: Option<usize>,
    pub offset: Option<usize>,
}

#[derive(serde::Serialize)]
pub struct NotificationsResponse {
    pub notifications: Vec<Notification>,
    pub total: usize,
}

pub async fn get_notifications(
    State(state): State<Arc<AppState>>,
    Query(params): Query<NotificationQueryParams>,
) -> Response {
    let limit = params.limit.unwrap_or(50);
    let offset = params.offset.unwrap_or(0);
    let notifications = state.notifications.list(limit, offset);
    let total = state.notifications.len();

    ApiResponse::ok(NotificationsResponse {
        notifications,
        total,
    })
    .into_response()
}

pub async fn clear_notifications(State(state): State<Arc<AppState>>) -> Response {
    state.notifications.clear();
    ApiResponse::ok(()).into_response()
}
