//! REST handlers for the `/user` resource.

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use domain::validate::parse_user_id;
use domain::{CoreError, NewUser};
use tracing::{error, info, warn};

use crate::AppState;

fn internal_error(e: &CoreError) -> axum::response::Response {
    error!(err = ?e, "user store error");
    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(http_common::json_err("internal")),
    )
        .into_response()
}

pub async fn list_users(State(state): State<AppState>) -> impl IntoResponse {
    match state.users.list_all() {
        Ok(users) => {
            info!(count = users.len(), "list users");
            (StatusCode::OK, Json(users)).into_response()
        }
        Err(e) => internal_error(&e),
    }
}

pub async fn get_user(State(state): State<AppState>, Path(raw): Path<String>) -> impl IntoResponse {
    // Non-numeric ids answer 404 like any other miss.
    let id = match parse_user_id(&raw) {
        Ok(id) => id,
        Err(_) => {
            warn!(id = %raw, "non-numeric user id");
            return (
                StatusCode::NOT_FOUND,
                Json(http_common::user_not_found(&raw)),
            )
                .into_response();
        }
    };

    match state.users.get(id) {
        Ok(user) => {
            info!(id, "get user ok");
            (StatusCode::OK, Json(user)).into_response()
        }
        Err(CoreError::NotFound(_)) => {
            warn!(id, "get user 404");
            (
                StatusCode::NOT_FOUND,
                Json(http_common::user_not_found(&raw)),
            )
                .into_response()
        }
        Err(e) => internal_error(&e),
    }
}

pub async fn create_user(
    State(state): State<AppState>,
    body: Result<Json<NewUser>, JsonRejection>,
) -> impl IntoResponse {
    let Json(body) = match body {
        Ok(b) => b,
        Err(rejection) => {
            warn!(reason = %rejection.body_text(), "bad create user body");
            return (
                StatusCode::BAD_REQUEST,
                Json(http_common::json_error_with_message(
                    "bad_request",
                    &rejection.body_text(),
                )),
            )
                .into_response();
        }
    };

    match state.users.create(body) {
        Ok(user) => {
            info!(id = user.id, "user created");
            (StatusCode::CREATED, Json(user)).into_response()
        }
        Err(e) => internal_error(&e),
    }
}
