use axum::{
    Extension, Json,
    extract::State,
    http::{StatusCode, header},
    response::{IntoResponse, Response},
};
use mealboard_shopping::{DOWNLOAD_FILENAME, DOWNLOAD_MIME, ShoppingList, ShoppingListAggregator};

use crate::{routes::AppState, session::SessionId};

async fn compute(state: &AppState, session: &SessionId) -> ShoppingList {
    state
        .sessions
        .read(session, ShoppingListAggregator::compute)
        .await
}

pub async fn list(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Json<ShoppingList> {
    Json(compute(&state, &session).await)
}

/// GET /shopping-list/download - Plain-text attachment, or 204 when there is
/// nothing to download.
#[tracing::instrument(skip_all, fields(session = %session.0))]
pub async fn download(
    State(state): State<AppState>,
    Extension(session): Extension<SessionId>,
) -> Response {
    let list = compute(&state, &session).await;

    if list.is_empty() {
        return StatusCode::NO_CONTENT.into_response();
    }

    tracing::info!(items = list.len(), "Shopping list downloaded");

    (
        [
            (header::CONTENT_TYPE, DOWNLOAD_MIME.to_string()),
            (
                header::CONTENT_DISPOSITION,
                format!("attachment; filename=\"{DOWNLOAD_FILENAME}\""),
            ),
        ],
        list.to_downloadable_text(),
    )
        .into_response()
}
