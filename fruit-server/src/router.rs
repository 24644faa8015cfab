//! Route table and the reload middleware that runs before every request.

use axum::extract::{Request, State};
use axum::middleware::{self, Next};
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Router;
use tower_http::trace::TraceLayer;
use tracing::debug;

use crate::handlers::{
    create_fruit, delete_fruit, get_fruit, list_fruits, route_not_found, update_fruit, ApiFailure,
};
use crate::state::AppState;

/// Builds the service router.
///
/// `/id/:id` also answers with a single trailing slash. Every request, matched or not,
/// first passes through [`reload_collection`].
pub fn app(state: AppState) -> Router {
    let by_id = get(get_fruit).put(update_fruit).delete(delete_fruit);

    Router::new()
        .route("/", get(list_fruits).post(create_fruit))
        .route("/id/:id", by_id.clone())
        .route("/id/:id/", by_id)
        .fallback(route_not_found)
        .layer(middleware::from_fn_with_state(
            state.clone(),
            reload_collection,
        ))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Enters the request critical section and replaces the shared collection with the
/// stored one, so the handler never sees state cached from an earlier request.
/// A load failure answers 500 without running the handler.
pub async fn reload_collection(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let _gate = state.enter_request().await;

    match state.store.load().await {
        Ok(fruits) => {
            debug!(count = fruits.len(), "Reloaded collection");
            *state.collection.lock().await = fruits;
        }
        Err(e) => return ApiFailure::from(e).into_response(),
    }

    next.run(request).await
}
