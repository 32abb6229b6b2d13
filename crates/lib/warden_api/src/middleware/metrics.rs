//! Request-tracking middleware — feeds the metrics registry.

use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};

use crate::AppState;

/// Axum middleware: records every response status into the state's
/// metrics provider. Layered outermost so rejected requests count too.
pub async fn track_requests(
    State(state): State<AppState>,
    request: Request,
    next: Next,
) -> Response {
    let response = next.run(request).await;
    state.metrics.record_response(response.status().as_u16());
    response
}
