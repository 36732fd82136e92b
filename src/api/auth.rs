use axum::{
    extract::{Request, State},
    middleware::Next,
    response::Response,
};
use std::sync::Arc;

use super::handlers::AppState;

/// Identity of the caller as established by the upstream auth gateway.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthUser {
    pub user_id: String,
}

/// Copies the gateway-supplied user id header into request extensions.
///
/// The header is trusted as-is; token validation happens before requests
/// reach this service.
pub async fn attach_identity(
    State(state): State<Arc<AppState>>,
    mut request: Request,
    next: Next,
) -> Response {
    let user_id = request
        .headers()
        .get(state.config.auth.user_header.as_str())
        .and_then(|h| h.to_str().ok())
        .map(str::trim)
        .filter(|id| !id.is_empty())
        .map(str::to_string);

    if let Some(user_id) = user_id {
        request.extensions_mut().insert(AuthUser { user_id });
    }

    next.run(request).await
}
