use crate::service::access_policy::ApiKeyDirectory;
use axum::body::Body;
use axum::extract::State;
use axum::http::Request;
use axum::middleware::Next;
use axum::response::Response;
use std::sync::Arc;

pub const API_KEY_HEADER: &str = "X-Api-Key";

/// Attaches the caller's `Identity` to the request. Unknown or missing keys
/// resolve to an anonymous identity; the controller decides what that may do.
pub async fn resolve_identity(
    State(directory): State<Arc<ApiKeyDirectory>>,
    mut request: Request<Body>,
    next: Next,
) -> Response {
    let provided = request
        .headers()
        .get(API_KEY_HEADER)
        .and_then(|h| h.to_str().ok());
    let identity = directory.resolve(provided);

    request.extensions_mut().insert(identity);
    next.run(request).await
}
