use crate::http::handlers::{ops, payment_gateways};
use crate::http::middleware::identity::resolve_identity;
use crate::service::access_policy::ApiKeyDirectory;
use crate::AppState;
use axum::middleware::from_fn_with_state;
use axum::routing::get;
use axum::Router;
use std::sync::Arc;

pub fn build_router(state: AppState, directory: Arc<ApiKeyDirectory>, namespace: &str) -> Router {
    let gateway_routes = Router::new()
        .route(
            "/payment_gateways",
            get(payment_gateways::list_payment_gateways)
                .options(payment_gateways::payment_gateway_schema),
        )
        .route(
            "/payment_gateways/:gateway_id",
            get(payment_gateways::get_payment_gateway)
                .patch(payment_gateways::update_payment_gateway)
                .put(payment_gateways::update_payment_gateway)
                .options(payment_gateways::payment_gateway_schema),
        )
        .layer(from_fn_with_state(directory, resolve_identity));

    let ops_routes = Router::new()
        .route("/ops/readiness", get(ops::readiness))
        .route("/ops/liveness", get(ops::liveness));

    let namespace = namespace.trim_matches('/');
    let app = if namespace.is_empty() {
        ops_routes.merge(gateway_routes)
    } else {
        ops_routes.nest(&format!("/{}", namespace), gateway_routes)
    };

    app.with_state(state)
}
