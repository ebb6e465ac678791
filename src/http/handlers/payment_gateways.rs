use crate::domain::identity::Identity;
use crate::domain::patch::UpdateGatewayRequest;
use crate::domain::view::{item_schema, Context};
use crate::error::ApiError;
use crate::AppState;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, Query, State};
use axum::response::IntoResponse;
use axum::{Extension, Json};
use serde::Deserialize;
use serde_json::Value;

#[derive(Debug, Default, Deserialize)]
pub struct ContextQuery {
    pub context: Option<String>,
}

pub async fn list_payment_gateways(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Query(query): Query<ContextQuery>,
) -> impl IntoResponse {
    let context = Context::parse(query.context.as_deref());
    match state.controller.list_gateways(&identity).await {
        Ok(views) => {
            let resp: Vec<Value> = views.iter().map(|v| v.render(context)).collect();
            (axum::http::StatusCode::OK, Json(resp)).into_response()
        }
        Err(e) => e.into_response(),
    }
}

pub async fn get_payment_gateway(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(gateway_id): Path<String>,
    Query(query): Query<ContextQuery>,
) -> impl IntoResponse {
    let context = Context::parse(query.context.as_deref());
    match state.controller.get_gateway(&gateway_id, &identity).await {
        Ok(view) => (axum::http::StatusCode::OK, Json(view.render(context))).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn update_payment_gateway(
    State(state): State<AppState>,
    Extension(identity): Extension<Identity>,
    Path(gateway_id): Path<String>,
    Query(query): Query<ContextQuery>,
    body: Result<Json<UpdateGatewayRequest>, JsonRejection>,
) -> impl IntoResponse {
    let context = Context::parse(query.context.as_deref());
    if let Err(e) = state.controller.authorize_edit(&identity) {
        return e.into_response();
    }
    let req = match body {
        Ok(Json(req)) => req,
        Err(rejection) => return ApiError::InvalidBody(rejection.body_text()).into_response(),
    };
    match state
        .controller
        .update_gateway(&gateway_id, &identity, req)
        .await
    {
        Ok(view) => (axum::http::StatusCode::OK, Json(view.render(context))).into_response(),
        Err(e) => e.into_response(),
    }
}

pub async fn payment_gateway_schema() -> impl IntoResponse {
    (axum::http::StatusCode::OK, Json(item_schema())).into_response()
}
