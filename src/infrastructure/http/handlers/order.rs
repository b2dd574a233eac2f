//! Order HTTP Handlers

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::location;
use crate::application::{CreateOrder, GetOrder, RequestHandler};
use crate::infrastructure::http::dto::{CreateOrderRequest, OrderDto};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiJson, ApiPath};
use crate::infrastructure::http::state::AppState;

/// 获取订单详情
pub async fn get_order(
    State(state): State<Arc<AppState>>,
    ApiPath(order_id): ApiPath<Uuid>,
) -> Result<Json<OrderDto>, ApiError> {
    let order = state.get_order_handler.handle(GetOrder { order_id }).await?;

    Ok(Json(order.into()))
}

/// 下单
pub async fn create_order(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CreateOrderRequest>,
) -> Result<(StatusCode, HeaderMap, Json<OrderDto>), ApiError> {
    let order = state.create_order_handler.handle(CreateOrder::from(req)).await?;

    Ok((
        StatusCode::CREATED,
        location("orders", order.id),
        Json(order.into()),
    ))
}
