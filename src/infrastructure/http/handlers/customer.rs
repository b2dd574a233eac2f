//! Customer HTTP Handlers

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::location;
use crate::application::{DeleteCustomer, GetCustomer, ListCustomers, RequestHandler};
use crate::infrastructure::http::dto::{CustomerDto, CustomerRequest, ListCustomersResponse};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiJson, ApiPath};
use crate::infrastructure::http::state::AppState;

/// 列出所有客户
pub async fn list_customers(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListCustomersResponse>, ApiError> {
    let customers = state.list_customers_handler.handle(ListCustomers).await?;

    Ok(Json(ListCustomersResponse {
        customers: customers.into_iter().map(CustomerDto::from).collect(),
    }))
}

/// 获取客户详情
pub async fn get_customer(
    State(state): State<Arc<AppState>>,
    ApiPath(customer_id): ApiPath<Uuid>,
) -> Result<Json<CustomerDto>, ApiError> {
    let customer = state
        .get_customer_handler
        .handle(GetCustomer { customer_id })
        .await?;

    Ok(Json(customer.into()))
}

/// 创建客户
pub async fn create_customer(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<CustomerRequest>,
) -> Result<(StatusCode, HeaderMap, Json<CustomerDto>), ApiError> {
    let customer = state
        .create_customer_handler
        .handle(req.into_create())
        .await?;

    Ok((
        StatusCode::CREATED,
        location("customers", customer.id),
        Json(customer.into()),
    ))
}

/// 更新客户
pub async fn update_customer(
    State(state): State<Arc<AppState>>,
    ApiPath(customer_id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<CustomerRequest>,
) -> Result<Json<CustomerDto>, ApiError> {
    let customer = state
        .update_customer_handler
        .handle(req.into_update(customer_id))
        .await?;

    Ok(Json(customer.into()))
}

/// 删除客户
pub async fn delete_customer(
    State(state): State<Arc<AppState>>,
    ApiPath(customer_id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_customer_handler
        .handle(DeleteCustomer { customer_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
