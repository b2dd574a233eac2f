//! Product HTTP Handlers

use axum::{
    extract::State,
    http::{HeaderMap, StatusCode},
    Json,
};
use std::sync::Arc;
use uuid::Uuid;

use super::location;
use crate::application::{DeleteProduct, GetProduct, ListProducts, RequestHandler};
use crate::infrastructure::http::dto::{ListProductsResponse, ProductDto, ProductRequest};
use crate::infrastructure::http::error::ApiError;
use crate::infrastructure::http::extract::{ApiJson, ApiPath};
use crate::infrastructure::http::state::AppState;

/// 列出所有商品
pub async fn list_products(
    State(state): State<Arc<AppState>>,
) -> Result<Json<ListProductsResponse>, ApiError> {
    let products = state.list_products_handler.handle(ListProducts).await?;

    Ok(Json(ListProductsResponse {
        products: products.into_iter().map(ProductDto::from).collect(),
    }))
}

/// 获取商品详情
pub async fn get_product(
    State(state): State<Arc<AppState>>,
    ApiPath(product_id): ApiPath<Uuid>,
) -> Result<Json<ProductDto>, ApiError> {
    let product = state
        .get_product_handler
        .handle(GetProduct { product_id })
        .await?;

    Ok(Json(product.into()))
}

/// 创建商品
pub async fn create_product(
    State(state): State<Arc<AppState>>,
    ApiJson(req): ApiJson<ProductRequest>,
) -> Result<(StatusCode, HeaderMap, Json<ProductDto>), ApiError> {
    let product = state.create_product_handler.handle(req.into_create()).await?;

    Ok((
        StatusCode::CREATED,
        location("products", product.id),
        Json(product.into()),
    ))
}

/// 更新商品
pub async fn update_product(
    State(state): State<Arc<AppState>>,
    ApiPath(product_id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<ProductRequest>,
) -> Result<Json<ProductDto>, ApiError> {
    let product = state
        .update_product_handler
        .handle(req.into_update(product_id))
        .await?;

    Ok(Json(product.into()))
}

/// 删除商品
pub async fn delete_product(
    State(state): State<Arc<AppState>>,
    ApiPath(product_id): ApiPath<Uuid>,
) -> Result<StatusCode, ApiError> {
    state
        .delete_product_handler
        .handle(DeleteProduct { product_id })
        .await?;

    Ok(StatusCode::NO_CONTENT)
}
