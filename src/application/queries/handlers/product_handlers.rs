//! Product Query Handlers

use async_trait::async_trait;
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::handler::RequestHandler;
use crate::application::ports::{ProductRecord, ProductRepositoryPort};
use crate::application::queries::{GetProduct, ListProducts};

// ============================================================================
// Response DTOs
// ============================================================================

/// 商品详情响应（创建、更新、查询共用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductResponse {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub slug: String,
    pub price: Decimal,
}

impl From<ProductRecord> for ProductResponse {
    fn from(record: ProductRecord) -> Self {
        Self {
            id: record.id,
            title: record.title,
            description: record.description,
            slug: record.slug,
            price: record.price,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetProduct Handler
pub struct GetProductHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl GetProductHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }
}

#[async_trait]
impl RequestHandler<GetProduct> for GetProductHandler {
    type Response = ProductResponse;

    async fn handle(&self, query: GetProduct) -> Result<ProductResponse, ApplicationError> {
        let product = self
            .product_repo
            .find_by_id(query.product_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Product"))?;

        Ok(ProductResponse::from(product))
    }
}

/// ListProducts Handler
pub struct ListProductsHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl ListProductsHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }
}

#[async_trait]
impl RequestHandler<ListProducts> for ListProductsHandler {
    type Response = Vec<ProductResponse>;

    async fn handle(&self, _query: ListProducts) -> Result<Vec<ProductResponse>, ApplicationError> {
        let products = self.product_repo.find_all().await?;
        Ok(products.into_iter().map(ProductResponse::from).collect())
    }
}
