//! Product Command Handlers

use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{CreateProduct, DeleteProduct, UpdateProduct};
use crate::application::error::ApplicationError;
use crate::application::handler::RequestHandler;
use crate::application::ports::{ProductRecord, ProductRepositoryPort};
use crate::application::queries::handlers::ProductResponse;
use crate::domain::ProductListing;

const SLUG_IN_USE: &str = "Slug already in use";

fn to_record(id: Uuid, listing: ProductListing) -> ProductRecord {
    ProductRecord {
        id,
        title: listing.title().to_string(),
        description: listing.description().to_string(),
        slug: listing.slug().to_string(),
        price: listing.price().amount(),
    }
}

// ============================================================================
// CreateProduct
// ============================================================================

/// CreateProduct Handler
pub struct CreateProductHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl CreateProductHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }
}

#[async_trait]
impl RequestHandler<CreateProduct> for CreateProductHandler {
    type Response = ProductResponse;

    async fn handle(&self, command: CreateProduct) -> Result<ProductResponse, ApplicationError> {
        let listing =
            ProductListing::parse(command.title, command.description, command.slug, command.price)?;

        if self.product_repo.slug_in_use(listing.slug(), None).await? {
            return Err(ApplicationError::conflict(SLUG_IN_USE));
        }

        let product = to_record(Uuid::new_v4(), listing);
        self.product_repo.insert(&product).await?;

        tracing::info!(
            product_id = %product.id,
            slug = %product.slug,
            price = %product.price,
            "Product created"
        );

        Ok(ProductResponse::from(product))
    }
}

// ============================================================================
// UpdateProduct
// ============================================================================

/// UpdateProduct Handler
///
/// 调价只影响之后的订单，已有订单行的 total 不变。
pub struct UpdateProductHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl UpdateProductHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }
}

#[async_trait]
impl RequestHandler<UpdateProduct> for UpdateProductHandler {
    type Response = ProductResponse;

    async fn handle(&self, command: UpdateProduct) -> Result<ProductResponse, ApplicationError> {
        let product_id = command.product_id;
        let listing =
            ProductListing::parse(command.title, command.description, command.slug, command.price)?;

        self.product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Product"))?;

        if self
            .product_repo
            .slug_in_use(listing.slug(), Some(product_id))
            .await?
        {
            return Err(ApplicationError::conflict(SLUG_IN_USE));
        }

        let product = to_record(product_id, listing);
        self.product_repo.update(&product).await?;

        tracing::info!(product_id = %product_id, price = %product.price, "Product updated");

        Ok(ProductResponse::from(product))
    }
}

// ============================================================================
// DeleteProduct
// ============================================================================

/// DeleteProduct Handler
pub struct DeleteProductHandler {
    product_repo: Arc<dyn ProductRepositoryPort>,
}

impl DeleteProductHandler {
    pub fn new(product_repo: Arc<dyn ProductRepositoryPort>) -> Self {
        Self { product_repo }
    }
}

#[async_trait]
impl RequestHandler<DeleteProduct> for DeleteProductHandler {
    type Response = ();

    async fn handle(&self, command: DeleteProduct) -> Result<(), ApplicationError> {
        let product_id = command.product_id;

        let product = self
            .product_repo
            .find_by_id(product_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Product"))?;

        self.product_repo.delete(product_id).await?;

        tracing::info!(product_id = %product_id, slug = %product.slug, "Product deleted");

        Ok(())
    }
}
