//! HTTP Routes
//!
//! API Endpoints:
//! - /v1/ping                GET     健康检查
//! - /v1/customers           GET     列出所有客户
//! - /v1/customers           POST    创建客户
//! - /v1/customers/:id       GET     获取客户
//! - /v1/customers/:id       PUT     更新客户
//! - /v1/customers/:id       DELETE  删除客户
//! - /v1/products            GET     列出所有商品
//! - /v1/products            POST    创建商品
//! - /v1/products/:id        GET     获取商品
//! - /v1/products/:id        PUT     更新商品
//! - /v1/products/:id        DELETE  删除商品
//! - /v1/orders              POST    下单
//! - /v1/orders/:id          GET     获取订单详情

use axum::{
    routing::{get, post},
    Router,
};
use std::sync::Arc;

use super::handlers;
use super::state::AppState;

/// 创建所有路由
pub fn create_routes() -> Router<Arc<AppState>> {
    Router::new().nest("/v1", api_routes())
}

/// API 路由
fn api_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/ping", get(handlers::ping))
        .nest("/customers", customer_routes())
        .nest("/products", product_routes())
        .nest("/orders", order_routes())
}

/// Customer 路由
fn customer_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_customers).post(handlers::create_customer),
        )
        .route(
            "/:id",
            get(handlers::get_customer)
                .put(handlers::update_customer)
                .delete(handlers::delete_customer),
        )
}

/// Product 路由
fn product_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route(
            "/",
            get(handlers::list_products).post(handlers::create_product),
        )
        .route(
            "/:id",
            get(handlers::get_product)
                .put(handlers::update_product)
                .delete(handlers::delete_product),
        )
}

/// Order 路由
fn order_routes() -> Router<Arc<AppState>> {
    Router::new()
        .route("/", post(handlers::create_order))
        .route("/:id", get(handlers::get_order))
}
