//! Application State
//!
//! 包含所有 Command/Query Handlers 的应用状态

use std::sync::Arc;

use crate::application::{
    // Command handlers
    CreateCustomerHandler, CreateOrderHandler, CreateProductHandler, DeleteCustomerHandler,
    DeleteProductHandler, UpdateCustomerHandler, UpdateProductHandler,
    // Query handlers
    GetCustomerHandler, GetOrderHandler, GetProductHandler, ListCustomersHandler,
    ListProductsHandler,
    // Ports
    CustomerRepositoryPort, OrderRepositoryPort, ProductRepositoryPort,
};

/// 应用状态
pub struct AppState {
    // ========== Customer ==========
    pub list_customers_handler: ListCustomersHandler,
    pub get_customer_handler: GetCustomerHandler,
    pub create_customer_handler: CreateCustomerHandler,
    pub update_customer_handler: UpdateCustomerHandler,
    pub delete_customer_handler: DeleteCustomerHandler,

    // ========== Product ==========
    pub list_products_handler: ListProductsHandler,
    pub get_product_handler: GetProductHandler,
    pub create_product_handler: CreateProductHandler,
    pub update_product_handler: UpdateProductHandler,
    pub delete_product_handler: DeleteProductHandler,

    // ========== Order ==========
    pub get_order_handler: GetOrderHandler,
    pub create_order_handler: CreateOrderHandler,
}

impl AppState {
    /// 创建应用状态
    pub fn new(
        customer_repo: Arc<dyn CustomerRepositoryPort>,
        product_repo: Arc<dyn ProductRepositoryPort>,
        order_repo: Arc<dyn OrderRepositoryPort>,
    ) -> Self {
        Self {
            list_customers_handler: ListCustomersHandler::new(customer_repo.clone()),
            get_customer_handler: GetCustomerHandler::new(customer_repo.clone()),
            create_customer_handler: CreateCustomerHandler::new(customer_repo.clone()),
            update_customer_handler: UpdateCustomerHandler::new(customer_repo.clone()),
            delete_customer_handler: DeleteCustomerHandler::new(customer_repo.clone()),

            list_products_handler: ListProductsHandler::new(product_repo.clone()),
            get_product_handler: GetProductHandler::new(product_repo.clone()),
            create_product_handler: CreateProductHandler::new(product_repo.clone()),
            update_product_handler: UpdateProductHandler::new(product_repo.clone()),
            delete_product_handler: DeleteProductHandler::new(product_repo.clone()),

            get_order_handler: GetOrderHandler::new(order_repo.clone()),
            create_order_handler: CreateOrderHandler::new(customer_repo, product_repo, order_repo),
        }
    }
}
