//! 应用层 - 用例编排
//!
//! 包含：
//! - ports: 六边形架构端口定义（Customer/Product/Order Repository）
//! - handler: 统一的请求处理器 trait
//! - commands: CQRS 命令及处理器
//! - queries: CQRS 查询及处理器
//! - error: 应用层错误定义

pub mod commands;
pub mod error;
pub mod handler;
pub mod ports;
pub mod queries;

// Re-exports
pub use commands::{
    handlers::{
        CreateCustomerHandler, CreateOrderHandler, CreateProductHandler, DeleteCustomerHandler,
        DeleteProductHandler, UpdateCustomerHandler, UpdateProductHandler,
    },
    CreateCustomer, CreateOrder, CreateOrderLine, CreateProduct, DeleteCustomer, DeleteProduct,
    UpdateCustomer, UpdateProduct,
};

pub use error::ApplicationError;
pub use handler::RequestHandler;

pub use ports::{
    CustomerRecord, CustomerRepositoryPort, OrderDetailsRecord, OrderLineDetailsRecord,
    OrderLineRecord, OrderRecord, OrderRepositoryPort, ProductRecord, ProductRepositoryPort,
    RepositoryError,
};

pub use queries::{
    handlers::{
        CustomerResponse, GetCustomerHandler, GetOrderHandler, GetProductHandler,
        ListCustomersHandler, ListProductsHandler, OrderLineResponse, OrderResponse,
        ProductResponse,
    },
    GetCustomer, GetOrder, GetProduct, ListCustomers, ListProducts,
};
