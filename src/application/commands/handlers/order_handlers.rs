//! Order Command Handlers

use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::CreateOrder;
use crate::application::error::ApplicationError;
use crate::application::handler::RequestHandler;
use crate::application::ports::{
    CustomerRepositoryPort, OrderLineRecord, OrderRecord, OrderRepositoryPort,
    ProductRepositoryPort,
};
use crate::application::queries::handlers::{OrderLineResponse, OrderResponse};
use crate::domain::{Order, OrderDraft, OrderError, Price};

/// CreateOrder Handler
///
/// 流程: 字段校验 -> 客户存在 -> 批量查商品 -> 定价 -> 单事务写入
pub struct CreateOrderHandler {
    customer_repo: Arc<dyn CustomerRepositoryPort>,
    product_repo: Arc<dyn ProductRepositoryPort>,
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl CreateOrderHandler {
    pub fn new(
        customer_repo: Arc<dyn CustomerRepositoryPort>,
        product_repo: Arc<dyn ProductRepositoryPort>,
        order_repo: Arc<dyn OrderRepositoryPort>,
    ) -> Self {
        Self {
            customer_repo,
            product_repo,
            order_repo,
        }
    }
}

#[async_trait]
impl RequestHandler<CreateOrder> for CreateOrderHandler {
    type Response = OrderResponse;

    async fn handle(&self, command: CreateOrder) -> Result<OrderResponse, ApplicationError> {
        let draft = OrderDraft::parse(
            command.customer_id,
            command
                .lines
                .map(|lines| lines.into_iter().map(|l| (l.product_id, l.quantity))),
        )?;

        let customer = self
            .customer_repo
            .find_by_id(draft.customer_id())
            .await?
            .ok_or_else(|| ApplicationError::not_found("Customer"))?;

        let product_ids = draft.product_ids();
        let products = self.product_repo.find_by_ids(&product_ids).await?;
        if products.len() != product_ids.len() {
            return Err(OrderError::UnknownProducts.into());
        }

        let mut prices = HashMap::with_capacity(products.len());
        let mut titles = HashMap::with_capacity(products.len());
        for product in products {
            let price = Price::new(product.price)
                .map_err(|e| ApplicationError::internal(format!("stored price: {}", e)))?;
            prices.insert(product.id, price);
            titles.insert(product.id, product.title);
        }

        let order = Order::place(draft, &prices)?;

        let record = OrderRecord {
            id: order.id(),
            customer_id: order.customer_id(),
            created_at: order.created_at(),
            updated_at: order.updated_at(),
            lines: order
                .lines()
                .iter()
                .map(|line| OrderLineRecord {
                    id: line.id(),
                    product_id: line.product_id(),
                    quantity: line.quantity().value(),
                    total: line.total(),
                })
                .collect(),
        };
        self.order_repo.create(&record).await?;

        tracing::info!(
            order_id = %order.id(),
            customer_id = %order.customer_id(),
            lines = order.lines().len(),
            total_amount = %order.total_amount(),
            "Order created"
        );

        let lines = order
            .lines()
            .iter()
            .map(|line| OrderLineResponse {
                id: line.id(),
                product_id: line.product_id(),
                product_title: titles.get(&line.product_id()).cloned().unwrap_or_default(),
                quantity: line.quantity().value(),
                unit_price: line.unit_price().amount(),
                total: line.total(),
            })
            .collect();

        Ok(OrderResponse {
            id: order.id(),
            customer_id: order.customer_id(),
            customer_name: customer.name,
            created_at: order.created_at(),
            updated_at: order.updated_at(),
            total_amount: order.total_amount(),
            lines,
        })
    }
}
