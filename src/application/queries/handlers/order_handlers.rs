//! Order Query Handlers

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::handler::RequestHandler;
use crate::application::ports::{OrderDetailsRecord, OrderLineDetailsRecord, OrderRepositoryPort};
use crate::application::queries::GetOrder;
use crate::domain::order::sum_line_totals;

// ============================================================================
// Response DTOs
// ============================================================================

/// 订单行响应
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderLineResponse {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_title: String,
    pub quantity: i32,
    pub unit_price: Decimal,
    pub total: Decimal,
}

impl From<OrderLineDetailsRecord> for OrderLineResponse {
    fn from(record: OrderLineDetailsRecord) -> Self {
        Self {
            id: record.id,
            product_id: record.product_id,
            product_title: record.product_title,
            quantity: record.quantity,
            unit_price: record.unit_price,
            total: record.total,
        }
    }
}

/// 订单详情响应（下单与查询共用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderResponse {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub total_amount: Decimal,
    pub lines: Vec<OrderLineResponse>,
}

impl TryFrom<OrderDetailsRecord> for OrderResponse {
    type Error = ApplicationError;

    fn try_from(record: OrderDetailsRecord) -> Result<Self, Self::Error> {
        // 行金额已在下单时校验过，这里溢出说明存储数据异常
        let total_amount = sum_line_totals(record.lines.iter().map(|l| l.total))
            .map_err(|e| ApplicationError::internal(format!("order {}: {}", record.id, e)))?;
        Ok(Self {
            id: record.id,
            customer_id: record.customer_id,
            customer_name: record.customer_name,
            created_at: record.created_at,
            updated_at: record.updated_at,
            total_amount,
            lines: record.lines.into_iter().map(OrderLineResponse::from).collect(),
        })
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetOrder Handler
pub struct GetOrderHandler {
    order_repo: Arc<dyn OrderRepositoryPort>,
}

impl GetOrderHandler {
    pub fn new(order_repo: Arc<dyn OrderRepositoryPort>) -> Self {
        Self { order_repo }
    }
}

#[async_trait]
impl RequestHandler<GetOrder> for GetOrderHandler {
    type Response = OrderResponse;

    async fn handle(&self, query: GetOrder) -> Result<OrderResponse, ApplicationError> {
        let order = self
            .order_repo
            .find_details(query.order_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Order"))?;

        OrderResponse::try_from(order)
    }
}
