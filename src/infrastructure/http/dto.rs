//! Data Transfer Objects
//!
//! JSON 字段统一使用 camelCase；金额以 JSON 数字收发。

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::application::{
    CreateCustomer, CreateOrder, CreateOrderLine, CreateProduct, CustomerResponse,
    OrderLineResponse, OrderResponse, ProductResponse, UpdateCustomer, UpdateProduct,
};

// ============================================================================
// Customer DTOs
// ============================================================================

/// 创建 / 更新客户请求体
///
/// 所有字段可缺省，缺失由领域层报告具体的必填错误。
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerRequest {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

impl CustomerRequest {
    pub fn into_create(self) -> CreateCustomer {
        CreateCustomer {
            name: self.name,
            email: self.email,
            phone: self.phone,
            birth_date: self.birth_date,
        }
    }

    pub fn into_update(self, customer_id: Uuid) -> UpdateCustomer {
        UpdateCustomer {
            customer_id,
            name: self.name,
            email: self.email,
            phone: self.phone,
            birth_date: self.birth_date,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CustomerDto {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
}

impl From<CustomerResponse> for CustomerDto {
    fn from(c: CustomerResponse) -> Self {
        Self {
            id: c.id,
            name: c.name,
            email: c.email,
            phone: c.phone,
            birth_date: c.birth_date,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListCustomersResponse {
    pub customers: Vec<CustomerDto>,
}

// ============================================================================
// Product DTOs
// ============================================================================

/// 创建 / 更新商品请求体
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductRequest {
    pub title: Option<String>,
    pub description: Option<String>,
    pub slug: Option<String>,
    #[serde(default, with = "rust_decimal::serde::float_option")]
    pub price: Option<Decimal>,
}

impl ProductRequest {
    pub fn into_create(self) -> CreateProduct {
        CreateProduct {
            title: self.title,
            description: self.description,
            slug: self.slug,
            price: self.price,
        }
    }

    pub fn into_update(self, product_id: Uuid) -> UpdateProduct {
        UpdateProduct {
            product_id,
            title: self.title,
            description: self.description,
            slug: self.slug,
            price: self.price,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDto {
    pub id: Uuid,
    pub title: String,
    pub description: String,
    pub slug: String,
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
}

impl From<ProductResponse> for ProductDto {
    fn from(p: ProductResponse) -> Self {
        Self {
            id: p.id,
            title: p.title,
            description: p.description,
            slug: p.slug,
            price: p.price,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ListProductsResponse {
    pub products: Vec<ProductDto>,
}

// ============================================================================
// Order DTOs
// ============================================================================

#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineRequest {
    pub product_id: Option<Uuid>,
    pub quantity: Option<i32>,
}

/// 下单请求体
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateOrderRequest {
    pub customer_id: Option<Uuid>,
    pub lines: Option<Vec<OrderLineRequest>>,
}

impl From<CreateOrderRequest> for CreateOrder {
    fn from(req: CreateOrderRequest) -> Self {
        CreateOrder {
            customer_id: req.customer_id,
            lines: req.lines.map(|lines| {
                lines
                    .into_iter()
                    .map(|l| CreateOrderLine {
                        product_id: l.product_id,
                        quantity: l.quantity,
                    })
                    .collect()
            }),
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderLineDto {
    pub id: Uuid,
    pub product_id: Uuid,
    pub product_title: String,
    pub quantity: i32,
    #[serde(with = "rust_decimal::serde::float")]
    pub unit_price: Decimal,
    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

impl From<OrderLineResponse> for OrderLineDto {
    fn from(l: OrderLineResponse) -> Self {
        Self {
            id: l.id,
            product_id: l.product_id,
            product_title: l.product_title,
            quantity: l.quantity,
            unit_price: l.unit_price,
            total: l.total,
        }
    }
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct OrderDto {
    pub id: Uuid,
    pub customer_id: Uuid,
    pub customer_name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(with = "rust_decimal::serde::float")]
    pub total_amount: Decimal,
    pub lines: Vec<OrderLineDto>,
}

impl From<OrderResponse> for OrderDto {
    fn from(o: OrderResponse) -> Self {
        Self {
            id: o.id,
            customer_id: o.customer_id,
            customer_name: o.customer_name,
            created_at: o.created_at,
            updated_at: o.updated_at,
            total_amount: o.total_amount,
            lines: o.lines.into_iter().map(OrderLineDto::from).collect(),
        }
    }
}
