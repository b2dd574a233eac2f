//! Customer Query Handlers

use async_trait::async_trait;
use chrono::NaiveDate;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::error::ApplicationError;
use crate::application::handler::RequestHandler;
use crate::application::ports::{CustomerRecord, CustomerRepositoryPort};
use crate::application::queries::{GetCustomer, ListCustomers};

// ============================================================================
// Response DTOs
// ============================================================================

/// 客户详情响应（创建、更新、查询共用）
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerResponse {
    pub id: Uuid,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub birth_date: NaiveDate,
}

impl From<CustomerRecord> for CustomerResponse {
    fn from(record: CustomerRecord) -> Self {
        Self {
            id: record.id,
            name: record.name,
            email: record.email,
            phone: record.phone,
            birth_date: record.birth_date,
        }
    }
}

// ============================================================================
// Handlers
// ============================================================================

/// GetCustomer Handler
pub struct GetCustomerHandler {
    customer_repo: Arc<dyn CustomerRepositoryPort>,
}

impl GetCustomerHandler {
    pub fn new(customer_repo: Arc<dyn CustomerRepositoryPort>) -> Self {
        Self { customer_repo }
    }
}

#[async_trait]
impl RequestHandler<GetCustomer> for GetCustomerHandler {
    type Response = CustomerResponse;

    async fn handle(&self, query: GetCustomer) -> Result<CustomerResponse, ApplicationError> {
        let customer = self
            .customer_repo
            .find_by_id(query.customer_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Customer"))?;

        Ok(CustomerResponse::from(customer))
    }
}

/// ListCustomers Handler
pub struct ListCustomersHandler {
    customer_repo: Arc<dyn CustomerRepositoryPort>,
}

impl ListCustomersHandler {
    pub fn new(customer_repo: Arc<dyn CustomerRepositoryPort>) -> Self {
        Self { customer_repo }
    }
}

#[async_trait]
impl RequestHandler<ListCustomers> for ListCustomersHandler {
    type Response = Vec<CustomerResponse>;

    async fn handle(&self, _query: ListCustomers) -> Result<Vec<CustomerResponse>, ApplicationError> {
        let customers = self.customer_repo.find_all().await?;
        Ok(customers.into_iter().map(CustomerResponse::from).collect())
    }
}
