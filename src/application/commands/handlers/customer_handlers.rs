//! Customer Command Handlers

use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::application::commands::{CreateCustomer, DeleteCustomer, UpdateCustomer};
use crate::application::error::ApplicationError;
use crate::application::handler::RequestHandler;
use crate::application::ports::{CustomerRecord, CustomerRepositoryPort};
use crate::application::queries::handlers::CustomerResponse;
use crate::domain::CustomerProfile;

const EMAIL_IN_USE: &str = "Email already in use";

fn to_record(id: Uuid, profile: CustomerProfile) -> CustomerRecord {
    CustomerRecord {
        id,
        name: profile.name().to_string(),
        email: profile.email().as_str().to_string(),
        phone: profile.phone().to_string(),
        birth_date: profile.birth_date(),
    }
}

// ============================================================================
// CreateCustomer
// ============================================================================

/// CreateCustomer Handler
pub struct CreateCustomerHandler {
    customer_repo: Arc<dyn CustomerRepositoryPort>,
}

impl CreateCustomerHandler {
    pub fn new(customer_repo: Arc<dyn CustomerRepositoryPort>) -> Self {
        Self { customer_repo }
    }
}

#[async_trait]
impl RequestHandler<CreateCustomer> for CreateCustomerHandler {
    type Response = CustomerResponse;

    async fn handle(&self, command: CreateCustomer) -> Result<CustomerResponse, ApplicationError> {
        let profile = CustomerProfile::parse(
            command.name,
            command.email,
            command.phone,
            command.birth_date,
            Utc::now().date_naive(),
        )?;

        if self
            .customer_repo
            .email_in_use(profile.email().as_str(), None)
            .await?
        {
            return Err(ApplicationError::conflict(EMAIL_IN_USE));
        }

        let customer = to_record(Uuid::new_v4(), profile);
        self.customer_repo.insert(&customer).await?;

        tracing::info!(
            customer_id = %customer.id,
            email = %customer.email,
            "Customer created"
        );

        Ok(CustomerResponse::from(customer))
    }
}

// ============================================================================
// UpdateCustomer
// ============================================================================

/// UpdateCustomer Handler
pub struct UpdateCustomerHandler {
    customer_repo: Arc<dyn CustomerRepositoryPort>,
}

impl UpdateCustomerHandler {
    pub fn new(customer_repo: Arc<dyn CustomerRepositoryPort>) -> Self {
        Self { customer_repo }
    }
}

#[async_trait]
impl RequestHandler<UpdateCustomer> for UpdateCustomerHandler {
    type Response = CustomerResponse;

    async fn handle(&self, command: UpdateCustomer) -> Result<CustomerResponse, ApplicationError> {
        let customer_id = command.customer_id;
        let profile = CustomerProfile::parse(
            command.name,
            command.email,
            command.phone,
            command.birth_date,
            Utc::now().date_naive(),
        )?;

        // 检查客户是否存在
        self.customer_repo
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Customer"))?;

        if self
            .customer_repo
            .email_in_use(profile.email().as_str(), Some(customer_id))
            .await?
        {
            return Err(ApplicationError::conflict(EMAIL_IN_USE));
        }

        let customer = to_record(customer_id, profile);
        self.customer_repo.update(&customer).await?;

        tracing::info!(customer_id = %customer_id, "Customer updated");

        Ok(CustomerResponse::from(customer))
    }
}

// ============================================================================
// DeleteCustomer
// ============================================================================

/// DeleteCustomer Handler
pub struct DeleteCustomerHandler {
    customer_repo: Arc<dyn CustomerRepositoryPort>,
}

impl DeleteCustomerHandler {
    pub fn new(customer_repo: Arc<dyn CustomerRepositoryPort>) -> Self {
        Self { customer_repo }
    }
}

#[async_trait]
impl RequestHandler<DeleteCustomer> for DeleteCustomerHandler {
    type Response = ();

    async fn handle(&self, command: DeleteCustomer) -> Result<(), ApplicationError> {
        let customer_id = command.customer_id;

        // 检查客户是否存在
        let customer = self
            .customer_repo
            .find_by_id(customer_id)
            .await?
            .ok_or_else(|| ApplicationError::not_found("Customer"))?;

        self.customer_repo.delete(customer_id).await?;

        tracing::info!(
            customer_id = %customer_id,
            email = %customer.email,
            "Customer deleted"
        );

        Ok(())
    }
}
