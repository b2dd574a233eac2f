//! Customer Queries

use uuid::Uuid;

/// 获取客户详情查询
#[derive(Debug, Clone)]
pub struct GetCustomer {
    pub customer_id: Uuid,
}

/// 列出所有客户查询
#[derive(Debug, Clone)]
pub struct ListCustomers;
