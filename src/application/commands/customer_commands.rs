//! Customer Commands

use chrono::NaiveDate;
use uuid::Uuid;

/// 创建客户命令
///
/// 字段保持可选，缺失由处理器按顺序报告
#[derive(Debug, Clone, Default)]
pub struct CreateCustomer {
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// 更新客户命令
#[derive(Debug, Clone)]
pub struct UpdateCustomer {
    pub customer_id: Uuid,
    pub name: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub birth_date: Option<NaiveDate>,
}

/// 删除客户命令
#[derive(Debug, Clone)]
pub struct DeleteCustomer {
    pub customer_id: Uuid,
}
