//! Customer Context - Value Objects

use chrono::NaiveDate;

use super::CustomerError;

/// 邮箱地址
///
/// 不变量:
/// - 恰好包含一个 `@`，且不在首尾
/// - 不包含换行符
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Email(String);

impl Email {
    pub fn parse(email: impl Into<String>) -> Result<Self, CustomerError> {
        let email = email.into();
        if !is_valid_email(&email) {
            return Err(CustomerError::InvalidEmail);
        }
        Ok(Self(email))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for Email {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn is_valid_email(email: &str) -> bool {
    if email.contains('\r') || email.contains('\n') {
        return false;
    }
    match email.find('@') {
        Some(at) => at != 0 && at != email.len() - 1 && email.rfind('@') == Some(at),
        None => false,
    }
}

/// 出生日期（不晚于当天）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BirthDate(NaiveDate);

impl BirthDate {
    /// `today` 由调用方给出（UTC 日期），当天本身是合法的
    pub fn new(date: NaiveDate, today: NaiveDate) -> Result<Self, CustomerError> {
        if date > today {
            return Err(CustomerError::BirthDateInFuture);
        }
        Ok(Self(date))
    }

    pub fn as_date(&self) -> NaiveDate {
        self.0
    }
}
