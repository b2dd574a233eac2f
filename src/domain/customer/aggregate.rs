//! Customer Context - Aggregate Root

use chrono::NaiveDate;

use super::{BirthDate, CustomerError, Email};
use crate::domain::required;

/// 经过校验的客户资料（创建和更新共用）
///
/// 校验顺序固定：必填字段按声明顺序，然后出生日期，最后邮箱格式。
/// 唯一性需要查询存储，不在这里处理。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CustomerProfile {
    name: String,
    email: Email,
    phone: String,
    birth_date: BirthDate,
}

impl CustomerProfile {
    pub fn parse(
        name: Option<String>,
        email: Option<String>,
        phone: Option<String>,
        birth_date: Option<NaiveDate>,
        today: NaiveDate,
    ) -> Result<Self, CustomerError> {
        let name = required(name).ok_or(CustomerError::MissingField("Name"))?;
        let email = required(email).ok_or(CustomerError::MissingField("Email"))?;
        let phone = required(phone).ok_or(CustomerError::MissingField("Phone"))?;
        let birth_date = birth_date.ok_or(CustomerError::MissingField("BirthDate"))?;

        let birth_date = BirthDate::new(birth_date, today)?;
        let email = Email::parse(email)?;

        Ok(Self {
            name,
            email,
            phone,
            birth_date,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &Email {
        &self.email
    }

    pub fn phone(&self) -> &str {
        &self.phone
    }

    pub fn birth_date(&self) -> NaiveDate {
        self.birth_date.as_date()
    }
}
