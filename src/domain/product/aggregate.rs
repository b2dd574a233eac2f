//! Product Context - Aggregate Root

use rust_decimal::Decimal;

use super::{Price, ProductError};
use crate::domain::required;

/// 经过校验的商品信息（创建和更新共用）
///
/// 价格缺失按 0 处理，因此报告的是价格错误而不是必填错误。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductListing {
    title: String,
    description: String,
    slug: String,
    price: Price,
}

impl ProductListing {
    pub fn parse(
        title: Option<String>,
        description: Option<String>,
        slug: Option<String>,
        price: Option<Decimal>,
    ) -> Result<Self, ProductError> {
        let title = required(title).ok_or(ProductError::MissingField("Title"))?;
        let description = required(description).ok_or(ProductError::MissingField("Description"))?;
        let slug = required(slug).ok_or(ProductError::MissingField("Slug"))?;
        let price = Price::new(price.unwrap_or_default())?;

        Ok(Self {
            title,
            description,
            slug,
            price,
        })
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn description(&self) -> &str {
        &self.description
    }

    pub fn slug(&self) -> &str {
        &self.slug
    }

    pub fn price(&self) -> Price {
        self.price
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_listing() {
        let listing = ProductListing::parse(
            Some("Bug Spray".into()),
            Some("Kills bugs".into()),
            Some("bug-spray".into()),
            Some(Decimal::new(1999, 2)),
        )
        .unwrap();

        assert_eq!(listing.slug(), "bug-spray");
        assert_eq!(listing.price().amount(), Decimal::new(1999, 2));
    }

    #[test]
    fn test_missing_fields() {
        let err = ProductListing::parse(None, None, None, None).unwrap_err();
        assert_eq!(err.to_string(), "Title is required");

        let err = ProductListing::parse(Some("T".into()), Some("D".into()), Some(" ".into()), None)
            .unwrap_err();
        assert_eq!(err.to_string(), "Slug is required");
    }

    #[test]
    fn test_price_must_be_positive() {
        for price in [None, Some(Decimal::ZERO), Some(Decimal::NEGATIVE_ONE)] {
            let err = ProductListing::parse(
                Some("T".into()),
                Some("D".into()),
                Some("s".into()),
                price,
            )
            .unwrap_err();
            assert_eq!(err, ProductError::NonPositivePrice);
        }
    }
}
