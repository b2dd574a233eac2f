//! Order Context - Aggregate Root

use std::collections::HashMap;

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use uuid::Uuid;

use super::{OrderError, OrderLine, Quantity};
use crate::domain::product::Price;

/// 请求中的一行（已校验）
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RequestedLine {
    pub product_id: Uuid,
    pub quantity: Quantity,
}

/// 已通过字段校验、尚未定价的下单请求
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    customer_id: Uuid,
    lines: Vec<RequestedLine>,
}

impl OrderDraft {
    /// 校验顺序：客户 ID、至少一行、逐行商品 ID 与数量
    pub fn parse<I>(customer_id: Option<Uuid>, lines: Option<I>) -> Result<Self, OrderError>
    where
        I: IntoIterator<Item = (Option<Uuid>, Option<i32>)>,
    {
        let customer_id = customer_id
            .filter(|id| !id.is_nil())
            .ok_or(OrderError::MissingCustomer)?;

        let raw: Vec<(Option<Uuid>, Option<i32>)> =
            lines.map(|l| l.into_iter().collect()).unwrap_or_default();
        if raw.is_empty() {
            return Err(OrderError::NoLines);
        }

        let lines = raw
            .into_iter()
            .map(|(product_id, quantity)| {
                let product_id = product_id
                    .filter(|id| !id.is_nil())
                    .ok_or(OrderError::MissingProduct)?;
                let quantity = Quantity::new(quantity.unwrap_or_default())?;
                Ok(RequestedLine {
                    product_id,
                    quantity,
                })
            })
            .collect::<Result<Vec<_>, OrderError>>()?;

        Ok(Self { customer_id, lines })
    }

    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }

    pub fn lines(&self) -> &[RequestedLine] {
        &self.lines
    }

    /// 去重后的商品 ID（保持首次出现的顺序）
    pub fn product_ids(&self) -> Vec<Uuid> {
        let mut ids: Vec<Uuid> = Vec::with_capacity(self.lines.len());
        for line in &self.lines {
            if !ids.contains(&line.product_id) {
                ids.push(line.product_id);
            }
        }
        ids
    }
}

/// Order 聚合根
///
/// 不变量:
/// - 至少包含一行
/// - 行与订单一同创建，顺序与请求一致
#[derive(Debug, Clone)]
pub struct Order {
    id: Uuid,
    customer_id: Uuid,
    lines: Vec<OrderLine>,
    total_amount: Decimal,
    created_at: DateTime<Utc>,
    updated_at: DateTime<Utc>,
}

impl Order {
    /// 按当前价格为草稿定价并生成订单
    pub fn place(draft: OrderDraft, prices: &HashMap<Uuid, Price>) -> Result<Self, OrderError> {
        let lines = draft
            .lines
            .iter()
            .map(|line| {
                let price = prices
                    .get(&line.product_id)
                    .ok_or(OrderError::UnknownProducts)?;
                OrderLine::new(line.product_id, line.quantity, *price)
            })
            .collect::<Result<Vec<_>, OrderError>>()?;

        if lines.is_empty() {
            return Err(OrderError::NoLines);
        }

        let total_amount = sum_line_totals(lines.iter().map(OrderLine::total))?;

        let now = Utc::now();
        Ok(Self {
            id: Uuid::new_v4(),
            customer_id: draft.customer_id,
            lines,
            total_amount,
            created_at: now,
            updated_at: now,
        })
    }

    pub fn id(&self) -> Uuid {
        self.id
    }

    pub fn customer_id(&self) -> Uuid {
        self.customer_id
    }

    pub fn lines(&self) -> &[OrderLine] {
        &self.lines
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn updated_at(&self) -> DateTime<Utc> {
        self.updated_at
    }

    pub fn total_amount(&self) -> Decimal {
        self.total_amount
    }
}

/// 订单总额 = 各行 total 之和，溢出时报错
pub fn sum_line_totals(totals: impl IntoIterator<Item = Decimal>) -> Result<Decimal, OrderError> {
    totals
        .into_iter()
        .try_fold(Decimal::ZERO, |sum, total| sum.checked_add(total))
        .ok_or(OrderError::TotalTooLarge)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn price(amount: i64) -> Price {
        Price::new(Decimal::from(amount)).unwrap()
    }

    #[test]
    fn test_draft_validation_order() {
        let lines = vec![(Some(Uuid::new_v4()), Some(1))];
        assert_eq!(
            OrderDraft::parse(None, Some(lines.clone())),
            Err(OrderError::MissingCustomer)
        );
        assert_eq!(
            OrderDraft::parse(Some(Uuid::nil()), Some(lines)),
            Err(OrderError::MissingCustomer)
        );
        assert_eq!(
            OrderDraft::parse(Some(Uuid::new_v4()), None::<Vec<(Option<Uuid>, Option<i32>)>>),
            Err(OrderError::NoLines)
        );
        assert_eq!(
            OrderDraft::parse(Some(Uuid::new_v4()), Some(vec![])),
            Err(OrderError::NoLines)
        );
    }

    #[test]
    fn test_any_bad_quantity_rejects_draft() {
        let lines = vec![
            (Some(Uuid::new_v4()), Some(2)),
            (Some(Uuid::new_v4()), Some(0)),
        ];
        assert_eq!(
            OrderDraft::parse(Some(Uuid::new_v4()), Some(lines)),
            Err(OrderError::NonPositiveQuantity)
        );

        let lines = vec![(Some(Uuid::new_v4()), None)];
        assert_eq!(
            OrderDraft::parse(Some(Uuid::new_v4()), Some(lines)),
            Err(OrderError::NonPositiveQuantity)
        );
    }

    #[test]
    fn test_product_ids_are_distinct() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let draft = OrderDraft::parse(
            Some(Uuid::new_v4()),
            Some(vec![(Some(p1), Some(1)), (Some(p2), Some(1)), (Some(p1), Some(3))]),
        )
        .unwrap();
        assert_eq!(draft.product_ids(), vec![p1, p2]);
    }

    #[test]
    fn test_place_computes_line_and_order_totals() {
        let p1 = Uuid::new_v4();
        let p2 = Uuid::new_v4();
        let draft = OrderDraft::parse(
            Some(Uuid::new_v4()),
            Some(vec![(Some(p1), Some(2)), (Some(p2), Some(1))]),
        )
        .unwrap();
        let prices = HashMap::from([(p1, price(10)), (p2, price(20))]);

        let order = Order::place(draft, &prices).unwrap();

        let totals: Vec<Decimal> = order.lines().iter().map(OrderLine::total).collect();
        assert_eq!(totals, vec![Decimal::from(20), Decimal::from(20)]);
        assert_eq!(order.total_amount(), Decimal::from(40));
        assert_eq!(order.created_at(), order.updated_at());
    }

    #[test]
    fn test_place_fails_on_unpriced_product() {
        let draft = OrderDraft::parse(
            Some(Uuid::new_v4()),
            Some(vec![(Some(Uuid::new_v4()), Some(1))]),
        )
        .unwrap();
        let err = Order::place(draft, &HashMap::new()).unwrap_err();
        assert_eq!(err, OrderError::UnknownProducts);
    }

    #[test]
    fn test_place_rejects_overflowing_totals() {
        let p1 = Uuid::new_v4();
        let huge = Price::new(Decimal::MAX / Decimal::TWO).unwrap();

        let draft =
            OrderDraft::parse(Some(Uuid::new_v4()), Some(vec![(Some(p1), Some(3))])).unwrap();
        let err = Order::place(draft, &HashMap::from([(p1, huge)])).unwrap_err();
        assert_eq!(err, OrderError::TotalTooLarge);

        // 单行不溢出，但合计溢出
        let draft = OrderDraft::parse(
            Some(Uuid::new_v4()),
            Some(vec![(Some(p1), Some(1)), (Some(p1), Some(1)), (Some(p1), Some(1))]),
        )
        .unwrap();
        let err = Order::place(draft, &HashMap::from([(p1, huge)])).unwrap_err();
        assert_eq!(err, OrderError::TotalTooLarge);
    }

    #[test]
    fn test_sum_line_totals() {
        assert_eq!(sum_line_totals(Vec::new()), Ok(Decimal::ZERO));
        assert_eq!(
            sum_line_totals([Decimal::from(20), Decimal::from(20)]),
            Ok(Decimal::from(40))
        );
        assert_eq!(
            sum_line_totals([Decimal::MAX, Decimal::ONE]),
            Err(OrderError::TotalTooLarge)
        );
    }
}
