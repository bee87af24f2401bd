use std::future::Future;

pub mod binance;
pub mod error;

use serde::{Deserialize, Serialize};

use self::error::ApiError;
use crate::noun::*;

pub trait TradeApi {
    // Market sell order, quantity of the base asset to dispose of
    fn market_order_sell(
        &self,
        symbol: &Symbol,
        quantity: Quantity,
    ) -> impl Future<Output = Result<OrderResponse, ApiError>> + Send;

    // Market buy order, amount of the quote asset to spend at most
    fn market_order_buy(
        &self,
        symbol: &Symbol,
        amount: Amount,
    ) -> impl Future<Output = Result<OrderResponse, ApiError>> + Send;
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct Fill {
    qty: Quantity,
    price: Option<Price>,
}

impl Fill {
    pub fn new(qty: Quantity, price: Option<Price>) -> Self {
        Self { qty, price }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct OrderResponse {
    #[serde(default)]
    fills: Vec<Fill>,
}

impl OrderResponse {
    pub fn new(fills: Vec<Fill>) -> Self {
        Self { fills }
    }

    // Quantity of the base asset the order actually moved
    pub fn filled_quantity(&self) -> Quantity {
        self.fills.iter().map(|fill| fill.qty).sum()
    }

    // Amount of the quote asset the order actually moved, every fill priced
    pub fn filled_amount(&self) -> Result<Amount, ApiError> {
        let mut amount = Decimal::ZERO;

        for fill in self.fills.iter() {
            let price = match fill.price {
                Some(v) => v,
                None => return Err(ApiError::Response(String::from("fill without price"))),
            };

            amount += fill.qty * price;
        }

        Ok(amount)
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    fn decimal(value: f64) -> Decimal {
        Decimal::from_f64(value).unwrap()
    }

    #[test]
    fn test_filled_quantity() {
        let order: OrderResponse =
            serde_json::from_str(r#"{ "fills": [{ "qty": "0.5" }, { "qty": "0.25" }] }"#).unwrap();
        assert_eq!(order.filled_quantity(), decimal(0.75));

        let order = OrderResponse::new(vec![]);
        assert_eq!(order.filled_quantity(), Decimal::ZERO);
    }

    #[test]
    fn test_filled_amount() {
        let order: OrderResponse = serde_json::from_str(
            r#"{ "fills": [{ "qty": "1.0", "price": "100" }, { "qty": "2.0", "price": "50" }] }"#,
        )
        .unwrap();
        assert_eq!(order.filled_amount().unwrap(), decimal(200.0));

        let order = OrderResponse::new(vec![]);
        assert_eq!(order.filled_amount().unwrap(), Decimal::ZERO);
    }

    #[test]
    fn test_filled_amount_without_price() {
        let order: OrderResponse =
            serde_json::from_str(r#"{ "fills": [{ "qty": "1.0" }] }"#).unwrap();
        assert_eq!(order.filled_amount().is_err(), true);
    }

    #[test]
    fn test_response_without_fills() {
        let order: OrderResponse = serde_json::from_str(r#"{}"#).unwrap();
        assert_eq!(order.filled_quantity(), Decimal::ZERO);
        assert_eq!(order.filled_amount().unwrap(), Decimal::ZERO);
    }
}
