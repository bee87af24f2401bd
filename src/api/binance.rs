use binance::{
    account::{Account, OrderRequest},
    api::Binance,
    rest_model::Transaction,
};
use rust_decimal::prelude::{FromPrimitive, ToPrimitive};

use super::{error::ApiError, Fill, OrderResponse, TradeApi};
use crate::noun::*;

type ApiResult<T> = Result<T, ApiError>;

pub struct BinanceApi {
    pub client: Account,
}

impl BinanceApi {
    pub fn new(api_key: String, secret_key: String) -> Self {
        let client = Account::new(Some(api_key), Some(secret_key));
        Self { client }
    }
}

impl TradeApi for BinanceApi {
    async fn market_order_sell(
        &self,
        symbol: &Symbol,
        quantity: Quantity,
    ) -> ApiResult<OrderResponse> {
        let quantity = match quantity.to_f64() {
            Some(v) => v,
            None => return Err(ApiError::Decimal(quantity.to_string())),
        };

        let sell = self
            .client
            .place_order(OrderRequest {
                symbol: symbol.clone(),
                side: binance::rest_model::OrderSide::Sell,
                order_type: binance::rest_model::OrderType::Market,
                quantity: Some(quantity),
                price: None,
                ..OrderRequest::default()
            })
            .await;

        match sell {
            Ok(v) => OrderResponse::try_from(v),
            Err(e) => Err(ApiError::Client(e.to_string())),
        }
    }

    async fn market_order_buy(
        &self,
        symbol: &Symbol,
        amount: Amount,
    ) -> ApiResult<OrderResponse> {
        let amount = match amount.to_f64() {
            Some(v) => v,
            None => return Err(ApiError::Decimal(amount.to_string())),
        };

        let buy = self
            .client
            .place_order(OrderRequest {
                symbol: symbol.clone(),
                side: binance::rest_model::OrderSide::Buy,
                order_type: binance::rest_model::OrderType::Market,
                quote_order_qty: Some(amount),
                price: None,
                ..OrderRequest::default()
            })
            .await;

        match buy {
            Ok(v) => OrderResponse::try_from(v),
            Err(e) => Err(ApiError::Client(e.to_string())),
        }
    }
}

impl TryFrom<Transaction> for OrderResponse {
    type Error = ApiError;

    fn try_from(transaction: Transaction) -> Result<Self, Self::Error> {
        let mut fills = Vec::new();

        for fill in transaction.fills {
            let qty = match Decimal::from_f64(fill.qty) {
                Some(v) => v,
                None => return Err(ApiError::Decimal(fill.qty.to_string())),
            };
            let price = match Decimal::from_f64(fill.price) {
                Some(v) => v,
                None => return Err(ApiError::Decimal(fill.price.to_string())),
            };

            fills.push(Fill::new(qty, Some(price)));
        }

        Ok(OrderResponse::new(fills))
    }
}

#[cfg(test)]
mod tests {
    use rust_decimal::prelude::FromPrimitive;

    use super::*;

    fn decimal(value: f64) -> Decimal {
        Decimal::from_f64(value).unwrap()
    }

    // A filled market order the way the exchange reports one
    fn sell_transaction(fills: Vec<binance::rest_model::Fill>) -> Transaction {
        Transaction {
            symbol: String::from("BTCUSDT"),
            order_id: 28,
            client_order_id: String::from("6gCrw2kRUAF9CvJDGP16IP"),
            transact_time: 1507725176595,
            price: 0.0,
            orig_qty: 10.0,
            executed_qty: 10.0,
            cummulative_quote_qty: 10.0,
            status: binance::rest_model::OrderStatus::Filled,
            time_in_force: binance::rest_model::TimeInForce::GTC,
            order_type: binance::rest_model::OrderType::Market,
            side: binance::rest_model::OrderSide::Sell,
            fills,
        }
    }

    fn transaction_fill(qty: f64, price: f64) -> binance::rest_model::Fill {
        binance::rest_model::Fill {
            price,
            qty,
            commission: 0.0,
            commission_asset: String::from("USDT"),
        }
    }

    #[test]
    fn test_try_from_transaction() {
        let transaction = sell_transaction(vec![
            transaction_fill(0.5, 30000.0),
            transaction_fill(0.25, 29999.0),
        ]);

        let order = OrderResponse::try_from(transaction).unwrap();

        assert_eq!(
            order,
            OrderResponse::new(vec![
                Fill::new(decimal(0.5), Some(decimal(30000.0))),
                Fill::new(decimal(0.25), Some(decimal(29999.0))),
            ])
        );
    }

    #[test]
    fn test_try_from_transaction_without_fills() {
        let order = OrderResponse::try_from(sell_transaction(vec![])).unwrap();

        assert_eq!(order, OrderResponse::new(vec![]));
    }

    #[test]
    fn test_try_from_transaction_decimal_error() {
        let transaction = sell_transaction(vec![transaction_fill(f64::NAN, 30000.0)]);
        let error = OrderResponse::try_from(transaction).unwrap_err();
        assert_eq!(error.to_string(), "NaN to decimal error");

        let transaction = sell_transaction(vec![transaction_fill(0.5, f64::INFINITY)]);
        let error = OrderResponse::try_from(transaction).unwrap_err();
        assert_eq!(error.to_string(), "inf to decimal error");
    }
}
