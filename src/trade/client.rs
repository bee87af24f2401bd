use tracing::{error, info, instrument};

use super::{error::TradeError, TradeBuying, TradeOutcome, TradeSelling, TradeSide, TradeSymbol};
use crate::{
    api::{error::ApiError, TradeApi},
    book::{OrderBook, Pair},
    noun::*,
};

type TradeResult<T> = Result<T, TradeError>;

// ===== Trader =====
pub struct Trader<A> {
    order_books: Vec<OrderBook>,

    pub api: A,
}

impl<A> Trader<A>
where
    A: TradeApi,
{
    pub fn new(api: A, order_books: Vec<OrderBook>) -> Self {
        Self { order_books, api }
    }

    // First order book pair holding both assets, in either order
    pub fn search_pair(&self, coin_a: &Asset, coin_b: &Asset) -> TradeResult<&Pair> {
        for order_book in self.order_books.iter() {
            if order_book.pair().is_between(coin_a, coin_b) {
                return Ok(order_book.pair());
            }
        }

        Err(TradeError::PairNotFound {
            coin_a: coin_a.clone(),
            coin_b: coin_b.clone(),
        })
    }

    #[instrument(skip_all)]
    pub async fn trade(&self, symbol: &TradeSymbol, volume: Quantity) -> TradeResult<TradeOutcome> {
        let pair = self.search_pair(&symbol.0, &symbol.1)?;
        let side = TradeSide::decide(symbol, pair)?;

        let outcome = match side {
            TradeSide::Selling => {
                let quantity = pair.transaction_base_quantity(&volume);

                let income = match self.selling_income(pair, quantity).await {
                    Ok(v) => v,
                    Err(e) => {
                        let error = TradeError::Order {
                            side,
                            asset: pair.base().clone(),
                            symbol: symbol.clone(),
                            source: e,
                        };
                        error!("{error}");

                        return Err(error);
                    }
                };

                TradeOutcome::Selling(TradeSelling::new(
                    quantity,
                    pair.base().clone(),
                    income,
                    pair.quote().clone(),
                ))
            }
            TradeSide::Buying => {
                let amount = pair.transaction_quote_amount(&volume);

                let quantity = match self.buying_quantity(pair, amount).await {
                    Ok(v) => v,
                    Err(e) => {
                        let error = TradeError::Order {
                            side,
                            asset: pair.quote().clone(),
                            symbol: symbol.clone(),
                            source: e,
                        };
                        error!("{error}");

                        return Err(error);
                    }
                };

                TradeOutcome::Buying(TradeBuying::new(
                    quantity,
                    pair.base().clone(),
                    amount,
                    pair.quote().clone(),
                ))
            }
        };

        info!("{outcome}");

        Ok(outcome)
    }

    async fn selling_income(&self, pair: &Pair, quantity: Quantity) -> Result<Amount, ApiError> {
        let order = self.api.market_order_sell(&pair.symbol(), quantity).await?;

        order.filled_amount()
    }

    async fn buying_quantity(&self, pair: &Pair, amount: Amount) -> Result<Quantity, ApiError> {
        let order = self.api.market_order_buy(&pair.symbol(), amount).await?;

        Ok(order.filled_quantity())
    }
}
