use super::{TradeSide, TradeSymbol};
use crate::{api::error::ApiError, noun::*};

#[derive(Debug)]
pub enum TradeError {
    PairNotFound {
        coin_a: Asset,
        coin_b: Asset,
    },
    InvalidSymbol {
        symbol: TradeSymbol,
        pair: Symbol,
    },
    Order {
        side: TradeSide,
        asset: Asset,
        symbol: TradeSymbol,
        source: ApiError,
    },
}

impl std::error::Error for TradeError {}

impl std::fmt::Display for TradeError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::PairNotFound { coin_a, coin_b } => {
                write!(
                    f,
                    "pair ({}, {}) does not have its order book",
                    coin_a, coin_b
                )
            }
            Self::InvalidSymbol { symbol, pair } => {
                write!(f, "symbol {} does not name a side of pair {}", symbol, pair)
            }
            Self::Order {
                side,
                asset,
                symbol,
                source,
            } => {
                write!(
                    f,
                    "error {} was caught while attempting to {} {} at {} market order",
                    source, side, asset, symbol
                )
            }
        }
    }
}
