pub mod client;
pub mod error;

use serde::{Deserialize, Serialize};

use self::error::TradeError;
use crate::{book::Pair, common::time::timestamp_millis, noun::*};

// Ordered asset tuple, the first element is the asset being disposed of
#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TradeSymbol(pub Asset, pub Asset);

impl std::fmt::Display for TradeSymbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.0, self.1)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Deserialize, Serialize)]
pub enum TradeSide {
    /// Dispose of the base asset
    Selling,

    /// Acquire the base asset with the quote asset
    Buying,
}

impl TradeSide {
    // Trade direction from the first symbol element, which must name a pair side
    pub fn decide(symbol: &TradeSymbol, pair: &Pair) -> Result<Self, TradeError> {
        if symbol.0 == *pair.base() {
            return Ok(Self::Selling);
        }

        if symbol.0 == *pair.quote() {
            return Ok(Self::Buying);
        }

        Err(TradeError::InvalidSymbol {
            symbol: symbol.clone(),
            pair: pair.symbol(),
        })
    }
}

impl std::fmt::Display for TradeSide {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Selling => write!(f, "sell"),
            Self::Buying => write!(f, "buy"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TradeSelling {
    quantity: Quantity,
    base: Asset,
    income: Amount,
    quote: Asset,
    timestamp: i64,
}

impl TradeSelling {
    pub fn new(quantity: Quantity, base: Asset, income: Amount, quote: Asset) -> Self {
        Self {
            quantity,
            base,
            income,
            quote,
            timestamp: timestamp_millis(),
        }
    }

    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    pub fn base(&self) -> &Asset {
        &self.base
    }

    pub fn income(&self) -> &Amount {
        &self.income
    }

    pub fn quote(&self) -> &Asset {
        &self.quote
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl std::fmt::Display for TradeSelling {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "sold {} {} and got {} {}",
            self.quantity.normalize(),
            self.base,
            self.income.normalize(),
            self.quote
        )
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub struct TradeBuying {
    quantity: Quantity,
    base: Asset,
    spent: Amount,
    quote: Asset,
    timestamp: i64,
}

impl TradeBuying {
    pub fn new(quantity: Quantity, base: Asset, spent: Amount, quote: Asset) -> Self {
        Self {
            quantity,
            base,
            spent,
            quote,
            timestamp: timestamp_millis(),
        }
    }

    pub fn quantity(&self) -> &Quantity {
        &self.quantity
    }

    pub fn base(&self) -> &Asset {
        &self.base
    }

    pub fn spent(&self) -> &Amount {
        &self.spent
    }

    pub fn quote(&self) -> &Asset {
        &self.quote
    }

    pub fn timestamp(&self) -> i64 {
        self.timestamp
    }
}

impl std::fmt::Display for TradeBuying {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "bought {} {} for max {} {}",
            self.quantity.normalize(),
            self.base,
            self.spent.normalize(),
            self.quote
        )
    }
}

#[derive(Clone, Debug, PartialEq, Deserialize, Serialize)]
pub enum TradeOutcome {
    Buying(TradeBuying),
    Selling(TradeSelling),
}

impl std::fmt::Display for TradeOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Buying(v) => write!(f, "{}", v),
            Self::Selling(v) => write!(f, "{}", v),
        }
    }
}
