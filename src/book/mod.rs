use crate::noun::*;

#[derive(Debug)]
pub struct Pair {
    base: Asset,
    quote: Asset,

    base_precision: Precision,
    quote_precision: Precision,
}

impl Pair {
    pub fn new(
        base: Asset,
        quote: Asset,
        base_precision: Precision,
        quote_precision: Precision,
    ) -> Self {
        assert_ne!(base, quote, "pair assets must differ");

        Self {
            base,
            quote,
            base_precision,
            quote_precision,
        }
    }

    pub fn base(&self) -> &Asset {
        &self.base
    }

    pub fn quote(&self) -> &Asset {
        &self.quote
    }

    // The exchange symbol of the pair, base then quote
    pub fn symbol(&self) -> Symbol {
        format!("{}{}", self.base, self.quote)
    }

    // Match the two assets against the pair in either order
    pub fn is_between(&self, coin_a: &Asset, coin_b: &Asset) -> bool {
        (self.base == *coin_a && self.quote == *coin_b)
            || (self.quote == *coin_a && self.base == *coin_b)
    }

    // Accurate the quantity to meet the base asset precision requirements
    pub fn transaction_base_quantity(&self, quantity: &Quantity) -> Quantity {
        quantity.trunc_with_scale(self.base_precision)
    }

    // Accurate the amount to meet the quote asset precision requirements
    pub fn transaction_quote_amount(&self, amount: &Amount) -> Amount {
        amount.trunc_with_scale(self.quote_precision)
    }
}

pub struct OrderBook {
    pair: Pair,
}

impl OrderBook {
    pub fn new(pair: Pair) -> Self {
        Self { pair }
    }

    pub fn pair(&self) -> &Pair {
        &self.pair
    }
}
