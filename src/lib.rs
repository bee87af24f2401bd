pub mod api;
pub mod book;
pub mod trade;

mod common;

pub mod noun {
    pub use rust_decimal::Decimal;

    pub type Asset = String;
    pub type Symbol = String;
    pub type Price = Decimal;
    pub type Precision = u32;
    pub type Quantity = Decimal;
    pub type Amount = Decimal;
}
