#[derive(Debug)]
pub enum ApiError {
    Client(String),
    Decimal(String),
    Response(String),
}

impl std::error::Error for ApiError {}

impl std::fmt::Display for ApiError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Client(e) => write!(f, "{}", e),
            Self::Decimal(e) => write!(f, "{} to decimal error", e),
            Self::Response(e) => write!(f, "{}", e),
        }
    }
}
