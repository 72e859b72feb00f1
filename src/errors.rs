pub type Result<T> = std::result::Result<T, Error>;

#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// The period token is not one of the supported chart windows.
    #[error("Unknown period token: {0} (expected 1D, 1W, 1M, 3M, 1Y or 2Y)")]
    UnknownPeriod(String),

    /// The price is not positive and finite. Generators require a usable price.
    #[error("Price must be positive and finite (got: {0})")]
    InvalidPrice(f64),

    /// A candle field was not set before building.
    #[error("Missing candle field: {0}")]
    MissingField(&'static str),

    /// The candle high does not dominate its body.
    #[error("High {0} must be at least max(open, close) (open: {1}, close: {2})")]
    HighBelowBody(f64, f64, f64),

    /// The candle low does not sit under its body.
    #[error("Low {0} must be at most min(open, close) (open: {1}, close: {2})")]
    LowAboveBody(f64, f64, f64),

    /// The candle series provided is empty. Drawing requires at least one candle.
    #[error("Candle series is empty: drawing requires at least one candle")]
    EmptySeries,

    /// I/O error occurred.
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error occurred.
    #[cfg(feature = "serde")]
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),

    /// The requested draw output is not implemented.
    #[cfg(feature = "draws")]
    #[error("Unsupported draw output: {0}")]
    Unsupported(&'static str),

    /// Chart backend error occurred.
    #[cfg(feature = "draws")]
    #[error("Plotters error: {0}")]
    Plotters(String),
}
