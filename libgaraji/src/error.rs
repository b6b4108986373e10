//! Error types for Garaji

use thiserror::Error;

pub type Result<T> = std::result::Result<T, GarajiError>;

#[derive(Error, Debug)]
pub enum GarajiError {
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("Booking error: {0}")]
    Booking(#[from] BookingError),
}

impl GarajiError {
    /// Returns the appropriate exit code for this error
    pub fn exit_code(&self) -> i32 {
        match self {
            GarajiError::Booking(BookingError::UnknownListing(_)) => 3,
            GarajiError::Booking(BookingError::ListingUnavailable(_)) => 2,
            GarajiError::Config(_) => 1,
        }
    }
}

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    ReadError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Missing required field: {0}")]
    MissingField(String),
}

#[derive(Error, Debug, Clone)]
pub enum BookingError {
    #[error("No listing with id: {0}")]
    UnknownListing(String),

    #[error("Listing is not available: {0}")]
    ListingUnavailable(String),
}
