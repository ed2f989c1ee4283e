use thiserror::Error;

#[derive(Debug, Error)]
pub enum Error {
    #[error("Record {index} has no name")]
    MissingName { index: usize },

    #[error("Record '{name}': rating '{value}' is not a number")]
    UnparseableRating { name: String, value: String },

    #[error("Record '{name}': rating {value} is outside 0.0..=5.0")]
    RatingOutOfRange { name: String, value: f64 },

    #[error("Invalid record payload: {0}")]
    Payload(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
