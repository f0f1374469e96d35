use thiserror::Error;

#[derive(Error, Debug)]
pub enum StoreError {
    #[error("Failed to access recipe store: {0}")]
    Io(#[from] std::io::Error),

    #[error("Failed to serialize recipes: {0}")]
    Serialize(#[from] serde_json::Error),
}

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Invalid recipe: {}", .0.join(" "))]
    Validation(Vec<String>),

    #[error("Please select a rating between 1 and 5 stars.")]
    NoRatingSelected,

    #[error(transparent)]
    Store(#[from] StoreError),
}
