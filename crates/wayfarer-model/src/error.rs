use thiserror::Error;

#[derive(Debug, Error)]
pub enum ModelError {
    #[error("traveler name cannot be empty")]
    EmptyTravelerName,
}

pub type Result<T> = std::result::Result<T, ModelError>;
