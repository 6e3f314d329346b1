use thiserror::Error;

#[derive(Error, Debug)]
pub enum DashboardError {
    #[error("Content of type {type_name} does not describe an item (id, text and icons are required)")]
    MissingItemMetadata { type_name: &'static str },

    #[error("A logger was already installed")]
    LoggerAlreadySet(#[from] log::SetLoggerError),
}

// Create a type alias for convenience
pub type Result<T> = std::result::Result<T, DashboardError>;
