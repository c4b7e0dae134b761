use thiserror::Error;

#[derive(Error, Debug)]
pub enum FilterError {
    #[error("Unknown sort key: {0}")]
    UnknownSortKey(String),

    #[error("Invalid sort direction: {0}")]
    InvalidSortDirection(String),

    #[error("Empty sort expression")]
    EmptySortExpression,
}
