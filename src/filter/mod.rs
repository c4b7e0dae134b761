pub mod error;
pub mod filter;
pub mod order;

pub use error::FilterError;
pub use filter::InstructorFilter;
pub use order::{OrderBy, SortDirection, SortKey};
