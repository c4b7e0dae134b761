pub mod cohort;
pub mod instructor;

pub use cohort::{Cohort, CohortInput};
pub use instructor::{Instructor, InstructorInput};
