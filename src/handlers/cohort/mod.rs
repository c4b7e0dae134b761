// handlers/cohort/mod.rs - Cohort resource handlers

pub mod create; // POST /cohort
pub mod delete; // DELETE /cohort/:id
pub mod list; // GET /cohort
pub mod show; // GET /cohort/:id
pub mod update; // PUT /cohort/:id

pub use create::cohort_create;
pub use delete::cohort_delete;
pub use list::cohort_list;
pub use show::cohort_show;
pub use update::cohort_update;
