// handlers/instructor/mod.rs - Instructor resource handlers

pub mod create; // POST /instructor
pub mod delete; // DELETE /instructor/:id
pub mod list; // GET /instructor
pub mod show; // GET /instructor/:id
pub mod update; // PUT /instructor/:id

pub use create::instructor_create;
pub use delete::instructor_delete;
pub use list::instructor_list;
pub use show::instructor_show;
pub use update::instructor_update;
