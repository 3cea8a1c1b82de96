pub mod create;
pub mod create_batch;
pub mod find_by_id;
pub mod list;
pub mod update;

// Re-exports
pub use create::*;
pub use create_batch::*;
pub use find_by_id::*;
pub use list::*;
pub use update::*;
