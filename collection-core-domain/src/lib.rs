pub mod codec;
pub mod models;
pub mod repository;
pub mod utils;

pub use models::identifiable::Identifiable;
