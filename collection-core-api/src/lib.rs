pub mod error;
pub mod query;

pub use error::*;
pub use query::*;
