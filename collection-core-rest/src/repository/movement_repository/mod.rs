mod active;
mod create;
mod finish;
mod list;
mod repo_impl;

pub use repo_impl::MovementRepositoryImpl;
