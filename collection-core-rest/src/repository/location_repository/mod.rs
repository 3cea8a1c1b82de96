mod repo_impl;
mod resolve;

pub use repo_impl::LocationRepositoryImpl;
