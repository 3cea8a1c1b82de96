mod repo_impl;

pub use repo_impl::ShelfRepositoryImpl;
