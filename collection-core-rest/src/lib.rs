pub mod cache;
pub mod client;
pub mod repository;
pub mod rest_repositories;
pub mod session;
pub mod transport;

pub use client::RestClient;
pub use rest_repositories::RestRepositories;
pub use session::AuthSession;
pub use transport::Transport;

#[cfg(test)]
pub mod test_helper;
