pub mod loan_repository;
pub mod location_repository;
pub mod movement_repository;
pub mod reference_repository;
pub mod shelf_repository;

// Re-exports
pub use loan_repository::LoanRepositoryImpl;
pub use location_repository::LocationRepositoryImpl;
pub use movement_repository::MovementRepositoryImpl;
pub use reference_repository::ReferenceRepository;
pub use shelf_repository::ShelfRepositoryImpl;
