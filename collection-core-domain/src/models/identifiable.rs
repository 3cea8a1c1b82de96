/// Entities addressable by a backend-assigned surrogate id.
pub trait Identifiable {
    fn get_id(&self) -> i64;
}
