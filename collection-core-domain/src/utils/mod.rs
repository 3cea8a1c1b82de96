use serde::Serialize;
use std::hash::Hasher;
use twox_hash::XxHash64;

/// Stable i64 hash of any serializable value.
///
/// Used to fold query-filter objects into cache keys: CBOR gives a
/// deterministic byte representation and XxHash64 with a fixed seed keeps
/// the hash identical across runs, so a repeated filtered read lands on the
/// same cache entry.
pub fn hash_as_i64<T: Serialize>(data: &T) -> Result<i64, String> {
    let mut hasher = XxHash64::with_seed(0);
    let mut cbor = Vec::new();
    ciborium::ser::into_writer(data, &mut cbor)
        .map_err(|e| format!("Failed to serialize filter for hashing: {e}"))?;
    hasher.write(&cbor);
    Ok(hasher.finish() as i64)
}
