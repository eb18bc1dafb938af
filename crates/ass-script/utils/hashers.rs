//! Hash map construction with the crate-wide hasher
//!
//! Style lookup by name happens once per dialogue line, so the table uses
//! ahash with random seeds rather than SipHash.

use ahash::RandomState;

/// `HashMap` keyed with the crate-wide ahash hasher
pub type HashMap<K, V> = std::collections::HashMap<K, V, RandomState>;

/// Create a new `HashMap` with the crate-wide hasher
///
/// # Example
///
/// ```rust
/// use ass_script::utils::hashers::create_hash_map;
///
/// let mut map = create_hash_map::<String, i32>();
/// map.insert("key".to_string(), 42);
/// ```
#[must_use]
pub fn create_hash_map<K, V>() -> HashMap<K, V> {
    HashMap::with_hasher(RandomState::new())
}
