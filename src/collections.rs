use std::hash::BuildHasherDefault;

use indexmap::IndexMap;
use rustc_hash::FxHasher;

/// Insertion-ordered map with fast hashing.
/// Insertion order is what makes search tie-breaks deterministic for a
/// fixed edge input order.
pub(crate) type FxIndexMap<K, V> = IndexMap<K, V, BuildHasherDefault<FxHasher>>;
