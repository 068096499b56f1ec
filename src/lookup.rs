//! Keyed indexing of record sequences

use std::{
    collections::{hash_map, HashMap},
    fmt::{Debug, Display},
    hash::Hash,
};
use thiserror::Error;

/// Two records were indexed under the same key
#[derive(Clone, Debug, Eq, Error, Hash, PartialEq)]
#[error("key {key} is used by more than one record")]
pub struct DuplicateKey<K> {
    /// The key that was seen twice
    pub key: K,
}

/// Index records by a key extracted from each of them
///
/// Keys must be unique: a second record with an already indexed key is an
/// error rather than silently replacing the first one.
pub fn build_lookup<K, T>(
    records: impl IntoIterator<Item = T>,
    mut key: impl FnMut(&T) -> K,
) -> Result<HashMap<K, T>, DuplicateKey<K>>
where
    K: Debug + Display + Eq + Hash,
{
    let records = records.into_iter();
    let mut lookup = HashMap::with_capacity(records.size_hint().0);
    for record in records {
        match lookup.entry(key(&record)) {
            hash_map::Entry::Occupied(o) => {
                return Err(DuplicateKey {
                    key: o.remove_entry().0,
                })
            }
            hash_map::Entry::Vacant(v) => {
                v.insert(record);
            }
        }
    }
    Ok(lookup)
}
