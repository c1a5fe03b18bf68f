//! Null-preserving conversions between collection shapes.
//!
//! Every function maps `None` to `None` and `Some(source)` to `Some(target)`.
//! An empty source gives an empty target, so callers must match on the
//! `Option` rather than test the length.

use std::collections::HashSet;
use std::hash::Hash;

/// Copies the elements of a collection into a set, collapsing duplicates.
///
/// ```
/// use commons_collections::to_set;
///
/// let set = to_set(Some(vec![1, 1, 2])).unwrap();
/// assert_eq!(set.len(), 2);
/// ```
#[must_use]
pub fn to_set<I>(collection: Option<I>) -> Option<HashSet<I::Item>>
where
    I: IntoIterator,
    I::Item: Eq + Hash,
{
    collection.map(|c| c.into_iter().collect())
}

/// Copies the elements of a collection into a list, keeping iteration order.
#[must_use]
pub fn to_list<I>(collection: Option<I>) -> Option<Vec<I::Item>>
where
    I: IntoIterator,
{
    collection.map(|c| c.into_iter().collect())
}

/// Returns a borrowed view over the values of a map. Keys are discarded and
/// nothing is allocated.
#[must_use]
pub fn map_values_to_collection<'a, M, K, V>(
    map: Option<&'a M>,
) -> Option<impl Iterator<Item = &'a V>>
where
    &'a M: IntoIterator<Item = (&'a K, &'a V)>,
    K: 'a,
    V: 'a,
{
    map.map(|m| m.into_iter().map(|(_, value)| value))
}

/// Copies the values of a map into a list.
///
/// Pass the map by reference to collect references to its values, or by
/// value to take ownership of them.
#[must_use]
pub fn map_values_to_list<M, K, V>(map: Option<M>) -> Option<Vec<V>>
where
    M: IntoIterator<Item = (K, V)>,
{
    map.map(|m| m.into_iter().map(|(_, value)| value).collect())
}

/// Copies the values of a map into a set, collapsing equal values.
#[must_use]
pub fn map_values_to_set<M, K, V>(map: Option<M>) -> Option<HashSet<V>>
where
    M: IntoIterator<Item = (K, V)>,
    V: Eq + Hash,
{
    map.map(|m| m.into_iter().map(|(_, value)| value).collect())
}

/// Copies each element of a slice into a set. Order is not preserved.
#[must_use]
pub fn array_to_set<T>(objects: Option<&[T]>) -> Option<HashSet<T>>
where
    T: Clone + Eq + Hash,
{
    objects.map(|items| items.iter().cloned().collect())
}

/// Copies each element of a slice into a list, in slice order.
///
/// An empty slice gives `Some` empty list; only `None` gives `None`.
#[must_use]
pub fn array_to_list<T: Clone>(objects: Option<&[T]>) -> Option<Vec<T>> {
    objects.map(<[T]>::to_vec)
}
