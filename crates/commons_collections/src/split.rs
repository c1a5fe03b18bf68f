//! List partitioning.
//!
//! The chunk size is computed as `max(len / (sub_list_number - 1), 1)`.
//! Note the divisor: it is `sub_list_number - 1`, not `sub_list_number`, so
//! the number of chunks produced is NOT guaranteed to equal
//! `sub_list_number`. Splitting ten elements three ways yields two chunks of
//! five; splitting seven elements four ways yields four chunks
//! (`[1, 2], [3, 4], [5, 6], [7]`). Callers depend on this exact partition, so
//! it must not be "corrected".

/// Returns the chunk size [`split_list`] uses for a list of `len` elements.
///
/// For `sub_list_number <= 1` the list is kept whole and `len` is returned.
#[must_use]
pub fn split_chunk_size(len: usize, sub_list_number: usize) -> usize {
    if sub_list_number <= 1 {
        return len;
    }
    (len / (sub_list_number - 1)).max(1)
}

/// Splits a list into contiguous chunks.
///
/// - `None` or an empty list yields no chunks.
/// - `sub_list_number <= 1` yields the input vector itself as the only chunk;
///   it is moved, not copied.
/// - Otherwise the list is cut into chunks of [`split_chunk_size`] elements,
///   the last one possibly shorter. See the module docs for why the chunk
///   count may differ from `sub_list_number`.
///
/// Elements are moved into the chunks, so `T` need not be `Clone`.
///
/// # Example
///
/// ```
/// use commons_collections::split_list;
///
/// let chunks = split_list(Some((1..=7).collect::<Vec<_>>()), 4);
/// assert_eq!(chunks, vec![vec![1, 2], vec![3, 4], vec![5, 6], vec![7]]);
/// ```
#[must_use]
pub fn split_list<T>(list: Option<Vec<T>>, sub_list_number: usize) -> Vec<Vec<T>> {
    let Some(list) = list else {
        return Vec::new();
    };
    if list.is_empty() {
        return Vec::new();
    }
    if sub_list_number <= 1 {
        return vec![list];
    }

    let chunk_size = split_chunk_size(list.len(), sub_list_number);
    let mut chunks = Vec::with_capacity(list.len().div_ceil(chunk_size));
    let mut items = list.into_iter();
    loop {
        let chunk: Vec<T> = items.by_ref().take(chunk_size).collect();
        if chunk.is_empty() {
            break;
        }
        chunks.push(chunk);
    }
    chunks
}

/// Splits a borrowed slice the same way as [`split_list`], copying each chunk.
#[must_use]
pub fn split_slice<T: Clone>(slice: &[T], sub_list_number: usize) -> Vec<Vec<T>> {
    if slice.is_empty() {
        return Vec::new();
    }
    let chunk_size = split_chunk_size(slice.len(), sub_list_number);
    slice.chunks(chunk_size).map(<[T]>::to_vec).collect()
}
