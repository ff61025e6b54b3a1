//! Pure splice functions behind task moves.
//!
//! Both functions take the current sequences by reference and return fresh
//! ones; inputs are never modified. Indices are zero-based. A destination
//! index equal to the sequence length appends, zero prepends.

/// A splice index that does not fit the sequence it addresses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ReorderError {
    /// The removal index does not address an element of the source.
    #[error("source index {index} out of range (len {len})")]
    Source {
        /// Index supplied.
        index: usize,
        /// Length of the source sequence.
        len: usize,
    },
    /// The insertion index lies past the end of the destination.
    #[error("destination index {index} out of range (max {len})")]
    Destination {
        /// Index supplied.
        index: usize,
        /// Largest valid insertion index.
        len: usize,
    },
}

/// Moves the element at `from` to `to` within one sequence.
///
/// `to` is interpreted against the sequence after removal, so valid values
/// are `0..=len - 1`. Moving an element past others shifts them by one.
/// `from == to` returns an unchanged copy without splicing.
///
/// # Errors
///
/// Returns [`ReorderError::Source`] if `from` is not an index of `items`,
/// or [`ReorderError::Destination`] if `to` exceeds the post-removal length.
pub fn reorder_within<T: Clone>(items: &[T], from: usize, to: usize) -> Result<Vec<T>, ReorderError> {
    if from >= items.len() {
        return Err(ReorderError::Source {
            index: from,
            len: items.len(),
        });
    }
    let remaining = items.len() - 1;
    if to > remaining {
        return Err(ReorderError::Destination {
            index: to,
            len: remaining,
        });
    }
    if from == to {
        return Ok(items.to_vec());
    }

    let mut next = items.to_vec();
    let moved = next.remove(from);
    next.insert(to, moved);
    Ok(next)
}

/// Moves the element at `from` in `source` to position `to` in `destination`.
///
/// `to` is interpreted against the destination as given, which the removal
/// never touches, so valid values are `0..=destination.len()`.
///
/// Returns the new `(source, destination)` pair.
///
/// # Errors
///
/// Returns [`ReorderError::Source`] if `from` is not an index of `source`,
/// or [`ReorderError::Destination`] if `to` exceeds `destination.len()`.
pub fn transfer<T: Clone>(
    source: &[T],
    from: usize,
    destination: &[T],
    to: usize,
) -> Result<(Vec<T>, Vec<T>), ReorderError> {
    if from >= source.len() {
        return Err(ReorderError::Source {
            index: from,
            len: source.len(),
        });
    }
    if to > destination.len() {
        return Err(ReorderError::Destination {
            index: to,
            len: destination.len(),
        });
    }

    let mut next_source = source.to_vec();
    let moved = next_source.remove(from);

    let mut next_destination = Vec::with_capacity(destination.len() + 1);
    next_destination.extend_from_slice(&destination[..to]);
    next_destination.push(moved);
    next_destination.extend_from_slice(&destination[to..]);

    Ok((next_source, next_destination))
}
