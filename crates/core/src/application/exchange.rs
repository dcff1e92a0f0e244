// Exchange operations: duplicating vs. transferring

use crate::domain::ExchangeStrategy;
use crate::error::{ExchangeError, Result};
use std::any::type_name;
use tracing::{debug, trace, warn};

/// Exchange `a` and `b` by duplicating their contents
///
/// Steps:
/// 1. The temporary is a full copy of `a`
/// 2. `a` is overwritten with a copy of `b`
/// 3. `b` is overwritten with a copy of the temporary
///
/// Three duplications, each proportional to the value's size. `clone_from`
/// lets the destination reuse its existing allocation where the type supports it.
///
/// # Example
/// ```
/// let mut a = vec![1, 2, 3];
/// let mut b = vec![4, 5];
/// exchange_core::exchange_by_copy(&mut a, &mut b);
/// assert_eq!(a, [4, 5]);
/// assert_eq!(b, [1, 2, 3]);
/// ```
pub fn exchange_by_copy<T: Clone>(a: &mut T, b: &mut T) {
    trace!(
        strategy = %ExchangeStrategy::Duplicating,
        value_type = type_name::<T>(),
        "Exchanging values"
    );

    let tmp = a.clone();
    a.clone_from(b);
    b.clone_from(&tmp);
}

/// Exchange `a` and `b` by transferring ownership of their contents
///
/// The temporary takes over `a`'s resources, `b`'s resources move into `a`,
/// and the temporary's move into `b`. Nothing is cloned or dropped; each step
/// is a constant-time hand-over regardless of how much data the value owns.
/// The moved-from state exists only inside `mem::swap` and is never observable.
///
/// # Example
/// ```
/// let mut a: Vec<i32> = vec![];
/// let mut b = vec![7];
/// exchange_core::exchange_by_move(&mut a, &mut b);
/// assert_eq!(a, [7]);
/// assert!(b.is_empty());
/// ```
pub fn exchange_by_move<T>(a: &mut T, b: &mut T) {
    trace!(
        strategy = %ExchangeStrategy::Transferring,
        value_type = type_name::<T>(),
        "Exchanging values"
    );

    std::mem::swap(a, b);
}

/// Exchange slots `i` and `j` of `slice` by duplication
///
/// `i == j` is a self-swap and leaves the slice untouched.
///
/// # Errors
/// `ExchangeError::IndexOutOfBounds` for the first index past the end of the slice.
pub fn exchange_at_by_copy<T: Clone>(slice: &mut [T], i: usize, j: usize) -> Result<()> {
    if let Some((a, b)) = disjoint_pair(slice, i, j)? {
        exchange_by_copy(a, b);
    }
    Ok(())
}

/// Exchange slots `i` and `j` of `slice` by ownership transfer
///
/// `i == j` is a self-swap and leaves the slice untouched.
///
/// # Errors
/// `ExchangeError::IndexOutOfBounds` for the first index past the end of the slice.
pub fn exchange_at_by_move<T>(slice: &mut [T], i: usize, j: usize) -> Result<()> {
    if let Some((a, b)) = disjoint_pair(slice, i, j)? {
        exchange_by_move(a, b);
    }
    Ok(())
}

/// Borrow slots `i` and `j` mutably at the same time
///
/// Returns `None` when both indices name the same slot.
fn disjoint_pair<T>(slice: &mut [T], i: usize, j: usize) -> Result<Option<(&mut T, &mut T)>> {
    let len = slice.len();
    for index in [i, j] {
        if index >= len {
            warn!(index, len, "Rejected exchange index");
            return Err(ExchangeError::IndexOutOfBounds { index, len });
        }
    }

    if i == j {
        debug!(index = i, "Self-swap, nothing to exchange");
        return Ok(None);
    }

    let (lo, hi) = if i < j { (i, j) } else { (j, i) };
    let (head, tail) = slice.split_at_mut(hi);
    let (low, high) = (&mut head[lo], &mut tail[0]);

    if i < j {
        Ok(Some((low, high)))
    } else {
        Ok(Some((high, low)))
    }
}
