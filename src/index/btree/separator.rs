//! Separator type: a real key or the unbounded sentinel.

use std::cmp::Ordering;
use std::fmt;

/// A value in a node's slot sequence: either a real key or the sentinel.
///
/// Every node carries exactly one [`Separator::Unbounded`] slot, which
/// compares greater than every real key and therefore always sorts last. In
/// an internal node the sentinel supplies the rightmost child pointer, which
/// is what lets a node's child list stay the same length as its slot list.
///
/// Using a tagged variant instead of a magic value (e.g. `f64::INFINITY`)
/// keeps the tree generic over any `Ord` key type.
///
/// # Ordering
/// The derived order compares `Key` contents and places `Unbounded` above
/// every `Key`:
/// ```
/// use fantree::Separator;
///
/// assert!(Separator::Key(3) < Separator::Key(7));
/// assert!(Separator::Key(i32::MAX) < Separator::Unbounded);
/// ```
#[derive(Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum Separator<K> {
    /// A real key supplied by a caller.
    Key(K),
    /// The catch-all upper bound; greater than every real key.
    Unbounded,
}

impl<K> Separator<K> {
    /// True if this is the sentinel.
    #[inline]
    pub fn is_unbounded(&self) -> bool {
        matches!(self, Separator::Unbounded)
    }

    /// The real key, if any.
    #[inline]
    pub fn as_key(&self) -> Option<&K> {
        match self {
            Separator::Key(key) => Some(key),
            Separator::Unbounded => None,
        }
    }
}

impl<K: Ord> Separator<K> {
    /// Compare this separator against a real key.
    ///
    /// `Unbounded` is greater than any key, so a scan for "first separator
    /// strictly greater than `key`" always terminates at the sentinel.
    #[inline]
    pub fn cmp_key(&self, key: &K) -> Ordering {
        match self {
            Separator::Key(own) => own.cmp(key),
            Separator::Unbounded => Ordering::Greater,
        }
    }
}

// Hand-written so structural dumps stay compact: `3` instead of `Key(3)`,
// `inf` instead of `Unbounded`.
impl<K: fmt::Debug> fmt::Debug for Separator<K> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Separator::Key(key) => key.fmt(f),
            Separator::Unbounded => f.write_str("inf"),
        }
    }
}
