//! Configuration constants for fantree.

/// Smallest accepted order (minimum degree `t`).
///
/// An order-`t` node holds at most `2t` slots, one of which is the sentinel,
/// so `t = 1` is the smallest order that still leaves room for a real key.
/// [`BTree::new`](crate::BTree::new) rejects anything below this.
pub const MIN_ORDER: usize = 1;

/// Maximum number of slots a node of the given order may hold.
///
/// The slot count includes the sentinel, so a node is *full* when it reaches
/// exactly this many slots.
///
/// # Capacity Math
/// With minimum degree `t`:
/// - slot capacity: `2t` (sentinel included)
/// - real keys: at most `2t - 1` (see [`max_keys`])
///
/// A split consumes the first `t` slots of a full node: `t - 1` move to the
/// new sibling and the `t`-th (the median) is promoted, leaving `t` behind.
#[inline]
pub const fn slot_capacity(order: usize) -> usize {
    2 * order
}

/// Maximum number of real keys a node of the given order may hold.
///
/// One of the `2t` slots is always the sentinel, leaving `2t - 1` for keys.
#[inline]
pub const fn max_keys(order: usize) -> usize {
    2 * order - 1
}
