use std::cmp::Ordering;

/// A strict total order over `Item` together with its least and greatest
/// values.
///
/// A `BoundedOrder` is an *instance value*: it is built once by the caller
/// and passed by reference into every function that needs it. Nothing in
/// this crate registers or resolves instances behind the caller's back, and
/// several distinct instances may exist for the same item type.
///
/// Implementations must guarantee `bottom <= x <= top` for every `x` in the
/// domain, and in particular `bottom <= top`.
pub trait BoundedOrder {
	type Item;

	fn compare(&self, a: &Self::Item, b: &Self::Item) -> Ordering;

	/// The least value of the domain.
	fn bottom(&self) -> Self::Item;

	/// The greatest value of the domain.
	fn top(&self) -> Self::Item;
}
