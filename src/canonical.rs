use std::{cmp::Ordering, marker::PhantomData};

use crate::{util::Ranked, BoundedOrder, Enum};

/// The canonical enumeration instance of a [`Ranked`] type, as a zero-sized
/// value.
///
/// ```
/// use finite_enum::{from_to, Canonical};
///
/// let ints = Canonical::<i32>::new();
/// let range: Vec<i32> = from_to(&ints, 0, &3).collect();
/// assert_eq!(range, [0, 1, 2, 3]);
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct Canonical<T>(PhantomData<T>);

impl<T> Canonical<T> {
	pub const fn new() -> Canonical<T> {
		Canonical(PhantomData)
	}
}

impl<T: Ranked + Ord> BoundedOrder for Canonical<T> {
	type Item = T;

	fn compare(&self, a: &T, b: &T) -> Ordering {
		a.cmp(b)
	}

	fn bottom(&self) -> T {
		T::MIN
	}

	fn top(&self) -> T {
		T::MAX
	}
}

impl<T: Ranked + Ord> Enum for Canonical<T> {
	fn succ(&self, value: &T) -> Option<T> {
		value.succ()
	}

	fn pred(&self, value: &T) -> Option<T> {
		value.pred()
	}

	fn to_enum(&self, index: i64) -> Option<T> {
		T::from_rank(index)
	}

	fn from_enum(&self, value: &T) -> i64 {
		value.rank()
	}

	fn cardinality(&self) -> i64 {
		T::CARDINALITY
	}
}
