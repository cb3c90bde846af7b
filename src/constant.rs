use std::cmp::Ordering;

use thiserror::Error;

use crate::{BoundedOrder, Enum};

#[derive(Debug, Error, PartialEq, Eq)]
pub enum DomainError {
	#[error("a constant enumeration needs at least one value")]
	EmptyDomain,
}

/// An [`Enum`] instance synthesized from an explicit value list.
///
/// The list is assumed to be *exactly* the full domain, in ascending order;
/// neither assumption is verified. Positional operations (`succ`, `pred`,
/// `to_enum`, `from_enum`) follow the list in the order it was given, while
/// `bottom` and `top` come from a copy sorted at construction — the two
/// views agree only when the input was already ascending.
///
/// ```
/// use finite_enum::{BoundedOrder, ConstEnum, Enum};
///
/// let bools = ConstEnum::new(vec![false, true]).unwrap();
/// assert_eq!(bools.from_enum(&true), 1);
/// assert_eq!(bools.succ(&false), Some(true));
/// assert_eq!(bools.top(), true);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstEnum<A> {
	items: Vec<A>,
	bottom: A,
	top: A,
}

impl<A: Ord + Clone> ConstEnum<A> {
	/// Builds the instance over `items`. The empty list has no bounds and
	/// is rejected.
	pub fn new(items: Vec<A>) -> Result<ConstEnum<A>, DomainError> {
		let mut sorted = items.clone();
		sorted.sort();
		match (sorted.first(), sorted.last()) {
			(Some(bottom), Some(top)) => Ok(ConstEnum {
				bottom: bottom.clone(),
				top: top.clone(),
				items,
			}),
			_ => Err(DomainError::EmptyDomain),
		}
	}

	/// The declared domain, in the order it was given.
	pub fn values(&self) -> &[A] {
		&self.items
	}

	fn position(&self, value: &A) -> Option<usize> {
		self.items.iter().position(|x| x.cmp(value) == Ordering::Equal)
	}
}

impl<A: Ord + Clone> BoundedOrder for ConstEnum<A> {
	type Item = A;

	fn compare(&self, a: &A, b: &A) -> Ordering {
		a.cmp(b)
	}

	fn bottom(&self) -> A {
		self.bottom.clone()
	}

	fn top(&self) -> A {
		self.top.clone()
	}
}

impl<A: Ord + Clone> Enum for ConstEnum<A> {
	fn succ(&self, value: &A) -> Option<A> {
		let i = self.position(value)?;
		self.items.get(i + 1).cloned()
	}

	fn pred(&self, value: &A) -> Option<A> {
		let i = self.position(value)?;
		self.items.get(i.checked_sub(1)?).cloned()
	}

	fn to_enum(&self, index: i64) -> Option<A> {
		let i = usize::try_from(index).ok()?;
		self.items.get(i).cloned()
	}

	/// # Panics
	///
	/// Panics when `value` is not part of the declared domain. `from_enum`
	/// returns a bare index, so an out-of-domain value is a caller contract
	/// violation with no channel left to report it.
	fn from_enum(&self, value: &A) -> i64 {
		match self.position(value) {
			Some(i) => i as i64,
			None => panic!("ConstEnum::from_enum: value is not in the enumerated domain"),
		}
	}

	fn cardinality(&self) -> i64 {
		self.items.len() as i64
	}
}
