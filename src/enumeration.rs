use crate::BoundedOrder;

/// A finite, ordered, bounded domain with successor/predecessor navigation
/// and a zero-based integer indexing of its members.
///
/// Like [`BoundedOrder`], an `Enum` is an instance value passed explicitly
/// into the algorithms of this crate. Instances are either handwritten
/// (see [`Canonical`](crate::Canonical)) or synthesized at runtime from an
/// explicit value list (see [`ConstEnum`](crate::ConstEnum)).
///
/// Implementations must uphold the following laws:
///
/// - *Retraction*: `pred(succ(x)) == Some(x)` and `succ(pred(x)) == Some(x)`
///   wherever both sides are defined.
/// - *Non-skipping*: walking `succ` from `bottom` visits every member of
///   the domain exactly once and ends at `top`.
/// - `to_enum` and `from_enum` are mutual inverses on `0..cardinality`.
/// - `from_enum(bottom) == 0` and `from_enum(top) == cardinality - 1`.
pub trait Enum: BoundedOrder {
	/// The next value up. `None` exactly at [`top`](BoundedOrder::top).
	fn succ(&self, value: &Self::Item) -> Option<Self::Item>;

	/// The next value down. `None` exactly at [`bottom`](BoundedOrder::bottom).
	fn pred(&self, value: &Self::Item) -> Option<Self::Item>;

	/// The member at zero-based index `index`, or `None` outside
	/// `0..cardinality`.
	fn to_enum(&self, index: i64) -> Option<Self::Item>;

	/// The zero-based index of `value`. Inverse of [`to_enum`](Enum::to_enum)
	/// on valid values.
	fn from_enum(&self, value: &Self::Item) -> i64;

	/// The number of members in the domain.
	///
	/// The default implementation is [`default_cardinality`], which walks
	/// the whole `succ` chain. Instances that know their size should
	/// override it with an exact, cheap answer.
	fn cardinality(&self) -> i64 {
		default_cardinality(self)
	}
}

/// Counts the domain of `context` by walking `succ` from `bottom` until it
/// returns `None`.
///
/// This costs one `succ` call per member and is meant as a correctness
/// fallback only; do not use it on large domains such as the full integer
/// or character types.
pub fn default_cardinality<E: Enum + ?Sized>(context: &E) -> i64 {
	let mut count = 1;
	let mut cursor = context.bottom();
	while let Some(next) = context.succ(&cursor) {
		count += 1;
		cursor = next;
	}
	count
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::Canonical;

	#[test]
	fn bool_cardinality() {
		assert_eq!(default_cardinality(&Canonical::<bool>::new()), 2);
	}

	#[test]
	fn unit_cardinality() {
		assert_eq!(default_cardinality(&Canonical::<()>::new()), 1);
	}

	#[test]
	fn fallback_matches_exact() {
		let context = Canonical::<u8>::new();
		assert_eq!(default_cardinality(&context), context.cardinality());
		assert_eq!(context.cardinality(), 256);
	}
}
