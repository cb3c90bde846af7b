//! The laws every `Enum` instance must uphold, checked on the shipped
//! instances and on synthesized ones.

use finite_enum::{
	default_cardinality, universe, up_from_incl, BoundedOrder, Canonical, ConstEnum, Enum,
};
use proptest::prelude::*;

#[test]
fn non_skipping_u8() {
	let context = Canonical::<u8>::new();
	let indices: Vec<i64> = universe(&context).map(|x| context.from_enum(&x)).collect();
	let expected: Vec<i64> = (0..context.cardinality()).collect();
	assert_eq!(indices, expected);
}

#[test]
fn non_skipping_char() {
	let context = Canonical::<char>::new();
	let mut expected = 0;
	for c in universe(&context) {
		assert_eq!(context.from_enum(&c), expected);
		expected += 1;
	}
	assert_eq!(expected, context.cardinality());
}

#[test]
fn succ_chain_is_the_universe() {
	let context = Canonical::<u8>::new();
	let chain: Vec<u8> = up_from_incl(&context, context.bottom()).collect();
	let walked: Vec<u8> = universe(&context).collect();
	assert_eq!(chain, walked);
	assert_eq!(chain.last(), Some(&context.top()));
}

#[test]
fn bounds_take_the_extreme_indices() {
	let context = Canonical::<i16>::new();
	assert_eq!(context.from_enum(&context.bottom()), 0);
	assert_eq!(context.from_enum(&context.top()), context.cardinality() - 1);
}

#[test]
fn fallback_cardinality_agrees() {
	assert_eq!(default_cardinality(&Canonical::<bool>::new()), 2);
	assert_eq!(default_cardinality(&Canonical::<()>::new()), 1);
	let context = Canonical::<u8>::new();
	assert_eq!(default_cardinality(&context), context.cardinality());
}

proptest! {
	#[test]
	fn retraction_u8(x in any::<u8>()) {
		let context = Canonical::<u8>::new();
		if let Some(up) = context.succ(&x) {
			prop_assert_eq!(context.pred(&up), Some(x));
		}
		if let Some(down) = context.pred(&x) {
			prop_assert_eq!(context.succ(&down), Some(x));
		}
	}

	#[test]
	fn retraction_i16(x in any::<i16>()) {
		let context = Canonical::<i16>::new();
		if let Some(up) = context.succ(&x) {
			prop_assert_eq!(context.pred(&up), Some(x));
		}
		if let Some(down) = context.pred(&x) {
			prop_assert_eq!(context.succ(&down), Some(x));
		}
	}

	#[test]
	fn retraction_char(x in any::<char>()) {
		let context = Canonical::<char>::new();
		if let Some(up) = context.succ(&x) {
			prop_assert_eq!(context.pred(&up), Some(x));
		}
		if let Some(down) = context.pred(&x) {
			prop_assert_eq!(context.succ(&down), Some(x));
		}
	}

	#[test]
	fn index_round_trip_u8(x in any::<u8>()) {
		let context = Canonical::<u8>::new();
		prop_assert_eq!(context.to_enum(context.from_enum(&x)), Some(x));
	}

	#[test]
	fn index_round_trip_char(x in any::<char>()) {
		let context = Canonical::<char>::new();
		prop_assert_eq!(context.to_enum(context.from_enum(&x)), Some(x));
	}

	#[test]
	fn valid_indices_round_trip_i16(n in 0i64..65536) {
		let context = Canonical::<i16>::new();
		let value = context.to_enum(n);
		prop_assert!(value.is_some());
		prop_assert_eq!(context.from_enum(&value.unwrap()), n);
	}

	#[test]
	fn out_of_range_indices_are_absent(n in 65536i64..i64::MAX) {
		let context = Canonical::<i16>::new();
		prop_assert_eq!(context.to_enum(n), None);
		prop_assert_eq!(context.to_enum(-n), None);
	}

	// An ascending set of distinct values is exactly the input a constant
	// enumeration is specified for; on it, every law must hold.
	#[test]
	fn const_enum_obeys_the_laws(set in prop::collection::btree_set(any::<u8>(), 1..20)) {
		let values: Vec<u8> = set.into_iter().collect();
		let context = ConstEnum::new(values.clone()).unwrap();

		let walked: Vec<u8> = universe(&context).collect();
		prop_assert_eq!(&walked, &values);

		let indices: Vec<i64> = walked.iter().map(|v| context.from_enum(v)).collect();
		let expected: Vec<i64> = (0..values.len() as i64).collect();
		prop_assert_eq!(indices, expected);

		prop_assert_eq!(default_cardinality(&context), context.cardinality());
		prop_assert_eq!(context.bottom(), values[0]);
		prop_assert_eq!(context.top(), values[values.len() - 1]);

		for v in &values {
			if let Some(up) = context.succ(v) {
				prop_assert_eq!(context.pred(&up), Some(*v));
			}
			prop_assert_eq!(context.to_enum(context.from_enum(v)), Some(*v));
		}
	}

	// Identical arguments, identical results: the algorithms are pure.
	#[test]
	fn progressions_are_deterministic(start in any::<i8>(), second in any::<i8>(), limit in any::<i8>()) {
		let context = Canonical::<i8>::new();
		let a: Vec<i8> = finite_enum::from_then_to(&context, start, &second, &limit).collect();
		let b: Vec<i8> = finite_enum::from_then_to(&context, start, &second, &limit).collect();
		prop_assert_eq!(&a, &b);
		prop_assert!(!a.is_empty());
	}
}
