use std::iter::FusedIterator;

use crate::Enum;

/// Ascending `succ` chain, produced by [`up_from_excl`] and [`up_from_incl`].
pub struct UpFrom<'a, E: Enum + ?Sized> {
	context: &'a E,
	cursor: Option<E::Item>,
}

impl<'a, E: Enum + ?Sized> Iterator for UpFrom<'a, E> {
	type Item = E::Item;

	fn next(&mut self) -> Option<E::Item> {
		let value = self.cursor.take()?;
		self.cursor = self.context.succ(&value);
		Some(value)
	}
}

impl<'a, E: Enum + ?Sized> FusedIterator for UpFrom<'a, E> {}

/// Descending `pred` chain, produced by [`down_from_excl`] and
/// [`down_from_incl`].
pub struct DownFrom<'a, E: Enum + ?Sized> {
	context: &'a E,
	cursor: Option<E::Item>,
}

impl<'a, E: Enum + ?Sized> Iterator for DownFrom<'a, E> {
	type Item = E::Item;

	fn next(&mut self) -> Option<E::Item> {
		let value = self.cursor.take()?;
		self.cursor = self.context.pred(&value);
		Some(value)
	}
}

impl<'a, E: Enum + ?Sized> FusedIterator for DownFrom<'a, E> {}

/// Everything strictly above `start`, ascending. Empty when `start` is the
/// top.
///
/// ```
/// use finite_enum::{up_from_excl, Canonical};
///
/// let bools = Canonical::<bool>::new();
/// assert_eq!(up_from_excl(&bools, &true).count(), 0);
/// ```
pub fn up_from_excl<'a, E: Enum + ?Sized>(context: &'a E, start: &E::Item) -> UpFrom<'a, E> {
	UpFrom {
		context,
		cursor: context.succ(start),
	}
}

/// `start` and everything above it, ascending. Never empty.
///
/// ```
/// use finite_enum::{up_from_incl, Canonical};
///
/// let bools = Canonical::<bool>::new();
/// let all: Vec<bool> = up_from_incl(&bools, false).collect();
/// assert_eq!(all, [false, true]);
/// ```
pub fn up_from_incl<E: Enum + ?Sized>(context: &E, start: E::Item) -> UpFrom<'_, E> {
	UpFrom {
		context,
		cursor: Some(start),
	}
}

/// Everything strictly below `start`, descending. Empty when `start` is the
/// bottom.
pub fn down_from_excl<'a, E: Enum + ?Sized>(context: &'a E, start: &E::Item) -> DownFrom<'a, E> {
	DownFrom {
		context,
		cursor: context.pred(start),
	}
}

/// `start` and everything below it, descending. Never empty.
pub fn down_from_incl<E: Enum + ?Sized>(context: &E, start: E::Item) -> DownFrom<'_, E> {
	DownFrom {
		context,
		cursor: Some(start),
	}
}
