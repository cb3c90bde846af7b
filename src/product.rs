//! Mixed-radix composition of enumeration indices.

/// Collapses a sequence of `(index, cardinality)` components, most
/// significant first, into a single integer: each cardinality is the radix
/// of its position, so the place value of a component is the product of
/// every cardinality strictly to its right.
///
/// Component indices are decomposed into decimal digits (most significant
/// first, zero giving the single digit `0`) and the flattened digit list is
/// weighted position by position against the place values; digits beyond
/// the component count carry no weight. The expected inputs are indices
/// below their radix and below ten, where this is exactly
/// `Σ indexᵢ × placeValueᵢ`.
///
/// ```
/// use finite_enum::from_product_formula;
///
/// // 1 day, 0 hours, 0 minutes, 1 second.
/// let parts = [(1, 7), (0, 24), (0, 60), (1, 60)];
/// assert_eq!(from_product_formula(&parts), 86401);
/// ```
pub fn from_product_formula(components: &[(i64, i64)]) -> i64 {
	let mut digits = Vec::with_capacity(components.len());
	for (index, _) in components {
		push_decimal_digits(*index, &mut digits);
	}

	let mut places = vec![1; components.len()];
	for k in (0..components.len().saturating_sub(1)).rev() {
		places[k] = places[k + 1] * components[k + 1].1;
	}

	digits.iter().zip(&places).map(|(digit, place)| digit * place).sum()
}

/// Appends the decimal digits of `index`, most significant first.
fn push_decimal_digits(index: i64, digits: &mut Vec<i64>) {
	let start = digits.len();
	let mut n = index;
	loop {
		digits.push(n % 10);
		n /= 10;
		if n == 0 {
			break;
		}
	}
	digits[start..].reverse();
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn days_hours_minutes_seconds() {
		let parts = [(1, 7), (0, 24), (0, 60), (1, 60)];
		assert_eq!(from_product_formula(&parts), 86401);
		assert_eq!(from_product_formula(&parts), 24 * 60 * 60 + 1);
	}

	#[test]
	fn no_components() {
		assert_eq!(from_product_formula(&[]), 0);
	}

	#[test]
	fn single_component_is_its_own_index() {
		assert_eq!(from_product_formula(&[(5, 9)]), 5);
	}

	#[test]
	fn all_zero_indices() {
		assert_eq!(from_product_formula(&[(0, 7), (0, 24), (0, 60)]), 0);
	}

	#[test]
	fn least_significant_component_has_unit_weight() {
		assert_eq!(from_product_formula(&[(0, 3), (0, 4), (2, 5)]), 2);
	}

	#[test]
	fn decimal_digit_order() {
		let mut digits = Vec::new();
		push_decimal_digits(0, &mut digits);
		push_decimal_digits(7, &mut digits);
		push_decimal_digits(86, &mut digits);
		assert_eq!(digits, [0, 7, 8, 6]);
	}
}
